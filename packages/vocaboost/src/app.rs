//! 页面导航
//!
//! 持有全部页面流程和当前页面，按标签页导航器的方式触发生命周期：
//! - 学习页、个人页：每次进入都触发 `on_activate`
//! - 练习页：只在第一次进入（挂载）时触发 `on_mount`
//!
//! 标签页挂载后不会卸载，所以练习会话在来回切换页面时保留。

use std::sync::Arc;
use std::time::Duration;

use crate::flows::{
    AddFlow, AddOutcome, Destination, LearnFlow, Notice, PracticeFlow, ProfileFlow,
};
use crate::remote::WordService;
use crate::storage::LocalStore;

pub struct VocabApp {
    current: Destination,
    practice_mounted: bool,
    pub add: AddFlow,
    pub learn: LearnFlow,
    pub practice: PracticeFlow,
    pub profile: ProfileFlow,
}

impl VocabApp {
    pub fn new(service: Arc<dyn WordService>, store: LocalStore, settle_delay: Duration) -> Self {
        Self {
            current: Destination::Home,
            practice_mounted: false,
            add: AddFlow::new(Arc::clone(&service), store.clone()),
            learn: LearnFlow::new(Arc::clone(&service)),
            practice: PracticeFlow::new(service, store.clone()).with_settle_delay(settle_delay),
            profile: ProfileFlow::new(store),
        }
    }

    pub fn current(&self) -> Destination {
        self.current
    }

    /// 切换到目标页面，返回生命周期钩子产生的提示
    pub async fn navigate(&mut self, destination: Destination) -> Option<Notice> {
        tracing::debug!(from = %self.current, to = %destination, "navigate");
        self.current = destination;

        match destination {
            Destination::Learn => self.learn.on_activate().await,
            Destination::Profile => self.profile.on_activate(),
            Destination::Practice if !self.practice_mounted => {
                self.practice_mounted = true;
                self.practice.on_mount().await
            }
            _ => None,
        }
    }

    /// 提交添加页的输入；成功时跳转到学习页
    ///
    /// 返回提交结果以及跳转时学习页产生的提示。
    pub async fn submit_word(&mut self) -> (AddOutcome, Option<Notice>) {
        let outcome = self.add.submit().await;

        let follow_up = match &outcome {
            AddOutcome::Added { navigate_to, .. } => self.navigate(*navigate_to).await,
            _ => None,
        };

        (outcome, follow_up)
    }
}
