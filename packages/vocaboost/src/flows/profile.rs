//! 个人页面：本地统计汇总
//!
//! 每次激活都从本地存储重新读取，只做派生显示，不修改任何记录。

use crate::flows::{FlowResult, Notice};
use crate::models::accuracy_percent;
use crate::storage::LocalStore;

/// 个人页显示的汇总数据
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileSummary {
    /// 本地单词列表长度
    pub total_words: usize,
    /// 累计答题数
    pub practice_count: u64,
    /// 累计答对数
    pub correct_answers: u64,
    /// 正确率百分比 `[0, 100]`
    pub accuracy: u8,
}

pub struct ProfileFlow {
    store: LocalStore,
    summary: ProfileSummary,
}

impl ProfileFlow {
    pub fn new(store: LocalStore) -> Self {
        Self {
            store,
            summary: ProfileSummary::default(),
        }
    }

    pub fn summary(&self) -> ProfileSummary {
        self.summary
    }

    /// 页面激活：重新读取两个本地记录
    ///
    /// 读取失败时保留上一次的汇总并返回提示。
    pub fn on_activate(&mut self) -> Option<Notice> {
        match self.load() {
            Ok(summary) => {
                self.summary = summary;
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "loading profile failed");
                Some(Notice::ProfileUnavailable)
            }
        }
    }

    fn load(&self) -> FlowResult<ProfileSummary> {
        let total_words = self.store.words()?.len();
        let stats = self.store.practice_stats()?;

        Ok(ProfileSummary {
            total_words,
            practice_count: stats.count,
            correct_answers: stats.correct,
            accuracy: accuracy_percent(stats.correct, stats.count),
        })
    }
}
