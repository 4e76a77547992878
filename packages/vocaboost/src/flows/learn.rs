//! 学习页面（单词卡片）
//!
//! 每次页面激活都重新拉取单词列表，整体替换并把索引重置为 0，
//! 不与之前显示的数据做差异比较。浏览位置不持久化。

use std::sync::Arc;

use crate::flows::Notice;
use crate::models::Word;
use crate::remote::WordService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnState {
    Loading,
    /// 没有单词
    Empty,
    /// 正在显示第 `index` 张卡片
    Ready { index: usize },
}

pub struct LearnFlow {
    service: Arc<dyn WordService>,
    words: Vec<Word>,
    state: LearnState,
}

impl LearnFlow {
    pub fn new(service: Arc<dyn WordService>) -> Self {
        Self {
            service,
            words: Vec::new(),
            state: LearnState::Loading,
        }
    }

    pub fn state(&self) -> LearnState {
        self.state
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// 当前卡片，只有 `Ready` 状态下才有
    pub fn current_word(&self) -> Option<&Word> {
        match self.state {
            LearnState::Ready { index } => self.words.get(index),
            _ => None,
        }
    }

    /// 页面激活：重新拉取单词
    ///
    /// 失败时保留之前显示的单词和位置，并返回一次性提示。
    pub async fn on_activate(&mut self) -> Option<Notice> {
        let previous = self.state;
        self.state = LearnState::Loading;

        match self.service.list_words().await {
            Ok(words) => {
                tracing::debug!(count = words.len(), "words loaded");
                self.words = words;
                self.state = if self.words.is_empty() {
                    LearnState::Empty
                } else {
                    LearnState::Ready { index: 0 }
                };
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, kind = err.kind(), "list words failed");
                self.state = match previous {
                    LearnState::Ready { .. } if !self.words.is_empty() => previous,
                    _ => LearnState::Empty,
                };
                Some(Notice::WordsUnavailable)
            }
        }
    }

    /// 下一张，已在最后一张时不动；返回索引是否变化
    pub fn next(&mut self) -> bool {
        match self.state {
            LearnState::Ready { index } if index + 1 < self.words.len() => {
                self.state = LearnState::Ready { index: index + 1 };
                true
            }
            _ => false,
        }
    }

    /// 上一张，已在第一张时不动；返回索引是否变化
    pub fn previous(&mut self) -> bool {
        match self.state {
            LearnState::Ready { index } if index > 0 => {
                self.state = LearnState::Ready { index: index - 1 };
                true
            }
            _ => false,
        }
    }

    /// 仅提示，不写任何存储
    pub fn mark_learned(&self) -> Option<Notice> {
        self.current_word()
            .map(|word| Notice::MarkedLearned(word.word.clone()))
    }

    /// 仅提示，不写任何存储
    pub fn favorite(&self) -> Option<Notice> {
        self.current_word()
            .map(|word| Notice::Favorited(word.word.clone()))
    }
}
