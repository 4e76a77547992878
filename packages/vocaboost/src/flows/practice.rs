//! 练习页面（选择题）
//!
//! 只在挂载时拉取题目（不同于学习页和个人页的每次激活都刷新）。
//! 每题只接受一次选择；短暂停留后进入下一题，全部答完时
//! 把本次结果累加进本地练习统计，且只累加一次。

use std::sync::Arc;
use std::time::Duration;

use crate::flows::Notice;
use crate::models::PracticeQuestion;
use crate::remote::WordService;
use crate::storage::LocalStore;

/// 选择后进入下一题前的停留时间
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PracticeState {
    Loading,
    /// 没有题目（服务端返回空列表或加载失败）
    Empty,
    InProgress {
        index: usize,
        score: usize,
        /// 当前题目已选择、尚未进入下一题的选项
        selection: Option<String>,
    },
    Completed {
        score: usize,
        total: usize,
    },
}

/// 一次选择的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Accepted { correct: bool },
    /// 已有待处理的选择、选项不存在或不在答题状态
    Ignored,
}

/// 选项的显示标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Correct,
    Wrong,
}

pub struct PracticeFlow {
    service: Arc<dyn WordService>,
    store: LocalStore,
    settle_delay: Duration,
    questions: Vec<PracticeQuestion>,
    state: PracticeState,
}

impl PracticeFlow {
    pub fn new(service: Arc<dyn WordService>, store: LocalStore) -> Self {
        Self {
            service,
            store,
            settle_delay: DEFAULT_SETTLE_DELAY,
            questions: Vec::new(),
            state: PracticeState::Loading,
        }
    }

    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn state(&self) -> &PracticeState {
        &self.state
    }

    pub fn questions(&self) -> &[PracticeQuestion] {
        &self.questions
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// 当前题目
    pub fn current_question(&self) -> Option<&PracticeQuestion> {
        match self.state {
            PracticeState::InProgress { index, .. } => self.questions.get(index),
            _ => None,
        }
    }

    /// 页面挂载：重置为 Loading 并拉取题目
    pub async fn on_mount(&mut self) -> Option<Notice> {
        self.state = PracticeState::Loading;

        match self.service.list_practice_questions().await {
            Ok(questions) => {
                tracing::debug!(count = questions.len(), "practice questions loaded");
                self.questions = questions;
                self.state = if self.questions.is_empty() {
                    PracticeState::Empty
                } else {
                    PracticeState::InProgress {
                        index: 0,
                        score: 0,
                        selection: None,
                    }
                };
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, kind = err.kind(), "list practice questions failed");
                self.questions.clear();
                self.state = PracticeState::Empty;
                Some(Notice::PracticeUnavailable)
            }
        }
    }

    /// 选择一个选项
    ///
    /// 只有当前题目没有待处理的选择时才接受；答案比较区分大小写。
    pub fn select(&mut self, option: &str) -> Selection {
        let PracticeState::InProgress {
            index,
            score,
            selection,
        } = &mut self.state
        else {
            return Selection::Ignored;
        };

        if selection.is_some() {
            return Selection::Ignored;
        }

        let Some(question) = self.questions.get(*index) else {
            return Selection::Ignored;
        };
        if !question.options.iter().any(|o| o == option) {
            return Selection::Ignored;
        }

        let correct = question.is_correct(option);
        if correct {
            *score += 1;
        }
        *selection = Some(option.to_string());

        Selection::Accepted { correct }
    }

    /// 按 1 开始的序号选择当前题目的选项
    pub fn select_number(&mut self, number: usize) -> Selection {
        let option = self
            .current_question()
            .and_then(|q| number.checked_sub(1).and_then(|i| q.options.get(i)))
            .cloned();

        match option {
            Some(option) => self.select(&option),
            None => Selection::Ignored,
        }
    }

    /// 进入下一题；最后一题之后进入 Completed 并保存统计
    ///
    /// 没有待处理的选择时不做任何事。
    pub fn advance(&mut self) -> Option<Notice> {
        let PracticeState::InProgress {
            index,
            score,
            selection: Some(_),
        } = self.state
        else {
            return None;
        };

        let next = index + 1;
        if next < self.questions.len() {
            self.state = PracticeState::InProgress {
                index: next,
                score,
                selection: None,
            };
            return None;
        }

        let total = self.questions.len();
        self.state = PracticeState::Completed { score, total };
        tracing::info!(score, total, "practice session completed");

        self.save_stats(total, score)
    }

    /// 选择后停留 `settle_delay` 再进入下一题
    pub async fn answer(&mut self, option: &str) -> (Selection, Option<Notice>) {
        let selection = self.select(option);
        if selection == Selection::Ignored {
            return (selection, None);
        }

        tokio::time::sleep(self.settle_delay).await;
        (selection, self.advance())
    }

    /// 完成后重新开始：使用同一组题目，不重新拉取，也不再次写统计
    pub fn restart(&mut self) -> bool {
        if !matches!(self.state, PracticeState::Completed { .. }) || self.questions.is_empty() {
            return false;
        }

        self.state = PracticeState::InProgress {
            index: 0,
            score: 0,
            selection: None,
        };
        true
    }

    /// 当前题目各选项的显示标记
    ///
    /// 选择之后才揭示正确答案和选错的选项。
    pub fn option_marks(&self) -> Vec<(&str, OptionMark)> {
        let PracticeState::InProgress { selection, .. } = &self.state else {
            return Vec::new();
        };
        let Some(question) = self.current_question() else {
            return Vec::new();
        };

        question
            .options
            .iter()
            .map(|option| {
                let mark = match selection {
                    Some(_) if question.is_correct(option) => OptionMark::Correct,
                    Some(picked) if picked == option => OptionMark::Wrong,
                    _ => OptionMark::Neutral,
                };
                (option.as_str(), mark)
            })
            .collect()
    }

    fn save_stats(&self, total: usize, score: usize) -> Option<Notice> {
        match self.store.record_practice(total as u64, score as u64) {
            Ok(_) => None,
            Err(err) => {
                tracing::warn!(error = %err, "saving practice stats failed");
                Some(Notice::StatsNotSaved)
            }
        }
    }
}
