//! 页面流程
//!
//! 每个页面一个 Flow，持有该页面的会话状态（当前索引、得分、选择等），
//! 页面卸载后丢弃，下次进入重新构建。所有提示都是一次性的，不落盘。

pub mod add;
pub mod home;
pub mod learn;
pub mod practice;
pub mod profile;

pub use add::{AddFlow, AddOutcome, WordForm};
pub use home::{HomeAction, HOME_ACTIONS};
pub use learn::{LearnFlow, LearnState};
pub use practice::{OptionMark, PracticeFlow, PracticeState, Selection};
pub use profile::{ProfileFlow, ProfileSummary};

use std::fmt;

use thiserror::Error;

use crate::remote::RemoteError;
use crate::storage::StorageError;

// ============================================================
// 错误类型定义
// ============================================================

/// 页面流程错误
#[derive(Error, Debug)]
pub enum FlowError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type FlowResult<T> = Result<T, FlowError>;

// ============================================================
// Destination - 导航目标
// ============================================================

/// 五个顶层页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    Learn,
    Add,
    Practice,
    Profile,
}

impl Destination {
    pub const ALL: [Destination; 5] = [
        Destination::Home,
        Destination::Learn,
        Destination::Add,
        Destination::Practice,
        Destination::Profile,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Learn => "Learn",
            Self::Add => "Add",
            Self::Practice => "Practice",
            Self::Profile => "Profile",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ============================================================
// Notice - 一次性提示
// ============================================================

/// 页面操作产生的一次性提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// 必填字段缺失，未发起网络请求
    MissingFields,
    /// 单词已添加
    WordAdded,
    /// 添加失败（远端或本地写入失败）
    AddFailed,
    /// 加载单词失败
    WordsUnavailable,
    /// 加载练习题失败
    PracticeUnavailable,
    /// 读取本地统计失败
    ProfileUnavailable,
    /// 练习结果未能保存
    StatsNotSaved,
    /// "标记已学会"，没有持久化效果
    MarkedLearned(String),
    /// "收藏"，没有持久化效果
    Favorited(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => f.write_str("Please fill all fields!"),
            Self::WordAdded => f.write_str("Word added successfully!"),
            Self::AddFailed => f.write_str("Failed to add word."),
            Self::WordsUnavailable => f.write_str("Could not load words."),
            Self::PracticeUnavailable => f.write_str("Could not load practice questions."),
            Self::ProfileUnavailable => f.write_str("Could not load your stats."),
            Self::StatsNotSaved => f.write_str("Practice result could not be saved."),
            Self::MarkedLearned(word) => write!(f, "You learned \"{}\"!", word),
            Self::Favorited(word) => write!(f, "\"{}\" added to favorites!", word),
        }
    }
}
