//! 远端词汇服务
//!
//! 只通过三个操作访问外部服务：创建单词、列出单词、列出练习题。
//! 失败不重试、不设超时，调用方看到的是显式的结果类型：
//! 传输错误 / 非 2xx 状态 / 响应解析失败。

pub mod client;

pub use client::HttpWordService;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{PracticeQuestion, Word};

// ============================================================
// 错误类型定义
// ============================================================

/// 远端操作错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("网络错误: {0}")]
    Network(String),

    #[error("服务端返回 {status}: {body}")]
    Status { status: u16, body: String },

    #[error("响应解析失败: {0}")]
    Decode(String),
}

impl RemoteError {
    /// 日志里使用的简短分类
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
        }
    }
}

pub type RemoteResult<T> = Result<T, RemoteError>;

// ============================================================
// WordService - 远端服务接口
// ============================================================

/// 远端词汇服务能力
#[async_trait]
pub trait WordService: Send + Sync {
    /// `POST /words`
    ///
    /// 服务端只返回确认消息时，返回提交的单词（没有 id）。
    async fn create_word(&self, word: &Word) -> RemoteResult<Word>;

    /// `GET /words`
    async fn list_words(&self) -> RemoteResult<Vec<Word>>;

    /// `GET /practice`
    async fn list_practice_questions(&self) -> RemoteResult<Vec<PracticeQuestion>>;
}
