//! 数据模型定义
//!
//! 定义客户端与远端词汇服务、本地存储之间传递的所有数据结构。

use serde::{Deserialize, Serialize};

// ============================================================
// Word - 单词
// ============================================================

/// 单词
///
/// 远端保存后带有服务端分配的数字 `id`；本地镜像的副本没有 `id`，
/// 两者只通过内容相等对应，不做身份协调。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// 服务端分配的标识（本地副本为 None）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// 单词拼写
    pub word: String,
    /// 释义
    pub meaning: String,
    /// 例句
    pub example: String,
}

impl Word {
    /// 创建尚未持久化到远端的单词
    pub fn new(
        word: impl Into<String>,
        meaning: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            word: word.into(),
            meaning: meaning.into(),
            example: example.into(),
        }
    }

    /// 去掉服务端标识后的副本，用于写入本地单词列表
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}

/// 创建单词的请求体
#[derive(Debug, Clone, Serialize)]
pub struct CreateWordRequest<'a> {
    pub word: &'a str,
    pub meaning: &'a str,
    pub example: &'a str,
}

impl<'a> From<&'a Word> for CreateWordRequest<'a> {
    fn from(word: &'a Word) -> Self {
        Self {
            word: &word.word,
            meaning: &word.meaning,
            example: &word.example,
        }
    }
}

// ============================================================
// PracticeQuestion - 练习题
// ============================================================

/// 选择题，完全由远端提供，客户端从不创建或修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeQuestion {
    /// 题干单词
    pub word: String,
    /// 有序选项（至少两个）
    pub options: Vec<String>,
    /// 正确答案，必须是选项之一
    pub answer: String,
}

impl PracticeQuestion {
    /// 检查题目是否满足约束：至少两个选项，且答案在选项中
    pub fn is_well_formed(&self) -> bool {
        self.options.len() >= 2 && self.options.iter().any(|option| option == &self.answer)
    }

    /// 判断选项是否为正确答案（区分大小写）
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }
}

// ============================================================
// PracticeStats - 累计练习统计
// ============================================================

/// 累计练习统计（持久化）
///
/// 不变量：`correct <= count`。只通过累加修改，从不整体替换。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeStats {
    /// 累计答题数
    pub count: u64,
    /// 累计答对数
    pub correct: u64,
}

impl PracticeStats {
    pub fn new(count: u64, correct: u64) -> Self {
        Self { count, correct }
    }

    /// 累加一次练习的结果
    pub fn record_session(&mut self, total: u64, correct: u64) {
        self.count = self.count.saturating_add(total);
        self.correct = self.correct.saturating_add(correct.min(total));
    }

    /// 正确率百分比，`count == 0` 时为 0，结果限制在 `[0, 100]`
    pub fn accuracy(&self) -> u8 {
        accuracy_percent(self.correct, self.count)
    }
}

/// 四舍五入的正确率百分比
///
/// 用整数运算实现半数进位：`round(correct / count * 100)`。
pub fn accuracy_percent(correct: u64, count: u64) -> u8 {
    if count == 0 {
        return 0;
    }
    let correct = u128::from(correct.min(count));
    let count = u128::from(count);
    let rounded = (correct * 200 + count) / (count * 2);
    rounded.min(100) as u8
}

// ============================================================
// 服务端响应
// ============================================================

/// `POST /words` 的响应：服务端可能返回新单词，也可能只返回确认消息
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CreateWordResponse {
    Created(Word),
    Acknowledged { message: String },
}

/// `GET /` 健康检查响应
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
}
