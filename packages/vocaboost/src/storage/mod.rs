//! 本地持久化存储模块
//!
//! 提供进程级的键值存储，支持：
//! - 本地添加单词列表 (`words`) 的持久化
//! - 累计练习统计 (`practiceStats`) 的持久化
//!
//! 键值层只负责按键读写序列化后的字符串；类型化的记录由 [`LocalStore`] 提供。
//! 多个键之间没有事务，读-改-写也不是原子的，并发写入同一个键时后写者覆盖先写者。

// ============================================================
// 子模块声明
// ============================================================

pub mod memory;
pub mod migrations;
pub mod sqlite;

// ============================================================
// 重新导出主要类型
// ============================================================

pub use memory::MemoryStore;
pub use migrations::run_migrations;
pub use sqlite::SqliteStore;

// ============================================================
// 依赖导入
// ============================================================

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{PracticeStats, Word};

/// 本地单词列表的键
pub const WORDS_KEY: &str = "words";
/// 练习统计的键
pub const PRACTICE_STATS_KEY: &str = "practiceStats";

// ============================================================
// 错误类型定义
// ============================================================

/// 存储模块错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("数据库错误: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("迁移错误: {0}")]
    Migration(String),

    #[error("序列化错误: {0}")]
    Serialization(String),

    #[error("存储记录损坏 [{key}]: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("锁获取失败: {0}")]
    LockError(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

// ============================================================
// KeyValueStore - 键值存储接口
// ============================================================

/// 键值存储能力：按键读取/写入序列化后的值
///
/// 不存在的键返回 `Ok(None)`，这不是错误。
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

// ============================================================
// LocalStore - 类型化的本地记录
// ============================================================

/// 在键值存储之上提供两个逻辑记录：`words` 和 `practiceStats`
///
/// 克隆开销很小，各个页面持有同一个底层存储的句柄。
#[derive(Clone)]
pub struct LocalStore {
    kv: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStore").finish_non_exhaustive()
    }
}

impl LocalStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// 使用内存存储（测试或临时运行）
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// 底层键值存储
    pub fn kv(&self) -> &Arc<dyn KeyValueStore> {
        &self.kv
    }

    // ========== words ==========

    /// 读取本地单词列表，不存在时返回空列表
    pub fn words(&self) -> StorageResult<Vec<Word>> {
        Ok(self.read_json(WORDS_KEY)?.unwrap_or_default())
    }

    /// 追加一个单词，返回追加后的列表长度
    ///
    /// 整个列表读出、追加、写回；与其他写入者并发时后写者覆盖先写者。
    pub fn append_word(&self, word: &Word) -> StorageResult<usize> {
        let mut words = self.words()?;
        words.push(word.without_id());
        self.write_json(WORDS_KEY, &words)?;

        tracing::debug!(total = words.len(), word = %word.word, "local word appended");
        Ok(words.len())
    }

    // ========== practiceStats ==========

    /// 读取练习统计，不存在时返回 `{0, 0}`
    pub fn practice_stats(&self) -> StorageResult<PracticeStats> {
        Ok(self.read_json(PRACTICE_STATS_KEY)?.unwrap_or_default())
    }

    /// 把一次练习的结果累加进统计，返回写回后的统计
    pub fn record_practice(&self, total: u64, correct: u64) -> StorageResult<PracticeStats> {
        let mut stats = self.practice_stats()?;
        stats.record_session(total, correct);
        self.write_json(PRACTICE_STATS_KEY, &stats)?;

        tracing::debug!(
            count = stats.count,
            correct = stats.correct,
            "practice stats updated"
        );
        Ok(stats)
    }

    // ========== JSON 辅助 ==========

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let Some(raw) = self.kv.get(key)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let raw =
            serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.kv.set(key, &raw)
    }
}
