//! VocaBoost 客户端核心
//!
//! 本地持久化存储、远端词汇服务客户端，以及各页面的会话状态与数据一致性逻辑。

pub mod app;
pub mod config;
pub mod flows;
pub mod logging;
pub mod models;
pub mod remote;
pub mod storage;
pub mod terminal;

use std::sync::Arc;

use crate::config::{Config, StoreBackend};
use crate::storage::{KeyValueStore, LocalStore, MemoryStore, SqliteStore, StorageResult};

/// 按配置打开本地存储
pub fn open_store(config: &Config) -> StorageResult<LocalStore> {
    let kv: Arc<dyn KeyValueStore> = match &config.store {
        StoreBackend::Sqlite(path) => Arc::new(SqliteStore::open(path)?),
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };

    Ok(LocalStore::new(kv))
}
