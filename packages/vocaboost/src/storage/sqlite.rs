//! SQLite 键值存储
//!
//! 单表 `kv_store`，应用重启后数据仍然保留。

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection};

use crate::storage::{migrations, KeyValueStore, StorageError, StorageResult};

/// 基于 SQLite 文件的键值存储
pub struct SqliteStore {
    connection: Mutex<Connection>,
    db_path: String,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}

impl SqliteStore {
    /// 打开（必要时创建）数据库文件并运行迁移
    ///
    /// 父目录不存在时会先创建。
    ///
    /// # Example
    /// ```ignore
    /// let store = SqliteStore::open("./data/vocaboost.db")?;
    /// ```
    pub fn open<P: AsRef<Path>>(db_path: P) -> StorageResult<Self> {
        let path = db_path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let connection = Connection::open(path)?;
        connection.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA synchronous=NORMAL;",
        )?;

        let store = Self {
            connection: Mutex::new(connection),
            db_path: path.to_string_lossy().to_string(),
        };
        store.initialize()?;

        tracing::info!(path = %store.db_path, "local store opened");
        Ok(store)
    }

    /// 创建内存数据库（用于测试）
    pub fn in_memory() -> StorageResult<Self> {
        let store = Self {
            connection: Mutex::new(Connection::open_in_memory()?),
            db_path: ":memory:".to_string(),
        };
        store.initialize()?;
        Ok(store)
    }

    /// 数据库路径
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    fn initialize(&self) -> StorageResult<()> {
        let conn = self.get_conn()?;
        migrations::run_migrations(&conn)?;
        Ok(())
    }

    fn get_conn(&self) -> StorageResult<std::sync::MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|e| StorageError::LockError(e.to_string()))
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let conn = self.get_conn()?;

        let result = conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, chrono::Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }
}
