use std::path::PathBuf;
use std::time::Duration;

use crate::flows::practice::DEFAULT_SETTLE_DELAY;

/// 本地存储后端
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite(PathBuf),
    Memory,
}

impl StoreBackend {
    /// 解析 `VOCAB_STORE` 的取值；无法识别时返回 None
    pub fn parse(value: &str, db_path: PathBuf) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Some(Self::Sqlite(db_path)),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub store: StoreBackend,
    pub settle_delay: Duration,
    pub log_level: String,
    /// 文件日志目录，未开启文件日志时为 None
    pub file_log_dir: Option<PathBuf>,
    /// 无法识别而被忽略的 `VOCAB_STORE` 取值
    pub ignored_store_setting: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var("VOCAB_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

        let db_path = std::env::var("VOCAB_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data/vocaboost.db"));

        let (store, ignored_store_setting) =
            resolve_store(std::env::var("VOCAB_STORE").ok(), db_path);

        let settle_delay = std::env::var("VOCAB_SETTLE_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SETTLE_DELAY);

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let file_log_dir = std::env::var("ENABLE_FILE_LOGS")
            .ok()
            .filter(|value| flag_enabled(value))
            .map(|_| {
                std::env::var("LOG_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("./logs"))
            });

        Self {
            api_base_url,
            store,
            settle_delay,
            log_level,
            file_log_dir,
            ignored_store_setting,
        }
    }

    /// 记录生效的配置；读取环境变量时日志尚未初始化，有问题的取值在这里补报
    pub fn log_startup(&self) {
        if let Some(value) = &self.ignored_store_setting {
            tracing::warn!(
                value = %value,
                store = ?self.store,
                "unrecognized VOCAB_STORE value, expected `sqlite` or `memory`"
            );
        }

        tracing::info!(
            api_base_url = %self.api_base_url,
            store = ?self.store,
            settle_delay_ms = self.settle_delay.as_millis() as u64,
            "configuration loaded"
        );
    }
}

/// 未设置时使用 SQLite；无法识别的取值也回落到 SQLite，并带回原值以便告警
fn resolve_store(value: Option<String>, db_path: PathBuf) -> (StoreBackend, Option<String>) {
    match value {
        None => (StoreBackend::Sqlite(db_path), None),
        Some(value) => match StoreBackend::parse(&value, db_path.clone()) {
            Some(store) => (store, None),
            None => (StoreBackend::Sqlite(db_path), Some(value)),
        },
    }
}

fn flag_enabled(value: &str) -> bool {
    value == "true" || value == "1"
}
