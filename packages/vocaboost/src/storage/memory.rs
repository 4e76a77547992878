//! 内存键值存储
//!
//! 不跨进程持久化，用于测试以及 `VOCAB_STORE=memory` 的临时运行。

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::storage::{KeyValueStore, StorageResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前保存的键数量
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_overwrite() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("words").unwrap(), None);

        store.set("words", "[]").unwrap();
        store.set("words", "[1]").unwrap();

        assert_eq!(store.get("words").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.len(), 1);
    }
}
