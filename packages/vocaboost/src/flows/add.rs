//! 添加单词页面
//!
//! 校验输入，提交到远端，成功后镜像到本地单词列表并跳转到学习页。
//! 没有防重复提交：快速连按会发出两次创建请求。

use std::sync::Arc;

use crate::flows::{Destination, FlowResult, Notice};
use crate::models::Word;
use crate::remote::WordService;
use crate::storage::LocalStore;

/// 三个输入框
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordForm {
    pub word: String,
    pub meaning: String,
    pub example: String,
}

impl WordForm {
    pub fn new(
        word: impl Into<String>,
        meaning: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            example: example.into(),
        }
    }

    /// 三个字段都非空
    pub fn is_complete(&self) -> bool {
        !self.word.is_empty() && !self.meaning.is_empty() && !self.example.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn to_word(&self) -> Word {
        Word::new(self.word.clone(), self.meaning.clone(), self.example.clone())
    }
}

/// 提交结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// 本地校验失败，未发起网络请求
    Rejected(Notice),
    /// 远端或本地写入失败，输入保留
    Failed(Notice),
    /// 已添加，输入已清空
    Added {
        word: Word,
        local_total: usize,
        notice: Notice,
        navigate_to: Destination,
    },
}

pub struct AddFlow {
    service: Arc<dyn WordService>,
    store: LocalStore,
    form: WordForm,
}

impl AddFlow {
    pub fn new(service: Arc<dyn WordService>, store: LocalStore) -> Self {
        Self {
            service,
            store,
            form: WordForm::default(),
        }
    }

    pub fn form(&self) -> &WordForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut WordForm {
        &mut self.form
    }

    pub fn set_word(&mut self, value: impl Into<String>) {
        self.form.word = value.into();
    }

    pub fn set_meaning(&mut self, value: impl Into<String>) {
        self.form.meaning = value.into();
    }

    pub fn set_example(&mut self, value: impl Into<String>) {
        self.form.example = value.into();
    }

    /// 提交当前输入
    pub async fn submit(&mut self) -> AddOutcome {
        if !self.form.is_complete() {
            return AddOutcome::Rejected(Notice::MissingFields);
        }

        let word = self.form.to_word();
        match self.create_and_mirror(&word).await {
            Ok(local_total) => {
                self.form.clear();
                tracing::info!(word = %word.word, local_total, "word added");
                AddOutcome::Added {
                    word,
                    local_total,
                    notice: Notice::WordAdded,
                    navigate_to: Destination::Learn,
                }
            }
            Err(err) => {
                tracing::warn!(word = %word.word, error = %err, "add word failed");
                AddOutcome::Failed(Notice::AddFailed)
            }
        }
    }

    /// 远端创建成功后才写本地；远端失败不触碰本地存储
    async fn create_and_mirror(&self, word: &Word) -> FlowResult<usize> {
        let created = self.service.create_word(word).await?;
        tracing::debug!(id = ?created.id, "remote word created");

        Ok(self.store.append_word(word)?)
    }
}
