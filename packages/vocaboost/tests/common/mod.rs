#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use vocaboost::models::{PracticeQuestion, Word};
use vocaboost::remote::{RemoteError, RemoteResult, WordService};

/// 内存里的假远端服务，记录调用次数并可注入失败
#[derive(Default)]
pub struct FakeWordService {
    pub words: Mutex<Vec<Word>>,
    pub questions: Mutex<Vec<PracticeQuestion>>,
    pub fail_create: Mutex<bool>,
    pub fail_list: Mutex<bool>,
    pub fail_practice: Mutex<bool>,
    pub create_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub practice_calls: AtomicUsize,
}

impl FakeWordService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_words(words: Vec<Word>) -> Arc<Self> {
        let service = Self::default();
        *service.words.lock() = words;
        Arc::new(service)
    }

    pub fn with_questions(questions: Vec<PracticeQuestion>) -> Arc<Self> {
        let service = Self::default();
        *service.questions.lock() = questions;
        Arc::new(service)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn practice_calls(&self) -> usize {
        self.practice_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WordService for FakeWordService {
    async fn create_word(&self, word: &Word) -> RemoteResult<Word> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_create.lock() {
            return Err(RemoteError::Network("connection refused".into()));
        }

        let mut words = self.words.lock();
        let created = Word {
            id: Some(words.len() as u64 + 1),
            ..word.clone()
        };
        words.push(created.clone());
        Ok(created)
    }

    async fn list_words(&self) -> RemoteResult<Vec<Word>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_list.lock() {
            return Err(RemoteError::Status {
                status: 500,
                body: "boom".into(),
            });
        }
        Ok(self.words.lock().clone())
    }

    async fn list_practice_questions(&self) -> RemoteResult<Vec<PracticeQuestion>> {
        self.practice_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_practice.lock() {
            return Err(RemoteError::Decode("expected array".into()));
        }
        Ok(self.questions.lock().clone())
    }
}

pub fn sample_words() -> Vec<Word> {
    vec![
        Word {
            id: Some(1),
            ..Word::new("Cat", "Cat is a pet animal", "I have a cat")
        },
        Word {
            id: Some(2),
            ..Word::new("Peacock", "Peacock is a bird", "Peacock is our national bird")
        },
        Word {
            id: Some(3),
            ..Word::new("Resilient", "Able to recover quickly", "She is resilient")
        },
    ]
}

/// `n` 道题，正确答案是第一个选项
pub fn sample_questions(n: usize) -> Vec<PracticeQuestion> {
    (0..n)
        .map(|i| PracticeQuestion {
            word: format!("word-{i}"),
            options: vec![
                format!("right-{i}"),
                format!("wrong-a-{i}"),
                format!("wrong-b-{i}"),
                format!("wrong-c-{i}"),
            ],
            answer: format!("right-{i}"),
        })
        .collect()
}
