//! Property-Based Tests for practice stats and accuracy
//!
//! Tests the following invariants:
//! - A completed session adds exactly (questions, score) to the stored stats
//! - correct <= count holds before and after every session
//! - Accuracy is always within [0, 100] and 0 when there are no attempts
//! - Repeated selection on one question changes the score at most once

use std::time::Duration;

use proptest::prelude::*;

use vocaboost::flows::{PracticeFlow, PracticeState, Selection};
use vocaboost::models::{accuracy_percent, PracticeStats};
use vocaboost::storage::LocalStore;

mod common;

use common::{sample_questions, FakeWordService};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn prop_accuracy_in_range(correct in 0u64..=10_000, count in 0u64..=10_000) {
        let accuracy = accuracy_percent(correct, count);
        prop_assert!(accuracy <= 100);
        if count == 0 {
            prop_assert_eq!(accuracy, 0);
        }
    }

    #[test]
    fn prop_session_folds_into_stats(
        answers in proptest::collection::vec(any::<bool>(), 1..12),
        prior in (0u64..500).prop_flat_map(|count| (Just(count), 0..=count)),
        repeat_taps in 0usize..3,
    ) {
        let (prior_count, prior_correct) = prior;
        let store = LocalStore::in_memory();
        store.record_practice(prior_count, prior_correct).unwrap();

        let service = FakeWordService::with_questions(sample_questions(answers.len()));
        let mut flow = PracticeFlow::new(service, store.clone()).with_settle_delay(Duration::ZERO);

        runtime().block_on(async {
            flow.on_mount().await;
        });

        for (i, right) in answers.iter().enumerate() {
            let pick = if *right { format!("right-{i}") } else { format!("wrong-b-{i}") };
            prop_assert_eq!(flow.select(&pick), Selection::Accepted { correct: *right });
            for _ in 0..repeat_taps {
                prop_assert_eq!(flow.select(&format!("right-{i}")), Selection::Ignored);
            }
            flow.advance();
        }

        let expected_score = answers.iter().filter(|right| **right).count();
        prop_assert_eq!(
            flow.state(),
            &PracticeState::Completed { score: expected_score, total: answers.len() }
        );

        let stats = store.practice_stats().unwrap();
        prop_assert_eq!(
            stats,
            PracticeStats::new(
                prior_count + answers.len() as u64,
                prior_correct + expected_score as u64
            )
        );
        prop_assert!(stats.correct <= stats.count);
        prop_assert!(stats.accuracy() <= 100);
    }
}
