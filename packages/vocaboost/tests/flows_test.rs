use std::time::Duration;

use vocaboost::app::VocabApp;
use vocaboost::flows::{
    AddFlow, AddOutcome, Destination, LearnFlow, LearnState, Notice, OptionMark, PracticeFlow,
    PracticeState, Selection, WordForm,
};
use vocaboost::models::{PracticeStats, Word};
use vocaboost::storage::LocalStore;

mod common;

use common::{sample_questions, sample_words, FakeWordService};

fn filled_add_flow(service: std::sync::Arc<FakeWordService>, store: LocalStore) -> AddFlow {
    let mut flow = AddFlow::new(service, store);
    flow.set_word("Sun");
    flow.set_meaning("The star of our solar system");
    flow.set_example("Sun gives energy");
    flow
}

// ==================== Add ====================

#[tokio::test]
async fn test_add_success_appends_once_and_clears_inputs() {
    let service = FakeWordService::new();
    let store = LocalStore::in_memory();
    store.record_practice(3, 2).unwrap();
    let mut flow = filled_add_flow(service.clone(), store.clone());

    let outcome = flow.submit().await;

    match outcome {
        AddOutcome::Added {
            word,
            local_total,
            notice,
            navigate_to,
        } => {
            assert_eq!(word, Word::new("Sun", "The star of our solar system", "Sun gives energy"));
            assert_eq!(local_total, 1);
            assert_eq!(notice, Notice::WordAdded);
            assert_eq!(navigate_to, Destination::Learn);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    assert_eq!(store.words().unwrap().len(), 1);
    assert_eq!(store.practice_stats().unwrap(), PracticeStats::new(3, 2));
    assert_eq!(flow.form(), &WordForm::default());
    assert_eq!(service.create_calls(), 1);
}

#[tokio::test]
async fn test_add_missing_field_never_contacts_network() {
    let service = FakeWordService::new();
    let store = LocalStore::in_memory();
    let mut flow = filled_add_flow(service.clone(), store.clone());
    flow.set_example("");

    let outcome = flow.submit().await;

    assert_eq!(outcome, AddOutcome::Rejected(Notice::MissingFields));
    assert_eq!(service.create_calls(), 0);
    assert!(store.words().unwrap().is_empty());
    assert_eq!(flow.form().word, "Sun");
}

#[tokio::test]
async fn test_add_remote_failure_keeps_inputs_and_store() {
    let service = FakeWordService::new();
    *service.fail_create.lock() = true;
    let store = LocalStore::in_memory();
    store.append_word(&Word::new("Cat", "a pet", "I have a cat")).unwrap();
    let mut flow = filled_add_flow(service.clone(), store.clone());

    let outcome = flow.submit().await;

    assert_eq!(outcome, AddOutcome::Failed(Notice::AddFailed));
    assert_eq!(store.words().unwrap().len(), 1);
    assert_eq!(
        flow.form(),
        &WordForm::new("Sun", "The star of our solar system", "Sun gives energy")
    );
}

#[tokio::test]
async fn test_add_double_submit_creates_twice() {
    let service = FakeWordService::new();
    let store = LocalStore::in_memory();
    let mut flow = filled_add_flow(service.clone(), store.clone());

    flow.submit().await;
    *flow.form_mut() = WordForm::new("Sun", "The star of our solar system", "Sun gives energy");
    flow.submit().await;

    assert_eq!(service.create_calls(), 2);
    assert_eq!(store.words().unwrap().len(), 2);
}

// ==================== Learn ====================

#[tokio::test]
async fn test_learn_empty_list_has_no_card() {
    let service = FakeWordService::new();
    let mut flow = LearnFlow::new(service);

    assert_eq!(flow.state(), LearnState::Loading);
    assert_eq!(flow.on_activate().await, None);

    assert_eq!(flow.state(), LearnState::Empty);
    assert!(flow.current_word().is_none());
    assert!(!flow.next());
    assert_eq!(flow.mark_learned(), None);
}

#[tokio::test]
async fn test_learn_navigation_is_bounded() {
    let service = FakeWordService::with_words(sample_words());
    let mut flow = LearnFlow::new(service);
    flow.on_activate().await;

    assert!(!flow.previous());
    assert_eq!(flow.state(), LearnState::Ready { index: 0 });

    assert!(flow.next());
    assert!(flow.next());
    assert!(!flow.next());
    assert_eq!(flow.state(), LearnState::Ready { index: 2 });
    assert_eq!(flow.current_word().unwrap().word, "Resilient");

    assert!(flow.previous());
    assert_eq!(flow.state(), LearnState::Ready { index: 1 });
}

#[tokio::test]
async fn test_learn_refetches_and_resets_index_on_activation() {
    let service = FakeWordService::with_words(sample_words());
    let mut flow = LearnFlow::new(service.clone());
    flow.on_activate().await;
    flow.next();
    flow.next();

    service
        .words
        .lock()
        .push(Word::new("Sun", "The star of our solar system", "Sun gives energy"));
    flow.on_activate().await;

    assert_eq!(service.list_calls(), 2);
    assert_eq!(flow.words().len(), 4);
    assert_eq!(flow.state(), LearnState::Ready { index: 0 });
}

#[tokio::test]
async fn test_learn_failure_keeps_previous_cards() {
    let service = FakeWordService::with_words(sample_words());
    let mut flow = LearnFlow::new(service.clone());
    flow.on_activate().await;
    flow.next();

    *service.fail_list.lock() = true;
    let notice = flow.on_activate().await;

    assert_eq!(notice, Some(Notice::WordsUnavailable));
    assert_eq!(flow.state(), LearnState::Ready { index: 1 });
    assert_eq!(flow.words().len(), 3);
}

#[tokio::test]
async fn test_learn_stub_actions_only_notify() {
    let service = FakeWordService::with_words(sample_words());
    let mut flow = LearnFlow::new(service);
    flow.on_activate().await;

    assert_eq!(flow.mark_learned(), Some(Notice::MarkedLearned("Cat".into())));
    assert_eq!(flow.favorite(), Some(Notice::Favorited("Cat".into())));
    assert_eq!(flow.state(), LearnState::Ready { index: 0 });
}

// ==================== Practice ====================

async fn mounted_practice(n: usize, store: LocalStore) -> (PracticeFlow, std::sync::Arc<FakeWordService>) {
    let service = FakeWordService::with_questions(sample_questions(n));
    let mut flow = PracticeFlow::new(service.clone(), store).with_settle_delay(Duration::ZERO);
    assert_eq!(flow.on_mount().await, None);
    (flow, service)
}

#[tokio::test]
async fn test_practice_five_questions_three_correct() {
    let store = LocalStore::in_memory();
    store.record_practice(2, 1).unwrap();
    let (mut flow, service) = mounted_practice(5, store.clone()).await;

    for i in 0..5 {
        let pick = if i < 3 {
            format!("right-{i}")
        } else {
            format!("wrong-a-{i}")
        };
        let (selection, notice) = flow.answer(&pick).await;
        assert_eq!(selection, Selection::Accepted { correct: i < 3 });
        assert_eq!(notice, None);
    }

    assert_eq!(flow.state(), &PracticeState::Completed { score: 3, total: 5 });
    assert_eq!(store.practice_stats().unwrap(), PracticeStats::new(7, 4));

    assert!(flow.restart());
    assert_eq!(
        flow.state(),
        &PracticeState::InProgress {
            index: 0,
            score: 0,
            selection: None
        }
    );
    assert_eq!(service.practice_calls(), 1);
    assert_eq!(store.practice_stats().unwrap(), PracticeStats::new(7, 4));
}

#[tokio::test]
async fn test_practice_double_selection_counts_once() {
    let store = LocalStore::in_memory();
    let (mut flow, _) = mounted_practice(2, store).await;

    assert_eq!(flow.select("right-0"), Selection::Accepted { correct: true });
    assert_eq!(flow.select("right-0"), Selection::Ignored);
    assert_eq!(flow.select("wrong-a-0"), Selection::Ignored);

    assert_eq!(
        flow.state(),
        &PracticeState::InProgress {
            index: 0,
            score: 1,
            selection: Some("right-0".into())
        }
    );

    flow.advance();
    assert_eq!(
        flow.state(),
        &PracticeState::InProgress {
            index: 1,
            score: 1,
            selection: None
        }
    );
}

#[tokio::test]
async fn test_practice_answer_is_case_sensitive() {
    let store = LocalStore::in_memory();
    let service = FakeWordService::with_questions(vec![vocaboost::models::PracticeQuestion {
        word: "Cat".into(),
        options: vec!["A pet".into(), "a pet".into()],
        answer: "a pet".into(),
    }]);
    let mut flow = PracticeFlow::new(service, store.clone()).with_settle_delay(Duration::ZERO);
    flow.on_mount().await;

    assert_eq!(flow.select("A pet"), Selection::Accepted { correct: false });
    flow.advance();

    assert_eq!(flow.state(), &PracticeState::Completed { score: 0, total: 1 });
    assert_eq!(store.practice_stats().unwrap(), PracticeStats::new(1, 0));
}

#[tokio::test]
async fn test_practice_advance_without_selection_is_noop() {
    let store = LocalStore::in_memory();
    let (mut flow, _) = mounted_practice(1, store.clone()).await;

    assert_eq!(flow.advance(), None);
    assert!(matches!(flow.state(), PracticeState::InProgress { index: 0, .. }));
    assert!(!flow.restart());
    assert_eq!(store.practice_stats().unwrap(), PracticeStats::default());
}

#[tokio::test]
async fn test_practice_option_marks_revealed_after_selection() {
    let store = LocalStore::in_memory();
    let (mut flow, _) = mounted_practice(1, store).await;

    assert!(flow
        .option_marks()
        .iter()
        .all(|(_, mark)| *mark == OptionMark::Neutral));

    flow.select_number(2);
    let marks = flow.option_marks();
    assert_eq!(marks[0], ("right-0", OptionMark::Correct));
    assert_eq!(marks[1], ("wrong-a-0", OptionMark::Wrong));
    assert_eq!(marks[2], ("wrong-b-0", OptionMark::Neutral));
}

#[tokio::test]
async fn test_practice_empty_and_failed_loads() {
    let store = LocalStore::in_memory();
    let service = FakeWordService::new();
    let mut flow = PracticeFlow::new(service.clone(), store.clone());

    assert_eq!(flow.on_mount().await, None);
    assert_eq!(flow.state(), &PracticeState::Empty);
    assert_eq!(flow.select("anything"), Selection::Ignored);

    *service.fail_practice.lock() = true;
    assert_eq!(flow.on_mount().await, Some(Notice::PracticeUnavailable));
    assert_eq!(flow.state(), &PracticeState::Empty);
}

#[tokio::test]
async fn test_practice_stats_write_failure_still_completes() {
    let store = LocalStore::in_memory();
    store.kv().set("practiceStats", "corrupt").unwrap();
    let (mut flow, _) = mounted_practice(1, store).await;

    let (_, notice) = flow.answer("right-0").await;

    assert_eq!(notice, Some(Notice::StatsNotSaved));
    assert_eq!(flow.state(), &PracticeState::Completed { score: 1, total: 1 });
}

// ==================== Navigation ====================

#[tokio::test]
async fn test_practice_fetched_once_per_mount_learn_every_activation() {
    let service = FakeWordService::with_words(sample_words());
    *service.questions.lock() = sample_questions(4);
    let store = LocalStore::in_memory();
    let mut app = VocabApp::new(service.clone(), store, Duration::ZERO);

    assert_eq!(app.current(), Destination::Home);

    app.navigate(Destination::Practice).await;
    app.practice.select("right-0");
    app.navigate(Destination::Learn).await;
    app.navigate(Destination::Practice).await;
    app.navigate(Destination::Learn).await;

    assert_eq!(service.practice_calls(), 1);
    assert_eq!(service.list_calls(), 2);
    assert!(matches!(
        app.practice.state(),
        PracticeState::InProgress { score: 1, .. }
    ));
}

#[tokio::test]
async fn test_submit_navigates_to_learn_and_profile_counts_local_words() {
    let service = FakeWordService::with_words(sample_words());
    let store = LocalStore::in_memory();
    let mut app = VocabApp::new(service.clone(), store, Duration::ZERO);

    app.navigate(Destination::Add).await;
    app.add.set_word("Sun");
    app.add.set_meaning("The star of our solar system");
    app.add.set_example("Sun gives energy");
    let (outcome, follow_up) = app.submit_word().await;

    assert!(matches!(outcome, AddOutcome::Added { .. }));
    assert_eq!(follow_up, None);
    assert_eq!(app.current(), Destination::Learn);
    assert_eq!(app.learn.words().len(), 4);

    app.navigate(Destination::Profile).await;
    let summary = app.profile.summary();
    assert_eq!(summary.total_words, 1);
    assert_eq!(summary.accuracy, 0);
}

#[tokio::test]
async fn test_failed_submit_stays_on_add() {
    let service = FakeWordService::new();
    *service.fail_create.lock() = true;
    let mut app = VocabApp::new(service.clone(), LocalStore::in_memory(), Duration::ZERO);

    app.navigate(Destination::Add).await;
    *app.add.form_mut() = WordForm::new("a", "b", "c");
    let (outcome, _) = app.submit_word().await;

    assert_eq!(outcome, AddOutcome::Failed(Notice::AddFailed));
    assert_eq!(app.current(), Destination::Add);
    assert_eq!(service.list_calls(), 0);
}
