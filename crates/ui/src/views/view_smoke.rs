use std::sync::atomic::Ordering;

use tandem_core::questionnaire::QuestionnaireEvent;

use super::onboarding::OnboardingIntent;
use super::test_harness::{ViewHarness, setup_view_harness};

fn submit_player(harness: &mut ViewHarness, name: &str, questions: &[&str]) {
    let dispatch = harness.onboarding.dispatch();
    dispatch.call(OnboardingIntent::NameChanged(name.to_string()));
    for (index, question) in questions.iter().enumerate() {
        dispatch.call(OnboardingIntent::QuestionChanged(
            index,
            (*question).to_string(),
        ));
    }
    dispatch.call(OnboardingIntent::Submit);
    harness.drive();
}

#[tokio::test(flavor = "current_thread")]
async fn first_setup_screen_renders_name_and_five_question_fields() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Player 1 Setup"), "missing title in {html}");
    assert!(html.contains("setup-name"), "missing name field in {html}");
    for index in 0..5 {
        let id = format!("setup-question-{index}");
        assert!(html.contains(&id), "missing {id} in {html}");
    }
    assert!(
        html.contains("Question 5"),
        "missing last slot placeholder in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn onboarding_flows_into_the_first_question() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    submit_player(&mut harness, "Ada", &["A1", "A2"]);
    let html = harness.render();
    assert!(html.contains("Player 2 Setup"), "missing title in {html}");

    submit_player(&mut harness, "Ben", &["B1"]);
    let html = harness.render();
    assert!(html.contains("Question 1"), "missing heading in {html}");
    assert!(html.contains("A1"), "missing question text in {html}");
    assert!(
        html.contains("Time remaining: 5 seconds"),
        "missing countdown in {html}"
    );
    // Previous is not offered on the first question.
    assert!(!html.contains("question-previous"), "previous offered in {html}");
    assert_eq!(harness.session.question_count(), 3);
}

#[tokio::test(flavor = "current_thread")]
async fn next_walks_to_the_summary_and_records_answers() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    submit_player(&mut harness, "Ada", &["A1", "A2"]);
    submit_player(&mut harness, "Ben", &["B1"]);

    for answer in ["alpha", "beta", "gamma"] {
        let dispatch = harness.questionnaire.dispatch();
        dispatch.call(QuestionnaireEvent::DraftEdited(answer.to_string()));
        dispatch.call(QuestionnaireEvent::Next);
        harness.drive();
    }

    let html = harness.render();
    assert!(
        html.contains("Thank you for participating!"),
        "missing summary in {html}"
    );
    assert!(html.contains("Q1: A1"), "missing first row in {html}");
    assert!(html.contains("Answer: gamma"), "missing last answer in {html}");
    assert_eq!(harness.session.answer(0), "alpha");
    assert_eq!(harness.session.answer(2), "gamma");
}

#[tokio::test(flavor = "current_thread")]
async fn previous_restores_the_saved_draft() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    submit_player(&mut harness, "Ada", &["A1", "A2"]);
    submit_player(&mut harness, "Ben", &[]);

    let dispatch = harness.questionnaire.dispatch();
    dispatch.call(QuestionnaireEvent::DraftEdited("hi".to_string()));
    dispatch.call(QuestionnaireEvent::Next);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Question 2"), "missing heading in {html}");

    let dispatch = harness.questionnaire.dispatch();
    dispatch.call(QuestionnaireEvent::Previous);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Question 1"), "missing heading in {html}");
    assert!(html.contains("hi"), "missing restored draft in {html}");
    assert!(
        html.contains("Time remaining: 5 seconds"),
        "countdown did not restart in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn timer_expiry_commits_the_draft_and_advances() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    submit_player(&mut harness, "Ada", &["A1", "A2"]);
    submit_player(&mut harness, "Ben", &[]);

    let dispatch = harness.questionnaire.dispatch();
    dispatch.call(QuestionnaireEvent::DraftEdited("partial".to_string()));
    dispatch.call(QuestionnaireEvent::TimerExpired);
    harness.drive();

    assert_eq!(harness.session.answer(0), "partial");
    let html = harness.render();
    assert!(html.contains("Question 2"), "did not advance in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_question_list_goes_straight_to_an_empty_summary() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    submit_player(&mut harness, "Ada", &[]);
    submit_player(&mut harness, "Ben", &["", "  "]);
    harness.drive();

    let html = harness.render();
    assert!(
        html.contains("Thank you for participating!"),
        "missing summary in {html}"
    );
    assert!(!html.contains("Q1:"), "unexpected rows in {html}");
    assert_eq!(harness.session.question_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn summary_close_requests_process_exit() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    submit_player(&mut harness, "Ada", &["A1"]);
    submit_player(&mut harness, "Ben", &[]);

    let dispatch = harness.questionnaire.dispatch();
    dispatch.call(QuestionnaireEvent::Next);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("summary-close"), "missing close button in {html}");
    assert!(!harness.exited.load(Ordering::SeqCst));

    harness.summary.close().call(());
    harness.drive();

    assert!(harness.exited.load(Ordering::SeqCst));
}

#[tokio::test(flavor = "current_thread")]
async fn skipped_questions_store_an_empty_answer_rather_than_no_entry() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    submit_player(&mut harness, "Ada", &["A1", "A2"]);
    submit_player(&mut harness, "Ben", &[]);

    // Answer the first question, press Next through the second untouched.
    let dispatch = harness.questionnaire.dispatch();
    dispatch.call(QuestionnaireEvent::DraftEdited("done".to_string()));
    dispatch.call(QuestionnaireEvent::Next);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Question 2"), "missing heading in {html}");
    let dispatch = harness.questionnaire.dispatch();
    dispatch.call(QuestionnaireEvent::Next);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Answer: done"), "missing answer in {html}");
    assert!(html.contains("Q2: A2"), "missing second row in {html}");
    // Next commits the (empty) draft, so the row shows an empty answer
    // rather than the placeholder for a question that was never reached.
    assert!(!html.contains("No answer"), "unexpected placeholder in {html}");
    assert_eq!(harness.session.answer_opt(1), Some(String::new()));
}
