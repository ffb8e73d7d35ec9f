use super::*;
use crate::quiz::definition::mock::make_bank;

struct Context {
    session: Session,
    bank: QuestionBank,
}

struct ContextBuilder {
    bank: QuestionBank,
    question_order: Vec<usize>,
}

impl ContextBuilder {
    fn new() -> Self {
        ContextBuilder {
            bank: make_bank(&[
                ("html", ChoiceKey::A),
                ("css", ChoiceKey::B),
                ("javascript", ChoiceKey::C),
                ("html", ChoiceKey::D),
                ("css", ChoiceKey::A),
            ]),
            question_order: vec![4, 2, 0, 3, 1],
        }
    }

    fn question_order(mut self, question_order: Vec<usize>) -> Self {
        self.question_order = question_order;
        self
    }

    fn build(self) -> Context {
        let mut session = Session::new();
        session.start(self.question_order);
        Context {
            session,
            bank: self.bank,
        }
    }
}

impl Context {
    fn answer_and_advance(&mut self, choice: ChoiceKey) {
        assert!(self.session.submit_answer(&self.bank, choice));
        assert!(self.session.advance());
    }
}

#[test]
fn new_session_is_not_started() {
    let session = Session::new();
    assert_eq!(session.get_phase(), Phase::NotStarted);
    assert!(!session.is_completed());
    assert!(session.get_summary().is_none());
}

#[test]
fn start_enters_first_question() {
    let ctx = ContextBuilder::new().build();
    assert_eq!(ctx.session.get_phase(), Phase::InProgress);
    assert_eq!(ctx.session.get_cursor(), 0);
    assert_eq!(ctx.session.get_current_question(&ctx.bank).unwrap().id, 5);
}

#[test]
fn cannot_answer_before_start() {
    let bank = make_bank(&[("html", ChoiceKey::A)]);
    let mut session = Session::new();
    assert!(!session.submit_answer(&bank, ChoiceKey::A));
    assert!(session.get_answers().is_empty());
    assert_eq!(session, Session::new());
}

#[test]
fn first_answer_is_final() {
    let mut ctx = ContextBuilder::new().build();
    assert!(ctx.session.submit_answer(&ctx.bank, ChoiceKey::B));
    assert!(!ctx.session.submit_answer(&ctx.bank, ChoiceKey::A));
    assert_eq!(ctx.session.get_answers(), &vec![ChoiceKey::B]);
    assert_eq!(ctx.session.get_current_answer(), Some(ChoiceKey::B));
    assert_eq!(ctx.session.get_correct_count(), 0);
}

#[test]
fn cannot_advance_unanswered_question() {
    let mut ctx = ContextBuilder::new().build();
    assert!(!ctx.session.advance());
    assert_eq!(ctx.session.get_cursor(), 0);

    ctx.session.submit_answer(&ctx.bank, ChoiceKey::A);
    assert!(ctx.session.advance());
    assert!(!ctx.session.advance());
    assert_eq!(ctx.session.get_cursor(), 1);
}

#[test]
fn answers_stay_in_lockstep_with_cursor() {
    let mut ctx = ContextBuilder::new().build();
    for choice in &[ChoiceKey::A, ChoiceKey::B, ChoiceKey::C, ChoiceKey::D, ChoiceKey::A] {
        let cursor = ctx.session.get_cursor();
        assert_eq!(ctx.session.get_answers().len(), cursor);
        ctx.session.submit_answer(&ctx.bank, *choice);
        assert_eq!(ctx.session.get_answers().len(), cursor + 1);
        ctx.session.advance();
    }
    assert!(ctx.session.is_completed());
}

#[test]
fn counts_correct_answers_over_scripted_run() {
    // Order 4, 2, 0, 3, 1 has answer key A, C, A, D, B.
    let mut ctx = ContextBuilder::new().build();
    let script = [ChoiceKey::A, ChoiceKey::B, ChoiceKey::A, ChoiceKey::C, ChoiceKey::B];
    for choice in &script {
        ctx.answer_and_advance(*choice);
    }

    let expected = ctx
        .session
        .get_question_order()
        .iter()
        .zip(ctx.session.get_answers())
        .filter(|(index, answer)| ctx.bank.get(**index).unwrap().correct_answer == **answer)
        .count();
    assert_eq!(expected, 3);
    assert_eq!(ctx.session.get_correct_count(), 3);

    let summary = ctx.session.get_summary().unwrap();
    assert_eq!(summary.correct, 3);
    assert_eq!(summary.answered, 5);
    assert_eq!(summary.band, Band::Middle);
}

#[test]
fn completion_is_derived_from_cursor() {
    let mut ctx = ContextBuilder::new().question_order(vec![0, 1]).build();
    ctx.answer_and_advance(ChoiceKey::A);
    assert_eq!(ctx.session.get_phase(), Phase::InProgress);
    ctx.answer_and_advance(ChoiceKey::B);
    assert_eq!(ctx.session.get_phase(), Phase::Completed);
    assert!(ctx.session.get_current_question(&ctx.bank).is_none());

    assert!(!ctx.session.submit_answer(&ctx.bank, ChoiceKey::A));
    assert!(!ctx.session.advance());
    assert_eq!(ctx.session.get_cursor(), 2);
}

#[test]
fn perfect_run_is_top_band() {
    let mut ctx = ContextBuilder::new().question_order(vec![0, 1, 2]).build();
    ctx.answer_and_advance(ChoiceKey::A);
    ctx.answer_and_advance(ChoiceKey::B);
    ctx.answer_and_advance(ChoiceKey::C);
    let summary = ctx.session.get_summary().unwrap();
    assert_eq!(summary.band, Band::Top);
    assert_eq!(summary.ratio, 1.0);
}

#[test]
fn poor_run_is_bottom_band() {
    let mut ctx = ContextBuilder::new().question_order(vec![0, 1, 2]).build();
    ctx.answer_and_advance(ChoiceKey::A);
    ctx.answer_and_advance(ChoiceKey::A);
    ctx.answer_and_advance(ChoiceKey::A);
    assert_eq!(ctx.session.get_summary().unwrap().band, Band::Bottom);
}

#[test]
fn half_correct_is_middle_band() {
    let mut ctx = ContextBuilder::new().question_order(vec![0, 1]).build();
    ctx.answer_and_advance(ChoiceKey::A);
    ctx.answer_and_advance(ChoiceKey::D);
    assert_eq!(ctx.session.get_summary().unwrap().band, Band::Middle);
}

#[test]
fn empty_order_completes_without_dividing_by_zero() {
    let ctx = ContextBuilder::new().question_order(vec![]).build();
    assert_eq!(ctx.session.get_phase(), Phase::Completed);
    let summary = ctx.session.get_summary().unwrap();
    assert_eq!(summary.correct, 0);
    assert_eq!(summary.answered, 0);
    assert_eq!(summary.ratio, 0.0);
    assert_eq!(summary.band, Band::Bottom);
}

#[test]
fn reset_restores_pristine_session() {
    let mut ctx = ContextBuilder::new().build();
    for _ in 0..5 {
        ctx.answer_and_advance(ChoiceKey::A);
    }
    assert!(ctx.session.is_completed());

    ctx.session.reset();
    assert_eq!(ctx.session, Session::new());
    assert_eq!(ctx.session.get_phase(), Phase::NotStarted);
}

#[test]
fn restart_clears_previous_run() {
    let mut ctx = ContextBuilder::new().build();
    ctx.answer_and_advance(ChoiceKey::A);
    ctx.session.start(vec![1, 2, 3]);
    assert_eq!(ctx.session.get_cursor(), 0);
    assert!(ctx.session.get_answers().is_empty());
    assert_eq!(ctx.session.get_correct_count(), 0);
    assert_eq!(ctx.session.get_question_order(), &vec![1, 2, 3]);
}
