use log::debug;

use crate::quiz::definition::{ChoiceKey, Question, QuestionBank};

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Top,
    Middle,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub correct: usize,
    pub answered: usize,
    pub ratio: f64,
    pub band: Band,
}

impl Summary {
    fn new(correct: usize, answered: usize) -> Self {
        let ratio = if answered == 0 {
            0.0
        } else {
            correct as f64 / answered as f64
        };
        let band = if answered > 0 && correct == answered {
            Band::Top
        } else if ratio >= 0.5 {
            Band::Middle
        } else {
            Band::Bottom
        };
        Summary {
            correct,
            answered,
            ratio,
            band,
        }
    }
}

/// One quiz run over a sampled question order.
///
/// `answers[i]` is the answer given to `question_order[i]`. Answers are only
/// ever appended, one per cursor position, before the cursor moves on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    started: bool,
    question_order: Vec<usize>,
    cursor: usize,
    answers: Vec<ChoiceKey>,
    correct_count: usize,
}

impl Session {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn start(&mut self, question_order: Vec<usize>) {
        self.started = true;
        self.question_order = question_order;
        self.cursor = 0;
        self.answers.clear();
        self.correct_count = 0;
    }

    pub fn reset(&mut self) {
        *self = Session::new();
    }

    pub fn get_phase(&self) -> Phase {
        if !self.started {
            Phase::NotStarted
        } else if self.is_completed() {
            Phase::Completed
        } else {
            Phase::InProgress
        }
    }

    pub fn is_completed(&self) -> bool {
        self.started && self.cursor >= self.question_order.len()
    }

    pub fn is_current_answered(&self) -> bool {
        self.get_phase() == Phase::InProgress && self.answers.len() > self.cursor
    }

    /// Records the answer for the current question. Returns false without
    /// touching anything when the session is not in progress or the current
    /// question already has an answer.
    pub fn submit_answer(&mut self, bank: &QuestionBank, choice: ChoiceKey) -> bool {
        if self.get_phase() != Phase::InProgress {
            debug!("Ignoring answer `{}` outside of a running session", choice);
            return false;
        }
        if self.answers.len() != self.cursor {
            debug!("Ignoring answer `{}`, question already answered", choice);
            return false;
        }
        let question = match self.get_current_question(bank) {
            Some(question) => question,
            None => {
                debug!("Ignoring answer `{}`, question missing from bank", choice);
                return false;
            }
        };
        if question.is_answer_correct(choice) {
            self.correct_count += 1;
        }
        self.answers.push(choice);
        true
    }

    pub fn advance(&mut self) -> bool {
        if !self.is_current_answered() {
            debug!("Ignoring advance before the current question is answered");
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn get_current_question<'a>(&self, bank: &'a QuestionBank) -> Option<&'a Question> {
        if self.get_phase() != Phase::InProgress {
            return None;
        }
        self.question_order
            .get(self.cursor)
            .and_then(|index| bank.get(*index))
    }

    pub fn get_current_answer(&self) -> Option<ChoiceKey> {
        self.answers.get(self.cursor).copied()
    }

    pub fn get_summary(&self) -> Option<Summary> {
        if self.is_completed() {
            Some(Summary::new(self.correct_count, self.answers.len()))
        } else {
            None
        }
    }

    pub fn get_question_order(&self) -> &Vec<usize> {
        &self.question_order
    }

    pub fn get_answers(&self) -> &Vec<ChoiceKey> {
        &self.answers
    }

    pub fn get_cursor(&self) -> usize {
        self.cursor
    }

    pub fn get_correct_count(&self) -> usize {
        self.correct_count
    }
}
