use crate::quiz::definition::{ChoiceKey, Question};
use crate::quiz::session::Summary;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceState {
    Unanswered,
    /// The right answer, revealed once the question has been answered.
    Correct,
    /// The answer that was picked, when it is wrong.
    Incorrect,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    pub fn get_message(&self) -> &'static str {
        match self {
            Feedback::Correct => "Good job!",
            Feedback::Incorrect => "Wrong answer!",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceView {
    pub key: ChoiceKey,
    pub text: String,
    pub state: ChoiceState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub choices: Vec<ChoiceView>,
    pub feedback: Option<Feedback>,
    pub can_advance: bool,
}

impl QuestionView {
    pub fn new(
        question: &Question,
        number: usize,
        total: usize,
        answer: Option<ChoiceKey>,
    ) -> Self {
        let choices = question
            .choices
            .iter()
            .map(|(key, text)| ChoiceView {
                key: *key,
                text: text.clone(),
                state: get_choice_state(question, *key, answer),
            })
            .collect();
        let feedback = answer.map(|answer| {
            if question.is_answer_correct(answer) {
                Feedback::Correct
            } else {
                Feedback::Incorrect
            }
        });
        QuestionView {
            number,
            total,
            prompt: question.prompt.clone(),
            choices,
            feedback,
            can_advance: answer.is_some(),
        }
    }
}

fn get_choice_state(
    question: &Question,
    key: ChoiceKey,
    answer: Option<ChoiceKey>,
) -> ChoiceState {
    match answer {
        None => ChoiceState::Unanswered,
        Some(_) if question.is_answer_correct(key) => ChoiceState::Correct,
        Some(answer) if answer == key => ChoiceState::Incorrect,
        Some(_) => ChoiceState::Other,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuizView {
    Loading,
    LoadFailed(String),
    Idle,
    Question(QuestionView),
    Completed(Summary),
}
