use std::collections::BTreeMap;

use super::{ChoiceKey, Question, QuestionBank, TopicTag};

pub fn make_question(id: u32, topic: &str, correct_answer: ChoiceKey) -> Question {
    let choices: BTreeMap<ChoiceKey, String> = ChoiceKey::ALL
        .iter()
        .map(|key| (*key, format!("choice {} of question {}", key, id)))
        .collect();
    Question {
        id,
        topic: TopicTag::from(topic),
        prompt: format!("example question {}", id),
        choices,
        correct_answer,
    }
}

/// Bank with one question per entry, ids starting at 1.
pub fn make_bank(entries: &[(&str, ChoiceKey)]) -> QuestionBank {
    QuestionBank::new(
        entries
            .iter()
            .enumerate()
            .map(|(index, (topic, answer))| make_question(index as u32 + 1, topic, *answer))
            .collect(),
    )
}
