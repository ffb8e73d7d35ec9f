use anyhow::*;
use itertools::Itertools;
use std::convert::TryFrom;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod question;

pub use question::{ChoiceKey, CsvQuestion, Question, RawChoices, RawQuestion, TopicTag};

#[cfg(test)]
pub mod mock;

/// Read-only list of questions. Sessions refer to questions by their index in
/// this list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        QuestionBank { questions }
    }

    pub fn from_raw_questions(raw_questions: Vec<RawQuestion>) -> Result<QuestionBank> {
        let questions = raw_questions
            .into_iter()
            .map(Question::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(QuestionBank { questions })
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<QuestionBank> {
        let raw_questions: Vec<RawQuestion> =
            serde_json::from_reader(reader).context("Could not parse question bank JSON")?;
        QuestionBank::from_raw_questions(raw_questions)
    }

    pub fn from_json_str(payload: &str) -> Result<QuestionBank> {
        QuestionBank::from_json_reader(payload.as_bytes())
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<QuestionBank> {
        let mut raw_questions = Vec::new();
        let mut csv_reader = csv::Reader::from_reader(reader);
        for question in csv_reader.deserialize() {
            let csv_question: CsvQuestion =
                question.context("Could not parse question bank CSV")?;
            raw_questions.push(csv_question.into());
        }
        QuestionBank::from_raw_questions(raw_questions)
    }

    pub fn open_json(source: &Path) -> Result<QuestionBank> {
        let file = File::open(source)
            .with_context(|| format!("Could not open question bank {}", source.display()))?;
        QuestionBank::from_json_reader(file)
    }

    pub fn open_csv(source: &Path) -> Result<QuestionBank> {
        let file = File::open(source)
            .with_context(|| format!("Could not open question bank {}", source.display()))?;
        QuestionBank::from_csv_reader(file)
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct topics, in order of first appearance.
    pub fn get_topics(&self) -> Vec<TopicTag> {
        self.questions
            .iter()
            .map(|q| q.topic.clone())
            .unique()
            .collect()
    }
}
