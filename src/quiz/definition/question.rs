use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceKey {
    A,
    B,
    C,
    D,
}

impl ChoiceKey {
    pub const ALL: [ChoiceKey; 4] = [ChoiceKey::A, ChoiceKey::B, ChoiceKey::C, ChoiceKey::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChoiceKey::A => "a",
            ChoiceKey::B => "b",
            ChoiceKey::C => "c",
            ChoiceKey::D => "d",
        }
    }
}

impl fmt::Display for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category label of a question. Any tag found in a bank is valid, the
/// well-known ones only get a nicer display name.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct TopicTag(String);

impl TopicTag {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        TopicTag(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TopicTag {
    fn from(tag: &str) -> Self {
        TopicTag::new(tag)
    }
}

impl fmt::Display for TopicTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawChoices {
    pub a: String,
    pub b: String,
    pub c: Option<String>,
    pub d: Option<String>,
}

/// Question record as served by the remote bank.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawQuestion {
    pub id: u32,
    pub topic: TopicTag,
    pub question: String,
    pub choices: RawChoices,
    pub answer: ChoiceKey,
}

/// One line of a CSV bank. Blank `c` and `d` columns mean the choice is absent.
#[derive(Clone, Debug, Deserialize)]
pub struct CsvQuestion {
    pub id: u32,
    pub topic: TopicTag,
    pub question: String,
    pub a: String,
    pub b: String,
    pub c: Option<String>,
    pub d: Option<String>,
    pub answer: ChoiceKey,
}

impl From<CsvQuestion> for RawQuestion {
    fn from(csv_question: CsvQuestion) -> Self {
        RawQuestion {
            id: csv_question.id,
            topic: csv_question.topic,
            question: csv_question.question,
            choices: RawChoices {
                a: csv_question.a,
                b: csv_question.b,
                c: csv_question.c.filter(|c| !c.trim().is_empty()),
                d: csv_question.d.filter(|d| !d.trim().is_empty()),
            },
            answer: csv_question.answer,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub topic: TopicTag,
    pub prompt: String,
    pub choices: BTreeMap<ChoiceKey, String>,
    pub correct_answer: ChoiceKey,
}

impl Question {
    pub fn is_answer_correct(&self, choice: ChoiceKey) -> bool {
        self.correct_answer == choice
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = Error;

    fn try_from(raw_question: RawQuestion) -> Result<Self, Self::Error> {
        let RawChoices { a, b, c, d } = raw_question.choices;

        let mut choices = BTreeMap::new();
        choices.insert(ChoiceKey::A, a);
        choices.insert(ChoiceKey::B, b);
        if let Some(c) = c {
            choices.insert(ChoiceKey::C, c);
        }
        if let Some(d) = d {
            choices.insert(ChoiceKey::D, d);
        }

        if !choices.contains_key(&raw_question.answer) {
            return Err(anyhow!(
                "Question {} has answer `{}` but no such choice",
                raw_question.id,
                raw_question.answer
            ));
        }

        Ok(Question {
            id: raw_question.id,
            topic: raw_question.topic,
            prompt: raw_question.question,
            choices,
            correct_answer: raw_question.answer,
        })
    }
}
