use thiserror::Error;

use crate::quiz::settings::Settings;
use crate::quiz::topics::TopicSelector;


#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("There must be at least one chosen topic!")]
    NoTopicSelected,
    #[error("Number of questions must be between {min} and {max}!")]
    CountOutOfBounds { count: i32, min: i32, max: i32 },
}

/// Desired question count. Out of range values are accepted here and only
/// rejected by `validate` when a session starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    desired_count: i32,
    min_questions: i32,
    max_questions: i32,
}

impl SessionConfig {
    pub fn new(settings: &Settings) -> Self {
        SessionConfig {
            desired_count: settings.default_questions,
            min_questions: settings.min_questions,
            max_questions: settings.max_questions,
        }
    }

    pub fn get_desired_count(&self) -> i32 {
        self.desired_count
    }

    pub fn set_desired_count(&mut self, count: i32) {
        self.desired_count = count;
    }

    pub fn get_bounds(&self) -> (i32, i32) {
        (self.min_questions, self.max_questions)
    }

    pub fn validate(&self, topics: &TopicSelector) -> Result<(), ValidationError> {
        if !topics.any_enabled() {
            return Err(ValidationError::NoTopicSelected);
        }
        if self.desired_count < self.min_questions || self.desired_count > self.max_questions {
            return Err(ValidationError::CountOutOfBounds {
                count: self.desired_count,
                min: self.min_questions,
                max: self.max_questions,
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig::new(&Settings::default())
    }
}
