pub mod loader;
pub mod quiz;

pub use crate::loader::{CsvFileSource, JsonFileSource, LoadHandle, LoadState, QuestionSource};
pub use crate::quiz::config::ValidationError;
pub use crate::quiz::definition::{ChoiceKey, Question, QuestionBank, TopicTag};
pub use crate::quiz::session::{Band, Phase, Summary};
pub use crate::quiz::settings::{Settings, DEFAULT_QUESTIONS, MAX_QUESTIONS, MIN_QUESTIONS};
pub use crate::quiz::view::{ChoiceState, Feedback, QuizView};
pub use crate::quiz::{Command, Outcome, Quiz, QuizHandle};
