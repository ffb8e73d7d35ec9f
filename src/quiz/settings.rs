pub const MIN_QUESTIONS: i32 = 3;
pub const MAX_QUESTIONS: i32 = 10;
pub const DEFAULT_QUESTIONS: i32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub min_questions: i32,
    pub max_questions: i32,
    pub default_questions: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            min_questions: MIN_QUESTIONS,
            max_questions: MAX_QUESTIONS,
            default_questions: DEFAULT_QUESTIONS,
        }
    }
}
