use log::{debug, info, warn};
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::convert::TryFrom;
use std::sync::Arc;

use self::config::*;
use self::definition::*;
use self::session::*;
use self::settings::*;
use self::topics::*;
use self::view::*;
use crate::loader::{LoadHandle, LoadState};

pub mod config;
pub mod definition;
pub mod sampler;
pub mod session;
pub mod settings;
pub mod topics;
pub mod view;


pub type QuizHandle = Arc<RwLock<Quiz>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleTopic(TopicTag),
    SetDesiredCount(i32),
    Start,
    SubmitAnswer(ChoiceKey),
    Advance,
    Reset,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored,
    Rejected(ValidationError),
}

impl From<bool> for Outcome {
    fn from(applied: bool) -> Self {
        if applied {
            Outcome::Applied
        } else {
            Outcome::Ignored
        }
    }
}

#[derive(Debug)]
enum Bank {
    Loading(LoadHandle),
    Ready(QuestionBank),
    Failed(String),
}

pub struct Quiz {
    bank: Bank,
    topics: TopicSelector,
    config: SessionConfig,
    session: Session,
    validation_error: Option<ValidationError>,
    rng: StdRng,
}

impl Quiz {
    pub fn new(settings: &Settings, loader: LoadHandle) -> Quiz {
        let mut quiz = Quiz {
            bank: Bank::Loading(loader),
            topics: TopicSelector::default(),
            config: SessionConfig::new(settings),
            session: Session::new(),
            validation_error: None,
            rng: StdRng::from_entropy(),
        };
        quiz.poll();
        quiz
    }

    pub fn with_bank(settings: &Settings, bank: QuestionBank) -> Quiz {
        Quiz::new(settings, LoadHandle::resolved(Ok(bank)))
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn into_handle(self) -> QuizHandle {
        Arc::new(RwLock::new(self))
    }

    /// Picks up the outcome of the bank load once it settles.
    pub fn poll(&mut self) {
        let settled = match &self.bank {
            Bank::Loading(handle) => match handle.get_state() {
                LoadState::InProgress => None,
                LoadState::Success => Some(match handle.take_bank() {
                    Some(bank) => Bank::Ready(bank),
                    None => Bank::Failed("Question bank was already claimed".to_owned()),
                }),
                LoadState::Failure(reason) => Some(Bank::Failed(reason)),
            },
            Bank::Ready(_) | Bank::Failed(_) => None,
        };
        if let Some(bank) = settled {
            match &bank {
                Bank::Ready(bank) => {
                    info!("Question bank ready with {} questions", bank.len());
                    self.topics.extend(bank.get_topics());
                }
                Bank::Failed(reason) => warn!("Quiz unavailable: {}", reason),
                Bank::Loading(_) => (),
            }
            self.bank = bank;
        }
    }

    /// True once the bank load has settled, whether or not `poll` has picked
    /// up its outcome yet.
    pub fn is_ready(&self) -> bool {
        match &self.bank {
            Bank::Loading(handle) => handle.get_state() != LoadState::InProgress,
            Bank::Ready(_) | Bank::Failed(_) => true,
        }
    }

    pub fn get_load_error(&self) -> Option<String> {
        match &self.bank {
            Bank::Loading(handle) => match handle.get_state() {
                LoadState::Failure(reason) => Some(reason),
                LoadState::InProgress | LoadState::Success => None,
            },
            Bank::Failed(reason) => Some(reason.clone()),
            Bank::Ready(_) => None,
        }
    }

    pub fn get_error_message(&self) -> Option<String> {
        self.validation_error
            .as_ref()
            .map(|e| e.to_string())
            .or_else(|| self.get_load_error())
    }

    pub fn get_validation_error(&self) -> Option<&ValidationError> {
        self.validation_error.as_ref()
    }

    pub fn get_bank(&self) -> Option<&QuestionBank> {
        match &self.bank {
            Bank::Ready(bank) => Some(bank),
            _ => None,
        }
    }

    pub fn get_topics(&self) -> &Vec<TopicSelection> {
        self.topics.get_selections()
    }

    pub fn get_desired_count(&self) -> i32 {
        self.config.get_desired_count()
    }

    pub fn get_bounds(&self) -> (i32, i32) {
        self.config.get_bounds()
    }

    pub fn get_session(&self) -> &Session {
        &self.session
    }

    pub fn get_phase(&self) -> Phase {
        self.session.get_phase()
    }

    pub fn get_view(&self) -> QuizView {
        let bank = match &self.bank {
            Bank::Loading(handle) => {
                return match handle.get_state() {
                    LoadState::Failure(reason) => QuizView::LoadFailed(reason),
                    LoadState::InProgress => QuizView::Loading,
                    LoadState::Success => QuizView::Idle,
                }
            }
            Bank::Failed(reason) => return QuizView::LoadFailed(reason.clone()),
            Bank::Ready(bank) => bank,
        };
        match self.session.get_phase() {
            Phase::NotStarted => QuizView::Idle,
            Phase::InProgress => match self.session.get_current_question(bank) {
                Some(question) => QuizView::Question(QuestionView::new(
                    question,
                    self.session.get_cursor() + 1,
                    self.session.get_question_order().len(),
                    self.session.get_current_answer(),
                )),
                None => QuizView::Idle,
            },
            Phase::Completed => self
                .session
                .get_summary()
                .map(QuizView::Completed)
                .unwrap_or(QuizView::Idle),
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Outcome {
        match command {
            Command::ToggleTopic(tag) => self.toggle_topic(&tag),
            Command::SetDesiredCount(count) => self.set_desired_count(count),
            Command::Start => self.start(),
            Command::SubmitAnswer(choice) => self.submit_answer(choice),
            Command::Advance => self.advance(),
            Command::Reset => self.reset(),
        }
    }

    pub fn toggle_topic(&mut self, tag: &TopicTag) -> Outcome {
        self.poll();
        self.validation_error = None;
        self.topics.toggle(tag).into()
    }

    pub fn set_desired_count(&mut self, count: i32) -> Outcome {
        self.poll();
        self.validation_error = None;
        self.config.set_desired_count(count);
        Outcome::Applied
    }

    pub fn start(&mut self) -> Outcome {
        self.poll();
        let bank = match &self.bank {
            Bank::Ready(bank) => bank,
            _ => {
                debug!("Ignoring start while the question bank is unavailable");
                return Outcome::Ignored;
            }
        };

        if let Err(e) = self.config.validate(&self.topics) {
            debug!("Session start rejected: {}", e);
            self.validation_error = Some(e.clone());
            return Outcome::Rejected(e);
        }

        let desired_count = usize::try_from(self.config.get_desired_count()).unwrap_or(0);
        let question_order = sampler::sample(bank, &self.topics, desired_count, &mut self.rng);
        self.session.start(question_order);
        self.validation_error = None;
        self.log_phase();
        Outcome::Applied
    }

    pub fn submit_answer(&mut self, choice: ChoiceKey) -> Outcome {
        self.poll();
        match &self.bank {
            Bank::Ready(bank) => self.session.submit_answer(bank, choice).into(),
            _ => Outcome::Ignored,
        }
    }

    pub fn advance(&mut self) -> Outcome {
        self.poll();
        if self.get_bank().is_none() {
            return Outcome::Ignored;
        }
        let advanced = self.session.advance();
        if advanced && self.session.is_completed() {
            self.log_phase();
        }
        advanced.into()
    }

    pub fn reset(&mut self) -> Outcome {
        self.poll();
        self.session.reset();
        self.log_phase();
        Outcome::Applied
    }

    fn log_phase(&self) {
        info!(
            "Entering quiz phase: {:?} ({} questions)",
            self.session.get_phase(),
            self.session.get_question_order().len()
        );
    }
}
