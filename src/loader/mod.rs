use anyhow::*;
use log::{info, warn};
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use crate::quiz::definition::QuestionBank;

#[cfg(test)]
pub mod mock;

/// Anything able to produce the question bank in one go: a remote fetch, a
/// file on disk, a fixture.
pub trait QuestionSource {
    fn fetch(&self) -> Result<QuestionBank>;
}

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        JsonFileSource { path: path.into() }
    }
}

impl QuestionSource for JsonFileSource {
    fn fetch(&self) -> Result<QuestionBank> {
        QuestionBank::open_json(&self.path)
    }
}

pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        CsvFileSource { path: path.into() }
    }
}

impl QuestionSource for CsvFileSource {
    fn fetch(&self) -> Result<QuestionBank> {
        QuestionBank::open_csv(&self.path)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    InProgress,
    Success,
    Failure(String),
}

#[derive(Debug)]
enum Slot {
    Pending,
    Loaded(QuestionBank),
    Taken,
    Failed(String),
}

/// Observes a bank load running on a worker thread.
#[derive(Clone, Debug)]
pub struct LoadHandle {
    slot: Arc<RwLock<Slot>>,
}

impl LoadHandle {
    pub fn spawn<S>(source: S) -> Result<LoadHandle>
    where
        S: QuestionSource + Send + 'static,
    {
        let slot = Arc::new(RwLock::new(Slot::Pending));
        let worker_slot = slot.clone();
        thread::Builder::new()
            .name("question-bank-loader".to_owned())
            .spawn(move || {
                let result = source.fetch();
                *worker_slot.write() = LoadHandle::settle(result);
            })
            .map_err(|e| anyhow!("Could not spawn question bank loader: {}", e))?;
        Ok(LoadHandle { slot })
    }

    /// Handle for a load that already completed, for sources that do not need
    /// a worker thread.
    pub fn resolved(result: Result<QuestionBank>) -> LoadHandle {
        LoadHandle {
            slot: Arc::new(RwLock::new(LoadHandle::settle(result))),
        }
    }

    fn settle(result: Result<QuestionBank>) -> Slot {
        result
            .map(|bank| {
                info!("Loaded {} questions", bank.len());
                Slot::Loaded(bank)
            })
            .unwrap_or_else(|e| {
                warn!("Could not load question bank: {:#}", e);
                Slot::Failed(format!("{:#}", e))
            })
    }

    pub fn get_state(&self) -> LoadState {
        match &*self.slot.read() {
            Slot::Pending => LoadState::InProgress,
            Slot::Loaded(_) | Slot::Taken => LoadState::Success,
            Slot::Failed(reason) => LoadState::Failure(reason.clone()),
        }
    }

    /// Hands the loaded bank over to the caller. Only the first call after a
    /// successful load returns it.
    pub fn take_bank(&self) -> Option<QuestionBank> {
        let mut slot = self.slot.write();
        if let Slot::Loaded(_) = &*slot {
            if let Slot::Loaded(bank) = std::mem::replace(&mut *slot, Slot::Taken) {
                return Some(bank);
            }
        }
        None
    }
}
