use anyhow::{anyhow, Result};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::{Duration, Instant};

use crate::loader::{LoadHandle, LoadState, QuestionSource};
use crate::quiz::definition::QuestionBank;

pub struct MockSource {
    outcome: std::result::Result<QuestionBank, String>,
    release: Option<Receiver<()>>,
}

impl MockSource {
    pub fn succeeding(bank: QuestionBank) -> Self {
        MockSource {
            outcome: Ok(bank),
            release: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        MockSource {
            outcome: Err(reason.to_owned()),
            release: None,
        }
    }

    /// Holds the fetch until the returned sender fires (or is dropped).
    pub fn gated(mut self) -> (Self, Sender<()>) {
        let (sender, receiver) = channel();
        self.release = Some(receiver);
        (self, sender)
    }
}

impl QuestionSource for MockSource {
    fn fetch(&self) -> Result<QuestionBank> {
        if let Some(release) = &self.release {
            release.recv().ok();
        }
        self.outcome.clone().map_err(|reason| anyhow!(reason))
    }
}

pub fn wait_until_settled(handle: &LoadHandle) -> LoadState {
    let start_time = Instant::now();
    loop {
        let state = handle.get_state();
        if state != LoadState::InProgress {
            return state;
        }
        if Instant::now().duration_since(start_time) > Duration::from_secs(5) {
            panic!("Timed out waiting for question bank load");
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}
