use crate::rules::events::MatchEvent;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Sending message to the match observer has failed.")]
pub struct NotifyFailedError;

/// Receives everything a presentation layer needs to show a match.
pub trait MatchObserver {
    fn notify_event(&mut self, _event: &MatchEvent) -> Result<(), NotifyFailedError> {
        Ok(())
    }
}

/// Keeps every event in the order it was emitted. Clones share the same record.
#[derive(Clone, Default)]
pub struct MatchRecorder {
    inner: Arc<Mutex<Vec<MatchEvent>>>,
}

impl MatchRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<MatchEvent> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn log_lines(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                MatchEvent::Log(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<MatchEvent>> {
        // A poisoned record is still a valid record.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MatchObserver for MatchRecorder {
    fn notify_event(&mut self, event: &MatchEvent) -> Result<(), NotifyFailedError> {
        self.lock().push(event.clone());
        Ok(())
    }
}
