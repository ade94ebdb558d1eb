use std::sync::{Arc, Mutex, PoisonError};

use crate::ports::{TitleSink, TitleSinkError};

/// Title sink that keeps every title it was given, shared across clones.
#[derive(Debug, Clone, Default)]
pub struct RecordingTitleSink {
    titles: Arc<Mutex<Vec<String>>>,
}

impl RecordingTitleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titles(&self) -> Vec<String> {
        self.titles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<String> {
        self.titles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl TitleSink for RecordingTitleSink {
    fn set_title(&mut self, title: &str) -> Result<(), TitleSinkError> {
        self.titles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(title.to_string());
        Ok(())
    }
}
