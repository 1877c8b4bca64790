use std::sync::{Arc, Mutex};

use crate::voice::VoiceOutput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Utterance {
    Spoken(String),
    Stopped,
}

/// Records every call, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingVoice {
    log: Arc<Mutex<Vec<Utterance>>>,
}

impl RecordingVoice {
    pub fn events(&self) -> Vec<Utterance> {
        self.log.lock().expect("voice log").clone()
    }

    /// Only what was spoken, dropping the stops.
    pub fn spoken(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Utterance::Spoken(text) => Some(text),
                Utterance::Stopped => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.log.lock().expect("voice log").clear();
    }
}

impl VoiceOutput for RecordingVoice {
    fn speak(&self, text: &str) {
        self.log
            .lock()
            .expect("voice log")
            .push(Utterance::Spoken(text.to_string()));
    }

    fn stop(&self) {
        self.log.lock().expect("voice log").push(Utterance::Stopped);
    }
}
