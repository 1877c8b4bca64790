//! The voice output seam.
//!
//! Speech is a process-wide resource: only one utterance should be audible
//! at a time and the newest one wins. Every speaking path goes through
//! [`announce`], which stops the current utterance before starting the next.

use log::{debug, info};
use serde::{Deserialize, Serialize};

#[cfg(test)]
pub(crate) mod recording;

/// A text-to-speech engine. Both calls are fire-and-forget.
pub trait VoiceOutput: Send + Sync {
    fn speak(&self, text: &str);
    fn stop(&self);
}

/// Stops whatever is being said, then says `text`. Blank text is ignored.
pub fn announce(voice: &dyn VoiceOutput, text: &str) {
    if text.trim().is_empty() {
        return;
    }

    voice.stop();
    voice.speak(text);
}

/// Engine parameters, also synced to the backend as device preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSettings {
    pub language: String,
    pub pitch: f32,
    pub rate: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        VoiceSettings {
            language: "ko-KR".to_string(),
            pitch: 1.0,
            rate: 0.9,
        }
    }
}

/// A voice that writes utterances to the log instead of a speaker.
/// Used by the simulator and handy wherever no audio device exists.
#[derive(Debug, Clone, Default)]
pub struct LogVoice {
    pub settings: VoiceSettings,
}

impl LogVoice {
    pub fn new(settings: VoiceSettings) -> Self {
        LogVoice { settings }
    }
}

impl VoiceOutput for LogVoice {
    fn speak(&self, text: &str) {
        info!("[{} x{:.1}] {}", self.settings.language, self.settings.rate, text);
    }

    fn stop(&self) {
        debug!("Stopping current utterance");
    }
}
