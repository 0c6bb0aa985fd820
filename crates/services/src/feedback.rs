//! One-way device feedback: haptic pulses and spoken read-back.
//!
//! Both are fire-and-forget collaborator interfaces. The app never checks
//! whether a pulse actually vibrated or a sentence finished playing; tests
//! substitute recording stubs and the desktop binary installs a logging
//! implementation.

/// Each artifact announces itself with a distinct pulse length, and a longer
/// pulse marks the whole fan-out settling.
pub const QUIZ_READY_PULSE_MS: u64 = 100;
pub const SUMMARY_READY_PULSE_MS: u64 = 50;
pub const FLASHCARDS_READY_PULSE_MS: u64 = 50;
pub const ALL_SETTLED_PULSE_MS: u64 = 200;

pub trait Haptics: Send + Sync {
    fn pulse(&self, duration_ms: u64);
}

/// Playback options for spoken read-back.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeechOptions {
    pub language: String,
    pub pitch: f32,
    pub rate: f32,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            pitch: 1.0,
            rate: 0.9,
        }
    }
}

pub trait Speech: Send + Sync {
    fn speak(&self, text: &str, options: &SpeechOptions);
}

/// No-op implementation for platforms without haptics or speech.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentFeedback;

impl Haptics for SilentFeedback {
    fn pulse(&self, _duration_ms: u64) {}
}

impl Speech for SilentFeedback {
    fn speak(&self, _text: &str, _options: &SpeechOptions) {}
}
