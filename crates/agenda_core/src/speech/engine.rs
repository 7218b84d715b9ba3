//! Speech engine seam.
//!
//! # Responsibility
//! - Define the contract between the controller and whatever synthesizer
//!   actually produces audio.
//! - Carry playback completion back to the controller without blocking it.
//!
//! # Invariants
//! - `cancel` silences everything the engine is playing, including audio
//!   that did not originate from the calling controller.
//! - Completion handles may be fired from any thread, at most once per
//!   playback; firing a superseded handle has no effect on anything.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One synthesizer voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    /// BCP 47 language tag, e.g. `es-ES`.
    pub language: String,
}

/// One request to vocalize a string.
///
/// The controller owns exactly one reusable instance and rebinds it per
/// `speak` call; engines only ever borrow it.
#[derive(Debug, Clone, Default)]
pub struct Utterance {
    pub text: String,
    pub language: String,
    /// Selected voice name; `None` lets the engine pick its default.
    pub voice: Option<String>,
}

/// Cloneable completion flag fired by the engine when playback ends,
/// successfully or not.
#[derive(Debug, Clone, Default)]
pub struct PlaybackDone {
    fired: Arc<AtomicBool>,
}

impl PlaybackDone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire(&self) {
        self.fired.store(true, Ordering::SeqCst);
    }

    pub fn is_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub enum EngineError {
    /// The synthesizer process could not be started.
    Spawn(std::io::Error),
    /// No synthesizer is available on this host.
    Unavailable,
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spawn(err) => write!(f, "failed to start synthesizer: {err}"),
            Self::Unavailable => write!(f, "no speech synthesizer available"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Spawn(err) => Some(err),
            Self::Unavailable => None,
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(value: std::io::Error) -> Self {
        Self::Spawn(value)
    }
}

/// Contract every synthesizer backend implements.
pub trait SpeechEngine {
    /// Voices the engine can enumerate. May be empty for backends that
    /// cannot list voices; the controller then falls back to its
    /// configured language tag.
    fn voices(&self) -> Vec<Voice>;

    /// Starts playback and returns immediately. `done` must be fired when
    /// playback ends or errors.
    fn speak(&mut self, utterance: &Utterance, done: PlaybackDone) -> Result<(), EngineError>;

    /// Silences all in-flight audio.
    fn cancel(&mut self);
}
