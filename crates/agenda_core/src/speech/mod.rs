//! Speech coordination.
//!
//! # Responsibility
//! - Serialize audio requests from any number of independent callers
//!   against one underlying synthesizer: last call wins, previous audio is
//!   cut off.
//! - Track whether audio is currently playing for play/stop affordances.
//!
//! # Invariants
//! - `speak` never blocks and never queues; it always interrupts.
//! - The reusable utterance is owned by the controller and never handed
//!   to callers.
//! - Engine failures reset the controller to idle and are never
//!   propagated.

use log::warn;

mod engine;
pub mod narrate;
mod process;

pub use engine::{EngineError, PlaybackDone, SpeechEngine, Utterance, Voice};
pub use narrate::{contact_sentence, event_sentence, location_sentence};
pub use process::ProcessEngine;

/// Voice/locale preference for read-aloud output.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// Prefix matched against engine voice language tags.
    pub preferred_language: String,
    /// Tag used when no engine voice matches the preference.
    pub fallback_language: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            preferred_language: "es".to_string(),
            fallback_language: "es-ES".to_string(),
        }
    }
}

/// Serializes access to one speech engine.
///
/// Two logical states, `idle` and `speaking`; the transition back to idle
/// is driven by the engine firing the playback handle. A request that
/// supersedes another leaves the old handle orphaned, so a late completion
/// signal from cancelled audio can never flip the state of the current
/// playback.
pub struct SpeechController<E: SpeechEngine> {
    engine: E,
    config: SpeechConfig,
    utterance: Utterance,
    playback: Option<PlaybackDone>,
}

impl<E: SpeechEngine> SpeechController<E> {
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, SpeechConfig::default())
    }

    pub fn with_config(engine: E, config: SpeechConfig) -> Self {
        Self {
            engine,
            config,
            utterance: Utterance::default(),
            playback: None,
        }
    }

    /// Starts reading `text` aloud, cutting off whatever was playing.
    ///
    /// Fire-and-forget: returns as soon as playback is handed to the
    /// engine. A failing engine leaves the controller idle.
    pub fn speak(&mut self, text: &str) {
        self.engine.cancel();

        match self
            .engine
            .voices()
            .into_iter()
            .find(|voice| voice.language.starts_with(&self.config.preferred_language))
        {
            Some(voice) => {
                self.utterance.language = voice.language;
                self.utterance.voice = Some(voice.name);
            }
            None => {
                self.utterance.language = self.config.fallback_language.clone();
                self.utterance.voice = None;
            }
        }
        self.utterance.text = text.to_string();

        let done = PlaybackDone::new();
        match self.engine.speak(&self.utterance, done.clone()) {
            Ok(()) => self.playback = Some(done),
            Err(err) => {
                warn!("event=speech_start module=speech status=error error={err}");
                self.playback = None;
            }
        }
    }

    /// Cancels playback. No-op when idle.
    pub fn stop(&mut self) {
        self.engine.cancel();
        self.playback = None;
    }

    /// Whether audio is currently playing.
    pub fn speaking(&self) -> bool {
        self.playback.as_ref().is_some_and(|done| !done.is_fired())
    }
}
