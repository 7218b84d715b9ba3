//! Child-process synthesizer backend.
//!
//! Shells out to an `espeak`-style command, one child at a time. Cancel
//! kills the child; a waiter thread fires the playback handle when the
//! child exits on its own. Each playback carries a generation number so a
//! waiter left over from superseded audio exits without firing anything.

use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use super::{EngineError, PlaybackDone, SpeechEngine, Utterance, Voice};

const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Default)]
struct ChildSlot {
    generation: u64,
    child: Option<Child>,
}

/// Synthesizer backend driving an external command.
pub struct ProcessEngine {
    program: String,
    slot: Arc<Mutex<ChildSlot>>,
}

impl ProcessEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            slot: Arc::new(Mutex::new(ChildSlot::default())),
        }
    }

    /// The default backend on hosts with espeak installed.
    pub fn espeak() -> Self {
        Self::new("espeak")
    }

    fn lock_slot(&self) -> MutexGuard<'_, ChildSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SpeechEngine for ProcessEngine {
    fn voices(&self) -> Vec<Voice> {
        // Command backends do not enumerate voices; the controller falls
        // back to its configured language tag, passed below as `-v`.
        Vec::new()
    }

    fn speak(&mut self, utterance: &Utterance, done: PlaybackDone) -> Result<(), EngineError> {
        self.cancel();

        let voice = utterance
            .voice
            .as_deref()
            .unwrap_or(utterance.language.as_str());
        let child = Command::new(&self.program)
            .arg("-v")
            .arg(voice)
            .arg(&utterance.text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let generation = {
            let mut slot = self.lock_slot();
            slot.generation += 1;
            slot.child = Some(child);
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        thread::spawn(move || wait_for_exit(&slot, generation, &done));
        Ok(())
    }

    fn cancel(&mut self) {
        let mut slot = self.lock_slot();
        // Bumping the generation orphans any waiter still polling.
        slot.generation += 1;
        if let Some(mut child) = slot.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

fn wait_for_exit(slot: &Arc<Mutex<ChildSlot>>, generation: u64, done: &PlaybackDone) {
    loop {
        thread::sleep(EXIT_POLL_INTERVAL);
        let mut guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.generation != generation {
            return;
        }
        let finished = match guard.child.as_mut() {
            Some(child) => !matches!(child.try_wait(), Ok(None)),
            None => true,
        };
        if finished {
            guard.child = None;
            drop(guard);
            done.fire();
            return;
        }
    }
}
