//! Spoken announcements via a platform text-to-speech command.

use std::process::{Child, Command, Stdio};

use housie::announce::Announcer;
use log::debug;

/// Candidate speech commands, tried in order on the first announcement.
const SPEAKERS: &[&str] = &["espeak-ng", "espeak", "say", "flite"];

/// Announcer that pipes text through the first text-to-speech command found
/// on this machine.
///
/// A new utterance kills the previous one first, so the repeat of a call
/// never overlaps its first announcement. When no speech command exists
/// every call is a silent no-op and the on-screen announcement text stands
/// alone.
#[derive(Debug, Default)]
pub struct SpeechAnnouncer {
    speaker: Option<&'static str>,
    utterance: Option<Child>,
    probed: bool,
}

impl SpeechAnnouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn spawn_speaker(speaker: &str, text: &str) -> Option<Child> {
        Command::new(speaker)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .ok()
    }
}

impl Announcer for SpeechAnnouncer {
    fn announce(&mut self, text: &str) {
        self.cancel();

        if let Some(speaker) = self.speaker {
            self.utterance = Self::spawn_speaker(speaker, text);
            return;
        }
        if self.probed {
            return;
        }
        self.probed = true;
        for &speaker in SPEAKERS {
            if let Some(child) = Self::spawn_speaker(speaker, text) {
                debug!("speaking through {speaker}");
                self.speaker = Some(speaker);
                self.utterance = Some(child);
                return;
            }
        }
        debug!("no speech command available, announcements are visual only");
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.utterance.take() {
            // reap a finished utterance, kill one still speaking
            if let Ok(None) = child.try_wait() {
                let _ = child.kill();
                let _ = child.wait();
            }
        }
    }
}

impl Drop for SpeechAnnouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
