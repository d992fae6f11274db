//! Background-music state machine. Playback itself happens in the host;
//! this tracks intent and copes with hosts that refuse autoplay until a
//! user gesture arrives.

use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicState {
    NotStarted,
    Playing,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    Play,
    Pause,
}

#[derive(Debug, Clone)]
pub struct MusicControl {
    state: MusicState,
    /// Set when the host denied playback; retried on the next gesture.
    wants_playback: bool,
}

impl Default for MusicControl {
    fn default() -> Self {
        Self::new()
    }
}

impl MusicControl {
    pub fn new() -> Self {
        Self {
            state: MusicState::NotStarted,
            wants_playback: true,
        }
    }

    pub fn state(&self) -> MusicState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == MusicState::Playing
    }

    /// User toggled the music button.
    pub fn toggle(&mut self) -> Option<AudioCommand> {
        match self.state {
            MusicState::Playing => {
                self.state = MusicState::Muted;
                self.wants_playback = false;
                Some(AudioCommand::Pause)
            }
            MusicState::Muted | MusicState::NotStarted => {
                self.wants_playback = true;
                Some(AudioCommand::Play)
            }
        }
    }

    /// Host confirmed playback actually began.
    pub fn on_started(&mut self) {
        self.state = MusicState::Playing;
    }

    /// Host refused to play (e.g. autoplay policy). Stay stopped and
    /// wait for a gesture.
    pub fn on_denied(&mut self) {
        warn!("audio playback denied by host, will retry on interaction");
        if self.state == MusicState::Playing {
            self.state = MusicState::NotStarted;
        }
    }

    /// A user gesture happened; retry if playback is still wanted.
    pub fn on_user_interaction(&mut self) -> Option<AudioCommand> {
        if self.wants_playback && self.state != MusicState::Playing {
            Some(AudioCommand::Play)
        } else {
            None
        }
    }
}
