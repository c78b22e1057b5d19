//! Lofi radio widget
//!
//! A small ordered playlist with a current index and play/pause state. The
//! actual sound device sits behind the [`Playback`] trait; playback start
//! failures are swallowed and the widget simply stays paused.

use thiserror::Error;

/// Default volume on the 0-100 input scale
pub const DEFAULT_VOLUME: u8 = 40;

/// Volume step for the volume keys
pub const VOLUME_STEP: u8 = 5;

/// One playable track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub path: &'static str,
}

/// The fixed playlist
pub const TRACKS: &[Track] = &[
    Track { title: "Midnight Coding", path: "assets/lofi-1.mp3" },
    Track { title: "Soft Keyboard Rain", path: "assets/lofi-2.mp3" },
    Track { title: "City Lights Lofi", path: "assets/lofi-3.mp3" },
];

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("audio backend unavailable")]
    Unavailable,
    #[error("could not start playback: {0}")]
    Start(String),
}

/// Seam to the host's media capability
pub trait Playback {
    /// Point the backend at a new resource
    fn load(&mut self, path: &str);

    /// Attempt to start playback of the loaded resource
    fn play(&mut self) -> Result<(), PlaybackError>;

    fn pause(&mut self);

    /// Volume on the 0.0-1.0 output scale
    fn set_volume(&mut self, volume: f32);

    /// True once when the current resource finished naturally
    fn take_ended(&mut self) -> bool;
}

/// No-op backend used when no sound device is wired up
#[derive(Debug, Default)]
pub struct SilentPlayback;

impl Playback for SilentPlayback {
    fn load(&mut self, _path: &str) {}

    fn play(&mut self) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn set_volume(&mut self, _volume: f32) {}

    fn take_ended(&mut self) -> bool {
        false
    }
}

/// Playback state of the widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayerState {
    /// No track loaded yet
    #[default]
    Idle,
    Paused,
    Playing,
}

/// Map the 0-100 input scale to the backend's 0.0-1.0 scale
pub fn volume_scale(volume: u8) -> f32 {
    f32::from(volume.min(100)) / 100.0
}

/// The radio widget
pub struct Radio {
    backend: Box<dyn Playback>,
    state: PlayerState,
    track_index: usize,
    volume: u8,

    /// Visibility of the control surface; orthogonal to playback
    pub panel_open: bool,
}

impl Radio {
    pub fn new(backend: Box<dyn Playback>) -> Self {
        let mut radio = Self {
            backend,
            state: PlayerState::default(),
            track_index: 0,
            volume: DEFAULT_VOLUME,
            panel_open: false,
        };
        radio.backend.set_volume(volume_scale(radio.volume));
        radio
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn track_index(&self) -> usize {
        self.track_index
    }

    pub fn current_track(&self) -> &'static Track {
        &TRACKS[self.track_index]
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    fn load_current(&mut self) {
        self.backend.load(TRACKS[self.track_index].path);
    }

    /// Attempt to start playback; a rejected start leaves the widget paused
    fn start(&mut self) {
        match self.backend.play() {
            Ok(()) => self.state = PlayerState::Playing,
            Err(e) => {
                tracing::debug!("playback start failed: {e}");
                self.state = PlayerState::Paused;
            }
        }
    }

    /// Play/pause activation
    pub fn play_pause(&mut self) {
        match self.state {
            PlayerState::Idle => {
                self.load_current();
                self.start();
            }
            PlayerState::Paused => self.start(),
            PlayerState::Playing => {
                self.backend.pause();
                self.state = PlayerState::Paused;
            }
        }
    }

    /// Advance to the next track, wrapping at the end of the playlist.
    /// Resumes playback only if a track was already playing.
    pub fn next(&mut self) {
        let was_playing = self.state == PlayerState::Playing;
        self.track_index = (self.track_index + 1) % TRACKS.len();
        self.load_current();
        if was_playing {
            self.start();
        } else {
            self.state = PlayerState::Paused;
        }
    }

    /// Set volume on the 0-100 input scale; applied immediately
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
        self.backend.set_volume(volume_scale(self.volume));
    }

    pub fn volume_up(&mut self) {
        self.set_volume(self.volume.saturating_add(VOLUME_STEP));
    }

    pub fn volume_down(&mut self) {
        self.set_volume(self.volume.saturating_sub(VOLUME_STEP));
    }

    /// Poll the backend's end-of-track signal. A natural end advances to the
    /// next track and always resumes playback.
    pub fn tick(&mut self) {
        if self.backend.take_ended() {
            self.track_index = (self.track_index + 1) % TRACKS.len();
            self.load_current();
            self.start();
        }
    }
}

impl std::fmt::Debug for Radio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Radio")
            .field("state", &self.state)
            .field("track_index", &self.track_index)
            .field("volume", &self.volume)
            .field("panel_open", &self.panel_open)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use proptest::prelude::*;

    use super::*;

    /// Recording fake for the playback seam
    #[derive(Debug, Clone, Default)]
    struct FakeState {
        loaded: Vec<String>,
        playing: bool,
        volume: f32,
        fail_play: bool,
        ended: bool,
    }

    #[derive(Debug, Clone, Default)]
    struct FakePlayback(Rc<RefCell<FakeState>>);

    impl FakePlayback {
        fn handle(&self) -> Rc<RefCell<FakeState>> {
            Rc::clone(&self.0)
        }
    }

    impl Playback for FakePlayback {
        fn load(&mut self, path: &str) {
            self.0.borrow_mut().loaded.push(path.to_string());
        }

        fn play(&mut self) -> Result<(), PlaybackError> {
            let mut state = self.0.borrow_mut();
            if state.fail_play {
                Err(PlaybackError::Start("autoplay blocked".to_string()))
            } else {
                state.playing = true;
                Ok(())
            }
        }

        fn pause(&mut self) {
            self.0.borrow_mut().playing = false;
        }

        fn set_volume(&mut self, volume: f32) {
            self.0.borrow_mut().volume = volume;
        }

        fn take_ended(&mut self) -> bool {
            std::mem::take(&mut self.0.borrow_mut().ended)
        }
    }

    fn radio_with_fake() -> (Radio, Rc<RefCell<FakeState>>) {
        let fake = FakePlayback::default();
        let handle = fake.handle();
        (Radio::new(Box::new(fake)), handle)
    }

    #[test]
    fn starts_idle_at_track_zero_with_default_volume() {
        let (radio, handle) = radio_with_fake();
        assert_eq!(radio.state(), PlayerState::Idle);
        assert_eq!(radio.track_index(), 0);
        assert_eq!(radio.volume(), DEFAULT_VOLUME);
        assert!((handle.borrow().volume - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn play_pause_loads_then_toggles() {
        let (mut radio, handle) = radio_with_fake();

        radio.play_pause();
        assert_eq!(radio.state(), PlayerState::Playing);
        assert_eq!(handle.borrow().loaded, vec![TRACKS[0].path.to_string()]);

        radio.play_pause();
        assert_eq!(radio.state(), PlayerState::Paused);
        assert!(!handle.borrow().playing);

        radio.play_pause();
        assert_eq!(radio.state(), PlayerState::Playing);
        // The track is not reloaded on resume
        assert_eq!(handle.borrow().loaded.len(), 1);
    }

    #[test]
    fn rejected_start_leaves_widget_paused() {
        let (mut radio, handle) = radio_with_fake();
        handle.borrow_mut().fail_play = true;

        radio.play_pause();
        assert_eq!(radio.state(), PlayerState::Paused);
        assert!(!handle.borrow().playing);
    }

    #[test]
    fn next_wraps_modulo_playlist_length() {
        let (mut radio, _handle) = radio_with_fake();
        for expected in [1, 2, 0, 1] {
            radio.next();
            assert_eq!(radio.track_index(), expected);
        }
    }

    #[test]
    fn next_resumes_only_if_playing() {
        let (mut radio, handle) = radio_with_fake();

        radio.next();
        assert_eq!(radio.state(), PlayerState::Paused);
        assert!(!handle.borrow().playing);

        radio.play_pause();
        radio.next();
        assert_eq!(radio.state(), PlayerState::Playing);
        assert!(handle.borrow().playing);
    }

    #[test]
    fn natural_end_advances_and_always_resumes() {
        let (mut radio, handle) = radio_with_fake();
        radio.play_pause();
        handle.borrow_mut().ended = true;

        radio.tick();
        assert_eq!(radio.track_index(), 1);
        assert_eq!(radio.state(), PlayerState::Playing);

        // No spurious advance without the signal
        radio.tick();
        assert_eq!(radio.track_index(), 1);
    }

    #[test]
    fn volume_endpoints_map_to_output_scale() {
        assert_eq!(volume_scale(0), 0.0);
        assert!((volume_scale(40) - 0.4).abs() < f32::EPSILON);
        assert_eq!(volume_scale(100), 1.0);
    }

    #[test]
    fn volume_change_does_not_affect_play_state() {
        let (mut radio, handle) = radio_with_fake();
        radio.play_pause();
        radio.set_volume(80);
        assert_eq!(radio.state(), PlayerState::Playing);
        assert!((handle.borrow().volume - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn panel_toggle_is_orthogonal_to_playback() {
        let (mut radio, _handle) = radio_with_fake();
        radio.play_pause();
        radio.toggle_panel();
        assert!(radio.panel_open);
        assert_eq!(radio.state(), PlayerState::Playing);
        radio.close_panel();
        assert!(!radio.panel_open);
    }

    proptest! {
        #[test]
        fn track_index_after_n_nexts_is_n_mod_len(n in 0usize..200) {
            let (mut radio, _handle) = radio_with_fake();
            for _ in 0..n {
                radio.next();
            }
            prop_assert_eq!(radio.track_index(), n % TRACKS.len());
        }

        #[test]
        fn volume_scale_stays_in_unit_range(v in 0u8..=255) {
            let scaled = volume_scale(v);
            prop_assert!((0.0..=1.0).contains(&scaled));
        }
    }
}
