//! Demo video playback state

/// Play/mute flags mirrored onto the `<video>` element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub playing: bool,
    pub muted: bool,
}

impl Default for PlaybackState {
    /// Paused and muted, as the page loads
    fn default() -> Self {
        Self {
            playing: false,
            muted: true,
        }
    }
}

impl PlaybackState {
    /// Flip playing and return the new value
    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Flip muted and return the new value
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// The element refused to play (autoplay policy); show the overlay again
    pub fn play_rejected(&mut self) {
        self.playing = false;
    }

    /// The big play button covers the video only while paused
    pub fn overlay_visible(&self) -> bool {
        !self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = PlaybackState::default();
        assert!(!state.playing);
        assert!(state.muted);
        assert!(state.overlay_visible());
    }

    #[test]
    fn test_toggle_play_hides_and_shows_overlay() {
        let mut state = PlaybackState::default();
        assert!(state.toggle_play());
        assert!(!state.overlay_visible());
        assert!(!state.toggle_play());
        assert!(state.overlay_visible());
    }

    #[test]
    fn test_mute_independent_of_play() {
        let mut state = PlaybackState::default();
        state.toggle_play();
        assert!(!state.toggle_mute());
        assert!(state.playing);
    }

    #[test]
    fn test_play_rejected() {
        let mut state = PlaybackState::default();
        state.toggle_play();
        state.play_rejected();
        assert!(state.overlay_visible());
    }
}
