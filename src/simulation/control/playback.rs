/// Running/paused flag for the render loop, kept outside the core.
///
/// While running, every animation frame steps once. While paused, only an
/// explicit step request does. The two never both apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Playback {
    Running,
    #[default]
    Paused,
}

impl Playback {
    #[inline]
    pub fn is_running(self) -> bool {
        self == Playback::Running
    }

    pub fn toggled(self) -> Self {
        match self {
            Playback::Running => Playback::Paused,
            Playback::Paused => Playback::Running,
        }
    }

    /// Should an animation frame advance the simulation
    #[inline]
    pub fn steps_on_frame(self) -> bool {
        self.is_running()
    }

    /// Should a manual step request advance the simulation
    #[inline]
    pub fn steps_on_request(self) -> bool {
        !self.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_paused() {
        assert_eq!(Playback::default(), Playback::Paused);
    }

    #[test]
    fn frame_and_manual_steps_are_exclusive() {
        for playback in [Playback::Running, Playback::Paused] {
            assert_ne!(playback.steps_on_frame(), playback.steps_on_request());
        }
        assert!(Playback::Running.steps_on_frame());
        assert!(Playback::Paused.steps_on_request());
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Playback::Paused.toggled(), Playback::Running);
        assert_eq!(Playback::Paused.toggled().toggled(), Playback::Paused);
    }
}
