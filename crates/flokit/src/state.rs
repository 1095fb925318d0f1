use strum::Display as StrumDisplay;

/// Whether the items are expanded. Starts closed on every mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

impl OpenState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn flipped(&self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Flips unconditionally and returns the new state.
    pub fn toggle(&mut self) -> Self {
        *self = self.flipped();
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(OpenState::default(), OpenState::Closed);
        assert!(!OpenState::default().is_open());
    }

    #[test]
    fn test_double_toggle_round_trips() {
        for start in [OpenState::Closed, OpenState::Open] {
            let mut state = start;
            state.toggle();
            state.toggle();
            assert_eq!(state, start);
        }
    }

    #[test]
    fn test_odd_toggles_open() {
        for n in [1, 3, 5, 11] {
            let mut state = OpenState::Closed;
            for _ in 0..n {
                state.toggle();
            }
            assert_eq!(state, OpenState::Open);
        }
    }
}
