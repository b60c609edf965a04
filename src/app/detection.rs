//! Detection state, token classification, and the output table.
//!
//! ```text
//!   byte ──▶ DetectionState::from_token ──▶ ChannelLevels::for_state
//!   '1'      Detected                        A=L B=L C=H D=H
//!   '0'      Clear                           A=H B=H C=L D=L
//!   other    None (discarded)
//! ```

/// Token sent by the host when an object is inside the collision threshold.
pub const TOKEN_DETECTED: u8 = b'1';
/// Token sent by the host when the path is clear.
pub const TOKEN_CLEAR: u8 = b'0';

/// The two mutually exclusive output configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionState {
    Detected,
    Clear,
}

impl DetectionState {
    /// Classify a single received byte. Unrecognized bytes yield `None`.
    pub const fn from_token(byte: u8) -> Option<Self> {
        match byte {
            TOKEN_DETECTED => Some(Self::Detected),
            TOKEN_CLEAR => Some(Self::Clear),
            _ => None,
        }
    }
}

/// One physical output line, A..D maps to LED1..LED4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    A,
    B,
    C,
    D,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::A, Channel::B, Channel::C, Channel::D];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Levels of all four channels (`true` = HIGH).
///
/// Only constructible from a [`DetectionState`], so A/B and C/D are always
/// driven as complementary pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelLevels {
    clear_pair: bool,
}

impl ChannelLevels {
    pub const fn for_state(state: DetectionState) -> Self {
        Self {
            clear_pair: matches!(state, DetectionState::Clear),
        }
    }

    pub const fn level(self, channel: Channel) -> bool {
        match channel {
            Channel::A | Channel::B => self.clear_pair,
            Channel::C | Channel::D => !self.clear_pair,
        }
    }

    /// Levels in channel order A..D.
    pub const fn as_array(self) -> [bool; 4] {
        [self.clear_pair, self.clear_pair, !self.clear_pair, !self.clear_pair]
    }

    pub const fn state(self) -> DetectionState {
        if self.clear_pair {
            DetectionState::Clear
        } else {
            DetectionState::Detected
        }
    }
}

impl Default for ChannelLevels {
    /// Power-on levels: Clear.
    fn default() -> Self {
        Self::for_state(DetectionState::Clear)
    }
}
