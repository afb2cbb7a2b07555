use duet_core::PeerId;
use std::fmt;

/// Which button the user pressed before media was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Places calls to a known identifier.
    Caller,
    /// Shares its identifier and waits to be called.
    Answerer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallState {
    Idle,
    AwaitingLocalMedia,
    Ready,
    /// Offer sent (or being produced), waiting for the accept.
    Calling { target: PeerId },
    /// Invite stored, waiting for the user to accept.
    Ringing { from: PeerId, from_name: String },
    InCall { remote: PeerId },
    Ended,
}

impl CallState {
    pub fn is_in_call(&self) -> bool {
        matches!(self, CallState::InCall { .. })
    }

    /// Calling, ringing or connected: a call exists that can still end.
    pub fn is_active_call(&self) -> bool {
        matches!(
            self,
            CallState::Calling { .. } | CallState::Ringing { .. } | CallState::InCall { .. }
        )
    }
}

impl fmt::Display for CallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallState::Idle => write!(f, "idle"),
            CallState::AwaitingLocalMedia => write!(f, "awaiting local media"),
            CallState::Ready => write!(f, "ready"),
            CallState::Calling { target } => write!(f, "calling {}", target),
            CallState::Ringing { from, .. } => write!(f, "ringing from {}", from),
            CallState::InCall { remote } => write!(f, "in call with {}", remote),
            CallState::Ended => write!(f, "ended"),
        }
    }
}
