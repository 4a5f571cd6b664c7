use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FeedPhase {
    #[default]
    Idle, // Not activated, or deactivated
    Loading, // Feed or favorites still pending
    Ready,   // Feed and favorites resolved
}

impl fmt::Display for FeedPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedPhase::Idle => write!(f, "Idle"),
            FeedPhase::Loading => write!(f, "Loading"),
            FeedPhase::Ready => write!(f, "Ready"),
        }
    }
}
