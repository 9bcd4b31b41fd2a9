use spacedash_core::Track;
use spacedash_music::{TrackResolver, lookup};
use tracing::debug;

use crate::cancel::CancelToken;

/// Lifecycle of the current-track card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TrackState {
    #[default]
    Idle,
    Resolving,
    Resolved(Track),
    NotFound,
}

#[derive(Debug, Clone, Default)]
pub struct TrackPanel {
    state: TrackState,
}

impl TrackPanel {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_state(state: TrackState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &TrackState {
        &self.state
    }

    pub fn track(&self) -> Option<&Track> {
        match &self.state {
            TrackState::Resolved(track) => Some(track),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == TrackState::Resolving
    }

    /// Resolves `locator` into this panel, replacing whatever it held.
    ///
    /// Returns `false` if `cancel` fired before the lookup finished, in which
    /// case the result is dropped and the panel goes back to `Idle`.
    pub async fn load(
        &mut self,
        locator: &str,
        resolver: &dyn TrackResolver,
        cancel: &CancelToken,
    ) -> bool {
        self.state = TrackState::Resolving;

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            track = lookup(resolver, locator) => Some(track),
        };

        match outcome {
            None => {
                debug!(locator, "track load cancelled");
                self.state = TrackState::Idle;
                false
            }
            Some(Some(track)) => {
                debug!(track_id = %track.id, "track resolved");
                self.state = TrackState::Resolved(track);
                true
            }
            Some(None) => {
                debug!(locator, "track not found");
                self.state = TrackState::NotFound;
                true
            }
        }
    }
}
