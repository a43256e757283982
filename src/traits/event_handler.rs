use async_trait::async_trait;

use crate::models::{action::ActionKind, state::AppState};

/// Observer of state transitions
#[async_trait]
pub trait StateEventHandler: Send + Sync {
    /// Called after every dispatch with the new state
    async fn handle_state_change(&self, state: &AppState, action: ActionKind);

    /// Handle error from a feed or the dispatch loop
    async fn handle_error(&self, error: &anyhow::Error);
}
