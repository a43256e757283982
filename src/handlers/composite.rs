use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::models::{action::ActionKind, state::AppState};
use crate::traits::event_handler::StateEventHandler;

/// One downstream handler and the action kinds it cares about.
/// `None` means every kind.
struct Route {
    handler: Arc<dyn StateEventHandler>,
    kinds: Option<Vec<ActionKind>>,
}

impl Route {
    fn accepts(&self, kind: ActionKind) -> bool {
        self.kinds.as_ref().map_or(true, |kinds| kinds.contains(&kind))
    }
}

/// Routes state changes to several handlers, optionally filtered by the
/// kind of action that produced them. Errors go to every handler.
#[derive(Default)]
pub struct CompositeEventHandler {
    routes: Vec<Route>,
}

impl CompositeEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route every state change to `handler`
    pub fn add_handler(&mut self, handler: Arc<dyn StateEventHandler>) {
        self.routes.push(Route { handler, kinds: None });
    }

    /// Route only changes produced by one of `kinds` to `handler`
    pub fn subscribe(&mut self, kinds: &[ActionKind], handler: Arc<dyn StateEventHandler>) {
        self.routes.push(Route {
            handler,
            kinds: Some(kinds.to_vec()),
        });
    }

    pub fn with_handler(mut self, handler: Arc<dyn StateEventHandler>) -> Self {
        self.add_handler(handler);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }
}

#[async_trait]
impl StateEventHandler for CompositeEventHandler {
    async fn handle_state_change(&self, state: &AppState, action: ActionKind) {
        let mut delivered = 0;
        for route in self.routes.iter().filter(|r| r.accepts(action)) {
            route.handler.handle_state_change(state, action).await;
            delivered += 1;
        }
        debug!("{} delivered to {}/{} handlers", action, delivered, self.routes.len());
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        for route in &self.routes {
            route.handler.handle_error(error).await;
        }
    }
}
