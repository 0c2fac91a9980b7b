//! Navigation between console views.

use std::sync::{Arc, Mutex, PoisonError};

use memberdb_core::routes::Route;

/// Moves the caller to another view.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that only remembers where it was sent.
///
/// Used when embedding the workflow without a front end, and in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every route navigated to, oldest first.
    pub fn visited(&self) -> Vec<Route> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.visited().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "navigate");
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}
