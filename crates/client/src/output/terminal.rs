//! Terminal navigator.

use memberdb_core::routes::Route;
use memberdb_core::views::StaticView;

use super::Printer;
use crate::navigation::Navigator;

/// Navigates by rendering the destination's static view.
///
/// Routes without a static view are only logged; the terminal has no home
/// page to show.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNavigator {
    printer: Printer,
}

impl TerminalNavigator {
    pub fn new(printer: Printer) -> Self {
        Self { printer }
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "navigate");
        match StaticView::for_route(route) {
            Some(view) => self.printer.view(&view),
            None => tracing::info!(route = %route, "Navigated to {}", route.label()),
        }
    }
}
