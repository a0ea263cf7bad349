//! Screen routes and the navigation capability

use serde::{Deserialize, Serialize};
use std::fmt;

/// Addressable screen of the ordering client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    #[default]
    Home,
    Menu,
    Checkout,
    OrderConfirmation,
    Profile,
}

impl Route {
    /// Path identifier of the route
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Menu => "/menu",
            Route::Checkout => "/checkout",
            Route::OrderConfirmation => "/order-confirmation",
            Route::Profile => "/user-profile",
        }
    }

    /// Route for a path identifier
    pub fn from_path(path: &str) -> Option<Self> {
        [
            Route::Home,
            Route::Menu,
            Route::Checkout,
            Route::OrderConfirmation,
            Route::Profile,
        ]
        .into_iter()
        .find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Something that can switch the visible screen
pub trait Navigator {
    fn navigate_to(&mut self, route: Route);
}

/// Navigator that only records where it was sent
#[derive(Debug, Clone, Default)]
pub struct RouteHistory {
    visited: Vec<Route>,
}

impl RouteHistory {
    /// Empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes in visiting order
    pub fn visited(&self) -> &[Route] {
        &self.visited
    }

    /// Most recent route
    pub fn current(&self) -> Option<Route> {
        self.visited.last().copied()
    }
}

impl Navigator for RouteHistory {
    fn navigate_to(&mut self, route: Route) {
        self.visited.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in [
            Route::Home,
            Route::Menu,
            Route::Checkout,
            Route::OrderConfirmation,
            Route::Profile,
        ] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/cart"), None);
    }

    #[test]
    fn test_history_records() {
        let mut history = RouteHistory::new();
        assert_eq!(history.current(), None);
        history.navigate_to(Route::Menu);
        history.navigate_to(Route::Checkout);
        assert_eq!(history.visited(), &[Route::Menu, Route::Checkout]);
        assert_eq!(history.current(), Some(Route::Checkout));
    }
}
