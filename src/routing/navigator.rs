//! Navigation side effects

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

/// Performs route changes on behalf of pages and guards
pub trait Navigator: Send + Sync {
    /// Navigate, adding a history entry
    fn push(&self, route: &str);

    /// Navigate, replacing the current history entry
    fn replace(&self, route: &str);

    fn current(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationKind {
    Start,
    Push,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub kind: NavigationKind,
    pub route: String,
}

/// Navigator that records every route change
#[derive(Debug)]
pub struct HistoryNavigator {
    entries: Mutex<Vec<NavigationEntry>>,
}

impl HistoryNavigator {
    pub fn new(start: &str) -> Self {
        Self {
            entries: Mutex::new(vec![NavigationEntry {
                kind: NavigationKind::Start,
                route: start.to_string(),
            }]),
        }
    }

    pub fn entries(&self) -> Vec<NavigationEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of `replace` navigations, i.e. redirects
    pub fn redirect_count(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.kind == NavigationKind::Replace)
            .count()
    }

    fn record(&self, kind: NavigationKind, route: &str) {
        tracing::debug!("Navigate ({:?}) -> {}", kind, route);
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(NavigationEntry {
                kind,
                route: route.to_string(),
            });
    }
}

impl Navigator for HistoryNavigator {
    fn push(&self, route: &str) {
        self.record(NavigationKind::Push, route);
    }

    fn replace(&self, route: &str) {
        self.record(NavigationKind::Replace, route);
    }

    fn current(&self) -> String {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .map(|e| e.route.clone())
            .unwrap_or_default()
    }
}
