//! ============================================================================
//! NAVIGATION VIEW MODEL
//! ============================================================================
//!
//! Sidebar state: fetches the operator's menu map, derives the primary
//! navigation and falls back to a static list when the fetch fails.
//!
//! ## Lifecycle
//! - One instance per mounted sidebar, nothing is shared between instances.
//! - `refresh()` re-fetches and swaps the exposed list in one write.
//! - Dropping the instance discards everything; an in-flight refresh that
//!   completes later only touches its own (dropped) state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::navigation::{fallback_navigation, MenuTreeDeriver, NavItem};
use crate::repositories::MenuSource;

/// What the sidebar renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub items: Vec<NavItem>,
    /// Operator-facing message of the last failed fetch.
    pub error: Option<String>,
    pub is_loading: bool,
    /// True when `items` is the static fallback list.
    pub from_fallback: bool,
}

pub struct NavigationViewModel<S: MenuSource> {
    source: Arc<S>,
    deriver: MenuTreeDeriver,
    state: RwLock<NavigationSnapshot>,
    /// Token of the most recent refresh; older completions are dropped.
    latest_request: AtomicU64,
}

impl<S: MenuSource> NavigationViewModel<S> {
    pub fn new(source: Arc<S>, deriver: MenuTreeDeriver) -> Self {
        Self {
            source,
            deriver,
            state: RwLock::new(NavigationSnapshot::default()),
            latest_request: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        self.state.read().clone()
    }

    pub fn items(&self) -> Vec<NavItem> {
        self.state.read().items.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn deriver(&self) -> &MenuTreeDeriver {
        &self.deriver
    }

    /// Entry to highlight for the current route.
    pub fn active_item(&self, current_path: &str) -> Option<NavItem> {
        let state = self.state.read();
        self.deriver.active_item(&state.items, current_path).cloned()
    }

    /// Fetch and derive again.
    ///
    /// Never fails: a fetch error installs the fallback list together with
    /// the error message. If another refresh started after this one, this
    /// result is discarded and `false` is returned.
    pub async fn refresh(&self) -> bool {
        let token = {
            let mut state = self.state.write();
            state.is_loading = true;
            self.latest_request.fetch_add(1, Ordering::SeqCst) + 1
        };

        let next = match self.source.fetch_menus().await {
            Ok(map) => {
                let items = self.deriver.navigation_items(&map);
                info!("Navigation derived: {} of {} menus", items.len(), map.len());
                NavigationSnapshot { items, error: None, is_loading: false, from_fallback: false }
            }
            Err(e) => {
                warn!("Menu fetch failed, using fallback navigation: {}", e);
                NavigationSnapshot {
                    items: fallback_navigation(self.deriver.path_prefix()),
                    error: Some(e.to_string()),
                    is_loading: false,
                    from_fallback: true,
                }
            }
        };

        // Compare under the write lock so a refresh starting now cannot
        // have its loading flag overwritten
        let mut state = self.state.write();
        if self.latest_request.load(Ordering::SeqCst) != token {
            debug!("Discarding superseded navigation refresh #{}", token);
            return false;
        }
        *state = next;
        true
    }
}
