// SPDX-License-Identifier: MPL-2.0
//! Route outlet: tracks which page bodies have been loaded.
//!
//! A body is requested from the [`PageSource`] the first time its route is
//! visited and cached afterwards, so revisiting a page keeps its state.

use super::Message;
use crate::error::PageLoadError;
use crate::router::PageKind;
use crate::ui::pages::{PageModule, PageSource};
use iced::Task;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Load state of a single page body.
#[derive(Debug, Clone)]
pub enum PageState {
    Loading,
    Loaded(PageModule),
    Failed(PageLoadError),
}

/// What the outlet shows for the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutletContent {
    /// Loading placeholder.
    Placeholder,
    Page(PageKind),
    /// Error panel with a retry action.
    Failed(PageKind),
}

pub struct Outlet {
    pages: HashMap<PageKind, PageState>,
    source: Arc<dyn PageSource>,
}

impl fmt::Debug for Outlet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outlet")
            .field("pages", &self.pages.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Outlet {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            pages: HashMap::new(),
            source,
        }
    }

    #[must_use]
    pub fn state(&self, kind: PageKind) -> Option<&PageState> {
        self.pages.get(&kind)
    }

    #[must_use]
    pub fn content(&self, kind: PageKind) -> OutletContent {
        match self.pages.get(&kind) {
            Some(PageState::Loaded(_)) => OutletContent::Page(kind),
            Some(PageState::Failed(_)) => OutletContent::Failed(kind),
            Some(PageState::Loading) | None => OutletContent::Placeholder,
        }
    }

    /// Whether any page body is still in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pages
            .values()
            .any(|state| matches!(state, PageState::Loading))
    }

    pub fn page_mut(&mut self, kind: PageKind) -> Option<&mut PageModule> {
        match self.pages.get_mut(&kind) {
            Some(PageState::Loaded(page)) => Some(page),
            _ => None,
        }
    }

    /// Starts loading `kind` unless it was already requested.
    pub fn ensure_loaded(&mut self, kind: PageKind) -> Task<Message> {
        if self.pages.contains_key(&kind) {
            return Task::none();
        }
        self.start(kind)
    }

    /// Requests `kind` again after a failed load.
    pub fn retry(&mut self, kind: PageKind) -> Task<Message> {
        match self.pages.get(&kind) {
            Some(PageState::Failed(_)) => self.start(kind),
            _ => Task::none(),
        }
    }

    /// Records the outcome of a load. Results for pages that are not
    /// loading are ignored. Returns whether the state changed.
    pub fn finish(&mut self, kind: PageKind, result: Result<PageModule, PageLoadError>) -> bool {
        let Some(state) = self.pages.get_mut(&kind) else {
            return false;
        };
        if !matches!(state, PageState::Loading) {
            return false;
        }

        *state = match result {
            Ok(page) => {
                tracing::debug!(page = %kind, "page loaded");
                PageState::Loaded(page)
            }
            Err(err) => {
                tracing::warn!(page = %kind, %err, "page failed to load");
                PageState::Failed(err)
            }
        };
        true
    }

    fn start(&mut self, kind: PageKind) -> Task<Message> {
        tracing::debug!(page = %kind, "loading page");
        self.pages.insert(kind, PageState::Loading);
        Task::perform(self.source.load(kind), move |result| Message::PageLoaded {
            kind,
            result,
        })
    }
}
