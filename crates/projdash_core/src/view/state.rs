//! Explicit view-state handle shared by every page.

use crate::query::summary::SidebarCounts;
use crate::store::EntityStore;
use crate::view::loading::{LoadToken, LoadingTimer, DEFAULT_LOADING_DELAY};
use crate::view::page::PageKind;
use log::debug;
use std::time::{Duration, Instant};

/// Proof that a page is mounted. Handed back on teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSession {
    page: PageKind,
    load: Option<LoadToken>,
}

impl PageSession {
    pub fn page(&self) -> &PageKind {
        &self.page
    }
}

/// Cross-page signals read by the header, progress bar and sidebar.
#[derive(Debug, Clone)]
pub struct ViewState {
    title: String,
    placeholder: String,
    search_query: String,
    loading: LoadingTimer,
    sidebar: SidebarCounts,
    mounted: Option<PageSession>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_LOADING_DELAY)
    }
}

impl ViewState {
    pub fn new(loading_delay: Duration) -> Self {
        Self {
            title: PageKind::Dashboard.title(&EntityStore::new()),
            placeholder: PageKind::Dashboard
                .placeholder()
                .unwrap_or_default()
                .to_string(),
            search_query: String::new(),
            loading: LoadingTimer::new(loading_delay),
            sidebar: SidebarCounts::default(),
            mounted: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn sidebar_counts(&self) -> SidebarCounts {
        self.sidebar
    }

    /// Page currently mounted, if any.
    pub fn current_page(&self) -> Option<&PageKind> {
        self.mounted.as_ref().map(PageSession::page)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Re-reads the badge counts. Call after every visible store mutation.
    pub fn refresh_sidebar(&mut self, store: &EntityStore) {
        self.sidebar = store.sidebar_counts();
    }

    /// Re-derives the title of the mounted page, e.g. after its record was
    /// renamed or deleted.
    pub fn refresh_title(&mut self, store: &EntityStore) {
        if let Some(session) = &self.mounted {
            self.title = session.page.title(store);
        }
    }

    /// Mounts `page`: tears down the previous page, sets title and
    /// placeholder, raises the loading flag (or drops it for pages without a
    /// loader) and refreshes the sidebar.
    pub fn enter_page(&mut self, page: PageKind, store: &EntityStore, now: Instant) -> PageSession {
        if let Some(previous) = self.mounted.clone() {
            self.leave_page(previous);
        }

        self.title = page.title(store);
        if let Some(placeholder) = page.placeholder() {
            self.placeholder = placeholder.to_string();
        }
        if page.clears_search_on_enter() {
            self.search_query.clear();
        }
        let load = if page.shows_loading() {
            Some(self.loading.start(now))
        } else {
            self.loading.clear();
            None
        };
        self.refresh_sidebar(store);

        debug!(
            "event=page_enter module=view status=ok loading={}",
            load.is_some()
        );
        let session = PageSession { page, load };
        self.mounted = Some(session.clone());
        session
    }

    /// Unmounts the page owning `session`.
    ///
    /// Cancels its pending loading clear and drops list-page search text.
    /// Returns `false` when `session` is not the mounted page.
    pub fn leave_page(&mut self, session: PageSession) -> bool {
        if self.mounted.as_ref() != Some(&session) {
            return false;
        }
        if let Some(token) = session.load {
            self.loading.cancel(token);
        }
        if session.page.is_searchable_list() {
            self.search_query.clear();
        }
        self.mounted = None;
        debug!("event=page_leave module=view status=ok");
        true
    }

    /// Advances the loading timer to `now`. Returns whether the flag changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.loading.poll(now)
    }
}
