//! Route table and navigation entry point.
//!
//! The three site routes live in one static table. Anything that does not
//! match resolves to `Home`, which is also where the router redirects
//! unmatched URLs.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::state::transition::{TransitionState, TransitionTiming};
use crate::util::document::Viewport;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    About,
    Resume,
}

/// Path → page lookup table. Order is nav-bar order.
pub const ROUTE_TABLE: [(&str, Route); 3] = [("/", Route::Home), ("/about", Route::About), ("/resume", Route::Resume)];

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        ROUTE_TABLE
            .iter()
            .find(|(_, route)| *route == self)
            .map_or("/", |(path, _)| *path)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Resume => "Resume",
        }
    }

    /// `<title>` text for the page.
    #[must_use]
    pub fn document_title(self, brand: &str) -> String {
        match self {
            Self::Home => brand.to_owned(),
            Self::About | Self::Resume => format!("{} · {brand}", self.label()),
        }
    }

    /// Exact table match. A trailing slash is ignored.
    #[must_use]
    pub fn lookup(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        ROUTE_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == normalized)
            .map(|(_, route)| *route)
    }

    /// Table match with the home page as fallback.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        Self::lookup(path).unwrap_or_default()
    }
}

/// A transition started by [`begin_navigation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationStart {
    pub seq: u64,
    /// Step delay sampled when the transition started.
    pub timing: TransitionTiming,
}

/// Handle a path change: select the page, then reset scroll before any
/// animation runs. Returns `None`, leaving scroll alone, when the page on
/// screen already matches `path`.
pub fn begin_navigation<V: Viewport>(state: &mut TransitionState, viewport: &V, path: &str) -> Option<NavigationStart> {
    let route = Route::resolve(path);
    let seq = state.navigate(route)?;
    viewport.scroll_to_top();
    let timing = TransitionTiming::for_viewport(viewport);
    log::debug!("navigating to {path} ({route:?}), transition #{seq}, step {}ms", timing.step_ms);
    Some(NavigationStart { seq, timing })
}
