//! Document and viewport side effects.
//!
//! The traits are the seams the theme and navigation controllers write
//! through; the browser implementations only act under `hydrate` and are
//! no-ops during SSR so server rendering stays deterministic.

use crate::state::theme::Theme;

/// Sink for the global visual-mode flag.
pub trait ModeFlag {
    fn set_mode(&self, theme: Theme);
}

/// Scroll and motion queries against the visible viewport.
pub trait Viewport {
    fn scroll_to_top(&self);
    fn prefers_reduced_motion(&self) -> bool;
}

/// The `<html>` element: `data-theme` attribute plus a `dark` class.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ModeFlag for DocumentRoot {
    fn set_mode(&self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let _ = el.set_attribute("data-theme", theme.as_str());
            let _ = el.class_list().toggle_with_force("dark", theme.is_dark());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_to_top(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    }

    fn prefers_reduced_motion(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Calendar year for the footer. `None` when built without a clock source.
pub fn current_year() -> Option<i32> {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).ok()
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        Some(time::OffsetDateTime::now_utc().year())
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        None
    }
}
