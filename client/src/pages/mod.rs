//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a pure renderer over `content::site()`. `render_page` is the
//! route → page lookup used by the transition host.

pub mod about;
pub mod home;
pub mod resume;

use leptos::prelude::*;

use crate::state::route::Route;
use about::AboutPage;
use home::HomePage;
use resume::ResumePage;

pub fn render_page(route: Route) -> AnyView {
    match route {
        Route::Home => view! { <HomePage/> }.into_any(),
        Route::About => view! { <AboutPage/> }.into_any(),
        Route::Resume => view! { <ResumePage/> }.into_any(),
    }
}
