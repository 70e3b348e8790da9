//! Top navigation: brand, route links, theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::site;
use crate::state::route::ROUTE_TABLE;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">
                {site().brand}
            </A>
            <nav class="nav-bar__links" aria-label="Main">
                {ROUTE_TABLE
                    .iter()
                    .map(|(path, route)| {
                        view! {
                            <A href=*path exact=true attr:class="nav-bar__link">
                                {route.label()}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <span class="nav-bar__spacer"></span>
            <ThemeToggle/>
        </header>
    }
}
