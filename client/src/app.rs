//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::{footer::Footer, nav_bar::NavBar, page_host::PageHost};
use crate::content::site;
use crate::state::route::{self, begin_navigation};
use crate::state::theme::ThemeContext;
use crate::state::transition::{self, TRANSITION_STEP_MS, TransitionState, TransitionTiming};
use crate::util::document::BrowserViewport;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme context and sets up client-side routing. The stored
/// theme is loaded in an effect, so it is only read in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = ThemeContext::new();
    provide_context(theme);
    Effect::new(move || theme.init());

    let structured_data = site().structured_data().to_string();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Meta name="description" content=site().summary/>
        <script type="application/ld+json" inner_html=structured_data></script>

        <Router>
            <SiteShell/>
        </Router>
    }
}

/// Chrome around the routed pages. Owns the transition state and reacts to
/// path changes.
///
/// `PageHost` sits outside `<Routes>` so a route change never remounts it;
/// the exiting page stays the live instance until the transition drops it.
/// `<Routes>` only declares the known paths and redirects the rest.
#[component]
fn SiteShell() -> impl IntoView {
    let location = use_location();
    let initial = route::Route::resolve(&location.pathname.get_untracked());
    let transition_state = RwSignal::new(TransitionState::new(initial));
    let timing = RwSignal::new(TransitionTiming { step_ms: TRANSITION_STEP_MS });
    provide_context(transition_state);
    provide_context(timing);

    Effect::new(move || timing.set(TransitionTiming::for_viewport(&BrowserViewport)));

    Effect::new(move || {
        let path = location.pathname.get();
        let started = transition_state
            .try_update(|t| begin_navigation(t, &BrowserViewport, &path))
            .flatten();
        if let Some(start) = started {
            timing.set(start.timing);
            transition::drive(transition_state, start.seq, start.timing.step_ms);
        }
    });

    view! {
        <div class="site">
            <NavBar/>
            <main class="site-main">
                <PageHost/>
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("") view=KnownRoute/>
                    <Route path=StaticSegment("about") view=KnownRoute/>
                    <Route path=StaticSegment("resume") view=KnownRoute/>
                </Routes>
            </main>
            <Footer/>
        </div>
    }
}

/// Route outlet for a known path. Pages are rendered by `PageHost`.
#[component]
fn KnownRoute() -> impl IntoView {}
