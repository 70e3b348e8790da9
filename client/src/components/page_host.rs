//! Transition host for routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders every page the transition state currently has mounted, outgoing
//! first. CSS drives the actual fade from the presence modifier and the
//! `--page-transition-ms` custom property.

use leptos::prelude::*;

use crate::pages::render_page;
use crate::state::route::Route;
use crate::state::transition::{Presence, TransitionState, TransitionTiming};

#[component]
pub fn PageHost() -> impl IntoView {
    let transition = expect_context::<RwSignal<TransitionState>>();
    let timing = expect_context::<RwSignal<TransitionTiming>>();

    view! {
        <div
            class="page-host"
            style=move || format!("--page-transition-ms: {}", timing.get().css_duration())
        >
            <For
                each=move || transition.get().mounted()
                key=|(route, _)| *route
                children=move |(route, _)| view! { <PageFrame route/> }
            />
        </div>
    }
}

#[component]
fn PageFrame(route: Route) -> impl IntoView {
    let transition = expect_context::<RwSignal<TransitionState>>();
    let presence = move || transition.with(|t| t.presence_of(route));
    let class = move || format!("page-frame {}", presence().map_or("", Presence::css_modifier));
    let hidden = move || matches!(presence(), Some(Presence::Exiting | Presence::Waiting)).then_some("true");

    view! {
        <div class=class aria-hidden=hidden>
            {render_page(route)}
        </div>
    }
}
