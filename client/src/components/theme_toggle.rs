//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::theme::ThemeContext;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <button
            class="btn theme-toggle"
            type="button"
            on:click=move |_| theme.toggle()
            title=move || theme.get().toggle_label()
            aria-label=move || theme.get().toggle_label()
        >
            <img class="theme-toggle__icon" src=move || theme.get().toggle_icon() alt="" width="20" height="20"/>
        </button>
    }
}
