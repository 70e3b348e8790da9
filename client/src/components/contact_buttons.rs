//! Email and profile-link buttons.

use leptos::prelude::*;

use crate::content::ContactAction;

#[component]
pub fn ContactButtons(actions: Vec<ContactAction>) -> impl IntoView {
    view! {
        <div class="contact">
            {actions
                .into_iter()
                .map(|action| {
                    let target = action.external.then_some("_blank");
                    let rel = action.external.then_some("noreferrer");
                    view! {
                        <a class="btn contact__link" href=action.href target=target rel=rel>
                            {action.label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
