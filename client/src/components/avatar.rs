use leptos::prelude::*;

use crate::content::Avatar;

/// Profile photo; `srcset` only when a 2x variant is configured.
#[component]
pub fn AvatarImage(avatar: Avatar) -> impl IntoView {
    view! {
        <img
            class="avatar"
            src=avatar.src
            srcset=avatar.srcset()
            alt=avatar.alt
            width="160"
            height="160"
            loading="eager"
        />
    }
}
