//! Resume viewer. Without a configured PDF the page says so instead of
//! embedding a broken viewer.

use leptos::either::Either;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::site;
use crate::state::route::Route;

#[component]
pub fn ResumePage() -> impl IntoView {
    let profile = site();

    let body = match profile.resume_url {
        Some(url) => Either::Left(view! {
            <div class="resume__actions">
                <a class="btn" href=url download="">
                    "Download PDF"
                </a>
                <a class="btn" href=url target="_blank" rel="noreferrer">
                    "Open in new tab"
                </a>
            </div>
            <object class="resume__viewer" data=url type="application/pdf">
                <p>
                    "This browser can't show PDFs inline. "
                    <a href=url>"Download the resume"</a>
                    " instead."
                </p>
            </object>
        }),
        None => Either::Right(view! { <p class="resume__missing">"Resume coming soon."</p> }),
    };

    view! {
        <Title text=Route::Resume.document_title(profile.brand)/>
        <section class="section resume">
            <h1 class="section__title">"Resume"</h1>
            {body}
        </section>
    }
}
