use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::contact_buttons::ContactButtons;
use crate::content::site;
use crate::state::route::Route;

#[component]
pub fn AboutPage() -> impl IntoView {
    let profile = site();
    let about = profile.about;

    view! {
        <Title text=Route::About.document_title(profile.brand)/>
        <section class="section about">
            <h1 class="about__title">{about.intro_title}</h1>
            <p class="about__intro">{about.intro}</p>
            <ul class="about__facts">
                {about.facts().into_iter().map(|fact| view! { <li>{fact}</li> }).collect_view()}
            </ul>
            <ContactButtons actions=profile.contact_actions()/>
        </section>
    }
}
