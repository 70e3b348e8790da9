//! Landing page: hero, education, projects, skills.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::avatar::AvatarImage;
use crate::components::contact_buttons::ContactButtons;
use crate::components::project_card::ProjectCard;
use crate::content::site;
use crate::state::route::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = site();
    let education = profile.education;

    view! {
        <Title text=Route::Home.document_title(profile.brand)/>
        <section class="hero">
            {profile.avatar.map(|avatar| view! { <AvatarImage avatar/> })}
            <h1 class="hero__name">{profile.name}</h1>
            <p class="hero__tagline">{profile.tagline}</p>
            <p class="hero__summary">{profile.summary}</p>
            {profile.meta_line().map(|line| view! { <p class="hero__meta">{line}</p> })}
            <ContactButtons actions=profile.contact_actions()/>
        </section>

        <section class="section">
            <h2 class="section__title">"Education"</h2>
            <div class="card">
                <h3 class="card__title">{education.school}</h3>
                <p>{education.degree}</p>
                <p class="card__muted">{education.years}</p>
                <p class="card__detail">{education.coursework}</p>
            </div>
        </section>

        <section class="section">
            <h2 class="section__title">"Projects"</h2>
            <div class="project-grid">
                {profile.projects.iter().map(|project| view! { <ProjectCard project=*project/> }).collect_view()}
            </div>
        </section>

        <section class="section">
            <h2 class="section__title">"Skills"</h2>
            <ul class="chips">
                {profile.skills.iter().map(|skill| view! { <li class="chip">{*skill}</li> }).collect_view()}
            </ul>
        </section>
    }
}
