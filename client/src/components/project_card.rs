use leptos::either::Either;
use leptos::prelude::*;

use crate::content::{Project, ProjectHeading};

/// One project tile. Projects without a link get a plain title.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let heading = match project.heading() {
        ProjectHeading::Linked { title, href } => Either::Left(view! {
            <a class="project-card__link" href=href target="_blank" rel="noreferrer">
                {title}
            </a>
        }),
        ProjectHeading::Plain { title } => Either::Right(view! { <span>{title}</span> }),
    };

    view! {
        <article class="card project-card">
            <h3 class="project-card__title">{heading}</h3>
            <p class="project-card__description">{project.description}</p>
        </article>
    }
}
