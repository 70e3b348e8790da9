use leptos::prelude::*;

use crate::content::site;
use crate::util::document::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let line = current_year().map(|year| site().copyright_line(year));

    view! {
        <footer class="site-footer">
            <p>{line}</p>
        </footer>
    }
}
