//! Home Page
//!
//! Hero banner followed by the marketing sections.

use leptos::*;

use crate::components::WhyChooseUs;
use crate::state::content::{HERO_HEADING, HERO_TAGLINE, WHY_CHOOSE_US};

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{HERO_HEADING}</h1>
            <p>{HERO_TAGLINE}</p>
            <a class="button" href=format!("#{}", WHY_CHOOSE_US.id)>"Learn more"</a>
        </div>

        <WhyChooseUs />
    }
}
