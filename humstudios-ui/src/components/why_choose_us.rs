//! "Why Choose Hum Studios?" section

use leptos::*;

use super::reveal::{Animated, RevealSection};
use crate::state::content::WHY_CHOOSE_US;

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    let section = WHY_CHOOSE_US;

    // Built inside the section so each card sees its visibility
    view! {
        <RevealSection id=section.id>
            <div>
                <Animated motion=section.heading_motion class="title">
                    <h1>{section.heading}</h1>
                    <p>{section.tagline}</p>
                </Animated>
                <div class="grid">
                    {section
                        .cards
                        .iter()
                        .map(|card| {
                            view! {
                                <Animated motion=card.motion class="card">
                                    <h3>{card.title}</h3>
                                    <p class="line">{card.body}</p>
                                </Animated>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
