//! Navigation Component
//!
//! Header navigation bar with brand and links.

use leptos::*;
use leptos_router::*;

use crate::state::content::{STUDIO_NAME, WHY_CHOOSE_US};
use crate::state::list::LIST_ROUTE;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let why_us = format!("/#{}", WHY_CHOOSE_US.id);

    view! {
        <nav>
            <A href="/" class="brand">{STUDIO_NAME}</A>

            <div>
                <NavLink href="/" label="Home" />
                <a href=why_us>"Why Us"</a>
                <NavLink href=LIST_ROUTE label="Employees" />
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A href=href active_class="active">
            {label}
        </A>
    }
}
