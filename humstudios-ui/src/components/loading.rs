//! Loading Component

use leptos::*;

/// Full-width loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <div class="spinner" />
        </div>
    }
}
