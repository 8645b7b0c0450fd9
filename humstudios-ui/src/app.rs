//! App Root Component
//!
//! Main application component with routing.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{EmployeeDetails, Home, ViewEmployees};
use crate::state::card::DETAILS_ROUTE;
use crate::state::list::LIST_ROUTE;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Nav />

            <main>
                <Routes>
                    <Route path="/" view=Home />
                    <Route path=LIST_ROUTE view=ViewEmployees />
                    <Route path=DETAILS_ROUTE view=EmployeeDetails />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="panel">
            <h2>"Page Not Found"</h2>
            <p class="empty">"The page you're looking for doesn't exist."</p>
            <A href="/" class="button">"Go home"</A>
        </div>
    }
}
