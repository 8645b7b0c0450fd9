//! View Employees Page
//!
//! Admin grid of every employee, loaded once per visit.

use leptos::*;

use crate::api;
use crate::components::{EmployeeCard, Loading};
use crate::state::diagnostics::BrowserDiagnostics;
use crate::state::list::{EmployeeListView, ListContent, EMPTY_MESSAGE};

/// Employee list page component
#[component]
pub fn ViewEmployees() -> impl IntoView {
    let list = create_rw_signal(EmployeeListView::mounted());

    // Fetch employees on mount
    create_effect(move |_| {
        spawn_local(async move {
            let result = api::fetch_employees().await;
            // The page may have been left while the read was in flight
            list.try_update(|view| view.finish(result, &mut BrowserDiagnostics));
        });
    });

    view! {
        <div class="panel" aria-busy=move || list.with(|state| state.is_loading()).to_string()>
            <h2>"View Employees"</h2>

            {move || {
                list.with(|state| match state.content() {
                    ListContent::Loading => view! { <Loading /> }.into_view(),
                    ListContent::Empty => view! {
                        <div class="empty">{EMPTY_MESSAGE}</div>
                    }
                    .into_view(),
                    ListContent::Grid(employees) => view! {
                        <div class="grid">
                            {employees
                                .iter()
                                .cloned()
                                .map(|employee| view! { <EmployeeCard employee=employee /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view(),
                })
            }}
        </div>
    }
}
