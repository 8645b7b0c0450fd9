//! Employee Details Page
//!
//! Every field of one employee, selected by the `id` query parameter.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Avatar, Loading};
use crate::state::details::{detail_rows, DetailsState};
use crate::state::diagnostics::BrowserDiagnostics;
use crate::state::employee::Employee;
use crate::state::list::LIST_ROUTE;

/// Employee details page component
#[component]
pub fn EmployeeDetails() -> impl IntoView {
    let query = use_query_map();
    let details = create_rw_signal(DetailsState::MissingId);

    // Fetch whenever the id changes
    create_effect(move |_| {
        let id = query.with(|q| q.get("id").cloned());
        details.set(DetailsState::for_query(id.as_deref()));

        if let Some(id) = id.filter(|id| !id.is_empty()) {
            spawn_local(async move {
                let result = api::fetch_employee(&id).await;
                details.try_set(DetailsState::settle(result, &mut BrowserDiagnostics));
            });
        }
    });

    view! {
        <div class="panel">
            <h2>"Employee Details"</h2>

            {move || match details.get() {
                DetailsState::MissingId => view! {
                    <p class="empty">"Missing employee id"</p>
                }
                .into_view(),
                DetailsState::Loading => view! { <Loading /> }.into_view(),
                DetailsState::Found(employee) => view! {
                    <Details employee=employee />
                }
                .into_view(),
                DetailsState::NotFound => view! {
                    <p class="empty">"Employee not found"</p>
                }
                .into_view(),
                DetailsState::Unavailable => view! {
                    <p class="empty">"Employee data is unavailable"</p>
                }
                .into_view(),
            }}

            <p>
                <A href=LIST_ROUTE>"Back to employees"</A>
            </p>
        </div>
    }
}

#[component]
fn Details(employee: Employee) -> impl IntoView {
    let rows = detail_rows(&employee)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <dt>{label}</dt>
                <dd>{value.to_string()}</dd>
            }
        })
        .collect_view();

    view! {
        <Avatar employee=employee.clone() />
        <dl class="details">{rows}</dl>
    }
}
