//! Employee Card Component
//!
//! Photo, contact lines and a "View Details" action for one employee.

use leptos::*;
use leptos_router::*;

use crate::state::card::{card_lines, view_details, CardImage, NO_IMAGE};
use crate::state::employee::Employee;

/// Card for one employee in the admin grid
#[component]
pub fn EmployeeCard(employee: Employee) -> impl IntoView {
    let navigate = use_navigate();
    let id = employee.id.clone();

    let lines = card_lines(&employee)
        .into_iter()
        .map(|line| match line.label {
            None => view! { <p class="name">{line.value.to_string()}</p> }.into_view(),
            Some(label) => {
                view! { <p class="line">{label}": "{line.value.to_string()}</p> }.into_view()
            }
        })
        .collect_view();

    let on_details = move |_| {
        view_details(&id, &|path: &str| navigate(path, Default::default()));
    };

    view! {
        <div class="card">
            <Avatar employee=employee.clone() />
            <div>{lines}</div>
            <div class="actions">
                <button class="button" on:click=on_details>
                    "View Details"
                </button>
            </div>
        </div>
    }
}

/// Photo of an employee, or the "No Image" placeholder
#[component]
pub fn Avatar(employee: Employee) -> impl IntoView {
    match CardImage::of(&employee) {
        CardImage::Photo(url) => view! {
            <img class="avatar" src=url.to_string() alt="Employee" />
        }
        .into_view(),
        CardImage::Placeholder => view! {
            <div class="avatar placeholder">
                <span>{NO_IMAGE}</span>
            </div>
        }
        .into_view(),
    }
}
