//! Employee details screen

use super::diagnostics::{Diagnostics, FETCH_FAILED_ALERT};
use super::employee::{text, Employee};

/// What the details screen shows
#[derive(Debug, Clone, PartialEq)]
pub enum DetailsState {
    /// No `id` in the query
    MissingId,
    Loading,
    Found(Employee),
    NotFound,
    /// The read failed; the user has been alerted
    Unavailable,
}

impl DetailsState {
    /// State on entering the screen with this `id` query value
    pub fn for_query(id: Option<&str>) -> Self {
        match id {
            Some(id) if !id.is_empty() => DetailsState::Loading,
            _ => DetailsState::MissingId,
        }
    }

    /// State once the read completed
    pub fn settle(
        result: Result<Option<Employee>, String>,
        diagnostics: &mut dyn Diagnostics,
    ) -> Self {
        match result {
            Ok(Some(employee)) => DetailsState::Found(employee),
            Ok(None) => DetailsState::NotFound,
            Err(error) => {
                diagnostics.report(&error);
                diagnostics.alert(FETCH_FAILED_ALERT);
                DetailsState::Unavailable
            }
        }
    }
}

/// Labelled rows of the details screen, in display order
pub fn detail_rows(e: &Employee) -> [(&'static str, &str); 8] {
    [
        ("Name", text(&e.name)),
        ("Email", text(&e.email)),
        ("Phone", text(&e.phone)),
        ("Department", text(&e.department)),
        ("Position", text(&e.position)),
        ("Reporter", text(&e.reporter)),
        ("Address", text(&e.address)),
        ("Blood Group", text(&e.blood)),
    ]
}
