//! Employee card
//!
//! Turns one record into what a card shows: a photo or placeholder, five
//! text lines and a "View Details" action.

use super::employee::{text, Employee};

/// Route of the employee details screen
pub const DETAILS_ROUTE: &str = "/admin/employee-details";

/// Placeholder text when an employee has no photo
pub const NO_IMAGE: &str = "No Image";

/// Path of the details screen for an employee id
///
/// The id is interpolated as-is.
pub fn details_path(id: &str) -> String {
    format!("{}?id={}", DETAILS_ROUTE, id)
}

/// Something that can change the active screen
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate_to(&self, path: &str) {
        self(path)
    }
}

/// "View Details" action of the card for `id`
pub fn view_details(id: &str, navigator: &dyn Navigator) {
    navigator.navigate_to(&details_path(id));
}

/// Photo slot of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardImage<'a> {
    Photo(&'a str),
    Placeholder,
}

impl<'a> CardImage<'a> {
    pub fn of(employee: &'a Employee) -> Self {
        match employee.image_url() {
            Some(url) => CardImage::Photo(url),
            None => CardImage::Placeholder,
        }
    }
}

/// One text line of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLine<'a> {
    /// Prefix such as "Email", `None` for the headline
    pub label: Option<&'static str>,
    /// Field value; an absent field shows as empty
    pub value: &'a str,
}

/// Name, email, phone, department, position
pub fn card_lines(e: &Employee) -> [CardLine<'_>; 5] {
    [
        CardLine { label: None, value: text(&e.name) },
        CardLine { label: Some("Email"), value: text(&e.email) },
        CardLine { label: Some("Phone"), value: text(&e.phone) },
        CardLine { label: Some("Department"), value: text(&e.department) },
        CardLine { label: Some("Position"), value: text(&e.position) },
    ]
}
