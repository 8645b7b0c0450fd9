//! Employee List
//!
//! Lifecycle of the admin list screen:
//!
//! 1. Mount: the view is created with an empty list and the loading
//!    indicator shown.
//! 2. Load: exactly one read of the employee list.
//! 3. Success replaces the list; failure is reported, alerted and leaves the
//!    list empty. Either way the loading indicator is cleared.
//!
//! The list is a snapshot. It is never refreshed after mount; a new view is
//! a new mount and does its own read.

use super::diagnostics::{Diagnostics, FETCH_FAILED_ALERT};
use super::employee::Employee;

/// Route of the employee list screen
pub const LIST_ROUTE: &str = "/admin/view-employee";

/// Shown instead of the grid when the collection is empty
pub const EMPTY_MESSAGE: &str = "No employees found";

/// State changes of a list view, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    LoadingShown,
    /// List replaced with this many records
    ListReplaced(usize),
    LoadingHidden,
}

/// What the screen should show
#[derive(Debug, PartialEq)]
pub enum ListContent<'a> {
    /// Spinner
    Loading,
    /// The literal [`EMPTY_MESSAGE`]
    Empty,
    /// One card per employee, in list order
    Grid(&'a [Employee]),
}

/// One mounted employee list screen
#[derive(Debug, Clone)]
pub struct EmployeeListView {
    employees: Vec<Employee>,
    loading: bool,
    events: Vec<ListEvent>,
}

impl EmployeeListView {
    /// Fresh view: empty list, loading indicator shown
    pub fn mounted() -> Self {
        Self {
            employees: Vec::new(),
            loading: true,
            events: vec![ListEvent::LoadingShown],
        }
    }

    /// Apply the outcome of the mount's load
    pub fn finish(
        &mut self,
        result: Result<Vec<Employee>, String>,
        diagnostics: &mut dyn Diagnostics,
    ) {
        if !self.loading {
            return;
        }

        match result {
            Ok(employees) => {
                self.events.push(ListEvent::ListReplaced(employees.len()));
                self.employees = employees;
            }
            Err(error) => {
                diagnostics.report(&error);
                diagnostics.alert(FETCH_FAILED_ALERT);
            }
        }

        self.loading = false;
        self.events.push(ListEvent::LoadingHidden);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// State changes since mount
    #[cfg(test)]
    pub fn events(&self) -> &[ListEvent] {
        &self.events
    }

    /// Current screen content
    pub fn content(&self) -> ListContent<'_> {
        if self.loading {
            ListContent::Loading
        } else if self.employees.is_empty() {
            ListContent::Empty
        } else {
            ListContent::Grid(&self.employees)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::diagnostics::testing::RecordingDiagnostics;

    fn employees(count: usize) -> Vec<Employee> {
        (0..count)
            .map(|i| Employee {
                id: format!("e{}", i),
                name: Some(format!("Employee {}", i)),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_fresh_view_shows_loading() {
        let view = EmployeeListView::mounted();
        assert!(view.is_loading());
        assert_eq!(view.content(), ListContent::Loading);
        assert_eq!(view.events(), &[ListEvent::LoadingShown]);
    }

    #[test]
    fn test_card_count_matches_document_count() {
        for count in [1usize, 3, 12] {
            let mut diagnostics = RecordingDiagnostics::default();
            let mut view = EmployeeListView::mounted();

            view.finish(Ok(employees(count)), &mut diagnostics);
            match view.content() {
                ListContent::Grid(cards) => assert_eq!(cards.len(), count),
                other => panic!("expected grid, got {:?}", other),
            }
            assert!(diagnostics.alerts.is_empty());
        }
    }

    #[test]
    fn test_grid_keeps_list_order() {
        let mut view = EmployeeListView::mounted();
        view.finish(Ok(employees(3)), &mut RecordingDiagnostics::default());

        let ListContent::Grid(cards) = view.content() else {
            panic!("expected grid");
        };
        let ids: Vec<&str> = cards.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e0", "e1", "e2"]);
    }

    #[test]
    fn test_empty_collection_shows_empty_message() {
        let mut view = EmployeeListView::mounted();
        view.finish(Ok(Vec::new()), &mut RecordingDiagnostics::default());

        assert_eq!(view.content(), ListContent::Empty);
        assert!(!view.is_loading());
    }

    #[test]
    fn test_failed_read() {
        let mut diagnostics = RecordingDiagnostics::default();
        let mut view = EmployeeListView::mounted();

        view.finish(Err("STORE_UNAVAILABLE: store down".to_string()), &mut diagnostics);

        assert_eq!(view.events(), &[ListEvent::LoadingShown, ListEvent::LoadingHidden]);
        assert_eq!(diagnostics.reports, vec!["STORE_UNAVAILABLE: store down"]);
        assert_eq!(diagnostics.alerts, vec![FETCH_FAILED_ALERT]);
        assert_eq!(view.content(), ListContent::Empty);
    }

    #[test]
    fn test_success_event_order() {
        let mut view = EmployeeListView::mounted();
        view.finish(Ok(employees(2)), &mut RecordingDiagnostics::default());

        assert_eq!(
            view.events(),
            &[
                ListEvent::LoadingShown,
                ListEvent::ListReplaced(2),
                ListEvent::LoadingHidden
            ]
        );
    }

    #[test]
    fn test_second_outcome_is_ignored() {
        let mut diagnostics = RecordingDiagnostics::default();
        let mut view = EmployeeListView::mounted();

        view.finish(Ok(employees(2)), &mut diagnostics);
        view.finish(Err("late".to_string()), &mut diagnostics);

        assert!(matches!(view.content(), ListContent::Grid(cards) if cards.len() == 2));
        assert!(diagnostics.alerts.is_empty());
        let hidden = view
            .events()
            .iter()
            .filter(|e| **e == ListEvent::LoadingHidden)
            .count();
        assert_eq!(hidden, 1);
    }
}
