//! UI Components
//!
//! Reusable Leptos components for the site.

pub mod employee_card;
pub mod loading;
pub mod nav;
pub mod reveal;
pub mod why_choose_us;

pub use employee_card::{Avatar, EmployeeCard};
pub use loading::Loading;
pub use nav::Nav;
pub use reveal::{Animated, RevealSection};
pub use why_choose_us::WhyChooseUs;
