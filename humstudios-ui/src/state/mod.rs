//! State
//!
//! Screen state of the site, independent of how it is rendered.
//!
//! - [`employee`]: employee record as the API returns it
//! - [`list`]: employee list lifecycle (mount, one load, render state)
//! - [`details`]: employee details screen
//! - [`card`]: employee card projection and details navigation
//! - [`reveal`]: one-shot viewport reveal state machine
//! - [`diagnostics`]: where load failures are reported and alerted
//! - [`content`]: marketing copy bound to reveal motions

pub mod card;
pub mod content;
pub mod details;
pub mod diagnostics;
pub mod employee;
pub mod list;
pub mod reveal;
