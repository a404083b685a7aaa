//! Fixture libraries for robolib
//!
//! This crate provides keyword libraries used by tests and the command line
//! tool:
//! - [`Calculator`]: dynamic library with full introspection
//! - [`Strings`]: hybrid library with closure members
//! - [`Broken`]: dynamic library with invalid keywords

pub mod broken;
pub mod calculator;
pub mod strings;
pub mod values;

pub use broken::Broken;
pub use calculator::Calculator;
pub use strings::Strings;

use robolib_api::LibraryKind;

/// Names of the bundled libraries.
pub const LIBRARY_NAMES: &[&str] = &[Calculator::NAME, Strings::NAME, Broken::NAME];

/// Bundled library by name, case-insensitively.
pub fn library_by_name(name: &str) -> Option<LibraryKind> {
    let name = name.trim();
    if name.eq_ignore_ascii_case(Calculator::NAME) {
        Some(LibraryKind::dynamic(Calculator::new()))
    } else if name.eq_ignore_ascii_case(Strings::NAME) {
        Some(LibraryKind::hybrid(Strings::new()))
    } else if name.eq_ignore_ascii_case(Broken::NAME) {
        Some(LibraryKind::dynamic(Broken))
    } else {
        None
    }
}
