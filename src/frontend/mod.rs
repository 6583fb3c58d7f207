//! Presentation-side models: navigation state and the static page content.

pub mod content;
pub mod nav;

pub use nav::{NavItem, NavShell, Route};
