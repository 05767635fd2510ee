//! Code formatter adapters.

mod layout;

pub use layout::LayoutFormatter;
