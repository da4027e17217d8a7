//! Global reactive state provided through Leptos context

pub mod toast;
pub mod wallet;
