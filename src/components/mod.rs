//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the form and table and mutate the shared book signal
//! passed in by the page.

pub mod entry_form;
pub mod entry_table;
