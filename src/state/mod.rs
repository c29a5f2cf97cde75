//! Client-side application state.
//!
//! DESIGN
//! ======
//! `entries` owns the committed collection and the edit flow; `draft` holds
//! the uncommitted form values it operates on.

pub mod draft;
pub mod entries;
