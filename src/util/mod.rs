//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock) from
//! state and component logic so the state layer stays natively testable.

pub mod clock;
pub mod storage;
