//! Item-level interaction flows that sit between a surface and the store.
//!
//! # Responsibility
//! - Hold edit-in-progress text outside the store until it is committed.
//! - Route removal requests through a yes/no confirmation gate.
//!
//! # Invariants
//! - Nothing here mutates the store except through its public operations.

pub mod removal;
pub mod title_editor;
