//! Domain model for the to-do list screen.
//!
//! # Responsibility
//! - Define the fixed-shape `Task` record rendered by item surfaces.
//! - Own title validation so blank titles cannot be represented.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` that is never reused.
//! - Every task title is non-empty after trimming.

pub mod task;
