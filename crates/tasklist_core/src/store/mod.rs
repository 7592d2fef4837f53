//! In-memory task list state.
//!
//! # Responsibility
//! - Own the ordered task collection for one screen.
//! - Publish immutable snapshots for rendering layers.
//!
//! # Invariants
//! - Task ids are unique and never reissued by the default id source.
//! - Published snapshots are never mutated after publication.
//! - Invalid requests (unknown id, blank title) are silent no-ops.

pub mod ids;
pub mod snapshot;
pub mod task_list;
