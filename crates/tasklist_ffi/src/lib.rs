//! Flutter bridge for the to-do list core.

pub mod api;
