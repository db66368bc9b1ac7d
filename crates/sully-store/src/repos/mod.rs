//! Typed repositories over a [`WorkspaceStore`](crate::WorkspaceStore).
//!
//! Each module adds an `impl WorkspaceStore` block for one entity family.

pub mod actions;
pub mod agents;
pub mod calendar;
pub mod chat;
pub mod inbox;
pub mod leads;
pub mod strategy;
pub mod sync;
