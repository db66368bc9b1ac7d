//! # sully-core
//!
//! Core types, ID generation, and error types for Sully.
//!
//! This crate provides the foundational types shared across all Sully crates:
//! - Entity structs for workspace-owned records (leads, chat, agent tasks, inbox)
//! - Status enums with state machine transitions
//! - ID prefix constants and formatting helpers
//! - Score trend and contact recency calculations
//! - Seed data for the built-in demo workspaces
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod seed;
pub mod trend;
