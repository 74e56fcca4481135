//! Core types and definitions for the CannonLab simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! firing configuration, validation errors, commands, state snapshots,
//! events, and constants. It has no dependency on any runtime or UI.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
