//! CannonLab terminal front end.
//!
//! Wires the simulation session to a command-line interface: loads firing
//! parameters, drives the animation loop and renders snapshots as text or
//! JSON lines.

pub mod animation;
pub mod cli;
pub mod config_file;
pub mod render;
pub mod run;

pub use cannonlab_core as core;
