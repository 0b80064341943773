//! Adapters - implementations of the ports for external systems.

pub mod access;
pub mod ai;
