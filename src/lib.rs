//! Objection Court - Courtroom Objection Practice Engine
//!
//! This crate simulates a witness examination in which the user plays
//! opposing counsel, raises evidentiary objections against scripted or
//! AI-generated testimony, and receives an AI-generated counter-argument
//! and judge ruling.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
