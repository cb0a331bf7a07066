//! Check-in badge engine for event accreditation.
//!
//! This crate classifies attendees into wristband and backpack decisions,
//! renders printable badge specifications, and drives the scan pipeline
//! (lookup, authorization, classification, rendering, audit logging) behind
//! a small HTTP API.

#![warn(missing_docs)]

pub mod access_log;
pub mod api;
pub mod classification;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod roster;
