//! Mandato: tenant site configuration resolution and public rendering.
//!
//! The crate is split into layers:
//! - [`domain`] holds the resolved configuration types and their invariants.
//! - [`application`] resolves raw tenant documents, composes render plans and
//!   drives slug lookup to a terminal outcome.
//! - [`infra`] carries the file-backed site store, HTTP surface and telemetry.
//! - [`presentation`] maps resolved sites onto page templates.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
