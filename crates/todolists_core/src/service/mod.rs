//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validator + store calls into handler-facing APIs.
//! - Keep HTTP/rendering layers decoupled from storage details.

pub mod list_service;
