//! Request pipeline and transport-neutral replies.
//!
//! # Responsibility
//! - Chain parsing, script generation and execution for one input text.
//! - Own the reply wording every transport shares.
//!
//! # Invariants
//! - The pipeline holds no per-request state between calls.
//! - Execution failures are surfaced once, never retried.

pub mod reply;
pub mod request_service;
