//! Per-app orchestration flows.
//!
//! Each app is a linear collect-input, call-endpoint, return-record flow
//! over the [`crate::llm::ChatBackend`] seam. Input validation happens
//! here, before any network call.

pub mod codegen;
pub mod health;
pub mod news;
