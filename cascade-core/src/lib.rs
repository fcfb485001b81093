#![warn(missing_docs)]
//! # cascade-core
//!
//! Core traits and types for the cascade tiered-lookup framework.
//!
//! This crate provides the foundational abstractions shared by the
//! orchestrator and by tier implementations:
//!
//! - **Identify** what is looked up ([`Key`], [`Value`])
//! - **Bound** every call in time ([`Context`], [`CancelGuard`])
//! - **Describe** what one backend attempt produced ([`Outcome`])
//! - **Plug in** backends at the composition seam ([`Tier`])
//!
//! The [`Context`] is the piece with real behavior: a per-call token with two
//! independent triggers — deadline expiry and explicit cancellation — each
//! reported as a distinct [`CancelCause`] so callers can treat them
//! differently.

pub mod context;
pub mod error;
pub mod key;
pub mod outcome;
pub mod tier;
pub mod value;

pub use context::{CancelCause, CancelGuard, Context};
pub use error::{DeadlineExceeded, FailureKind, QueryError};
pub use key::Key;
pub use outcome::Outcome;
pub use tier::{Tier, TierOutcome, TierResult};
pub use value::Value;
