//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `topsis` - Pure TOPSIS scoring and ranking

pub mod foundation;
pub mod topsis;
