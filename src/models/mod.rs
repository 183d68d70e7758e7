//! API data models
//!
//! This module contains the per-family Bedrock wire structures, the uniform
//! invocation request, and the catalog/notification records.

pub mod anthropic;
pub mod catalog;
pub mod invocation;
pub mod jurassic;
pub mod titan;
