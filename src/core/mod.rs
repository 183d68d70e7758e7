//! Core application modules
//!
//! This module contains configuration, constants, logging, the model
//! adapter, and the provider traits with their AWS implementations.

pub mod adapter;
pub mod config;
pub mod constants;
pub mod logging;
pub mod model_family;
pub mod provider;
pub mod providers;
