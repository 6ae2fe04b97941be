//! Application layer orchestrating the order workflow.
//!
//! This module defines the `OrderEngine`, the primary entry point for
//! creating orders against the product catalog and driving their payment
//! status lifecycle.

pub mod engine;
