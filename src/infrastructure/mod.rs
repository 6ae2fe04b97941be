//! Storage adapters backing the domain ports.

pub mod in_memory;
