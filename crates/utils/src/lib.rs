//! Shared utilities for fnkit: subscriber setup and structured events

pub mod tracing;
