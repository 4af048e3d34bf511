//! Shared utilities for the tweening engine.

pub mod easing;
