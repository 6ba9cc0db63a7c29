//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate rendering concerns from component logic to
//! improve reuse and testability.

pub mod markdown;
