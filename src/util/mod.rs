//! Utility helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability. Pure cores stay
//! compilable on every target; DOM-touching entry points are gated behind
//! the `hydrate` feature.

pub mod debounce;
pub mod feedback;
pub mod format;
pub mod preview;
pub mod storage;
pub mod widgets;
pub mod wire;
