//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and list surfaces; pages own the shared state,
//! persistence timing, and navigation.

pub mod delivery_table;
pub mod site_header;
