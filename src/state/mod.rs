//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Domain state is plain data with small focused methods; pages own the
//! reactive wrappers and persistence timing.

pub mod delivery;
