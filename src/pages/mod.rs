//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and persistence timing and delegates
//! rendering details to `components`. After mounting, every page re-runs the
//! document wiring pass so freshly rendered markup picks up its behavior.

pub mod deliveries;
pub mod record_delivery;

/// Runs the wiring pass now and once more on the next tick, which catches
/// elements the renderer attaches after the mount effect settles.
#[cfg(feature = "hydrate")]
pub(crate) fn wire_after_mount() {
    crate::util::wire::wire_document();
    gloo_timers::callback::Timeout::new(0, crate::util::wire::wire_document).forget();
}
