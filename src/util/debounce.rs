//! Trailing-edge debouncing for high-frequency UI events.
//!
//! DESIGN
//! ======
//! Every call records the newest argument and advances a generation counter.
//! In the browser each call also replaces the pending timeout (dropping the
//! old one cancels it), and a timeout that does fire delivers only while its
//! generation is still current, so a burst collapses into one invocation
//! carrying the last argument. The handle exposes `call` alone: there is no
//! cancel.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Wraps `callback` so that bursts of calls within `delay_ms` collapse into a
/// single invocation with the most recent argument.
pub fn debounce<T: 'static>(delay_ms: u32, callback: impl Fn(T) + 'static) -> Debounced<T> {
    Debounced {
        inner: Rc::new(Inner {
            delay_ms,
            callback: Box::new(callback),
            generation: Cell::new(0),
            latest: RefCell::new(None),
            #[cfg(feature = "hydrate")]
            timer: RefCell::new(None),
        }),
    }
}

/// Call-only handle returned by [`debounce`].
pub struct Debounced<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Debounced<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

struct Inner<T> {
    delay_ms: u32,
    callback: Box<dyn Fn(T)>,
    generation: Cell<u64>,
    latest: RefCell<Option<T>>,
    #[cfg(feature = "hydrate")]
    timer: RefCell<Option<Timeout>>,
}

impl<T: 'static> Debounced<T> {
    /// Records `value` as the pending argument and restarts the delay window.
    pub fn call(&self, value: T) {
        let generation = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(generation);
        *self.inner.latest.borrow_mut() = Some(value);

        #[cfg(feature = "hydrate")]
        {
            let handle = self.clone();
            let timeout = Timeout::new(self.inner.delay_ms, move || {
                handle.fire_if_current(generation);
            });
            // Replacing the previous timeout drops it, which cancels it.
            *self.inner.timer.borrow_mut() = Some(timeout);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            // Server rendering never runs timers; only the bookkeeping moves.
            let _ = self.inner.delay_ms;
        }
    }

    // Delivery is driven by the hydrate timer or by the native tests.
    #[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
    fn fire_if_current(&self, generation: u64) {
        if self.inner.generation.get() != generation {
            return;
        }
        let Some(value) = self.inner.latest.borrow_mut().take() else {
            return;
        };
        (self.inner.callback)(value);
    }

    #[cfg_attr(not(test), allow(dead_code))]
    fn current_generation(&self) -> u64 {
        self.inner.generation.get()
    }
}
