//! Busy state for controls that must not be triggered twice

use yew::prelude::*;

/// Marks a control busy while alive
///
/// Created before an async call and dropped when it returns, so the busy
/// flag is released on every exit path.
pub struct BusyGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl BusyGuard {
    /// Call `set(true)` now and `set(false)` on drop
    pub fn acquire(set: impl Fn(bool) + 'static) -> Self {
        set(true);
        Self {
            release: Some(Box::new(move || set(false))),
        }
    }

    /// Guard a `use_state` flag
    pub fn for_state(busy: &UseStateHandle<bool>) -> Self {
        let busy = busy.clone();
        Self::acquire(move |value| busy.set(value))
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Busy flag for a trigger control
#[hook]
pub fn use_busy() -> UseStateHandle<bool> {
    use_state(|| false)
}
