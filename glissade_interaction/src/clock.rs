// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-driven frame clock with per-callback lifecycle handles.
//!
//! The clock does not measure time itself. The host owns the render loop and
//! calls [`FrameClock::run_frame`] once per rendered frame with a
//! monotonically increasing timestamp in seconds. Each registered callback
//! receives the elapsed time since its handle was last started, so a
//! restarted handle observes elapsed time beginning at zero again.
//!
//! Callbacks may stop, restart, or dispose handles (including their own)
//! from inside a frame; the clock tolerates this re-entrancy.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

type FrameFn = Box<dyn FnMut(f64)>;

struct Slot {
    active: bool,
    started_at: Option<f64>,
    // Taken out of the slot for the duration of its invocation so that the
    // callback can re-enter the clock without a double borrow.
    callback: Option<FrameFn>,
}

#[derive(Default)]
struct ClockState {
    next_id: u64,
    slots: BTreeMap<u64, Slot>,
}

/// A per-frame callback source shared by every delegate bound to it.
///
/// Callbacks are registered with [`FrameClock::frame_callback`] and begin
/// inert; they run only between [`FrameHandle::start`] and
/// [`FrameHandle::stop`]. Within one frame, callbacks run in registration
/// order.
pub struct FrameClock {
    state: Rc<RefCell<ClockState>>,
}

impl FrameClock {
    /// Creates an empty clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(ClockState::default())),
        }
    }

    /// Registers a per-frame callback and returns its lifecycle handle.
    ///
    /// The callback is invoked with the elapsed seconds since its handle was
    /// last started. It stays registered until the handle is disposed or
    /// dropped.
    pub fn frame_callback(&self, callback: impl FnMut(f64) + 'static) -> FrameHandle {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.slots.insert(
            id,
            Slot {
                active: false,
                started_at: None,
                callback: Some(Box::new(callback)),
            },
        );
        FrameHandle {
            state: Rc::downgrade(&self.state),
            id,
        }
    }

    /// Runs one frame at the given timestamp, invoking every active callback.
    ///
    /// `now` is expected to be monotonically non-decreasing across calls. A
    /// callback started during this frame first runs on the *next* frame;
    /// a callback stopped or disposed earlier in this frame does not run.
    pub fn run_frame(&self, now: f64) {
        let ids: Vec<u64> = {
            let state = self.state.borrow();
            state
                .slots
                .iter()
                .filter(|(_, slot)| slot.active)
                .map(|(id, _)| *id)
                .collect()
        };

        for id in ids {
            let taken = {
                let mut state = self.state.borrow_mut();
                match state.slots.get_mut(&id) {
                    Some(slot) if slot.active => {
                        let started_at = *slot.started_at.get_or_insert(now);
                        slot.callback.take().map(|cb| (cb, now - started_at))
                    }
                    _ => None,
                }
            };
            let Some((mut callback, elapsed)) = taken else {
                continue;
            };
            callback(elapsed);
            // Put the callback back unless the slot was disposed meanwhile.
            let mut state = self.state.borrow_mut();
            if let Some(slot) = state.slots.get_mut(&id) {
                if slot.callback.is_none() {
                    slot.callback = Some(callback);
                }
            }
        }
    }

    /// Returns the number of registered (not necessarily active) callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.state.borrow().slots.len()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("FrameClock")
            .field("callbacks", &state.slots.len())
            .field("active", &state.slots.values().filter(|s| s.active).count())
            .finish()
    }
}

/// Lifecycle handle for one registered frame callback.
///
/// Dropping the handle disposes the callback. All operations are safe (and
/// no-ops) after the owning [`FrameClock`] has been dropped.
pub struct FrameHandle {
    state: Weak<RefCell<ClockState>>,
    id: u64,
}

impl FrameHandle {
    /// Activates the callback, restarting its elapsed time at zero.
    ///
    /// Elapsed time is measured from the first frame that runs after this
    /// call, so the first invocation observes `elapsed == 0.0`.
    pub fn start(&self) {
        if let Some(state) = self.state.upgrade() {
            if let Some(slot) = state.borrow_mut().slots.get_mut(&self.id) {
                slot.active = true;
                slot.started_at = None;
            }
        }
    }

    /// Deactivates the callback without unregistering it. Idempotent.
    pub fn stop(&self) {
        if let Some(state) = self.state.upgrade() {
            if let Some(slot) = state.borrow_mut().slots.get_mut(&self.id) {
                slot.active = false;
                slot.started_at = None;
            }
        }
    }

    /// Returns `true` while the callback is scheduled to run each frame.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state
            .upgrade()
            .is_some_and(|state| {
                state
                    .borrow()
                    .slots
                    .get(&self.id)
                    .is_some_and(|slot| slot.active)
            })
    }

    /// Unregisters the callback. Idempotent; also runs on drop.
    pub fn dispose(&self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().slots.remove(&self.id);
        }
    }
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameHandle")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{FrameClock, FrameHandle};

    #[test]
    fn inactive_callbacks_do_not_run() {
        let clock = FrameClock::new();
        let runs = Rc::new(RefCell::new(0));
        let counter = runs.clone();
        let _handle = clock.frame_callback(move |_| *counter.borrow_mut() += 1);

        clock.run_frame(0.0);
        clock.run_frame(1.0);
        assert_eq!(*runs.borrow(), 0);
    }

    #[test]
    fn elapsed_is_measured_from_start() {
        let clock = FrameClock::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let handle = clock.frame_callback(move |elapsed| sink.borrow_mut().push(elapsed));

        handle.start();
        clock.run_frame(10.0);
        clock.run_frame(10.5);
        clock.run_frame(11.25);

        assert_eq!(*seen.borrow(), vec![0.0, 0.5, 1.25]);
    }

    #[test]
    fn restart_resets_elapsed_to_zero() {
        let clock = FrameClock::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let handle = clock.frame_callback(move |elapsed| sink.borrow_mut().push(elapsed));

        handle.start();
        clock.run_frame(1.0);
        clock.run_frame(2.0);
        handle.start();
        clock.run_frame(5.0);

        assert_eq!(*seen.borrow(), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn stop_is_idempotent_and_halts_invocation() {
        let clock = FrameClock::new();
        let runs = Rc::new(RefCell::new(0));
        let counter = runs.clone();
        let handle = clock.frame_callback(move |_| *counter.borrow_mut() += 1);

        handle.start();
        clock.run_frame(0.0);
        handle.stop();
        handle.stop();
        clock.run_frame(1.0);
        assert_eq!(*runs.borrow(), 1);
        assert!(!handle.is_active());
    }

    #[test]
    fn callback_can_stop_its_own_handle_mid_frame() {
        let clock = FrameClock::new();
        let runs = Rc::new(RefCell::new(0));
        let handle = Rc::new(RefCell::new(None::<FrameHandle>));

        let counter = runs.clone();
        let self_handle = handle.clone();
        let h = clock.frame_callback(move |_| {
            *counter.borrow_mut() += 1;
            if let Some(h) = &*self_handle.borrow() {
                h.stop();
            }
        });
        h.start();
        *handle.borrow_mut() = Some(h);

        clock.run_frame(0.0);
        clock.run_frame(1.0);
        assert_eq!(*runs.borrow(), 1);
    }

    #[test]
    fn dispose_during_frame_is_safe() {
        let clock = FrameClock::new();
        let handle = Rc::new(RefCell::new(None));

        let self_handle = handle.clone();
        let h = clock.frame_callback(move |_| {
            // Dropping the handle disposes the slot while the callback is
            // checked out; the clock must not reinstall it.
            *self_handle.borrow_mut() = None;
        });
        h.start();
        *handle.borrow_mut() = Some(h);

        clock.run_frame(0.0);
        assert_eq!(clock.callback_count(), 0);
        clock.run_frame(1.0);
    }

    #[test]
    fn dropping_the_handle_unregisters_the_callback() {
        let clock = FrameClock::new();
        let runs = Rc::new(RefCell::new(0));
        let counter = runs.clone();
        let handle = clock.frame_callback(move |_| *counter.borrow_mut() += 1);
        handle.start();
        assert_eq!(clock.callback_count(), 1);

        drop(handle);
        assert_eq!(clock.callback_count(), 0);
        clock.run_frame(0.0);
        assert_eq!(*runs.borrow(), 0);
    }

    #[test]
    fn handle_outliving_the_clock_is_inert() {
        let clock = FrameClock::new();
        let handle = clock.frame_callback(|_| {});
        drop(clock);

        handle.start();
        assert!(!handle.is_active());
        handle.stop();
        handle.dispose();
    }

    #[test]
    fn callbacks_run_in_registration_order() {
        let clock = FrameClock::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = order.clone();
        let a = clock.frame_callback(move |_| first.borrow_mut().push("a"));
        let second = order.clone();
        let b = clock.frame_callback(move |_| second.borrow_mut().push("b"));

        b.start();
        a.start();
        clock.run_frame(0.0);
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }
}
