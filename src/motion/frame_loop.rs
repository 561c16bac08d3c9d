use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

struct LoopState {
    frame_id: Cell<Option<i32>>,
    cancelled: Cell<bool>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopState {
    fn new() -> Self {
        Self {
            frame_id: Cell::new(None),
            cancelled: Cell::new(false),
            callback: RefCell::new(None),
        }
    }

    /// Runs one frame. Returns whether another frame should be requested.
    fn advance(&self, timestamp: f64, step: &mut dyn FnMut(f64) -> FrameControl) -> bool {
        self.frame_id.set(None);
        if self.cancelled.get() {
            return false;
        }
        step(timestamp) == FrameControl::Continue && !self.cancelled.get()
    }

    /// Marks the loop cancelled and hands back the pending frame, if any.
    fn cancel(&self) -> Option<i32> {
        self.cancelled.set(true);
        self.frame_id.take()
    }

    fn request(&self) -> bool {
        let window = match window() {
            Some(window) => window,
            None => return false,
        };
        let callback = self.callback.borrow();
        let callback = match callback.as_ref() {
            Some(callback) => callback,
            None => return false,
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.frame_id.set(Some(id));
                true
            }
            Err(e) => {
                warn!("requestAnimationFrame failed: {:?}", e);
                false
            }
        }
    }
}

/// Repeating `requestAnimationFrame` task. The step receives the frame
/// timestamp in milliseconds. Cancelled on `cancel()` or drop.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start<F>(mut step: F) -> Option<Self>
    where
        F: FnMut(f64) -> FrameControl + 'static,
    {
        let state = Rc::new(LoopState::new());

        let weak = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let state = match weak.upgrade() {
                Some(state) => state,
                None => return,
            };
            if state.advance(timestamp, &mut step) {
                state.request();
            }
        }) as Box<dyn FnMut(f64)>);
        *state.callback.borrow_mut() = Some(callback);

        if state.request() {
            Some(Self { state })
        } else {
            None
        }
    }

    /// A frame is scheduled and the loop has not been cancelled.
    pub fn is_running(&self) -> bool {
        !self.state.cancelled.get() && self.state.frame_id.get().is_some()
    }

    pub fn cancel(&self) {
        if let Some(id) = self.state.cancel() {
            if let Some(window) = window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
        self.state.callback.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continue_asks_for_another_frame_until_stop() {
        let state = LoopState::new();
        let mut frames = 0;
        let mut step = |_: f64| {
            frames += 1;
            if frames < 3 {
                FrameControl::Continue
            } else {
                FrameControl::Stop
            }
        };
        assert!(state.advance(0.0, &mut step));
        assert!(state.advance(16.0, &mut step));
        assert!(!state.advance(32.0, &mut step));
    }

    #[test]
    fn cancelled_loop_never_runs_the_step_again() {
        let state = LoopState::new();
        state.frame_id.set(Some(7));
        assert_eq!(state.cancel(), Some(7));

        let mut calls = 0;
        let mut step = |_: f64| {
            calls += 1;
            FrameControl::Continue
        };
        // A frame the browser had already queued still fires once.
        assert!(!state.advance(16.0, &mut step));
        assert_eq!(calls, 0);
        assert_eq!(state.frame_id.get(), None);
    }

    #[test]
    fn cancelling_from_inside_the_step_stops_rescheduling() {
        let state = Rc::new(LoopState::new());
        let inner = state.clone();
        let mut step = move |_: f64| {
            inner.cancel();
            FrameControl::Continue
        };
        assert!(!state.advance(0.0, &mut step));
        assert_eq!(state.cancel(), None);
    }
}
