use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Window};
use yew::prelude::*;

use crate::config::SMOOTH_SCROLL_LERP;
use crate::motion::frame_loop::{FrameControl, FrameLoop};

/// Anything that reports vertical scroll offsets, in order, to a callback.
/// Dropping the subscription stops the callbacks.
pub trait ScrollSource {
    type Subscription;

    fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> Self::Subscription;
}

pub fn current_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0).max(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Native `scroll` events on the window.
pub struct WindowScroll;

pub struct WindowScrollSubscription {
    window: Window,
    listener: Closure<dyn FnMut()>,
}

impl Drop for WindowScrollSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.listener.as_ref().unchecked_ref());
    }
}

impl ScrollSource for WindowScroll {
    type Subscription = Option<WindowScrollSubscription>;

    fn subscribe(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> Self::Subscription {
        let window = window()?;
        let reader = window.clone();
        let listener = Closure::wrap(Box::new(move || {
            on_scroll(current_offset(&reader));
        }) as Box<dyn FnMut()>);

        if let Err(e) = window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        {
            warn!("Could not listen for scroll events: {:?}", e);
            return None;
        }
        Some(WindowScrollSubscription { window, listener })
    }
}

/// Eases a reported offset toward the real scroll position, one step per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothing {
    current: f64,
    target: f64,
    lerp: f64,
}

impl Smoothing {
    /// Distance under which the eased value snaps onto the target.
    const SNAP: f64 = 0.5;

    pub fn new(offset: f64, lerp: f64) -> Self {
        let offset = offset.max(0.0);
        let lerp = if lerp > 0.0 && lerp <= 1.0 { lerp } else { 1.0 };
        Self {
            current: offset,
            target: offset,
            lerp,
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target.max(0.0);
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn step(&mut self) -> f64 {
        self.current += (self.target - self.current) * self.lerp;
        if (self.target - self.current).abs() < Self::SNAP {
            self.current = self.target;
        }
        self.current
    }
}

struct SmoothInner {
    smoothing: RefCell<Smoothing>,
    frames: RefCell<Option<FrameLoop>>,
    on_scroll: RefCell<Box<dyn FnMut(f64)>>,
}

impl SmoothInner {
    fn emit(&self, offset: f64) {
        (self.on_scroll.borrow_mut())(offset);
    }

    fn wake(inner: &Rc<Self>) {
        let idle = inner
            .frames
            .borrow()
            .as_ref()
            .map_or(true, |frames| !frames.is_running());
        if !idle {
            return;
        }

        let weak = Rc::downgrade(inner);
        let frames = FrameLoop::start(move |_| {
            let inner = match weak.upgrade() {
                Some(inner) => inner,
                None => return FrameControl::Stop,
            };
            let (offset, settled) = {
                let mut smoothing = inner.smoothing.borrow_mut();
                let offset = smoothing.step();
                (offset, smoothing.is_settled())
            };
            inner.emit(offset);
            if settled {
                FrameControl::Stop
            } else {
                FrameControl::Continue
            }
        });
        *inner.frames.borrow_mut() = frames;
    }
}

/// Smooth-scroll source: window scroll positions eased with [`Smoothing`].
/// Emits the current offset once on subscribe.
pub struct SmoothScroll {
    lerp: f64,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self {
            lerp: SMOOTH_SCROLL_LERP,
        }
    }
}

pub struct SmoothScrollSubscription {
    inner: Rc<SmoothInner>,
    _native: Option<WindowScrollSubscription>,
}

impl Drop for SmoothScrollSubscription {
    fn drop(&mut self) {
        if let Some(frames) = self.inner.frames.borrow_mut().take() {
            frames.cancel();
        }
    }
}

impl ScrollSource for SmoothScroll {
    type Subscription = SmoothScrollSubscription;

    fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> Self::Subscription {
        let start = window().map(|w| current_offset(&w)).unwrap_or(0.0);
        let inner = Rc::new(SmoothInner {
            smoothing: RefCell::new(Smoothing::new(start, self.lerp)),
            frames: RefCell::new(None),
            on_scroll: RefCell::new(on_scroll),
        });
        inner.emit(start);

        let weak = Rc::downgrade(&inner);
        let native = WindowScroll.subscribe(Box::new(move |target| {
            if let Some(inner) = weak.upgrade() {
                inner.smoothing.borrow_mut().set_target(target);
                SmoothInner::wake(&inner);
            }
        }));

        SmoothScrollSubscription {
            inner,
            _native: native,
        }
    }
}

/// Calls `on_scroll` with the smoothed scroll offset for as long as the
/// component is mounted. The latest closure passed in is the one called.
#[hook]
pub fn use_scroll<F>(on_scroll: F)
where
    F: Fn(f64) + 'static,
{
    let latest = use_mut_ref(|| None::<Rc<dyn Fn(f64)>>);
    *latest.borrow_mut() = Some(Rc::new(on_scroll));

    use_effect_with_deps(
        move |_| {
            let subscription = SmoothScroll::default().subscribe(Box::new(move |offset| {
                let current = latest.borrow().clone();
                if let Some(on_scroll) = current {
                    on_scroll(offset);
                }
            }));
            move || drop(subscription)
        },
        (),
    );
}
