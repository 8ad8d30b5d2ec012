use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Scroll position and viewport size, measured fresh on every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    pub offset: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    pub fn read() -> Option<Self> {
        let window = web_sys::window()?;
        Some(Self {
            offset: window.scroll_y().ok()?,
            viewport_width: window.inner_width().ok()?.as_f64()?,
            viewport_height: window.inner_height().ok()?.as_f64()?,
        })
    }
}

/// Pending-flag guard: at most one frame callback is queued at a time.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns true when the caller should queue a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Called at the top of the frame callback.
    pub fn begin_frame(&mut self) {
        self.pending = false;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[derive(Default)]
struct FrameState {
    throttle: FrameThrottle,
    handle: Option<AnimationFrame>,
}

/// Calls `on_frame` with a fresh [`ScrollSample`] at most once per animation
/// frame while the window scrolls or resizes, plus once on the first frame
/// after mount. Listeners and the queued frame are released on unmount.
#[hook]
pub fn use_scroll_frames<F>(on_frame: F)
where
    F: Fn(ScrollSample) + 'static,
{
    let state = use_mut_ref(FrameState::default);
    let on_frame = use_latest(on_frame);

    let schedule = {
        let state = state.clone();
        let on_frame = on_frame.clone();
        Rc::new(move || {
            if !state.borrow_mut().throttle.request() {
                return;
            }
            let inner_state = state.clone();
            let on_frame = on_frame.clone();
            let handle = request_animation_frame(move |_| {
                inner_state.borrow_mut().throttle.begin_frame();
                if let Some(sample) = ScrollSample::read() {
                    (*on_frame.current())(sample);
                }
            });
            state.borrow_mut().handle = Some(handle);
        })
    };

    {
        let schedule = schedule.clone();
        use_event_with_window("scroll", move |_: Event| schedule());
    }
    {
        let schedule = schedule.clone();
        use_event_with_window("resize", move |_: Event| schedule());
    }

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                schedule();
                move || {
                    cancel_pending(&state);
                }
            },
            (),
        );
    }
}

fn cancel_pending(state: &Rc<RefCell<FrameState>>) {
    let mut state = state.borrow_mut();
    state.handle.take();
    state.throttle.begin_frame();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_frame_while_pending() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());
        assert!(throttle.is_pending());
    }

    #[test]
    fn next_request_after_frame_runs() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        throttle.begin_frame();
        assert!(!throttle.is_pending());
        assert!(throttle.request());
    }
}
