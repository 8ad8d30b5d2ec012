use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

use super::easing::Easing;

/// A single value interpolation, driven by frame timestamps in milliseconds.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: f64,
    easing: Easing,
    started_at: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenFrame {
    pub value: f64,
    pub done: bool,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            easing,
            started_at: None,
        }
    }

    /// The first sample pins the start time.
    pub fn sample(&mut self, now: f64) -> TweenFrame {
        let start = *self.started_at.get_or_insert(now);
        let elapsed = (now - start).max(0.0);
        if self.duration_ms == 0.0 || elapsed >= self.duration_ms {
            return TweenFrame { value: self.to, done: true };
        }
        let eased = self.easing.apply(elapsed / self.duration_ms);
        TweenFrame {
            value: self.from + (self.to - self.from) * eased,
            done: false,
        }
    }
}

struct Runner {
    tween: Tween,
    on_update: Box<dyn FnMut(f64)>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

#[derive(Default)]
struct FrameSlot {
    frame: RefCell<Option<AnimationFrame>>,
    cancelled: Cell<bool>,
}

/// Handle to a running animation. Dropping it cancels the next frame.
pub struct Animation {
    slot: Rc<FrameSlot>,
}

impl Animation {
    pub fn cancel(&self) {
        self.slot.cancelled.set(true);
        self.slot.frame.borrow_mut().take();
    }
}

impl Drop for Animation {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Interpolates `from` to `to` over `duration_ms`, calling `on_update` once per
/// animation frame and `on_complete` after the final value was delivered.
pub fn animate<U, C>(
    from: f64,
    to: f64,
    duration_ms: f64,
    easing: Easing,
    on_update: U,
    on_complete: C,
) -> Animation
where
    U: FnMut(f64) + 'static,
    C: FnOnce() + 'static,
{
    let runner = Rc::new(RefCell::new(Runner {
        tween: Tween::new(from, to, duration_ms, easing),
        on_update: Box::new(on_update),
        on_complete: Some(Box::new(on_complete)),
    }));
    let slot = Rc::new(FrameSlot::default());
    schedule(runner, slot.clone());
    Animation { slot }
}

fn schedule(runner: Rc<RefCell<Runner>>, slot: Rc<FrameSlot>) {
    let next_slot = slot.clone();
    let handle = request_animation_frame(move |now| {
        if next_slot.cancelled.get() {
            return;
        }
        let done = {
            let mut runner = runner.borrow_mut();
            let frame = runner.tween.sample(now);
            (runner.on_update)(frame.value);
            frame.done
        };
        // on_update may have dropped the handle
        if next_slot.cancelled.get() {
            return;
        }
        if done {
            let on_complete = runner.borrow_mut().on_complete.take();
            next_slot.frame.borrow_mut().take();
            if let Some(on_complete) = on_complete {
                on_complete();
            }
        } else {
            schedule(runner, next_slot);
        }
    });
    *slot.frame.borrow_mut() = Some(handle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_starts_the_clock() {
        let mut tween = Tween::new(0.0, 10.0, 100.0, Easing::Linear);
        assert_eq!(tween.sample(5_000.0), TweenFrame { value: 0.0, done: false });
        let mid = tween.sample(5_050.0);
        assert!((mid.value - 5.0).abs() < 1e-9);
        assert!(!mid.done);
    }

    #[test]
    fn finishes_on_exact_target() {
        let mut tween = Tween::new(1.0, 0.0, 400.0, Easing::EaseOut);
        tween.sample(0.0);
        assert_eq!(tween.sample(400.0), TweenFrame { value: 0.0, done: true });
        assert_eq!(tween.sample(900.0), TweenFrame { value: 0.0, done: true });
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut tween = Tween::new(3.0, 7.0, 0.0, Easing::Linear);
        assert_eq!(tween.sample(12.0), TweenFrame { value: 7.0, done: true });
    }

    #[test]
    fn easing_shapes_the_midpoint() {
        let mut tween = Tween::new(0.0, 1.0, 100.0, Easing::EaseIn);
        tween.sample(0.0);
        assert!((tween.sample(50.0).value - 0.25).abs() < 1e-9);
    }
}
