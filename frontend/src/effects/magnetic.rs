use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Pull toward the pointer inside `radius`, scaled by `strength` pixels at the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticField {
    pub radius: f64,
    pub strength: f64,
    /// Fraction of the remaining gap closed per frame.
    pub smoothing: f64,
}

impl Default for MagneticField {
    fn default() -> Self {
        Self {
            radius: 160.0,
            strength: 24.0,
            smoothing: 0.15,
        }
    }
}

impl MagneticField {
    /// Target offset for an element centred at `center` with the pointer at `pointer`.
    pub fn target(&self, center: (f64, f64), pointer: (f64, f64)) -> (f64, f64) {
        let dx = pointer.0 - center.0;
        let dy = pointer.1 - center.1;
        let distance = dx.hypot(dy);
        if distance >= self.radius || distance == 0.0 {
            return (0.0, 0.0);
        }
        let pull = self.strength * (self.radius - distance) / self.radius;
        (dx / distance * pull, dy / distance * pull)
    }

    /// One easing step from `current` toward `target`.
    pub fn step(&self, current: (f64, f64), target: (f64, f64)) -> (f64, f64) {
        (
            current.0 + (target.0 - current.0) * self.smoothing,
            current.1 + (target.1 - current.1) * self.smoothing,
        )
    }
}

#[derive(Default)]
struct MagnetState {
    offset: (f64, f64),
    target: (f64, f64),
    frame: Option<AnimationFrame>,
}

const SETTLE_PX: f64 = 0.05;

fn settle(state: Rc<RefCell<MagnetState>>, node: NodeRef, field: MagneticField) {
    let next_state = state.clone();
    let handle = request_animation_frame(move |_| {
        let (offset, done) = {
            let mut magnet = next_state.borrow_mut();
            magnet.offset = field.step(magnet.offset, magnet.target);
            let gap = (magnet.target.0 - magnet.offset.0).hypot(magnet.target.1 - magnet.offset.1);
            if gap < SETTLE_PX {
                magnet.offset = magnet.target;
            }
            (magnet.offset, gap < SETTLE_PX)
        };
        if let Some(element) = node.cast::<HtmlElement>() {
            let _ = element.style().set_property(
                "transform",
                &format!("translate({:.2}px, {:.2}px)", offset.0, offset.1),
            );
        }
        if done {
            next_state.borrow_mut().frame = None;
        } else {
            settle(next_state, node, field);
        }
    });
    state.borrow_mut().frame = Some(handle);
}

#[derive(Properties, PartialEq)]
pub struct MagneticProps {
    #[prop_or_default]
    pub field: Option<MagneticField>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Decorative wrapper that drifts toward a nearby pointer and eases back to rest.
#[function_component(Magnetic)]
pub fn magnetic(props: &MagneticProps) -> Html {
    let node = use_node_ref();
    let state = use_mut_ref(MagnetState::default);
    let field = props.field.unwrap_or_default();

    {
        let node = node.clone();
        let state = state.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            let Some(element) = node.cast::<HtmlElement>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let offset = state.borrow().offset;
            // Measure the rest position, not the displaced one.
            let center = (
                rect.left() + rect.width() / 2.0 - offset.0,
                rect.top() + rect.height() / 2.0 - offset.1,
            );
            let target = field.target(center, (e.client_x() as f64, e.client_y() as f64));
            let idle = {
                let mut magnet = state.borrow_mut();
                magnet.target = target;
                magnet.frame.is_none()
            };
            if idle && target != offset {
                settle(state.clone(), node.clone(), field);
            }
        });
    }

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    state.borrow_mut().frame = None;
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={props.style.clone()}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pull_outside_radius() {
        let field = MagneticField::default();
        assert_eq!(field.target((0.0, 0.0), (field.radius, 0.0)), (0.0, 0.0));
        assert_eq!(field.target((0.0, 0.0), (500.0, 500.0)), (0.0, 0.0));
    }

    #[test]
    fn pull_grows_toward_centre() {
        let field = MagneticField::default();
        let far = field.target((0.0, 0.0), (120.0, 0.0));
        let near = field.target((0.0, 0.0), (40.0, 0.0));
        assert!(near.0 > far.0 && far.0 > 0.0);
        assert!((near.0 - field.strength * 0.75).abs() < 1e-9);
        assert_eq!(near.1, 0.0);
    }

    #[test]
    fn pull_points_at_pointer() {
        let field = MagneticField::default();
        let (dx, dy) = field.target((100.0, 100.0), (70.0, 60.0));
        assert!(dx < 0.0 && dy < 0.0);
        assert!((dy / dx - 40.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn step_eases_back_to_rest() {
        let field = MagneticField::default();
        let mut offset = (20.0, -10.0);
        for _ in 0..200 {
            offset = field.step(offset, (0.0, 0.0));
        }
        assert!(offset.0.abs() < 1e-6 && offset.1.abs() < 1e-6);
    }
}
