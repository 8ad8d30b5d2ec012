use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::easing::Easing;
use crate::animation::tween::{animate, Animation};

const SCRAMBLE_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}', '|',
    ';', ':', ',', '.', '<', '>', '?',
];

const SCRAMBLE_MS: f64 = 200.0;
const SETTLE_MS: f64 = 300.0;

/// One frame of the effect. Each non-space character shows through with
/// probability `progress`; everything else is noise.
pub fn scramble_frame(original: &str, progress: f64, mut rng: impl FnMut() -> f64) -> String {
    original
        .chars()
        .map(|c| {
            if c == ' ' {
                ' '
            } else if rng() < progress {
                c
            } else {
                let pick = (rng() * SCRAMBLE_CHARS.len() as f64) as usize;
                SCRAMBLE_CHARS[pick.min(SCRAMBLE_CHARS.len() - 1)]
            }
        })
        .collect()
}

/// How far the text has settled `elapsed_ms` into one scramble pass.
pub fn settle_progress(elapsed_ms: f64) -> f64 {
    ((elapsed_ms - SCRAMBLE_MS) / SETTLE_MS).clamp(0.0, 1.0)
}

#[derive(Properties, PartialEq)]
pub struct ScrambleTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Time between scramble passes.
    #[prop_or(700)]
    pub interval_ms: u32,
}

/// Text that periodically dissolves into symbols and resolves back.
#[function_component(ScrambleText)]
pub fn scramble_text(props: &ScrambleTextProps) -> Html {
    let node = use_node_ref();
    let pass = use_mut_ref(|| None::<Animation>);

    {
        let node = node.clone();
        let pass = pass.clone();
        let text = props.text.clone();
        use_effect_with_deps(
            move |(text, interval_ms)| {
                let original: Rc<str> = Rc::from(text.as_str());
                let teardown_pass = pass.clone();
                let interval = Interval::new(*interval_ms, move || {
                    let Some(element) = node.cast::<HtmlElement>() else {
                        return;
                    };
                    let update = {
                        let element = element.clone();
                        let original = original.clone();
                        move |elapsed: f64| {
                            let frame = scramble_frame(
                                &original,
                                settle_progress(elapsed),
                                web_sys::js_sys::Math::random,
                            );
                            element.set_text_content(Some(&frame));
                        }
                    };
                    let done = {
                        let original = original.clone();
                        move || element.set_text_content(Some(&original))
                    };
                    let total = SCRAMBLE_MS + SETTLE_MS;
                    *pass.borrow_mut() = Some(animate(0.0, total, total, Easing::Linear, update, done));
                });
                move || {
                    drop(interval);
                    teardown_pass.borrow_mut().take();
                }
            },
            (text, props.interval_ms),
        );
    }

    html! {
        <span ref={node} class={props.class.clone()}>{ props.text.clone() }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_survive_scrambling() {
        let frame = scramble_frame("a b c", 0.0, || 0.3);
        assert_eq!(frame.chars().nth(1), Some(' '));
        assert_eq!(frame.chars().nth(3), Some(' '));
        assert!(frame.chars().filter(|c| *c != ' ').all(|c| SCRAMBLE_CHARS.contains(&c)));
    }

    #[test]
    fn full_progress_restores_text() {
        assert_eq!(scramble_frame("Hello world", 1.0, || 0.999), "Hello world");
    }

    #[test]
    fn noise_index_stays_in_bounds() {
        let frame = scramble_frame("xyz", 0.0, || 0.999_999);
        assert!(frame.chars().all(|c| SCRAMBLE_CHARS.contains(&c)));
    }

    #[test]
    fn settle_starts_after_scramble_phase() {
        assert_eq!(settle_progress(0.0), 0.0);
        assert_eq!(settle_progress(SCRAMBLE_MS), 0.0);
        assert!((settle_progress(SCRAMBLE_MS + SETTLE_MS / 2.0) - 0.5).abs() < 1e-9);
        assert_eq!(settle_progress(1_000.0), 1.0);
    }
}
