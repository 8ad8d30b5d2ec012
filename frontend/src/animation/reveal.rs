//! Scroll-triggered entrance animations.
//!
//! A block starts hidden and animates to its visible state exactly once, on
//! the first sample where its trigger edge has passed the threshold line.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use super::easing::Easing;
use super::frame::{use_scroll_frames, ScrollSample};
use super::tween::{animate, Animation};

/// Which edge of the trigger element is compared against the threshold line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

/// "top 80%": fire once the element's top edge is at or above 80% of the
/// viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub edge: Edge,
    pub viewport_fraction: f64,
}

impl Threshold {
    pub const fn new(edge: Edge, viewport_fraction: f64) -> Self {
        Self { edge, viewport_fraction }
    }

    pub fn parse(spec: &str) -> Option<Self> {
        let mut parts = spec.split_whitespace();
        let edge = match parts.next()? {
            "top" => Edge::Top,
            "center" => Edge::Center,
            "bottom" => Edge::Bottom,
            _ => return None,
        };
        let percent: f64 = parts.next()?.strip_suffix('%')?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(edge, percent / 100.0))
    }

    /// `top`/`bottom` are the element's bounding box relative to the viewport.
    pub fn is_crossed(&self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        let edge = match self.edge {
            Edge::Top => top,
            Edge::Center => (top + bottom) / 2.0,
            Edge::Bottom => bottom,
        };
        edge <= viewport_height * self.viewport_fraction
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::new(Edge::Top, 0.8)
    }
}

/// One-shot trigger. Once fired it stays fired for the element's lifetime.
#[derive(Debug, Clone, Default)]
pub struct RevealTrigger {
    threshold: Threshold,
    fired: bool,
}

impl RevealTrigger {
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold, fired: false }
    }

    /// Returns true only for the sample that fires the reveal.
    pub fn check(&mut self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        if self.fired || !self.threshold.is_crossed(top, bottom, viewport_height) {
            return false;
        }
        self.fired = true;
        true
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotation: f64,
}

impl VisualState {
    pub const VISIBLE: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotation: 0.0,
    };

    pub fn hidden_below(y: f64) -> Self {
        Self { opacity: 0.0, y, ..Self::VISIBLE }
    }

    pub fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            rotation: mix(self.rotation, to.rotation),
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.3}) rotate({:.2}deg)",
            self.x, self.y, self.scale, self.rotation
        )
    }
}

/// What gets animated when the trigger fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealTarget {
    Element,
    /// Each direct child, staggered by `stagger_ms`.
    Children,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealSpec {
    pub threshold: Threshold,
    pub from: VisualState,
    pub to: VisualState,
    pub duration_ms: f64,
    pub stagger_ms: f64,
    /// Wait after the trigger fires before the first item moves.
    pub delay_ms: f64,
    pub easing: Easing,
    pub target: RevealTarget,
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            from: VisualState::hidden_below(50.0),
            to: VisualState::VISIBLE,
            duration_ms: 1000.0,
            stagger_ms: 0.0,
            delay_ms: 0.0,
            easing: Easing::Power3Out,
            target: RevealTarget::Element,
        }
    }
}

impl RevealSpec {
    /// Total timeline length for `count` staggered items.
    pub fn total_ms(&self, count: usize) -> f64 {
        self.delay_ms + self.duration_ms + self.stagger_ms * count.saturating_sub(1) as f64
    }

    /// Visual state of item `index` at `elapsed_ms` since the trigger fired.
    pub fn state_at(&self, index: usize, elapsed_ms: f64) -> VisualState {
        let local = elapsed_ms - self.delay_ms - self.stagger_ms * index as f64;
        if local <= 0.0 {
            return self.from;
        }
        if self.duration_ms <= 0.0 || local >= self.duration_ms {
            return self.to;
        }
        self.from.lerp(&self.to, self.easing.apply(local / self.duration_ms))
    }
}

fn targets(root: &Element, target: RevealTarget) -> Vec<HtmlElement> {
    match target {
        RevealTarget::Element => root.clone().dyn_into::<HtmlElement>().into_iter().collect(),
        RevealTarget::Children => {
            let children = root.children();
            (0..children.length())
                .filter_map(|i| children.item(i))
                .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
                .collect()
        }
    }
}

fn apply(elements: &[HtmlElement], spec: &RevealSpec, elapsed_ms: f64) {
    for (index, element) in elements.iter().enumerate() {
        let state = spec.state_at(index, elapsed_ms);
        let style = element.style();
        // Only touch the animated properties, the rest of the inline style belongs to the markup.
        let _ = style.set_property("opacity", &format!("{:.3}", state.opacity));
        let _ = style.set_property("transform", &state.transform());
    }
}

/// Reveals the element behind `node` (or its children) once, when it scrolls
/// past `spec.threshold`.
#[hook]
pub fn use_scroll_reveal(node: NodeRef, spec: RevealSpec) {
    let trigger = use_mut_ref(|| RevealTrigger::new(spec.threshold));
    let running = use_mut_ref(|| None::<Animation>);

    // Hide before the first frame so nothing flashes in its final position.
    {
        let node = node.clone();
        let spec = spec.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(root) = node.cast::<Element>() {
                    apply(&targets(&root, spec.target), &spec, 0.0);
                }
                || ()
            },
            (),
        );
    }

    {
        let running = running.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    running.borrow_mut().take();
                }
            },
            (),
        );
    }

    use_scroll_frames(move |sample: ScrollSample| {
        let Some(root) = node.cast::<Element>() else {
            return;
        };
        let rect = root.get_bounding_client_rect();
        if !trigger
            .borrow_mut()
            .check(rect.top(), rect.bottom(), sample.viewport_height)
        {
            return;
        }
        log::debug!("Reveal fired for <{}>", root.tag_name().to_lowercase());

        let elements = Rc::new(targets(&root, spec.target));
        let spec = Rc::new(spec.clone());
        let total = spec.total_ms(elements.len());
        let update = {
            let elements = elements.clone();
            let spec = spec.clone();
            move |elapsed: f64| apply(&elements, &spec, elapsed)
        };
        *running.borrow_mut() = Some(animate(0.0, total, total, Easing::Linear, update, || ()));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_thresholds() {
        assert_eq!(Threshold::parse("top 80%"), Some(Threshold::new(Edge::Top, 0.8)));
        assert_eq!(Threshold::parse("center 50%"), Some(Threshold::new(Edge::Center, 0.5)));
        assert_eq!(Threshold::parse("bottom 100%"), Some(Threshold::new(Edge::Bottom, 1.0)));
        assert_eq!(Threshold::parse("top"), None);
        assert_eq!(Threshold::parse("left 10%"), None);
        assert_eq!(Threshold::parse("top 80% extra"), None);
    }

    #[test]
    fn section_thresholds_parse_without_fallback() {
        for (spec, fraction) in [("top 70%", 0.7), ("top 85%", 0.85), ("top 90%", 0.9)] {
            assert_eq!(Threshold::parse(spec), Some(Threshold::new(Edge::Top, fraction)));
        }
    }

    #[test]
    fn fires_immediately_when_already_past_at_mount() {
        // Reloaded mid-page: the block sits well above the 80% line.
        let mut trigger = RevealTrigger::new(Threshold::parse("top 80%").unwrap());
        assert!(trigger.check(-300.0, 200.0, 1000.0));
        assert!(trigger.has_fired());
    }

    #[test]
    fn waits_below_the_line() {
        let mut trigger = RevealTrigger::new(Threshold::default());
        assert!(!trigger.check(900.0, 1400.0, 1000.0));
        assert!(!trigger.has_fired());
        assert!(trigger.check(800.0, 1300.0, 1000.0));
    }

    #[test]
    fn never_fires_twice() {
        let mut trigger = RevealTrigger::new(Threshold::default());
        assert!(trigger.check(700.0, 1200.0, 1000.0));
        // scroll away, then back past the line
        assert!(!trigger.check(1500.0, 2000.0, 1000.0));
        assert!(!trigger.check(600.0, 1100.0, 1000.0));
        assert!(trigger.has_fired());
    }

    #[test]
    fn stagger_delays_each_child() {
        let spec = RevealSpec {
            stagger_ms: 300.0,
            duration_ms: 800.0,
            easing: Easing::Linear,
            target: RevealTarget::Children,
            ..RevealSpec::default()
        };
        assert_eq!(spec.total_ms(3), 1400.0);
        assert_eq!(spec.state_at(1, 200.0), spec.from);
        let halfway = spec.state_at(1, 700.0);
        assert!((halfway.opacity - 0.5).abs() < 1e-9);
        assert_eq!(spec.state_at(2, 1400.0), VisualState::VISIBLE);
    }

    #[test]
    fn delay_shifts_whole_timeline() {
        let spec = RevealSpec {
            delay_ms: 200.0,
            duration_ms: 1000.0,
            easing: Easing::Linear,
            ..RevealSpec::default()
        };
        assert_eq!(spec.total_ms(1), 1200.0);
        assert_eq!(spec.state_at(0, 150.0), spec.from);
        assert!((spec.state_at(0, 700.0).opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn transform_reflects_state() {
        assert_eq!(
            VisualState::hidden_below(40.0).transform(),
            "translate(0.00px, 40.00px) scale(1.000) rotate(0.00deg)"
        );
    }
}
