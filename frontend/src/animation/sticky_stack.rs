//! Pinned card deck.
//!
//! Every card sticks to the same band near the top of the viewport. While the
//! next card scrolls up toward the band the pinned one shrinks, blurs and fades;
//! once the next card reaches the band the old one is retired for good.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    /// Below the band, untouched.
    Pending,
    /// Pinned, nothing approaching yet.
    Active,
    /// Pinned while the next card approaches.
    Retiring,
    /// Covered by a later card. Invisible and click-through.
    Retired,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    pub phase: CardPhase,
    pub progress: f64,
    pub scale: f64,
    pub blur_px: f64,
    pub opacity: f64,
    pub interactive: bool,
}

impl CardVisual {
    pub fn transform(&self) -> String {
        format!("scale({:.4})", self.scale)
    }

    pub fn filter(&self) -> String {
        format!("blur({:.2}px)", self.blur_px)
    }

    pub fn pointer_events(&self) -> &'static str {
        if self.interactive {
            "auto"
        } else {
            "none"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickyStack {
    /// Distance of the sticky band from the top of the viewport.
    pub band_top: f64,
    /// A card counts as pinned when within this many pixels of the band.
    pub tolerance: f64,
    pub min_scale: f64,
    pub max_blur_px: f64,
}

impl Default for StickyStack {
    fn default() -> Self {
        Self {
            band_top: 96.0,
            tolerance: 1.0,
            min_scale: 0.85,
            max_blur_px: 12.0,
        }
    }
}

impl StickyStack {
    /// Retirement progress from the next card's distance to the band:
    /// 0 while it is a viewport or more away, 1 when it touches the band.
    pub fn progress(distance: f64, viewport_height: f64) -> f64 {
        if viewport_height <= 0.0 {
            return if distance <= 0.0 { 1.0 } else { 0.0 };
        }
        1.0 - (distance / viewport_height).clamp(0.0, 1.0)
    }

    fn visual(&self, phase: CardPhase, progress: f64) -> CardVisual {
        CardVisual {
            phase,
            progress,
            scale: 1.0 - (1.0 - self.min_scale) * progress,
            blur_px: self.max_blur_px * progress,
            opacity: 1.0 - progress,
            interactive: phase != CardPhase::Retired,
        }
    }

    /// Index of the card that currently owns the band. Before the deck
    /// reaches the band the first card leads.
    pub fn active_index(&self, card_tops: &[f64]) -> usize {
        card_tops
            .iter()
            .rposition(|top| top - self.band_top <= self.tolerance)
            .unwrap_or(0)
    }

    /// `card_tops` are the viewport-relative top edges, in deck order.
    pub fn layout(&self, card_tops: &[f64], viewport_height: f64) -> Vec<CardVisual> {
        if card_tops.is_empty() {
            return Vec::new();
        }
        let active = self.active_index(card_tops);
        let active_progress = match card_tops.get(active + 1) {
            Some(next_top) => Self::progress((next_top - self.band_top).max(0.0), viewport_height),
            None => 0.0,
        };

        card_tops
            .iter()
            .enumerate()
            .map(|(index, _)| {
                if index < active {
                    self.visual(CardPhase::Retired, 1.0)
                } else if index == active {
                    let phase = if active_progress > 0.0 {
                        CardPhase::Retiring
                    } else {
                        CardPhase::Active
                    };
                    self.visual(phase, active_progress)
                } else {
                    self.visual(CardPhase::Pending, 0.0)
                }
            })
            .collect()
    }

    /// Measures the children of `deck` and writes their visuals back as inline styles.
    pub fn apply(&self, deck: &Element, viewport_height: f64) {
        let children = deck.children();
        let cards: Vec<HtmlElement> = (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
            .collect();
        let tops: Vec<f64> = cards
            .iter()
            .map(|card| card.get_bounding_client_rect().top())
            .collect();

        for (card, visual) in cards.iter().zip(self.layout(&tops, viewport_height)) {
            let style = card.style();
            let _ = style.set_property("transform", &visual.transform());
            let _ = style.set_property("filter", &visual.filter());
            let _ = style.set_property("opacity", &format!("{:.3}", visual.opacity));
            let _ = style.set_property("pointer-events", visual.pointer_events());
            let _ = card.set_attribute("data-phase", phase_name(visual.phase));
        }
    }
}

fn phase_name(phase: CardPhase) -> &'static str {
    match phase {
        CardPhase::Pending => "pending",
        CardPhase::Active => "active",
        CardPhase::Retiring => "retiring",
        CardPhase::Retired => "retired",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 900.0;
    const CARD: f64 = 700.0;
    const SECTION_TOP: f64 = 1200.0;

    /// Viewport-relative tops of a sticky deck at the given scroll offset.
    fn tops_at(stack: &StickyStack, cards: usize, scroll: f64) -> Vec<f64> {
        (0..cards)
            .map(|i| (SECTION_TOP + i as f64 * CARD - scroll).max(stack.band_top))
            .collect()
    }

    #[test]
    fn exactly_one_interactive_owner_across_full_scroll() {
        let stack = StickyStack::default();
        let cards = 4;
        let end = SECTION_TOP + cards as f64 * CARD;
        let mut scroll = 0.0;
        while scroll <= end {
            let layout = stack.layout(&tops_at(&stack, cards, scroll), VIEWPORT);
            let owners: Vec<usize> = layout
                .iter()
                .enumerate()
                .filter(|(_, v)| matches!(v.phase, CardPhase::Active | CardPhase::Retiring))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(owners.len(), 1, "scroll {}", scroll);
            let owner = owners[0];
            assert!(layout[owner].interactive);
            for earlier in &layout[..owner] {
                assert_eq!(earlier.phase, CardPhase::Retired);
                assert!(!earlier.interactive);
                assert_eq!(earlier.pointer_events(), "none");
            }
            for later in &layout[owner + 1..] {
                assert_eq!(later.phase, CardPhase::Pending);
            }
            scroll += 7.0;
        }
    }

    #[test]
    fn opacity_falls_as_next_card_approaches() {
        let stack = StickyStack::default();
        let mut previous = f64::MAX;
        let mut distance = VIEWPORT * 1.5;
        while distance > 0.0 {
            let layout = stack.layout(&[stack.band_top, stack.band_top + distance], VIEWPORT);
            let opacity = layout[0].opacity;
            assert!(opacity <= previous, "distance {}", distance);
            previous = opacity;
            distance -= 10.0;
        }

        let touching = stack.layout(&[stack.band_top, stack.band_top], VIEWPORT);
        assert_eq!(touching[0].opacity, 0.0);
        assert_eq!(touching[0].phase, CardPhase::Retired);
        assert_eq!(touching[1].phase, CardPhase::Active);
    }

    #[test]
    fn progress_is_continuous() {
        assert_eq!(StickyStack::progress(VIEWPORT, VIEWPORT), 0.0);
        assert_eq!(StickyStack::progress(2.0 * VIEWPORT, VIEWPORT), 0.0);
        assert!((StickyStack::progress(VIEWPORT / 4.0, VIEWPORT) - 0.75).abs() < 1e-9);
        assert_eq!(StickyStack::progress(0.0, VIEWPORT), 1.0);
    }

    #[test]
    fn retiring_card_scales_and_blurs() {
        let stack = StickyStack::default();
        let layout = stack.layout(&[stack.band_top, stack.band_top + VIEWPORT / 2.0], VIEWPORT);
        assert_eq!(layout[0].phase, CardPhase::Retiring);
        assert!((layout[0].scale - (1.0 - (1.0 - stack.min_scale) * 0.5)).abs() < 1e-9);
        assert!((layout[0].blur_px - stack.max_blur_px * 0.5).abs() < 1e-9);
        assert!(layout[0].interactive);
    }

    #[test]
    fn last_card_never_retires() {
        let stack = StickyStack::default();
        let layout = stack.layout(&[stack.band_top, stack.band_top, stack.band_top], VIEWPORT);
        assert_eq!(layout[2].phase, CardPhase::Active);
        assert_eq!(layout[2].opacity, 1.0);
        assert_eq!(layout[2].scale, 1.0);
    }

    #[test]
    fn empty_deck_has_no_layout() {
        assert!(StickyStack::default().layout(&[], VIEWPORT).is_empty());
    }
}
