use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

/// Anything that is clickable on its own.
pub const CLICKABLE_SELECTOR: &str =
    "button, a, [role=\"button\"], input[type=\"button\"], input[type=\"submit\"]";
/// Elements flagged as clickable through styling.
pub const POINTER_FLAG_SELECTOR: &str = ".cursor-pointer";
/// Large card containers. Hovering one does not make the cursor a hand by itself.
pub const CARD_CONTAINER_SELECTOR: &str = ".work-card";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorGlyph {
    Arrow,
    Hand,
}

/// What the element under the pointer matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverTarget {
    pub clickable: bool,
    pub pointer_flag: bool,
    /// The nearest `.cursor-pointer` ancestor is the card container itself.
    pub flag_is_card: bool,
}

impl HoverTarget {
    pub fn of(target: &Element) -> Self {
        let closest = |selector: &str| target.closest(selector).ok().flatten();
        let flagged = closest(POINTER_FLAG_SELECTOR);
        let card = closest(CARD_CONTAINER_SELECTOR);
        Self {
            clickable: closest(CLICKABLE_SELECTOR).is_some(),
            pointer_flag: flagged.is_some(),
            flag_is_card: matches!((&flagged, &card), (Some(f), Some(c)) if f == c),
        }
    }

    pub fn glyph(&self) -> CursorGlyph {
        if self.clickable || (self.pointer_flag && !self.flag_is_card) {
            CursorGlyph::Hand
        } else {
            CursorGlyph::Arrow
        }
    }
}

/// Replaces the system cursor with an overlay that follows the pointer.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let cursor_ref = use_node_ref();
    let glyph = use_state_eq(|| CursorGlyph::Arrow);
    let visible = use_state_eq(|| false);

    {
        let cursor_ref = cursor_ref.clone();
        let visible = visible.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            visible.set(true);
            if let Some(cursor) = cursor_ref.cast::<HtmlElement>() {
                let style = cursor.style();
                let _ = style.set_property("left", &format!("{}px", e.client_x()));
                let _ = style.set_property("top", &format!("{}px", e.client_y()));
            }
        });
    }
    {
        let glyph = glyph.clone();
        use_event_with_window("mouseover", move |e: MouseEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                glyph.set(HoverTarget::of(&target).glyph());
            }
        });
    }
    {
        let visible = visible.clone();
        use_event_with_window("mouseout", move |e: MouseEvent| {
            // Leaving the document entirely
            if e.related_target().is_none() {
                visible.set(false);
            }
        });
    }

    let (src, alt, class) = match *glyph {
        CursorGlyph::Arrow => ("/assets/cursor-pointer.svg", "Cursor", "custom-cursor-glyph"),
        CursorGlyph::Hand => ("/assets/cursor-hand.svg", "Hand cursor", "custom-cursor-glyph hand"),
    };

    html! {
        <>
            <div
                ref={cursor_ref}
                class={classes!("custom-cursor", (*visible).then(|| "visible"))}
            >
                <img src={config::asset(src)} alt={alt} class={class} />
            </div>
            <style>
                {r#"
                * {
                    cursor: none !important;
                }
                .custom-cursor {
                    position: fixed;
                    left: -100px;
                    top: -100px;
                    pointer-events: none;
                    z-index: 10000;
                    opacity: 0;
                    transition: opacity 0.2s;
                    transform: translate(-50%, -50%) scale(1.7);
                    transform-origin: center center;
                }
                .custom-cursor.visible {
                    opacity: 1;
                }
                .custom-cursor-glyph {
                    width: 28px;
                    height: 28px;
                    filter: drop-shadow(0 1px 2px rgba(0, 0, 0, 0.2));
                }
                .custom-cursor-glyph.hand {
                    width: 32px;
                    height: 32px;
                }
                @media (hover: none) {
                    .custom-cursor {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_and_links_get_the_hand() {
        let hover = HoverTarget { clickable: true, ..Default::default() };
        assert_eq!(hover.glyph(), CursorGlyph::Hand);
    }

    #[test]
    fn card_container_alone_keeps_the_arrow() {
        let hover = HoverTarget { pointer_flag: true, flag_is_card: true, ..Default::default() };
        assert_eq!(hover.glyph(), CursorGlyph::Arrow);
    }

    #[test]
    fn button_inside_card_still_gets_the_hand() {
        let hover = HoverTarget { clickable: true, pointer_flag: true, flag_is_card: true };
        assert_eq!(hover.glyph(), CursorGlyph::Hand);
    }

    #[test]
    fn flagged_element_outside_card_gets_the_hand() {
        let hover = HoverTarget { pointer_flag: true, ..Default::default() };
        assert_eq!(hover.glyph(), CursorGlyph::Hand);
    }

    #[test]
    fn plain_text_keeps_the_arrow() {
        assert_eq!(HoverTarget::default().glyph(), CursorGlyph::Arrow);
    }
}
