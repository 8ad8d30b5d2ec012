use yew::prelude::*;

use crate::animation::frame::{use_scroll_frames, ScrollSample};

/// Scrolling down past this point hides the bar.
const HIDE_AFTER_PX: f64 = 100.0;
/// Vertical sample point used to decide whether the bar sits over a dark band.
const SAMPLE_Y_PX: f64 = 16.0;
const DARK_SELECTOR: &str = ".bg-black";

/// Direction-aware visibility of the floating back bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavbarVisibility {
    pub visible: bool,
    last_offset: f64,
}

impl NavbarVisibility {
    pub fn update(&mut self, offset: f64) {
        if offset > self.last_offset && offset > HIDE_AFTER_PX {
            self.visible = false;
        } else if offset < self.last_offset {
            self.visible = true;
        }
        self.last_offset = offset;
    }
}

/// The hero band is always dark, below it only `.bg-black` sections are.
pub fn is_over_dark(offset: f64, viewport_height: f64, sample_hits_dark: bool) -> bool {
    sample_hits_dark || offset < viewport_height
}

fn sample_hits_dark(viewport_width: f64) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.element_from_point((viewport_width / 2.0) as f32, SAMPLE_Y_PX as f32))
        .and_then(|el| el.closest(DARK_SELECTOR).ok().flatten())
        .is_some()
}

#[function_component(ProjectNavbar)]
pub fn project_navbar() -> Html {
    let visibility = use_mut_ref(NavbarVisibility::default);
    let visible = use_state_eq(|| false);
    let over_dark = use_state_eq(|| true);

    {
        let visible = visible.clone();
        let over_dark = over_dark.clone();
        use_scroll_frames(move |sample: ScrollSample| {
            let mut state = visibility.borrow_mut();
            state.update(sample.offset);
            visible.set(state.visible);
            over_dark.set(is_over_dark(
                sample.offset,
                sample.viewport_height,
                sample_hits_dark(sample.viewport_width),
            ));
        });
    }

    let go_back = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href("/#work") {
                log::error!("Failed to navigate back to work: {:?}", e);
            }
        }
    });

    html! {
        <nav class={classes!("project-navbar", (!*visible).then(|| "hidden"))}>
            <button
                onclick={go_back}
                class={classes!("project-back", "cursor-hover", (*over_dark).then(|| "on-dark"))}
            >
                {"← Back"}
            </button>
            <style>
                {r#"
                .project-navbar {
                    position: fixed;
                    top: 1rem;
                    left: 50%;
                    transform: translate(-50%, 0);
                    width: 95%;
                    max-width: 64rem;
                    z-index: 40;
                    transition: transform 0.3s ease-in-out;
                }
                .project-navbar.hidden {
                    transform: translate(-50%, -200%);
                }
                .project-back {
                    height: 44px;
                    padding: 0 0.75rem;
                    border-radius: 28px;
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    background: rgba(255, 255, 255, 0.08);
                    backdrop-filter: blur(12px);
                    font-family: 'Playfair Display', serif;
                    font-size: 1.125rem;
                    font-weight: 700;
                    letter-spacing: -0.06em;
                    color: var(--heading);
                    transition: color 0.3s;
                }
                .project-back.on-dark {
                    color: #ffffff;
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_shows_on_scroll_up() {
        let mut state = NavbarVisibility::default();
        assert!(!state.visible);
        state.update(400.0);
        assert!(!state.visible);
        state.update(350.0);
        assert!(state.visible);
    }

    #[test]
    fn small_downward_scroll_near_top_keeps_state() {
        let mut state = NavbarVisibility::default();
        state.update(300.0);
        state.update(200.0);
        assert!(state.visible);
        state.update(250.0);
        assert!(!state.visible);
        state.update(40.0);
        assert!(state.visible);
        state.update(80.0);
        assert!(state.visible);
    }

    #[test]
    fn hero_band_counts_as_dark() {
        assert!(is_over_dark(100.0, 800.0, false));
        assert!(!is_over_dark(900.0, 800.0, false));
        assert!(is_over_dark(900.0, 800.0, true));
    }
}
