use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::frame::{use_scroll_frames, ScrollSample};
use crate::config::{NAV_SCROLLED_AFTER_PX, SECTION_MARKER_PX};
use crate::content::NavItem;
use crate::Route;

/// Viewport-relative vertical extent of one page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionExtent {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// First section that straddles the marker line under the navigation bar.
pub fn active_section(sections: &[SectionExtent], marker: f64) -> Option<&str> {
    sections
        .iter()
        .find(|s| s.top <= marker && s.bottom >= marker)
        .map(|s| s.id.as_str())
}

pub fn measure_sections(ids: &[&str]) -> Vec<SectionExtent> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    ids.iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionExtent {
                id: id.to_string(),
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

/// Scrolls the section into view. Returns false when it is not on this page.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    let top = element.get_bounding_client_rect().top() + offset;
    window.scroll_to_with_x_and_y(0.0, top);
    true
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub items: Vec<NavItem>,
    #[prop_or_default]
    pub active_section: Option<String>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let is_scrolled = use_state_eq(|| false);
    let navigator = use_navigator();

    {
        let is_scrolled = is_scrolled.clone();
        use_scroll_frames(move |sample: ScrollSample| {
            is_scrolled.set(sample.offset > NAV_SCROLLED_AFTER_PX);
        });
    }

    let go_to = {
        let navigator = navigator.clone();
        move |id: String| {
            let navigator = navigator.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if !scroll_to_section(&id) {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Home);
                    }
                }
            })
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <button onclick={go_to("hero".to_string())} class="nav-logo cursor-hover">
                    {"Portfolio"}
                </button>
                <div class="nav-links">
                    { for props.items.iter().map(|item| {
                        let active = props.active_section.as_deref() == Some(item.section.as_str());
                        html! {
                            <button
                                key={item.section.clone()}
                                onclick={go_to(item.section.clone())}
                                class={classes!("nav-link", "cursor-hover", active.then(|| "active"))}
                            >
                                { &item.label }
                            </button>
                        }
                    }) }
                </div>
                <button onclick={go_to("contact".to_string())} class="nav-contact cursor-hover">
                    {"Contact"}
                </button>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    transition: all 0.3s ease;
                    background: transparent;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #f3f4f6;
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.125rem;
                    font-weight: 700;
                    letter-spacing: -0.06em;
                    background: none;
                    border: none;
                    color: var(--heading);
                }
                .nav-links {
                    display: none;
                    gap: 2rem;
                }
                .nav-link {
                    font-family: 'Inter', sans-serif;
                    font-size: 0.875rem;
                    font-weight: 500;
                    background: none;
                    border: none;
                    color: var(--body);
                    transition: color 0.2s;
                }
                .nav-link:hover, .nav-link.active {
                    color: var(--link);
                }
                .nav-contact {
                    font-family: 'Inter', sans-serif;
                    background: var(--heading);
                    color: #ffffff;
                    padding: 0.5rem 1.5rem;
                    border-radius: 999px;
                    border: none;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                @media (min-width: 768px) {
                    .nav-links {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

/// Tracks which section sits under the navigation bar.
#[hook]
pub fn use_active_section(ids: &'static [&'static str]) -> Option<String> {
    let active = use_state_eq(|| ids.first().map(|id| id.to_string()));
    {
        let active = active.clone();
        use_scroll_frames(move |_| {
            let sections = measure_sections(ids);
            // Keep the last known section while scrolling through gaps
            if let Some(id) = active_section(&sections, SECTION_MARKER_PX) {
                active.set(Some(id.to_string()));
            }
        });
    }
    (*active).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(id: &str, top: f64, bottom: f64) -> SectionExtent {
        SectionExtent { id: id.to_string(), top, bottom }
    }

    #[test]
    fn picks_section_under_marker() {
        let sections = vec![
            extent("hero", -900.0, 50.0),
            extent("work", 50.0, 1400.0),
            extent("about", 1400.0, 2000.0),
        ];
        assert_eq!(active_section(&sections, 100.0), Some("work"));
    }

    #[test]
    fn first_match_wins_on_shared_edge() {
        let sections = vec![extent("hero", -900.0, 100.0), extent("work", 100.0, 900.0)];
        assert_eq!(active_section(&sections, 100.0), Some("hero"));
    }

    #[test]
    fn nothing_when_marker_is_in_a_gap() {
        let sections = vec![extent("hero", -900.0, 20.0), extent("work", 200.0, 900.0)];
        assert_eq!(active_section(&sections, 100.0), None);
    }
}
