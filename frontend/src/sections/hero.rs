use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::frame::{use_scroll_frames, ScrollSample};
use crate::animation::reveal::{use_scroll_reveal, RevealSpec, RevealTarget, Threshold, VisualState};
use crate::components::scramble_text::ScrambleText;
use crate::components::split_text::{SplitMode, SplitText};
use crate::content::{HeroConfig, HeroEntrance};
use crate::effects::magnetic::Magnetic;

/// The hero copy drifts up at this fraction of the scroll offset.
pub const PARALLAX_RATE: f64 = -0.3;

pub fn parallax_offset(scroll_offset: f64) -> f64 {
    scroll_offset * PARALLAX_RATE
}

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub config: HeroConfig,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let container = use_node_ref();
    let body = use_node_ref();
    let config = &props.config;

    {
        let container = container.clone();
        use_scroll_frames(move |sample: ScrollSample| {
            if let Some(element) = container.cast::<HtmlElement>() {
                let _ = element
                    .style()
                    .set_property("transform", &format!("translateY({:.1}px)", parallax_offset(sample.offset)));
            }
        });
    }

    // Already past the threshold on load, so this plays as an entrance.
    use_scroll_reveal(
        body.clone(),
        RevealSpec {
            threshold: Threshold::default(),
            from: VisualState::hidden_below(30.0),
            stagger_ms: 150.0,
            target: RevealTarget::Children,
            ..RevealSpec::default()
        },
    );

    let title = match config.entrance {
        HeroEntrance::SplitChars => html! {
            <h1 class="hero-title">
                <SplitText text={config.title.clone()} mode={SplitMode::Chars} stagger_ms={40.0} duration_ms={1200.0} />
            </h1>
        },
        HeroEntrance::Scramble => html! {
            <h1 class="hero-title">
                <ScrambleText text={config.title.clone()} />
            </h1>
        },
        HeroEntrance::FadeUp => html! {
            <h1 class="hero-title">
                <SplitText text={config.title.clone()} mode={SplitMode::Lines} stagger_ms={0.0} duration_ms={1200.0} />
            </h1>
        },
    };

    html! {
        <section id="hero" class="hero-section">
            <div class="hero-gradient"></div>

            <Magnetic class="hero-dot dot-purple" style="top: 5rem; left: 2.5rem; animation-delay: 0s;"><span></span></Magnetic>
            <Magnetic class="hero-dot dot-aqua" style="top: 10rem; right: 5rem; animation-delay: 2s;"><span></span></Magnetic>
            <Magnetic class="hero-dot dot-blush" style="bottom: 10rem; left: 5rem; animation-delay: 4s;"><span></span></Magnetic>

            <div ref={container} class="hero-content">
                { title }
                <div ref={body}>
                    <p class="hero-subtitle">{ &config.subtitle }</p>
                    <div class="hero-paragraphs">
                        { for config.paragraphs.iter().map(|p| html! { <p>{ p }</p> }) }
                        { for config.closing.iter().map(|c| html! { <p class="hero-closing">{ c }</p> }) }
                    </div>
                    <div class="hero-awards">
                        { for config.awards.iter().map(|award| html! {
                            <div key={award.name.clone()} class="hero-award cursor-hover">
                                <span class="award-name">{ &award.name }</span>
                                <span class="award-count">{ format!("/ {}", award.count) }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero-section {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding: 8rem 0 4rem;
                }
                .hero-gradient {
                    position: absolute;
                    inset: 0;
                    opacity: 0.6;
                    background: linear-gradient(135deg, #f5eaff 0%, #e7fff6 50%, #fff0f3 100%);
                    background-size: 200% 200%;
                    animation: heroGradient 15s ease infinite;
                }
                @keyframes heroGradient {
                    0% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                    100% { background-position: 0% 50%; }
                }
                .hero-dot {
                    position: absolute;
                    z-index: 5;
                    animation: float 6s ease-in-out infinite;
                }
                .hero-dot span {
                    display: block;
                    border-radius: 999px;
                }
                .dot-purple span { width: 1rem; height: 1rem; background: #dca8ff; }
                .dot-aqua span { width: 1.5rem; height: 1.5rem; background: #a8ffdc; }
                .dot-blush span { width: 0.75rem; height: 0.75rem; background: #ffc2d1; }
                @keyframes float {
                    0%, 100% { translate: 0 0; }
                    50% { translate: 0 -12px; }
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 72rem;
                    width: 100%;
                    padding: 0 1.5rem;
                    will-change: transform;
                }
                .hero-title {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(3.75rem, 9vw, 8rem);
                    font-weight: 300;
                    line-height: 1;
                    letter-spacing: -0.06em;
                    color: var(--heading);
                    margin-bottom: 2rem;
                }
                .hero-subtitle {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.25rem;
                    color: var(--body);
                    max-width: 48rem;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                    letter-spacing: -0.06em;
                }
                .hero-paragraphs {
                    max-width: 56rem;
                    font-family: 'Playfair Display', serif;
                    color: var(--body);
                    line-height: 1.6;
                    letter-spacing: -0.06em;
                }
                .hero-paragraphs p {
                    margin-bottom: 1.5rem;
                }
                .hero-closing {
                    font-style: italic;
                    font-size: 1.25rem;
                }
                .hero-awards {
                    margin-top: 4rem;
                    max-width: 56rem;
                }
                .hero-award {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 0;
                    border-bottom: 1px solid #e5e7eb;
                }
                .award-name {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: var(--heading);
                    letter-spacing: -0.06em;
                    transition: color 0.2s;
                }
                .hero-award:hover .award-name {
                    color: var(--link);
                }
                .award-count {
                    font-family: monospace;
                    font-size: 0.875rem;
                    color: var(--body);
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_moves_against_scroll() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert!((parallax_offset(100.0) + 30.0).abs() < 1e-9);
    }
}
