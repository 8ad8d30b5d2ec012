use yew::prelude::*;

use crate::animation::reveal::{use_scroll_reveal, RevealSpec, RevealTarget, Threshold};
use crate::content::AboutConfig;
use crate::effects::sticker::Stickers;

#[derive(Properties, PartialEq)]
pub struct AboutSectionProps {
    pub config: AboutConfig,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    let grid = use_node_ref();
    use_scroll_reveal(
        grid.clone(),
        RevealSpec {
            threshold: Threshold::parse("top 70%").unwrap_or_default(),
            stagger_ms: 300.0,
            target: RevealTarget::Children,
            ..RevealSpec::default()
        },
    );

    let config = &props.config;
    let (badge, loose) = match config.stickers.split_first() {
        Some((first, rest)) => (first.clone(), rest.to_vec()),
        None => (String::new(), Vec::new()),
    };

    html! {
        <section id="about" class="about-section">
            <div ref={grid} class="about-grid">
                <div class="about-text">
                    <h2>{ &config.heading }</h2>
                    { for config.paragraphs.iter().map(|p| html! { <p>{ p }</p> }) }
                </div>
                <div class="about-art">
                    <div class="about-art-inner">
                        <span>{ badge }</span>
                    </div>
                </div>
            </div>
            <Stickers glyphs={loose} />
            <style>
                {r#"
                .about-section {
                    position: relative;
                    padding: 6rem 1.5rem;
                    background: #f9fafb;
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem;
                    align-items: center;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .about-text h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 300;
                    color: var(--heading);
                    letter-spacing: -0.06em;
                    margin-bottom: 2rem;
                }
                .about-text p {
                    color: var(--body);
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }
                .about-art {
                    aspect-ratio: 1 / 1;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    background: linear-gradient(135deg, #dca8ff, #a8ffdc);
                }
                .about-art-inner {
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #ffffff;
                    border-radius: 1rem;
                    font-size: 3.75rem;
                }
                @media (min-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
