use yew::prelude::*;

use crate::animation::easing::Easing;
use crate::animation::reveal::{use_scroll_reveal, RevealSpec, RevealTarget, VisualState};
use crate::content::PlaygroundItem;
use crate::effects::hover_preview::{HoverPreviewList, PreviewEntry};

#[derive(Properties, PartialEq)]
pub struct PlaygroundSectionProps {
    pub items: Vec<PlaygroundItem>,
}

#[function_component(PlaygroundSection)]
pub fn playground_section(props: &PlaygroundSectionProps) -> Html {
    let list = use_node_ref();
    use_scroll_reveal(
        list.clone(),
        RevealSpec {
            from: VisualState {
                opacity: 0.0,
                x: 0.0,
                y: 40.0,
                scale: 0.8,
                rotation: 0.0,
            },
            duration_ms: 800.0,
            stagger_ms: 150.0,
            easing: Easing::BackOut(1.7),
            target: RevealTarget::Children,
            ..RevealSpec::default()
        },
    );

    let entries: Vec<PreviewEntry> = props.items.iter().map(PreviewEntry::from).collect();

    html! {
        <section id="playground" class="playground-section">
            <div class="playground-container">
                <div class="section-intro">
                    <h2>{"Playground"}</h2>
                    <p>{"A space for experimentation, personal projects, and creative exploration."}</p>
                </div>
                <HoverPreviewList items={entries} list_ref={list} />
            </div>
            <style>
                {r#"
                .playground-section {
                    min-height: 100vh;
                    padding: 6rem 0;
                }
                .playground-container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section-intro {
                    text-align: center;
                    margin-bottom: 6rem;
                }
                .section-intro h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(1.875rem, 5vw, 3.75rem);
                    font-weight: 300;
                    color: var(--heading);
                    letter-spacing: -0.06em;
                    margin-bottom: 2rem;
                }
                .section-intro p {
                    font-size: 1.125rem;
                    color: var(--body);
                    max-width: 56rem;
                    margin: 0 auto;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
