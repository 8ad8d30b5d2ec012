use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::frame::{use_scroll_frames, ScrollSample};
use crate::animation::reveal::{use_scroll_reveal, RevealSpec};
use crate::animation::sticky_stack::StickyStack;
use crate::components::work_card::WorkCard;
use crate::content::ProjectEntry;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct WorkSectionProps {
    pub projects: Vec<ProjectEntry>,
}

/// Project cards pinned under the navigation bar, each one shrinking and
/// blurring away as the next slides over it.
#[function_component(WorkSection)]
pub fn work_section(props: &WorkSectionProps) -> Html {
    let title = use_node_ref();
    let deck = use_node_ref();
    let navigator = use_navigator();
    let stack = StickyStack::default();

    use_scroll_reveal(title.clone(), RevealSpec::default());

    {
        let deck = deck.clone();
        use_scroll_frames(move |sample: ScrollSample| {
            if let Some(deck) = deck.cast::<Element>() {
                stack.apply(&deck, sample.viewport_height);
            }
        });
    }

    html! {
        <section id="work" class="work-section">
            <div class="work-container">
                <h2 ref={title} class="section-title">{"work."}</h2>
                <div ref={deck} class="work-deck">
                    { for props.projects.iter().map(|project| {
                        let onclick = navigator.clone().map(|navigator| {
                            let id = project.slug.clone();
                            Callback::from(move |_: MouseEvent| {
                                log::info!("Opening project {}", id);
                                navigator.push(&Route::Project { id: id.clone() });
                            })
                        });
                        html! {
                            <div
                                key={project.slug.clone()}
                                class="work-slot"
                                style={format!("top: {}px;", stack.band_top)}
                            >
                                <WorkCard
                                    title={project.title.clone()}
                                    description={project.description.clone()}
                                    categories={project.tags.clone()}
                                    media={project.media.clone()}
                                    background_color={project.background_color.clone()}
                                    button_color={project.button_color.clone()}
                                    {onclick}
                                />
                            </div>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .work-section {
                    padding: 6rem 0;
                    background: #ffffff;
                }
                .work-container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section-title {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 300;
                    color: var(--heading);
                    letter-spacing: -0.06em;
                    margin-bottom: 5rem;
                }
                .work-deck {
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                    padding-bottom: 20vh;
                }
                .work-slot {
                    position: sticky;
                    transform-origin: center top;
                    will-change: transform, filter, opacity;
                }
                "#}
            </style>
        </section>
    }
}
