use yew::prelude::*;

use crate::content::{Media, MediaKind};

#[derive(Properties, PartialEq)]
pub struct WorkCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub categories: Vec<String>,
    pub media: Media,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or(AttrValue::Static("#e4dbea"))]
    pub background_color: AttrValue,
    #[prop_or(AttrValue::Static("#dca8ff"))]
    pub button_color: AttrValue,
}

/// Two-pane project card: copy and categories on the left, media on the right.
#[function_component(WorkCard)]
pub fn work_card(props: &WorkCardProps) -> Html {
    let media = match props.media.kind {
        MediaKind::Image => html! {
            <img src={props.media.src.clone()} alt={props.title.clone()} />
        },
        MediaKind::Video => html! {
            <video
                src={props.media.src.clone()}
                poster={props.media.poster.clone()}
                autoplay=true
                loop=true
                muted=true
                playsinline=true
            />
        },
    };

    html! {
        <div class="work-card cursor-pointer" data-card="work-card" onclick={props.onclick.clone()}>
            <div class="work-card-text" style={format!("background-color: {};", props.background_color)}>
                <div class="work-card-copy">
                    <h3>{ props.title.clone() }</h3>
                    <p>{ props.description.clone() }</p>
                    <div class="work-card-categories">
                        { for props.categories.iter().map(|cat| html! {
                            <div class="work-card-category"><span>{ cat }</span></div>
                        }) }
                    </div>
                </div>
                <button
                    type="button"
                    class="work-card-button"
                    style={format!("background: {};", props.button_color)}
                >
                    {"View Project"}
                </button>
            </div>
            <div class="work-card-media">
                { media }
            </div>
            <style>
                {r#"
                .work-card {
                    position: relative;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    width: 100%;
                    height: 646px;
                    border-radius: 20px;
                    overflow: hidden;
                    border: 2px solid #000000;
                    box-sizing: border-box;
                    background: #ffffff;
                    transform-origin: center top;
                    will-change: transform, filter, opacity;
                }
                .work-card-text {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    height: 100%;
                    padding: 60px 16px 0;
                }
                .work-card-copy {
                    max-width: 658px;
                }
                .work-card-copy h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 40px;
                    font-weight: 300;
                    color: #000000;
                    margin-bottom: 1.5rem;
                    letter-spacing: -0.02em;
                }
                .work-card-copy p {
                    font-size: 16px;
                    line-height: 1.6;
                    color: #000000;
                    margin-bottom: 60px;
                }
                .work-card-categories {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    column-gap: 12px;
                    row-gap: 24px;
                }
                .work-card-category {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    background: #ffffff;
                    border-radius: 50px;
                    padding: 0.5rem 1rem;
                    font-size: 16px;
                    line-height: 1;
                    white-space: pre;
                }
                .work-card-button {
                    position: absolute;
                    left: 1rem;
                    right: 1rem;
                    bottom: 60px;
                    height: 60px;
                    border-radius: 50px;
                    border: 0;
                    color: #000000;
                    font-size: 16px;
                }
                .work-card-media {
                    position: relative;
                    height: 100%;
                    min-height: 240px;
                    overflow: hidden;
                    background: #000000;
                    pointer-events: none;
                }
                .work-card-media img, .work-card-media video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    user-select: none;
                }
                @media (max-width: 768px) {
                    .work-card {
                        grid-template-columns: 1fr;
                        height: auto;
                    }
                    .work-card-button {
                        position: static;
                        margin: 1.5rem 0;
                        width: 100%;
                    }
                }
                "#}
            </style>
        </div>
    }
}
