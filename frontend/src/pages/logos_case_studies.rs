use web_sys::{Document, Element};
use yew::prelude::*;

use crate::animation::reveal::{use_scroll_reveal, RevealSpec, Threshold, VisualState};
use crate::config::asset;
use crate::content::{site, CaseStudyImage};

const PAGE_TITLE: &str = "Logos & Case Studies | Portfolio";
const PAGE_DESCRIPTION: &str = "Logos & case studies: brand identity and logo design showcase.";

/// Sets the document title and the description meta tag, creating the tag when missing.
pub fn apply_page_meta(document: &Document, title: &str, description: &str) {
    document.set_title(title);
    let existing = document
        .query_selector("meta[name=\"description\"]")
        .ok()
        .flatten();
    let meta = match existing {
        Some(meta) => meta,
        None => {
            let Ok(meta) = document.create_element("meta") else {
                return;
            };
            let _ = meta.set_attribute("name", "description");
            if let Some(head) = document.head() {
                if let Err(e) = head.append_child(&meta) {
                    log::warn!("Could not add description meta tag: {:?}", e);
                }
            }
            meta
        }
    };
    let _ = meta.set_attribute("content", description);
}

#[derive(Properties, PartialEq)]
struct CaseStudyBlockProps {
    image: CaseStudyImage,
    index: usize,
}

#[function_component(CaseStudyBlock)]
fn case_study_block(props: &CaseStudyBlockProps) -> Html {
    let node = use_node_ref();
    use_scroll_reveal(
        node.clone(),
        RevealSpec {
            threshold: Threshold::parse("top 85%").unwrap_or_default(),
            from: VisualState::hidden_below(80.0),
            delay_ms: props.index as f64 * 100.0,
            ..RevealSpec::default()
        },
    );

    let src = props.image.src.clone();
    let onerror = Callback::from(move |e: Event| {
        log::error!("Image failed to load: {}", src);
        if let Some(img) = e.target_dyn_into::<Element>() {
            let _ = img.set_attribute("src", &asset("/assets/placeholder.svg"));
        }
    });

    html! {
        <div ref={node} class="case-study-image">
            <img
                src={props.image.src.clone()}
                alt={props.image.alt.clone()}
                title={props.image.title.clone()}
                loading={if props.index == 0 { "eager" } else { "lazy" }}
                {onerror}
            />
        </div>
    }
}

#[function_component(LogosCaseStudies)]
pub fn logos_case_studies() -> Html {
    use_effect_with_deps(
        |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                apply_page_meta(&document, PAGE_TITLE, PAGE_DESCRIPTION);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="case-studies">
            <h1 class="sr-only">{"Logos & Case Studies"}</h1>
            <section>
                { for site().case_studies.iter().enumerate().map(|(index, image)| html! {
                    <CaseStudyBlock key={image.src.clone()} image={image.clone()} {index} />
                }) }
            </section>
            <style>
                {r#"
                .case-studies {
                    min-height: 100vh;
                    background: #ffffff;
                }
                .case-study-image img {
                    display: block;
                    width: 100%;
                    height: auto;
                    object-fit: cover;
                }
                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                    white-space: nowrap;
                }
                "#}
            </style>
        </main>
    }
}
