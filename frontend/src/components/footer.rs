use chrono::Datelike;
use yew::prelude::*;

use crate::animation::reveal::{use_scroll_reveal, RevealSpec, RevealTarget, Threshold, VisualState};
use crate::content::{ContactConfig, SocialLink};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub owner: AttrValue,
    pub contact: ContactConfig,
    pub socials: Vec<SocialLink>,
}

fn scroll_to_top(_: MouseEvent) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let node = use_node_ref();
    use_scroll_reveal(
        node.clone(),
        RevealSpec {
            threshold: Threshold::parse("top 90%").unwrap_or_default(),
            from: VisualState::hidden_below(30.0),
            duration_ms: 800.0,
            stagger_ms: 100.0,
            target: RevealTarget::Children,
            ..RevealSpec::default()
        },
    );

    let year = chrono::Local::now().year();

    html! {
        <footer id="contact" class="site-footer">
            <div ref={node} class="footer-inner">
                <div class="footer-contact">
                    <h2>{ &props.contact.heading }</h2>
                    <p>{ &props.contact.blurb }</p>
                    <a href={props.contact.mailto()} class="glass-button cursor-hover">
                        {"Get in touch →"}
                    </a>
                </div>
                <div class="footer-socials">
                    { for props.socials.iter().map(|social| html! {
                        <a
                            key={social.name.clone()}
                            href={social.href.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="cursor-hover"
                        >
                            { &social.name }
                        </a>
                    }) }
                </div>
                <div class="footer-bottom">
                    <p>{ format!("© {} {}. All rights reserved.", year, props.owner) }</p>
                    <button onclick={Callback::from(scroll_to_top)} class="cursor-hover">
                        {"Back to top ↑"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #ffffff;
                    border-top: 1px solid #f3f4f6;
                    padding: 4rem 0;
                }
                .footer-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .footer-contact {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .footer-contact h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: 2.25rem;
                    font-weight: 300;
                    color: var(--heading);
                    margin-bottom: 1.5rem;
                }
                .footer-contact p {
                    font-size: 1.125rem;
                    color: var(--body);
                    margin: 0 auto 2rem;
                    max-width: 42rem;
                }
                .glass-button {
                    display: inline-flex;
                    align-items: center;
                    padding: 1rem 2rem;
                    border-radius: 999px;
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #1f2937;
                    background: rgba(255, 255, 255, 0.6);
                    border: 1px solid rgba(0, 0, 0, 0.08);
                    backdrop-filter: blur(12px);
                    text-decoration: none;
                    transition: transform 0.3s;
                }
                .glass-button:hover {
                    transform: scale(1.05);
                }
                .footer-socials {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                .footer-socials a {
                    color: var(--body);
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .footer-socials a:hover {
                    color: var(--link);
                }
                .footer-bottom {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    padding-top: 2rem;
                    border-top: 1px solid #f3f4f6;
                    font-size: 0.875rem;
                    color: var(--body);
                }
                .footer-bottom button {
                    background: none;
                    border: none;
                    color: var(--body);
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </footer>
    }
}
