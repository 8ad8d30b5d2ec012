use yew::prelude::*;

use crate::animation::reveal::{use_scroll_reveal, RevealSpec, RevealTarget, VisualState};
use crate::content::ShopItem;

#[derive(Properties, PartialEq)]
pub struct ShopSectionProps {
    pub items: Vec<ShopItem>,
}

#[function_component(ShopSection)]
pub fn shop_section(props: &ShopSectionProps) -> Html {
    let cards = use_node_ref();
    use_scroll_reveal(
        cards.clone(),
        RevealSpec {
            from: VisualState {
                rotation: -5.0,
                ..VisualState::hidden_below(60.0)
            },
            stagger_ms: 200.0,
            target: RevealTarget::Children,
            ..RevealSpec::default()
        },
    );

    html! {
        <section id="shop" class="shop-section">
            <div class="section-intro">
                <h2>{"Shop"}</h2>
                <p>{"Curated collection of design resources, art prints, and educational content."}</p>
            </div>
            <div ref={cards} class="shop-grid">
                { for props.items.iter().map(|item| html! {
                    <div
                        key={item.title.clone()}
                        class="shop-card cursor-hover"
                        style={format!("background-color: {};", item.color)}
                    >
                        <h3>{ &item.title }</h3>
                        <p>{ &item.description }</p>
                        <div class="shop-card-footer">
                            <span class="shop-price">{ &item.price }</span>
                            <button class="shop-view">{"View"}</button>
                        </div>
                        <div class="shop-glow"></div>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .shop-section {
                    padding: 6rem 1.5rem;
                    background: #f9fafb;
                }
                .shop-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 2rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .shop-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    padding: 2rem;
                }
                .shop-card h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: var(--heading);
                    margin-bottom: 0.75rem;
                    letter-spacing: -0.06em;
                }
                .shop-card p {
                    color: var(--body);
                    margin-bottom: 1.5rem;
                    line-height: 1.6;
                }
                .shop-card-footer {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .shop-price {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: var(--heading);
                }
                .shop-view {
                    background: rgba(255, 255, 255, 0.8);
                    border: none;
                    border-radius: 999px;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .shop-glow {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 8rem;
                    height: 8rem;
                    border-radius: 999px;
                    background: linear-gradient(135deg, rgba(255, 255, 255, 0.3), transparent);
                    transform: translate(4rem, -4rem);
                    transition: transform 0.5s;
                    pointer-events: none;
                }
                .shop-card:hover .shop-glow {
                    transform: translate(4rem, -4rem) scale(1.5);
                }
                "#}
            </style>
        </section>
    }
}
