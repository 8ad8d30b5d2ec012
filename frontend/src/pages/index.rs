use gloo_render::request_animation_frame;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navigation::{scroll_to_section, use_active_section, Navigation};
use crate::content::site;
use crate::sections::about::AboutSection;
use crate::sections::hero::HeroSection;
use crate::sections::playground::PlaygroundSection;
use crate::sections::shop::ShopSection;
use crate::sections::work::WorkSection;

const SECTIONS: &[&str] = &["hero", "work", "playground", "about", "shop", "contact"];

/// Section id named by a `#fragment`, if any.
pub fn fragment_target(hash: &str) -> Option<&str> {
    hash.strip_prefix('#').filter(|id| !id.is_empty())
}

#[function_component(Index)]
pub fn index() -> Html {
    let content = site();
    let active = use_active_section(SECTIONS);

    // Deep links like `/#work` land after the first layout.
    use_effect_with_deps(
        |_| {
            let hash = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            let frame = fragment_target(&hash).map(|id| {
                let id = id.to_string();
                request_animation_frame(move |_| {
                    if !scroll_to_section(&id) {
                        log::debug!("No section named {}", id);
                    }
                })
            });
            move || drop(frame)
        },
        (),
    );

    html! {
        <div class="page">
            <Navigation items={content.nav.clone()} active_section={active} />
            <main>
                <HeroSection config={content.hero.clone()} />
                <WorkSection projects={content.projects.clone()} />
                <PlaygroundSection items={content.playground.clone()} />
                <AboutSection config={content.about.clone()} />
                <ShopSection items={content.shop.clone()} />
                <Footer
                    owner={content.owner.clone()}
                    contact={content.contact.clone()}
                    socials={content.socials.clone()}
                />
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_section_from_fragment() {
        assert_eq!(fragment_target("#work"), Some("work"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
    }
}
