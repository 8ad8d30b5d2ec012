use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod tracking;
mod animation {
    pub mod easing;
    pub mod frame;
    pub mod reveal;
    pub mod sticky_stack;
    pub mod tween;
}
mod effects {
    pub mod color;
    pub mod cursor;
    pub mod hover_preview;
    pub mod magnetic;
    pub mod spark;
    pub mod sticker;
}
mod components {
    pub mod footer;
    pub mod liquid_loader;
    pub mod navigation;
    pub mod project_navbar;
    pub mod scramble_text;
    pub mod split_text;
    pub mod work_card;
}
mod sections {
    pub mod about;
    pub mod hero;
    pub mod playground;
    pub mod shop;
    pub mod work;
}
mod pages {
    pub mod index;
    pub mod logos_case_studies;
    pub mod not_found;
    pub mod project_detail;
}

use components::liquid_loader::RouteLoader;
use content::site;
use effects::color::Hsl;
use effects::cursor::CustomCursor;
use effects::spark::{ClickSpark, SparkConfig};
use pages::{
    index::Index,
    logos_case_studies::LogosCaseStudies,
    not_found::NotFound,
    project_detail::ProjectDetail,
};
use tracking::PageViewTracker;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/project/:id")]
    Project { id: String },
    #[at("/logos-case-studies")]
    LogosCaseStudies,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Index /> }
        },
        Route::Project { id } => {
            info!("Rendering Project page for {}", id);
            html! { <ProjectDetail {id} /> }
        },
        Route::LogosCaseStudies => {
            info!("Rendering Logos & Case Studies page");
            html! { <LogosCaseStudies /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

fn spark_config() -> SparkConfig {
    let base = Hsl::from_hex(&site().spark_color).unwrap_or_else(|e| {
        log::warn!("Falling back to white sparks: {}", e);
        Hsl { h: 0.0, s: 0.0, l: 100.0 }
    });
    SparkConfig::with_color(base)
}

#[function_component]
fn App() -> Html {
    let sparks = use_memo(|_| spark_config(), ());

    html! {
        <BrowserRouter>
            <PageViewTracker />
            <RouteLoader />
            <CustomCursor />
            <ClickSpark config={(*sparks).clone()}>
                <Switch<Route> render={switch} />
            </ClickSpark>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_route_resolves_to_its_entry() {
        let route = Route::recognize("/project/quillbot");
        let Some(Route::Project { id }) = route else {
            panic!("expected a project route, got {:?}", route);
        };
        assert_eq!(site().find_project(&id).map(|p| p.title.as_str()), Some("QuillBot"));
    }

    #[test]
    fn unknown_project_resolves_to_not_found_state() {
        let Some(Route::Project { id }) = Route::recognize("/project/does-not-exist") else {
            panic!("expected a project route");
        };
        assert!(site().find_project(&id).is_none());
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/nope/at/all"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/logos-case-studies"), Some(Route::LogosCaseStudies));
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }

    #[test]
    fn spark_colour_comes_from_content() {
        let config = spark_config();
        assert_eq!(config.count, 8);
        assert!(config.base.effective_saturation() > 0.0);
    }
}
