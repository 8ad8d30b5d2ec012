use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{ROUTE_LOADER_FADE_MS, ROUTE_LOADER_MS};

/// The loader only plays when entering the project pages from elsewhere.
pub fn should_show_loader(previous_path: &str, next_path: &str) -> bool {
    next_path.starts_with("/project/") && !previous_path.starts_with("/project/")
}

/// Loader visibility across navigations. Only the timeout lowers it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoaderCycle {
    pub loading: bool,
}

impl LoaderCycle {
    /// Returns true when a fresh timer should be started.
    pub fn navigate(&mut self, previous_path: &str, next_path: &str) -> bool {
        if should_show_loader(previous_path, next_path) {
            self.loading = true;
            true
        } else {
            false
        }
    }

    pub fn timed_out(&mut self) {
        self.loading = false;
    }
}

#[derive(Properties, PartialEq)]
pub struct LiquidLoaderProps {
    pub loading: bool,
}

/// Full-screen fill bar. Stays mounted for a short fade after `loading` drops.
#[function_component(LiquidLoader)]
pub fn liquid_loader(props: &LiquidLoaderProps) -> Html {
    let visible = use_state(|| props.loading);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |loading| {
                let mut fade = None;
                if *loading {
                    visible.set(true);
                } else {
                    fade = Some(Timeout::new(ROUTE_LOADER_FADE_MS, move || visible.set(false)));
                }
                move || drop(fade)
            },
            props.loading,
        );
    }

    if !*visible {
        return html! {};
    }

    html! {
        <div class={classes!("liquid-loader", (!props.loading).then(|| "leaving"))}>
            <div class="loader-track">
                <div class="liquid-fill"></div>
            </div>
            <style>
                {r#"
                .liquid-loader {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #ffffff;
                    z-index: 9000;
                    transition: opacity 0.5s ease;
                }
                .liquid-loader.leaving {
                    opacity: 0;
                }
                .loader-track {
                    width: 200px;
                    height: 8px;
                    border-radius: 999px;
                    background: #f1f1f1;
                    overflow: hidden;
                }
                .liquid-fill {
                    height: 100%;
                    width: 0;
                    border-radius: 999px;
                    background: linear-gradient(90deg, #dca8ff, #a8ffdc);
                    animation: liquidFill 1.5s cubic-bezier(0.65, 0, 0.35, 1) forwards;
                }
                @keyframes liquidFill {
                    from { width: 0; }
                    to { width: 100%; }
                }
                "#}
            </style>
        </div>
    }
}

/// Watches route changes and raises the loader for [`ROUTE_LOADER_MS`].
#[function_component(RouteLoader)]
pub fn route_loader() -> Html {
    let location = use_location();
    let path = location.map(|l| l.path().to_string()).unwrap_or_default();
    let previous = use_mut_ref(|| path.clone());
    let cycle = use_mut_ref(LoaderCycle::default);
    // Outlives path changes; replaced only when a new cycle starts.
    let timer = use_mut_ref(|| None::<Timeout>);
    let loading = use_state_eq(|| false);

    {
        let loading = loading.clone();
        let timer = timer.clone();
        use_effect_with_deps(
            move |path: &String| {
                let start = cycle.borrow_mut().navigate(&previous.borrow(), path);
                *previous.borrow_mut() = path.clone();
                loading.set(cycle.borrow().loading);
                if start {
                    log::debug!("Entering {}, showing loader", path);
                    let cycle = cycle.clone();
                    *timer.borrow_mut() = Some(Timeout::new(ROUTE_LOADER_MS, move || {
                        cycle.borrow_mut().timed_out();
                        loading.set(cycle.borrow().loading);
                    }));
                }
                || ()
            },
            path,
        );
    }

    use_effect_with_deps(
        move |_| {
            move || {
                timer.borrow_mut().take();
            }
        },
        (),
    );

    html! { <LiquidLoader loading={*loading} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_when_entering_a_project() {
        assert!(should_show_loader("/", "/project/quillbot"));
        assert!(should_show_loader("/logos-case-studies", "/project/figma-education"));
    }

    #[test]
    fn skips_between_projects_and_elsewhere() {
        assert!(!should_show_loader("/project/quillbot", "/project/coffee-shop-menu"));
        assert!(!should_show_loader("/project/quillbot", "/"));
        assert!(!should_show_loader("/", "/logos-case-studies"));
    }

    #[test]
    fn leaving_a_project_before_timeout_keeps_the_timer() {
        let mut cycle = LoaderCycle::default();
        assert!(cycle.navigate("/", "/project/quillbot"));
        assert!(cycle.loading);

        // Back home inside the loader window: no new timer, nothing to cancel.
        assert!(!cycle.navigate("/project/quillbot", "/"));
        assert!(cycle.loading);

        cycle.timed_out();
        assert!(!cycle.loading);
    }

    #[test]
    fn reentering_restarts_the_cycle() {
        let mut cycle = LoaderCycle::default();
        assert!(cycle.navigate("/", "/project/quillbot"));
        assert!(!cycle.navigate("/project/quillbot", "/"));
        assert!(cycle.navigate("/", "/project/figma-education"));
        cycle.timed_out();
        assert_eq!(cycle, LoaderCycle::default());
    }
}
