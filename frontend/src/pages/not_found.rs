use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location().map(|l| l.path().to_string()).unwrap_or_default();
    use_effect_with_deps(
        |path: &String| {
            log::warn!("404: no route for {}", path);
            || ()
        },
        path,
    );

    html! {
        <main class="not-found">
            <h1>{"404"}</h1>
            <p>{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="cursor-hover">
                {"Return to Home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: #f3f4f6;
                    text-align: center;
                }
                .not-found h1 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .not-found p {
                    font-size: 1.25rem;
                    color: #4b5563;
                    margin-bottom: 1rem;
                }
                .not-found a {
                    color: #3b82f6;
                    text-decoration: underline;
                }
                "#}
            </style>
        </main>
    }
}
