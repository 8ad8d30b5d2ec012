use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use yew::prelude::*;
use yew_router::prelude::*;

const TRACKER_GLOBAL: &str = "fbq";

/// Forwards a page view to the global pixel function. Returns false when the
/// page has no tracker loaded.
pub fn track_page_view() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let tracker = match Reflect::get(&window, &JsValue::from_str(TRACKER_GLOBAL)) {
        Ok(value) => value,
        Err(_) => return false,
    };
    let Ok(tracker) = tracker.dyn_into::<Function>() else {
        return false;
    };
    match tracker.call2(&JsValue::NULL, &JsValue::from_str("track"), &JsValue::from_str("PageView")) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Page view tracking failed: {:?}", e);
            false
        }
    }
}

/// Records a page view on every route change.
#[hook]
pub fn use_page_view() {
    let path = use_location().map(|l| l.path().to_string()).unwrap_or_default();
    use_effect_with_deps(
        move |path: &String| {
            let tracked = track_page_view();
            log::debug!("Page view {} (tracked: {})", path, tracked);
            || ()
        },
        path,
    );
}

#[function_component(PageViewTracker)]
pub fn page_view_tracker() -> Html {
    use_page_view();
    html! {}
}
