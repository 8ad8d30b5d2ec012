use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    ""  // Served by trunk from the frontend directory
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    ""  // Production assets live next to index.html
}

pub fn asset(path: &str) -> String {
    format!("{}{}", get_asset_base(), path)
}

/// How long the liquid loader stays up when entering a project page.
pub const ROUTE_LOADER_MS: u32 = 1500;
/// Fade-out tail of the loader after it is dismissed.
pub const ROUTE_LOADER_FADE_MS: u32 = 500;
/// Scroll distance after which the top navigation gets its frosted background.
pub const NAV_SCROLLED_AFTER_PX: f64 = 50.0;
/// Marker line used to decide which section is currently under the navigation.
pub const SECTION_MARKER_PX: f64 = 100.0;
