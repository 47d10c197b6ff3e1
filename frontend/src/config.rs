use log::Level;

use crate::services::weather::Coordinates;

pub const WEATHER_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Seoul city hall. Used when the browser can't or won't give us a position.
pub const FALLBACK_LOCATION: Coordinates = Coordinates {
    latitude: 37.5665,
    longitude: 126.9780,
};

pub const GEOLOCATION_TIMEOUT_MS: u32 = 3_000;
pub const GEOLOCATION_MAX_AGE_MS: u32 = 300_000;
pub const WEATHER_REQUEST_TIMEOUT_MS: u32 = 5_000;

pub const CLOCK_TICK_MS: u32 = 1_000;
pub const JITTER_TICK_MS: u32 = 1_500;
pub const CAROUSEL_TICK_MS: u32 = 4_000;

/// External signup page, baked in at build time.
/// Empty or unset means the placeholder form is shown instead.
pub fn signup_url() -> Option<&'static str> {
    option_env!("RUNCREW_SIGNUP_URL")
        .map(str::trim)
        .filter(|url| !url.is_empty())
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
