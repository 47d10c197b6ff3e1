use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::services::carousel::{Carousel, CarouselAction};
use crate::services::clock::{read_clock, SystemClock};
use crate::services::jitter::{ActiveCrews, MathRandom, Step};
use crate::services::theme::{BrowserThemeService, Theme};
use crate::services::weather::{fetch_weather, BrowserLocator, HttpForecast, WeatherSnapshot};

/// Formatted local time, refreshed every second. `None` until the first tick.
#[hook]
pub fn use_clock() -> Option<String> {
    let now = use_state(|| None::<String>);

    {
        let now = now.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::CLOCK_TICK_MS, move || {
                    now.set(Some(read_clock(&SystemClock)));
                });
                move || drop(interval)
            },
            (),
        );
    }

    (*now).clone()
}

#[hook]
pub fn use_active_crews() -> u32 {
    let crews = use_reducer(ActiveCrews::default);

    {
        let crews = crews.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::JITTER_TICK_MS, move || {
                    crews.dispatch(Step::draw(&MathRandom));
                });
                move || drop(interval)
            },
            (),
        );
    }

    crews.count()
}

/// Auto-advancing carousel over `len` slides. Selecting a slide by hand
/// leaves the advance timer running on its own cadence.
#[hook]
pub fn use_carousel(len: usize) -> (Carousel, Callback<usize>) {
    let carousel = use_reducer(move || Carousel::new(len));

    {
        let carousel = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::CAROUSEL_TICK_MS, move || {
                    carousel.dispatch(CarouselAction::Advance);
                });
                move || drop(interval)
            },
            len,
        );
    }

    let select = {
        let carousel = carousel.dispatcher();
        Callback::from(move |index: usize| carousel.dispatch(CarouselAction::Select(index)))
    };

    (*carousel, select)
}

#[hook]
pub fn use_weather() -> WeatherSnapshot {
    let weather = use_state(WeatherSnapshot::default);

    {
        let weather = weather.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    weather.set(fetch_weather(&BrowserLocator, &HttpForecast).await);
                });
                || ()
            },
            (),
        );
    }

    *weather
}

/// Current theme as applied to the document, plus a callback that flips it.
#[hook]
pub fn use_theme() -> (Theme, Callback<MouseEvent>) {
    let theme = use_state(|| BrowserThemeService::browser().current());

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            theme.set(BrowserThemeService::browser().toggle());
        })
    };

    (*theme, toggle)
}
