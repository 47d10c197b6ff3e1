use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const FRAME_MS: u32 = 16;

/// Value shown `elapsed_ms` into a linear count from zero to `to`.
pub fn count_at(elapsed_ms: f64, duration_ms: u32, to: u32) -> u32 {
    if duration_ms == 0 {
        return to;
    }
    let progress = (elapsed_ms / f64::from(duration_ms)).clamp(0.0, 1.0);
    (progress * f64::from(to)).floor() as u32
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub to: u32,
    #[prop_or(String::from("+"))]
    pub suffix: String,
    #[prop_or(1600)]
    pub duration_ms: u32,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let value = use_state(|| 0u32);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |&(to, duration_ms)| {
                let cancelled = Rc::new(Cell::new(false));
                let stop = cancelled.clone();
                let start = js_sys::Date::now();

                spawn_local(async move {
                    loop {
                        TimeoutFuture::new(FRAME_MS).await;
                        if cancelled.get() {
                            break;
                        }
                        let current = count_at(js_sys::Date::now() - start, duration_ms, to);
                        value.set(current);
                        if current >= to {
                            break;
                        }
                    }
                });

                move || stop.set(true)
            },
            (props.to, props.duration_ms),
        );
    }

    html! {
        <span>{ *value }{ props.suffix.clone() }</span>
    }
}
