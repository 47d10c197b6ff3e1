use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{self, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Position, PositionError, PositionOptions};

use crate::config;

pub const DESCRIPTION_PLACEHOLDER: &str = "상쾌한 날씨";
pub const UNKNOWN_CONDITION: &str = "좋은 날씨";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("geolocation is not available")]
    GeolocationUnavailable,
    #[error("geolocation failed: {0}")]
    Geolocation(String),
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("forecast service answered {0}")]
    Status(u16),
    #[error("malformed forecast: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("forecast request timed out")]
    Timeout,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentConditions>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
pub struct CurrentConditions {
    pub temperature_2m: Option<f64>,
    pub weather_code: Option<i64>,
}

/// What the hero chip shows. Both fields stay empty until a lookup succeeds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: Option<f64>,
    pub description: Option<&'static str>,
}

impl From<CurrentConditions> for WeatherSnapshot {
    fn from(current: CurrentConditions) -> Self {
        WeatherSnapshot {
            temperature: current.temperature_2m,
            description: describe(current.weather_code),
        }
    }
}

impl WeatherSnapshot {
    pub fn temperature_label(&self) -> String {
        match self.temperature {
            // half-up, like the browser's Math.round
            Some(celsius) => format!("{}°C", (celsius + 0.5).floor() as i64),
            None => "--".to_string(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} · {}",
            self.temperature_label(),
            self.description.unwrap_or(DESCRIPTION_PLACEHOLDER)
        )
    }
}

/// Korean description for a WMO weather code.
pub fn describe(code: Option<i64>) -> Option<&'static str> {
    let description = match code? {
        0 => "맑음",
        1 => "대체로 맑음",
        2 => "부분 흐림",
        3 => "흐림",
        45 => "안개",
        48 => "얼어붙는 안개",
        51 => "이슬비",
        53 => "약한 비",
        55 => "강한 비",
        61 => "가벼운 비",
        63 => "비",
        65 => "강한 비",
        71 => "가벼운 눈",
        73 => "눈",
        75 => "강한 눈",
        80 => "소나기",
        95 => "천둥번개",
        _ => UNKNOWN_CONDITION,
    };
    Some(description)
}

pub fn forecast_url(at: Coordinates) -> String {
    format!(
        "{}?latitude={}&longitude={}&current=temperature_2m,weather_code",
        config::WEATHER_API_URL,
        at.latitude,
        at.longitude
    )
}

pub fn parse_forecast(body: &str) -> Result<CurrentConditions, WeatherError> {
    let forecast: ForecastResponse = serde_json::from_str(body)?;
    Ok(forecast.current.unwrap_or_default())
}

#[allow(async_fn_in_trait)]
pub trait Locator {
    async fn locate(&self) -> Result<Coordinates, WeatherError>;
}

#[allow(async_fn_in_trait)]
pub trait ForecastClient {
    async fn current(&self, at: Coordinates) -> Result<CurrentConditions, WeatherError>;
}

/// Looks up the weather where the visitor is, or at the fallback location
/// if that fails. The fallback is tried exactly once.
pub async fn fetch_weather(locator: &impl Locator, client: &impl ForecastClient) -> WeatherSnapshot {
    let located = match locator.locate().await {
        Ok(here) => client.current(here).await,
        Err(e) => Err(e),
    };

    let current = match located {
        Ok(current) => Ok(current),
        Err(e) => {
            log::debug!("local weather unavailable ({}), trying fallback location", e);
            client.current(config::FALLBACK_LOCATION).await
        }
    };

    match current {
        Ok(current) => {
            log::debug!("weather resolved: {:?}", current);
            WeatherSnapshot::from(current)
        }
        Err(e) => {
            log::warn!("weather lookup failed: {}", e);
            WeatherSnapshot::default()
        }
    }
}

pub struct BrowserLocator;

impl Locator for BrowserLocator {
    async fn locate(&self) -> Result<Coordinates, WeatherError> {
        let geolocation = window()
            .ok_or(WeatherError::GeolocationUnavailable)?
            .navigator()
            .geolocation()
            .map_err(|_| WeatherError::GeolocationUnavailable)?;

        let (tx, rx) = oneshot::channel();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let on_position = {
            let tx = tx.clone();
            Closure::wrap(Box::new(move |position: Position| {
                let coords = position.coords();
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(Ok(Coordinates {
                        latitude: coords.latitude(),
                        longitude: coords.longitude(),
                    }));
                }
            }) as Box<dyn FnMut(Position)>)
        };
        let on_error = Closure::wrap(Box::new(move |error: PositionError| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(WeatherError::Geolocation(error.message())));
            }
        }) as Box<dyn FnMut(PositionError)>);

        let mut options = PositionOptions::new();
        options
            .enable_high_accuracy(false)
            .maximum_age(config::GEOLOCATION_MAX_AGE_MS)
            .timeout(config::GEOLOCATION_TIMEOUT_MS);

        geolocation
            .get_current_position_with_error_callback_and_options(
                on_position.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
                &options,
            )
            .map_err(|e| WeatherError::Geolocation(format!("{:?}", e)))?;

        // Both callbacks must outlive the browser's answer.
        let answer = rx.await;
        drop(on_position);
        drop(on_error);
        answer.unwrap_or_else(|_| Err(WeatherError::Geolocation("no answer".to_string())))
    }
}

pub struct HttpForecast;

impl ForecastClient for HttpForecast {
    async fn current(&self, at: Coordinates) -> Result<CurrentConditions, WeatherError> {
        let url = forecast_url(at);
        let request = async move {
            let response = Request::get(&url).send().await?;
            if !response.ok() {
                return Err(WeatherError::Status(response.status()));
            }
            let body = response.text().await?;
            parse_forecast(&body)
        };
        let timeout = TimeoutFuture::new(config::WEATHER_REQUEST_TIMEOUT_MS);
        pin_mut!(request, timeout);

        match future::select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(WeatherError::Timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::collections::VecDeque;

    const HERE: Coordinates = Coordinates {
        latitude: 35.1796,
        longitude: 129.0756,
    };

    struct Denied;

    impl Locator for Denied {
        async fn locate(&self) -> Result<Coordinates, WeatherError> {
            Err(WeatherError::Geolocation("User denied Geolocation".to_string()))
        }
    }

    struct At(Coordinates);

    impl Locator for At {
        async fn locate(&self) -> Result<Coordinates, WeatherError> {
            Ok(self.0)
        }
    }

    /// Answers from a queue and remembers where it was asked about.
    #[derive(Default)]
    struct Recording {
        answers: RefCell<VecDeque<Result<CurrentConditions, WeatherError>>>,
        calls: RefCell<Vec<Coordinates>>,
    }

    impl Recording {
        fn answering(answers: Vec<Result<CurrentConditions, WeatherError>>) -> Self {
            Self {
                answers: RefCell::new(answers.into()),
                ..Self::default()
            }
        }
    }

    impl ForecastClient for Recording {
        async fn current(&self, at: Coordinates) -> Result<CurrentConditions, WeatherError> {
            self.calls.borrow_mut().push(at);
            self.answers
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(WeatherError::Timeout))
        }
    }

    fn sunny(celsius: f64) -> CurrentConditions {
        CurrentConditions {
            temperature_2m: Some(celsius),
            weather_code: Some(0),
        }
    }

    #[test]
    fn denial_queries_fallback_exactly_once() {
        let client = Recording::answering(vec![Ok(sunny(21.6))]);
        let snapshot = block_on(fetch_weather(&Denied, &client));

        assert_eq!(*client.calls.borrow(), vec![config::FALLBACK_LOCATION]);
        assert_eq!(snapshot.summary(), "22°C · 맑음");
    }

    #[test]
    fn located_lookup_uses_visitor_position() {
        let client = Recording::answering(vec![Ok(sunny(18.0))]);
        let snapshot = block_on(fetch_weather(&At(HERE), &client));

        assert_eq!(*client.calls.borrow(), vec![HERE]);
        assert_eq!(snapshot.temperature, Some(18.0));
    }

    #[test]
    fn failed_located_lookup_retries_at_fallback() {
        let client = Recording::answering(vec![Err(WeatherError::Status(502)), Ok(sunny(10.0))]);
        let snapshot = block_on(fetch_weather(&At(HERE), &client));

        assert_eq!(*client.calls.borrow(), vec![HERE, config::FALLBACK_LOCATION]);
        assert_eq!(snapshot.description, Some("맑음"));
    }

    #[test]
    fn gives_up_after_fallback_fails() {
        let client = Recording::answering(vec![Err(WeatherError::Timeout), Err(WeatherError::Timeout)]);
        let snapshot = block_on(fetch_weather(&At(HERE), &client));

        assert_eq!(client.calls.borrow().len(), 2);
        assert_eq!(snapshot, WeatherSnapshot::default());
        assert_eq!(snapshot.summary(), "-- · 상쾌한 날씨");
    }

    #[test]
    fn unmapped_code_gets_generic_description() {
        assert_eq!(describe(Some(999)), Some(UNKNOWN_CONDITION));
        assert_eq!(describe(Some(95)), Some("천둥번개"));
        assert_eq!(describe(None), None);
    }

    #[test]
    fn parses_open_meteo_current_block() {
        let body = r#"{
            "latitude": 37.55,
            "longitude": 127.0,
            "current_units": {"temperature_2m": "°C", "weather_code": "wmo code"},
            "current": {"time": "2025-08-12T19:30", "interval": 900, "temperature_2m": 27.4, "weather_code": 3}
        }"#;
        let current = parse_forecast(body).unwrap();
        assert_eq!(current.temperature_2m, Some(27.4));
        assert_eq!(WeatherSnapshot::from(current).summary(), "27°C · 흐림");
    }

    #[test]
    fn missing_current_block_is_empty_not_an_error() {
        let current = parse_forecast(r#"{"latitude": 1.0}"#).unwrap();
        assert_eq!(current, CurrentConditions::default());
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        assert!(matches!(parse_forecast("<html>"), Err(WeatherError::Parse(_))));
    }

    #[test]
    fn fallback_url() {
        assert_eq!(
            forecast_url(config::FALLBACK_LOCATION),
            "https://api.open-meteo.com/v1/forecast?latitude=37.5665&longitude=126.978&current=temperature_2m,weather_code"
        );
    }

    #[test]
    fn negative_temperatures_round_half_up() {
        let snapshot = WeatherSnapshot {
            temperature: Some(-2.5),
            description: None,
        };
        assert_eq!(snapshot.temperature_label(), "-2°C");
    }
}
