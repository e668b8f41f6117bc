//! In-memory port implementations for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::context::ServiceContext;
use crate::error::PlantError;
use crate::ports::content_generator::GenerateFuture;
use crate::ports::credentials::CredentialFuture;
use crate::ports::geocoder::GeocodeFuture;
use crate::ports::image_search::SearchFuture;
use crate::ports::weather::WeatherFuture;
use crate::ports::{
    ApiKeyBundle, ContentGenerator, Coordinates, CredentialSource, GenerationRequest,
    GenerationResponse, Geocoder, ImageSearch, PhotoQuery, Place, WeatherProvider, WeatherQuery,
    WeatherReport,
};

/// Counts fetches and hands out fixed keys, or fails with the given status.
///
/// Clones share their call counter.
#[derive(Clone)]
pub struct FakeCredentials {
    calls: Arc<AtomicUsize>,
    fail_status: Option<u16>,
}

impl FakeCredentials {
    /// Hands out keys.
    pub fn ok() -> Self {
        Self { calls: Arc::default(), fail_status: None }
    }

    /// Fails every fetch with `status`.
    pub fn failing(status: u16) -> Self {
        Self { calls: Arc::default(), fail_status: Some(status) }
    }

    /// Fetches so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CredentialSource for FakeCredentials {
    fn fetch(&self) -> CredentialFuture<'_> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = match self.fail_status {
            Some(status) => Err(PlantError::CredentialFetch { status }),
            None => Ok(ApiKeyBundle { gemini: "gemini-key".into(), pexels: "pexels-key".into() }),
        };
        Box::pin(async move { result })
    }
}

/// Replies with fixed text (or an HTTP failure) and keeps every request with its key.
#[derive(Clone)]
pub struct FakeGenerator {
    reply: Result<String, u16>,
    requests: Arc<Mutex<Vec<(String, GenerationRequest)>>>,
}

impl FakeGenerator {
    /// Answers every request with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self { reply: Ok(text.into()), requests: Arc::default() }
    }

    /// Fails every request with `status`.
    pub fn failing(status: u16) -> Self {
        Self { reply: Err(status), requests: Arc::default() }
    }

    /// Requests so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request with the key it was sent with.
    pub fn requests(&self) -> Vec<(String, GenerationRequest)> {
        self.requests.lock().unwrap().clone()
    }
}

impl ContentGenerator for FakeGenerator {
    fn generate(&self, api_key: &str, request: &GenerationRequest) -> GenerateFuture<'_> {
        self.requests.lock().unwrap().push((api_key.to_string(), request.clone()));
        let result = match &self.reply {
            Ok(text) => Ok(GenerationResponse { text: text.clone() }),
            Err(status) => {
                Err(PlantError::AiRequest { status: *status, message: "upstream".into() })
            }
        };
        Box::pin(async move { result })
    }
}

#[derive(Clone, Copy)]
enum SearchBehaviour {
    Returning(usize),
    Echoing,
    Failing,
}

/// Image search that records queries.
#[derive(Clone)]
pub struct FakeImageSearch {
    behaviour: SearchBehaviour,
    queries: Arc<Mutex<Vec<PhotoQuery>>>,
}

impl FakeImageSearch {
    /// Returns `count` distinct URLs per query.
    pub fn returning(count: usize) -> Self {
        Self { behaviour: SearchBehaviour::Returning(count), queries: Arc::default() }
    }

    /// Returns one URL derived from the query text.
    pub fn echoing() -> Self {
        Self { behaviour: SearchBehaviour::Echoing, queries: Arc::default() }
    }

    /// Fails every query.
    pub fn failing() -> Self {
        Self { behaviour: SearchBehaviour::Failing, queries: Arc::default() }
    }

    /// Every query seen, in arrival order.
    pub fn queries(&self) -> Vec<PhotoQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl ImageSearch for FakeImageSearch {
    fn search(&self, _api_key: &str, query: &PhotoQuery) -> SearchFuture<'_> {
        self.queries.lock().unwrap().push(query.clone());
        let result = match self.behaviour {
            SearchBehaviour::Returning(count) => {
                Ok((0..count).map(|i| format!("https://photos.test/{i}.jpg")).collect())
            }
            SearchBehaviour::Echoing => Ok(vec![format!("https://photos.test/{}", query.query)]),
            SearchBehaviour::Failing => {
                Err(PlantError::Api { status: 500, message: "search unavailable".into() })
            }
        };
        Box::pin(async move { result })
    }
}

/// Fixed weather report.
pub struct FakeWeather;

impl WeatherProvider for FakeWeather {
    fn current(&self, query: &WeatherQuery) -> WeatherFuture<'_> {
        let report = WeatherReport {
            temp: 22,
            location: format!("{:.1},{:.1}", query.lat, query.lon),
            icon: Some("01d".into()),
            description: Some("clear sky".into()),
            humidity: 45,
            wind_speed: 2.0,
        };
        Box::pin(async move { Ok(report) })
    }
}

/// Fixed place.
pub struct FakeGeocoder;

impl Geocoder for FakeGeocoder {
    fn reverse(&self, _coordinates: &Coordinates) -> GeocodeFuture<'_> {
        Box::pin(async move {
            Ok(Place { city: "Tashkent".into(), country: "Uzbekistan".into(), country_code: "UZ".into() })
        })
    }
}

/// Context whose network ports are all fakes.
pub fn context(
    credentials: FakeCredentials,
    generator: FakeGenerator,
    image_search: FakeImageSearch,
) -> ServiceContext {
    ServiceContext {
        credentials: Box::new(credentials),
        generator: Box::new(generator),
        image_search: Box::new(image_search),
        weather: Box::new(FakeWeather),
        geocoder: Box::new(FakeGeocoder),
    }
}
