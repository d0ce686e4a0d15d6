use axum::body::{Body, to_bytes};
use http::{Request, Response};
use tower::ServiceExt;

use server::{AppState, StartTime};

pub mod macros;

pub struct TestClient {
    state: AppState,
}

impl TestClient {
    /// Anchors the start time at "now". Tests that care about uptime run on
    /// a paused clock and move it forward with `tokio::time::advance`.
    pub fn new() -> Self {
        Self {
            state: AppState {
                started_at: StartTime::now(),
            },
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Asserter {
        let response = server::server(self.state)
            .oneshot(request)
            .await
            .unwrap(/* Infallible */);
        Asserter::from(response)
    }
}

pub struct Asserter {
    response: Response<Body>,
}

impl Asserter {
    pub fn status(self, expected: u16) -> Self {
        assert_eq!(
            self.response.status().as_u16(),
            expected,
            "expected status {}, got {}",
            expected,
            self.response.status()
        );
        self
    }

    pub fn header(self, name: &str, f: impl FnOnce(&str)) -> Self {
        let value = self
            .response
            .headers()
            .get(name)
            .unwrap_or_else(|| panic!("header `{name}` not present"))
            .to_str()
            .expect("header value is not valid utf-8")
            .to_owned();
        f(&value);
        self
    }

    pub async fn json_body<T>(self, f: impl FnOnce(T))
    where
        T: serde::de::DeserializeOwned,
    {
        f(self.into_deserialized_json_body::<T>().await)
    }

    pub async fn into_deserialized_json_body<T>(self) -> T
    where
        T: serde::de::DeserializeOwned,
    {
        let body_bytes = to_bytes(self.response.into_body(), usize::MAX)
            .await
            .expect("unable to read response body");

        serde_json::from_slice::<T>(&body_bytes).expect("unable to deserialize response body")
    }

    pub async fn into_text_body(self) -> String {
        let body_bytes = to_bytes(self.response.into_body(), usize::MAX)
            .await
            .expect("unable to read response body");

        String::from_utf8(body_bytes.to_vec()).expect("response body is not valid utf-8")
    }
}

impl From<Response<Body>> for Asserter {
    fn from(response: Response<Body>) -> Self {
        Self { response }
    }
}
