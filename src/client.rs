//! HTTP access to the 1RM calculation service.
//!
//! `CalcClient` issues exactly one POST per call and turns the reply into
//! either a `SuccessData` or a `CalcError`. The actual exchange goes through
//! the `Transport` trait so the decoding rules can be exercised natively.

use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;

use crate::error::CalcError;
use crate::models::{ErrorData, SubmitData, SuccessData};

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a JSON body with `POST` and hands back whatever came back.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &SubmitData) -> Result<RawResponse, CalcError>;
}

/// `reqwest`-backed transport. On wasm32 this goes through the browser's `fetch`.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &SubmitData) -> Result<RawResponse, CalcError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

/// Decode a response: 2xx bodies are `SuccessData`, anything else is
/// `ErrorData` and only its first message is kept.
pub fn interpret_response(response: &RawResponse) -> Result<SuccessData, CalcError> {
    let status = response.status;
    let decode_err = |e: serde_json::Error| CalcError::Decode {
        status,
        reason: e.to_string(),
    };

    if (200..300).contains(&status) {
        return serde_json::from_str(&response.body).map_err(decode_err);
    }

    let data: ErrorData = serde_json::from_str(&response.body).map_err(decode_err)?;
    match data.first_message() {
        Some(msg) => Err(CalcError::Service {
            status,
            message: msg.to_string(),
        }),
        None => Err(CalcError::EmptyDetail { status }),
    }
}

/// Client bound to one endpoint.
#[derive(Clone)]
pub struct CalcClient<T: Transport> {
    transport: T,
    endpoint: String,
}

impl CalcClient<HttpTransport> {
    pub fn http(endpoint: impl Into<String>) -> Self {
        Self::new(HttpTransport::new(), endpoint)
    }
}

impl<T: Transport> CalcClient<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn calculate(&self, data: &SubmitData) -> Result<SuccessData, CalcError> {
        info!(
            "Requesting 1RM for weight={} reps={} from {}",
            data.weight, data.reps, self.endpoint
        );
        let response = self.transport.post_json(&self.endpoint, data).await?;
        debug!("Calculation service answered with status {}", response.status);

        let result = interpret_response(&response);
        match &result {
            Ok(success) => info!(
                "Received 1RM {} with {} percentage rows",
                success.one_rep_max,
                success.weights.len()
            ),
            Err(e) => warn!("Calculation failed: {}", e),
        }
        result
    }
}
