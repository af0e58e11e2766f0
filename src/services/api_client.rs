use crate::error::{Error, Result};
use reqwest::{Client, Method, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Error body shapes the backend is known to send on non-2xx responses.
/// Fields are read loosely: a `status` of `"error"` must not hide `message`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorBody {
    #[serde(default)]
    status: JsonValue,
    #[serde(default)]
    status_code: JsonValue,
    #[serde(default)]
    message: JsonValue,
}

impl ApiErrorBody {
    fn status(&self) -> Option<u16> {
        [&self.status, &self.status_code]
            .into_iter()
            .find_map(|v| v.as_u64().and_then(|n| u16::try_from(n).ok()))
    }

    fn into_message(self) -> Option<String> {
        let text = match self.message {
            JsonValue::String(s) => s,
            JsonValue::Array(parts) => parts
                .iter()
                .filter_map(JsonValue::as_str)
                .collect::<Vec<_>>()
                .join("; "),
            _ => return None,
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Shared request function for every resource service.
///
/// One attempt per call: no retries, no timeout. A non-2xx response becomes
/// [`Error::Api`] carrying the status and the server's message.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);

        let mut builder = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("Request {} {} failed: {}", method, url, e);
            Error::Reqwest(e)
        })?;

        if !response.status().is_success() {
            let err = error_from_response(response).await;
            tracing::warn!("Request {} {} rejected: {}", method, url, err);
            return Err(err);
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            // Some creation endpoints answer 201 with no body.
            return Ok(serde_json::from_slice(b"null")?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

async fn error_from_response(response: Response) -> Error {
    let http_status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    api_error(http_status, &text)
}

/// Status comes from the body's `status`/`statusCode` when present, else the
/// HTTP status line.
pub(crate) fn api_error(http_status: u16, body: &str) -> Error {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    Error::Api {
        status: parsed.status().unwrap_or(http_status),
        message: parsed.into_message(),
    }
}
