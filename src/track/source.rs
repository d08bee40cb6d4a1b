use std::future::Future;

use reqwest::Client;

use crate::track::error::SourceError;
use crate::track::session::TaskId;
use crate::track::status::TrackingStatus;

/// Where tracking-status payloads come from.
///
/// The production source is [`HttpStatusSource`]; tests drive the
/// poller with scripted in-memory sources. Failures are transient by
/// contract: the poller logs them and retries on the next tick.
pub trait StatusSource {
    fn fetch(
        &self,
        task: TaskId,
    ) -> impl Future<Output = Result<TrackingStatus, SourceError>> + Send;
}

/// Tracking-status source backed by the marketplace REST API.
///
/// Issues `GET {base}/api/tasks/{id}/tracking-status` with the caller's
/// bearer token attached.
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpStatusSource {
    pub fn new(base_url: &str, token: &str) -> Self {
        HttpStatusSource {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn endpoint(&self, task: TaskId) -> String {
        format!("{}/api/tasks/{}/tracking-status", self.base_url, task)
    }
}

impl StatusSource for HttpStatusSource {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err(Debug)))]
    async fn fetch(&self, task: TaskId) -> Result<TrackingStatus, SourceError> {
        let response = self
            .client
            .get(self.endpoint(task))
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        response
            .json::<TrackingStatus>()
            .await
            .map_err(|err| SourceError::Decode(err.to_string()))
    }
}
