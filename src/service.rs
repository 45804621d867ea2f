//! HTTP boundary to the counting service.

use crate::config::{ServiceConfig, GET_COUNTS_PATH, SET_EXERCISE_PATH};
use crate::error::ClientError;
use crate::mode::ExerciseMode;
use crate::snapshot::CountSnapshot;
use async_trait::async_trait;
use log::debug;
use serde::Serialize;

/// Body of `POST /set_exercise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetExerciseRequest {
    pub exercise_mode: u8,
}

impl From<ExerciseMode> for SetExerciseRequest {
    fn from(mode: ExerciseMode) -> Self {
        Self {
            exercise_mode: mode.id(),
        }
    }
}

/// Operations the client needs from the counting service.
///
/// `?Send` because everything runs on the browser's single event loop.
#[async_trait(?Send)]
pub trait CountService {
    /// Ask the service to track `mode`. Any 2xx is success; the body is ignored.
    async fn set_exercise(&self, mode: ExerciseMode) -> Result<(), ClientError>;

    /// Fetch the current counts for every channel.
    async fn get_counts(&self) -> Result<CountSnapshot, ClientError>;
}

/// `CountService` over HTTP. On wasm32 reqwest goes through `fetch`.
#[derive(Debug, Clone)]
pub struct HttpCountService {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl HttpCountService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

fn check_status(status: reqwest::StatusCode) -> Result<(), ClientError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ClientError::Service {
            status: status.as_u16(),
        })
    }
}

#[async_trait(?Send)]
impl CountService for HttpCountService {
    async fn set_exercise(&self, mode: ExerciseMode) -> Result<(), ClientError> {
        let url = self.config.url(SET_EXERCISE_PATH);
        debug!("POST {} mode={}", url, mode);
        let response = self
            .client
            .post(url)
            .json(&SetExerciseRequest::from(mode))
            .send()
            .await?;
        check_status(response.status())
    }

    async fn get_counts(&self) -> Result<CountSnapshot, ClientError> {
        let response = self
            .client
            .get(self.config.url(GET_COUNTS_PATH))
            .send()
            .await?;
        check_status(response.status())?;
        // Read as text so a bad body surfaces as Decode rather than Transport.
        let body = response.text().await?;
        CountSnapshot::from_json(&body)
    }
}
