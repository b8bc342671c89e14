use anyhow::anyhow;
use reqwest::Url;
use serde_json::Value;

use crate::model::{Coord, JobStatus, OptimizationJob, OptimizedStop, StopFeature};

use super::error::OptimizeError;
use super::types::*;

const OPTIMIZED_TRIPS_PATH: &str = "/optimized-trips/v2";

#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
    base: Url,
    access_token: String,
}

/// Result of a single status check.
#[derive(Debug)]
pub enum PollOutcome {
    Processing,
    Complete(Vec<OptimizedStop>),
}

impl Client {
    pub fn new(base: &str, access_token: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::new();
        let base = base
            .parse()
            .map_err(|e| anyhow!("{} is not a valid url: {}", base, e))?;

        Ok(Self {
            inner: client,
            base,
            access_token: access_token.to_string(),
        })
    }

    /// Submits a stop collection for trip optimization. Returns the
    /// accepted job; no job exists on any failure path.
    pub async fn submit(&self, stops: &[StopFeature]) -> Result<OptimizationJob, OptimizeError> {
        if stops.is_empty() {
            return Err(OptimizeError::NoStops);
        }

        let body = OptimizationRequest::from_stops(stops);
        let url = self
            .base
            .join(OPTIMIZED_TRIPS_PATH)
            .map_err(|e| OptimizeError::MalformedResponse(format!("error joining url: {e}")))?;

        let response: SubmissionResponse = self
            .inner
            .post(url)
            .query(&[
                ("access_token", self.access_token.as_str()),
                ("destination", "last"),
            ])
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if response.status != "ok" {
            return Err(OptimizeError::BackendRejected {
                status: response.status,
            });
        }

        let id = response.id.ok_or_else(|| {
            OptimizeError::MalformedResponse("submission accepted without a job id".to_string())
        })?;

        log::info!(
            "optimization job {id} accepted ({} locations, {} services)",
            body.locations.len(),
            body.services.len()
        );

        Ok(OptimizationJob {
            id,
            status: JobStatus::Submitted,
            stops: stops.to_vec(),
        })
    }

    /// One status check for a submitted job. A processing answer is not
    /// an error; anything else must carry the completed route stops.
    pub async fn job_status(&self, id: &str) -> Result<PollOutcome, OptimizeError> {
        let url = self
            .base
            .join(&format!("{OPTIMIZED_TRIPS_PATH}/{id}"))
            .map_err(|e| OptimizeError::MalformedResponse(format!("error joining url: {e}")))?;

        let body: Value = self
            .inner
            .get(url)
            .query(&[("access_token", self.access_token.as_str())])
            .send()
            .await?
            .json()
            .await?;

        if body.get("status").and_then(Value::as_str) == Some("processing") {
            return Ok(PollOutcome::Processing);
        }

        let completed: CompletedResponse = serde_json::from_value(body)
            .map_err(|e| OptimizeError::MalformedResponse(format!("completed job: {e}")))?;

        let route = completed.routes.into_iter().next().ok_or_else(|| {
            OptimizeError::MalformedResponse("completed job carries no routes".to_string())
        })?;

        let stops = route
            .stops
            .into_iter()
            .map(|stop| OptimizedStop {
                label: stop.location,
                coord: Coord::from_pair(stop.location_metadata.snapped_coordinate),
            })
            .collect();

        Ok(PollOutcome::Complete(stops))
    }
}
