use std::time::Duration;

use tokio::time::sleep;

use crate::api::directions::{Route, Router, RouterOutcome};
use crate::model::{
    JobStatus, OptimizationJob, OptimizedStop, RouteRequest, StopFeature, TravelProfile,
};

use super::client::{Client, PollOutcome};
use super::error::OptimizeError;

/// How often, and how long, to ask the backend for a job's status.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            max_attempts: 600,
        }
    }
}

/// Drives one stop collection through submission, polling and
/// translation, then hands the finalized request to the router.
/// At most one job is in flight per invocation, and no two status
/// checks for the same job ever overlap.
#[derive(Clone)]
pub struct OptimizationWorkflow<R> {
    client: Client,
    router: R,
    policy: PollPolicy,
}

/// Outcome of a full optimization run.
#[derive(Debug, Clone)]
pub struct PlannedRoute {
    pub request: RouteRequest,
    pub routes: Vec<Route>,
}

impl<R: Router> OptimizationWorkflow<R> {
    pub fn new(client: Client, router: R) -> Self {
        Self {
            client,
            router,
            policy: PollPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn submit(&self, stops: &[StopFeature]) -> Result<OptimizationJob, OptimizeError> {
        self.client.submit(stops).await
    }

    /// Polls the job at the configured interval until the backend stops
    /// reporting processing, then returns the optimized stop sequence.
    /// The attempt budget bounds the loop; dropping the returned future
    /// cancels it between attempts.
    pub async fn poll(
        &self,
        job: &mut OptimizationJob,
    ) -> Result<Vec<OptimizedStop>, OptimizeError> {
        for attempt in 0..self.policy.max_attempts {
            if attempt > 0 {
                sleep(self.policy.interval).await;
            }

            match self.client.job_status(&job.id).await {
                Ok(PollOutcome::Processing) => {
                    job.status = JobStatus::Processing;
                }
                Ok(PollOutcome::Complete(stops)) => {
                    job.status = JobStatus::Completed;
                    log::info!(
                        "optimization job {} completed after {} status checks",
                        job.id,
                        attempt + 1
                    );
                    return Ok(stops);
                }
                Err(e) => {
                    job.status = JobStatus::Failed;
                    return Err(e);
                }
            }
        }

        job.status = JobStatus::Failed;
        Err(OptimizeError::PollDeadline {
            id: job.id.clone(),
            attempts: self.policy.max_attempts,
        })
    }

    /// Order-preserving translation of an optimized stop sequence into a
    /// route request. Deterministic; an empty sequence yields an empty
    /// request the downstream router is expected to reject.
    pub fn translate(stops: &[OptimizedStop], profile: TravelProfile) -> RouteRequest {
        RouteRequest::ordered(
            stops.iter().map(|stop| stop.coord).collect(),
            stops.iter().map(|stop| stop.label.clone()).collect(),
            profile,
        )
    }

    /// submit, poll to completion, translate and request routes.
    pub async fn run(
        &self,
        stops: &[StopFeature],
        profile: TravelProfile,
    ) -> Result<PlannedRoute, OptimizeError> {
        let mut job = self.submit(stops).await?;
        let optimized = self.poll(&mut job).await?;
        let request = Self::translate(&optimized, profile);

        match self.router.request_routes(&request).await {
            RouterOutcome::Ready(routes) => Ok(PlannedRoute { request, routes }),
            RouterOutcome::Failure(reasons) => Err(OptimizeError::Downstream { reasons }),
            RouterOutcome::Canceled => Err(OptimizeError::Canceled),
        }
    }
}
