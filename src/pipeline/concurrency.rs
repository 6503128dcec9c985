// src/pipeline/concurrency.rs
//!
//! Batch builds.
//!
//! Builds share nothing mutable: each one gets its own [`BuildContext`] and
//! its own uniquely named intermediate files, so running them side by side
//! only needs the collaborators to be `Sync`.
//!
//! [`BuildContext`]: super::context::BuildContext

use super::orchestrator::Planner;
use super::report::BuildReport;
use crate::error::PipelineError;
use lootpixel_types::PlannerConfig;
use std::path::PathBuf;

/// One planner to build and where to write it.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub config: PlannerConfig,
    pub output: PathBuf,
}

impl BuildRequest {
    pub fn new(config: PlannerConfig, output: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output: output.into(),
        }
    }
}

impl Planner {
    /// Runs independent builds, one result per request in request order.
    ///
    /// A failed build does not affect the others.
    #[cfg(feature = "rayon-executor")]
    pub fn build_many(&self, requests: &[BuildRequest]) -> Vec<Result<BuildReport, PipelineError>> {
        use rayon::prelude::*;

        log::info!("[PLANNER] Running {} builds on the rayon pool", requests.len());
        requests
            .par_iter()
            .map(|req| self.build(&req.config, &req.output))
            .collect()
    }

    /// Runs independent builds, one result per request in request order.
    ///
    /// A failed build does not affect the others.
    #[cfg(not(feature = "rayon-executor"))]
    pub fn build_many(&self, requests: &[BuildRequest]) -> Vec<Result<BuildReport, PipelineError>> {
        log::info!("[PLANNER] Running {} builds sequentially", requests.len());
        requests
            .iter()
            .map(|req| self.build(&req.config, &req.output))
            .collect()
    }
}
