//! Job persistence seam and its REST implementation.

pub mod rest;

use async_trait::async_trait;
use blendair_core::job::NewJob;

pub use rest::{RestStore, StoreError};

/// Default table that queued jobs are inserted into.
pub const DEFAULT_JOBS_TABLE: &str = "jobs";

/// Append-only destination for job records.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Insert one job row.
    async fn insert_job(&self, job: &NewJob) -> Result<(), StoreError>;

    /// Whether the store endpoint answers at all.
    async fn ping(&self) -> Result<bool, StoreError>;
}
