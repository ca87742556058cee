//! The in-memory school collection, loaded once per session.
//!
//! Loading never fails outright: a dataset that cannot be read or parsed
//! leaves the catalog empty with [`LoadStatus::Failed`], so callers can tell
//! "no data" apart from "no matches".

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::normalize::normalize_all;
use crate::types::{School, SchoolRaw};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    schools: Vec<School>,
    status: LoadStatus,
}

impl Default for Catalog {
    fn default() -> Self { Self::loading() }
}

impl Catalog {
    /// Placeholder held until the dataset load completes.
    pub fn loading() -> Self { Self { schools: Vec::new(), status: LoadStatus::Loading } }

    pub fn from_raw(raws: &[SchoolRaw]) -> Self {
        Self { schools: normalize_all(raws), status: LoadStatus::Ready }
    }

    /// Builds a ready catalog from records that are already canonical.
    pub fn from_schools(schools: Vec<School>) -> Self { Self { schools, status: LoadStatus::Ready } }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self { schools: Vec::new(), status: LoadStatus::Failed(reason.into()) }
    }

    /// Reads and normalizes the dataset at `path`. Not retried on failure.
    pub async fn load(path: &Path) -> Self {
        match read_dataset(path).await {
            Ok(raws) => {
                let catalog = Self::from_raw(&raws);
                tracing::info!(path = %path.display(), rows = raws.len(), schools = catalog.len(), "dataset loaded");
                catalog
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "dataset load failed; continuing with an empty catalog");
                Self::failed(e.to_string())
            }
        }
    }

    /// The full canonical collection, in dataset order.
    pub fn records(&self) -> &[School] { &self.schools }

    pub fn status(&self) -> &LoadStatus { &self.status }

    pub fn len(&self) -> usize { self.schools.len() }

    pub fn is_empty(&self) -> bool { self.schools.is_empty() }

    pub fn get(&self, id: &str) -> Result<&School> {
        self.schools
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::NotFound(format!("school '{id}'")))
    }

    /// Distinct region names, sorted, for the region picker.
    pub fn regions(&self) -> Vec<String> {
        self.schools
            .iter()
            .map(|s| s.region.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Reads the bundled JSON array of raw rows.
pub async fn read_dataset(path: &Path) -> Result<Vec<SchoolRaw>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::Dataset(format!("{}: {}", path.display(), e)))?;
    serde_json::from_slice(&bytes).map_err(|e| Error::Dataset(format!("{}: {}", path.display(), e)))
}
