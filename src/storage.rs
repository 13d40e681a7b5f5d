//! localStorage persistence for the brush list.
//!
//! The persisted form is a flat JSON array of [`BrushRecord`]s under one key,
//! field-compatible with legacy saves (including the misspelled
//! `outterR` key and the spike count stored un-doubled as `n`).

use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shape::{Shape, StyleOptions};

pub const BRUSHES_KEY: &str = "brushes";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("failed to read `{0}` from localStorage")]
    Read(&'static str),
    #[error("failed to write `{0}` to localStorage")]
    Write(&'static str),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Plain parameter record for one persisted brush. Missing fields take the
/// legacy constructor defaults.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct BrushRecord {
    #[serde(rename = "innerR", default = "default_radius")]
    pub inner_r: f64,
    #[serde(rename = "outterR", default = "default_radius")]
    pub outer_r: f64,
    /// Effective spike count; doubled again when reconstructing, matching the
    /// constructor's halving.
    #[serde(default = "default_spikes")]
    pub n: u32,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub origin: Option<Point>,
    #[serde(default)]
    pub options: StyleOptions,
}

fn default_radius() -> f64 {
    20.0
}

fn default_spikes() -> u32 {
    2
}

impl BrushRecord {
    pub fn from_shape(shape: &Shape) -> BrushRecord {
        BrushRecord {
            inner_r: shape.inner_r,
            outer_r: shape.outer_r,
            n: shape.points(),
            rotation: shape.rotation,
            origin: Some(shape.origin),
            options: shape.style.clone().into(),
        }
    }

    pub fn into_shape(self) -> Shape {
        let mut shape = Shape::new(self.inner_r, self.outer_r, self.n * 2, self.rotation, self.options);
        if let Some(origin) = self.origin {
            shape.origin = origin;
        }
        shape
    }
}

/// Load the persisted brush list. A missing entry is an empty list.
pub fn load_brushes() -> Result<Vec<BrushRecord>, StorageError> {
    let storage = local_storage().ok_or(StorageError::Unavailable)?;
    let raw = storage
        .get_item(BRUSHES_KEY)
        .map_err(|_| StorageError::Read(BRUSHES_KEY))?;
    match raw {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// Persist the brush list, replacing any previous entry.
pub fn save_brushes(records: &[BrushRecord]) -> Result<(), StorageError> {
    let storage = local_storage().ok_or(StorageError::Unavailable)?;
    let raw = serde_json::to_string(records)?;
    storage
        .set_item(BRUSHES_KEY, &raw)
        .map_err(|_| StorageError::Write(BRUSHES_KEY))
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
