//! Heatmap cells
//!
//! The service does not interpret heatmap data; cells are served exactly as loaded.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeatmapCell(pub serde_json::Value);
