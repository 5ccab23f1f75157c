//! Optimizer output consumed by the pricing engine.

use crate::config::DEFAULT_BOARD_ID;
use serde::{Deserialize, Serialize};

fn default_board_id() -> u32 {
    DEFAULT_BOARD_ID
}

/// A single part placed on a stock board.
///
/// Only `board_id`, `w_mm` and `h_mm` take part in pricing; the position is
/// carried through for callers that render layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Board this part was nested on.
    #[serde(default = "default_board_id")]
    pub board_id: u32,
    /// Placed width in mm.
    pub w_mm: f64,
    /// Placed height in mm.
    pub h_mm: f64,
    /// X origin on the board.
    #[serde(default)]
    pub x_mm: f64,
    /// Y origin on the board.
    #[serde(default)]
    pub y_mm: f64,
    /// Whether the part was rotated by the optimizer.
    #[serde(default)]
    pub rotated: bool,
}

impl Placement {
    /// Create a placement at the origin of a board.
    pub fn new(board_id: u32, w_mm: f64, h_mm: f64) -> Self {
        Self {
            board_id,
            w_mm,
            h_mm,
            x_mm: 0.0,
            y_mm: 0.0,
            rotated: false,
        }
    }

    /// Occupied area in mm².
    pub fn area_mm2(&self) -> f64 {
        self.w_mm * self.h_mm
    }
}

/// Aggregate metrics reported by the optimizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationMetrics {
    /// Number of boards consumed.
    #[serde(default)]
    pub boards_used: u32,
    /// Total saw path length in mm.
    #[serde(default)]
    pub total_cut_length_mm: f64,
}

/// Cutting plan for one material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Material this plan was produced for.
    pub material_id: String,
    /// Parts placed on boards.
    #[serde(default)]
    pub placements: Vec<Placement>,
    /// Optimizer metrics.
    #[serde(default)]
    pub metrics: OptimizationMetrics,
}

impl OptimizationResult {
    /// Create an empty plan for a material.
    pub fn new(material_id: impl Into<String>) -> Self {
        Self {
            material_id: material_id.into(),
            ..Default::default()
        }
    }

    /// Total placed area in mm² across all boards.
    pub fn used_area_mm2(&self) -> f64 {
        self.placements.iter().map(Placement::area_mm2).sum()
    }

    /// Highest board id referenced by a placement.
    pub fn max_board_id(&self) -> Option<u32> {
        self.placements.iter().map(|p| p.board_id).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_board_id_defaults_to_one() {
        let placement: Placement = serde_json::from_str(r#"{"w_mm": 100, "h_mm": 200}"#)
            .expect("Should deserialize");
        assert_eq!(placement.board_id, 1);
        assert_eq!(placement.area_mm2(), 20_000.0);
    }

    #[test]
    fn test_used_area_sums_placements() {
        let mut result = OptimizationResult::new("mat-1");
        result.placements.push(Placement::new(1, 100.0, 100.0));
        result.placements.push(Placement::new(2, 200.0, 50.0));
        assert_eq!(result.used_area_mm2(), 20_000.0);
        assert_eq!(result.max_board_id(), Some(2));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let result: OptimizationResult = serde_json::from_str(
            r#"{"material_id": "m", "placements": [], "metrics": {"boards_used": 2, "total_cut_length_mm": 10, "efficiency": 0.9}, "solver": "x"}"#,
        )
        .expect("Should deserialize");
        assert_eq!(result.metrics.boards_used, 2);
    }
}
