//! Quote input document: optimizer output plus reference rows, decoded from
//! JSON into a typed `QuoteInput`.

use super::rows::{
    CuttingFeeRow, EdgeMaterialRow, MaterialRow, OptimizationResultRow, PanelEdgeRow, PanelRow,
};
use crate::config::PricingConfig;
use crate::error::{QuoteError, Result};
use crate::model::{
    CuttingFeeInfo, EdgeMaterialInfo, MaterialInfo, OptimizationResult, PanelEdge,
    PanelWithServices, QuoteResult,
};
use crate::pricing::calculate_quote_with_config;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Raw JSON document as produced by the surrounding application.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QuoteDocument {
    optimization_results: Vec<OptimizationResultRow>,
    materials: Vec<MaterialRow>,
    edge_materials: Vec<EdgeMaterialRow>,
    panel_edges_by_material: HashMap<String, Vec<PanelEdgeRow>>,
    cutting_fee: Option<CuttingFeeRow>,
    panels_by_material: Option<HashMap<String, Vec<PanelRow>>>,
}

/// Typed input for one quote calculation.
#[derive(Debug, Clone, Default)]
pub struct QuoteInput {
    pub optimization_results: Vec<OptimizationResult>,
    pub materials: Vec<MaterialInfo>,
    pub panel_edges_by_material: HashMap<String, Vec<PanelEdge>>,
    /// Edge materials keyed by name.
    pub edge_materials: HashMap<String, EdgeMaterialInfo>,
    pub cutting_fee: Option<CuttingFeeInfo>,
    pub panels_by_material: Option<HashMap<String, Vec<PanelWithServices>>>,
}

impl QuoteInput {
    /// Price this input.
    pub fn calculate(&self, config: &PricingConfig) -> QuoteResult {
        calculate_quote_with_config(
            &self.optimization_results,
            &self.materials,
            &self.panel_edges_by_material,
            &self.edge_materials,
            self.cutting_fee.as_ref(),
            self.panels_by_material.as_ref(),
            config,
        )
    }

    fn from_document(doc: QuoteDocument) -> Result<Self> {
        let optimization_results = doc
            .optimization_results
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                row.into_optimization_result(&format!("optimization_results[{}]", i))
            })
            .collect::<Result<Vec<_>>>()?;

        let materials = doc
            .materials
            .into_iter()
            .enumerate()
            .map(|(i, row)| row.into_material(&format!("materials[{}]", i)))
            .collect::<Result<Vec<_>>>()?;

        let mut edge_materials = HashMap::with_capacity(doc.edge_materials.len());
        for (i, row) in doc.edge_materials.into_iter().enumerate() {
            let edge = row.into_edge_material(&format!("edge_materials[{}]", i))?;
            if edge_materials.contains_key(&edge.name) {
                tracing::warn!("Duplicate edge material '{}', keeping the last row", edge.name);
            }
            edge_materials.insert(edge.name.clone(), edge);
        }

        let panel_edges_by_material = doc
            .panel_edges_by_material
            .into_iter()
            .map(|(material_id, rows)| {
                let edges = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, row)| {
                        row.into_panel_edge(&format!(
                            "panel_edges_by_material[{}][{}]",
                            material_id, i
                        ))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok((material_id, edges))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        let cutting_fee = doc
            .cutting_fee
            .map(CuttingFeeRow::into_cutting_fee)
            .transpose()?;

        let panels_by_material = doc
            .panels_by_material
            .map(|map| {
                map.into_iter()
                    .map(|(material_id, rows)| {
                        let panels = rows
                            .into_iter()
                            .map(PanelRow::into_panel)
                            .collect::<Result<Vec<_>>>()?;
                        Ok((material_id, panels))
                    })
                    .collect::<Result<HashMap<_, _>>>()
            })
            .transpose()?;

        Ok(Self {
            optimization_results,
            materials,
            panel_edges_by_material,
            edge_materials,
            cutting_fee,
            panels_by_material,
        })
    }
}

/// Parse a quote input document from a JSON string.
pub fn parse_quote_input_str(content: &str) -> Result<QuoteInput> {
    let doc: QuoteDocument = serde_json::from_str(content)?;
    QuoteInput::from_document(doc)
}

/// Parse a quote input document from a file.
pub fn parse_quote_input(path: &Path) -> Result<QuoteInput> {
    if !path.exists() {
        return Err(QuoteError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(QuoteError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_quote_input_str(&content)
}
