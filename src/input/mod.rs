//! Quote input adapter: JSON documents of database rows into typed input.

mod document;
mod rows;

pub use document::{parse_quote_input, parse_quote_input_str, QuoteInput};
pub use rows::{
    count, flag, number, CuttingFeeRow, EdgeMaterialRow, FlagLike, KeyLike, MaterialRow,
    NumberLike, OptimizationResultRow, PanelEdgeRow, PanelRow,
};
