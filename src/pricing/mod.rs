//! Quote pricing engine.

mod amount;
mod board;
mod cutting;
mod edge;
mod quote;
mod services;

pub use amount::Amount;
pub use board::{group_by_board, price_boards};
pub use cutting::price_cutting;
pub use edge::{aggregate_edges, price_edges, EdgeTotals};
pub use quote::{calculate_quote, calculate_quote_with_config};
pub use services::{price_services, ServiceTotals};
