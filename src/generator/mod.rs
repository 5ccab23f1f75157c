//! Output generators: price formatting, text summaries and persistence rows.

mod format;
mod rows;
mod summary;

pub use format::{currency_symbol, format_price};
pub use rows::{
    flatten_rows, unit_net_price, BoardRow, EdgeRow, QuoteLineRow, QuoteRows, ServiceKind,
    ServiceRow,
};
pub use summary::render_summary;
