//! Annual summary CSV reading.

mod header;
mod reader;

pub use header::{HeaderRow, detect_header_row, normalize_header};
pub use reader::{DEFAULT_HEADER_ROW, LoadOptions, load_summary_csv};
