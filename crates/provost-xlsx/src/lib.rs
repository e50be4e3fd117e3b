#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

// Silence unused dependency warnings for optional/future use
use tracing as _;

mod codec;
mod decode;
mod encode;

/// The xlsx workbook codec implementation.
pub use codec::XlsxCodec;

// Re-export the port and table types from core for convenience
pub use provost_core::workbook::{CellValue, SheetTable, WorkbookError};
pub use provost_core::{NoopWorkbookCodec, WorkbookCodec};
