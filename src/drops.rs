//! DROP log parsing and aggregation
//!
//! Turns raw log text into sealed [`DropRecord`]s and a global frequency
//! table. Everything here is synchronous and side-effect free.

mod aggregate;
mod content;
mod dataset;
mod header;
mod parser;
mod types;

pub use aggregate::aggregate;
pub use content::clean_content_line;
pub use dataset::Dataset;
pub use header::{DropHeader, match_header};
pub use parser::{DropParser, ParserState, parse};
pub use types::{DropRecord, GlobalStat};
