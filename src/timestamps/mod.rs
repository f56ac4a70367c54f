mod parser;
mod types;
mod utils;

pub use parser::{parse_timestamp, parse_timestamp_strict};
pub use types::TimestampToken;
pub use utils::format_hms;
