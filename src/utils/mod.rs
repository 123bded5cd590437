pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::format_hms;
pub use time::{combine_date_time, parse_date, parse_time};
