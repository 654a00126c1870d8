pub mod date;
pub mod range;

pub use date::{format_date, parse_date, DATE_FORMAT};
pub use range::{parse_date_range, RANGE_SEPARATOR};
