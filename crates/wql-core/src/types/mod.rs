mod timestamp;

pub use timestamp::{DATETIME_LEN, Timestamp, normalize_datetime};
