pub mod maths_utils;
pub mod time_utils;

pub use maths_utils::{format_fixed, round_to};
pub use time_utils::{TimeUtils, format_datetime};
