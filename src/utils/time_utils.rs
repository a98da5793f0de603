use chrono::{DateTime, Utc};

use crate::domain::TimeAverage;

pub struct TimeUtils;

impl TimeUtils {
    pub const HOURLY_FORMAT: &str = "%B %-d, %Y at %H:%M UTC";
    pub const DAILY_FORMAT: &str = "%B %-d, %Y";
    pub const MONTHLY_FORMAT: &str = "%B %Y";
    pub const YEARLY_FORMAT: &str = "%Y";

    pub fn format_for(time_average: TimeAverage) -> &'static str {
        match time_average {
            TimeAverage::Hourly => Self::HOURLY_FORMAT,
            TimeAverage::Daily => Self::DAILY_FORMAT,
            TimeAverage::Monthly => Self::MONTHLY_FORMAT,
            TimeAverage::Yearly => Self::YEARLY_FORMAT,
        }
    }
}

/// Header datetime text. Coarser averages drop the fields that no longer mean anything.
pub fn format_datetime(datetime: DateTime<Utc>, time_average: TimeAverage) -> String {
    datetime
        .format(TimeUtils::format_for(time_average))
        .to_string()
}
