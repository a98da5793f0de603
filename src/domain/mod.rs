// Domain types and value objects
pub mod display;
pub mod zone_detail;

// Re-export commonly used types
pub use display::{DisplayMode, TimeAverage};
pub use zone_detail::ZoneDetail;
