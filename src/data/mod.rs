// Zone detail and locale file loading
pub mod zone_file;

pub use zone_file::{load_locale, load_zone_details, parse_zone_details};
