//! File persistence configuration

// App state persistence
/// Path for saving/loading viewer UI state
pub const APP_STATE_PATH: &str = ".states.json";
