//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every check is further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit the raw net exchange, chosen scale and final line for every tooltip build.
    pub print_tooltip_build: bool,

    /// Emit details of zone-detail and locale file loading.
    pub print_data_loading: bool,

    /// Emit UI interaction logs (display-mode toggles, time-average changes).
    pub print_ui_interactions: bool,

    /// Emit details of UI state serialization/deserialization logs.
    pub print_state_serde: bool,

    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_tooltip_build: false,
    print_data_loading: true,
    print_ui_interactions: true,
    print_state_serde: false,
    print_shutdown: false,
};
