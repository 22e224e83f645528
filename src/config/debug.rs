//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. They are further gated by `cfg(debug_assertions)` at
//! every call site.

pub struct DebugFlags {
    /// Emit UI interaction logs (month navigation, theme toggles).
    pub print_ui_interactions: bool,
    /// Emit details of preference loading/saving.
    pub print_state_serde: bool,
    /// Emit per-year moveable holiday expansion (cache misses only).
    pub print_moveable_expansion: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_state_serde: false,
    print_moveable_expansion: false,
    print_shutdown: false,
};
