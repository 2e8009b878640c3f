//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep noisy ones `false` by default.
//! Call sites are additionally gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Log every sequencer transition (advance, end, reset).
    pub print_animation_transitions: bool,
    /// Log chart frame cache hits/misses in the plot view.
    pub print_plot_cache_stats: bool,
    /// Log the prepared series once at startup.
    pub print_series_summary: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_animation_transitions: false,
    print_plot_cache_stats: false,
    print_series_summary: true,
    print_shutdown: false,
};
