//! Platform clock used by the animation timers.
//!
//! The browser has no `std::time::Instant`, so the WASM build swaps in
//! `web_time::Instant`, which exposes the same API.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

pub fn now() -> AppInstant {
    AppInstant::now()
}

/// Time left until `deadline`, zero if it has already passed.
pub fn until(deadline: AppInstant, now: AppInstant) -> Duration {
    deadline.saturating_duration_since(now)
}
