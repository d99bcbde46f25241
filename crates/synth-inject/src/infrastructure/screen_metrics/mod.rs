//! Primary screen size query.
//!
//! Implements [`synth_core::ScreenMetrics`] for the host OS.  Only the primary
//! screen is reported; multi-monitor layouts are outside what absolute
//! positioning supports here.
//!
//! | Module    | OS      | API used                                      |
//! |-----------|---------|-----------------------------------------------|
//! | `windows` | Windows | `GetSystemMetrics(SM_CXSCREEN / SM_CYSCREEN)` |
//!
//! Results are never cached: the translator asks on every mouse event, so a
//! resolution change is picked up by the very next event.
//!
//! A fixed size from configuration takes precedence over the OS query; see
//! [`select_screen_metrics`].

use std::sync::Arc;

use synth_core::ScreenMetrics;
use tracing::info;

use super::config::ScreenConfig;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::WindowsScreenMetrics as NativeScreenMetrics;

/// Picks the screen metrics source for a poster.
///
/// Returns the configured fixed size when both dimensions are set, otherwise
/// the OS query.  Returns `None` on hosts with no OS implementation and no
/// configured size.
pub fn select_screen_metrics(config: &ScreenConfig) -> Option<Arc<dyn ScreenMetrics>> {
    if let Some(fixed) = config.fixed() {
        info!(width = fixed.width, height = fixed.height, "using fixed screen size from config");
        return Some(Arc::new(fixed));
    }
    native_screen_metrics()
}

#[cfg(target_os = "windows")]
fn native_screen_metrics() -> Option<Arc<dyn ScreenMetrics>> {
    Some(Arc::new(NativeScreenMetrics::new()))
}

#[cfg(not(target_os = "windows"))]
fn native_screen_metrics() -> Option<Arc<dyn ScreenMetrics>> {
    None
}
