//! Windows primary screen size via `GetSystemMetrics`.

#![cfg(target_os = "windows")]

use synth_core::ScreenMetrics;
use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

/// [`ScreenMetrics`] for the primary monitor.
pub struct WindowsScreenMetrics;

impl WindowsScreenMetrics {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsScreenMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenMetrics for WindowsScreenMetrics {
    fn primary_screen_size(&self) -> (i32, i32) {
        // SAFETY: GetSystemMetrics has no preconditions.
        unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) }
    }
}
