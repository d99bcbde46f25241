//! Infrastructure layer for injection.
//!
//! Contains OS-facing adapters and process bootstrap.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `synth_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`input_primitive`** – implementations of `InputPrimitive`: `SendInput`
//!   on Windows, selected with `#[cfg(target_os)]`, and a recording primitive
//!   compiled everywhere.
//!
//! - **`screen_metrics`** – primary screen size from the OS, or a fixed size
//!   from configuration.
//!
//! - **`config`** – TOML configuration (`[logging]`, `[screen]`).
//!
//! - **`logging`** – installs the `tracing` subscriber.

pub mod config;
pub mod input_primitive;
pub mod logging;
pub mod screen_metrics;

#[cfg(target_os = "windows")]
pub use native::native_poster;

#[cfg(target_os = "windows")]
mod native {
    use std::sync::Arc;

    use synth_core::{EventTranslator, WindowsVkMapper};

    use super::config::SynthConfig;
    use super::input_primitive::NativeInputPrimitive;
    use super::screen_metrics::{select_screen_metrics, NativeScreenMetrics};
    use crate::application::inject::Injector;
    use crate::application::post_event::EventPoster;

    /// Wires a poster to `SendInput`, the Windows VK table and the configured
    /// (or live) screen size.
    pub fn native_poster(config: &SynthConfig) -> EventPoster {
        let screen = select_screen_metrics(&config.screen)
            .unwrap_or_else(|| Arc::new(NativeScreenMetrics::new()));
        let translator = EventTranslator::new(Arc::new(WindowsVkMapper::new()), screen);
        let injector = Injector::new(Arc::new(NativeInputPrimitive::new()));
        EventPoster::new(translator, injector)
    }
}
