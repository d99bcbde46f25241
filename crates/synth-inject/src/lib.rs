//! synth-inject library entry point.
//!
//! Takes the descriptors produced by `synth-core` and hands them to the
//! operating system's synthetic-input primitive.
//!
//! # Layers
//!
//! - **`application`** – the `Injector` (one descriptor in, one typed result
//!   out) and the `EventPoster` use case that chains translation and
//!   injection for a single abstract event.
//!
//! - **`infrastructure`** – OS-facing adapters: the injection primitive
//!   (`SendInput` on Windows, an in-memory recorder everywhere), the primary
//!   screen size query, TOML configuration, and logging bootstrap.
//!
//! The application layer sees the OS only through the `InputPrimitive` and
//! `ScreenMetrics` traits, so every rule runs under test without a desktop.

/// Application layer: injection and the post-event use case.
pub mod application;

/// Infrastructure layer: OS adapters, configuration, logging.
pub mod infrastructure;

pub use application::inject::{InjectionError, Injector, InputPrimitive};
pub use application::post_event::{EventPoster, PostError};
