//! Platform implementations of [`InputPrimitive`](crate::application::inject::InputPrimitive).
//!
//! The OS-backed primitive is selected at compile time via `#[cfg(target_os = ...)]`.
//! [`mock::RecordingPrimitive`] is always compiled so tests and headless hosts
//! can run the whole pipeline.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::SendInputPrimitive as NativeInputPrimitive;
