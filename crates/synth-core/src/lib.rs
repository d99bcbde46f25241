//! # synth-core
//!
//! OS-free half of synthinput: turns abstract, platform-independent input
//! events into native input descriptors ready for an OS injection primitive.
//!
//! # How the pieces fit together
//!
//! ```text
//! AbstractInputEvent
//!        │
//!        ▼
//!  EventTranslator ──► KeycodeMapper      (logical key → native key code)
//!        │        └──► ScreenMetrics      (primary screen extent, fresh per call)
//!        │        └──► normalize()        (pixel → 0..65536 device space)
//!        ▼
//! Option<NativeInputDescriptor>  ──►  injector (synth-inject crate)
//! ```
//!
//! - **`event`** – the abstract event model produced by a capture/hook
//!   subsystem: kind, payload, and modifier mask.
//!
//! - **`native`** – the native descriptor model.  Flag values match the Win32
//!   `KEYEVENTF_*` / `MOUSEEVENTF_*` constants so an OS adapter copies fields
//!   straight into an `INPUT` structure.
//!
//! - **`normalize`** – pixel to normalized-device-coordinate conversion.
//!
//! - **`keymap`** – logical key (USB HID Usage ID) to Windows Virtual-Key
//!   translation, plus the extended navigation key set.
//!
//! - **`translate`** – the dispatcher that maps one event to zero or one
//!   descriptor.
//!
//! This crate performs no OS calls; screen metrics and key mapping arrive
//! through traits so every rule is testable on any host.

pub mod event;
pub mod keymap;
pub mod native;
pub mod normalize;
pub mod translate;

#[cfg(any(test, feature = "testing"))]
#[doc(hidden)]
pub mod testing;

pub use event::{AbstractInputEvent, EventKind, EventPayload, ModifierMask, WireData, WireEvent};
pub use keymap::{KeycodeMapper, WindowsVkMapper};
pub use native::{KeyFlags, KeyboardInput, MouseFlags, MouseInput, NativeInputDescriptor};
pub use normalize::{normalize, NormalizeError};
pub use translate::{EventTranslator, FixedScreenMetrics, ScreenMetrics, TranslateError};
