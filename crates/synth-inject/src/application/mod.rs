//! Application layer use cases.
//!
//! - **`inject`** – submits one native descriptor through an
//!   [`inject::InputPrimitive`] and turns the OS's count-plus-error-code
//!   reply into a single `Result`.
//!
//! - **`post_event`** – the top-level operation: translate an abstract event
//!   with `synth_core::EventTranslator`, then inject whatever it produced.

pub mod inject;
pub mod post_event;
