//! In-memory input primitive.
//!
//! Records every descriptor it is asked to send instead of calling the OS, so
//! callers can assert on exactly what would have been injected and in what
//! order.  Setting `should_fail` makes every send report failure with
//! `error_code`, which exercises the error path without a broken OS.
//!
//! ```ignore
//! let primitive = Arc::new(RecordingPrimitive::new());
//! let injector = Injector::new(Arc::clone(&primitive) as Arc<dyn InputPrimitive>);
//! injector.inject(&descriptor)?;
//! assert_eq!(primitive.submitted().len(), 1);
//! ```

use std::sync::{Mutex, PoisonError};

use synth_core::NativeInputDescriptor;

use crate::application::inject::InputPrimitive;

/// Error code reported on failure when none is configured
/// (`ERROR_ACCESS_DENIED`, what `SendInput` returns when UIPI blocks it).
pub const DEFAULT_FAILURE_CODE: u32 = 0x5;

/// A primitive that records submissions without performing OS calls.
#[derive(Debug)]
pub struct RecordingPrimitive {
    submitted: Mutex<Vec<NativeInputDescriptor>>,
    /// When `true`, every send records the attempt and then reports failure.
    pub should_fail: bool,
    /// Code returned by `last_error` while `should_fail` is set.
    pub error_code: u32,
}

impl RecordingPrimitive {
    pub fn new() -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            should_fail: false,
            error_code: DEFAULT_FAILURE_CODE,
        }
    }

    /// A primitive that rejects everything with `code`.
    pub fn failing(code: u32) -> Self {
        Self {
            should_fail: true,
            error_code: code,
            ..Self::new()
        }
    }

    /// Every descriptor passed to `send`, including rejected ones.
    pub fn submitted(&self) -> Vec<NativeInputDescriptor> {
        self.submitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for RecordingPrimitive {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPrimitive for RecordingPrimitive {
    fn send(&self, descriptor: &NativeInputDescriptor) -> u32 {
        // A panic in another holder must not drop submissions from the record.
        self.submitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*descriptor);
        if self.should_fail {
            0
        } else {
            1
        }
    }

    fn last_error(&self) -> u32 {
        if self.should_fail {
            self.error_code
        } else {
            0
        }
    }
}
