//! Injector: submits one native descriptor to the OS input primitive.
//!
//! The OS primitive reports failure on two channels: it returns the number of
//! events it injected (0 means the event was rejected) and leaves the reason in
//! a separately queried platform error code.  [`Injector::inject`] folds both
//! into one [`InjectionError`].
//!
//! A rejected event is logged once at ERROR level with the platform code and
//! is not retried.

use std::sync::Arc;

use synth_core::NativeInputDescriptor;
use thiserror::Error;
use tracing::{debug, error};

#[cfg(test)]
use mockall::automock;

/// Error type for injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InjectionError {
    /// The primitive injected nothing.  `code` is the platform error code.
    #[error("input primitive rejected the event (platform error {code:#X})")]
    Rejected { code: u32 },
}

/// The OS synthetic-input primitive, exactly as the platform exposes it.
///
/// Implementations live in the infrastructure layer.
#[cfg_attr(test, automock)]
pub trait InputPrimitive: Send + Sync {
    /// Submits one descriptor.  Returns how many events were injected (0 or 1).
    fn send(&self, descriptor: &NativeInputDescriptor) -> u32;

    /// Returns the platform error code left by the last failed [`send`](Self::send).
    fn last_error(&self) -> u32;
}

/// Wraps an [`InputPrimitive`] with a single typed result per call.
#[derive(Clone)]
pub struct Injector {
    primitive: Arc<dyn InputPrimitive>,
}

impl Injector {
    pub fn new(primitive: Arc<dyn InputPrimitive>) -> Self {
        Self { primitive }
    }

    /// Submits `descriptor` exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError::Rejected`] carrying the platform error code
    /// when the primitive injects nothing.  The failure has already been
    /// logged when this returns.
    pub fn inject(&self, descriptor: &NativeInputDescriptor) -> Result<(), InjectionError> {
        if self.primitive.send(descriptor) == 0 {
            let code = self.primitive.last_error();
            error!("input primitive failed to inject {descriptor:?} ({code:#X})");
            return Err(InjectionError::Rejected { code });
        }
        debug!(?descriptor, "injected");
        Ok(())
    }
}
