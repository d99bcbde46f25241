//! EventPoster: the top-level "post one synthetic event" operation.
//!
//! ```text
//! AbstractInputEvent ──► EventTranslator ──► Option<NativeInputDescriptor>
//!                                                   │ Some
//!                                                   ▼
//!                                               Injector ──► OS primitive
//! ```
//!
//! Two entry points with different failure contracts:
//!
//! - [`EventPoster::post`] returns a [`PostError`] so the caller can decide on
//!   retry or backoff.
//! - [`EventPoster::post_event`] never fails: every problem is logged and the
//!   event is dropped, which is what fire-and-forget automation callers expect.
//!
//! Both log each failure exactly once.
//!
//! # Ordering
//!
//! A poster holds no mutable state and may be shared across threads, but two
//! threads posting at once can interleave their events.  Gestures that must
//! reach the OS in order (key down then key up, press-drag-release) should be
//! posted from one thread, e.g. with [`EventPoster::post_all`].

use synth_core::{AbstractInputEvent, EventTranslator, TranslateError};
use thiserror::Error;
use tracing::error;

use super::inject::{InjectionError, Injector};

/// Error type for [`EventPoster::post`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PostError {
    /// No descriptor could be built for the event.
    #[error("could not translate event: {0}")]
    Translate(#[from] TranslateError),
    /// The OS primitive rejected the descriptor.
    #[error("could not inject event: {0}")]
    Inject(#[from] InjectionError),
}

/// Translates abstract events and injects the result.
#[derive(Clone)]
pub struct EventPoster {
    translator: EventTranslator,
    injector: Injector,
}

impl EventPoster {
    pub fn new(translator: EventTranslator, injector: Injector) -> Self {
        Self {
            translator,
            injector,
        }
    }

    /// Posts one event.
    ///
    /// Events that translate to nothing (notification-only or unrecognized
    /// kinds) succeed without touching the injector.
    ///
    /// # Errors
    ///
    /// - [`PostError::Translate`] if the descriptor could not be built.
    /// - [`PostError::Inject`] if the OS primitive rejected it.  The event is
    ///   not retried.
    pub fn post(&self, event: &AbstractInputEvent) -> Result<(), PostError> {
        let descriptor = match self.translator.try_translate(event) {
            Ok(Some(descriptor)) => descriptor,
            Ok(None) => return Ok(()),
            Err(e) => {
                error!(kind = event.raw_kind(), "dropping event, descriptor construction failed: {e}");
                return Err(e.into());
            }
        };

        // The injector logs its own failures.
        self.injector.inject(&descriptor)?;
        Ok(())
    }

    /// Posts one event, logging and discarding any failure.
    pub fn post_event(&self, event: &AbstractInputEvent) {
        let _ = self.post(event);
    }

    /// Posts `events` in order from the calling thread.
    ///
    /// Stops at the first failure so a half-delivered gesture is not continued
    /// (e.g. a key-up is not sent after its key-down was rejected).
    ///
    /// # Errors
    ///
    /// Returns the index of the failing event together with its error.
    pub fn post_all<'a, I>(&self, events: I) -> Result<(), (usize, PostError)>
    where
        I: IntoIterator<Item = &'a AbstractInputEvent>,
    {
        for (index, event) in events.into_iter().enumerate() {
            self.post(event).map_err(|e| (index, e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::inject::MockInputPrimitive;
    use std::sync::Arc;
    use synth_core::{
        event::{EventPayload, KeyboardData, MouseData},
        keymap::usage,
        FixedScreenMetrics, ModifierMask, NormalizeError, WindowsVkMapper,
    };

    fn poster_with(primitive: MockInputPrimitive, width: i32, height: i32) -> EventPoster {
        EventPoster::new(
            EventTranslator::new(
                Arc::new(WindowsVkMapper::new()),
                Arc::new(FixedScreenMetrics::new(width, height)),
            ),
            Injector::new(Arc::new(primitive)),
        )
    }

    #[test]
    fn test_post_injects_translated_descriptor() {
        // Arrange
        let mut primitive = MockInputPrimitive::new();
        primitive
            .expect_send()
            .withf(|d| d.as_keyboard().map(|k| k.virtual_key) == Some(0x41))
            .times(1)
            .return_const(1u32);
        let poster = poster_with(primitive, 1920, 1080);

        // Act
        let result = poster.post(&AbstractInputEvent::key_pressed(usage::KEY_A, ModifierMask::empty()));

        // Assert
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_post_skips_injector_for_notification_kinds() {
        let mut primitive = MockInputPrimitive::new();
        primitive.expect_send().never();
        let poster = poster_with(primitive, 1920, 1080);

        let key = KeyboardData { keycode: usage::KEY_A, rawcode: None };
        let click = MouseData { x: 5, y: 5, button: 1 };
        let payloads = [
            EventPayload::HookEnabled,
            EventPayload::HookDisabled,
            EventPayload::KeyTyped(key),
            EventPayload::MouseClicked(click),
        ];

        for payload in payloads {
            let event = AbstractInputEvent::new(payload, ModifierMask::empty());
            assert_eq!(poster.post(&event), Ok(()));
        }
    }

    #[test]
    fn test_post_reports_translation_failure_without_injecting() {
        let mut primitive = MockInputPrimitive::new();
        primitive.expect_send().never();
        let poster = poster_with(primitive, 0, 1080);

        let result = poster.post(&AbstractInputEvent::mouse_moved(5, 5));

        assert_eq!(
            result,
            Err(PostError::Translate(TranslateError::InvalidExtent(
                NormalizeError::InvalidExtent { extent: 0 }
            )))
        );
    }

    #[test]
    fn test_post_reports_injection_failure_once() {
        let mut primitive = MockInputPrimitive::new();
        primitive.expect_send().times(1).return_const(0u32);
        primitive.expect_last_error().times(1).return_const(5u32);
        let poster = poster_with(primitive, 1920, 1080);

        let result = poster.post(&AbstractInputEvent::mouse_wheel(1, 1));

        assert_eq!(
            result,
            Err(PostError::Inject(InjectionError::Rejected { code: 5 }))
        );
    }

    #[test]
    fn test_post_event_swallows_failures() {
        let mut primitive = MockInputPrimitive::new();
        primitive.expect_send().times(1).return_const(0u32);
        primitive.expect_last_error().times(1).return_const(5u32);
        let poster = poster_with(primitive, 1920, 1080);

        // Must return normally.
        poster.post_event(&AbstractInputEvent::mouse_pressed(1, 1, 1));
    }

    #[test]
    fn test_post_all_stops_at_first_failure() {
        // Arrange: first send succeeds, second fails, third must never happen.
        let mut primitive = MockInputPrimitive::new();
        let mut seq = mockall::Sequence::new();
        primitive
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(1u32);
        primitive
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(0u32);
        primitive.expect_last_error().times(1).return_const(0x5u32);
        let poster = poster_with(primitive, 1920, 1080);
        let events = [
            AbstractInputEvent::key_pressed(usage::KEY_A, ModifierMask::empty()),
            AbstractInputEvent::key_released(usage::KEY_A, ModifierMask::empty()),
            AbstractInputEvent::key_pressed(usage::KEY_Z, ModifierMask::empty()),
        ];

        // Act
        let result = poster.post_all(&events);

        // Assert
        assert_eq!(
            result,
            Err((1, PostError::Inject(InjectionError::Rejected { code: 0x5 })))
        );
    }

    #[test]
    fn test_post_all_with_only_notifications_is_ok() {
        let mut primitive = MockInputPrimitive::new();
        primitive.expect_send().never();
        let poster = poster_with(primitive, 1920, 1080);
        let events = [
            AbstractInputEvent::new(EventPayload::HookEnabled, ModifierMask::empty()),
            AbstractInputEvent::new(EventPayload::Unrecognized { kind: 99 }, ModifierMask::empty()),
        ];

        assert_eq!(poster.post_all(events.iter()), Ok(()));
    }
}
