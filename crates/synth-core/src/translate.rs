//! EventTranslator: maps one abstract event to zero or one native descriptor.
//!
//! # Dispatch rules
//!
//! | Event kind                                      | Descriptor                                         |
//! |-------------------------------------------------|----------------------------------------------------|
//! | KeyPressed / KeyReleased                        | keyboard; VK from the mapper, extended flag for Shift + navigation keys |
//! | MousePressed / MouseReleased                    | mouse; button down/up flags, extended-button index |
//! | MouseWheel                                      | mouse; `WHEEL`, data = amount × rotation × 120     |
//! | MouseMoved / MouseDragged                       | mouse; `ABSOLUTE | MOVE`                           |
//! | MouseClicked, KeyTyped, HookEnabled, HookDisabled | none                                             |
//! | unrecognized kind                               | none, warning logged                               |
//!
//! Mouse descriptors always carry the pointer position normalized against the
//! primary screen size, which is queried on every call so that resolution
//! changes take effect immediately.
//!
//! An unmapped key code is not an error: a warning is logged and the
//! descriptor is built with VK 0.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, warn};

use crate::event::{AbstractInputEvent, EventPayload, KeyboardData, ModifierMask, MouseData, WheelData};
use crate::keymap::{windows_vk, KeycodeMapper};
use crate::native::{
    KeyFlags, KeyboardInput, MouseFlags, MouseInput, NativeInputDescriptor, WHEEL_DELTA, XBUTTON1,
    XBUTTON2,
};
use crate::normalize::{normalize, NormalizeError};

#[cfg(test)]
use mockall::automock;

/// Error type for descriptor construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The screen metrics query returned a non-positive extent.
    #[error("cannot normalize pointer position: {0}")]
    InvalidExtent(#[from] NormalizeError),
}

/// Primary screen size query.
///
/// Only the primary screen is consulted; absolute positioning across several
/// monitors is not supported.
#[cfg_attr(test, automock)]
pub trait ScreenMetrics: Send + Sync {
    /// Returns `(width, height)` of the primary screen in pixels.
    fn primary_screen_size(&self) -> (i32, i32);
}

/// [`ScreenMetrics`] that always reports the same size.
///
/// Used on hosts without a display and when configuration pins the extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedScreenMetrics {
    pub width: i32,
    pub height: i32,
}

impl FixedScreenMetrics {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl ScreenMetrics for FixedScreenMetrics {
    fn primary_screen_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonAction {
    Down,
    Up,
}

/// The dispatcher.  Stateless apart from its two collaborators.
#[derive(Clone)]
pub struct EventTranslator {
    mapper: Arc<dyn KeycodeMapper>,
    screen: Arc<dyn ScreenMetrics>,
}

impl EventTranslator {
    pub fn new(mapper: Arc<dyn KeycodeMapper>, screen: Arc<dyn ScreenMetrics>) -> Self {
        Self { mapper, screen }
    }

    /// Translates `event`, logging and swallowing construction failures.
    ///
    /// Returns `None` for notification-only and unrecognized kinds, and for
    /// events whose descriptor could not be built.
    pub fn translate(&self, event: &AbstractInputEvent) -> Option<NativeInputDescriptor> {
        match self.try_translate(event) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                error!(kind = event.raw_kind(), "dropping event, descriptor construction failed: {e}");
                None
            }
        }
    }

    /// Translates `event`, reporting construction failures to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::InvalidExtent`] if a mouse event arrives while
    /// the screen metrics report a non-positive width or height.
    pub fn try_translate(
        &self,
        event: &AbstractInputEvent,
    ) -> Result<Option<NativeInputDescriptor>, TranslateError> {
        let descriptor = match &event.payload {
            EventPayload::KeyPressed(key) => self.keyboard(key, event.mask, KeyFlags::KEYDOWN),
            EventPayload::KeyReleased(key) => self.keyboard(key, event.mask, KeyFlags::KEYUP),
            EventPayload::MousePressed(mouse) => self.mouse_button(mouse, ButtonAction::Down)?,
            EventPayload::MouseReleased(mouse) => self.mouse_button(mouse, ButtonAction::Up)?,
            EventPayload::MouseWheel(wheel) => self.mouse_wheel(wheel)?,
            // Button state during a drag travels in the event mask; geometry is
            // handled exactly like a plain move.
            EventPayload::MouseMoved(mouse) | EventPayload::MouseDragged(mouse) => {
                self.mouse_motion(mouse)?
            }
            EventPayload::MouseClicked(_)
            | EventPayload::KeyTyped(_)
            | EventPayload::HookEnabled
            | EventPayload::HookDisabled => return Ok(None),
            EventPayload::Unrecognized { kind } => {
                warn!("ignoring post event of unrecognized type {kind:#X}");
                return Ok(None);
            }
        };
        Ok(Some(descriptor))
    }

    fn keyboard(&self, key: &KeyboardData, mask: ModifierMask, direction: KeyFlags) -> NativeInputDescriptor {
        let virtual_key = self.mapper.logical_to_native(key.keycode);
        if virtual_key == 0 {
            warn!("unable to map logical key code {:#06X} to a native key code", key.keycode);
        }

        let mut flags = direction;
        if mask.shift() && windows_vk::is_extended_nav_key(virtual_key) {
            flags |= KeyFlags::EXTENDEDKEY;
        }

        NativeInputDescriptor::Keyboard(KeyboardInput {
            virtual_key,
            scan_code: 0,
            flags,
        })
    }

    fn mouse_button(
        &self,
        mouse: &MouseData,
        action: ButtonAction,
    ) -> Result<NativeInputDescriptor, TranslateError> {
        let (dx, dy) = self.normalized_position(mouse.x, mouse.y)?;
        let (flags, mouse_data) = button_flags(mouse.button, action);
        Ok(NativeInputDescriptor::Mouse(MouseInput {
            dx,
            dy,
            mouse_data,
            flags,
        }))
    }

    fn mouse_wheel(&self, wheel: &WheelData) -> Result<NativeInputDescriptor, TranslateError> {
        let (dx, dy) = self.normalized_position(wheel.x, wheel.y)?;
        let mouse_data = wheel
            .amount
            .saturating_mul(wheel.rotation)
            .saturating_mul(WHEEL_DELTA);
        Ok(NativeInputDescriptor::Mouse(MouseInput {
            dx,
            dy,
            mouse_data,
            flags: MouseFlags::WHEEL,
        }))
    }

    fn mouse_motion(&self, mouse: &MouseData) -> Result<NativeInputDescriptor, TranslateError> {
        let (dx, dy) = self.normalized_position(mouse.x, mouse.y)?;
        Ok(NativeInputDescriptor::Mouse(MouseInput {
            dx,
            dy,
            mouse_data: 0,
            flags: MouseFlags::ABSOLUTE | MouseFlags::MOVE,
        }))
    }

    fn normalized_position(&self, x: i32, y: i32) -> Result<(i32, i32), NormalizeError> {
        let (width, height) = self.screen.primary_screen_size();
        Ok((normalize(x, width)?, normalize(y, height)?))
    }
}

/// Resolves a 1-based button ordinal to its flag and auxiliary index.
fn button_flags(button: u16, action: ButtonAction) -> (MouseFlags, i32) {
    match (button, action) {
        (1, ButtonAction::Down) => (MouseFlags::LEFTDOWN, 0),
        (1, ButtonAction::Up) => (MouseFlags::LEFTUP, 0),
        (2, ButtonAction::Down) => (MouseFlags::RIGHTDOWN, 0),
        (2, ButtonAction::Up) => (MouseFlags::RIGHTUP, 0),
        (3, ButtonAction::Down) => (MouseFlags::MIDDLEDOWN, 0),
        (3, ButtonAction::Up) => (MouseFlags::MIDDLEUP, 0),
        (other, ButtonAction::Down) => (MouseFlags::XDOWN, extended_button_index(other)),
        (other, ButtonAction::Up) => (MouseFlags::XUP, extended_button_index(other)),
    }
}

fn extended_button_index(button: u16) -> i32 {
    match button {
        4 => XBUTTON1,
        5 => XBUTTON2,
        other => i32::from(other) - 3,
    }
}
