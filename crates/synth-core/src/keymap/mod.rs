//! Logical key code → native key code mapping.
//!
//! Logical key codes are USB HID Usage IDs (see [`usage`]).  The translator
//! resolves them through a [`KeycodeMapper`]; [`WindowsVkMapper`] is the
//! table-backed default for the Windows injection path.

pub mod usage;
pub mod windows_vk;

#[cfg(test)]
use mockall::automock;

/// Resolves a logical key code to the native code the injection primitive
/// expects.
///
/// A miss is reported as `0`, never as an error: the caller decides whether a
/// zero key code is still worth injecting.
#[cfg_attr(test, automock)]
pub trait KeycodeMapper: Send + Sync {
    fn logical_to_native(&self, code: u16) -> u16;
}

/// [`KeycodeMapper`] backed by the compile-time HID → VK table.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsVkMapper;

impl WindowsVkMapper {
    pub fn new() -> Self {
        Self
    }
}

impl KeycodeMapper for WindowsVkMapper {
    fn logical_to_native(&self, code: u16) -> u16 {
        windows_vk::hid_to_vk(code)
    }
}
