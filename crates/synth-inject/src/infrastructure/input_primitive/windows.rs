//! Windows input primitive via `SendInput`.
//!
//! Descriptor fields and flag bits already use Win32 values, so conversion to
//! an `INPUT` structure is a direct copy.  `SendInput` returns the number of
//! events inserted; on 0 the reason is available from `GetLastError`.

#![cfg(target_os = "windows")]

use synth_core::NativeInputDescriptor;
use windows::Win32::Foundation::GetLastError;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    MOUSEINPUT, MOUSE_EVENT_FLAGS, VIRTUAL_KEY,
};

use crate::application::inject::InputPrimitive;

/// [`InputPrimitive`] backed by the Win32 `SendInput` API.
pub struct SendInputPrimitive;

impl SendInputPrimitive {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SendInputPrimitive {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPrimitive for SendInputPrimitive {
    fn send(&self, descriptor: &NativeInputDescriptor) -> u32 {
        let input = to_win32_input(descriptor);
        // SAFETY: `input` is a fully initialised INPUT on the stack and the
        // size argument matches its type.
        unsafe { SendInput(&[input], std::mem::size_of::<INPUT>() as i32) }
    }

    fn last_error(&self) -> u32 {
        // SAFETY: GetLastError only reads thread-local state.
        unsafe { GetLastError() }.0
    }
}

fn to_win32_input(descriptor: &NativeInputDescriptor) -> INPUT {
    match descriptor {
        NativeInputDescriptor::Keyboard(ki) => INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: VIRTUAL_KEY(ki.virtual_key),
                    wScan: ki.scan_code,
                    dwFlags: KEYBD_EVENT_FLAGS(ki.flags.bits()),
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        },
        NativeInputDescriptor::Mouse(mi) => INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx: mi.dx,
                    dy: mi.dy,
                    // Negative wheel deltas travel as their two's complement.
                    mouseData: mi.mouse_data as u32,
                    dwFlags: MOUSE_EVENT_FLAGS(mi.flags.bits()),
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        },
    }
}
