//! Native input descriptors.
//!
//! A [`NativeInputDescriptor`] is the OS-shaped value the translator produces
//! and the injector submits.  Field layout and flag values follow the Win32
//! `INPUT` structure (`KEYBDINPUT` / `MOUSEINPUT`), so the Windows adapter is a
//! plain field copy and tests on other hosts assert on the same numbers the OS
//! would see.
//!
//! Reference: <https://learn.microsoft.com/windows/win32/api/winuser/ns-winuser-input>

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Size of one wheel detent in native units (`WHEEL_DELTA`).
pub const WHEEL_DELTA: i32 = 120;

/// `mouseData` value selecting the first extended button.
pub const XBUTTON1: i32 = 0x0001;
/// `mouseData` value selecting the second extended button.
pub const XBUTTON2: i32 = 0x0002;

/// Keyboard flag bitset (`KEYEVENTF_*`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyFlags(pub u32);

impl KeyFlags {
    /// Key-down carries no bit; a descriptor without `KEYUP` is a press.
    pub const KEYDOWN: KeyFlags = KeyFlags(0x0000);
    pub const EXTENDEDKEY: KeyFlags = KeyFlags(0x0001);
    pub const KEYUP: KeyFlags = KeyFlags(0x0002);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: KeyFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// `true` when this describes a key press (the release bit is clear).
    pub const fn is_press(self) -> bool {
        !self.contains(Self::KEYUP)
    }

    pub const fn is_extended(self) -> bool {
        self.contains(Self::EXTENDEDKEY)
    }
}

impl BitOr for KeyFlags {
    type Output = KeyFlags;

    fn bitor(self, rhs: KeyFlags) -> KeyFlags {
        KeyFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyFlags {
    fn bitor_assign(&mut self, rhs: KeyFlags) {
        self.0 |= rhs.0;
    }
}

/// Mouse flag bitset (`MOUSEEVENTF_*`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MouseFlags(pub u32);

impl MouseFlags {
    pub const MOVE: MouseFlags = MouseFlags(0x0001);
    pub const LEFTDOWN: MouseFlags = MouseFlags(0x0002);
    pub const LEFTUP: MouseFlags = MouseFlags(0x0004);
    pub const RIGHTDOWN: MouseFlags = MouseFlags(0x0008);
    pub const RIGHTUP: MouseFlags = MouseFlags(0x0010);
    pub const MIDDLEDOWN: MouseFlags = MouseFlags(0x0020);
    pub const MIDDLEUP: MouseFlags = MouseFlags(0x0040);
    pub const XDOWN: MouseFlags = MouseFlags(0x0080);
    pub const XUP: MouseFlags = MouseFlags(0x0100);
    pub const WHEEL: MouseFlags = MouseFlags(0x0800);
    pub const ABSOLUTE: MouseFlags = MouseFlags(0x8000);

    pub const fn empty() -> Self {
        MouseFlags(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: MouseFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: MouseFlags) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for MouseFlags {
    type Output = MouseFlags;

    fn bitor(self, rhs: MouseFlags) -> MouseFlags {
        MouseFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for MouseFlags {
    fn bitor_assign(&mut self, rhs: MouseFlags) {
        self.0 |= rhs.0;
    }
}

/// Keyboard half of a descriptor (`KEYBDINPUT`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardInput {
    /// Native (Windows Virtual-Key) code.  Zero when the logical key had no mapping.
    pub virtual_key: u16,
    /// Hardware scan code.  Synthesis is by virtual key, so this stays 0.
    pub scan_code: u16,
    pub flags: KeyFlags,
}

/// Mouse half of a descriptor (`MOUSEINPUT`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseInput {
    /// Normalized X (see [`crate::normalize`]).
    pub dx: i32,
    /// Normalized Y.
    pub dy: i32,
    /// Auxiliary data: wheel magnitude for `WHEEL`, extended-button index for
    /// `XDOWN`/`XUP`, otherwise 0.
    pub mouse_data: i32,
    pub flags: MouseFlags,
}

/// One native input record, ready for the injection primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NativeInputDescriptor {
    Keyboard(KeyboardInput),
    Mouse(MouseInput),
}

impl NativeInputDescriptor {
    pub fn as_keyboard(&self) -> Option<&KeyboardInput> {
        match self {
            NativeInputDescriptor::Keyboard(ki) => Some(ki),
            NativeInputDescriptor::Mouse(_) => None,
        }
    }

    pub fn as_mouse(&self) -> Option<&MouseInput> {
        match self {
            NativeInputDescriptor::Mouse(mi) => Some(mi),
            NativeInputDescriptor::Keyboard(_) => None,
        }
    }
}
