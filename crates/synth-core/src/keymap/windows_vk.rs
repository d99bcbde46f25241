//! HID Usage ID → Windows Virtual-Key (VK) translation table.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h) and USB HID Usage Tables 1.3.
//!
//! `HID_TO_VK` is a compile-time array of 256 VK codes indexed by HID usage.
//! Usages with no VK equivalent hold 0, which is also the "unmapped" sentinel
//! the translator checks for.  Lookup is a single bounds-checked index.

use super::usage;

/// Named Virtual-Key codes referenced by the table and the extended key set.
pub mod vk {
    pub const BACK: u16 = 0x08;
    pub const TAB: u16 = 0x09;
    pub const RETURN: u16 = 0x0D;
    pub const PAUSE: u16 = 0x13;
    pub const CAPITAL: u16 = 0x14;
    pub const ESCAPE: u16 = 0x1B;
    pub const SPACE: u16 = 0x20;
    pub const PRIOR: u16 = 0x21;
    pub const NEXT: u16 = 0x22;
    pub const END: u16 = 0x23;
    pub const HOME: u16 = 0x24;
    pub const LEFT: u16 = 0x25;
    pub const UP: u16 = 0x26;
    pub const RIGHT: u16 = 0x27;
    pub const DOWN: u16 = 0x28;
    pub const SNAPSHOT: u16 = 0x2C;
    pub const INSERT: u16 = 0x2D;
    pub const DELETE: u16 = 0x2E;
    pub const KEY_0: u16 = 0x30;
    pub const KEY_1: u16 = 0x31;
    pub const KEY_A: u16 = 0x41;
    pub const LWIN: u16 = 0x5B;
    pub const RWIN: u16 = 0x5C;
    pub const APPS: u16 = 0x5D;
    pub const NUMPAD0: u16 = 0x60;
    pub const NUMPAD1: u16 = 0x61;
    pub const MULTIPLY: u16 = 0x6A;
    pub const ADD: u16 = 0x6B;
    pub const SUBTRACT: u16 = 0x6D;
    pub const DECIMAL: u16 = 0x6E;
    pub const DIVIDE: u16 = 0x6F;
    pub const F1: u16 = 0x70;
    pub const NUMLOCK: u16 = 0x90;
    pub const SCROLL: u16 = 0x91;
    pub const LSHIFT: u16 = 0xA0;
    pub const RSHIFT: u16 = 0xA1;
    pub const LCONTROL: u16 = 0xA2;
    pub const RCONTROL: u16 = 0xA3;
    pub const LMENU: u16 = 0xA4;
    pub const RMENU: u16 = 0xA5;
    pub const OEM_1: u16 = 0xBA;
    pub const OEM_PLUS: u16 = 0xBB;
    pub const OEM_COMMA: u16 = 0xBC;
    pub const OEM_MINUS: u16 = 0xBD;
    pub const OEM_PERIOD: u16 = 0xBE;
    pub const OEM_2: u16 = 0xBF;
    pub const OEM_3: u16 = 0xC0;
    pub const OEM_4: u16 = 0xDB;
    pub const OEM_5: u16 = 0xDC;
    pub const OEM_6: u16 = 0xDD;
    pub const OEM_7: u16 = 0xDE;
}

/// Navigation/editing keys that need `KEYEVENTF_EXTENDEDKEY` when injected
/// while Shift is held; without it Windows treats them as their numpad twins
/// and Shift+Arrow stops extending the selection.
pub const EXTENDED_NAV_KEYS: [u16; 10] = [
    vk::UP,
    vk::DOWN,
    vk::LEFT,
    vk::RIGHT,
    vk::HOME,
    vk::END,
    vk::PRIOR,
    vk::NEXT,
    vk::INSERT,
    vk::DELETE,
];

/// Returns `true` if `vk_code` is one of [`EXTENDED_NAV_KEYS`].
pub fn is_extended_nav_key(vk_code: u16) -> bool {
    EXTENDED_NAV_KEYS.contains(&vk_code)
}

/// Translates a HID usage to a VK code.  Returns 0 when there is no mapping.
pub fn hid_to_vk(usage: u16) -> u16 {
    HID_TO_VK.get(usize::from(usage)).copied().unwrap_or(0)
}

const HID_TO_VK: [u16; 256] = {
    let mut t = [0u16; 256];

    // ── Letters: usage 0x04..=0x1D → 'A'..='Z' ───────────────────────────────
    let mut i = 0;
    while i < 26 {
        t[usage::KEY_A as usize + i] = vk::KEY_A + i as u16;
        i += 1;
    }

    // ── Digit row: usage 0x1E..=0x26 → '1'..='9', 0x27 → '0' ─────────────────
    let mut i = 0;
    while i < 9 {
        t[usage::DIGIT_1 as usize + i] = vk::KEY_1 + i as u16;
        i += 1;
    }
    t[usage::DIGIT_0 as usize] = vk::KEY_0;

    // ── Function keys: F1..=F12 ──────────────────────────────────────────────
    let mut i = 0;
    while i < 12 {
        t[usage::F1 as usize + i] = vk::F1 + i as u16;
        i += 1;
    }

    // ── Numpad digits: 1..=9 then 0 ──────────────────────────────────────────
    let mut i = 0;
    while i < 9 {
        t[usage::NUMPAD_1 as usize + i] = vk::NUMPAD1 + i as u16;
        i += 1;
    }
    t[usage::NUMPAD_0 as usize] = vk::NUMPAD0;

    // ── Control keys ─────────────────────────────────────────────────────────
    t[usage::ENTER as usize] = vk::RETURN;
    t[usage::ESCAPE as usize] = vk::ESCAPE;
    t[usage::BACKSPACE as usize] = vk::BACK;
    t[usage::TAB as usize] = vk::TAB;
    t[usage::SPACE as usize] = vk::SPACE;
    t[usage::CAPS_LOCK as usize] = vk::CAPITAL;
    t[usage::PRINT_SCREEN as usize] = vk::SNAPSHOT;
    t[usage::SCROLL_LOCK as usize] = vk::SCROLL;
    t[usage::PAUSE as usize] = vk::PAUSE;
    t[usage::CONTEXT_MENU as usize] = vk::APPS;

    // ── Navigation cluster ───────────────────────────────────────────────────
    t[usage::INSERT as usize] = vk::INSERT;
    t[usage::HOME as usize] = vk::HOME;
    t[usage::PAGE_UP as usize] = vk::PRIOR;
    t[usage::DELETE as usize] = vk::DELETE;
    t[usage::END as usize] = vk::END;
    t[usage::PAGE_DOWN as usize] = vk::NEXT;
    t[usage::ARROW_RIGHT as usize] = vk::RIGHT;
    t[usage::ARROW_LEFT as usize] = vk::LEFT;
    t[usage::ARROW_DOWN as usize] = vk::DOWN;
    t[usage::ARROW_UP as usize] = vk::UP;

    // ── Numpad operators ─────────────────────────────────────────────────────
    t[usage::NUM_LOCK as usize] = vk::NUMLOCK;
    t[usage::NUMPAD_DIVIDE as usize] = vk::DIVIDE;
    t[usage::NUMPAD_MULTIPLY as usize] = vk::MULTIPLY;
    t[usage::NUMPAD_SUBTRACT as usize] = vk::SUBTRACT;
    t[usage::NUMPAD_ADD as usize] = vk::ADD;
    // No distinct VK exists; the extended flag would tell them apart.
    t[usage::NUMPAD_ENTER as usize] = vk::RETURN;
    t[usage::NUMPAD_DECIMAL as usize] = vk::DECIMAL;

    // ── Punctuation (US layout positions) ────────────────────────────────────
    t[usage::MINUS as usize] = vk::OEM_MINUS;
    t[usage::EQUAL as usize] = vk::OEM_PLUS;
    t[usage::BRACKET_LEFT as usize] = vk::OEM_4;
    t[usage::BRACKET_RIGHT as usize] = vk::OEM_6;
    t[usage::BACKSLASH as usize] = vk::OEM_5;
    t[usage::SEMICOLON as usize] = vk::OEM_1;
    t[usage::QUOTE as usize] = vk::OEM_7;
    t[usage::BACKQUOTE as usize] = vk::OEM_3;
    t[usage::COMMA as usize] = vk::OEM_COMMA;
    t[usage::PERIOD as usize] = vk::OEM_PERIOD;
    t[usage::SLASH as usize] = vk::OEM_2;

    // ── Modifiers ────────────────────────────────────────────────────────────
    t[usage::CONTROL_LEFT as usize] = vk::LCONTROL;
    t[usage::SHIFT_LEFT as usize] = vk::LSHIFT;
    t[usage::ALT_LEFT as usize] = vk::LMENU;
    t[usage::META_LEFT as usize] = vk::LWIN;
    t[usage::CONTROL_RIGHT as usize] = vk::RCONTROL;
    t[usage::SHIFT_RIGHT as usize] = vk::RSHIFT;
    t[usage::ALT_RIGHT as usize] = vk::RMENU;
    t[usage::META_RIGHT as usize] = vk::RWIN;

    t
};
