//! Abstract, platform-independent input events.
//!
//! These are the values a capture/hook subsystem hands to the translator.
//! Each event is a kind-specific payload plus the modifier mask that was
//! active when it was produced.
//!
//! # Event kind ids
//!
//! The capture subsystem numbers event kinds on the wire.  Ids outside the
//! known range decode to [`EventPayload::Unrecognized`] rather than being
//! rejected, so the translator can log and drop them.
//!
//! | Id | Kind           | Id | Kind          |
//! |----|----------------|----|---------------|
//! | 1  | HookEnabled    | 7  | MousePressed  |
//! | 2  | HookDisabled   | 8  | MouseReleased |
//! | 3  | KeyTyped       | 9  | MouseMoved    |
//! | 4  | KeyPressed     | 10 | MouseDragged  |
//! | 5  | KeyReleased    | 11 | MouseWheel    |
//! | 6  | MouseClicked   |    |               |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Modifier and button state accompanying every event.
///
/// Left and right variants of each modifier have separate bits; the
/// predicate helpers treat either side as "held".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModifierMask(pub u16);

impl ModifierMask {
    pub const SHIFT_L: u16 = 1 << 0;
    pub const CTRL_L: u16 = 1 << 1;
    pub const META_L: u16 = 1 << 2;
    pub const ALT_L: u16 = 1 << 3;
    pub const SHIFT_R: u16 = 1 << 4;
    pub const CTRL_R: u16 = 1 << 5;
    pub const META_R: u16 = 1 << 6;
    pub const ALT_R: u16 = 1 << 7;

    pub const SHIFT: u16 = Self::SHIFT_L | Self::SHIFT_R;
    pub const CTRL: u16 = Self::CTRL_L | Self::CTRL_R;
    pub const META: u16 = Self::META_L | Self::META_R;
    pub const ALT: u16 = Self::ALT_L | Self::ALT_R;

    pub const BUTTON1: u16 = 1 << 8;
    pub const BUTTON2: u16 = 1 << 9;
    pub const BUTTON3: u16 = 1 << 10;
    pub const BUTTON4: u16 = 1 << 11;
    pub const BUTTON5: u16 = 1 << 12;

    pub const NUM_LOCK: u16 = 1 << 13;
    pub const CAPS_LOCK: u16 = 1 << 14;
    pub const SCROLL_LOCK: u16 = 1 << 15;

    /// An empty mask (nothing held).
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns a copy of this mask with `bits` added.
    pub const fn with(self, bits: u16) -> Self {
        Self(self.0 | bits)
    }

    /// Returns `true` if any of `bits` is set.
    pub const fn intersects(self, bits: u16) -> bool {
        self.0 & bits != 0
    }

    /// Returns `true` if either Shift key is held.
    pub const fn shift(self) -> bool {
        self.intersects(Self::SHIFT)
    }

    /// Returns `true` if either Ctrl key is held.
    pub const fn ctrl(self) -> bool {
        self.intersects(Self::CTRL)
    }

    /// Returns `true` if either Alt key is held.
    pub const fn alt(self) -> bool {
        self.intersects(Self::ALT)
    }

    /// Returns `true` if either Meta (Win/Cmd/Super) key is held.
    pub const fn meta(self) -> bool {
        self.intersects(Self::META)
    }
}

/// Payload of keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardData {
    /// Logical key identifier (USB HID Usage ID, keyboard page 0x07).
    pub keycode: u16,
    /// Hardware scan code as reported by the capture source, if any.
    /// Informational; synthesis is driven by `keycode`.
    pub rawcode: Option<u16>,
}

/// Payload of mouse button and motion events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseData {
    /// Pixel X.  Negative values occur on monitors left of the primary.
    pub x: i32,
    /// Pixel Y.  Negative values occur on monitors above the primary.
    pub y: i32,
    /// 1-based button ordinal (1 = left, 2 = right, 3 = middle, 4+ = extra).
    /// Motion events carry 0.
    pub button: u16,
}

/// Payload of wheel events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelData {
    pub x: i32,
    pub y: i32,
    /// Number of detents scrolled.
    pub amount: i32,
    /// Signed direction; negative scrolls toward the user.
    pub rotation: i32,
}

/// Kind-specific event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventPayload {
    HookEnabled,
    HookDisabled,
    KeyTyped(KeyboardData),
    KeyPressed(KeyboardData),
    KeyReleased(KeyboardData),
    MouseClicked(MouseData),
    MousePressed(MouseData),
    MouseReleased(MouseData),
    MouseMoved(MouseData),
    MouseDragged(MouseData),
    MouseWheel(WheelData),
    /// A kind id this crate does not know.  Carries the raw id for logging.
    Unrecognized { kind: u32 },
}

impl EventPayload {
    /// Returns the wire id of this payload's kind.
    pub fn raw_kind(&self) -> u32 {
        match self {
            EventPayload::Unrecognized { kind } => *kind,
            other => other.kind().map_or(0, EventKind::as_raw),
        }
    }

    /// Returns the known kind, or `None` for [`EventPayload::Unrecognized`].
    pub fn kind(&self) -> Option<EventKind> {
        Some(match self {
            EventPayload::HookEnabled => EventKind::HookEnabled,
            EventPayload::HookDisabled => EventKind::HookDisabled,
            EventPayload::KeyTyped(_) => EventKind::KeyTyped,
            EventPayload::KeyPressed(_) => EventKind::KeyPressed,
            EventPayload::KeyReleased(_) => EventKind::KeyReleased,
            EventPayload::MouseClicked(_) => EventKind::MouseClicked,
            EventPayload::MousePressed(_) => EventKind::MousePressed,
            EventPayload::MouseReleased(_) => EventKind::MouseReleased,
            EventPayload::MouseMoved(_) => EventKind::MouseMoved,
            EventPayload::MouseDragged(_) => EventKind::MouseDragged,
            EventPayload::MouseWheel(_) => EventKind::MouseWheel,
            EventPayload::Unrecognized { .. } => return None,
        })
    }
}

/// Event kind without payload, numbered as on the capture wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum EventKind {
    HookEnabled = 1,
    HookDisabled = 2,
    KeyTyped = 3,
    KeyPressed = 4,
    KeyReleased = 5,
    MouseClicked = 6,
    MousePressed = 7,
    MouseReleased = 8,
    MouseMoved = 9,
    MouseDragged = 10,
    MouseWheel = 11,
}

impl EventKind {
    /// Decodes a wire id.  Returns `None` for ids outside 1..=11.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1 => Some(EventKind::HookEnabled),
            2 => Some(EventKind::HookDisabled),
            3 => Some(EventKind::KeyTyped),
            4 => Some(EventKind::KeyPressed),
            5 => Some(EventKind::KeyReleased),
            6 => Some(EventKind::MouseClicked),
            7 => Some(EventKind::MousePressed),
            8 => Some(EventKind::MouseReleased),
            9 => Some(EventKind::MouseMoved),
            10 => Some(EventKind::MouseDragged),
            11 => Some(EventKind::MouseWheel),
            _ => None,
        }
    }

    pub fn as_raw(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One abstract input event: payload plus the modifier mask in effect.
///
/// Serializes through [`WireEvent`], so a record with a kind id this crate
/// does not know still decodes, as [`EventPayload::Unrecognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireEvent", into = "WireEvent")]
pub struct AbstractInputEvent {
    pub payload: EventPayload,
    pub mask: ModifierMask,
}

impl AbstractInputEvent {
    pub fn new(payload: EventPayload, mask: ModifierMask) -> Self {
        Self { payload, mask }
    }

    pub fn key_pressed(keycode: u16, mask: ModifierMask) -> Self {
        Self::new(
            EventPayload::KeyPressed(KeyboardData { keycode, rawcode: None }),
            mask,
        )
    }

    pub fn key_released(keycode: u16, mask: ModifierMask) -> Self {
        Self::new(
            EventPayload::KeyReleased(KeyboardData { keycode, rawcode: None }),
            mask,
        )
    }

    pub fn mouse_pressed(x: i32, y: i32, button: u16) -> Self {
        Self::new(
            EventPayload::MousePressed(MouseData { x, y, button }),
            ModifierMask::empty(),
        )
    }

    pub fn mouse_released(x: i32, y: i32, button: u16) -> Self {
        Self::new(
            EventPayload::MouseReleased(MouseData { x, y, button }),
            ModifierMask::empty(),
        )
    }

    pub fn mouse_moved(x: i32, y: i32) -> Self {
        Self::new(
            EventPayload::MouseMoved(MouseData { x, y, button: 0 }),
            ModifierMask::empty(),
        )
    }

    pub fn mouse_wheel(amount: i32, rotation: i32) -> Self {
        Self::new(
            EventPayload::MouseWheel(WheelData {
                x: 0,
                y: 0,
                amount,
                rotation,
            }),
            ModifierMask::empty(),
        )
    }

    /// Shorthand for `self.payload.raw_kind()`.
    pub fn raw_kind(&self) -> u32 {
        self.payload.raw_kind()
    }

    /// Builds an event from a capture record: a raw kind id plus the shared
    /// data block.
    ///
    /// Ids 1..=11 pick the matching payload and read only the fields that
    /// kind uses.  Any other id becomes [`EventPayload::Unrecognized`].
    pub fn from_wire(raw_kind: u32, data: WireData, mask: ModifierMask) -> Self {
        let key = KeyboardData {
            keycode: data.keycode,
            rawcode: data.rawcode,
        };
        let mouse = MouseData {
            x: data.x,
            y: data.y,
            button: data.button,
        };
        let payload = match EventKind::from_raw(raw_kind) {
            Some(EventKind::HookEnabled) => EventPayload::HookEnabled,
            Some(EventKind::HookDisabled) => EventPayload::HookDisabled,
            Some(EventKind::KeyTyped) => EventPayload::KeyTyped(key),
            Some(EventKind::KeyPressed) => EventPayload::KeyPressed(key),
            Some(EventKind::KeyReleased) => EventPayload::KeyReleased(key),
            Some(EventKind::MouseClicked) => EventPayload::MouseClicked(mouse),
            Some(EventKind::MousePressed) => EventPayload::MousePressed(mouse),
            Some(EventKind::MouseReleased) => EventPayload::MouseReleased(mouse),
            Some(EventKind::MouseMoved) => EventPayload::MouseMoved(mouse),
            Some(EventKind::MouseDragged) => EventPayload::MouseDragged(mouse),
            Some(EventKind::MouseWheel) => EventPayload::MouseWheel(WheelData {
                x: data.x,
                y: data.y,
                amount: data.amount,
                rotation: data.rotation,
            }),
            None => EventPayload::Unrecognized { kind: raw_kind },
        };
        Self::new(payload, mask)
    }

    /// Splits the event back into a raw kind id and data block.
    pub fn to_wire(&self) -> (u32, WireData) {
        let data = match self.payload {
            EventPayload::KeyTyped(k) | EventPayload::KeyPressed(k) | EventPayload::KeyReleased(k) => {
                WireData {
                    keycode: k.keycode,
                    rawcode: k.rawcode,
                    ..WireData::default()
                }
            }
            EventPayload::MouseClicked(m)
            | EventPayload::MousePressed(m)
            | EventPayload::MouseReleased(m)
            | EventPayload::MouseMoved(m)
            | EventPayload::MouseDragged(m) => WireData {
                x: m.x,
                y: m.y,
                button: m.button,
                ..WireData::default()
            },
            EventPayload::MouseWheel(w) => WireData {
                x: w.x,
                y: w.y,
                amount: w.amount,
                rotation: w.rotation,
                ..WireData::default()
            },
            EventPayload::HookEnabled
            | EventPayload::HookDisabled
            | EventPayload::Unrecognized { .. } => WireData::default(),
        };
        (self.raw_kind(), data)
    }
}

/// The data block of a capture record, shared by every kind.
///
/// Each kind reads its own subset; fields it does not use are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireData {
    pub keycode: u16,
    pub rawcode: Option<u16>,
    pub x: i32,
    pub y: i32,
    pub button: u16,
    pub amount: i32,
    pub rotation: i32,
}

/// Serialized form of [`AbstractInputEvent`]: `{ kind, mask, data }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEvent {
    pub kind: u32,
    #[serde(default)]
    pub mask: ModifierMask,
    #[serde(default)]
    pub data: WireData,
}

impl From<WireEvent> for AbstractInputEvent {
    fn from(wire: WireEvent) -> Self {
        AbstractInputEvent::from_wire(wire.kind, wire.data, wire.mask)
    }
}

impl From<AbstractInputEvent> for WireEvent {
    fn from(event: AbstractInputEvent) -> Self {
        let (kind, data) = event.to_wire();
        WireEvent {
            kind,
            mask: event.mask,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_decodes_every_known_kind() {
        for raw in 1..=11u32 {
            let kind = EventKind::from_raw(raw).expect("known kind");
            assert_eq!(kind.as_raw(), raw);
        }
    }

    #[test]
    fn test_from_raw_rejects_ids_outside_known_range() {
        for raw in [0u32, 12, 0x42, u32::MAX] {
            assert_eq!(EventKind::from_raw(raw), None, "id {raw:#X}");
        }
    }

    #[test]
    fn test_unrecognized_payload_reports_its_raw_id() {
        let payload = EventPayload::Unrecognized { kind: 0x42 };
        assert_eq!(payload.raw_kind(), 0x42);
        assert_eq!(payload.kind(), None);
    }

    #[test]
    fn test_known_payload_raw_kind_matches_wire_id() {
        let event = AbstractInputEvent::mouse_wheel(1, -1);
        assert_eq!(event.raw_kind(), 11);
        assert_eq!(event.payload.kind(), Some(EventKind::MouseWheel));
    }

    #[test]
    fn test_from_wire_maps_unknown_id_to_unrecognized() {
        let event = AbstractInputEvent::from_wire(0x7F, WireData::default(), ModifierMask::empty());

        assert_eq!(event.payload, EventPayload::Unrecognized { kind: 0x7F });
        assert_eq!(event.raw_kind(), 0x7F);
    }

    #[test]
    fn test_from_wire_reads_only_the_fields_of_its_kind() {
        let data = WireData {
            keycode: 0x04,
            x: 10,
            y: 20,
            button: 2,
            amount: 3,
            rotation: -1,
            ..WireData::default()
        };

        let pressed = AbstractInputEvent::from_wire(7, data, ModifierMask::empty());
        let wheel = AbstractInputEvent::from_wire(11, data, ModifierMask::empty());
        let key = AbstractInputEvent::from_wire(4, data, ModifierMask(ModifierMask::SHIFT_L));

        assert_eq!(
            pressed.payload,
            EventPayload::MousePressed(MouseData { x: 10, y: 20, button: 2 })
        );
        assert_eq!(
            wheel.payload,
            EventPayload::MouseWheel(WheelData { x: 10, y: 20, amount: 3, rotation: -1 })
        );
        assert_eq!(
            key.payload,
            EventPayload::KeyPressed(KeyboardData { keycode: 0x04, rawcode: None })
        );
        assert!(key.mask.shift());
    }

    #[test]
    fn test_to_wire_restores_the_event() {
        let event = AbstractInputEvent::mouse_pressed(-5, 7, 4);

        let (kind, data) = event.to_wire();

        assert_eq!(kind, 7);
        assert_eq!(AbstractInputEvent::from_wire(kind, data, event.mask), event);
    }

    #[test]
    fn test_deserializing_unknown_kind_yields_unrecognized() {
        let text = "kind = 42\n\n[data]\nx = 3\n";

        let event: AbstractInputEvent = toml::from_str(text).expect("decode");

        assert_eq!(event.payload, EventPayload::Unrecognized { kind: 42 });
        assert_eq!(event.mask, ModifierMask::empty());
    }

    #[test]
    fn test_deserializing_known_kind_fills_its_payload() {
        let text = "kind = 9\nmask = 1\n\n[data]\nx = 3\ny = -4\n";

        let event: AbstractInputEvent = toml::from_str(text).expect("decode");

        let expected = AbstractInputEvent::new(
            EventPayload::MouseMoved(MouseData { x: 3, y: -4, button: 0 }),
            ModifierMask(ModifierMask::SHIFT_L),
        );
        assert_eq!(event, expected);
    }

    #[test]
    fn test_shift_predicate_accepts_either_side() {
        assert!(ModifierMask(ModifierMask::SHIFT_L).shift());
        assert!(ModifierMask(ModifierMask::SHIFT_R).shift());
        assert!(!ModifierMask(ModifierMask::CTRL_L | ModifierMask::ALT_R).shift());
    }

    #[test]
    fn test_modifier_predicates_are_independent() {
        let mask = ModifierMask::empty().with(ModifierMask::CTRL_R | ModifierMask::META_L);
        assert!(mask.ctrl());
        assert!(mask.meta());
        assert!(!mask.alt());
        assert!(!mask.shift());
    }

    #[test]
    fn test_button_and_lock_bits_do_not_alias_modifiers() {
        let mask = ModifierMask(
            ModifierMask::BUTTON1
                | ModifierMask::BUTTON5
                | ModifierMask::NUM_LOCK
                | ModifierMask::CAPS_LOCK
                | ModifierMask::SCROLL_LOCK,
        );
        assert!(!mask.shift() && !mask.ctrl() && !mask.alt() && !mask.meta());
    }
}
