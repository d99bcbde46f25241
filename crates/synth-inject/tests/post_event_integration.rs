//! End-to-end posting through the recording primitive.
//!
//! Drives `EventPoster` with real translation (Windows VK table, fixed screen
//! size) and checks what reaches the primitive and what gets logged.

use std::sync::Arc;

use synth_core::event::{EventPayload, KeyboardData, MouseData};
use synth_core::keymap::usage;
use synth_core::testing::{count, with_captured_logs};
use synth_core::{
    AbstractInputEvent, EventTranslator, FixedScreenMetrics, KeyFlags, ModifierMask, MouseFlags,
    NativeInputDescriptor, ScreenMetrics, WindowsVkMapper, WireData,
};
use synth_inject::infrastructure::config::SynthConfig;
use synth_inject::infrastructure::input_primitive::mock::RecordingPrimitive;
use synth_inject::infrastructure::screen_metrics::select_screen_metrics;
use synth_inject::{EventPoster, InjectionError, Injector, InputPrimitive, PostError};
use tracing::Level;

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn poster_over(primitive: &Arc<RecordingPrimitive>, screen: Arc<dyn ScreenMetrics>) -> EventPoster {
    EventPoster::new(
        EventTranslator::new(Arc::new(WindowsVkMapper::new()), screen),
        Injector::new(Arc::clone(primitive) as Arc<dyn InputPrimitive>),
    )
}

fn poster_1080p(primitive: &Arc<RecordingPrimitive>) -> EventPoster {
    poster_over(primitive, Arc::new(FixedScreenMetrics::new(1920, 1080)))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_notification_kinds_never_reach_the_primitive() {
    // Arrange
    let primitive = Arc::new(RecordingPrimitive::new());
    let poster = poster_1080p(&primitive);
    let key = KeyboardData { keycode: usage::KEY_A, rawcode: Some(0x1E) };
    let click = MouseData { x: 10, y: 10, button: 1 };
    let events = [
        AbstractInputEvent::new(EventPayload::HookEnabled, ModifierMask::empty()),
        AbstractInputEvent::new(EventPayload::HookDisabled, ModifierMask::empty()),
        AbstractInputEvent::new(EventPayload::KeyTyped(key), ModifierMask::empty()),
        AbstractInputEvent::new(EventPayload::MouseClicked(click), ModifierMask::empty()),
    ];

    // Act
    let (result, logs) = with_captured_logs(|| poster.post_all(&events));

    // Assert
    assert_eq!(result, Ok(()));
    assert!(primitive.submitted().is_empty());
    assert!(logs.is_empty(), "unexpected logs: {logs:?}");
}

#[test]
fn test_unknown_wire_kind_is_dropped_with_a_warning_naming_it() {
    // Arrange
    let primitive = Arc::new(RecordingPrimitive::new());
    let poster = poster_1080p(&primitive);
    let event = AbstractInputEvent::from_wire(0x7F, WireData::default(), ModifierMask::empty());

    // Act
    let (result, logs) = with_captured_logs(|| poster.post(&event));

    // Assert
    assert_eq!(result, Ok(()));
    assert!(primitive.submitted().is_empty());
    assert_eq!(count(&logs, Level::WARN), 1);
    assert!(logs[0].1.contains("0x7F"), "message: {}", logs[0].1);
}

#[test]
fn test_rejected_event_is_logged_once_and_not_retried() {
    // Arrange
    let primitive = Arc::new(RecordingPrimitive::failing(0x5));
    let poster = poster_1080p(&primitive);
    let event = AbstractInputEvent::key_pressed(usage::KEY_A, ModifierMask::empty());

    // Act
    let (result, logs) = with_captured_logs(|| poster.post(&event));

    // Assert
    assert_eq!(
        result,
        Err(PostError::Inject(InjectionError::Rejected { code: 0x5 }))
    );
    assert_eq!(primitive.submitted().len(), 1, "no retry");
    assert_eq!(count(&logs, Level::ERROR), 1);
}

#[test]
fn test_post_event_survives_rejection() {
    let primitive = Arc::new(RecordingPrimitive::failing(0x5));
    let poster = poster_1080p(&primitive);

    let ((), logs) = with_captured_logs(|| {
        poster.post_event(&AbstractInputEvent::mouse_pressed(10, 10, 1));
        poster.post_event(&AbstractInputEvent::mouse_released(10, 10, 1));
    });

    assert_eq!(primitive.submitted().len(), 2);
    assert_eq!(count(&logs, Level::ERROR), 2);
}

#[test]
fn test_unmapped_key_is_injected_with_zero_virtual_key() {
    // Arrange
    let primitive = Arc::new(RecordingPrimitive::new());
    let poster = poster_1080p(&primitive);

    // Act
    let (result, logs) = with_captured_logs(|| {
        poster.post(&AbstractInputEvent::key_released(0xFFFF, ModifierMask::empty()))
    });

    // Assert
    assert_eq!(result, Ok(()));
    let submitted = primitive.submitted();
    assert_eq!(submitted.len(), 1);
    let key = submitted[0].as_keyboard().expect("keyboard descriptor");
    assert_eq!(key.virtual_key, 0);
    assert!(key.flags.contains(KeyFlags::KEYUP));
    assert_eq!(count(&logs, Level::WARN), 1);
}

#[test]
fn test_shift_delete_gesture_reaches_primitive_in_order() {
    // Arrange
    let primitive = Arc::new(RecordingPrimitive::new());
    let poster = poster_1080p(&primitive);
    let shift = ModifierMask(ModifierMask::SHIFT_L);
    let events = [
        AbstractInputEvent::key_pressed(usage::SHIFT_LEFT, shift),
        AbstractInputEvent::key_pressed(usage::DELETE, shift),
        AbstractInputEvent::key_released(usage::DELETE, shift),
        AbstractInputEvent::key_released(usage::SHIFT_LEFT, ModifierMask::empty()),
    ];

    // Act
    let result = poster.post_all(&events);

    // Assert
    assert_eq!(result, Ok(()));
    let keys: Vec<_> = primitive
        .submitted()
        .iter()
        .map(|d| *d.as_keyboard().expect("keyboard descriptor"))
        .collect();
    assert_eq!(keys.len(), 4);
    assert!(keys[0].flags.is_press());
    assert!(!keys[0].flags.is_extended());
    assert!(keys[1].flags.is_press() && keys[1].flags.is_extended());
    assert!(!keys[2].flags.is_press() && keys[2].flags.is_extended());
    assert!(!keys[3].flags.is_press());
}

#[test]
fn test_configured_screen_size_drives_normalization() {
    // Arrange
    let config = SynthConfig::from_toml_str("[screen]\nfixed_width = 1000\nfixed_height = 500\n")
        .expect("parse");
    let screen = select_screen_metrics(&config.screen).expect("configured metrics");
    let primitive = Arc::new(RecordingPrimitive::new());
    let poster = poster_over(&primitive, screen);

    // Act
    poster
        .post(&AbstractInputEvent::mouse_moved(1000, 500))
        .expect("post");

    // Assert
    let submitted = primitive.submitted();
    let NativeInputDescriptor::Mouse(mouse) = submitted[0] else {
        panic!("expected a mouse descriptor");
    };
    assert_eq!(mouse.flags, MouseFlags::ABSOLUTE | MouseFlags::MOVE);
    assert_eq!(mouse.dx, 65537);
    assert_eq!(mouse.dy, 65537);
}

#[test]
fn test_post_all_stops_before_release_when_press_is_rejected() {
    let primitive = Arc::new(RecordingPrimitive::failing(0x5));
    let poster = poster_1080p(&primitive);
    let events = [
        AbstractInputEvent::mouse_pressed(5, 5, 1),
        AbstractInputEvent::mouse_released(5, 5, 1),
    ];

    let result = poster.post_all(&events);

    assert!(matches!(result, Err((0, PostError::Inject(_)))));
    assert_eq!(primitive.submitted().len(), 1);
}
