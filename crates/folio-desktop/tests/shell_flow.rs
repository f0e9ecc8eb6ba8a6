//! Shell Interaction Tests
//!
//! End-to-end flows through the shell: opening, stacking, dragging,
//! closing, muting and resizing.

use folio_desktop::{
    AnimationVariant, AudioSink, FolioConfig, FolioError, FolioResult, LayoutMode, Rect, Shell,
    Size, SoundEffect, Vec2, WindowKind, ZIndex,
};
use proptest::prelude::*;

/// Audio sink that records every clip it was asked to play
#[derive(Default)]
struct RecordingAudio {
    played: Vec<SoundEffect>,
    fail: bool,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) -> FolioResult<()> {
        self.played.push(effect);
        if self.fail {
            return Err(FolioError::PlaybackBlocked(effect));
        }
        Ok(())
    }
}

const VIEWPORT: Size = Size::new(1280.0, 720.0);
const BOX: Size = Size::new(420.0, 360.0);

fn shell() -> Shell<RecordingAudio> {
    Shell::new(FolioConfig::default(), VIEWPORT, RecordingAudio::default())
}

/// Opening windows always stacks the newest on top.
#[test]
fn test_open_order_defines_stacking() {
    let mut shell = shell();
    let mut last: ZIndex = shell.top_z_index();

    for kind in [WindowKind::Tools, WindowKind::AboutMe, WindowKind::Work] {
        let z = shell.open_section(kind, 0.0);
        assert!(z > last, "{:?} got {} after {}", kind, z, last);
        last = z;
    }

    let top = shell.windows().max_by_key(|w| w.z_index()).unwrap();
    assert_eq!(top.kind(), WindowKind::Work);
}

/// Dragging a buried window brings it above every other window.
#[test]
fn test_drag_brings_to_front() {
    let mut shell = shell();
    shell.open_section(WindowKind::AboutMe, 0.0);
    shell.open_section(WindowKind::Work, 0.0);
    shell.open_section(WindowKind::Tools, 0.0);

    let origin = shell.window(WindowKind::AboutMe).unwrap().position();
    assert!(shell.begin_drag(WindowKind::AboutMe, origin + Vec2::new(15.0, 10.0)));

    let about_z = shell.window(WindowKind::AboutMe).unwrap().z_index();
    for window in shell.windows() {
        if window.kind() != WindowKind::AboutMe {
            assert!(about_z > window.z_index());
        }
    }

    // Further moves keep it on top without burning counter values
    let before = shell.top_z_index();
    shell.drag_move(WindowKind::AboutMe, Vec2::new(400.0, 300.0), BOX);
    shell.drag_move(WindowKind::AboutMe, Vec2::new(420.0, 310.0), BOX);
    assert_eq!(shell.top_z_index(), before);
    assert_eq!(shell.window(WindowKind::AboutMe).unwrap().z_index(), before);
}

/// The drag offset is preserved: the grabbed point follows the cursor.
#[test]
fn test_drag_follows_pointer_offset() {
    let mut shell = shell();
    shell.open_section(WindowKind::AboutMe, 0.0);
    let origin = shell.window(WindowKind::AboutMe).unwrap().position();
    assert_eq!(origin, Vec2::new(128.0, 72.0));

    shell.begin_drag(WindowKind::AboutMe, Vec2::new(150.0, 80.0));
    let pos = shell
        .drag_move(WindowKind::AboutMe, Vec2::new(250.0, 180.0), BOX)
        .unwrap();
    assert_eq!(pos, Vec2::new(228.0, 172.0));
}

/// Pointer-up anywhere ends the drag; later moves do nothing.
#[test]
fn test_pointer_up_anywhere_ends_drag() {
    let mut shell = shell();
    shell.open_section(WindowKind::Work, 0.0);
    shell.begin_drag(WindowKind::Work, Vec2::new(520.0, 80.0));
    assert!(shell.end_all_drags());

    let before = shell.window(WindowKind::Work).unwrap().position();
    assert!(shell
        .drag_move(WindowKind::Work, Vec2::new(10.0, 10.0), BOX)
        .is_none());
    assert_eq!(shell.window(WindowKind::Work).unwrap().position(), before);
}

/// Close then reopen starts from the initial fraction of the current viewport.
#[test]
fn test_reopen_resets_position() {
    let mut shell = shell();
    shell.open_section(WindowKind::Tools, 0.0);
    shell.begin_drag(WindowKind::Tools, Vec2::new(650.0, 80.0));
    shell.drag_move(WindowKind::Tools, Vec2::new(100.0, 400.0), BOX);
    shell.end_drag(WindowKind::Tools);

    shell.request_close(WindowKind::Tools, 1000.0);
    assert_eq!(shell.tick(2000.0), vec![WindowKind::Tools]);

    shell.resize(Size::new(2000.0, 1000.0));
    shell.open_section(WindowKind::Tools, 3000.0);
    let window = shell.window(WindowKind::Tools).unwrap();
    assert_eq!(window.position(), Vec2::new(1000.0, 100.0));
    assert!(!window.is_dragging());
}

/// Reopening a window mid-exit replaces it with a fresh window.
#[test]
fn test_reopen_while_closing_replaces_window() {
    let mut shell = shell();
    let first = shell.open_section(WindowKind::Work, 0.0);
    shell.request_close(WindowKind::Work, 500.0);

    let second = shell.open_section(WindowKind::Work, 600.0);
    assert!(second > first);
    let window = shell.window(WindowKind::Work).unwrap();
    assert!(!window.is_closing());
    assert_eq!(window.animation().variant, AnimationVariant::PopIn);

    // The old exit must not unmount the new window
    assert!(shell.tick(10_000.0).is_empty());
    assert!(shell.is_open(WindowKind::Work));
}

/// Muting silences open/close/hover; unmuting plays the confirmation once.
#[test]
fn test_mute_gates_sounds() {
    let mut shell = shell();
    shell.open_section(WindowKind::Tools, 0.0);
    shell.hover(WindowKind::Tools);
    assert_eq!(
        shell.audio().played,
        vec![SoundEffect::Open, SoundEffect::Hover]
    );

    assert!(shell.toggle_mute());
    shell.hover(WindowKind::Tools);
    shell.open_section(WindowKind::Work, 0.0);
    shell.request_close(WindowKind::Work, 100.0);
    assert_eq!(shell.audio().played.len(), 2);

    assert!(!shell.toggle_mute());
    assert_eq!(shell.audio().played.len(), 3);
    assert_eq!(shell.audio().played[2], SoundEffect::MuteToggle);

    // Muting again plays nothing
    shell.toggle_mute();
    assert_eq!(shell.audio().played.len(), 3);
}

/// Only the Tools window has hover sounds, and only while mounted.
#[test]
fn test_hover_sound_scope() {
    let mut shell = shell();
    shell.hover(WindowKind::Tools);
    shell.open_section(WindowKind::AboutMe, 0.0);
    shell.hover(WindowKind::AboutMe);
    assert_eq!(shell.audio().played, vec![SoundEffect::Open]);
}

/// Blocked playback never interrupts window behavior.
#[test]
fn test_blocked_audio_is_silent() {
    let audio = RecordingAudio {
        fail: true,
        ..Default::default()
    };
    let mut shell = Shell::new(FolioConfig::default(), VIEWPORT, audio);

    shell.open_section(WindowKind::AboutMe, 0.0);
    assert!(shell.is_open(WindowKind::AboutMe));
    assert!(shell.request_close(WindowKind::AboutMe, 100.0));
    assert_eq!(shell.tick(400.0), vec![WindowKind::AboutMe]);
    assert_eq!(shell.audio().played.len(), 2);
}

/// Crossing the breakpoint switches the variant used by the next close,
/// without closing or moving the window.
#[test]
fn test_resize_switches_variant_on_next_transition() {
    let mut shell = shell();
    shell.open_section(WindowKind::Work, 0.0);
    let position = shell.window(WindowKind::Work).unwrap().position();

    assert_eq!(shell.resize(Size::new(600.0, 900.0)), LayoutMode::Mobile);
    let window = shell.window(WindowKind::Work).unwrap();
    assert!(!window.is_closing());
    assert_eq!(window.position(), position);
    assert_eq!(window.animation().variant, AnimationVariant::PopIn);
    assert_eq!(window.layout(), LayoutMode::Mobile);

    shell.request_close(WindowKind::Work, 1000.0);
    assert_eq!(
        shell.window(WindowKind::Work).unwrap().animation().variant,
        AnimationVariant::PopOutMobile
    );

    shell.tick(2000.0);
    shell.open_section(WindowKind::Work, 3000.0);
    assert_eq!(
        shell.window(WindowKind::Work).unwrap().animation().variant,
        AnimationVariant::PopInMobile
    );
}

/// Resizing does not re-clamp an open window.
#[test]
fn test_resize_does_not_reclamp() {
    let mut shell = shell();
    shell.open_section(WindowKind::Tools, 0.0);
    shell.resize(Size::new(500.0, 400.0));
    let window = shell.window(WindowKind::Tools).unwrap();
    assert_eq!(window.position(), Vec2::new(640.0, 72.0));

    // The next drag pulls it back inside
    let grab = window.position() + Vec2::new(10.0, 10.0);
    shell.begin_drag(WindowKind::Tools, grab);
    let pos = shell
        .drag_move(WindowKind::Tools, grab, Size::new(200.0, 150.0))
        .unwrap();
    assert_eq!(pos, Vec2::new(300.0, 72.0));
}

fn pointer() -> impl Strategy<Value = Vec2> {
    (-3000.0f32..3000.0, -3000.0f32..3000.0).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    /// Every intermediate drag position keeps the whole box on screen
    #[test]
    fn drag_sequence_stays_in_viewport(
        grab in (0.0f32..400.0, 0.0f32..28.0),
        moves in prop::collection::vec((pointer(), 50.0f32..1200.0, 50.0f32..700.0), 1..40),
    ) {
        let mut shell = shell();
        shell.open_section(WindowKind::Work, 0.0);
        let origin = shell.window(WindowKind::Work).unwrap().position();
        shell.begin_drag(WindowKind::Work, origin + Vec2::new(grab.0, grab.1));

        for (p, bw, bh) in moves {
            let box_size = Size::new(bw, bh);
            let pos = shell.drag_move(WindowKind::Work, p, box_size).unwrap();
            let rect = Rect::from_pos_size(pos, box_size);
            prop_assert!(rect.fits_within(VIEWPORT), "{:?} escaped the viewport", rect);
        }
    }

    /// Any interleaving of opens and drags keeps z-indices unique and
    /// leaves the last-touched window on top
    #[test]
    fn last_interaction_wins(ops in prop::collection::vec((0usize..3, any::<bool>()), 1..30)) {
        let mut shell = shell();
        let mut last = None;
        for (k, drag) in ops {
            let kind = WindowKind::all()[k];
            if drag && shell.is_open(kind) {
                let origin = shell.window(kind).unwrap().position();
                shell.begin_drag(kind, origin);
                shell.drag_move(kind, origin, BOX);
                shell.end_drag(kind);
            } else {
                shell.open_section(kind, 0.0);
            }
            last = Some(kind);
        }

        let mut zs: Vec<ZIndex> = shell.windows().map(|w| w.z_index()).collect();
        let top = shell.windows().max_by_key(|w| w.z_index()).map(|w| w.kind());
        prop_assert_eq!(top, last);
        zs.sort_unstable();
        zs.dedup();
        prop_assert_eq!(zs.len(), shell.windows().count());
    }
}
