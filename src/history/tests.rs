use crate::model::{ImageSize, StrokeTool, image_point};
use crate::surface::{MaskBuffer, MaskSnapshot, PaintStyle, RasterSurface};

use super::HistoryStack;

fn surface() -> MaskBuffer {
    MaskBuffer::new(ImageSize::new(64, 64).expect("size"), PaintStyle::default())
}

fn stroke(mask: &mut MaskBuffer, history: &mut HistoryStack<MaskSnapshot>, x: f32) {
    mask.paint_point(image_point(x, 32.0), StrokeTool::Brush, 4.0);
    history.commit_from(mask);
}

#[test]
fn commit_advances_index() {
    let mut history = HistoryStack::new(0_u32);
    history.commit(1);
    history.commit(2);
    assert_eq!(history.len(), 3);
    assert_eq!(history.index(), 2);
    assert_eq!(*history.current(), 2);
    assert!(history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn undo_and_redo_stop_at_ends() {
    let mut history = HistoryStack::new(0_u32);
    assert_eq!(history.undo(), None);
    history.commit(1);
    assert_eq!(history.undo(), Some(&0));
    assert_eq!(history.undo(), None);
    assert_eq!(history.redo(), Some(&1));
    assert_eq!(history.redo(), None);
}

#[test]
fn commit_after_undo_discards_redo_entries() {
    let mut history = HistoryStack::new(0_u32);
    history.commit(1);
    history.commit(2);
    history.commit(3);
    history.undo();
    history.undo();
    history.commit(9);
    assert_eq!(history.len(), 3);
    assert_eq!(*history.current(), 9);
    assert!(!history.can_redo());
    assert_eq!(history.undo(), Some(&1));
    assert_eq!(history.undo(), Some(&0));
}

#[test]
fn reset_keeps_only_pristine_entry() {
    let mut history = HistoryStack::new(0_u32);
    history.commit(1);
    history.commit(2);
    assert_eq!(*history.reset(), 0);
    assert_eq!(history.len(), 1);
    assert_eq!(history.index(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn undo_redo_round_trip_restores_pixels() {
    let mut mask = surface();
    let mut history = HistoryStack::new(mask.snapshot());
    for x in [10.0, 25.0, 40.0, 55.0] {
        stroke(&mut mask, &mut history, x);
    }
    for _ in 0..4 {
        let before = mask.snapshot();
        assert!(history.undo_into(&mut mask).expect("undo"));
        assert!(history.redo_into(&mut mask).expect("redo"));
        assert_eq!(mask.snapshot(), before);
        history.undo_into(&mut mask).expect("undo");
    }
    assert!(mask.is_empty());
    assert!(!history.undo_into(&mut mask).expect("undo"));
}

#[test]
fn restoring_does_not_alias_stored_entries() {
    let mut mask = surface();
    let mut history = HistoryStack::new(mask.snapshot());
    stroke(&mut mask, &mut history, 20.0);
    history.undo_into(&mut mask).expect("undo");
    mask.paint_point(image_point(50.0, 50.0), StrokeTool::Brush, 6.0);
    assert!(history.current().alpha().iter().all(|value| *value == 0));
}

#[test]
fn reset_into_clears_surface() {
    let mut mask = surface();
    let mut history = HistoryStack::new(mask.snapshot());
    stroke(&mut mask, &mut history, 20.0);
    stroke(&mut mask, &mut history, 40.0);
    history.reset_into(&mut mask).expect("reset");
    assert!(mask.is_empty());
    assert_eq!(history.len(), 1);
}
