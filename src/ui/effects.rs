//! Geometry for entrance/exit animations

use ratatui::layout::Rect;

/// Rows the card travels while sliding in
const SLIDE_ROWS: f32 = 2.0;
/// Dialog scale at the start of its pop-in
const POP_MIN_SCALE: f32 = 0.8;
/// Rows the dialog drops while popping in
const POP_DROP_ROWS: f32 = 3.0;

/// Card position while sliding up into place. `t` is eased progress.
#[must_use]
pub fn slide_in(base: Rect, t: f32) -> Rect {
    let offset = ((1.0 - t.clamp(0.0, 1.0)) * SLIDE_ROWS).round() as u16;
    Rect {
        y: base.y.saturating_add(offset),
        ..base
    }
}

/// Dialog frame while popping in (`t` rising) or out (`t` falling).
/// `t` may overshoot 1.0 with spring-like easing.
#[must_use]
pub fn pop(base: Rect, t: f32) -> Rect {
    let scale = POP_MIN_SCALE + (1.0 - POP_MIN_SCALE) * t.clamp(0.0, 1.0);
    let scaled = scale_rect(base, scale);
    let lift = ((1.0 - t).max(0.0) * POP_DROP_ROWS).round() as u16;
    Rect {
        y: scaled.y.saturating_sub(lift),
        ..scaled
    }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}
