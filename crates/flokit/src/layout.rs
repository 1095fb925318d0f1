use crate::config::{Arrangement, Corner, RenderParams, Side};
use std::f64::consts::PI;

pub const STACK_CLEARANCE: f64 = 60.0; // gap between toggle and first stacked item
pub const PITCH: f64 = 54.0; // stack and grid spacing
pub const FAN_RADIUS: f64 = 80.0;
pub const FAN_SWEEP: f64 = PI / 2.5;

// Canvas allowances
pub const SHADOW_PAD: f64 = 24.0;
pub const OVERSHOOT: f64 = 1.1; // spring overshoot on the way out
pub const HOVER_SCALE: f64 = 1.1;
pub const LABEL_GAP: f64 = 12.0;
/// Upper estimate of one 11 px bold glyph. Runs of very wide glyphs can
/// still exceed it and get clipped at the surface edge.
pub const LABEL_CHAR_WIDTH: f64 = 8.0;
pub const LABEL_PADDING: f64 = 16.0;

/// Estimated width of a label pill, zero for an empty label.
pub fn label_width(text: &str) -> f64 {
    match text.chars().count() {
        0 => 0.0,
        n => n as f64 * LABEL_CHAR_WIDTH + LABEL_PADDING,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_by(&self, offset: Offset, progress: f64) -> Self {
        Self::new(self.x + offset.x * progress, self.y + offset.y * progress)
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Displacement from the toggle button's center. Negative `y` is up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Expanded position of item `index` out of `total`.
pub fn offset(index: usize, total: usize, arrangement: Arrangement, corner: Corner) -> Offset {
    let i = index as f64;
    match arrangement {
        Arrangement::Stack => Offset::new(0.0, -(STACK_CLEARANCE + i * PITCH)),
        Arrangement::Fan => {
            let angle = FAN_SWEEP * i / total.saturating_sub(1).max(1) as f64;
            Offset::new(
                corner.sign() * angle.sin() * FAN_RADIUS,
                -angle.cos() * FAN_RADIUS,
            )
        }
        Arrangement::Grid => {
            let (row, col) = ((index / 2) as f64, (index % 2) as f64);
            Offset::new(corner.sign() * col * PITCH, -(row + 1.0) * PITCH)
        }
    }
}

/// Like [`offset`], but keyed by the raw mode name. Unknown modes collapse
/// every item onto the toggle button.
pub fn offset_for_key(index: usize, total: usize, mode: &str, corner: Corner) -> Offset {
    mode.parse::<Arrangement>()
        .map(|arrangement| offset(index, total, arrangement, corner))
        .unwrap_or(Offset::ZERO)
}

/// Where the toggle center sits inside a container of the given size.
pub fn anchor_in(params: &RenderParams, width: f64, height: f64) -> Point {
    let half = params.size.button / 2.0;
    let x = match params.corner.side() {
        Side::Right => width - params.inset - half,
        Side::Left => params.inset + half,
    };
    Point::new(x, height - params.bottom_offset - half)
}

/// Surface that fits the toggle and every fully expanded item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// Toggle center in surface coordinates.
    pub anchor: Point,
    /// Distance from the anchored screen side to the surface edge.
    pub margin_side: f64,
    pub margin_bottom: f64,
}

impl Canvas {
    /// `label_width` is the widest label pill next to any item.
    ///
    /// Shadow padding on the anchored side and bottom is trimmed when the
    /// requested inset or offset is smaller than it, so the toggle always
    /// lands exactly where configured.
    pub fn compute(params: &RenderParams, count: usize, label_width: f64) -> Self {
        let reach = params.size.button / 2.0 * HOVER_SCALE;
        let label = if params.show_labels && label_width > 0.0 {
            LABEL_GAP + label_width
        } else {
            0.0
        };

        let (mut min_x, mut max_x, mut min_y, mut max_y) = (-reach, reach, -reach, reach);
        for i in 0..count {
            let o = offset(i, count, params.arrangement, params.corner);
            let (x, y) = (o.x * OVERSHOOT, o.y * OVERSHOOT);
            let (left, right) = match params.corner.label_side() {
                Side::Left => (label, 0.0),
                Side::Right => (0.0, label),
            };
            min_x = min_x.min(x - reach - left);
            max_x = max_x.max(x + reach + right);
            min_y = min_y.min(y - reach);
            max_y = max_y.max(y + reach);
        }

        let mut width = (max_x - min_x + 2.0 * SHADOW_PAD).ceil();
        let mut height = (max_y - min_y + 2.0 * SHADOW_PAD).ceil();
        let mut anchor = match params.corner.side() {
            Side::Right => Point::new(width - SHADOW_PAD - max_x, height - SHADOW_PAD - max_y),
            Side::Left => Point::new(SHADOW_PAD - min_x, height - SHADOW_PAD - max_y),
        };

        let half = params.size.button / 2.0;
        let to_side = match params.corner.side() {
            Side::Right => width - anchor.x - half,
            Side::Left => anchor.x - half,
        };
        let to_bottom = height - anchor.y - half;

        let side_trim = (to_side - params.inset).max(0.0);
        width -= side_trim;
        if params.corner.side() == Side::Left {
            anchor.x -= side_trim;
        }
        height -= (to_bottom - params.bottom_offset).max(0.0);

        Self {
            width,
            height,
            anchor,
            margin_side: (params.inset - to_side).max(0.0),
            margin_bottom: (params.bottom_offset - to_bottom).max(0.0),
        }
    }

    /// Whole-pixel surface size.
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.width.ceil() as i32, self.height.ceil() as i32)
    }

    /// Toggle center on a surface the compositor sized `width` x `height`,
    /// measured from the anchored corner.
    pub fn anchor_in(&self, corner: Corner, width: f64, height: f64) -> Point {
        let x = match corner.side() {
            Side::Right => width - (self.width - self.anchor.x),
            Side::Left => self.anchor.x,
        };
        Point::new(x, height - (self.height - self.anchor.y))
    }
}
