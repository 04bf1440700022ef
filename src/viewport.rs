//! Fitting the deck's design resolution into a host window.

/// Placement of the deck canvas inside a window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Design units to window pixels.
    pub scale: f64,
    /// Canvas rectangle in window coordinates, centered on both axes.
    pub rect: kurbo::Rect,
}

impl Viewport {
    /// Map a point in design units to window coordinates.
    pub fn to_window(&self, p: kurbo::Point) -> kurbo::Point {
        self.rect.origin() + (p.to_vec2() * self.scale)
    }
}

/// Largest canvas with the aspect ratio of `design` that fits in `window`, letterboxed.
///
/// Degenerate sizes yield a zero scale and an empty rectangle at the window center.
pub fn fit(design: kurbo::Size, window: kurbo::Size) -> Viewport {
    let valid = |s: kurbo::Size| s.width > 0.0 && s.height > 0.0 && s.is_finite();
    let scale = if valid(design) && valid(window) {
        (window.width / design.width).min(window.height / design.height)
    } else {
        0.0
    };
    let canvas = design * scale;
    let origin = kurbo::Point::new(
        (window.width - canvas.width) / 2.0,
        (window.height - canvas.height) / 2.0,
    );
    Viewport {
        scale,
        rect: kurbo::Rect::from_origin_size(origin, canvas),
    }
}

#[cfg(test)]
#[path = "../tests/unit/viewport.rs"]
mod tests;
