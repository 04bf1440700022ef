use super::*;
use kurbo::{Point, Rect, Size};

#[test]
fn wide_window_gets_pillarboxed() {
    let vp = fit(Size::new(1920.0, 1080.0), Size::new(2000.0, 900.0));
    assert!((vp.scale - 900.0 / 1080.0).abs() < 1e-12);
    assert!((vp.rect.width() - 1600.0).abs() < 1e-9);
    assert!((vp.rect.x0 - 200.0).abs() < 1e-9);
    assert_eq!(vp.rect.y0, 0.0);
}

#[test]
fn tall_window_gets_letterboxed() {
    let vp = fit(Size::new(1600.0, 900.0), Size::new(800.0, 800.0));
    assert_eq!(vp.scale, 0.5);
    assert_eq!(vp.rect, Rect::new(0.0, 175.0, 800.0, 625.0));
    assert_eq!(vp.to_window(Point::new(1600.0, 900.0)), Point::new(800.0, 625.0));
}

#[test]
fn degenerate_sizes_collapse() {
    let vp = fit(Size::new(0.0, 1080.0), Size::new(800.0, 600.0));
    assert_eq!(vp.scale, 0.0);
    assert_eq!(vp.rect, Rect::new(400.0, 300.0, 400.0, 300.0));
}
