use super::*;
use crate::render::backend::ObjectSpec;
use crate::render::recording::RecordingRenderer;

fn handles(r: &mut RecordingRenderer, n: usize) -> Vec<Handle> {
    (0..n)
        .map(|_| r.create_object(&ObjectSpec::new("rect")).unwrap())
        .collect()
}

#[test]
fn steps_get_their_own_groups_in_order() {
    let mut r = RecordingRenderer::new();
    let h = handles(&mut r, 3);
    let mut c = BuildCollector::default();
    c.push(Build::Step, h[0]);
    c.push(Build::Immediate, h[1]);
    c.push(Build::Step, h[2]);
    let b = c.finish();
    assert_eq!(b.len(), 2);
    assert_eq!(b.group(0), Some(&[h[0]][..]));
    assert_eq!(b.group(1), Some(&[h[2]][..]));
}

#[test]
fn keyed_groups_replay_in_ascending_order() {
    let mut r = RecordingRenderer::new();
    let h = handles(&mut r, 4);
    let mut c = BuildCollector::default();
    c.push(Build::Group(5), h[0]);
    c.push(Build::Group(2), h[1]);
    c.push(Build::Group(5), h[2]);
    c.push(Build::Group(2), h[3]);
    let b = c.finish();
    assert_eq!(b.len(), 2);
    assert_eq!(b.group(0), Some(&[h[1], h[3]][..]));
    assert_eq!(b.group(1), Some(&[h[0], h[2]][..]));
}

#[test]
fn step_after_keyed_group_goes_last() {
    let mut r = RecordingRenderer::new();
    let h = handles(&mut r, 3);
    let mut c = BuildCollector::default();
    c.push(Build::Group(3), h[0]);
    c.push(Build::Step, h[1]);
    c.push(Build::Group(1), h[2]);
    let b = c.finish();
    assert_eq!(b.len(), 3);
    assert_eq!(b.group(0), Some(&[h[2]][..]));
    assert_eq!(b.group(1), Some(&[h[0]][..]));
    assert_eq!(b.group(2), Some(&[h[1]][..]));
}

#[test]
fn reveal_and_hide_move_one_step() {
    let mut r = RecordingRenderer::new();
    let h = handles(&mut r, 2);
    let mut c = BuildCollector::default();
    c.push(Build::Step, h[0]);
    c.push(Build::Step, h[1]);
    let mut b = c.finish();

    assert!(!b.hide_last(&mut r).unwrap());
    assert!(b.reveal_next(&mut r).unwrap());
    assert!(b.reveal_next(&mut r).unwrap());
    assert!(b.is_complete());
    assert!(!b.reveal_next(&mut r).unwrap());
    assert_eq!(b.index(), 2);

    assert!(b.hide_last(&mut r).unwrap());
    assert_eq!(b.index(), 1);
    assert!(r.is_visible(h[0]));
    assert!(!r.is_visible(h[1]));
}

#[test]
fn restore_reveals_prefix_and_clamps() {
    let mut r = RecordingRenderer::new();
    let h = handles(&mut r, 3);
    let mut c = BuildCollector::default();
    for &x in &h {
        r.set_visibility(x, false).unwrap();
        c.push(Build::Step, x);
    }
    let mut b = c.finish();
    b.restore(2, &mut r).unwrap();
    assert_eq!(b.index(), 2);
    assert!(r.is_visible(h[0]) && r.is_visible(h[1]) && !r.is_visible(h[2]));

    let mut c = BuildCollector::default();
    c.push(Build::Step, h[2]);
    let mut b = c.finish();
    b.restore(9, &mut r).unwrap();
    assert_eq!(b.index(), 1);
}

#[test]
fn failed_hide_keeps_the_index() {
    let mut r = RecordingRenderer::new();
    let h = handles(&mut r, 2);
    let mut c = BuildCollector::default();
    for &x in &h {
        c.push(Build::Step, x);
    }
    let mut b = c.finish();
    b.restore(2, &mut r).unwrap();
    r.destroy_object(h[1]).unwrap();

    assert!(b.hide_last(&mut r).is_err());
    assert_eq!(b.index(), 2);
}
