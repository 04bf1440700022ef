use super::*;

fn props(entries: &[(&str, PropValue)]) -> PropMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn interpolates_linearly_and_finishes() {
    let mut anim = Animator::new();
    let spec = AnimateSpec {
        attrs: props(&[("x", PropValue::Number(100.0))]),
        style: props(&[("fill", PropValue::from("#ffffff"))]),
        duration_ms: 200,
    };
    anim.start(
        Handle(1),
        ms(1000),
        &props(&[("x", PropValue::Number(0.0))]),
        &props(&[("fill", PropValue::from("#000000"))]),
        &spec,
    );

    let frames = anim.tick(ms(1050));
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].attrs["x"], PropValue::Number(25.0));
    assert!(!frames[0].done);

    let frames = anim.tick(ms(1300));
    assert_eq!(frames[0].attrs["x"], PropValue::Number(100.0));
    assert_eq!(frames[0].style["fill"], PropValue::from("#ffffff"));
    assert!(frames[0].done);
    assert!(anim.is_idle());
}

#[test]
fn missing_origins_jump_to_target() {
    let mut anim = Animator::new();
    let spec = AnimateSpec {
        attrs: props(&[("r", PropValue::Number(8.0))]),
        style: PropMap::new(),
        duration_ms: 100,
    };
    anim.start(Handle(2), ms(0), &PropMap::new(), &PropMap::new(), &spec);
    let frames = anim.tick(ms(10));
    assert_eq!(frames[0].attrs["r"], PropValue::Number(8.0));
}

#[test]
fn zero_duration_completes_on_first_tick() {
    let mut anim = Animator::new();
    let spec = AnimateSpec {
        attrs: props(&[("x", PropValue::Number(4.0))]),
        style: PropMap::new(),
        duration_ms: 0,
    };
    anim.start(
        Handle(3),
        ms(0),
        &props(&[("x", PropValue::Number(0.0))]),
        &PropMap::new(),
        &spec,
    );
    let frames = anim.tick(ms(0));
    assert!(frames[0].done);
    assert_eq!(frames[0].attrs["x"], PropValue::Number(4.0));
}

#[test]
fn cancel_and_settle() {
    let mut anim = Animator::new();
    let spec = AnimateSpec {
        attrs: props(&[("x", PropValue::Number(10.0))]),
        style: PropMap::new(),
        duration_ms: 1000,
    };
    let origin = props(&[("x", PropValue::Number(0.0))]);
    anim.start(Handle(1), ms(0), &origin, &PropMap::new(), &spec);
    anim.start(Handle(2), ms(0), &origin, &PropMap::new(), &spec);

    anim.cancel(Handle(1));
    assert!(!anim.is_running(Handle(1)));

    let frames = anim.settle();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].handle, Handle(2));
    assert_eq!(frames[0].attrs["x"], PropValue::Number(10.0));
    assert!(anim.is_idle());
}
