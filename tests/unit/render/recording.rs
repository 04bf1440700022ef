use super::*;
use crate::render::backend::Content;

#[test]
fn records_calls_in_order() {
    let mut r = RecordingRenderer::new();
    r.set_background("black").unwrap();
    let h = r
        .create_object(&ObjectSpec::new("rect").attr("x", 10.0))
        .unwrap();
    r.set_visibility(h, false).unwrap();
    r.destroy_object(h).unwrap();

    let cmds = r.commands();
    assert_eq!(cmds.len(), 4);
    assert!(matches!(cmds[0], DrawCommand::SetBackground { .. }));
    assert!(matches!(cmds[1], DrawCommand::Create { handle, .. } if handle == h));
    assert!(matches!(
        cmds[2],
        DrawCommand::SetVisibility { visible: false, .. }
    ));
    assert!(matches!(cmds[3], DrawCommand::Destroy { handle } if handle == h));
}

#[test]
fn destroying_parent_drops_children() {
    let mut r = RecordingRenderer::new();
    let parent = r.create_object(&ObjectSpec::new("text")).unwrap();
    let child = r
        .create_object(
            &ObjectSpec::new("tspan")
                .parent(parent)
                .content(Content::Text("hi".into())),
        )
        .unwrap();
    assert_eq!(r.live_count(), 2);

    r.destroy_object(parent).unwrap();
    assert!(!r.is_live(child));
    assert_eq!(r.live_count(), 0);
}

#[test]
fn calls_on_dead_handles_are_errors() {
    let mut r = RecordingRenderer::new();
    let h = r.create_object(&ObjectSpec::new("rect")).unwrap();
    r.destroy_object(h).unwrap();
    assert!(r.destroy_object(h).is_err());
    assert!(r.set_visibility(h, true).is_err());
}

#[test]
fn visibility_is_tracked() {
    let mut r = RecordingRenderer::new();
    let h = r.create_object(&ObjectSpec::new("rect")).unwrap();
    assert!(r.is_visible(h));
    r.set_visibility(h, false).unwrap();
    assert!(!r.is_visible(h));
    r.set_visibility(h, true).unwrap();
    assert!(r.is_visible(h));
}

#[test]
fn commands_serialize_with_op_tag() {
    let mut r = RecordingRenderer::new();
    r.set_background("navy").unwrap();
    let v = serde_json::to_value(r.commands()).unwrap();
    assert_eq!(v[0]["op"], "set_background");
    assert_eq!(v[0]["color"], "navy");
}
