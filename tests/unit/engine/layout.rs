use super::*;
use crate::render::recording::{DrawCommand, RecordingRenderer};
use crate::scene::model::SlideDef;

fn slide(v: serde_json::Value) -> SlideDef {
    serde_json::from_value(v).unwrap()
}

fn created(rec: &RecordingRenderer) -> Vec<&ObjectSpec> {
    rec.commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Create { spec, .. } => Some(spec),
            _ => None,
        })
        .collect()
}

#[test]
fn bullets_are_centered_below_the_heading() {
    let s = slide(serde_json::json!({
        "layout": "bullets",
        "title": { "content": "Agenda" },
        "bullets": { "content": ["one", "two"] }
    }));
    let mut rec = RecordingRenderer::new();
    let mut builds = BuildCollector::default();
    let top = render_layout(&s.layout, 1080.0, &mut rec, &mut builds).unwrap();
    assert_eq!(top.len(), 2);

    let specs = created(&rec);
    assert_eq!(specs.len(), 4);
    assert_eq!(specs[0].attrs["y"], PropValue::Number(180.0));
    // area = 1080 - 300 - 80 = 700; y = 100 + 80 + 350 - 80 * 1
    assert_eq!(specs[1].attrs["y"], PropValue::Number(450.0));
    assert_eq!(
        specs[2].content,
        Some(Content::Text("• one".to_string()))
    );
    assert_eq!(specs[3].attrs["dy"], PropValue::Number(80.0));
    assert_eq!(specs[3].parent, Some(top[1]));
    assert!(builds.finish().is_empty());
}

#[test]
fn building_bullets_start_hidden_one_step_each() {
    let s = slide(serde_json::json!({
        "layout": "bullets",
        "title": { "content": "Agenda" },
        "bullets": { "content": ["one", { "text": "two", "color": "red" }], "build": true }
    }));
    let mut rec = RecordingRenderer::new();
    let mut builds = BuildCollector::default();
    render_layout(&s.layout, 1080.0, &mut rec, &mut builds).unwrap();

    let specs = created(&rec);
    assert_eq!(specs[3].style["fill"], PropValue::from("red"));
    let ctl = builds.finish();
    assert_eq!(ctl.len(), 2);
    for idx in 0..2 {
        let group = ctl.group(idx).unwrap();
        assert_eq!(group.len(), 1);
        assert!(!rec.is_visible(group[0]));
    }
}

#[test]
fn section_and_title_use_their_own_default_sizes() {
    let mut rec = RecordingRenderer::new();
    let mut builds = BuildCollector::default();
    let section = slide(serde_json::json!({ "layout": "section", "content": "Part II" }));
    render_layout(&section.layout, 1080.0, &mut rec, &mut builds).unwrap();
    assert_eq!(created(&rec)[0].attrs["font-size"], PropValue::Number(100.0));

    let mut rec = RecordingRenderer::new();
    let title = slide(serde_json::json!({
        "layout": "title",
        "title": { "content": "Talk" },
        "subtitle": { "content": ["me", "today"] }
    }));
    let top = render_layout(&title.layout, 1080.0, &mut rec, &mut builds).unwrap();
    let specs = created(&rec);
    assert_eq!(top.len(), 2);
    assert_eq!(specs[0].attrs["font-size"], PropValue::Number(120.0));
    assert_eq!(specs[0].attrs["y"], PropValue::from("45%"));
    assert_eq!(specs.len(), 4);
    assert_eq!(specs[2].attrs["dy"], PropValue::Number(65.0));
}

#[test]
fn html_and_blank_layouts() {
    let mut rec = RecordingRenderer::new();
    let mut builds = BuildCollector::default();
    let html = slide(serde_json::json!({ "layout": "html", "content": "<b>hi</b>" }));
    render_layout(&html.layout, 1080.0, &mut rec, &mut builds).unwrap();
    let specs = created(&rec);
    assert_eq!(specs[0].kind, "html");
    assert_eq!(specs[0].content, Some(Content::Html("<b>hi</b>".to_string())));

    let blank = slide(serde_json::json!({ "layout": "blank" }));
    let top = render_layout(&blank.layout, 1080.0, &mut rec, &mut builds).unwrap();
    assert!(top.is_empty());
}

#[test]
fn text_lines_stack_by_font_size() {
    let obj: ObjectDef = serde_json::from_value(serde_json::json!({
        "type": "text",
        "attrs": { "x": 40, "font-size": "30px" },
        "text": ["a", "b"]
    }))
    .unwrap();
    let mut rec = RecordingRenderer::new();
    let parent = instantiate(&obj, &mut rec).unwrap();

    let specs = created(&rec);
    assert_eq!(specs.len(), 3);
    for span in &specs[1..] {
        assert_eq!(span.kind, "tspan");
        assert_eq!(span.parent, Some(parent));
        assert_eq!(span.attrs["dy"], PropValue::Number(35.0));
        assert_eq!(span.attrs["x"], PropValue::Number(40.0));
    }
}

#[test]
fn html_objects_embed_their_markup() {
    let mut obj = ObjectDef::new("html");
    obj.content = Some("<i>x</i>".to_string());
    let mut rec = RecordingRenderer::new();
    instantiate(&obj, &mut rec).unwrap();
    assert_eq!(
        created(&rec)[0].content,
        Some(Content::Html("<i>x</i>".to_string()))
    );
}
