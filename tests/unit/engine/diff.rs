use super::*;

fn slide(objects: serde_json::Value) -> SlideDef {
    serde_json::from_value(serde_json::json!({ "layout": "blank", "objects": objects })).unwrap()
}

fn registry(entries: &[(&str, u64)]) -> ObjectRegistry {
    let mut reg = ObjectRegistry::default();
    for &(id, h) in entries {
        reg.put(id, Handle(h), 300);
    }
    reg
}

#[test]
fn animated_match_survives_and_morphs() {
    let reg = registry(&[("x", 1)]);
    let live = [Handle(0), Handle(1), Handle(2)];
    let incoming = slide(serde_json::json!([
        { "type": "rect", "id": "x", "attrs": { "x": 50 } },
        { "type": "circle" }
    ]));

    let plan = plan_transition(&reg, &live, &incoming, true);
    assert_eq!(plan.destroy, vec![Handle(0), Handle(2)]);
    assert_eq!(plan.transitioning.len(), 1);
    assert_eq!(
        plan.steps,
        vec![
            ObjectStep::Animate {
                index: 0,
                id: "x".to_string(),
                entry: RegistryEntry {
                    handle: Handle(1),
                    transition_ms: 300
                },
            },
            ObjectStep::Create { index: 1 },
        ]
    );
    assert_eq!(plan.animated_count(), 1);
    assert_eq!(plan.created(), 1);
}

#[test]
fn non_animated_matches_nothing() {
    let reg = registry(&[("x", 1)]);
    let live = [Handle(1)];
    let incoming = slide(serde_json::json!([{ "type": "rect", "id": "x" }]));

    let plan = plan_transition(&reg, &live, &incoming, false);
    assert!(plan.transitioning.is_empty());
    assert_eq!(plan.destroy, vec![Handle(1)]);
    assert_eq!(plan.steps, vec![ObjectStep::Create { index: 0 }]);
}

#[test]
fn build_gated_objects_are_never_targets() {
    let reg = registry(&[("x", 1)]);
    let live = [Handle(1)];
    let incoming = slide(serde_json::json!([{ "type": "rect", "id": "x", "build": true }]));

    let plan = plan_transition(&reg, &live, &incoming, true);
    assert!(plan.transitioning.is_empty());
    assert_eq!(plan.destroy, vec![Handle(1)]);
    assert_eq!(plan.steps, vec![ObjectStep::Create { index: 0 }]);
}

#[test]
fn ids_missing_from_registry_are_created() {
    let reg = registry(&[("a", 1)]);
    let live = [Handle(1)];
    let incoming = slide(serde_json::json!([{ "type": "rect", "id": "b" }]));

    let plan = plan_transition(&reg, &live, &incoming, true);
    assert_eq!(plan.destroy, vec![Handle(1)]);
    assert_eq!(plan.steps, vec![ObjectStep::Create { index: 0 }]);
}

#[test]
fn unidentified_layout_objects_are_always_destroyed() {
    let reg = registry(&[("x", 5)]);
    let live = [Handle(3), Handle(4), Handle(5)];
    let incoming = slide(serde_json::json!([{ "type": "rect", "id": "x" }]));

    let plan = plan_transition(&reg, &live, &incoming, true);
    assert_eq!(plan.destroy, vec![Handle(3), Handle(4)]);
}
