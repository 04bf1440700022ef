use std::collections::BTreeSet;

use crate::foundation::error::{VitalityError, VitalityResult};
use crate::scene::model::{Build, DeckDef, LayoutDef, ObjectDef, SlideDef};

/// Check the invariants the engine relies on.
///
/// Object ids must be unique within a slide (across slides they are free to repeat; that is how
/// identity matching works). Build keys start at 1.
pub(crate) fn validate_deck(def: &DeckDef) -> VitalityResult<()> {
    if def.slides.is_empty() {
        return Err(VitalityError::validation("deck must contain at least one slide"));
    }
    if !(def.size.width.is_finite() && def.size.width > 0.0)
        || !(def.size.height.is_finite() && def.size.height > 0.0)
    {
        return Err(VitalityError::validation(
            "deck size width/height must be finite and > 0",
        ));
    }

    for (name, &idx) in &def.slide_ids {
        if name.is_empty() {
            return Err(VitalityError::validation("slide_ids names must be non-empty"));
        }
        if idx >= def.slides.len() {
            return Err(VitalityError::validation(format!(
                "slide_ids entry '{name}' points at slide {idx}, but the deck has {} slides",
                def.slides.len()
            )));
        }
    }

    for (idx, slide) in def.slides.iter().enumerate() {
        validate_slide(idx, slide)?;
    }
    Ok(())
}

fn validate_slide(idx: usize, slide: &SlideDef) -> VitalityResult<()> {
    match &slide.layout {
        LayoutDef::Bullets { title, bullets } => {
            let sizes = [
                title.size,
                title.padding_left,
                title.padding_top,
                bullets.size,
                bullets.spacing,
                bullets.padding_left,
            ];
            if !sizes.iter().all(|v| v.is_finite()) {
                return Err(VitalityError::validation(format!(
                    "slide {idx}: bullets layout metrics must be finite"
                )));
            }
        }
        LayoutDef::Section(text) | LayoutDef::Title { title: text, .. } => {
            if text.size.is_some_and(|s| !s.is_finite() || s <= 0.0) {
                return Err(VitalityError::validation(format!(
                    "slide {idx}: font size must be finite and > 0"
                )));
            }
        }
        LayoutDef::Html { .. } | LayoutDef::Blank => {}
    }

    let mut ids = BTreeSet::new();
    for (obj_idx, obj) in slide.objects.iter().enumerate() {
        validate_object(idx, obj_idx, obj)?;
        if let Some(id) = &obj.id
            && !ids.insert(id.as_str())
        {
            return Err(VitalityError::validation(format!(
                "slide {idx}: duplicate object id '{id}'"
            )));
        }
    }
    Ok(())
}

fn validate_object(slide: usize, idx: usize, obj: &ObjectDef) -> VitalityResult<()> {
    if obj.kind.trim().is_empty() {
        return Err(VitalityError::validation(format!(
            "slide {slide} object {idx}: type must be non-empty"
        )));
    }
    if obj.id.as_deref().is_some_and(str::is_empty) {
        return Err(VitalityError::validation(format!(
            "slide {slide} object {idx}: id must be non-empty when set"
        )));
    }
    if obj.build == Build::Group(0) {
        return Err(VitalityError::validation(format!(
            "slide {slide} object {idx}: build group keys start at 1"
        )));
    }
    if let Some(len) = obj.transition_length
        && !(len.is_finite() && len >= 0.0)
    {
        return Err(VitalityError::validation(format!(
            "slide {slide} object {idx}: transition_length must be finite and >= 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/validate.rs"]
mod tests;
