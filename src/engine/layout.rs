use crate::engine::builds::BuildCollector;
use crate::foundation::error::VitalityResult;
use crate::foundation::value::PropValue;
use crate::render::backend::{Content, Handle, ObjectSpec, Renderer};
use crate::scene::model::{
    Build, BulletsDef, HeadingDef, LayoutDef, ObjectDef, SubtitleDef, TextDef,
};

const SECTION_FONT_SIZE: f64 = 100.0;
const TITLE_FONT_SIZE: f64 = 120.0;
const LINE_GAP: f64 = 5.0;

/// Draw the layout part of a slide. Returns the top-level handles created.
///
/// Layout objects carry no ids and never take part in transitions. Bullet items of a building
/// list are registered with `builds` before any free-form object.
pub(crate) fn render_layout<R: Renderer>(
    layout: &LayoutDef,
    canvas_height: f64,
    renderer: &mut R,
    builds: &mut BuildCollector,
) -> VitalityResult<Vec<Handle>> {
    match layout {
        LayoutDef::Bullets { title, bullets } => {
            render_bullets(title, bullets, canvas_height, renderer, builds)
        }
        LayoutDef::Html { content } => {
            let spec = ObjectSpec::new("html")
                .attr("x", 0.0)
                .attr("y", 0.0)
                .attr("width", "100%")
                .attr("height", "100%")
                .style("zoom", "220%")
                .content(Content::Html(content.clone()));
            Ok(vec![renderer.create_object(&spec)?])
        }
        LayoutDef::Section(text) => {
            let size = text.size_or(SECTION_FONT_SIZE);
            let spec =
                centered_text(text, size, "50%").content(Content::Text(text.content.clone()));
            Ok(vec![renderer.create_object(&spec)?])
        }
        LayoutDef::Title { title, subtitle } => render_title(title, subtitle, renderer),
        LayoutDef::Blank => Ok(Vec::new()),
    }
}

fn centered_text(text: &TextDef, size: f64, y: &str) -> ObjectSpec {
    ObjectSpec::new("text")
        .attr("x", "50%")
        .attr("y", y)
        .attr("dominant-baseline", "middle")
        .attr("text-anchor", "middle")
        .attr("font-size", size)
        .attr("font-family", text.font.as_str())
        .style("fill", text.color.as_str())
}

fn render_title<R: Renderer>(
    title: &TextDef,
    subtitle: &SubtitleDef,
    renderer: &mut R,
) -> VitalityResult<Vec<Handle>> {
    let size = title.size_or(TITLE_FONT_SIZE);
    let heading = renderer.create_object(
        &centered_text(title, size, "45%").content(Content::Text(title.content.clone())),
    )?;

    let sub = ObjectSpec::new("text")
        .attr("x", "50%")
        .attr("y", "60%")
        .attr("dominant-baseline", "middle")
        .attr("text-anchor", "middle")
        .attr("font-size", subtitle.size)
        .attr("font-family", subtitle.font.as_str())
        .style("fill", subtitle.color.as_str());
    let sub = renderer.create_object(&sub)?;
    for line in &subtitle.content {
        let span = ObjectSpec::new("tspan")
            .parent(sub)
            .attr("x", "50%")
            .attr("dy", subtitle.size + LINE_GAP)
            .content(Content::Text(line.clone()));
        renderer.create_object(&span)?;
    }
    Ok(vec![heading, sub])
}

fn render_bullets<R: Renderer>(
    title: &HeadingDef,
    bullets: &BulletsDef,
    canvas_height: f64,
    renderer: &mut R,
    builds: &mut BuildCollector,
) -> VitalityResult<Vec<Handle>> {
    let heading = ObjectSpec::new("text")
        .attr("x", title.padding_left)
        .attr("y", title.padding_top + title.size)
        .attr("font-size", title.size)
        .attr("font-family", title.font.as_str())
        .attr("fill", title.color.as_str())
        .content(Content::Text(title.content.clone()));
    let heading = renderer.create_object(&heading)?;

    // Center the list in the area below the heading.
    let area = canvas_height - title.padding_top * 3.0 - title.size;
    let item_height = bullets.size + bullets.spacing;
    let y = title.padding_top + title.size + area / 2.0
        - item_height * (bullets.content.len() as f64 / 2.0);

    let list = ObjectSpec::new("text")
        .attr("x", bullets.padding_left)
        .attr("y", y)
        .attr("dominant-baseline", "middle")
        .attr("font-size", bullets.size)
        .attr("font-family", bullets.font.as_str())
        .style("fill", bullets.color.as_str());
    let list = renderer.create_object(&list)?;

    for item in &bullets.content {
        let text = if item.text().is_empty() { " " } else { item.text() };
        let span = ObjectSpec::new("tspan")
            .parent(list)
            .attr("x", bullets.padding_left)
            .attr("dy", item_height)
            .style("fill", item.color().unwrap_or(&bullets.color))
            .content(Content::Text(format!("{}{text}", bullets.bullet)));
        let span = renderer.create_object(&span)?;
        if bullets.build {
            renderer.set_visibility(span, false)?;
            builds.push(Build::Step, span);
        }
    }
    Ok(vec![heading, list])
}

/// Draw one free-form object, including its text lines or embedded markup.
pub(crate) fn instantiate<R: Renderer>(
    obj: &ObjectDef,
    renderer: &mut R,
) -> VitalityResult<Handle> {
    let mut spec = ObjectSpec::new(obj.kind.as_str());
    spec.attrs = obj.attrs.clone();
    spec.style = obj.style.clone();
    if obj.kind == "html" {
        spec.content = Some(Content::Html(obj.content.clone().unwrap_or_default()));
        return renderer.create_object(&spec);
    }

    let handle = renderer.create_object(&spec)?;
    if let Some(lines) = &obj.text {
        let font_size = obj
            .attrs
            .get("font-size")
            .and_then(PropValue::as_f64)
            .unwrap_or(0.0);
        for line in lines {
            let mut span = ObjectSpec::new("tspan")
                .parent(handle)
                .attr("dy", font_size + LINE_GAP)
                .content(Content::Text(line.clone()));
            if let Some(x) = obj.attrs.get("x") {
                span = span.attr("x", x.clone());
            }
            renderer.create_object(&span)?;
        }
    }
    Ok(handle)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/layout.rs"]
mod tests;
