use std::fmt::Write;

use crate::foundation::value::{PropMap, format_number};
use crate::render::backend::{Content, Handle};
use crate::render::scene::SceneRenderer;

/// Serialize the scene's current frame as a standalone SVG document.
///
/// Hidden nodes are kept with `visibility:hidden` so handles stay addressable in the output.
/// `html` nodes become `foreignObject` elements with their markup embedded verbatim.
pub fn to_svg(scene: &SceneRenderer) -> String {
    let size = scene.size();
    let (w, h) = (format_number(size.width), format_number(size.height));
    let mut svg = String::with_capacity(4096);
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    let _ = write!(
        svg,
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        escape_xml(scene.background())
    );
    for &root in scene.roots() {
        write_node(&mut svg, scene, root);
    }
    svg.push_str("</svg>");
    svg
}

fn write_node(svg: &mut String, scene: &SceneRenderer, handle: Handle) {
    let Some(node) = scene.node(handle) else {
        return;
    };
    let tag = if node.kind == "html" {
        "foreignObject"
    } else {
        node.kind.as_str()
    };

    let _ = write!(svg, "<{tag} data-handle=\"{}\"", handle.0);
    for (k, v) in &node.attrs {
        let _ = write!(svg, " {k}=\"{}\"", escape_xml(&v.to_string()));
    }
    let style = style_text(&node.style, node.visible);
    if !style.is_empty() {
        let _ = write!(svg, " style=\"{}\"", escape_xml(&style));
    }
    svg.push('>');

    match &node.content {
        Some(Content::Text(text)) => svg.push_str(&escape_xml(text)),
        Some(Content::Html(markup)) => {
            let _ = write!(
                svg,
                "<div xmlns=\"http://www.w3.org/1999/xhtml\">{markup}</div>"
            );
        }
        None => {}
    }
    for &child in &node.children {
        write_node(svg, scene, child);
    }
    let _ = write!(svg, "</{tag}>");
}

fn style_text(style: &PropMap, visible: bool) -> String {
    let mut out = String::new();
    for (k, v) in style {
        let _ = write!(out, "{k}:{v};");
    }
    if !visible {
        out.push_str("visibility:hidden;");
    }
    out
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
