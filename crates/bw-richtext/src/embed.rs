//! Embedded CMS components inside rich text ("blok" nodes).

use std::fmt::Write;

use bw_model::{Asset, RichTextNode};
use serde::Deserialize;
use serde_json::Value;

use crate::escape::escape_html;

/// Payload of an embeddable component, narrowed from the node's untyped
/// `body` attribute.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EmbeddedComponent {
    component: String,
    images: Vec<Asset>,
    caption: Option<String>,
}

/// Render an embedded component node.
///
/// The node's `attrs.body` carries a one-element list of typed component
/// data. Only a small fixed set of component kinds is embeddable (currently
/// the paired before/after image comparison); anything else renders as
/// nothing. Shape failures at any point also render nothing — a partial or
/// broken widget is never emitted.
#[must_use]
pub fn render_embedded(node: &RichTextNode) -> Option<String> {
    let body = node.attrs.get("body")?.as_array()?;
    let first = body.first()?;

    let name = first
        .get("component")
        .and_then(Value::as_str)
        .unwrap_or_default();

    match name {
        "before_after" => render_before_after(first),
        _ => None,
    }
}

fn render_before_after(value: &Value) -> Option<String> {
    let Ok(data) = serde_json::from_value::<EmbeddedComponent>(value.clone()) else {
        tracing::debug!("embedded before_after payload has the wrong shape");
        return None;
    };

    if data.images.len() < 2 {
        tracing::debug!(
            images = data.images.len(),
            "before_after needs two images"
        );
        return None;
    }

    let before = &data.images[0];
    let after = &data.images[1];
    if before.is_empty() || after.is_empty() {
        return None;
    }

    let mut out = String::from(r#"<figure class="before-after">"#);
    write!(
        out,
        r#"<img class="before-after-before" src="{}" alt="{}">"#,
        escape_html(&before.filename),
        escape_html(before.alt_or("Before image"))
    )
    .unwrap();
    write!(
        out,
        r#"<img class="before-after-after" src="{}" alt="{}">"#,
        escape_html(&after.filename),
        escape_html(after.alt_or("After image"))
    )
    .unwrap();
    if let Some(caption) = data.caption.as_deref().filter(|c| !c.is_empty()) {
        write!(out, "<figcaption>{}</figcaption>", escape_html(caption)).unwrap();
    }
    out.push_str("</figure>");
    Some(out)
}
