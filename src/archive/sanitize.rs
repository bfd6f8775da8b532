//! Stripping and pretty-printing of archived page markup.

use std::sync::LazyLock;

use scraper::node::Element;
use scraper::{ElementRef, Html, Node, Selector};

// Elements removed before archiving: metadata, scripts and external resources.
const STRIPPED_SELECTOR_STR: &str = "meta, script, link";

static STRIPPED_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(STRIPPED_SELECTOR_STR)
        .expect("Failed to parse stripped-elements selector - this is a bug")
});

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

// Text inside these is emitted verbatim, not entity-escaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["style", "script", "xmp", "noscript"];

/// Removes every `<meta>`, `<script>` and `<link>` element (with its subtree).
pub fn strip_elements(document: &mut Html) {
    let ids: Vec<_> = document
        .select(&STRIPPED_SELECTOR)
        .map(|element| element.id())
        .collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

fn start_tag(element: &Element) -> String {
    let mut tag = format!("<{}", element.name());
    for (name, value) in element.attrs() {
        tag.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
    }
    tag.push('>');
    tag
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    out.push_str(&" ".repeat(depth));
    out.push_str(line);
    out.push('\n');
}

fn render_element(out: &mut String, element: ElementRef<'_>, depth: usize) {
    let value = element.value();
    push_line(out, depth, &start_tag(value));
    if VOID_ELEMENTS.contains(&value.name()) {
        return;
    }
    let raw = RAW_TEXT_ELEMENTS.contains(&value.name());
    for child in element.children() {
        render_child(out, child.value(), ElementRef::wrap(child), depth + 1, raw);
    }
    push_line(out, depth, &format!("</{}>", value.name()));
}

fn render_child(
    out: &mut String,
    node: &Node,
    element: Option<ElementRef<'_>>,
    depth: usize,
    raw: bool,
) {
    match node {
        Node::Doctype(doctype) => push_line(out, depth, &format!("<!DOCTYPE {}>", doctype.name())),
        Node::Comment(comment) => push_line(out, depth, &format!("<!--{}-->", &**comment)),
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                let rendered = if raw {
                    trimmed.to_string()
                } else {
                    escape_text(trimmed)
                };
                push_line(out, depth, &rendered);
            }
        }
        Node::Element(_) => {
            if let Some(element) = element {
                render_element(out, element, depth);
            }
        }
        _ => {}
    }
}

/// Serializes a document one node per line, indenting one space per level.
pub fn prettify(document: &Html) -> String {
    let mut out = String::new();
    for child in document.tree.root().children() {
        render_child(&mut out, child.value(), ElementRef::wrap(child), 0, false);
    }
    out
}

/// Parses a page, strips meta/script/link elements, and pretty-prints the rest.
pub fn sanitize_html(html: &str) -> String {
    let mut document = Html::parse_document(html);
    strip_elements(&mut document);
    prettify(&document)
}
