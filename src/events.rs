//! Adapter over the pulldown-cmark event stream.
//!
//! Groups the engine's flat event sequence into top-level blocks, renders
//! each block to HTML, and classifies it as a heading, a code block, or
//! anything else. The locator only ever sees these coarse block events;
//! nested elements (a code block inside a list, say) stay inside their
//! enclosing block.

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag};

/// One top-level block of the document, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockEvent {
    Heading { text: String, html: String },
    CodeBlock { body: String, lang: String, html: String },
    Other { html: String },
}

impl BlockEvent {
    /// The block's rendered HTML, used when it passes through to content.
    pub fn html(&self) -> &str {
        match self {
            BlockEvent::Heading { html, .. } => html,
            BlockEvent::CodeBlock { html, .. } => html,
            BlockEvent::Other { html } => html,
        }
    }
}

/// Split `input` into classified top-level blocks.
pub fn scan_blocks(input: &str, options: Options) -> Vec<BlockEvent> {
    let mut blocks = Vec::new();
    let mut buf: Vec<Event> = Vec::new();
    let mut depth = 0usize;

    for event in Parser::new_ext(input, options) {
        match &event {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth -= 1,
            _ => {}
        }
        buf.push(event);
        // Depth zero after a push means the block just closed; standalone
        // events like Rule form single-event blocks.
        if depth == 0 {
            blocks.push(classify(std::mem::take(&mut buf)));
        }
    }

    blocks
}

fn classify(events: Vec<Event>) -> BlockEvent {
    enum Kind {
        Heading,
        Code(String),
        Other,
    }

    let kind = match events.first() {
        Some(Event::Start(Tag::Heading { .. })) => Kind::Heading,
        Some(Event::Start(Tag::CodeBlock(kind))) => Kind::Code(fence_language(kind)),
        _ => Kind::Other,
    };

    match kind {
        Kind::Heading => BlockEvent::Heading {
            text: plain_text(&events),
            html: render(&events),
        },
        Kind::Code(lang) => BlockEvent::CodeBlock {
            body: code_body(&events),
            lang,
            html: render(&events),
        },
        Kind::Other => BlockEvent::Other {
            html: render(&events),
        },
    }
}

/// First whitespace-separated token of the fence info string; empty for
/// indented code blocks and bare fences.
fn fence_language(kind: &CodeBlockKind) -> String {
    match kind {
        CodeBlockKind::Fenced(info) => info
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string(),
        CodeBlockKind::Indented => String::new(),
    }
}

fn render(events: &[Event]) -> String {
    let mut out = String::new();
    html::push_html(&mut out, events.iter().cloned());
    out
}

/// Inline text of a heading, with formatting stripped.
fn plain_text(events: &[Event]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text.trim().to_string()
}

fn code_body(events: &[Event]) -> String {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Text(t) => Some(t.as_ref()),
            _ => None,
        })
        .collect()
}
