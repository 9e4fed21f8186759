//! The meta-block locator: a single forward pass over the document's
//! top-level blocks that decides which code block, if any, holds the
//! metadata, and accumulates every other block's HTML as content.
//!
//! In leading mode the meta block must be the first block, or the second
//! when the first is a heading (that heading's text then becomes a title
//! fallback). In trailing mode the meta block must be the very last block,
//! which takes a one-block lookahead since "last" is only known at the end
//! of the stream. The locator never fails; finding no meta block is a
//! normal outcome.

use crate::events::BlockEvent;

/// Where a captured meta block sat in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaPosition {
    Leading,
    Trailing,
}

/// The single code block selected as the document's meta block.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedMetaBlock {
    pub body: String,
    pub lang: String,
    pub position: MetaPosition,
}

/// Outcome of a full scan: at most one captured block, an optional title
/// fallback, and the concatenated HTML of everything that passed through.
#[derive(Debug, Clone, PartialEq)]
pub struct Located {
    pub captured: Option<CapturedMetaBlock>,
    pub title: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    AfterHeading,
    Resolved,
}

#[derive(Debug)]
pub struct MetaBlockLocator {
    meta_at_end: bool,
    state: State,
    // Trailing-mode lookahead: the one block held back from output until
    // we know whether it is the last.
    pending: Option<BlockEvent>,
    captured: Option<CapturedMetaBlock>,
    title: Option<String>,
    content: String,
}

impl MetaBlockLocator {
    pub fn new(meta_at_end: bool) -> Self {
        Self {
            meta_at_end,
            state: State::Start,
            pending: None,
            captured: None,
            title: None,
            content: String::new(),
        }
    }

    /// Feed the next top-level block, in document order.
    pub fn push(&mut self, event: BlockEvent) {
        if self.meta_at_end {
            self.push_trailing(event);
        } else {
            self.push_leading(event);
        }
    }

    fn push_leading(&mut self, event: BlockEvent) {
        match self.state {
            State::Start => match event {
                BlockEvent::CodeBlock { body, lang, .. } => {
                    self.capture(body, lang, MetaPosition::Leading);
                }
                BlockEvent::Heading { text, html } => {
                    // Tentative: only confirmed if a code block comes next.
                    self.title = Some(text);
                    self.content.push_str(&html);
                    self.state = State::AfterHeading;
                }
                BlockEvent::Other { html } => {
                    self.content.push_str(&html);
                    self.state = State::Resolved;
                }
            },
            State::AfterHeading => match event {
                BlockEvent::CodeBlock { body, lang, .. } => {
                    self.capture(body, lang, MetaPosition::Leading);
                }
                other => {
                    // The heading was not immediately followed by a code
                    // block, so neither a capture nor a title can happen.
                    self.title = None;
                    self.content.push_str(other.html());
                    self.state = State::Resolved;
                }
            },
            State::Resolved => self.content.push_str(event.html()),
        }
    }

    fn push_trailing(&mut self, event: BlockEvent) {
        if let Some(prev) = self.pending.take() {
            self.content.push_str(prev.html());
        }
        self.pending = Some(event);
    }

    fn capture(&mut self, body: String, lang: String, position: MetaPosition) {
        self.captured = Some(CapturedMetaBlock {
            body,
            lang,
            position,
        });
        self.state = State::Resolved;
    }

    /// Signal end of stream and take the results. Flushes the trailing-mode
    /// lookahead and discards an unconfirmed title.
    pub fn finish(mut self) -> Located {
        match self.pending.take() {
            Some(BlockEvent::CodeBlock { body, lang, .. }) => {
                self.capture(body, lang, MetaPosition::Trailing);
            }
            Some(other) => self.content.push_str(other.html()),
            None => {}
        }
        // A title requires the heading to be immediately followed by a
        // captured block; a heading-only document confirms nothing.
        if self.captured.is_none() {
            self.title = None;
        }
        Located {
            captured: self.captured,
            title: self.title,
            content: self.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(text: &str) -> BlockEvent {
        BlockEvent::Heading {
            text: text.to_string(),
            html: format!("<h1>{}</h1>\n", text),
        }
    }

    fn code(body: &str, lang: &str) -> BlockEvent {
        BlockEvent::CodeBlock {
            body: body.to_string(),
            lang: lang.to_string(),
            html: format!("<pre><code>{}</code></pre>\n", body),
        }
    }

    fn para(text: &str) -> BlockEvent {
        BlockEvent::Other {
            html: format!("<p>{}</p>\n", text),
        }
    }

    fn run(meta_at_end: bool, events: Vec<BlockEvent>) -> Located {
        let mut locator = MetaBlockLocator::new(meta_at_end);
        for event in events {
            locator.push(event);
        }
        locator.finish()
    }

    #[test]
    fn test_leading_code_block_first() {
        let got = run(false, vec![code("a: 1\n", "yaml"), para("body")]);
        let captured = got.captured.unwrap();
        assert_eq!(captured.body, "a: 1\n");
        assert_eq!(captured.lang, "yaml");
        assert_eq!(captured.position, MetaPosition::Leading);
        assert_eq!(got.title, None);
        assert_eq!(got.content, "<p>body</p>\n");
    }

    #[test]
    fn test_leading_heading_then_code_confirms_title() {
        let got = run(false, vec![heading("Doc"), code("a: 1\n", ""), para("body")]);
        assert!(got.captured.is_some());
        assert_eq!(got.title.as_deref(), Some("Doc"));
        assert_eq!(got.content, "<h1>Doc</h1>\n<p>body</p>\n");
    }

    #[test]
    fn test_leading_heading_then_paragraph_voids_title() {
        let got = run(
            false,
            vec![heading("Doc"), para("body"), code("a: 1\n", "yaml")],
        );
        assert_eq!(got.captured, None);
        assert_eq!(got.title, None);
        assert!(got.content.contains("<pre><code>"));
    }

    #[test]
    fn test_leading_second_heading_resolves() {
        let got = run(false, vec![heading("One"), heading("Two"), code("a: 1\n", "")]);
        assert_eq!(got.captured, None);
        assert_eq!(got.title, None);
    }

    #[test]
    fn test_leading_paragraph_first_resolves_immediately() {
        let got = run(false, vec![para("body"), code("a: 1\n", "yaml")]);
        assert_eq!(got.captured, None);
        assert_eq!(got.content, "<p>body</p>\n<pre><code>a: 1\n</code></pre>\n");
    }

    #[test]
    fn test_leading_heading_only_document_has_no_title() {
        let got = run(false, vec![heading("Doc")]);
        assert_eq!(got.captured, None);
        assert_eq!(got.title, None);
        assert_eq!(got.content, "<h1>Doc</h1>\n");
    }

    #[test]
    fn test_trailing_last_code_block_captured() {
        let got = run(true, vec![heading("Doc"), para("body"), code("a: 1\n", "json")]);
        let captured = got.captured.unwrap();
        assert_eq!(captured.position, MetaPosition::Trailing);
        assert_eq!(captured.lang, "json");
        assert_eq!(got.title, None);
        assert_eq!(got.content, "<h1>Doc</h1>\n<p>body</p>\n");
    }

    #[test]
    fn test_trailing_mid_document_code_passes_through() {
        let got = run(true, vec![code("a: 1\n", ""), para("body")]);
        assert_eq!(got.captured, None);
        assert_eq!(got.content, "<pre><code>a: 1\n</code></pre>\n<p>body</p>\n");
    }

    #[test]
    fn test_trailing_single_code_block_document() {
        let got = run(true, vec![code("a: 1\n", "")]);
        assert!(got.captured.is_some());
        assert_eq!(got.content, "");
    }

    #[test]
    fn test_trailing_empty_document() {
        let got = run(true, vec![]);
        assert_eq!(got.captured, None);
        assert_eq!(got.content, "");
    }

    #[test]
    fn test_trailing_never_produces_title() {
        let got = run(true, vec![heading("Doc"), code("a: 1\n", "")]);
        assert!(got.captured.is_some());
        assert_eq!(got.title, None);
    }
}
