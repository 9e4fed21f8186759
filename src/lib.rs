//! Convert Markdown documents into structured metadata and an HTML fragment.
//!
//! The metadata lives in a single "meta block": a code block containing
//! JSON or YAML, placed at the beginning of the document (optionally after
//! one heading) or, with `meta_at_end`, as its very last element.
//!
//! ```markdown
//! # Sample Doc
//!
//!     AmIYaml: true
//!     Tags: [foo, bar, baz]
//!
//! There you are.
//! ```
//!
//! A qualifying meta block is removed from the rendered HTML. If the meta
//! has no `Title` key (any case), the text of a heading immediately
//! preceding the meta block is used as the title. Markdown rendering is
//! done with pulldown-cmark; YAML and JSON decoding with serde_yaml and
//! serde_json.
//!
//! ```rust
//! let res = mdmeta::parse("    Title: Hi\n\nSome *body* text.\n", false).unwrap();
//! assert_eq!(res.meta["Title"], serde_yaml::Value::from("Hi"));
//! assert_eq!(res.content, "<p>Some <em>body</em> text.</p>\n");
//! ```

mod error;
mod events;
mod locator;
mod meta;

pub mod license;

use pulldown_cmark::Options;
use serde::Serialize;

pub use error::{MetaError, ParseError};
pub use events::{scan_blocks, BlockEvent};
pub use locator::{CapturedMetaBlock, Located, MetaBlockLocator, MetaPosition};
pub use meta::MetaMap;

/// The extension set enabled by [`Parser::new`]: tables, footnotes,
/// strikethrough, task lists and smart punctuation.
pub fn common_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION
}

/// A parser-renderer converting Markdown source to metadata and HTML.
#[derive(Debug, Clone)]
pub struct Parser {
    pub meta_at_end: bool,
    pub options: Options,
}

impl Parser {
    /// A parser with the common extension set enabled.
    pub fn new() -> Self {
        Self {
            meta_at_end: false,
            options: common_options(),
        }
    }

    /// A parser with no Markdown extensions.
    pub fn basic() -> Self {
        Self {
            meta_at_end: false,
            options: Options::empty(),
        }
    }

    /// Expect the meta block at the end of the document instead of the
    /// beginning.
    pub fn meta_at_end(mut self, yes: bool) -> Self {
        self.meta_at_end = yes;
        self
    }

    /// Parse `input` into metadata and rendered content.
    ///
    /// A meta-block decode failure does not lose the content: the returned
    /// [`ParseError`] carries a [`ParseResult`] whose content is fully
    /// rendered and whose meta map is empty.
    pub fn parse(&self, input: &str) -> Result<ParseResult, ParseError> {
        let mut locator = MetaBlockLocator::new(self.meta_at_end);
        for block in events::scan_blocks(input, self.options) {
            locator.push(block);
        }
        let located = locator.finish();

        let (body, lang) = match &located.captured {
            Some(captured) => (captured.body.as_str(), captured.lang.as_str()),
            None => ("", ""),
        };
        let mut meta = match meta::decode(body, lang) {
            Ok(meta) => meta,
            Err(error) => {
                return Err(ParseError {
                    result: ParseResult {
                        meta: MetaMap::new(),
                        content: located.content,
                    },
                    error,
                })
            }
        };

        if let Some(title) = located.title {
            if !meta.keys().any(|k| k.eq_ignore_ascii_case("title")) {
                meta.insert("Title".to_string(), serde_yaml::Value::from(title));
            }
        }

        Ok(ParseResult {
            meta,
            content: located.content,
        })
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// The outcome of a parse: the decoded metadata and the rendered HTML
/// with the meta block removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    pub meta: MetaMap,
    pub content: String,
}

/// Parse with the common extension set. Shorthand for
/// `Parser::new().meta_at_end(meta_at_end).parse(input)`.
pub fn parse(input: &str, meta_at_end: bool) -> Result<ParseResult, ParseError> {
    Parser::new().meta_at_end(meta_at_end).parse(input)
}

/// Render Markdown straight to HTML with the common extension set, with
/// no meta-block handling at all.
pub fn render_plain(input: &str) -> String {
    let mut out = String::new();
    let parser = pulldown_cmark::Parser::new_ext(input, common_options());
    pulldown_cmark::html::push_html(&mut out, parser);
    out
}
