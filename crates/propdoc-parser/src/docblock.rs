//! Doc comment (`/** ... */`) lookup and cleanup.

use oxc_ast::ast::Comment;
use oxc_span::Span;
use regex::Regex;
use std::sync::LazyLock;

static GUTTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\* ?").expect("Invalid docblock gutter regex"));

/// The doc comments of one parsed module.
///
/// Built from the comment list the parser records, so comment boundaries
/// come from the lexer rather than from scanning the text for `/*`.
#[derive(Debug)]
pub struct DocComments<'s> {
    source: &'s str,
    /// Full spans (delimiters included), sorted by position
    spans: Vec<Span>,
}

impl<'s> DocComments<'s> {
    pub fn new(source: &'s str, comments: &[Comment]) -> Self {
        Self {
            source,
            spans: comments
                .iter()
                .filter(|comment| comment.is_jsdoc())
                .map(|comment| comment.span)
                .collect(),
        }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Find the doc comment that ends right before `offset`.
    ///
    /// Only whitespace may separate the comment from `offset`. Plain block
    /// comments (`/* ... */`) and line comments are not doc comments.
    pub fn leading(&self, offset: u32) -> Option<String> {
        let preceding = self.spans.partition_point(|span| span.end <= offset);
        let span = self.spans[..preceding].last()?;

        let gap = self.source.get(span.end as usize..offset as usize)?;
        if !gap.trim().is_empty() {
            return None;
        }

        let body = self
            .source
            .get(span.start as usize + 3..(span.end as usize).checked_sub(2)?)?;
        Some(clean_docblock(body))
    }
}

/// Strip the leading `*` gutter from each line and trim the result.
pub fn clean_docblock(body: &str) -> String {
    body.lines()
        .map(|line| GUTTER_RE.replace(line, "").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
