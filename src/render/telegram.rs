//! Telegram HTML message rendering
//!
//! Messages are built from independent pieces of balanced HTML. Pieces are
//! packed greedily into messages that stay within the length limit; a piece is
//! never cut in the middle of a tag.

use crate::utils::helpers::escape_html;
use super::blocks::{inline_html, parse_blocks, Block};

/// Smallest message length the splitter works with; a code block's tags
/// alone take a good part of it
pub const MIN_MESSAGE_LIMIT: usize = 64;

/// Length the way Telegram counts it (UTF-16 code units)
pub fn message_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Accumulates pieces of a chat reply and splits them into messages
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    limit: usize,
    pieces: Vec<String>,
}

impl MessageBuilder {
    pub fn new(limit: usize) -> Self {
        Self { limit: limit.max(MIN_MESSAGE_LIMIT), pieces: Vec::new() }
    }

    /// Plain text, escaped
    pub fn text(mut self, text: &str) -> Self {
        let escaped = escape_html(text);
        self.push_piece(escaped, |chunk| escape_html(chunk));
        self
    }

    /// Bold plain text
    pub fn bold(mut self, text: &str) -> Self {
        self.push_piece(format!("<b>{}</b>", escape_html(text)), |chunk| {
            format!("<b>{}</b>", escape_html(chunk))
        });
        self
    }

    /// Card text with code blocks, headings and inline formatting
    pub fn rich(mut self, text: &str) -> Self {
        for block in parse_blocks(text) {
            self.push_block(&block);
        }
        self
    }

    /// Bold label followed by rich text
    pub fn section(self, label: &str, text: &str) -> Self {
        self.bold(label).rich(text)
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pack pieces into messages, at least one message is returned
    pub fn build(self) -> Vec<String> {
        let mut messages = Vec::new();
        let mut current = String::new();

        for piece in self.pieces {
            if current.is_empty() {
                current = piece;
            } else if message_len(&current) + 2 + message_len(&piece) <= self.limit {
                current.push_str("\n\n");
                current.push_str(&piece);
            } else {
                messages.push(std::mem::replace(&mut current, piece));
            }
        }
        if !current.is_empty() || messages.is_empty() {
            messages.push(current);
        }
        messages
    }

    fn push_block(&mut self, block: &Block) {
        match block {
            Block::Heading(text) => {
                let rendered = format!("<b>{}</b>", inline_html(text));
                self.push_piece(rendered, |chunk| format!("<b>{}</b>", escape_html(chunk)));
            }
            Block::Paragraph(text) => {
                let rendered = render_lines(text);
                if message_len(&rendered) <= self.limit {
                    self.pieces.push(rendered);
                } else {
                    for part in split_lines_to_fit(text, self.limit, render_lines) {
                        self.push_piece(render_lines(&part), |chunk| escape_html(chunk));
                    }
                }
            }
            Block::Code { lang, code } => {
                let render = |code: &str| render_code(lang.as_deref(), code);
                let rendered = render(code);
                if message_len(&rendered) <= self.limit {
                    self.pieces.push(rendered);
                } else {
                    for part in split_lines_to_fit(code, self.limit, render) {
                        self.push_piece(render(&part), render);
                    }
                }
            }
        }
    }

    /// Push a rendered piece; when it is still too long, re-render the raw
    /// characters in slices with `fallback`
    fn push_piece<F>(&mut self, rendered: String, fallback: F)
    where
        F: Fn(&str) -> String,
    {
        if message_len(&rendered) <= self.limit {
            self.pieces.push(rendered);
            return;
        }
        let raw = strip_tags(&rendered);
        for slice in split_chars_to_fit(&raw, self.limit, &fallback) {
            self.pieces.push(fallback(&slice));
        }
    }
}

fn render_lines(text: &str) -> String {
    text.lines().map(inline_html).collect::<Vec<_>>().join("\n")
}

fn render_code(lang: Option<&str>, code: &str) -> String {
    match lang {
        Some(lang) => format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            escape_html(lang),
            escape_html(code)
        ),
        None => format!("<pre>{}</pre>", escape_html(code)),
    }
}

/// Greedy line grouping; lines that do not fit alone are returned as is and
/// handled by the character fallback
fn split_lines_to_fit<F>(text: &str, limit: usize, render: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    let mut parts = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let candidate = if current.is_empty() {
            line.to_string()
        } else {
            format!("{}\n{}", current, line)
        };
        if message_len(&render(&candidate)) <= limit || current.is_empty() {
            current = candidate;
        } else {
            parts.push(std::mem::replace(&mut current, line.to_string()));
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Character slices whose rendering fits into `limit`
fn split_chars_to_fit<F>(text: &str, limit: usize, render: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    let overhead = message_len(&render(""));
    let budget = limit.saturating_sub(overhead).max(1);

    let mut slices = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for c in text.chars() {
        let mut buf = [0u8; 4];
        let len = message_len(&escape_html(c.encode_utf8(&mut buf)));
        if current_len + len > budget && !current.is_empty() {
            slices.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push(c);
        current_len += len;
    }
    if !current.is_empty() {
        slices.push(current);
    }
    slices
}

/// Recover raw text from rendered HTML
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
