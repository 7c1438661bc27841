//! Card text parsing
//!
//! Card texts are loose Markdown: paragraphs separated by blank lines,
//! `#` headings, fenced code blocks, `**bold**` and `` `code` `` spans.

use crate::utils::helpers::escape_html;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
    Code { lang: Option<String>, code: String },
}

/// Split text into blocks; an unterminated fence runs to the end of the text
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut code: Option<(Option<String>, Vec<&str>)> = None;

    fn flush(paragraph: &mut Vec<&str>, blocks: &mut Vec<Block>) {
        if !paragraph.is_empty() {
            blocks.push(Block::Paragraph(paragraph.join("\n")));
            paragraph.clear();
        }
    }

    for line in text.lines() {
        let trimmed = line.trim_start();

        if let Some((lang, lines)) = code.as_mut() {
            if trimmed.starts_with("```") {
                blocks.push(Block::Code { lang: lang.take(), code: lines.join("\n") });
                code = None;
            } else {
                lines.push(line);
            }
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("```") {
            flush(&mut paragraph, &mut blocks);
            let lang = rest.trim();
            code = Some(((!lang.is_empty()).then(|| lang.to_string()), Vec::new()));
        } else if trimmed.is_empty() {
            flush(&mut paragraph, &mut blocks);
        } else if let Some(heading) = heading_text(trimmed) {
            flush(&mut paragraph, &mut blocks);
            blocks.push(Block::Heading(heading.to_string()));
        } else {
            paragraph.push(line.trim_end());
        }
    }

    if let Some((lang, lines)) = code {
        blocks.push(Block::Code { lang, code: lines.join("\n") });
    }
    flush(&mut paragraph, &mut blocks);
    blocks
}

fn heading_text(line: &str) -> Option<&str> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    line[hashes..].strip_prefix(' ').map(str::trim)
}

/// Render `**bold**` and `` `code` `` spans of one line, escaping everything else.
/// Unpaired markers are kept as literal text so tags always balance.
pub fn inline_html(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('`') {
            if let Some(end) = after.find('`') {
                out.push_str("<code>");
                out.push_str(&escape_html(&after[..end]));
                out.push_str("</code>");
                rest = &after[end + 1..];
                continue;
            }
        }
        if let Some(after) = rest.strip_prefix("**") {
            if let Some(end) = after.find("**") {
                if end > 0 {
                    out.push_str("<b>");
                    out.push_str(&inline_html(&after[..end]));
                    out.push_str("</b>");
                    rest = &after[end + 2..];
                    continue;
                }
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push_str(&escape_html(c.encode_utf8(&mut [0u8; 4])));
        }
        rest = chars.as_str();
    }

    out
}
