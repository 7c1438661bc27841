//! Full-theory documents
//!
//! Renders selected sections of the catalog as one Markdown document or as a
//! standalone HTML page. Card texts are CommonMark with tables.

use pulldown_cmark::{html, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use crate::content::Catalog;
use crate::models::{Card, Section};
use crate::utils::helpers::escape_html;

const STYLE: &str = r#"
    body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
        line-height: 1.6;
        max-width: 900px;
        margin: 0 auto;
        padding: 2rem;
        background-color: #f5f5f5;
    }
    h1, h2, h3, h4 { color: #2c3e50; margin-top: 2rem; }
    h1 { border-bottom: 2px solid #3498db; padding-bottom: 0.5rem; }
    pre { background-color: #f8f9fa; padding: 1rem; border-radius: 4px; overflow-x: auto; }
    code { background-color: #f8f9fa; padding: 0.2rem 0.4rem; border-radius: 3px; }
    blockquote { border-left: 4px solid #3498db; margin: 1.5rem 0; padding: 0.5rem 1rem; background-color: #ebf5fb; }
    hr { border: none; border-top: 1px solid #e0e0e0; margin: 2rem 0; }
    a { color: #3498db; text-decoration: none; }
    a:hover { text-decoration: underline; }
"#;

pub fn theory_markdown(title: &str, catalog: &Catalog, sections: &[Section]) -> String {
    let mut doc = format!("# {}\n\n", title);

    for section in sections {
        let deck = catalog.deck(*section);
        if deck.is_empty() {
            continue;
        }
        doc.push_str(&format!("## {}\n\n", section.title()));
        for card in deck {
            push_card_markdown(&mut doc, card);
        }
    }
    doc
}

fn push_card_markdown(doc: &mut String, card: &Card) {
    doc.push_str(&format!("### {}\n\n{}\n\n", card.title, card.theory.trim()));
    if !card.summary.trim().is_empty() {
        for line in card.summary.trim().lines() {
            doc.push_str(&format!("> {}\n", line));
        }
        doc.push('\n');
    }
    if let Some(answer) = card.answer.as_deref() {
        doc.push_str(&format!("#### Ответ\n\n{}\n\n", answer.trim()));
    }
    if let Some(explanation) = card.explanation.as_deref() {
        doc.push_str(&format!("#### Практические примеры\n\n{}\n\n", explanation.trim()));
    }
    doc.push_str("---\n\n");
}

pub fn theory_html(title: &str, catalog: &Catalog, sections: &[Section]) -> String {
    let sections: Vec<Section> = sections
        .iter()
        .copied()
        .filter(|s| !catalog.deck(*s).is_empty())
        .collect();

    let mut body = format!("<h1>{}</h1>\n<nav>\n<ul>\n", escape_html(title));
    for section in &sections {
        body.push_str(&format!(
            "<li><a href=\"#{}\">{}</a></li>\n",
            section.key(),
            escape_html(section.title())
        ));
    }
    body.push_str("</ul>\n</nav>\n");

    for section in &sections {
        body.push_str(&format!(
            "<h2 id=\"{}\">{}</h2>\n",
            section.key(),
            escape_html(section.title())
        ));
        for card in catalog.deck(*section) {
            push_card_html(&mut body, card);
        }
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

fn push_card_html(body: &mut String, card: &Card) {
    body.push_str(&format!("<h3>{}</h3>\n", escape_html(&card.title)));
    push_markdown_html(body, &card.theory);
    if !card.summary.trim().is_empty() {
        body.push_str("<blockquote>\n");
        push_markdown_html(body, card.summary.trim());
        body.push_str("</blockquote>\n");
    }
    if let Some(answer) = card.answer.as_deref() {
        body.push_str("<h4>Ответ</h4>\n");
        push_markdown_html(body, answer);
    }
    if let Some(explanation) = card.explanation.as_deref() {
        body.push_str("<h4>Практические примеры</h4>\n");
        push_markdown_html(body, explanation);
    }
    body.push_str("<hr>\n");
}

/// Card text as HTML. Raw HTML in a card is shown as text, line breaks are
/// kept and headings sit below the card title.
fn push_markdown_html(body: &mut String, text: &str) {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let events = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::SoftBreak => Event::HardBreak,
        Event::Start(Tag::Heading { id, classes, attrs, .. }) => Event::Start(Tag::Heading {
            level: HeadingLevel::H4,
            id,
            classes,
            attrs,
        }),
        Event::End(TagEnd::Heading(_)) => Event::End(TagEnd::Heading(HeadingLevel::H4)),
        other => other,
    });
    html::push_html(body, events);
}
