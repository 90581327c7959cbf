//! Markdown-to-HTML compilation with element style overrides.
//!
//! Compilation delegates to `pulldown-cmark`. Where the [`StyleMap`]
//! overrides an element kind, the opening tag is rewritten with the
//! configured class attribute; everything else passes through the stock
//! HTML writer untouched. Closing tags are always left to the writer, so
//! output stays balanced regardless of which kinds are overridden.

use pulldown_cmark::{html, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

use crate::style::{ElementKind, StyleMap};

/// Compile a document body to HTML, applying the given style overrides.
pub fn compile_body(body: &str, styles: &StyleMap) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(body, options);

    let events = parser.map(|event| rewrite_event(event, styles));

    let mut output = String::with_capacity(body.len() * 2);
    html::push_html(&mut output, events);
    output
}

/// Rewrite a single parser event according to the style overrides.
fn rewrite_event<'a>(event: Event<'a>, styles: &StyleMap) -> Event<'a> {
    match event {
        Event::Start(Tag::Heading {
            level,
            id,
            classes,
            attrs,
        }) => match styles.class_for(ElementKind::from_heading(level)) {
            Some(class) => {
                let n = heading_number(level);
                Event::Html(format!("<h{n} class=\"{class}\">").into())
            }
            None => Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }),
        },
        Event::Start(Tag::Paragraph) => match styles.class_for(ElementKind::Paragraph) {
            Some(class) => Event::Html(format!("<p class=\"{class}\">").into()),
            None => Event::Start(Tag::Paragraph),
        },
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => match styles.class_for(ElementKind::Link) {
            Some(class) => {
                let mut tag = format!(
                    "<a href=\"{}\" class=\"{class}\"",
                    escape_html(&dest_url)
                );
                if !title.is_empty() {
                    tag.push_str(&format!(" title=\"{}\"", escape_html(&title)));
                }
                tag.push('>');
                Event::Html(tag.into())
            }
            None => Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }),
        },
        Event::Start(Tag::CodeBlock(kind)) => match styles.class_for(ElementKind::CodeBlock) {
            Some(class) => {
                let tag = match &kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => format!(
                        "<pre class=\"{class}\"><code class=\"language-{}\">",
                        escape_html(lang)
                    ),
                    _ => format!("<pre class=\"{class}\"><code>"),
                };
                Event::Html(tag.into())
            }
            None => Event::Start(Tag::CodeBlock(kind)),
        },
        Event::Code(text) => match styles.class_for(ElementKind::InlineCode) {
            Some(class) => Event::Html(
                format!("<code class=\"{class}\">{}</code>", escape_html(&text)).into(),
            ),
            None => Event::Code(text),
        },
        other => other,
    }
}

fn heading_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Minimal HTML attribute/text escaping for rewritten tags.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ============================================================================
// Tests
// ============================================================================
