//! Renders decoration markup for terminals.
//!
//! Game consoles understand `<color=#RRGGBB>`, `<b>` and `<i>` natively. A terminal does not, so
//! hosts that print to one either translate the markup into ANSI styles or strip it.

use colored::{ColoredString, Colorize};

/// How markup is rendered
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MarkupStyle {
    /// Translate tags into ANSI styles
    Ansi,
    /// Remove the tags, keeping only the text
    Strip,
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Tag {
    Color([u8; 3]),
    Bold,
    Italic,
}

impl Tag {
    fn name(&self) -> &'static str {
        match self {
            Tag::Color(_) => "color",
            Tag::Bold => "b",
            Tag::Italic => "i",
        }
    }

    fn parse_open(tag: &str) -> Option<Tag> {
        match tag {
            "b" => Some(Tag::Bold),
            "i" => Some(Tag::Italic),
            _ => {
                let hex = tag.strip_prefix("color=#")?;
                if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return None;
                }
                let byte = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();
                Some(Tag::Color([byte(0)?, byte(2)?, byte(4)?]))
            }
        }
    }
}

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Text(&'a str),
    Open(Tag),
    Close(&'a str),
}

fn tokenize(markup: &str) -> Vec<Token<'_>> {
    let mut tokens = vec![];
    let mut rest = markup;
    while !rest.is_empty() {
        let start = match rest.find('<') {
            Some(start) => start,
            None => {
                tokens.push(Token::Text(rest));
                break;
            }
        };
        if start > 0 {
            tokens.push(Token::Text(&rest[..start]));
            rest = &rest[start..];
        }
        let end = match rest.find('>') {
            Some(end) => end,
            None => {
                tokens.push(Token::Text(rest));
                break;
            }
        };
        let inner = &rest[1..end];
        let token = if let Some(name) = inner.strip_prefix('/') {
            match name {
                "b" | "i" | "color" => Some(Token::Close(name)),
                _ => None,
            }
        } else {
            Tag::parse_open(inner).map(Token::Open)
        };
        match token {
            Some(token) => {
                tokens.push(token);
                rest = &rest[end + 1..];
            }
            None => {
                tokens.push(Token::Text(&rest[..1]));
                rest = &rest[1..];
            }
        }
    }
    tokens
}

fn style(text: &str, active: &[Tag]) -> ColoredString {
    active
        .iter()
        .fold(ColoredString::from(text), |styled, tag| match *tag {
            Tag::Color([r, g, b]) => styled.truecolor(r, g, b),
            Tag::Bold => styled.bold(),
            Tag::Italic => styled.italic(),
        })
}

/// Renders markup produced by [`Decoration`](crate::decoration::Decoration)s.
///
/// Tags that are not understood, and closing tags without a matching opening tag, are kept as
/// plain text.
pub fn render(markup: &str, markup_style: MarkupStyle) -> String {
    let mut output = String::with_capacity(markup.len());
    let mut active: Vec<Tag> = vec![];

    for token in tokenize(markup) {
        match token {
            Token::Text(text) => match markup_style {
                MarkupStyle::Strip => output.push_str(text),
                MarkupStyle::Ansi => {
                    if active.is_empty() {
                        output.push_str(text);
                    } else {
                        output.push_str(&style(text, &active).to_string());
                    }
                }
            },
            Token::Open(tag) => active.push(tag),
            Token::Close(name) => match active.iter().rposition(|tag| tag.name() == name) {
                Some(position) => {
                    active.remove(position);
                }
                None => {
                    output.push_str("</");
                    output.push_str(name);
                    output.push('>');
                }
            },
        }
    }
    output
}

/// Removes all decoration markup from a message
pub fn strip(markup: &str) -> String {
    render(markup, MarkupStyle::Strip)
}
