//! # Markup Stripping
//!
//! Collection descriptions arrive as HTML fragments. The display contract is
//! plain text: tags are removed, never interpreted.
//!
//! Tags are removed *before* entities are decoded. Escaped characters such as
//! `&lt;` belong to the text and come out literally; they are never mistaken
//! for markup.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").expect("static regex")
});

/// Tags that end a block of text. Replaced with a line break.
static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<\s*(br|/p|/div|/li|/h[1-6]|/blockquote)\b[^>]*>").expect("static regex")
});

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("static regex"));

static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\u{a0}]+").expect("static regex"));

/// Convert an HTML fragment into plain text.
///
/// Paragraph and line-break tags become newlines; every other tag is dropped.
/// Runs of spaces collapse to one, blank lines are removed.
pub fn strip_markup(html: &str) -> String {
    let broken = BLOCK_TAG.replace_all(html, "\n");
    let stripped = TAG.replace_all(&broken, "");
    let text = ENTITY.replace_all(&stripped, |caps: &Captures| {
        decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    });

    text.lines()
        .map(|line| SPACES.replace_all(line, " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Like [`strip_markup`], but `None` when nothing readable is left.
pub fn plain_text(html: Option<&str>) -> Option<String> {
    html.map(strip_markup).filter(|s| !s.is_empty())
}

fn decode_entity(entity: &str) -> Option<String> {
    if let Some(num) = entity.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }

    let decoded = match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => " ",
        "ndash" => "–",
        "mdash" => "—",
        "hellip" => "…",
        "lsquo" => "‘",
        "rsquo" => "’",
        "ldquo" => "“",
        "rdquo" => "”",
        _ => return None,
    };
    Some(decoded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_tags_are_removed() {
        assert_eq!(
            strip_markup("Oil on <em>canvas</em>, by <a href=\"/artists/1\">Monet</a>."),
            "Oil on canvas, by Monet."
        );
    }

    #[test]
    fn test_paragraphs_become_lines() {
        assert_eq!(
            strip_markup("<p>First paragraph.</p>\n<p>Second   paragraph.</p>"),
            "First paragraph.\nSecond paragraph."
        );
        assert_eq!(strip_markup("one<br/>two<BR>three"), "one\ntwo\nthree");
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(strip_markup("Salt &amp; Pepper&nbsp;&#8212; &#x41;"), "Salt & Pepper — A");
    }

    #[test]
    fn test_escaped_comparisons_are_kept() {
        assert_eq!(
            strip_markup("<p>Height &lt; 2 m and width &gt; 1 m.</p>"),
            "Height < 2 m and width > 1 m."
        );
    }

    #[test]
    fn test_escaped_tags_are_text_not_markup() {
        assert_eq!(
            strip_markup("<p>Signed &lt;b&gt;M&lt;/b&gt; lower left</p>"),
            "Signed <b>M</b> lower left"
        );
    }

    #[test]
    fn test_escaped_entity_decodes_once() {
        assert_eq!(strip_markup("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_unknown_entities_are_left_alone() {
        assert_eq!(strip_markup("a &bogus; b"), "a &bogus; b");
    }

    #[test]
    fn test_multiline_tags_are_removed() {
        assert_eq!(strip_markup("<span\n class=\"x\">text</span>"), "text");
    }

    #[test]
    fn test_plain_text_drops_empty_results() {
        assert_eq!(plain_text(None), None);
        assert_eq!(plain_text(Some("<p> </p>")), None);
        assert_eq!(plain_text(Some("<p>kept</p>")), Some("kept".to_string()));
    }
}
