//! Discord markdown to HTML for the builder's live preview.

use std::sync::LazyLock;

use evelina_models::preview::PreviewData;
use evelina_util::validation::validate_url;
use regex::Regex;

use crate::substitute::substitute;

static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```([\s\S]*?)```|`([^`]+)`").expect("code pattern is valid"));

static INLINE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\*\*(.+?)\*\*", "<strong>$1</strong>"),
        (r"__(.+?)__", "<u>$1</u>"),
        (r"\*([^*\n]+)\*", "<em>$1</em>"),
        (r"\b_([^_\n]+)_\b", "<em>$1</em>"),
        (r"~~(.+?)~~", "<s>$1</s>"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("markdown pattern is valid"),
            replacement,
        )
    })
    .collect()
});

/// Render user text as preview HTML: fill placeholders, escape markup, then
/// translate Discord markdown. Substituted values are escaped like the rest
/// of the text. Code spans and blocks are left unformatted.
pub fn format_discord_text(text: &str, data: &PreviewData) -> String {
    if text.is_empty() {
        return String::new();
    }
    let prepared = escape_html(&substitute(text, data));

    let mut out = String::with_capacity(prepared.len());
    let mut last = 0;
    for caps in CODE.captures_iter(&prepared) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&format_inline(&prepared[last..whole.start()]));
        if let Some(block) = caps.get(1) {
            out.push_str("<pre><code>");
            out.push_str(block.as_str());
            out.push_str("</code></pre>");
        } else if let Some(code) = caps.get(2) {
            out.push_str("<code>");
            out.push_str(code.as_str());
            out.push_str("</code>");
        }
        last = whole.end();
    }
    out.push_str(&format_inline(&prepared[last..]));
    out
}

/// Fill placeholders in a URL attribute and keep it only if it is a usable
/// `http`/`https` link.
pub fn preview_url(raw: &str, data: &PreviewData) -> Option<String> {
    let url = substitute(raw, data).trim().to_string();
    validate_url(&url).ok().map(|_| url)
}

fn format_inline(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in INLINE_RULES.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out.replace('\n', "<br />")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
