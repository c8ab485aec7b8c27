use evelina_models::embed::{
    ButtonStyle, EmbedAuthor, EmbedButton, EmbedField, EmbedFooter, EmbedValue, DEFAULT_COLOR,
};

use crate::error::ScriptError;
use crate::scanner::split_segments;
use crate::segment::{ScalarKey, Segment, SubPairs, DISABLED_FLAG};
use crate::EMBED_PREFIX;

/// Parse a script into an [`EmbedValue`].
///
/// Never fails: unknown segments are skipped and missing sub-values keep
/// their defaults. Later scalar segments overwrite earlier ones.
pub fn decode(script: &str) -> EmbedValue {
    let trimmed = script.trim_start();
    let body = trimmed.strip_prefix(EMBED_PREFIX).unwrap_or(trimmed);

    let mut value = EmbedValue::default();
    for raw in split_segments(body) {
        apply(&mut value, Segment::parse(raw));
    }

    tracing::debug!(
        fields = value.fields.len(),
        buttons = value.buttons.len(),
        "decoded embed script"
    );
    value
}

/// Decode script bytes from an untrusted source such as the clipboard.
pub fn import(bytes: &[u8]) -> Result<EmbedValue, ScriptError> {
    let script = std::str::from_utf8(bytes).map_err(|e| {
        tracing::debug!("rejecting embed import: {}", e);
        ScriptError::InvalidFormat
    })?;
    Ok(decode(script))
}

fn apply(value: &mut EmbedValue, segment: Segment<'_>) {
    match segment {
        Segment::Scalar(key, raw) => set_scalar(value, key, raw),
        Segment::Author(pairs) => {
            value.author = Some(EmbedAuthor {
                name: owned(&pairs, "name"),
                icon: owned(&pairs, "icon"),
                url: owned(&pairs, "url"),
            });
        }
        Segment::Footer(pairs) => {
            value.footer = Some(EmbedFooter {
                text: owned(&pairs, "text"),
                icon: owned(&pairs, "icon"),
            });
        }
        Segment::Field { pairs, inline } => {
            value.fields.push(EmbedField {
                name: pairs.get("name").unwrap_or_default().to_string(),
                value: pairs.get("value").unwrap_or_default().to_string(),
                inline,
            });
        }
        Segment::Button(pairs) => {
            let style = match pairs.get_non_empty("style") {
                Some(raw) => ButtonStyle::from_name(raw).unwrap_or_else(|| {
                    tracing::warn!("unknown button style '{}', using primary", raw);
                    ButtonStyle::Primary
                }),
                None => ButtonStyle::Primary,
            };
            value.buttons.push(EmbedButton {
                label: pairs.get("label").unwrap_or_default().to_string(),
                style,
                url: owned(&pairs, "url"),
                emoji: owned(&pairs, "emoji"),
                disabled: pairs.has_flag(DISABLED_FLAG),
            });
        }
        Segment::Delete(raw) => match raw.parse::<f64>() {
            Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => {
                value.delete_after = Some(seconds);
            }
            _ => {
                tracing::debug!("ignoring invalid delete delay '{}'", raw);
                value.delete_after = None;
            }
        },
        Segment::Timestamp => value.timestamp = true,
        Segment::Unknown(body) => {
            tracing::trace!("ignoring unknown embed segment '{}'", body);
        }
    }
}

fn set_scalar(value: &mut EmbedValue, key: ScalarKey, raw: &str) {
    let slot = match key {
        ScalarKey::Color => {
            value.color = if raw.is_empty() {
                DEFAULT_COLOR.to_string()
            } else {
                raw.to_string()
            };
            return;
        }
        ScalarKey::Content => &mut value.content,
        ScalarKey::Title => &mut value.title,
        ScalarKey::Description => &mut value.description,
        ScalarKey::Url => &mut value.url,
        ScalarKey::Thumbnail => &mut value.thumbnail,
        ScalarKey::Image => &mut value.image,
    };
    *slot = non_empty(raw);
}

fn non_empty(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}

fn owned(pairs: &SubPairs<'_>, key: &str) -> Option<String> {
    pairs.get_non_empty(key).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_default() {
        assert_eq!(decode(""), EmbedValue::default());
        assert_eq!(decode("{embed}"), EmbedValue::default());
        assert_eq!(decode("   {embed}  "), EmbedValue::default());
    }

    #[test]
    fn prefix_is_optional() {
        let value = decode("$v{title: Hello}");
        assert_eq!(value.title.as_deref(), Some("Hello"));
    }

    #[test]
    fn scalars_are_trimmed_and_last_wins() {
        let value = decode("{embed}$v{title:   first  }$v{title: second}$v{color: #ff0000}");
        assert_eq!(value.title.as_deref(), Some("second"));
        assert_eq!(value.color, "#ff0000");
    }

    #[test]
    fn empty_color_keeps_default() {
        let value = decode("{embed}$v{color: #000000}$v{color: }");
        assert_eq!(value.color, DEFAULT_COLOR);
    }

    #[test]
    fn author_with_missing_parts() {
        let value = decode("{embed}$v{author: name: curet && url: https://evelina.bot}");
        let author = value.author.expect("author");
        assert_eq!(author.name.as_deref(), Some("curet"));
        assert_eq!(author.icon, None);
        assert_eq!(author.url.as_deref(), Some("https://evelina.bot"));
    }

    #[test]
    fn footer_with_placeholder_icon() {
        let value = decode("{embed}$v{footer: text: {guild.name} && icon: {guild.icon}}");
        let footer = value.footer.expect("footer");
        assert_eq!(footer.text.as_deref(), Some("{guild.name}"));
        assert_eq!(footer.icon.as_deref(), Some("{guild.icon}"));
    }

    #[test]
    fn field_defaults() {
        let value = decode("{embed}$v{field: value: only value}");
        assert_eq!(
            value.fields,
            vec![EmbedField {
                name: String::new(),
                value: "only value".into(),
                inline: false,
            }]
        );
    }

    #[test]
    fn button_parts_and_style_fallback() {
        let value = decode(
            "{embed}$v{button: label: Vote && style: danger && emoji: 🗳️}$v{button: label: Site && style: neon && url: https://evelina.bot/?a=1&b=2}",
        );
        assert_eq!(value.buttons.len(), 2);
        assert_eq!(value.buttons[0].style, ButtonStyle::Danger);
        assert_eq!(value.buttons[0].emoji.as_deref(), Some("🗳️"));
        assert_eq!(value.buttons[1].style, ButtonStyle::Primary);
        assert_eq!(
            value.buttons[1].url.as_deref(),
            Some("https://evelina.bot/?a=1&b=2")
        );
    }

    #[test]
    fn disabled_buttons() {
        let value = decode(
            "{embed}$v{button: label: Site && url: https://evelina.bot && disabled}$v{button: label: Vote}",
        );
        assert!(value.buttons[0].disabled);
        assert_eq!(value.buttons[0].url.as_deref(), Some("https://evelina.bot"));
        assert!(!value.buttons[1].disabled);
    }

    #[test]
    fn delete_delay() {
        assert_eq!(decode("{embed}$v{delete: 5}").delete_after, Some(5.0));
        assert_eq!(decode("{embed}$v{delete: 2.5}").delete_after, Some(2.5));
        assert_eq!(decode("{embed}$v{delete: soon}").delete_after, None);
        assert_eq!(decode("{embed}$v{delete: -1}").delete_after, None);
        assert_eq!(decode("{embed}$v{delete: 5}$v{delete: x}").delete_after, None);
    }

    #[test]
    fn timestamp_flag() {
        assert!(decode("{embed}$v{timestamp}").timestamp);
        assert!(!decode("{embed}$v{title: timestamp}").timestamp);
    }

    #[test]
    fn import_rejects_invalid_utf8() {
        assert_eq!(import(&[0xff, 0xfe, 0x00]), Err(ScriptError::InvalidFormat));
        let value = import(b"{embed}$v{title: ok}").unwrap();
        assert_eq!(value.title.as_deref(), Some("ok"));
    }
}
