use evelina_models::embed::EmbedValue;

use crate::segment::{ScalarKey, DISABLED_FLAG};
use crate::EMBED_PREFIX;

const PAIR_JOIN: &str = " && ";

/// Serialize an [`EmbedValue`] into script form.
///
/// Segment order is fixed: content, title, description, url, color, author,
/// footer, thumbnail, image, fields, buttons, delete, timestamp. Values are written
/// verbatim; `{`, `}` and `&&` inside them are not escaped.
pub fn encode(value: &EmbedValue) -> String {
    let mut out = String::from(EMBED_PREFIX);

    scalar(&mut out, ScalarKey::Content, value.content.as_deref());
    scalar(&mut out, ScalarKey::Title, value.title.as_deref());
    scalar(&mut out, ScalarKey::Description, value.description.as_deref());
    scalar(&mut out, ScalarKey::Url, value.url.as_deref());
    scalar(&mut out, ScalarKey::Color, Some(value.color.as_str()));

    if let Some(author) = &value.author {
        compound(
            &mut out,
            "author",
            &[
                ("name", author.name.as_deref()),
                ("icon", author.icon.as_deref()),
                ("url", author.url.as_deref()),
            ],
        );
    }
    if let Some(footer) = &value.footer {
        compound(
            &mut out,
            "footer",
            &[("text", footer.text.as_deref()), ("icon", footer.icon.as_deref())],
        );
    }

    scalar(&mut out, ScalarKey::Thumbnail, value.thumbnail.as_deref());
    scalar(&mut out, ScalarKey::Image, value.image.as_deref());

    for field in &value.fields {
        let mut body = format!("field: name: {} && value: {}", field.name, field.value);
        if field.inline {
            body.push_str(" && inline");
        }
        push_segment(&mut out, &body);
    }

    for button in &value.buttons {
        let mut body = format!("button: label: {} && style: {}", button.label, button.style);
        if let Some(url) = present(button.url.as_deref()) {
            body.push_str(&format!(" && url: {url}"));
        }
        if let Some(emoji) = present(button.emoji.as_deref()) {
            body.push_str(&format!(" && emoji: {emoji}"));
        }
        if button.disabled {
            body.push_str(PAIR_JOIN);
            body.push_str(DISABLED_FLAG);
        }
        push_segment(&mut out, &body);
    }

    if let Some(seconds) = value.delete_after {
        push_segment(&mut out, &format!("delete: {seconds}"));
    }

    if value.timestamp {
        push_segment(&mut out, "timestamp");
    }

    out
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn scalar(out: &mut String, key: ScalarKey, value: Option<&str>) {
    if let Some(value) = present(value) {
        push_segment(out, &format!("{}: {}", key.as_str(), value));
    }
}

fn compound(out: &mut String, key: &str, parts: &[(&str, Option<&str>)]) {
    let joined = parts
        .iter()
        .filter_map(|(name, value)| present(*value).map(|v| format!("{name}: {v}")))
        .collect::<Vec<_>>()
        .join(PAIR_JOIN);
    if !joined.is_empty() {
        push_segment(out, &format!("{key}: {joined}"));
    }
}

fn push_segment(out: &mut String, body: &str) {
    out.push_str("$v{");
    out.push_str(body);
    out.push('}');
}

#[cfg(test)]
mod tests {
    use super::*;
    use evelina_models::embed::{ButtonStyle, EmbedAuthor, EmbedButton, EmbedField, EmbedFooter};

    #[test]
    fn default_value_writes_only_color() {
        assert_eq!(encode(&EmbedValue::default()), "{embed}$v{color: #729bb0}");
    }

    #[test]
    fn fixed_segment_order() {
        let value = EmbedValue {
            content: Some("hey {user.mention}".into()),
            title: Some("Welcome".into()),
            description: Some("to {guild.name}".into()),
            url: Some("https://evelina.bot".into()),
            color: "#ffffff".into(),
            author: Some(EmbedAuthor {
                name: Some("curet".into()),
                icon: Some("{user.avatar}".into()),
                url: None,
            }),
            footer: Some(EmbedFooter {
                text: Some("member {guild.count.format}".into()),
                icon: None,
            }),
            thumbnail: Some("{user.avatar}".into()),
            image: Some("https://evelina.bot/banner.png".into()),
            fields: vec![EmbedField {
                name: "Rules".into(),
                value: "Be nice".into(),
                inline: true,
            }],
            buttons: vec![EmbedButton {
                label: "Site".into(),
                style: ButtonStyle::Secondary,
                url: Some("https://evelina.bot".into()),
                emoji: None,
                disabled: true,
            }],
            timestamp: true,
            delete_after: Some(10.0),
        };

        assert_eq!(
            encode(&value),
            "{embed}\
             $v{content: hey {user.mention}}\
             $v{title: Welcome}\
             $v{description: to {guild.name}}\
             $v{url: https://evelina.bot}\
             $v{color: #ffffff}\
             $v{author: name: curet && icon: {user.avatar}}\
             $v{footer: text: member {guild.count.format}}\
             $v{thumbnail: {user.avatar}}\
             $v{image: https://evelina.bot/banner.png}\
             $v{field: name: Rules && value: Be nice && inline}\
             $v{button: label: Site && style: secondary && url: https://evelina.bot && disabled}\
             $v{delete: 10}\
             $v{timestamp}"
        );
    }

    #[test]
    fn compound_without_parts_is_omitted() {
        let value = EmbedValue {
            author: Some(EmbedAuthor::default()),
            footer: Some(EmbedFooter {
                text: Some(String::new()),
                icon: None,
            }),
            ..EmbedValue::default()
        };
        assert_eq!(encode(&value), "{embed}$v{color: #729bb0}");
    }

    #[test]
    fn author_without_name_keeps_other_parts() {
        let value = EmbedValue {
            author: Some(EmbedAuthor {
                name: None,
                icon: Some("https://cdn/icon.png".into()),
                url: None,
            }),
            ..EmbedValue::default()
        };
        assert!(encode(&value).ends_with("$v{author: icon: https://cdn/icon.png}"));
    }

    #[test]
    fn empty_fields_and_buttons_are_still_written() {
        let value = EmbedValue {
            fields: vec![EmbedField::default()],
            buttons: vec![EmbedButton::default()],
            ..EmbedValue::default()
        };
        assert_eq!(
            encode(&value),
            "{embed}$v{color: #729bb0}$v{field: name:  && value: }$v{button: label:  && style: primary}"
        );
    }
}
