//! Conversion between embed values and Discord API messages.

use chrono::{DateTime, Utc};
use evelina_models::discord::{
    ButtonComponent, DiscordButtonStyle, Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia,
    MessagePayload,
};
use evelina_models::embed::{self, ButtonStyle, EmbedButton, EmbedValue, DEFAULT_COLOR};
use evelina_util::validation::{
    format_hex_color, parse_hex_color, validate_count, validate_length, validate_url,
};

use crate::error::CoreError;

pub const MAX_CONTENT_LEN: usize = 2000;
pub const MAX_TITLE_LEN: usize = 256;
pub const MAX_DESCRIPTION_LEN: usize = 2048;
pub const MAX_AUTHOR_NAME_LEN: usize = 256;
pub const MAX_FIELD_NAME_LEN: usize = 256;
pub const MAX_FIELD_VALUE_LEN: usize = 1024;
pub const MAX_FOOTER_TEXT_LEN: usize = 2048;
pub const MAX_FIELDS: usize = 25;
pub const MAX_BUTTONS: usize = 25;
/// Colour used when the script's colour is not valid hex.
pub const FALLBACK_COLOR: i32 = 0x808080;
/// Upper bound for the auto-delete delay, in seconds.
pub const MAX_DELETE_AFTER_SECS: f64 = 30.0;

/// Build the Discord message for `value`. Placeholders must already be
/// filled; `now` stamps embeds that carry the timestamp flag.
pub fn build_payload(value: &EmbedValue, now: DateTime<Utc>) -> Result<MessagePayload, CoreError> {
    let content = present(value.content.as_deref()).map(str::to_string);
    if let Some(content) = &content {
        validate_length("content", content, MAX_CONTENT_LEN)?;
    }

    validate_count("buttons", value.buttons.len(), MAX_BUTTONS)?;
    let components: Vec<ButtonComponent> = value.buttons.iter().map(build_button).collect();

    let embed = if value.has_embed_attributes() {
        let embed = build_embed(value, now)?;
        let has_body = embed.title.is_some()
            || embed.description.is_some()
            || embed.author.is_some()
            || embed.image.is_some();
        if !has_body && content.is_none() {
            return Err(CoreError::EmptyEmbed);
        }
        Some(embed)
    } else {
        None
    };

    if content.is_none() && embed.is_none() && components.is_empty() {
        return Err(CoreError::EmptyMessage);
    }

    Ok(MessagePayload {
        content,
        embed,
        components,
        delete_after: value
            .delete_after
            .map(|seconds| seconds.min(MAX_DELETE_AFTER_SECS)),
    })
}

fn build_embed(value: &EmbedValue, now: DateTime<Utc>) -> Result<Embed, CoreError> {
    let title = present(value.title.as_deref()).map(str::to_string);
    if let Some(title) = &title {
        validate_length("title", title, MAX_TITLE_LEN)?;
    }
    let description = present(value.description.as_deref()).map(str::to_string);
    if let Some(description) = &description {
        validate_length("description", description, MAX_DESCRIPTION_LEN)?;
    }

    let author = match &value.author {
        Some(author) => match present(author.name.as_deref()) {
            Some(name) => {
                validate_length("author name", name, MAX_AUTHOR_NAME_LEN)?;
                Some(EmbedAuthor {
                    name: name.to_string(),
                    url: valid_url(author.url.as_deref()),
                    icon_url: valid_url(author.icon.as_deref()),
                })
            }
            None => {
                tracing::debug!("dropping embed author without a name");
                None
            }
        },
        None => None,
    };

    let footer_text = value
        .footer
        .as_ref()
        .and_then(|footer| present(footer.text.as_deref()).map(|text| (footer, text)));
    let footer = match footer_text {
        Some((footer, text)) => {
            validate_length("footer text", text, MAX_FOOTER_TEXT_LEN)?;
            Some(EmbedFooter {
                text: text.to_string(),
                icon_url: valid_url(footer.icon.as_deref()),
            })
        }
        None => None,
    };

    validate_count("fields", value.fields.len(), MAX_FIELDS)?;
    let fields = value
        .fields
        .iter()
        .map(|field| -> Result<EmbedField, CoreError> {
            validate_length("field name", &field.name, MAX_FIELD_NAME_LEN)?;
            validate_length("field value", &field.value, MAX_FIELD_VALUE_LEN)?;
            Ok(EmbedField {
                name: field.name.clone(),
                value: field.value.clone(),
                inline: field.inline,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let color = parse_hex_color(&value.color).unwrap_or_else(|_| {
        tracing::warn!("invalid embed color '{}', using fallback", value.color);
        FALLBACK_COLOR
    });

    Ok(Embed {
        title,
        description,
        url: valid_url(value.url.as_deref()),
        color: Some(color),
        timestamp: value.timestamp.then(|| now.to_rfc3339()),
        footer,
        image: valid_url(value.image.as_deref()).map(|url| EmbedMedia { url }),
        thumbnail: valid_url(value.thumbnail.as_deref()).map(|url| EmbedMedia { url }),
        author,
        fields,
    })
}

/// Buttons with a usable URL become link buttons; the rest are shown
/// disabled since a stored script cannot carry a callback. A link button
/// stays disabled when the script asks for it.
fn build_button(button: &EmbedButton) -> ButtonComponent {
    let label = present(Some(button.label.as_str())).map(str::to_string);
    let emoji = present(button.emoji.as_deref()).map(str::to_string);
    match valid_url(button.url.as_deref()) {
        Some(url) => ButtonComponent {
            style: DiscordButtonStyle::Link,
            label,
            emoji,
            url: Some(url),
            disabled: button.disabled,
        },
        None => ButtonComponent {
            style: match button.style {
                ButtonStyle::Primary => DiscordButtonStyle::Primary,
                ButtonStyle::Secondary => DiscordButtonStyle::Secondary,
                ButtonStyle::Success => DiscordButtonStyle::Success,
                ButtonStyle::Danger => DiscordButtonStyle::Danger,
            },
            label,
            emoji,
            url: None,
            disabled: true,
        },
    }
}

/// Turn an existing Discord embed back into an editable value.
pub fn copy_embed(source: &Embed, content: Option<&str>) -> EmbedValue {
    EmbedValue {
        content: present(content).map(str::to_string),
        title: source.title.clone(),
        description: source.description.clone(),
        url: source.url.clone(),
        color: source
            .color
            .map(format_hex_color)
            .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        author: source.author.as_ref().map(|author| embed::EmbedAuthor {
            name: Some(author.name.clone()),
            icon: author.icon_url.clone(),
            url: author.url.clone(),
        }),
        footer: source.footer.as_ref().map(|footer| embed::EmbedFooter {
            text: Some(footer.text.clone()),
            icon: footer.icon_url.clone(),
        }),
        thumbnail: source.thumbnail.as_ref().map(|media| media.url.clone()),
        image: source.image.as_ref().map(|media| media.url.clone()),
        fields: source
            .fields
            .iter()
            .map(|field| embed::EmbedField {
                name: field.name.clone(),
                value: field.value.clone(),
                inline: field.inline,
            })
            .collect(),
        buttons: Vec::new(),
        timestamp: source.timestamp.is_some(),
        delete_after: None,
    }
}

/// Copy a whole message, including its buttons.
pub fn copy_message(message: &MessagePayload) -> EmbedValue {
    let mut value = match &message.embed {
        Some(source) => copy_embed(source, message.content.as_deref()),
        None => EmbedValue {
            content: present(message.content.as_deref()).map(str::to_string),
            ..EmbedValue::default()
        },
    };
    value.buttons = message
        .components
        .iter()
        .map(|button| EmbedButton {
            label: button.label.clone().unwrap_or_default(),
            style: match button.style {
                DiscordButtonStyle::Secondary => ButtonStyle::Secondary,
                DiscordButtonStyle::Success => ButtonStyle::Success,
                DiscordButtonStyle::Danger => ButtonStyle::Danger,
                DiscordButtonStyle::Primary | DiscordButtonStyle::Link => ButtonStyle::Primary,
            },
            url: button.url.clone(),
            emoji: button.emoji.clone(),
            disabled: button.disabled && button.style == DiscordButtonStyle::Link,
        })
        .collect();
    value.delete_after = message.delete_after;
    value
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn valid_url(value: Option<&str>) -> Option<String> {
    present(value)
        .filter(|url| validate_url(url).is_ok())
        .map(str::to_string)
}
