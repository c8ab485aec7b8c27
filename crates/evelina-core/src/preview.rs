//! Rendering of decoded scripts for the builder's live preview.

use std::sync::Arc;
use std::time::Duration;

use evelina_models::embed::{ButtonStyle, EmbedValue};
use evelina_models::preview::PreviewData;
use evelina_script::{decode, format_discord_text, preview_url, substitute};
use serde::Serialize;

use crate::cache::TtlCache;

/// An embed with text turned into preview HTML and URLs resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPreview {
    pub content: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub color: String,
    pub author: Option<RenderedAuthor>,
    pub footer: Option<RenderedFooter>,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    pub fields: Vec<RenderedField>,
    pub buttons: Vec<RenderedButton>,
    pub timestamp: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedAuthor {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedFooter {
    pub text: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedButton {
    pub label: String,
    pub style: ButtonStyle,
    pub url: Option<String>,
    pub emoji: Option<String>,
    pub disabled: bool,
}

/// Renders scripts against a fixed preview data set, memoising the result
/// per script text.
pub struct PreviewRenderer {
    data: PreviewData,
    cache: TtlCache<String, Arc<RenderedPreview>>,
}

impl PreviewRenderer {
    pub fn new(data: PreviewData, ttl: Duration) -> Self {
        Self {
            data,
            cache: TtlCache::new(ttl),
        }
    }

    pub fn data(&self) -> &PreviewData {
        &self.data
    }

    pub fn render(&self, script: &str) -> Arc<RenderedPreview> {
        if let Some(hit) = self.cache.get(script) {
            tracing::trace!("preview cache hit");
            return hit;
        }
        let rendered = Arc::new(self.render_value(&decode(script)));
        self.cache.set(script.to_string(), Arc::clone(&rendered));
        rendered
    }

    /// Render an already decoded value. Not cached.
    pub fn render_value(&self, value: &EmbedValue) -> RenderedPreview {
        let text = |s: &Option<String>| s.as_deref().map(|s| format_discord_text(s, &self.data));
        let link = |s: &Option<String>| s.as_deref().and_then(|s| preview_url(s, &self.data));

        RenderedPreview {
            content: text(&value.content),
            title: text(&value.title),
            description: text(&value.description),
            url: link(&value.url),
            color: value.color.clone(),
            author: value.author.as_ref().map(|author| RenderedAuthor {
                name: text(&author.name),
                icon: link(&author.icon),
                url: link(&author.url),
            }),
            footer: value.footer.as_ref().map(|footer| RenderedFooter {
                text: text(&footer.text),
                icon: link(&footer.icon),
            }),
            thumbnail: link(&value.thumbnail),
            image: link(&value.image),
            fields: value
                .fields
                .iter()
                .map(|field| RenderedField {
                    name: format_discord_text(&field.name, &self.data),
                    value: format_discord_text(&field.value, &self.data),
                    inline: field.inline,
                })
                .collect(),
            buttons: value
                .buttons
                .iter()
                .map(|button| RenderedButton {
                    label: substitute(&button.label, &self.data),
                    style: button.style,
                    url: link(&button.url),
                    emoji: button.emoji.clone(),
                    disabled: button.disabled,
                })
                .collect(),
            timestamp: value.timestamp,
        }
    }

    pub fn invalidate(&self, script: &str) -> bool {
        self.cache.invalidate(script)
    }

    pub fn clear(&self) {
        self.cache.clear();
    }
}

/// Copy of `value` with every placeholder filled from `data`, for sending a
/// preview message rather than displaying HTML.
pub fn fill_placeholders(value: &EmbedValue, data: &PreviewData) -> EmbedValue {
    let fill = |s: &Option<String>| s.as_deref().map(|s| substitute(s, data));
    let mut filled = value.clone();

    filled.content = fill(&value.content);
    filled.title = fill(&value.title);
    filled.description = fill(&value.description);
    filled.url = fill(&value.url);
    filled.color = substitute(&value.color, data);
    filled.thumbnail = fill(&value.thumbnail);
    filled.image = fill(&value.image);
    if let Some(author) = filled.author.as_mut() {
        author.name = fill(&author.name);
        author.icon = fill(&author.icon);
        author.url = fill(&author.url);
    }
    if let Some(footer) = filled.footer.as_mut() {
        footer.text = fill(&footer.text);
        footer.icon = fill(&footer.icon);
    }
    for field in &mut filled.fields {
        field.name = substitute(&field.name, data);
        field.value = substitute(&field.value, data);
    }
    for button in &mut filled.buttons {
        button.label = substitute(&button.label, data);
        button.url = fill(&button.url);
        button.emoji = fill(&button.emoji);
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> PreviewRenderer {
        PreviewRenderer::new(PreviewData::default(), Duration::from_secs(60))
    }

    #[test]
    fn renders_text_and_urls() {
        let renderer = renderer();
        let preview = renderer.render(
            "{embed}$v{title: **Hi** {user.name}}$v{thumbnail: {user.avatar}}$v{image: not a url}$v{footer: text: {guild.count.format} member}",
        );
        assert_eq!(preview.title.as_deref(), Some("<strong>Hi</strong> curet"));
        assert_eq!(
            preview.thumbnail.as_deref(),
            Some(renderer.data().user.avatar.as_str())
        );
        assert_eq!(preview.image, None);
        let footer = preview.footer.as_ref().expect("footer");
        assert_eq!(footer.text.as_deref(), Some("3463rd member"));
        assert_eq!(preview.color, "#729bb0");
    }

    #[test]
    fn repeated_renders_share_the_cached_value() {
        let renderer = renderer();
        let script = "{embed}$v{title: cached}";
        let first = renderer.render(script);
        let second = renderer.render(script);
        assert!(Arc::ptr_eq(&first, &second));

        assert!(renderer.invalidate(script));
        let third = renderer.render(script);
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(first, third);
    }

    #[test]
    fn expired_renders_are_recomputed() {
        let renderer = PreviewRenderer::new(PreviewData::default(), Duration::ZERO);
        let script = "{embed}$v{title: t}";
        let first = renderer.render(script);
        let second = renderer.render(script);
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn fields_and_buttons_are_rendered() {
        let preview = renderer().render(
            "{embed}$v{field: name: *Rules* && value: be nice && inline}$v{button: label: Hi {user.name} && style: success && url: https://evelina.bot}",
        );
        assert_eq!(preview.fields[0].name, "<em>Rules</em>");
        assert!(preview.fields[0].inline);
        assert_eq!(preview.buttons[0].label, "Hi curet");
        assert_eq!(preview.buttons[0].style, ButtonStyle::Success);
        assert_eq!(preview.buttons[0].url.as_deref(), Some("https://evelina.bot"));
    }

    #[test]
    fn fill_placeholders_leaves_structure() {
        let value = decode(
            "{embed}$v{color: #{botcolor}}$v{author: name: {user.name} && icon: {user.avatar}}$v{field: name: {guild.name} && value: {guild.boost_tier}}",
        );
        let filled = fill_placeholders(&value, &PreviewData::default());
        assert_eq!(filled.color, "#729bb0");
        let author = filled.author.expect("author");
        assert_eq!(author.name.as_deref(), Some("curet"));
        assert!(author.icon.unwrap().starts_with("https://cdn.discordapp.com/avatars/"));
        assert_eq!(filled.fields[0].name, "evelina");
        assert_eq!(filled.fields[0].value, "3");
    }
}
