use serde::{Deserialize, Serialize};

/// Colour used when a script or builder does not set one.
pub const DEFAULT_COLOR: &str = "#729bb0";

/// Structured form of an embed script, as edited by the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub fields: Vec<EmbedField>,
    #[serde(default)]
    pub buttons: Vec<EmbedButton>,
    /// Render a current-time stamp in the footer.
    #[serde(default)]
    pub timestamp: bool,
    /// Seconds after which the bot deletes the sent message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_after: Option<f64>,
}

impl Default for EmbedValue {
    fn default() -> Self {
        Self {
            content: None,
            title: None,
            description: None,
            url: None,
            color: default_color(),
            author: None,
            footer: None,
            thumbnail: None,
            image: None,
            fields: Vec::new(),
            buttons: Vec::new(),
            timestamp: false,
            delete_after: None,
        }
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedButton {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub style: ButtonStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
}

impl ButtonStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }

    /// Parse a style name, accepting the bot's colour aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "primary" | "blue" | "blurple" => Some(Self::Primary),
            "secondary" | "gray" | "grey" => Some(Self::Secondary),
            "success" | "green" => Some(Self::Success),
            "danger" | "red" => Some(Self::Danger),
            _ => None,
        }
    }
}

impl std::fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EmbedValue {
    /// Whether any attribute that lives inside the embed box (as opposed to
    /// the plain message content and buttons) is set.
    pub fn has_embed_attributes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.url.is_some()
            || self.author.is_some()
            || self.footer.is_some()
            || self.thumbnail.is_some()
            || self.image.is_some()
            || !self.fields.is_empty()
            || self.timestamp
    }
}
