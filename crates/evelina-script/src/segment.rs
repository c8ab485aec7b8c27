//! Classification of a single segment body into a typed [`Segment`].

/// Separator between sub-pairs of compound segments.
pub const PAIR_SEPARATOR: &str = "&&";
/// Marker that flags a field as inline.
pub const INLINE_MARKER: &str = " && inline";
/// Bare button sub-pair that disables it.
pub const DISABLED_FLAG: &str = "disabled";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKey {
    Content,
    Title,
    Description,
    Url,
    Color,
    Thumbnail,
    Image,
}

impl ScalarKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Title => "title",
            Self::Description => "description",
            Self::Url => "url",
            Self::Color => "color",
            Self::Thumbnail => "thumbnail",
            Self::Image => "image",
        }
    }
}

/// One `$v{...}` unit, resolved once from its key prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Scalar(ScalarKey, &'a str),
    Author(SubPairs<'a>),
    Footer(SubPairs<'a>),
    Field { pairs: SubPairs<'a>, inline: bool },
    Button(SubPairs<'a>),
    /// Raw seconds text of a `delete:` segment.
    Delete(&'a str),
    Timestamp,
    /// Unrecognised key; callers skip it.
    Unknown(&'a str),
}

impl<'a> Segment<'a> {
    pub fn parse(body: &'a str) -> Self {
        if body.trim() == "timestamp" {
            return Self::Timestamp;
        }
        let Some((key, rest)) = body.split_once(':') else {
            return Self::Unknown(body);
        };

        let scalar = |key| Self::Scalar(key, rest.trim());
        match key.trim() {
            "content" => scalar(ScalarKey::Content),
            "title" => scalar(ScalarKey::Title),
            "description" => scalar(ScalarKey::Description),
            "url" => scalar(ScalarKey::Url),
            "color" => scalar(ScalarKey::Color),
            "thumbnail" => scalar(ScalarKey::Thumbnail),
            "image" => scalar(ScalarKey::Image),
            "author" => Self::Author(SubPairs(rest)),
            "footer" => Self::Footer(SubPairs(rest)),
            "field" => Self::Field {
                pairs: SubPairs(rest),
                inline: body.contains(INLINE_MARKER),
            },
            "button" => Self::Button(SubPairs(rest)),
            "delete" => Self::Delete(rest.trim()),
            _ => Self::Unknown(body),
        }
    }
}

/// The `subkey: value && subkey: value` remainder of a compound segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubPairs<'a>(pub &'a str);

impl<'a> SubPairs<'a> {
    /// Trimmed value of the first pair named `key`. A value runs up to the
    /// next `&&` or the end of the segment; a lone `&` is kept.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.0.split(PAIR_SEPARATOR).find_map(|pair| {
            let (name, value) = pair.split_once(':')?;
            (name.trim() == key).then(|| value.trim())
        })
    }

    /// Like [`get`](Self::get) but treats an empty value as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&'a str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Whether a bare pair (no `:`) equal to `flag` is present.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.0
            .split(PAIR_SEPARATOR)
            .any(|pair| !pair.contains(':') && pair.trim() == flag)
    }
}
