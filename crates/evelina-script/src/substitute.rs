//! Placeholder substitution for live previews.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::DateTime;
use evelina_models::preview::PreviewData;
use evelina_util::ordinal::format_ordinal;
use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([a-z_]+(?:\.[a-z_]+)*)\}").expect("placeholder pattern is valid")
});

/// Replace `{namespace.field}` placeholders with values from `data`.
///
/// Unknown placeholders are left as written.
pub fn substitute(text: &str, data: &PreviewData) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| match resolve(&caps[1], data) {
            Some(value) => value.into_owned(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn resolve<'a>(key: &str, data: &'a PreviewData) -> Option<Cow<'a, str>> {
    let user = &data.user;
    let guild = &data.guild;
    let value = match key {
        "user" | "user.name" => Cow::Borrowed(user.name.as_str()),
        "user.id" => Cow::Borrowed(user.id.as_str()),
        "user.nick" => Cow::Borrowed(user.nick.as_str()),
        "user.display" => Cow::Borrowed(user.display.as_str()),
        "user.mention" => Cow::Borrowed(user.mention.as_str()),
        "user.discriminator" => Cow::Borrowed(user.discriminator.as_str()),
        "user.avatar" => Cow::Borrowed(user.avatar.as_str()),
        "user.guild.avatar" => Cow::Borrowed(user.guild_avatar.as_str()),
        "user.joined_at" => Cow::Owned(format_timestamp(user.joined_at)),
        "user.created_at" => Cow::Owned(format_timestamp(user.created_at)),
        "guild.id" => Cow::Borrowed(guild.id.as_str()),
        "guild.name" => Cow::Borrowed(guild.name.as_str()),
        "guild.icon" => Cow::Borrowed(guild.icon.as_str()),
        "guild.created_at" => Cow::Owned(format_timestamp(guild.created_at)),
        "guild.count" => Cow::Owned(guild.count.to_string()),
        "guild.count.format" => Cow::Owned(format_ordinal(guild.count)),
        "guild.boost_count" => Cow::Owned(guild.boost_count.to_string()),
        "guild.boost_count.format" => Cow::Owned(format_ordinal(guild.boost_count)),
        "guild.booster_count" => Cow::Owned(guild.booster_count.to_string()),
        "guild.booster_count.format" => Cow::Owned(format_ordinal(guild.booster_count)),
        "guild.boost_tier" => Cow::Owned(guild.boost_tier.to_string()),
        "guild.vanity" => Cow::Borrowed(guild.vanity.as_str()),
        "invisible" => Cow::Borrowed(data.invisible_color.as_str()),
        "botcolor" => Cow::Borrowed(data.bot_color.as_str()),
        "botavatar" => Cow::Borrowed(data.bot_avatar.as_str()),
        _ => return None,
    };
    Some(value)
}

/// Unix seconds rendered as `M/D/YYYY, h:mm:ss AM` (UTC).
fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
        .unwrap_or_else(|| secs.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_known_placeholders() {
        let data = PreviewData::default();
        assert_eq!(
            substitute("hi {user.mention}, welcome to {guild.name}!", &data),
            "hi @curet, welcome to evelina!"
        );
        assert_eq!(substitute("{user}", &data), "curet");
    }

    #[test]
    fn ordinal_variants() {
        let data = PreviewData::default();
        assert_eq!(
            substitute("{guild.count.format} / {guild.boost_count.format} / {guild.booster_count.format}", &data),
            "3463rd / 26th / 13th"
        );
        assert_eq!(substitute("{guild.count}", &data), "3463");
    }

    #[test]
    fn unknown_placeholders_are_verbatim() {
        let data = PreviewData::default();
        assert_eq!(
            substitute("{user.unknown} {Guild.name} { user.id } {}", &data),
            "{user.unknown} {Guild.name} { user.id } {}"
        );
    }

    #[test]
    fn nested_braces_resolve_inner_token() {
        let data = PreviewData::default();
        assert_eq!(substitute("{{user.id}}", &data), "{335500798752456705}");
    }

    #[test]
    fn timestamps_are_formatted() {
        let mut data = PreviewData::default();
        data.user.joined_at = 0;
        data.guild.created_at = 1_712_937_060;
        assert_eq!(substitute("{user.joined_at}", &data), "1/1/1970, 12:00:00 AM");
        assert_eq!(substitute("{guild.created_at}", &data), "4/12/2024, 3:51:00 PM");
    }

    #[test]
    fn bot_constants() {
        let data = PreviewData::default();
        assert_eq!(substitute("#{botcolor} #{invisible}", &data), "#729bb0 #2b2d31");
    }
}
