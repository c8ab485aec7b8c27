use serde::{Deserialize, Serialize};

/// Fixed data set used to fill `{namespace.field}` placeholders in previews.
///
/// The defaults mirror the sample member shown on the dashboard builder.
/// Timestamps are unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewData {
    pub user: PreviewUser,
    pub guild: PreviewGuild,
    /// Hex colour (no `#`) substituted for `{botcolor}`.
    pub bot_color: String,
    /// Hex colour (no `#`) substituted for `{invisible}`.
    pub invisible_color: String,
    pub bot_avatar: String,
}

impl Default for PreviewData {
    fn default() -> Self {
        Self {
            user: PreviewUser::default(),
            guild: PreviewGuild::default(),
            bot_color: "729bb0".into(),
            invisible_color: "2b2d31".into(),
            bot_avatar: "https://cdn.discordapp.com/icons/1228371886690537624/494604786a585cd444a4a7946381dead.png".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewUser {
    pub id: String,
    pub name: String,
    pub nick: String,
    pub display: String,
    pub mention: String,
    pub discriminator: String,
    pub avatar: String,
    pub guild_avatar: String,
    pub joined_at: i64,
    pub created_at: i64,
}

impl Default for PreviewUser {
    fn default() -> Self {
        let avatar = "https://cdn.discordapp.com/avatars/335500798752456705/97175ab711048b2d110484b0ae3187ba.png";
        Self {
            id: "335500798752456705".into(),
            name: "curet".into(),
            nick: "curet".into(),
            display: "curet".into(),
            mention: "@curet".into(),
            discriminator: "0001".into(),
            avatar: avatar.into(),
            guild_avatar: avatar.into(),
            joined_at: 1_716_602_880,
            created_at: 1_500_060_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewGuild {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub created_at: i64,
    pub count: u64,
    pub boost_count: u64,
    pub booster_count: u64,
    pub boost_tier: u8,
    pub vanity: String,
}

impl Default for PreviewGuild {
    fn default() -> Self {
        Self {
            id: "1228371886690537624".into(),
            name: "evelina".into(),
            icon: "https://cdn.discordapp.com/icons/1228371886690537624/51d5ac0bfb7db1615684020dc2d5b8e5.png".into(),
            created_at: 1_712_937_060,
            count: 3463,
            boost_count: 26,
            booster_count: 13,
            boost_tier: 3,
            vanity: "evelina".into(),
        }
    }
}
