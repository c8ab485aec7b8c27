//! Codec for the `{embed}$v{...}` script markup used by Evelina and Evict to
//! store rich messages, plus the helpers the dashboard needs to preview them.

pub mod decode;
pub mod encode;
pub mod error;
pub mod markdown;
pub mod scanner;
pub mod segment;
pub mod substitute;

pub use decode::{decode, import};
pub use encode::encode;
pub use error::ScriptError;
pub use markdown::{format_discord_text, preview_url};
pub use substitute::substitute;

/// Token every encoded script starts with.
pub const EMBED_PREFIX: &str = "{embed}";
