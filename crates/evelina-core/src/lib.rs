pub mod cache;
pub mod error;
pub mod payload;
pub mod preview;
pub mod session;

pub use cache::TtlCache;
pub use error::CoreError;
pub use payload::{build_payload, copy_embed, copy_message};
pub use preview::{fill_placeholders, PreviewRenderer, RenderedPreview};
pub use session::BuilderSession;
