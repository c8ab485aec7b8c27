pub mod discord;
pub mod embed;
pub mod preview;
