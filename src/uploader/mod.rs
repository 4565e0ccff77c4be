// Uploader module - listing, name derivation, and the retrying upload loop

pub mod batch;
pub mod client;
pub mod naming;
pub mod progress;

pub use batch::run_batch;
pub use client::{AddOutcome, EmojiApi, SlackClient};
pub use naming::derive_emoji_name;
pub use progress::{FileOutcome, RunSummary};
