//! Options for publishing a local stream to a conference
//!
//! A [`PublishOptions`] lists, per media kind, the encodings the caller is
//! willing to publish with, in order of preference. It is assembled with a
//! [`PublishOptionsBuilder`] and is immutable once built.

mod builder;
mod config;
mod options;

pub use builder::PublishOptionsBuilder;
pub use config::PublishOptionsConfig;
pub use options::PublishOptions;
