//! # Conference-Core: conference client options
//!
//! Client-side option types handed to conference operations. Currently this
//! covers publishing: [`PublishOptions`] declares which audio and video
//! encodings a local stream may be published with.
//!
//! ## Quick Start
//!
//! ```rust
//! use confsdk_conference_core::{
//!     AudioCodec, AudioEncodingParameters, PublishOptions, VideoCodec, VideoEncodingParameters,
//! };
//!
//! let options = PublishOptions::builder()
//!     .with_audio_parameter(AudioEncodingParameters::new(AudioCodec::Opus))?
//!     .with_video_parameter(VideoEncodingParameters::new(VideoCodec::Vp8))?
//!     .with_video_parameter(VideoEncodingParameters::new(VideoCodec::H264))?
//!     .build();
//!
//! assert!(options.accepts_video_codec(VideoCodec::H264));
//! assert!(!options.accepts_video_codec(VideoCodec::Vp9));
//! # Ok::<(), confsdk_conference_core::ConferenceError>(())
//! ```
//!
//! ## Configuration
//!
//! Options can also be loaded from JSON with
//! [`PublishOptions::from_json_str`]; every entry goes through the same
//! validation as the builder.

#![warn(missing_docs)]

pub mod error;
pub mod publish;

pub use error::{ConferenceError, ConferenceResult};
pub use publish::{PublishOptions, PublishOptionsBuilder, PublishOptionsConfig};

// Re-export the encoding descriptors used in the public API
pub use confsdk_encoding_core::{
    AudioCodec, AudioCodecParameters, AudioEncodingParameters, EncodingError, EncodingParameters,
    H264Profile, MediaKind, VideoCodec, VideoCodecParameters, VideoEncodingParameters,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
