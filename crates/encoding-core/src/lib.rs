//! # Encoding-Core: encoding parameter descriptors
//!
//! Typed descriptors for the audio and video encodings a local stream may be
//! published with. Conference crates treat these as opaque preferences and
//! pass them on to the publish path.
//!
//! ```rust
//! use confsdk_encoding_core::{
//!     AudioCodec, AudioEncodingParameters, EncodingParameters, H264Profile, VideoCodec,
//!     VideoCodecParameters, VideoEncodingParameters,
//! };
//!
//! let opus = AudioEncodingParameters::new(AudioCodec::Opus).with_max_bitrate_kbps(64)?;
//! let h264 = VideoEncodingParameters::new(
//!     VideoCodecParameters::new(VideoCodec::H264).with_profile(H264Profile::High)?,
//! );
//!
//! assert_eq!(opus.codec_name(), "opus");
//! assert_eq!(h264.max_bitrate_kbps(), None);
//! # Ok::<(), confsdk_encoding_core::EncodingError>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod parameters;
pub mod types;

pub use error::{EncodingError, EncodingResult};
pub use parameters::{
    AudioCodecParameters, AudioEncodingParameters, EncodingParameters, VideoCodecParameters,
    VideoEncodingParameters,
};
pub use types::{AudioCodec, H264Profile, MediaKind, VideoCodec};
