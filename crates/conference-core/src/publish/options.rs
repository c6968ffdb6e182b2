//! Immutable publish options

use confsdk_encoding_core::{AudioCodec, AudioEncodingParameters, VideoCodec, VideoEncodingParameters};
use serde::{Deserialize, Serialize};

use super::builder::PublishOptionsBuilder;
use super::config::PublishOptionsConfig;
use crate::error::ConferenceResult;

/// Options for publishing a local stream to the conference
///
/// Holds the acceptable audio and video encodings in preference order. An
/// empty list for a media kind means any codec the platform supports is
/// acceptable for that kind.
///
/// Deserialization runs through [`PublishOptionsConfig`], so a deserialized
/// value obeys the same rules as one produced by the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PublishOptionsConfig", into = "PublishOptionsConfig")]
pub struct PublishOptions {
    audio_encoding_parameters: Vec<AudioEncodingParameters>,
    video_encoding_parameters: Vec<VideoEncodingParameters>,
}

impl PublishOptions {
    /// Get a builder for creating a `PublishOptions`
    pub fn builder() -> PublishOptionsBuilder {
        PublishOptionsBuilder::new()
    }

    pub(super) fn from_parts(
        audio_encoding_parameters: Vec<AudioEncodingParameters>,
        video_encoding_parameters: Vec<VideoEncodingParameters>,
    ) -> Self {
        Self {
            audio_encoding_parameters,
            video_encoding_parameters,
        }
    }

    /// Acceptable audio encodings, most preferred first
    pub fn audio_encoding_parameters(&self) -> &[AudioEncodingParameters] {
        &self.audio_encoding_parameters
    }

    /// Acceptable video encodings, most preferred first
    pub fn video_encoding_parameters(&self) -> &[VideoEncodingParameters] {
        &self.video_encoding_parameters
    }

    /// Take the audio and video lists out of the options
    pub fn into_parts(self) -> (Vec<AudioEncodingParameters>, Vec<VideoEncodingParameters>) {
        (self.audio_encoding_parameters, self.video_encoding_parameters)
    }

    /// True when no audio encoding was specified
    pub fn accepts_any_audio_codec(&self) -> bool {
        self.audio_encoding_parameters.is_empty()
    }

    /// True when no video encoding was specified
    pub fn accepts_any_video_codec(&self) -> bool {
        self.video_encoding_parameters.is_empty()
    }

    /// Whether `codec` may be used for the published audio track
    pub fn accepts_audio_codec(&self, codec: AudioCodec) -> bool {
        self.accepts_any_audio_codec()
            || self
                .audio_encoding_parameters
                .iter()
                .any(|p| p.codec().name() == codec)
    }

    /// Whether `codec` may be used for the published video track
    pub fn accepts_video_codec(&self, codec: VideoCodec) -> bool {
        self.accepts_any_video_codec()
            || self
                .video_encoding_parameters
                .iter()
                .any(|p| p.codec().name() == codec)
    }

    /// Parse options from a JSON document
    ///
    /// `null` entries in the `audio` or `video` arrays are rejected as
    /// absent parameters.
    pub fn from_json_str(json: &str) -> ConferenceResult<Self> {
        let config: PublishOptionsConfig = serde_json::from_str(json)?;
        config.into_options()
    }

    /// Serialize the options to a JSON document
    pub fn to_json_string(&self) -> ConferenceResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
