//! Serializable form of [`PublishOptions`]

use confsdk_encoding_core::{AudioEncodingParameters, VideoEncodingParameters};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::options::PublishOptions;
use crate::error::{ConferenceError, ConferenceResult};

/// Publish options as they appear in a configuration document
///
/// ```json
/// {
///   "audio": [{ "codec": { "name": "opus" }, "max_bitrate_kbps": 64 }],
///   "video": [{ "codec": { "name": "h264", "profile": "CB" } }, { "codec": { "name": "vp8" } }]
/// }
/// ```
///
/// Entries are validated as they are deserialized. Entries may be `null`;
/// such entries are rejected when the document is turned into
/// [`PublishOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishOptionsConfig {
    /// Audio encodings, most preferred first
    pub audio: Vec<Option<AudioEncodingParameters>>,
    /// Video encodings, most preferred first
    pub video: Vec<Option<VideoEncodingParameters>>,
}

impl PublishOptionsConfig {
    /// Replay every entry, in order, through the builder
    pub fn into_options(self) -> ConferenceResult<PublishOptions> {
        let mut builder = PublishOptions::builder();

        for (index, parameter) in self.audio.into_iter().enumerate() {
            builder
                .add_audio_parameter(parameter)
                .inspect_err(|e| warn!(index, error = %e, "Invalid audio entry in publish options"))?;
        }
        for (index, parameter) in self.video.into_iter().enumerate() {
            builder
                .add_video_parameter(parameter)
                .inspect_err(|e| warn!(index, error = %e, "Invalid video entry in publish options"))?;
        }

        Ok(builder.build())
    }
}

impl TryFrom<PublishOptionsConfig> for PublishOptions {
    type Error = ConferenceError;

    fn try_from(config: PublishOptionsConfig) -> Result<Self, Self::Error> {
        config.into_options()
    }
}

impl From<PublishOptions> for PublishOptionsConfig {
    fn from(options: PublishOptions) -> Self {
        let (audio, video) = options.into_parts();
        Self {
            audio: audio.into_iter().map(Some).collect(),
            video: video.into_iter().map(Some).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confsdk_encoding_core::{AudioCodec, MediaKind, VideoCodec};

    #[test]
    fn test_missing_fields_default_to_empty() {
        let config: PublishOptionsConfig = serde_json::from_str("{}").unwrap();
        let options = config.into_options().unwrap();
        assert!(options.accepts_any_audio_codec());
        assert!(options.accepts_any_video_codec());
    }

    #[test]
    fn test_entries_keep_document_order() {
        let options = PublishOptions::from_json_str(
            r#"{"video":[{"codec":{"name":"vp9"}},{"codec":{"name":"vp8"}},{"codec":{"name":"vp9"}}]}"#,
        )
        .unwrap();
        let codecs: Vec<_> = options
            .video_encoding_parameters()
            .iter()
            .map(|p| p.codec().name())
            .collect();
        assert_eq!(codecs, vec![VideoCodec::Vp9, VideoCodec::Vp8, VideoCodec::Vp9]);
    }

    #[test]
    fn test_null_entry_is_an_invalid_argument() {
        let err = PublishOptions::from_json_str(r#"{"audio":[{"codec":{"name":"opus"}},null]}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConferenceError::InvalidArgument { kind: MediaKind::Audio, .. }
        ));
    }

    #[test]
    fn test_invalid_descriptor_is_rejected_while_reading() {
        let err = PublishOptions::from_json_str(
            r#"{"audio":[{"codec":{"name":"opus","channels":0},"max_bitrate_kbps":0}]}"#,
        )
        .unwrap_err();
        match err {
            ConferenceError::Config { message } => assert!(message.contains("greater than zero")),
            other => panic!("Expected config error, got: {:?}", other),
        }

        let err = PublishOptions::from_json_str(r#"{"video":[{"codec":{"name":"vp8","profile":"H"}}]}"#)
            .unwrap_err();
        assert!(matches!(err, ConferenceError::Config { .. }));
    }

    #[test]
    fn test_codec_names_are_case_insensitive_in_documents() {
        let options = PublishOptions::from_json_str(
            r#"{"audio":[{"codec":{"name":"OPUS"}}],"video":[{"codec":{"name":"H264","profile":"cb"}}]}"#,
        )
        .unwrap();
        assert!(options.accepts_audio_codec(AudioCodec::Opus));
        assert!(options.accepts_video_codec(VideoCodec::H264));
        assert_eq!(
            options.to_json_string().unwrap(),
            r#"{"audio":[{"codec":{"name":"opus"}}],"video":[{"codec":{"name":"h264","profile":"CB"}}]}"#
        );
    }

    #[test]
    fn test_malformed_document_is_a_config_error() {
        let err = PublishOptions::from_json_str(r#"{"audio":[{"codec":{"name":"speex"}}]}"#)
            .unwrap_err();
        assert!(matches!(err, ConferenceError::Config { .. }));

        let err = PublishOptions::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConferenceError::Config { .. }));
    }

    #[test]
    fn test_serde_goes_through_validation() {
        let result: Result<PublishOptions, _> =
            serde_json::from_str(r#"{"video":[null]}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("video encoding parameter must not be absent"));
    }

    #[test]
    fn test_options_convert_back_to_config() {
        let options = PublishOptions::builder()
            .with_audio_parameter(AudioEncodingParameters::new(AudioCodec::Pcmu))
            .unwrap()
            .build();
        let config = PublishOptionsConfig::from(options);
        assert_eq!(config.audio, vec![Some(AudioEncodingParameters::new(AudioCodec::Pcmu))]);
        assert!(config.video.is_empty());
    }
}
