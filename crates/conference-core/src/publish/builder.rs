//! Incremental builder for [`PublishOptions`]

use confsdk_encoding_core::{AudioEncodingParameters, EncodingParameters, VideoEncodingParameters};
use tracing::{debug, warn};

use super::options::PublishOptions;
use crate::error::{ConferenceError, ConferenceResult};

/// Builder for assembling a [`PublishOptions`]
///
/// Parameters are kept in insertion order and duplicates are allowed. An
/// absent parameter is rejected with [`ConferenceError::InvalidArgument`]
/// and leaves the builder unchanged.
///
/// `build` consumes the builder, so a built [`PublishOptions`] can never
/// observe later changes.
///
/// # Examples
///
/// ```rust
/// use confsdk_conference_core::{
///     AudioCodec, AudioEncodingParameters, PublishOptions, VideoCodec, VideoEncodingParameters,
/// };
///
/// let mut builder = PublishOptions::builder();
/// builder
///     .add_audio_parameter(AudioEncodingParameters::new(AudioCodec::Opus))?
///     .add_video_parameter(VideoEncodingParameters::new(VideoCodec::Vp8))?
///     .add_video_parameter(VideoEncodingParameters::new(VideoCodec::H264))?;
/// let options = builder.build();
///
/// assert_eq!(options.audio_encoding_parameters().len(), 1);
/// assert_eq!(options.video_encoding_parameters().len(), 2);
/// # Ok::<(), confsdk_conference_core::ConferenceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PublishOptionsBuilder {
    audio_parameters: Vec<AudioEncodingParameters>,
    video_parameters: Vec<VideoEncodingParameters>,
}

impl PublishOptionsBuilder {
    /// Create a builder with no parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a video encoding the published stream may use
    ///
    /// Without any video parameters, every video codec supported by the
    /// platform is acceptable.
    pub fn add_video_parameter(
        &mut self,
        parameter: impl Into<Option<VideoEncodingParameters>>,
    ) -> ConferenceResult<&mut Self> {
        push_parameter(&mut self.video_parameters, parameter.into())?;
        Ok(self)
    }

    /// Add an audio encoding the published stream may use
    ///
    /// Without any audio parameters, every audio codec supported by the
    /// platform is acceptable.
    pub fn add_audio_parameter(
        &mut self,
        parameter: impl Into<Option<AudioEncodingParameters>>,
    ) -> ConferenceResult<&mut Self> {
        push_parameter(&mut self.audio_parameters, parameter.into())?;
        Ok(self)
    }

    /// Owning form of [`add_video_parameter`](Self::add_video_parameter)
    pub fn with_video_parameter(
        mut self,
        parameter: impl Into<Option<VideoEncodingParameters>>,
    ) -> ConferenceResult<Self> {
        self.add_video_parameter(parameter)?;
        Ok(self)
    }

    /// Owning form of [`add_audio_parameter`](Self::add_audio_parameter)
    pub fn with_audio_parameter(
        mut self,
        parameter: impl Into<Option<AudioEncodingParameters>>,
    ) -> ConferenceResult<Self> {
        self.add_audio_parameter(parameter)?;
        Ok(self)
    }

    /// Audio parameters added so far
    pub fn audio_parameters(&self) -> &[AudioEncodingParameters] {
        &self.audio_parameters
    }

    /// Video parameters added so far
    pub fn video_parameters(&self) -> &[VideoEncodingParameters] {
        &self.video_parameters
    }

    /// Freeze the accumulated parameters into a [`PublishOptions`]
    pub fn build(self) -> PublishOptions {
        debug!(
            audio = self.audio_parameters.len(),
            video = self.video_parameters.len(),
            "Built publish options"
        );
        PublishOptions::from_parts(self.audio_parameters, self.video_parameters)
    }
}

fn push_parameter<P: EncodingParameters>(
    sequence: &mut Vec<P>,
    parameter: Option<P>,
) -> ConferenceResult<()> {
    let kind = P::KIND;
    let Some(parameter) = parameter else {
        warn!(%kind, "Rejected absent encoding parameter");
        return Err(ConferenceError::invalid_argument(kind, "must not be absent"));
    };

    debug!(
        %kind,
        codec = parameter.codec_name(),
        position = sequence.len(),
        "Added encoding parameter"
    );
    sequence.push(parameter);
    Ok(())
}
