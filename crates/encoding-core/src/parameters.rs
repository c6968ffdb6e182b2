//! Codec and encoding parameter descriptors
//!
//! An encoding parameter names one acceptable codec configuration for a
//! media kind, optionally capped by a maximum bitrate. Absent optional
//! fields mean "unconstrained"; present values are always non-zero.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{EncodingError, EncodingResult};
use crate::types::{AudioCodec, H264Profile, MediaKind, VideoCodec};

/// Common view over audio and video encoding parameters
pub trait EncodingParameters: Clone + Send + Sync + 'static {
    /// Media kind this descriptor applies to
    const KIND: MediaKind;

    /// Canonical name of the described codec
    fn codec_name(&self) -> &'static str;

    /// Maximum bitrate in kbps, if capped
    fn max_bitrate_kbps(&self) -> Option<u32>;

    /// Re-check the constructor invariants
    ///
    /// Every value built through the constructors or deserialization passes;
    /// deserialization runs this check before producing a value.
    fn validate(&self) -> EncodingResult<()>;
}

fn non_zero<T>(parameter: &'static str, value: T) -> EncodingResult<T>
where
    T: Copy + PartialEq + Default,
{
    if value == T::default() {
        return Err(EncodingError::invalid_argument(parameter, "must be greater than zero"));
    }
    Ok(value)
}

fn check_bitrate(max_bitrate_kbps: Option<u32>) -> EncodingResult<()> {
    if let Some(kbps) = max_bitrate_kbps {
        non_zero("max_bitrate_kbps", kbps)?;
    }
    Ok(())
}

/// Audio codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAudioCodecParameters")]
pub struct AudioCodecParameters {
    name: AudioCodec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    channels: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sample_rate: Option<u32>,
}

#[derive(Deserialize)]
struct RawAudioCodecParameters {
    name: AudioCodec,
    #[serde(default)]
    channels: Option<u16>,
    #[serde(default)]
    sample_rate: Option<u32>,
}

impl TryFrom<RawAudioCodecParameters> for AudioCodecParameters {
    type Error = EncodingError;

    fn try_from(raw: RawAudioCodecParameters) -> Result<Self, Self::Error> {
        let codec = Self {
            name: raw.name,
            channels: raw.channels,
            sample_rate: raw.sample_rate,
        };
        codec.validate()?;
        Ok(codec)
    }
}

impl AudioCodecParameters {
    /// Describe `codec` with unconstrained channel count and sample rate
    pub fn new(codec: AudioCodec) -> Self {
        Self {
            name: codec,
            channels: None,
            sample_rate: None,
        }
    }

    /// Require a channel count
    pub fn with_channels(mut self, channels: u16) -> EncodingResult<Self> {
        self.channels = Some(non_zero("channels", channels)?);
        Ok(self)
    }

    /// Require a sample rate in Hz
    pub fn with_sample_rate(mut self, sample_rate: u32) -> EncodingResult<Self> {
        self.sample_rate = Some(non_zero("sample_rate", sample_rate)?);
        Ok(self)
    }

    /// Codec
    pub fn name(&self) -> AudioCodec {
        self.name
    }

    /// Channel count, if constrained
    pub fn channels(&self) -> Option<u16> {
        self.channels
    }

    /// Sample rate in Hz, if constrained
    pub fn sample_rate(&self) -> Option<u32> {
        self.sample_rate
    }

    fn validate(&self) -> EncodingResult<()> {
        if let Some(channels) = self.channels {
            non_zero("channels", channels)?;
        }
        if let Some(sample_rate) = self.sample_rate {
            non_zero("sample_rate", sample_rate)?;
        }
        Ok(())
    }
}

impl From<AudioCodec> for AudioCodecParameters {
    fn from(codec: AudioCodec) -> Self {
        Self::new(codec)
    }
}

/// Video codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawVideoCodecParameters")]
pub struct VideoCodecParameters {
    name: VideoCodec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<H264Profile>,
}

#[derive(Deserialize)]
struct RawVideoCodecParameters {
    name: VideoCodec,
    #[serde(default)]
    profile: Option<H264Profile>,
}

impl TryFrom<RawVideoCodecParameters> for VideoCodecParameters {
    type Error = EncodingError;

    fn try_from(raw: RawVideoCodecParameters) -> Result<Self, Self::Error> {
        let codec = Self {
            name: raw.name,
            profile: raw.profile,
        };
        codec.validate()?;
        Ok(codec)
    }
}

impl VideoCodecParameters {
    /// Describe `codec` without a profile constraint
    pub fn new(codec: VideoCodec) -> Self {
        Self {
            name: codec,
            profile: None,
        }
    }

    /// Require an H.264 profile
    ///
    /// Only valid when the codec is H.264.
    pub fn with_profile(mut self, profile: H264Profile) -> EncodingResult<Self> {
        self.profile = Some(profile);
        self.validate()?;
        Ok(self)
    }

    /// Codec
    pub fn name(&self) -> VideoCodec {
        self.name
    }

    /// H.264 profile, if constrained
    pub fn profile(&self) -> Option<H264Profile> {
        self.profile
    }

    fn validate(&self) -> EncodingResult<()> {
        match (self.name, self.profile) {
            (VideoCodec::H264, _) | (_, None) => Ok(()),
            (codec, Some(profile)) => Err(EncodingError::invalid_argument(
                "profile",
                format!("profile {profile} only applies to h264, not {codec}"),
            )),
        }
    }
}

impl From<VideoCodec> for VideoCodecParameters {
    fn from(codec: VideoCodec) -> Self {
        Self::new(codec)
    }
}

/// One acceptable audio encoding for a published stream
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAudioEncodingParameters")]
pub struct AudioEncodingParameters {
    codec: AudioCodecParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_bitrate_kbps: Option<u32>,
}

#[derive(Deserialize)]
struct RawAudioEncodingParameters {
    codec: AudioCodecParameters,
    #[serde(default)]
    max_bitrate_kbps: Option<u32>,
}

impl TryFrom<RawAudioEncodingParameters> for AudioEncodingParameters {
    type Error = EncodingError;

    fn try_from(raw: RawAudioEncodingParameters) -> Result<Self, Self::Error> {
        let parameters = Self {
            codec: raw.codec,
            max_bitrate_kbps: raw.max_bitrate_kbps,
        };
        parameters.validate()?;
        Ok(parameters)
    }
}

impl AudioEncodingParameters {
    /// Accept `codec` without a bitrate cap
    pub fn new(codec: impl Into<AudioCodecParameters>) -> Self {
        Self {
            codec: codec.into(),
            max_bitrate_kbps: None,
        }
    }

    /// Cap the bitrate, in kbps
    pub fn with_max_bitrate_kbps(mut self, kbps: u32) -> EncodingResult<Self> {
        self.max_bitrate_kbps = Some(non_zero("max_bitrate_kbps", kbps)?);
        Ok(self)
    }

    /// Codec configuration
    pub fn codec(&self) -> &AudioCodecParameters {
        &self.codec
    }
}

impl EncodingParameters for AudioEncodingParameters {
    const KIND: MediaKind = MediaKind::Audio;

    fn codec_name(&self) -> &'static str {
        self.codec.name().name()
    }

    fn max_bitrate_kbps(&self) -> Option<u32> {
        self.max_bitrate_kbps
    }

    fn validate(&self) -> EncodingResult<()> {
        trace!(codec = self.codec_name(), "Validating audio encoding parameters");
        self.codec.validate()?;
        check_bitrate(self.max_bitrate_kbps)
    }
}

/// One acceptable video encoding for a published stream
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawVideoEncodingParameters")]
pub struct VideoEncodingParameters {
    codec: VideoCodecParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_bitrate_kbps: Option<u32>,
}

#[derive(Deserialize)]
struct RawVideoEncodingParameters {
    codec: VideoCodecParameters,
    #[serde(default)]
    max_bitrate_kbps: Option<u32>,
}

impl TryFrom<RawVideoEncodingParameters> for VideoEncodingParameters {
    type Error = EncodingError;

    fn try_from(raw: RawVideoEncodingParameters) -> Result<Self, Self::Error> {
        let parameters = Self {
            codec: raw.codec,
            max_bitrate_kbps: raw.max_bitrate_kbps,
        };
        parameters.validate()?;
        Ok(parameters)
    }
}

impl VideoEncodingParameters {
    /// Accept `codec` without a bitrate cap
    pub fn new(codec: impl Into<VideoCodecParameters>) -> Self {
        Self {
            codec: codec.into(),
            max_bitrate_kbps: None,
        }
    }

    /// Cap the bitrate, in kbps
    pub fn with_max_bitrate_kbps(mut self, kbps: u32) -> EncodingResult<Self> {
        self.max_bitrate_kbps = Some(non_zero("max_bitrate_kbps", kbps)?);
        Ok(self)
    }

    /// Codec configuration
    pub fn codec(&self) -> &VideoCodecParameters {
        &self.codec
    }
}

impl EncodingParameters for VideoEncodingParameters {
    const KIND: MediaKind = MediaKind::Video;

    fn codec_name(&self) -> &'static str {
        self.codec.name().name()
    }

    fn max_bitrate_kbps(&self) -> Option<u32> {
        self.max_bitrate_kbps
    }

    fn validate(&self) -> EncodingResult<()> {
        trace!(codec = self.codec_name(), "Validating video encoding parameters");
        self.codec.validate()?;
        check_bitrate(self.max_bitrate_kbps)
    }
}
