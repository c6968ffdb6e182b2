//! Codec identifiers and media kinds
//!
//! Names follow the lowercase codec names used in conference signaling
//! (`opus`, `vp8`, ...). Parsing, including deserialization, is
//! case-insensitive; formatting and serialization always produce the
//! canonical name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EncodingError;

/// Kind of media an encoding descriptor applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Audio track
    Audio,
    /// Video track
    Video,
}

impl MediaKind {
    /// Get the kind name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Audio codecs a conference may negotiate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AudioCodec {
    /// Opus
    Opus,
    /// iSAC
    Isac,
    /// G.722 wideband
    G722,
    /// G.711 μ-law
    Pcmu,
    /// G.711 A-law
    Pcma,
    /// iLBC
    Ilbc,
    /// AAC
    Aac,
    /// AC-3
    Ac3,
    /// Nellymoser ASAO
    Asao,
}

impl AudioCodec {
    /// All known audio codecs
    pub const ALL: [AudioCodec; 9] = [
        Self::Opus,
        Self::Isac,
        Self::G722,
        Self::Pcmu,
        Self::Pcma,
        Self::Ilbc,
        Self::Aac,
        Self::Ac3,
        Self::Asao,
    ];

    /// Get the codec name
    pub fn name(self) -> &'static str {
        match self {
            Self::Opus => "opus",
            Self::Isac => "isac",
            Self::G722 => "g722",
            Self::Pcmu => "pcmu",
            Self::Pcma => "pcma",
            Self::Ilbc => "ilbc",
            Self::Aac => "aac",
            Self::Ac3 => "ac3",
            Self::Asao => "asao",
        }
    }
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for AudioCodec {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|codec| codec.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EncodingError::unsupported_codec(MediaKind::Audio, s))
    }
}

impl TryFrom<String> for AudioCodec {
    type Error = EncodingError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Video codecs a conference may negotiate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum VideoCodec {
    /// VP8
    Vp8,
    /// VP9
    Vp9,
    /// H.264 / AVC
    H264,
    /// H.265 / HEVC
    H265,
    /// AV1
    Av1,
}

impl VideoCodec {
    /// All known video codecs
    pub const ALL: [VideoCodec; 5] = [Self::Vp8, Self::Vp9, Self::H264, Self::H265, Self::Av1];

    /// Get the codec name
    pub fn name(self) -> &'static str {
        match self {
            Self::Vp8 => "vp8",
            Self::Vp9 => "vp9",
            Self::H264 => "h264",
            Self::H265 => "h265",
            Self::Av1 => "av1",
        }
    }
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for VideoCodec {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|codec| codec.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EncodingError::unsupported_codec(MediaKind::Video, s))
    }
}

impl TryFrom<String> for VideoCodec {
    type Error = EncodingError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// H.264 profiles, written with their short signaling names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum H264Profile {
    /// Constrained baseline
    #[serde(rename = "CB")]
    ConstrainedBaseline,
    /// Baseline
    #[serde(rename = "B")]
    Baseline,
    /// Main
    #[serde(rename = "M")]
    Main,
    /// High
    #[serde(rename = "H")]
    High,
}

impl H264Profile {
    /// All known profiles
    pub const ALL: [H264Profile; 4] = [
        Self::ConstrainedBaseline,
        Self::Baseline,
        Self::Main,
        Self::High,
    ];

    /// Get the short profile name
    pub fn name(self) -> &'static str {
        match self {
            Self::ConstrainedBaseline => "CB",
            Self::Baseline => "B",
            Self::Main => "M",
            Self::High => "H",
        }
    }
}

impl fmt::Display for H264Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for H264Profile {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|profile| profile.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                EncodingError::invalid_argument("profile", format!("unknown H.264 profile '{s}'"))
            })
    }
}

impl TryFrom<String> for H264Profile {
    type Error = EncodingError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
