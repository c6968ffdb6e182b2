//! Descriptor construction rules

use confsdk_encoding_core::{
    AudioCodec, AudioCodecParameters, AudioEncodingParameters, EncodingError, EncodingParameters,
    H264Profile, MediaKind, VideoCodec, VideoCodecParameters, VideoEncodingParameters,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn non_zero_bitrate_caps_are_kept(kbps in 1u32..=u32::MAX) {
        let audio = AudioEncodingParameters::new(AudioCodec::Opus).with_max_bitrate_kbps(kbps).unwrap();
        let video = VideoEncodingParameters::new(VideoCodec::Vp8).with_max_bitrate_kbps(kbps).unwrap();
        prop_assert_eq!(audio.max_bitrate_kbps(), Some(kbps));
        prop_assert_eq!(video.max_bitrate_kbps(), Some(kbps));
        prop_assert!(audio.validate().is_ok());
        prop_assert!(video.validate().is_ok());
    }

    #[test]
    fn only_h264_takes_a_profile(
        codec in prop::sample::select(VideoCodec::ALL.to_vec()),
        profile in prop::sample::select(H264Profile::ALL.to_vec()),
    ) {
        let result = VideoCodecParameters::new(codec).with_profile(profile);
        prop_assert_eq!(result.is_ok(), codec == VideoCodec::H264);
    }
}

#[test]
fn test_kinds_are_reported_by_trait() {
    assert_eq!(AudioEncodingParameters::KIND, MediaKind::Audio);
    assert_eq!(VideoEncodingParameters::KIND, MediaKind::Video);
}

#[test]
fn test_codec_parameters_accessors() {
    let codec = AudioCodecParameters::new(AudioCodec::Pcma)
        .with_channels(1)
        .unwrap()
        .with_sample_rate(8000)
        .unwrap();
    assert_eq!(codec.name(), AudioCodec::Pcma);
    assert_eq!(codec.channels(), Some(1));
    assert_eq!(codec.sample_rate(), Some(8000));

    let parameters = AudioEncodingParameters::new(codec.clone());
    assert_eq!(parameters.codec(), &codec);
    assert_eq!(parameters.codec_name(), "pcma");
    assert_eq!(parameters.max_bitrate_kbps(), None);
}

#[test]
fn test_error_messages() {
    let err = AudioEncodingParameters::new(AudioCodec::Aac)
        .with_max_bitrate_kbps(0)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid argument `max_bitrate_kbps`: must be greater than zero"
    );
    assert!(matches!(err, EncodingError::InvalidArgument { .. }));
}
