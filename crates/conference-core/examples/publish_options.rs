//! Assemble publish options in code and from JSON, then print what a
//! publish call would negotiate with.
//!
//! Run with `RUST_LOG=confsdk=debug` to see the builder's log output.

use anyhow::Result;
use confsdk_conference_core::{
    AudioCodec, AudioEncodingParameters, H264Profile, PublishOptions, VideoCodec,
    VideoCodecParameters, VideoEncodingParameters,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut builder = PublishOptions::builder();
    builder
        .add_audio_parameter(AudioEncodingParameters::new(AudioCodec::Opus).with_max_bitrate_kbps(64)?)?
        .add_video_parameter(VideoEncodingParameters::new(
            VideoCodecParameters::new(VideoCodec::H264).with_profile(H264Profile::ConstrainedBaseline)?,
        ))?
        .add_video_parameter(VideoEncodingParameters::new(VideoCodec::Vp8).with_max_bitrate_kbps(1500)?)?;
    let options = builder.build();

    println!("built:  {}", options.to_json_string()?);

    let loaded = PublishOptions::from_json_str(r#"{"video":[{"codec":{"name":"vp9"}}]}"#)?;
    println!("loaded: {}", loaded.to_json_string()?);
    for codec in VideoCodec::ALL {
        println!("  {codec:<5} accepted: {}", loaded.accepts_video_codec(codec));
    }
    println!("  any audio accepted: {}", loaded.accepts_any_audio_codec());

    match PublishOptions::from_json_str(r#"{"audio":[null]}"#) {
        Ok(_) => println!("unexpectedly accepted a null entry"),
        Err(e) => println!("rejected: {e}"),
    }

    Ok(())
}
