//! Bounce sound playback.
//!
//! The output stream is acquired once at startup and held for the life of
//! the process; the sample is decoded once and buffered so each play is a
//! cheap clone. No mixing guarantees beyond "plays once per call".

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use rodio::source::{Buffered, Source};
use rodio::{Decoder, OutputStream, OutputStreamHandle};

pub struct SoundBank {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bounce: Buffered<Decoder<BufReader<File>>>,
}

impl SoundBank {
    pub fn load(bounce_path: &Path) -> anyhow::Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("failed to open audio output device")?;
        let file = File::open(bounce_path)
            .with_context(|| format!("failed to open sound file {}", bounce_path.display()))?;
        let bounce = Decoder::new(BufReader::new(file))
            .with_context(|| format!("failed to decode sound file {}", bounce_path.display()))?
            .buffered();
        Ok(Self {
            _stream: stream,
            handle,
            bounce,
        })
    }

    /// Fire-and-forget playback.
    pub fn play_bounce(&self) {
        if let Err(err) = self.handle.play_raw(self.bounce.clone().convert_samples()) {
            log::warn!("bounce playback failed: {err}");
        }
    }
}
