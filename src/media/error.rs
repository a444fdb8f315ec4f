use std::io;
use std::path::PathBuf;

use rodio::StreamError;
use rodio::decoder::DecoderError;
use thiserror::Error;

/// Failures inside the audio backend. None of these reach the player core;
/// they are logged and the affected request is dropped.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecoderError,
    },

    #[error("no audio output device: {0}")]
    OutputDevice(#[from] StreamError),
}
