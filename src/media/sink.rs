//! Opening, decoding and wrapping tracks into `rodio` sinks.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::source::SkipDuration;
use rodio::{Decoder, OutputStream, Sink, Source};

use super::error::MediaError;

/// Map a media ref such as `/music/song.mp3` onto a file under `root`.
pub fn resolve_media_path(root: &Path, media_ref: &str) -> PathBuf {
    root.join(media_ref.trim_start_matches('/'))
}

/// Open and decode `path`, positioned at `start_at`.
pub(super) fn open_source(
    path: &Path,
    start_at: Duration,
) -> Result<SkipDuration<Decoder<BufReader<File>>>, MediaError> {
    let file = File::open(path).map_err(|source| MediaError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let decoder = Decoder::new(BufReader::new(file)).map_err(|source| MediaError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    // `skip_duration` is our seeking primitive; Duration::ZERO is a no-op.
    Ok(decoder.skip_duration(start_at))
}

/// Create a paused `Sink` for `path` that starts playback at `start_at`.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    path: &Path,
    start_at: Duration,
    volume: f32,
) -> Result<Sink, MediaError> {
    let source = open_source(path, start_at)?;
    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok(sink)
}
