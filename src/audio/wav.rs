//! WAV file writer for audio output.
//!
//! Writes 16-bit integer PCM using the hound crate. For one or two channels
//! hound emits the canonical 44-byte RIFF/WAVE header followed by the
//! little-endian samples produced by the synthesizer.

use std::fs;
use std::io::{self, Cursor, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{JingleError, Result};
use crate::generation::{samples, total_samples};
use crate::types::{AudioStreamParameters, Song};

/// Size of the RIFF/WAVE header in bytes.
pub const HEADER_SIZE: usize = 44;

/// What was written by [`write_wav`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSummary {
    /// Samples per channel.
    pub total_samples: u64,
    /// Bytes on disk, header included.
    pub file_size: u64,
}

/// Returns the size of the file holding `total_samples` samples per channel.
///
/// Fails if the data would not fit the 32-bit size fields of the header.
pub fn file_size_for(params: &AudioStreamParameters, total_samples: u64) -> Result<u64> {
    let data_size = total_samples
        .checked_mul(u64::from(params.block_align()))
        .filter(|size| *size <= u64::from(u32::MAX) - (HEADER_SIZE as u64 - 8))
        .ok_or_else(|| JingleError::stream_too_long(total_samples))?;

    Ok(HEADER_SIZE as u64 + data_size)
}

fn wav_spec(params: &AudioStreamParameters) -> WavSpec {
    WavSpec {
        channels: params.channel_count,
        sample_rate: params.sample_rate,
        bits_per_sample: params.bits_per_sample,
        sample_format: SampleFormat::Int,
    }
}

/// Validates `params` and sizes the stream before anything is written.
fn prepare(song: &Song, params: &AudioStreamParameters) -> Result<WavSummary> {
    if let Some(reason) = params.validate() {
        return Err(JingleError::invalid_parameters(reason));
    }

    let total = total_samples(song, params)?;
    Ok(WavSummary {
        total_samples: total,
        file_size: file_size_for(params, total)?,
    })
}

/// Renders `song` and writes it as a WAV file at `path`.
///
/// The file is fully written before this returns. If writing fails part-way
/// and nothing existed at `path` beforehand, the incomplete file is removed.
/// A pre-existing entry at `path` is never removed.
///
/// # Example
///
/// ```ignore
/// use jingle::audio::write_wav;
/// use jingle::types::{AudioStreamParameters, Note, Song};
///
/// let song = Song::single(Note::new(440, 200));
/// let summary = write_wav(Path::new("a4.wav"), &song, &AudioStreamParameters::default())?;
/// assert_eq!(summary.file_size, 17684);
/// ```
pub fn write_wav(path: &Path, song: &Song, params: &AudioStreamParameters) -> Result<WavSummary> {
    let summary = prepare(song, params)?;
    let existed = fs::symlink_metadata(path).is_ok();

    let result = WavWriter::create(path, wav_spec(params))
        .and_then(|mut writer| {
            write_samples(&mut writer, song, params)?;
            writer.finalize()
        });

    if let Err(e) = result {
        if !existed {
            remove_partial(path);
        }
        return Err(JingleError::file_write_failed(path, e));
    }

    log::info!(
        "Wrote {} samples ({} bytes) to {}",
        summary.total_samples,
        summary.file_size,
        path.display()
    );

    Ok(summary)
}

/// Renders `song` into an in-memory WAV file.
///
/// Returns the same bytes [`write_wav`] would put on disk.
pub fn write_wav_to_buffer(song: &Song, params: &AudioStreamParameters) -> Result<Vec<u8>> {
    let summary = prepare(song, params)?;

    let mut buffer = Vec::with_capacity(summary.file_size as usize);
    WavWriter::new(Cursor::new(&mut buffer), wav_spec(params))
        .and_then(|mut writer| {
            write_samples(&mut writer, song, params)?;
            writer.finalize()
        })
        .map_err(|e| JingleError::file_write_failed(Path::new("<memory>"), e))?;

    Ok(buffer)
}

/// Writes every sample once per channel.
fn write_samples<W: Write + Seek>(
    writer: &mut WavWriter<W>,
    song: &Song,
    params: &AudioStreamParameters,
) -> hound::Result<()> {
    for sample in samples(song, params) {
        for _ in 0..params.channel_count {
            writer.write_sample(sample)?;
        }
    }
    Ok(())
}

/// Removes a file this call created and could not finish.
fn remove_partial(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => log::warn!("Could not remove partial file {}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::types::Note;
    use tempfile::tempdir;

    fn a4() -> Song {
        Song::single(Note::new(440, 200))
    }

    fn read_u32(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
    }

    fn read_u16(bytes: &[u8], at: usize) -> u16 {
        u16::from_le_bytes(bytes[at..at + 2].try_into().unwrap())
    }

    #[test]
    fn header_layout_is_bit_exact() {
        let bytes = write_wav_to_buffer(&a4(), &AudioStreamParameters::default()).unwrap();

        assert_eq!(bytes.len(), 17684);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(read_u32(&bytes, 4), 36 + 8820 * 2);
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(read_u32(&bytes, 16), 16);
        assert_eq!(read_u16(&bytes, 20), 1);
        assert_eq!(read_u16(&bytes, 22), 1);
        assert_eq!(read_u32(&bytes, 24), 44100);
        assert_eq!(read_u32(&bytes, 28), 88200);
        assert_eq!(read_u16(&bytes, 32), 2);
        assert_eq!(read_u16(&bytes, 34), 16);
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(read_u32(&bytes, 40), 8820 * 2);
    }

    #[test]
    fn data_follows_header_little_endian() {
        let params = AudioStreamParameters::new(8000, 16000);
        let song = Song::single(Note::new(1000, 1));
        let bytes = write_wav_to_buffer(&song, &params).unwrap();

        let expected = crate::generation::synthesize(&song, &params);
        let data: Vec<i16> = bytes[HEADER_SIZE..]
            .chunks(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        assert_eq!(data, expected);
    }

    #[test]
    fn file_size_tracks_sample_count() {
        let params = AudioStreamParameters::default();
        for total in [0u64, 1, 44, 8820, 1_000_003] {
            assert_eq!(file_size_for(&params, total).unwrap(), 44 + 2 * total);
        }
    }

    #[test]
    fn oversized_stream_rejected() {
        let params = AudioStreamParameters::default();
        let err = file_size_for(&params, u64::from(u32::MAX)).unwrap_err();
        assert_eq!(err.code, ErrorCode::StreamTooLong);
    }

    #[test]
    fn write_wav_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a4.wav");

        let summary = write_wav(&path, &a4(), &AudioStreamParameters::default()).unwrap();

        assert_eq!(summary.total_samples, 8820);
        assert_eq!(summary.file_size, 17684);
        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 17684);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
    }

    #[test]
    fn written_file_reads_back_with_hound() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a4.wav");
        let params = AudioStreamParameters::default();
        write_wav(&path, &a4(), &params).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, SampleFormat::Int);

        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, crate::generation::synthesize(&a4(), &params));
    }

    #[test]
    fn stereo_repeats_each_sample() {
        let params = AudioStreamParameters {
            channel_count: 2,
            ..AudioStreamParameters::new(8000, 16000)
        };
        let song = Song::single(Note::new(1000, 1));
        let bytes = write_wav_to_buffer(&song, &params).unwrap();

        assert_eq!(bytes.len(), 44 + 8 * 4);
        assert_eq!(read_u16(&bytes, 22), 2);
        assert_eq!(read_u16(&bytes, 32), 4);
        let left = read_u16(&bytes, 44 + 4 * 2) as i16;
        let right = read_u16(&bytes, 44 + 4 * 2 + 2) as i16;
        assert_eq!(left, 16000);
        assert_eq!(right, 16000);
    }

    #[test]
    fn buffer_matches_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("song.wav");
        let song = Song::new(vec![Note::new(329, 30), Note::rest(10), Note::new(392, 30)]);
        let params = AudioStreamParameters::new(22050, 12000);

        write_wav(&path, &song, &params).unwrap();
        assert_eq!(fs::read(&path).unwrap(), write_wav_to_buffer(&song, &params).unwrap());
    }

    #[test]
    fn zero_length_song_is_header_only() {
        let bytes =
            write_wav_to_buffer(&Song::single(Note::new(440, 0)), &AudioStreamParameters::default())
                .unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(read_u32(&bytes, 40), 0);
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.wav");

        let err = write_wav(&path, &a4(), &AudioStreamParameters::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileWriteFailed);
        assert!(!path.exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_write_keeps_existing_link() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("out.wav");
        std::os::unix::fs::symlink("/dev/full", &link).unwrap();

        let err = write_wav(&link, &a4(), &AudioStreamParameters::default()).unwrap_err();

        assert_eq!(err.code, ErrorCode::FileWriteFailed);
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert!(Path::new("/dev/full").exists());
    }

    #[test]
    fn overflowing_song_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("endless.wav");
        let song = Song::new(vec![Note::new(440, u32::MAX); 2200]);
        let params = AudioStreamParameters::new(2_000_000_000, 16000);

        let err = write_wav(&path, &song, &params).unwrap_err();
        assert_eq!(err.code, ErrorCode::StreamTooLong);
        assert!(!path.exists());
    }

    #[test]
    fn invalid_parameters_write_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("loud.wav");
        let params = AudioStreamParameters::new(44100, 40000);

        let err = write_wav(&path, &a4(), &params).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParameters);
        assert!(!path.exists());
    }
}
