use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use hound::{SampleFormat, WavReader};
use tracing::debug;

use crate::error::{Error, Result};

const RIFF: &[u8; 4] = b"RIFF";
const WAVE: &[u8; 4] = b"WAVE";
const STEREO: u16 = 2;

/// A decoded stereo recording, samples normalized to about [-1, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    pub left: Vec<f32>,
    pub right: Vec<f32>,
    pub frame_rate: u32,
    pub num_frames: usize,
}

pub fn decode<P: AsRef<Path>>(path: P) -> Result<Waveform> {
    let path = path.as_ref();
    debug!("decoding {}", path.display());
    decode_from(BufReader::new(File::open(path)?))
}

/// Decodes from any seekable source. The stream is checked for the
/// container tags, rewound, and then handed to the WAV reader.
pub fn decode_from<R: Read + Seek>(mut src: R) -> Result<Waveform> {
    let _g = hprof::enter("decode");

    check_container(&mut src)?;
    src.seek(SeekFrom::Start(0))?;

    let mut reader = WavReader::new(src)?;
    let spec = reader.spec();
    let num_frames = reader.duration() as usize;
    debug!(
        "{} ch, {} bit {:?}, {} Hz, {} frames",
        spec.channels, spec.bits_per_sample, spec.sample_format, spec.sample_rate, num_frames
    );

    if spec.sample_format != SampleFormat::Int {
        return Err(Error::UnsupportedSampleFormat);
    }
    let width = (spec.bits_per_sample + 7) / 8;
    if width != 1 && width != 2 {
        return Err(Error::UnsupportedSampleWidth(width));
    }
    if spec.channels != STEREO {
        return Err(Error::UnsupportedChannelCount(spec.channels));
    }

    let raw = raw_samples(&mut reader, width, num_frames * spec.channels as usize)?;
    let normalized: Vec<f32> = raw.iter().map(|&s| normalize(s, width)).collect();

    let mut channels = deinterleave(&normalized, spec.channels as usize).into_iter();
    let left = channels.next().unwrap_or_default();
    let right = channels.next().unwrap_or_default();

    Ok(Waveform {
        left,
        right,
        frame_rate: spec.sample_rate,
        num_frames,
    })
}

fn check_container<R: Read>(src: &mut R) -> Result<()> {
    let mut descriptor = [0u8; 12];
    match src.read_exact(&mut descriptor) {
        Ok(()) => (),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Err(Error::InvalidContainerFormat),
        Err(e) => return Err(e.into()),
    }
    if &descriptor[0..4] != RIFF || &descriptor[8..12] != WAVE {
        return Err(Error::InvalidContainerFormat);
    }
    Ok(())
}

/// Reads the interleaved samples as they are stored: unsigned codes for
/// 8 bit, signed for 16 bit.
fn raw_samples<R: Read>(reader: &mut WavReader<R>, width: u16, expected: usize) -> Result<Vec<i32>> {
    let mut raw = Vec::with_capacity(expected);
    for samp in reader.samples::<i16>() {
        let samp = samp? as i32;
        // The reader recenters 8 bit samples; undo it to get the stored byte.
        raw.push(if width == 1 { samp + 128 } else { samp });
    }
    Ok(raw)
}

/// Half the range of a `width` byte integer sample.
fn max_magnitude(width: u16) -> f32 {
    ((1u32 << (8 * width as u32)) / 2) as f32
}

pub fn normalize(raw: i32, width: u16) -> f32 {
    if width == 1 {
        (raw - 128) as f32 / max_magnitude(width)
    } else {
        raw as f32 / max_magnitude(width)
    }
}

/// Splits interleaved samples into one sequence per channel. A trailing
/// partial frame is dropped.
pub fn deinterleave(samples: &[f32], channels: usize) -> Vec<Vec<f32>> {
    if channels == 0 {
        return Vec::new();
    }
    let frames = samples.len() / channels;
    let mut out: Vec<Vec<f32>> = (0..channels).map(|_| Vec::with_capacity(frames)).collect();
    for frame in samples.chunks_exact(channels) {
        for (chan, &s) in out.iter_mut().zip(frame) {
            chan.push(s);
        }
    }
    out
}
