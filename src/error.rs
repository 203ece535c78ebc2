use std::io;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Missing `RIFF`/`WAVE` tags at offsets 0 and 8
    #[error("The file is not a valid WAV file.")]
    InvalidContainerFormat,

    /// Width in bytes; only 8 and 16 bit PCM are plotted
    #[error("Unsupported sample width: {0} bytes (expected 1 or 2)")]
    UnsupportedSampleWidth(u16),

    #[error("Unsupported sample format: only integer PCM is supported")]
    UnsupportedSampleFormat,

    #[error("Unsupported channel count: {0} (expected stereo)")]
    UnsupportedChannelCount(u16),

    /// Selection was cancelled or filtered out. Never shown to the user.
    #[error("No file selected")]
    NoFileSelected,

    #[error("Invalid argument: {0}")]
    Config(String),

    #[error("SDL: {0}")]
    Sdl(String),

    #[error(transparent)]
    Wav(#[from] hound::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the run should end silently instead of reporting.
    pub fn is_silent(&self) -> bool {
        matches!(self, Error::NoFileSelected)
    }
}
