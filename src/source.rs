use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hound::WavReader;

use crate::error::{Result, SmaError};

/// A stream of samples delivered in buffers
pub trait SampleSource {
    /// Next buffer of samples, or `None` once the stream is exhausted
    fn next_buffer(&mut self) -> Result<Option<Vec<f32>>>;

    /// Sample rate of the stream, if it has one
    fn sample_rate(&self) -> Option<u32> {
        None
    }
}

/// Reads floating-point samples from text
///
/// Samples may be separated by whitespace, commas or newlines. Everything
/// after a `#` on a line is ignored.
pub struct TextSource<R> {
    reader: R,
    chunk_size: usize,
    line_number: usize,
    line: String,
    exhausted: bool,
}

impl<R: BufRead> TextSource<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size: chunk_size.max(1),
            line_number: 0,
            line: String::new(),
            exhausted: false,
        }
    }

    fn parse_line(line: &str, line_number: usize, out: &mut Vec<f32>) -> Result<()> {
        let content = line.split('#').next().unwrap_or("");
        for token in content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let value = token.parse::<f32>().map_err(|_| SmaError::Parse {
                line: line_number,
                token: token.to_string(),
            })?;
            out.push(value);
        }
        Ok(())
    }
}

impl TextSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P, chunk_size: usize) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(BufReader::new(file), chunk_size))
    }
}

impl<R: BufRead> SampleSource for TextSource<R> {
    fn next_buffer(&mut self) -> Result<Option<Vec<f32>>> {
        let mut samples = Vec::with_capacity(self.chunk_size);

        // A single line may overshoot the chunk size; the buffer is returned whole
        while !self.exhausted && samples.len() < self.chunk_size {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                self.exhausted = true;
                break;
            }
            self.line_number += 1;
            Self::parse_line(&self.line, self.line_number, &mut samples)?;
        }

        if samples.is_empty() {
            Ok(None)
        } else {
            Ok(Some(samples))
        }
    }
}

/// Reads one channel of a WAV file
///
/// Integer PCM is normalized to the [-1, 1] range.
pub struct WavFileSource {
    samples: Vec<f32>,
    position: usize,
    chunk_size: usize,
    sample_rate: u32,
}

impl WavFileSource {
    /// Open a WAV file and decode the given zero-based channel
    pub fn new<P: AsRef<Path>>(path: P, chunk_size: usize, channel: u16) -> Result<Self> {
        let reader = WavReader::open(path.as_ref())?;
        let spec = reader.spec();

        if channel >= spec.channels {
            return Err(SmaError::InvalidArgument(format!(
                "channel {} requested but WAV file has {} channel(s)",
                channel, spec.channels
            )));
        }

        let interleaved = Self::read_samples(reader, &spec)?;
        let samples = interleaved
            .iter()
            .skip(channel as usize)
            .step_by(spec.channels as usize)
            .copied()
            .collect();

        Ok(Self {
            samples,
            position: 0,
            chunk_size: chunk_size.max(1),
            sample_rate: spec.sample_rate,
        })
    }

    fn read_samples(
        mut reader: WavReader<BufReader<File>>,
        spec: &hound::WavSpec,
    ) -> Result<Vec<f32>> {
        let samples = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .samples::<f32>()
                .collect::<std::result::Result<Vec<_>, _>>()?,
            hound::SampleFormat::Int => {
                let max_val = 2_i64.pow(spec.bits_per_sample as u32 - 1) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / max_val))
                    .collect::<std::result::Result<Vec<_>, _>>()?
            }
        };
        Ok(samples)
    }
}

impl SampleSource for WavFileSource {
    fn next_buffer(&mut self) -> Result<Option<Vec<f32>>> {
        if self.position >= self.samples.len() {
            return Ok(None);
        }

        let end = (self.position + self.chunk_size).min(self.samples.len());
        let chunk = self.samples[self.position..end].to_vec();
        self.position = end;

        Ok(Some(chunk))
    }

    fn sample_rate(&self) -> Option<u32> {
        Some(self.sample_rate)
    }
}
