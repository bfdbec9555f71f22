use std::path::Path;

use hound::{WavSpec, WavWriter};

/// Write mono 32-bit float samples to a WAV file
pub fn save_wav<P: AsRef<Path>>(
    path: P,
    samples: &[f32],
    sample_rate: u32,
) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)?;

    for &sample in samples {
        writer.write_sample(sample)?;
    }

    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{SampleSource, WavFileSource};

    #[test]
    fn test_save_wav_reads_back() {
        let path = std::env::temp_dir().join(format!("smavg_save_{}.wav", std::process::id()));
        let samples = [0.25, -0.5, 0.75];
        save_wav(&path, &samples, 44100).unwrap();

        let mut source = WavFileSource::new(&path, 16, 0).unwrap();
        assert_eq!(source.sample_rate(), Some(44100));
        assert_eq!(source.next_buffer().unwrap(), Some(samples.to_vec()));

        std::fs::remove_file(&path).unwrap();
    }
}
