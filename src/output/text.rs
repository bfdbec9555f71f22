use super::{AverageOutput, Formatter};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, output: &AverageOutput) -> String {
        if self.verbose {
            format!(
                "{} #{} sample: {} average: {}",
                output.input, output.index, output.sample, output.average
            )
        } else {
            output.average.to_string()
        }
    }
}
