use super::{AverageOutput, Formatter};

pub struct CsvFormatter;

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

impl Formatter for CsvFormatter {
    fn format(&self, output: &AverageOutput) -> String {
        format!(
            "{},{},{},{}",
            csv_field(output.input),
            output.index,
            output.sample,
            output.average
        )
    }

    fn header(&self) -> Option<&'static str> {
        Some("input,index,sample,average")
    }
}
