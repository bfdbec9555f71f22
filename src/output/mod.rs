mod csv;
mod json;
mod text;

use serde::Deserialize;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// One smoothed sample, ready to be formatted
pub struct AverageOutput<'a> {
    /// Name of the stream the sample came from
    pub input: &'a str,
    /// Zero-based position of the sample in its stream
    pub index: u64,
    pub sample: f32,
    pub average: f32,
}

pub trait Formatter {
    fn format(&self, output: &AverageOutput) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> AverageOutput<'static> {
        AverageOutput {
            input: "a.txt",
            index: 2,
            sample: 3.0,
            average: 2.0,
        }
    }

    #[test]
    fn test_csv_format() {
        let formatter = create_formatter(OutputFormat::Csv, false);
        assert_eq!(formatter.header(), Some("input,index,sample,average"));
        assert_eq!(formatter.format(&output()), "a.txt,2,3,2");
    }

    #[test]
    fn test_csv_quotes_input_name() {
        let line = CsvFormatter.format(&AverageOutput {
            input: "my \"odd\", file.txt",
            ..output()
        });
        assert_eq!(line, r#""my ""odd"", file.txt",2,3,2"#);
    }

    #[test]
    fn test_json_format() {
        let formatter = create_formatter(OutputFormat::Json, false);
        assert_eq!(formatter.header(), None);
        let line = formatter.format(&output());
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["input"], "a.txt");
        assert_eq!(value["index"], 2);
        assert_eq!(value["sample"], 3.0);
        assert_eq!(value["average"], 2.0);
    }

    #[test]
    fn test_json_non_finite_is_null() {
        let formatter = JsonFormatter;
        let line = formatter.format(&AverageOutput {
            input: "quote\"d",
            index: 0,
            sample: f32::NAN,
            average: f32::INFINITY,
        });
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["input"], "quote\"d");
        assert!(value["sample"].is_null());
        assert!(value["average"].is_null());
    }

    #[test]
    fn test_text_format() {
        let formatter = create_formatter(OutputFormat::Text, false);
        assert_eq!(formatter.format(&output()), "2");

        let verbose = create_formatter(OutputFormat::Text, true);
        assert_eq!(verbose.format(&output()), "a.txt #2 sample: 3 average: 2");
    }
}
