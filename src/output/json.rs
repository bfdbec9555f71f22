use super::{AverageOutput, Formatter};

pub struct JsonFormatter;

fn json_number(value: f32) -> String {
    // JSON has no NaN or infinity
    if value.is_finite() {
        value.to_string()
    } else {
        "null".to_string()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, output: &AverageOutput) -> String {
        format!(
            r#"{{"input":{},"index":{},"sample":{},"average":{}}}"#,
            serde_json::Value::from(output.input),
            output.index,
            json_number(output.sample),
            json_number(output.average)
        )
    }
}
