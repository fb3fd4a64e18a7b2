//! Field formatting shared by the Senpex renderers.

use serde_json::Value;

/// Return the value only if it should produce a line: present, non-null,
/// non-empty and non-zero.
pub fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}

/// Plain rendering: strings without quotes, everything else as JSON
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `$` prefix; numbers with at most two fractional digits get exactly two.
pub fn money(value: &Value) -> String {
    match value {
        Value::Number(n) => {
            let raw = n.to_string();
            let decimals = raw.split_once('.').map_or(0, |(_, frac)| frac.len());
            match n.as_f64() {
                Some(f) if decimals <= 2 && !raw.contains(['e', 'E']) => format!("${:.2}", f),
                _ => format!("${}", raw),
            }
        }
        other => format!("${}", display(other)),
    }
}

pub fn miles(value: &Value) -> String {
    format!("{} miles", display(value))
}

/// `<s> seconds (<s / 60> minutes)` with integer division
pub fn seconds(value: &Value) -> String {
    let secs = display(value);
    match numeric(value) {
        Some(f) => format!("{} seconds ({} minutes)", secs, (f / 60.0).trunc() as i64),
        None => format!("{} seconds", secs),
    }
}

/// Numeric view of a number or a numeric string
pub fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Multi-line text under construction.
#[derive(Debug, Default)]
pub struct TextBlock {
    lines: Vec<String>,
}

impl TextBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(text.into());
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// `<label>: <value>` when the value is present
    pub fn field(&mut self, label: &str, value: Option<&Value>) -> &mut Self {
        self.field_with(label, value, display)
    }

    /// `<label>: <formatted value>` when the value is present
    pub fn field_with(
        &mut self,
        label: &str,
        value: Option<&Value>,
        format: fn(&Value) -> String,
    ) -> &mut Self {
        if let Some(v) = present(value) {
            self.lines.push(format!("{}: {}", label, format(v)));
        }
        self
    }

    /// Join with `\n`, dropping trailing and doubled blank lines.
    pub fn finish(self) -> String {
        let mut out: Vec<String> = Vec::with_capacity(self.lines.len());
        for line in self.lines {
            if line.is_empty() && out.last().is_none_or(|l| l.is_empty()) {
                continue;
            }
            out.push(line);
        }
        while out.last().is_some_and(|l| l.is_empty()) {
            out.pop();
        }
        out.join("\n")
    }
}
