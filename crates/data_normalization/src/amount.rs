use serde_json::Value;

/// Converts a raw field value into a canonical finite amount.
///
/// The reporting backend mixes native numbers with locale-formatted strings
/// (`"1.234,56"`, `"1,234"`, `"R$ 50,00"`) and the occasional null or empty
/// cell. Anything that cannot be read as a number resolves to `0.0`; the
/// function never panics and never returns NaN or an infinity.
pub fn parse_amount(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => parse_amount_str(s),
        _ => 0.0,
    }
}

/// Variant of [`parse_amount`] for a field that may be missing entirely.
pub fn parse_amount_opt(value: Option<&Value>) -> f64 {
    value.map(parse_amount).unwrap_or(0.0)
}

/// Parses a locale-formatted amount string.
///
/// With both separators present the string is read as Brazilian format
/// (`.` grouping, `,` decimal). With only commas, a final segment of at most
/// two digits marks the comma as a decimal separator; a longer segment marks
/// it as a thousands separator. Heuristic: an input like `"12,345"` is
/// genuinely ambiguous between conventions and reads as `12345`.
pub fn parse_amount_str(raw: &str) -> f64 {
    let cleaned = sanitize(raw);
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return 0.0;
    }

    let has_comma = cleaned.contains(',');
    let has_dot = cleaned.contains('.');

    let normalized = if has_comma && has_dot {
        cleaned.replace('.', "").replace(',', ".")
    } else if has_comma {
        let trailing = cleaned.rsplit(',').next().map(str::len).unwrap_or(0);
        if trailing <= 2 {
            cleaned.replace(',', ".")
        } else {
            cleaned.replace(',', "")
        }
    } else {
        cleaned
    };

    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Extracts the digits from free text and reads them as an unsigned count.
///
/// Used on numeric answers embedded in prose: `"around 120 units"` becomes
/// `120`. No digits, or a value too large for `u64`, yields `0`.
pub fn parse_count(text: &str) -> u64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Keeps digits, separators and a leading minus; drops currency symbols,
/// spaces and any other decoration.
fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '0'..='9' | '.' | ',' => out.push(c),
            '-' if out.is_empty() => out.push('-'),
            _ => {}
        }
    }
    out
}
