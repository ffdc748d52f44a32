/// Placeholder returned by format_duration if there is no valid duration to display.
pub const NO_DURATION: &str = "—";

/// parse_duration converts a clock-style duration string of the form H:MM:SS[.ff] into seconds.
/// Empty input, input with fewer than three components, and unparsable components result in None.
/// Components behind the third one are ignored.
pub fn parse_duration(text: Option<&str>) -> Option<f64> {
    let text = text?.trim();

    if text.is_empty() {
        return None;
    }

    let mut parts = text.split(':');
    let h = parse_component(parts.next()?)?;
    let m = parse_component(parts.next()?)?;
    let s = parse_component(parts.next()?)?;

    Some(h * 3600.0 + m * 60.0 + s)
}

/// parse_component parses a single non-negative duration component (hours, minutes or seconds).
fn parse_component(part: &str) -> Option<f64> {
    let part = part.trim();

    if part.starts_with('-') {
        return None;
    }

    part.parse::<f64>().ok().filter(|val| val.is_finite())
}

/// format_duration converts seconds into a string of the form [-]H:MM:SS.ff. Hours are neither
/// padded nor wrapped at 24h, minutes are padded to two digits, and seconds are printed with two
/// decimals and padded to five characters.
pub fn format_duration(seconds: Option<f64>) -> String {
    let total = match seconds {
        Some(val) if val.is_finite() => val,
        _ => return NO_DURATION.to_owned(),
    };

    let sign = if total < 0.0 { "-" } else { "" };
    let mut s = total.abs();
    let h = (s / 3600.0).floor();
    s -= h * 3600.0;
    let m = (s / 60.0).floor();
    s -= m * 60.0;

    format!("{}{}:{:02}:{:05.2}", sign, h as u64, m as u64, s)
}
