/// Format a floating-point number with thousands separators and a fixed number
/// of decimal places.
///
/// # Examples
///
/// ```
/// use standings_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5,  1), "1,234.5");
/// assert_eq!(format_number(1234567.0, 0), "1,234,567");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    let fixed = format!("{:.prec$}", value.abs(), prec = decimals as usize);
    let (int_str, frac_str) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut result = group_thousands(int_str);
    if let Some(frac) = frac_str {
        result.push('.');
        result.push_str(frac);
    }

    // "-0" and "-0.00" read as noise.
    let is_zero = result.chars().all(|c| matches!(c, '0' | '.' | ','));
    if value < 0.0 && !is_zero {
        format!("-{}", result)
    } else {
        result
    }
}

/// Format championship points: whole numbers without decimals, fractional
/// scores (half points for shortened races) with only the digits they need.
///
/// # Examples
///
/// ```
/// use standings_core::formatting::format_points;
///
/// assert_eq!(format_points(575.0), "575");
/// assert_eq!(format_points(387.5), "387.5");
/// assert_eq!(format_points(1029.25), "1,029.25");
/// ```
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        return format_number(points, 0);
    }
    let text = format_number(points, 2);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────
