//! Text formatting for scores, timestamps and titles.

use chrono::{DateTime, Utc};

/// Abbreviates a score or count for compact display.
///
/// `999` stays `999`, `1523` becomes `1.5k`, `2_300_000` becomes `2.3m`.
/// The unit is picked after rounding, so `999_950` reads `1.0m`.
#[must_use]
#[allow(clippy::cast_precision_loss)] // one decimal of precision is all we show
pub fn abbreviate_score(score: i64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e3, "k"), (1e6, "m"), (1e9, "b")];

    if score.unsigned_abs() < 1_000 {
        return score.to_string();
    }

    let mut abbreviated = String::new();
    for (scale, suffix) in UNITS {
        let tenths = (score as f64 * 10.0 / scale).round();
        abbreviated = format!("{:.1}{suffix}", tenths / 10.0);
        if tenths.abs() < 10_000.0 {
            break;
        }
    }
    abbreviated
}

/// Renders how long ago `then` was, relative to `now`.
///
/// Timestamps in the future (clock skew) read as "just now". Anything older
/// than a week is shown as a date.
#[must_use]
pub fn relative_timestamp(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d ago", elapsed.num_days())
    } else {
        then.format("%d %b %Y").to_string()
    }
}

/// Decodes the HTML entities Reddit escapes in titles.
#[must_use]
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        // Last, so "&amp;lt;" decodes to "&lt;" rather than "<".
        .replace("&amp;", "&")
}
