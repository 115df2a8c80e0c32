//! Display formatting shared by the pages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `$12.50` style price.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Uppercased first letter of a display name, `U` when there is none.
pub fn avatar_initial(name: Option<&str>) -> String {
    name.and_then(|n| n.trim().chars().next())
        .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
}

/// `HH:MM` part of an ISO 8601 timestamp such as `2024-05-01T09:30:12.5Z`.
///
/// Falls back to the raw string when it has no recognizable time part.
pub fn time_of_day(timestamp: &str) -> String {
    let Some((_, time)) = timestamp.split_once('T') else {
        return timestamp.to_owned();
    };
    let mut parts = time.split(':');
    let minutes = parts.next().zip(parts.next()).and_then(|(h, m)| Some((h, m.get(..2)?)));
    match minutes {
        Some((h, m)) if is_two_digits(h) && is_two_digits(m) => format!("{h}:{m}"),
        _ => timestamp.to_owned(),
    }
}

fn is_two_digits(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit())
}
