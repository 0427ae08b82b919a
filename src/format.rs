//! Display formatting for on-chain values.

/// Countdown until the next claim. Zero means the cooldown has elapsed.
pub fn format_remaining(seconds: u64) -> String {
    if seconds == 0 {
        return "Available now".to_string();
    }

    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;

    format!("{}h {}m {}s", h, m, s)
}

/// First 6 and last 4 characters of an address, placeholder when absent.
pub fn shorten(address: Option<&str>) -> String {
    match address {
        None | Some("") => "—".to_string(),
        Some(addr) if addr.len() <= 10 => addr.to_string(),
        Some(addr) => format!("{}…{}", &addr[..6], &addr[addr.len() - 4..]),
    }
}

/// Locale date-time for a unix timestamp. Zero doubles as "never claimed".
pub fn format_timestamp(ts: Option<u64>) -> String {
    match ts {
        None | Some(0) => "—".to_string(),
        Some(ts) => locale_datetime(ts),
    }
}

#[cfg(feature = "web")]
fn locale_datetime(ts: u64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ts as f64 * 1000.0));
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[cfg(not(feature = "web"))]
fn locale_datetime(ts: u64) -> String {
    format!("{} (unix)", ts)
}

/// Comma grouping for whole-dollar amounts.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_zero_is_available() {
        assert_eq!(format_remaining(0), "Available now");
    }

    #[test]
    fn remaining_decomposes_exactly() {
        assert_eq!(format_remaining(3661), "1h 1m 1s");
        assert_eq!(format_remaining(59), "0h 0m 59s");
        assert_eq!(format_remaining(86_400), "24h 0m 0s");
    }

    #[test]
    fn shorten_keeps_both_ends() {
        assert_eq!(shorten(Some("0x1234567890abcdef")), "0x1234…cdef");
    }

    #[test]
    fn shorten_placeholder_when_absent() {
        assert_eq!(shorten(None), "—");
        assert_eq!(shorten(Some("")), "—");
    }

    #[test]
    fn shorten_passes_short_strings_through() {
        assert_eq!(shorten(Some("0x1234")), "0x1234");
    }

    #[test]
    fn timestamp_placeholder_for_unclaimed() {
        assert_eq!(format_timestamp(None), "—");
        assert_eq!(format_timestamp(Some(0)), "—");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(3000), "3,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
