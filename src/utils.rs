use lazy_static::lazy_static;
use regex::Regex;

// Parse a target price from user input. Accepts a positive decimal number,
// optionally prefixed with '$'.
pub fn parse_target_price(input: &str) -> Option<f64> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^\$?(\d+(?:\.\d+)?)$").unwrap();
    }

    RE.captures(input.trim())
        .and_then(|cap| cap.get(1)?.as_str().parse::<f64>().ok())
        .filter(|price| *price > 0.0)
}

// Format a USD price for display
pub fn format_price(price: f64) -> String {
    if price < 1.0 {
        format!("${:.6}", price)
    } else {
        format!("${:.2}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_price_accepts_decimals() {
        assert_eq!(parse_target_price("65000"), Some(65000.0));
        assert_eq!(parse_target_price("0.35"), Some(0.35));
        assert_eq!(parse_target_price(" $120.50 "), Some(120.5));
    }

    #[test]
    fn test_parse_target_price_rejects_junk() {
        assert_eq!(parse_target_price("abc"), None);
        assert_eq!(parse_target_price("-5"), None);
        assert_eq!(parse_target_price("0"), None);
        assert_eq!(parse_target_price("65,000"), None);
        assert_eq!(parse_target_price(""), None);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(65000.0), "$65000.00");
        assert_eq!(format_price(0.35), "$0.350000");
    }
}
