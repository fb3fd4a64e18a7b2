//! String utilities for the domain layer.

/// Truncate a string to a maximum byte length with ellipsis (UTF-8 safe).
///
/// Used to keep upstream bodies and argument previews short in log lines.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_is_unchanged() {
        assert_eq!(truncate("Order 12345", 20), "Order 12345");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("123 Market St, San Francisco", 12), "123 Marke...");
    }

    #[test]
    fn test_truncate_multibyte_boundary() {
        // 'é' is 2 bytes; cutting inside it must back up
        let s = "Café Olé Delivery";
        let out = truncate(s, 7);
        assert_eq!(out, "Caf...");
    }
}
