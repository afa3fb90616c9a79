//! One-way masking of secrets for display.

const MASK: &str = "***";

/// Values this short are masked entirely.
const MIN_REVEAL_LEN: usize = 4;

/// Keeps the first and last characters of `secret` and replaces the middle with `***`.
///
/// Secrets shorter than four characters become `***`.
pub fn mask_secret(secret: &str) -> String {
    let mut chars = secret.chars();
    let (first, last) = match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if secret.chars().count() >= MIN_REVEAL_LEN => (first, last),
        _ => return MASK.to_string(),
    };
    format!("{first}{MASK}{last}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_and_last() {
        assert_eq!(mask_secret("tiger"), "t***r");
        assert_eq!(mask_secret("abcd"), "a***d");
    }

    #[test]
    fn short_values_fully_masked() {
        assert_eq!(mask_secret(""), "***");
        assert_eq!(mask_secret("a"), "***");
        assert_eq!(mask_secret("abc"), "***");
    }

    #[test]
    fn multibyte_characters() {
        assert_eq!(mask_secret("ünïcødé"), "ü***é");
    }
}
