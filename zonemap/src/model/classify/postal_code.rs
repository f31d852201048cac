use super::ClassifyError;
use regex::Regex;

/// validity test for postal code tag values: four digits optionally followed
/// by two letters. the four-digit numeric prefix is the classification code.
pub struct PostalCodeMatcher {
    pattern: Regex,
}

impl PostalCodeMatcher {
    const POSTAL_CODE_PATTERN: &'static str = r"^(\d{4})\s*([A-Za-z]{2})?$";

    pub fn new() -> Result<PostalCodeMatcher, ClassifyError> {
        let pattern = Regex::new(Self::POSTAL_CODE_PATTERN).map_err(|e| {
            ClassifyError::InternalError(format!("building postal code regex: {e}"))
        })?;
        Ok(PostalCodeMatcher { pattern })
    }

    /// extracts the numeric prefix from a valid tag value
    pub fn code(&self, value: &str) -> Option<u32> {
        let caps = self.pattern.captures(value.trim())?;
        caps[1].parse::<u32>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_postal_codes() {
        let matcher = PostalCodeMatcher::new().expect("test invariant failed: matcher");
        assert_eq!(matcher.code("1005AB"), Some(1005));
        assert_eq!(matcher.code("1005 AB"), Some(1005));
        assert_eq!(matcher.code("1005"), Some(1005));
        assert_eq!(matcher.code(" 1005ab "), Some(1005));
    }

    #[test]
    fn test_invalid_postal_codes() {
        let matcher = PostalCodeMatcher::new().expect("test invariant failed: matcher");
        assert_eq!(matcher.code("12A4"), None);
        assert_eq!(matcher.code("123"), None);
        assert_eq!(matcher.code("99999"), None);
        assert_eq!(matcher.code("1005ABC"), None);
        assert_eq!(matcher.code(""), None);
    }
}
