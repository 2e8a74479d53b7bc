use std::borrow::Cow;
use std::fmt;

const KEEP_PREFIX: usize = 6;
const KEEP_SUFFIX: usize = 3;
const MIN_MASKABLE_LENGTH: usize = KEEP_PREFIX + KEEP_SUFFIX + 1;

/// Redacts the middle of a sensitive value, keeping the first 6 and last 3
/// characters. Values of 9 characters or fewer are returned unchanged.
pub fn mask(value: &str) -> Cow<'_, str> {
    let length = value.chars().count();
    if length < MIN_MASKABLE_LENGTH {
        return Cow::Borrowed(value);
    }

    let mut masked = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        if i < KEEP_PREFIX || i >= length - KEEP_SUFFIX {
            masked.push(c);
        } else {
            masked.push('*');
        }
    }

    Cow::Owned(masked)
}

/// Display adapter that prints a value through [`mask`], for log lines.
pub struct Masked<'a>(pub &'a str);

impl fmt::Display for Masked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask(self.0))
    }
}

impl fmt::Debug for Masked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", mask(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1234567890123", "123456****123")]
    #[case("4111111111111111", "411111*******111")]
    #[case("1234567890", "123456*890")]
    #[case("12345678901234567890", "123456***********890")]
    fn masks_the_middle(#[case] input: &str, #[case] expected: &str) {
        let masked = mask(input);

        assert_eq!(masked, expected);
        assert_eq!(masked.chars().count(), input.chars().count());
    }

    #[rstest]
    #[case("")]
    #[case("12345")]
    #[case("123456789")]
    fn short_values_are_left_alone(#[case] input: &str) {
        assert!(matches!(mask(input), Cow::Borrowed(v) if v == input));
    }

    #[test]
    fn optional_values_pass_through() {
        let absent: Option<&str> = None;
        assert_eq!(absent.map(mask), None);
    }

    #[test]
    fn masked_display_hides_the_card_number() {
        assert_eq!(Masked("4111111111111111").to_string(), "411111*******111");
        assert_eq!(format!("{:?}", Masked("4111111111111111")), "\"411111*******111\"");
    }
}
