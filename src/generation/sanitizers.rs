//! Identifier sanitizers for generated Swift projects

use once_cell::sync::Lazy;
use regex::Regex;

/// Name used when nothing usable is left after sanitizing
pub const FALLBACK_APP_NAME: &str = "SWIFTSERVERAPP";

static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());
static LEADING_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+").unwrap());

/// Turns a free-form application name into a valid Swift module name.
///
/// Strips every non-alphanumeric character, then any leading digits. When
/// nothing remains the generic [`FALLBACK_APP_NAME`] is used.
///
/// # Examples
/// ```
/// use swiftserve_scaffold::generation::sanitizers::sanitize_app_name;
///
/// assert_eq!(sanitize_app_name("b33ob4"), "b33ob4");
/// assert_eq!(sanitize_app_name("^33b33ob4"), "b33ob4");
/// assert_eq!(sanitize_app_name("*(&@"), "SWIFTSERVERAPP");
/// ```
pub fn sanitize_app_name(name: &str) -> String {
    let alphanumeric = NON_ALPHANUMERIC.replace_all(name, "");
    let sanitized = LEADING_DIGITS.replace(&alphanumeric, "");
    if sanitized.is_empty() {
        FALLBACK_APP_NAME.to_string()
    } else {
        sanitized.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_name_unchanged() {
        assert_eq!(sanitize_app_name("bob"), "bob");
        assert_eq!(sanitize_app_name("b33ob4"), "b33ob4");
    }

    #[test]
    fn test_leading_digits_stripped() {
        assert_eq!(sanitize_app_name("33b33ob4"), "b33ob4");
        assert_eq!(sanitize_app_name("^33b33ob4"), "b33ob4");
    }

    #[test]
    fn test_non_alphanumerics_stripped_everywhere() {
        assert_eq!(sanitize_app_name("*(&33b@33ob4"), "b33ob4");
        assert_eq!(sanitize_app_name("3*(&3 3b@33ob4"), "b33ob4");
        assert_eq!(sanitize_app_name("h3*(&33b@33ob4"), "h333b33ob4");
        assert_eq!(sanitize_app_name(" h3*(&33b@33ob4"), "h333b33ob4");
    }

    #[test]
    fn test_fallback_name() {
        assert_eq!(sanitize_app_name(""), FALLBACK_APP_NAME);
        assert_eq!(sanitize_app_name(" "), FALLBACK_APP_NAME);
        assert_eq!(sanitize_app_name("*(&@"), FALLBACK_APP_NAME);
        assert_eq!(sanitize_app_name("*(&33@334"), FALLBACK_APP_NAME);
    }
}
