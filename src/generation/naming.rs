//! Display names for provisioned cloud service instances

use std::fmt;

use rand::Rng;

/// Number of characters in the random suffix
pub const SUFFIX_LEN: usize = 4;

/// `{base}-{suffix}` where the suffix alternates lowercase letter and digit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedName {
    pub base: String,
    pub suffix: String,
}

impl fmt::Display for GeneratedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.base, self.suffix)
    }
}

/// Build a readable, low-collision name such as `app-cloudant-k3q8`.
///
/// Not cryptographically random and not checked for uniqueness.
pub fn generate_service_name(app_name: &str, service_type: &str) -> String {
    generate_service_name_with(&mut rand::rng(), app_name, service_type).to_string()
}

/// [`generate_service_name`] with an explicit random source
pub fn generate_service_name_with<R: Rng>(
    rng: &mut R,
    app_name: &str,
    service_type: &str,
) -> GeneratedName {
    let suffix = (0..SUFFIX_LEN)
        .map(|i| {
            if i % 2 == 0 {
                char::from(rng.random_range(b'a'..=b'z'))
            } else {
                char::from(b'0' + rng.random_range(0..10u8))
            }
        })
        .collect();

    GeneratedName {
        base: format!("{app_name}-{service_type}"),
        suffix,
    }
}
