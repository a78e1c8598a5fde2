//! Cloud catalog metadata for provisioned services
//!
//! Maps the generator's canonical service kinds onto the marketplace's
//! service label and the plan requested when none is chosen. Unknown kinds
//! are passed through unchanged with the `Lite` plan.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Plan used for kinds without an entry
pub const DEFAULT_PLAN: &str = "Lite";

/// Catalog label and default plan of one service kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetadata<'a> {
    pub catalog_label: &'a str,
    pub default_plan: &'a str,
}

static CATALOG: Lazy<HashMap<&'static str, ServiceMetadata<'static>>> = Lazy::new(|| {
    [
        ("cloudant", "cloudantNoSQLDB", "Lite"),
        ("redis", "compose-for-redis", "Standard"),
        ("objectstorage", "Object-Storage", "Free"),
        ("appid", "AppID", "Graduated tier"),
        ("watsonconversation", "conversation", "Free"),
        ("alertnotification", "AlertNotification", "Authorized Users"),
        ("pushnotifications", "imfpush", "Lite"),
    ]
    .into_iter()
    .map(|(kind, catalog_label, default_plan)| {
        (
            kind,
            ServiceMetadata {
                catalog_label,
                default_plan,
            },
        )
    })
    .collect()
});

/// Catalog label and default plan for `kind`
pub fn service_metadata(kind: &str) -> ServiceMetadata<'_> {
    match CATALOG.get(kind) {
        Some(metadata) => *metadata,
        None => ServiceMetadata {
            catalog_label: kind,
            default_plan: DEFAULT_PLAN,
        },
    }
}

/// Marketplace label for `kind`; unknown kinds are returned unchanged
pub fn catalog_label(kind: &str) -> &str {
    service_metadata(kind).catalog_label
}

/// Default plan for `kind`; unknown kinds get `Lite`
pub fn default_plan(kind: &str) -> &str {
    service_metadata(kind).default_plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_labels() {
        assert_eq!(catalog_label("cloudant"), "cloudantNoSQLDB");
        assert_eq!(catalog_label("redis"), "compose-for-redis");
        assert_eq!(catalog_label("objectstorage"), "Object-Storage");
        assert_eq!(catalog_label("appid"), "AppID");
        assert_eq!(catalog_label("watsonconversation"), "conversation");
        assert_eq!(catalog_label("alertnotification"), "AlertNotification");
        assert_eq!(catalog_label("pushnotifications"), "imfpush");
    }

    #[test]
    fn test_default_plans() {
        assert_eq!(default_plan("cloudant"), "Lite");
        assert_eq!(default_plan("redis"), "Standard");
        assert_eq!(default_plan("objectstorage"), "Free");
        assert_eq!(default_plan("appid"), "Graduated tier");
        assert_eq!(default_plan("watsonconversation"), "Free");
        assert_eq!(default_plan("alertnotification"), "Authorized Users");
        assert_eq!(default_plan("pushnotifications"), "Lite");
    }

    #[test]
    fn test_unrecognised_kind() {
        assert_eq!(catalog_label("unrecognised"), "unrecognised");
        assert_eq!(default_plan("unrecognised"), "Lite");
        assert_eq!(
            service_metadata("unrecognised"),
            ServiceMetadata {
                catalog_label: "unrecognised",
                default_plan: "Lite",
            }
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(catalog_label("Cloudant"), "Cloudant");
    }
}
