//! Fixed schema constants: literals, value sets, and format patterns
//!
//! The schema is hand-coded, not user-supplied, so its contracts live here
//! as process-wide constants. Regexes are compiled once on first use and
//! shared read-only across all validation calls.
//!
//! Copyright (c) 2025 Podlint Team
//! Licensed under the Apache-2.0 license

use regex::Regex;
use std::sync::OnceLock;

/// The only accepted `apiVersion` literal
pub const API_VERSION: &str = "v1";

/// The only accepted `kind` literal
pub const KIND: &str = "Pod";

/// Accepted values for `spec.os`
pub const OS_VALUES: &[&str] = &["linux", "windows"];

/// Accepted values for a port's `protocol`
pub const PROTOCOLS: &[&str] = &["TCP", "UDP"];

/// Inclusive port range bounds
pub const PORT_MIN: i64 = 1;
pub const PORT_MAX: i64 = 65535;

static CONTAINER_NAME: OnceLock<Regex> = OnceLock::new();
static IMAGE_REF: OnceLock<Regex> = OnceLock::new();
static MEMORY_QUANTITY: OnceLock<Regex> = OnceLock::new();

/// Container names: lowercase alphanumeric segments joined by single
/// underscores
pub fn container_name() -> &'static Regex {
    CONTAINER_NAME.get_or_init(|| {
        Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)*$").expect("container name pattern must compile")
    })
}

/// Image references: `registry.bigbrother.io/<repo>:<tag>` where `<repo>`
/// contains no colon
pub fn image_ref() -> &'static Regex {
    IMAGE_REF.get_or_init(|| {
        Regex::new(r"^registry\.bigbrother\.io/[^:]+:[^:]+$").expect("image pattern must compile")
    })
}

/// Memory quantities: digits followed by a `Ki`, `Mi`, or `Gi` suffix
pub fn memory_quantity() -> &'static Regex {
    MEMORY_QUANTITY
        .get_or_init(|| Regex::new(r"^[0-9]+(Mi|Gi|Ki)$").expect("memory pattern must compile"))
}
