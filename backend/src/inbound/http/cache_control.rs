//! Cache-control policy for catalogue responses.

/// Catalogue responses must be revalidated before reuse.
pub const NO_CACHE: &str = "no-cache";

/// Build the cache-control header tuple for catalogue responses.
#[must_use]
pub const fn no_cache_header() -> (&'static str, &'static str) {
    ("Cache-Control", NO_CACHE)
}
