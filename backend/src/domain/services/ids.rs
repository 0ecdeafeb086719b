//! Identifiers and enumerations shared by service rows and aggregates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::slug::is_valid_slug;

/// Validation errors raised when constructing service identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceValidationError {
    /// Slug is empty or contains characters outside `[a-z0-9-]`.
    InvalidSlug {
        /// Rejected input.
        value: String,
    },
    /// Category string matches no known category.
    UnknownCategory {
        /// Rejected input.
        value: String,
    },
}

impl fmt::Display for ServiceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSlug { value } => write!(
                f,
                "service slug must contain lowercase ASCII letters, digits, and hyphens (got {value:?})"
            ),
            Self::UnknownCategory { value } => write!(f, "unknown service category: {value:?}"),
        }
    }
}

impl std::error::Error for ServiceValidationError {}

/// Opaque identity of a service (the aggregate root).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ServiceId(Uuid);

impl ServiceId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity of a pricing tier. Pricing features reference this, not the
/// owning service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PricingTierId(Uuid);

impl PricingTierId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PricingTierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique, URL-safe service slug.
///
/// ## Invariants
/// - Non-empty, trimmed, lowercase ASCII letters, digits, and hyphens only.
///
/// # Examples
/// ```
/// use studio_backend::domain::ServiceSlug;
///
/// let slug = ServiceSlug::new("web-design").expect("valid slug");
/// assert_eq!(slug.as_str(), "web-design");
/// assert!(ServiceSlug::new("Web Design").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceSlug(String);

impl ServiceSlug {
    /// Validate and wrap a slug.
    pub fn new(value: impl Into<String>) -> Result<Self, ServiceValidationError> {
        let text: String = value.into();
        if is_valid_slug(&text) {
            Ok(Self(text))
        } else {
            Err(ServiceValidationError::InvalidSlug { value: text })
        }
    }

    /// Borrow the slug text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ServiceSlug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ServiceSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catalogue category a service is listed under.
///
/// Serialised and stored in its kebab-case form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    /// `web-development`
    WebDevelopment,
    /// `mobile-development`
    MobileDevelopment,
    /// `ui-ux-design`
    UiUxDesign,
    /// `digital-marketing`
    DigitalMarketing,
    /// `ecommerce`
    Ecommerce,
    /// `consulting`
    Consulting,
}

impl ServiceCategory {
    /// Every category, in catalogue display order.
    pub const ALL: [Self; 6] = [
        Self::WebDevelopment,
        Self::MobileDevelopment,
        Self::UiUxDesign,
        Self::DigitalMarketing,
        Self::Ecommerce,
        Self::Consulting,
    ];

    /// Stable stored form of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WebDevelopment => "web-development",
            Self::MobileDevelopment => "mobile-development",
            Self::UiUxDesign => "ui-ux-design",
            Self::DigitalMarketing => "digital-marketing",
            Self::Ecommerce => "ecommerce",
            Self::Consulting => "consulting",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = ServiceValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| ServiceValidationError::UnknownCategory {
                value: value.to_owned(),
            })
    }
}
