//! Two-level pricing resolution: tiers per service, features per tier.
//!
//! Pricing features reference their tier, not the service, so the feature
//! stage can only start once the tier ids are known. When no tiers exist the
//! feature stage is skipped outright rather than querying an empty id set.

use tracing::debug;

use crate::domain::ports::{ServiceRowSource, ServiceRowSourceError};

use super::aggregate::PricingTier;
use super::grouping::{GroupedRows, group_by};
use super::ids::{PricingTierId, ServiceId};
use super::relations::RelationLoader;
use super::rows::{PricingFeatureRow, PricingTierRow};

/// Load pricing tiers for `service_ids` and nest each tier's features.
///
/// The returned index is keyed by service id; each list keeps tier order
/// and each tier keeps feature order.
pub async fn resolve_pricing<S>(
    loader: &RelationLoader<'_, S>,
    service_ids: &[ServiceId],
) -> Result<GroupedRows<ServiceId, PricingTier>, ServiceRowSourceError>
where
    S: ServiceRowSource + ?Sized,
{
    let tiers = loader.pricing_tiers(service_ids).await?;
    let tier_ids: Vec<PricingTierId> = tiers.iter().map(|tier| tier.id).collect();

    let features = if tier_ids.is_empty() {
        debug!(
            services = service_ids.len(),
            "no pricing tiers; skipping feature stage"
        );
        GroupedRows::default()
    } else {
        group_by(loader.pricing_features(&tier_ids).await?, |feature| {
            feature.tier_id
        })
    };

    Ok(nest_pricing(tiers, &features))
}

/// Attach grouped features to their tiers and group the tiers by service.
///
/// Pure; a tier without feature rows gets an empty feature list.
#[must_use]
pub fn nest_pricing(
    tiers: Vec<PricingTierRow>,
    features: &GroupedRows<PricingTierId, PricingFeatureRow>,
) -> GroupedRows<ServiceId, PricingTier> {
    let nested = tiers.into_iter().map(|tier| {
        let tier_features = features
            .get(&tier.id)
            .iter()
            .map(|feature| feature.text.clone())
            .collect();
        (
            tier.service_id,
            PricingTier {
                name: tier.name,
                price: tier.price,
                description: tier.description,
                popular: tier.popular,
                features: tier_features,
            },
        )
    });
    group_by(nested, |(service_id, _)| *service_id).map_rows(|(_, tier)| tier)
}
