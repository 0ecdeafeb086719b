//! PostgreSQL-backed service row source.
//!
//! Each select checks out its own pooled connection so the concurrent
//! relation loads of one retrieval call do not serialise on a single
//! connection. Child selects use `= ANY($1)` over the whole id set.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ServiceFilter, ServiceRowSource, ServiceRowSourceError};
use crate::domain::services::{
    FaqRow, GalleryImageRow, PricingFeatureRow, PricingTierRow, ProcessStepRow, RelatedServiceRow,
    ServiceRecord, TestimonialRow, TextRelation, TextRelationRow,
};
use crate::domain::{PricingTierId, ServiceId};

use super::diesel_helpers::{collect_rows, map_diesel_error, map_pool_error};
use super::models::{
    FaqDbRow, GalleryImageDbRow, PricingFeatureDbRow, PricingTierDbRow, ProcessStepDbRow,
    RelatedServiceDbRow, ServiceRow, TestimonialDbRow, TextRow,
};
use super::pool::DbPool;
use super::schema::{
    service_benefits, service_deliverables, service_faqs, service_features,
    service_gallery_images, service_pricing_features, service_pricing_tiers,
    service_process_steps, service_related_services, service_technologies, service_testimonials,
    services,
};

/// Select `(service_id, content, sort_order)` from a text relation for `$ids`.
macro_rules! text_relation_query {
    ($table:ident, $ids:expr) => {
        $table::table
            .filter($table::service_id.eq_any($ids))
            .order_by(($table::sort_order, $table::id))
            .select(($table::service_id, $table::content, $table::sort_order))
    };
}

macro_rules! load_text_relation {
    ($conn:expr, $table:ident, $ids:expr) => {
        text_relation_query!($table, $ids).load::<TextRow>($conn).await
    };
}

/// Links owned by `$ids`, joined to the linked service row, in link order.
macro_rules! related_services_query {
    ($ids:expr) => {
        service_related_services::table
            .inner_join(services::table)
            .filter(service_related_services::service_id.eq_any($ids))
            .order_by((
                service_related_services::created_at,
                service_related_services::id,
            ))
            .select((
                service_related_services::service_id,
                services::id,
                services::title,
                services::slug,
                services::short_description,
                services::category,
                services::featured_image,
            ))
    };
}

/// Parent rows matching `filter`, oldest first with `id` as tie-breaker.
fn services_query(filter: &ServiceFilter) -> services::BoxedQuery<'_, Pg> {
    let query = services::table
        .order_by((services::created_at, services::id))
        .into_boxed();
    match filter {
        ServiceFilter::All => query,
        ServiceFilter::Slug(slug) => query.filter(services::slug.eq(slug.as_str())),
        ServiceFilter::Category(category) => query.filter(services::category.eq(category.as_str())),
    }
}

fn service_uuids(ids: &[ServiceId]) -> Vec<Uuid> {
    ids.iter().map(|id| *id.as_uuid()).collect()
}

fn tier_uuids(ids: &[PricingTierId]) -> Vec<Uuid> {
    ids.iter().map(|id| *id.as_uuid()).collect()
}

const fn text_table_name(relation: TextRelation) -> &'static str {
    match relation {
        TextRelation::Feature => "service_features",
        TextRelation::Benefit => "service_benefits",
        TextRelation::Technology => "service_technologies",
        TextRelation::Deliverable => "service_deliverables",
    }
}

/// Diesel-backed implementation of [`ServiceRowSource`].
#[derive(Clone)]
pub struct DieselServiceRowSource {
    pool: DbPool,
}

impl DieselServiceRowSource {
    /// Create a new row source over the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/studio")).await?;
    /// let source = DieselServiceRowSource::new(pool);
    /// ```
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRowSource for DieselServiceRowSource {
    async fn select_services(
        &self,
        filter: &ServiceFilter,
    ) -> Result<Vec<ServiceRecord>, ServiceRowSourceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ServiceRow> = services_query(filter)
            .select(ServiceRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err, "services"))?;
        collect_rows(rows, "services")
    }

    async fn select_text_rows(
        &self,
        relation: TextRelation,
        service_ids: &[ServiceId],
    ) -> Result<Vec<TextRelationRow>, ServiceRowSourceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let ids = service_uuids(service_ids);
        let rows = match relation {
            TextRelation::Feature => load_text_relation!(&mut conn, service_features, ids),
            TextRelation::Benefit => load_text_relation!(&mut conn, service_benefits, ids),
            TextRelation::Technology => load_text_relation!(&mut conn, service_technologies, ids),
            TextRelation::Deliverable => load_text_relation!(&mut conn, service_deliverables, ids),
        }
        .map_err(|err| map_diesel_error(&err, text_table_name(relation)))?;
        Ok(rows.into_iter().map(TextRelationRow::from).collect())
    }

    async fn select_process_steps(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<ProcessStepRow>, ServiceRowSourceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProcessStepDbRow> = service_process_steps::table
            .filter(service_process_steps::service_id.eq_any(service_uuids(service_ids)))
            .order_by((service_process_steps::step, service_process_steps::id))
            .select(ProcessStepDbRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err, "service_process_steps"))?;
        Ok(rows.into_iter().map(ProcessStepRow::from).collect())
    }

    async fn select_gallery_images(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<GalleryImageRow>, ServiceRowSourceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<GalleryImageDbRow> = service_gallery_images::table
            .filter(service_gallery_images::service_id.eq_any(service_uuids(service_ids)))
            .order_by((
                service_gallery_images::sort_order,
                service_gallery_images::id,
            ))
            .select(GalleryImageDbRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err, "service_gallery_images"))?;
        Ok(rows.into_iter().map(GalleryImageRow::from).collect())
    }

    async fn select_testimonials(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<TestimonialRow>, ServiceRowSourceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<TestimonialDbRow> = service_testimonials::table
            .filter(service_testimonials::service_id.eq_any(service_uuids(service_ids)))
            .order_by((service_testimonials::created_at, service_testimonials::id))
            .select(TestimonialDbRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err, "service_testimonials"))?;
        Ok(rows.into_iter().map(TestimonialRow::from).collect())
    }

    async fn select_faqs(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<FaqRow>, ServiceRowSourceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<FaqDbRow> = service_faqs::table
            .filter(service_faqs::service_id.eq_any(service_uuids(service_ids)))
            .order_by((service_faqs::sort_order, service_faqs::id))
            .select(FaqDbRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err, "service_faqs"))?;
        Ok(rows.into_iter().map(FaqRow::from).collect())
    }

    async fn select_related_services(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<RelatedServiceRow>, ServiceRowSourceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<RelatedServiceDbRow> = related_services_query!(service_uuids(service_ids))
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err, "service_related_services"))?;
        collect_rows(rows, "service_related_services")
    }

    async fn select_pricing_tiers(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<PricingTierRow>, ServiceRowSourceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PricingTierDbRow> = service_pricing_tiers::table
            .filter(service_pricing_tiers::service_id.eq_any(service_uuids(service_ids)))
            .order_by((service_pricing_tiers::sort_order, service_pricing_tiers::id))
            .select(PricingTierDbRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err, "service_pricing_tiers"))?;
        Ok(rows.into_iter().map(PricingTierRow::from).collect())
    }

    async fn select_pricing_features(
        &self,
        tier_ids: &[PricingTierId],
    ) -> Result<Vec<PricingFeatureRow>, ServiceRowSourceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PricingFeatureDbRow> = service_pricing_features::table
            .filter(service_pricing_features::tier_id.eq_any(tier_uuids(tier_ids)))
            .order_by((
                service_pricing_features::sort_order,
                service_pricing_features::id,
            ))
            .select(PricingFeatureDbRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err, "service_pricing_features"))?;
        Ok(rows.into_iter().map(PricingFeatureRow::from).collect())
    }
}
