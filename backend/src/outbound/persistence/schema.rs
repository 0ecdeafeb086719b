//! Diesel table definitions for the service catalogue schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Parent service rows. `slug` is unique.
    services (id) {
        id -> Uuid,
        slug -> Varchar,
        title -> Varchar,
        short_description -> Text,
        description -> Text,
        /// Kebab-case category name.
        category -> Varchar,
        timeline -> Varchar,
        featured_image -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    service_features (id) {
        id -> Uuid,
        service_id -> Uuid,
        content -> Text,
        sort_order -> Int4,
    }
}

diesel::table! {
    service_benefits (id) {
        id -> Uuid,
        service_id -> Uuid,
        content -> Text,
        sort_order -> Int4,
    }
}

diesel::table! {
    service_technologies (id) {
        id -> Uuid,
        service_id -> Uuid,
        content -> Text,
        sort_order -> Int4,
    }
}

diesel::table! {
    service_deliverables (id) {
        id -> Uuid,
        service_id -> Uuid,
        content -> Text,
        sort_order -> Int4,
    }
}

diesel::table! {
    service_process_steps (id) {
        id -> Uuid,
        service_id -> Uuid,
        step -> Int4,
        title -> Varchar,
        description -> Text,
        duration -> Nullable<Varchar>,
    }
}

diesel::table! {
    service_gallery_images (id) {
        id -> Uuid,
        service_id -> Uuid,
        image_url -> Text,
        sort_order -> Int4,
    }
}

diesel::table! {
    /// Testimonials have no order column; insertion order is `created_at`.
    service_testimonials (id) {
        id -> Uuid,
        service_id -> Uuid,
        quote -> Text,
        author -> Varchar,
        company -> Varchar,
        avatar -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    service_faqs (id) {
        id -> Uuid,
        service_id -> Uuid,
        question -> Text,
        answer -> Text,
        sort_order -> Int4,
    }
}

diesel::table! {
    /// Directed links from `service_id` to `related_service_id`.
    service_related_services (id) {
        id -> Uuid,
        service_id -> Uuid,
        related_service_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    service_pricing_tiers (id) {
        id -> Uuid,
        service_id -> Uuid,
        name -> Varchar,
        /// Display string, e.g. `$2,000`.
        price -> Varchar,
        description -> Text,
        popular -> Bool,
        sort_order -> Int4,
    }
}

diesel::table! {
    /// Features belong to a tier, never directly to a service.
    service_pricing_features (id) {
        id -> Uuid,
        tier_id -> Uuid,
        content -> Text,
        sort_order -> Int4,
    }
}

diesel::joinable!(service_related_services -> services (related_service_id));
diesel::joinable!(service_pricing_features -> service_pricing_tiers (tier_id));

diesel::allow_tables_to_appear_in_same_query!(
    services,
    service_features,
    service_benefits,
    service_technologies,
    service_deliverables,
    service_process_steps,
    service_gallery_images,
    service_testimonials,
    service_faqs,
    service_related_services,
    service_pricing_tiers,
    service_pricing_features,
);
