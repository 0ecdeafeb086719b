//! Tests for batched relation loading.

use rstest::rstest;

use super::*;
use crate::domain::ports::MockServiceRowSource;

fn feature(service_id: ServiceId, text: &str, order: i32) -> TextRelationRow {
    TextRelationRow {
        service_id,
        text: text.to_owned(),
        order,
    }
}

/// Mock that answers every relation select with no rows.
fn empty_source() -> MockServiceRowSource {
    let mut source = MockServiceRowSource::new();
    source.expect_select_text_rows().returning(|_, _| Ok(Vec::new()));
    source.expect_select_process_steps().returning(|_| Ok(Vec::new()));
    source.expect_select_gallery_images().returning(|_| Ok(Vec::new()));
    source.expect_select_testimonials().returning(|_| Ok(Vec::new()));
    source.expect_select_faqs().returning(|_| Ok(Vec::new()));
    source.expect_select_related_services().returning(|_| Ok(Vec::new()));
    source.expect_select_pricing_tiers().returning(|_| Ok(Vec::new()));
    source
}

#[rstest]
#[tokio::test]
async fn empty_id_set_skips_the_store() {
    let mut source = MockServiceRowSource::new();
    source.expect_select_text_rows().times(0);
    source.expect_select_faqs().times(0);

    let loader = RelationLoader::new(&source);
    let features = loader
        .text_rows(TextRelation::Feature, &[])
        .await
        .expect("empty load succeeds");
    let faqs = loader.faqs(&[]).await.expect("empty load succeeds");

    assert!(features.is_empty());
    assert!(faqs.is_empty());
}

#[rstest]
#[tokio::test]
async fn loader_sorts_by_order_key_and_keeps_ties_stable() {
    let a = ServiceId::random();
    let b = ServiceId::random();
    let mut source = MockServiceRowSource::new();
    source
        .expect_select_text_rows()
        .times(1)
        .return_once(move |_, _| {
            Ok(vec![
                feature(a, "third", 3),
                feature(b, "first-b", 1),
                feature(a, "first-a", 1),
            ])
        });

    let rows = RelationLoader::new(&source)
        .text_rows(TextRelation::Feature, &[a, b])
        .await
        .expect("load succeeds");

    let texts: Vec<_> = rows.iter().map(|row| row.text.as_str()).collect();
    assert_eq!(texts, ["first-b", "first-a", "third"]);
}

#[rstest]
#[tokio::test]
async fn loader_passes_the_whole_id_set_in_one_call() {
    let ids = [ServiceId::random(), ServiceId::random(), ServiceId::random()];
    let expected = ids.to_vec();
    let mut source = MockServiceRowSource::new();
    source
        .expect_select_faqs()
        .withf(move |service_ids: &[ServiceId]| service_ids == expected.as_slice())
        .times(1)
        .returning(|_| Ok(Vec::new()));

    RelationLoader::new(&source)
        .faqs(&ids)
        .await
        .expect("load succeeds");
}

#[rstest]
#[tokio::test]
async fn relations_are_grouped_per_service() {
    let a = ServiceId::random();
    let b = ServiceId::random();
    let mut source = MockServiceRowSource::new();
    source
        .expect_select_text_rows()
        .returning(move |relation, _| match relation {
            TextRelation::Feature => Ok(vec![feature(a, "SEO", 1), feature(b, "CMS", 1)]),
            _ => Ok(Vec::new()),
        });
    source.expect_select_process_steps().returning(|_| Ok(Vec::new()));
    source.expect_select_gallery_images().returning(|_| Ok(Vec::new()));
    source.expect_select_testimonials().returning(|_| Ok(Vec::new()));
    source.expect_select_faqs().returning(|_| Ok(Vec::new()));
    source.expect_select_related_services().returning(|_| Ok(Vec::new()));
    source.expect_select_pricing_tiers().returning(|_| Ok(Vec::new()));
    source.expect_select_pricing_features().times(0);

    let relations = load_service_relations(&source, &[a, b])
        .await
        .expect("relations load");

    assert_eq!(relations.features.get(&a), &[feature(a, "SEO", 1)]);
    assert_eq!(relations.features.get(&b), &[feature(b, "CMS", 1)]);
    assert!(relations.benefits.is_empty());
    assert!(relations.pricing.is_empty());
}

#[rstest]
#[case(ServiceRowSourceError::connection("pool exhausted"))]
#[case(ServiceRowSourceError::query("relation \"service_faqs\" does not exist"))]
#[tokio::test]
async fn any_loader_failure_aborts_the_whole_load(#[case] failure: ServiceRowSourceError) {
    let mut source = MockServiceRowSource::new();
    source.expect_select_text_rows().returning(|_, _| Ok(Vec::new()));
    source.expect_select_process_steps().returning(|_| Ok(Vec::new()));
    source.expect_select_gallery_images().returning(|_| Ok(Vec::new()));
    source.expect_select_testimonials().returning(|_| Ok(Vec::new()));
    let returned = failure.clone();
    source
        .expect_select_faqs()
        .return_once(move |_| Err(returned));
    source.expect_select_related_services().returning(|_| Ok(Vec::new()));
    source.expect_select_pricing_tiers().returning(|_| Ok(Vec::new()));

    let err = load_service_relations(&source, &[ServiceId::random()])
        .await
        .expect_err("load fails");

    assert_eq!(err, failure);
}

#[rstest]
#[tokio::test]
async fn empty_source_yields_empty_relations() {
    let source = empty_source();

    let relations = load_service_relations(&source, &[ServiceId::random()])
        .await
        .expect("relations load");

    assert_eq!(relations, ServiceRelations::default());
}
