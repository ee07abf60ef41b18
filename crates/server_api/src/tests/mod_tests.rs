use super::*;

async fn setup(chapters: &[Chapter]) -> ApiContext {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.import_chapters(chapters).await.expect("import");
    ApiContext::load(storage, SearchSettings::default())
        .await
        .expect("context")
}

fn sample_chapters() -> Vec<Chapter> {
    vec![
        Chapter::new(1, "Al-Fatihah", 7, 29),
        Chapter::new(103, "Al-Asr", 3, 14),
        Chapter::new(108, "Al-Kawthar", 3, 10),
        Chapter::new(112, "Al-Ikhlas", 4, 15),
        Chapter::new(113, "Al-Falaq", 5, 23),
        Chapter::new(114, "An-Nas", 6, 20),
    ]
}

#[tokio::test]
async fn load_snapshots_catalogue_in_number_order() {
    let ctx = setup(&sample_chapters()).await;
    assert_eq!(ctx.catalogue.len(), 6);
    assert_eq!(ctx.catalogue[0].name, "Al-Fatihah");
}

#[tokio::test]
async fn generates_names_for_exact_total() {
    let ctx = setup(&sample_chapters()).await;
    let sequence = generate_sequence(&ctx, SequenceRequest::new(10))
        .await
        .expect("sequence");

    let verses: u32 = sequence
        .iter()
        .map(|name| {
            ctx.catalogue
                .iter()
                .find(|chapter| &chapter.name == name)
                .expect("known chapter")
                .verses
        })
        .sum();
    assert_eq!(verses, 10);
}

#[tokio::test]
async fn rejects_non_positive_verse_count() {
    let ctx = setup(&sample_chapters()).await;
    for verse_count in [0, -4] {
        let err = generate_sequence(&ctx, SequenceRequest::new(verse_count))
            .await
            .expect_err("should fail");
        assert_eq!(err.code, ErrorCode::Validation);
    }
}

#[tokio::test]
async fn unreachable_goal_yields_empty_sequence() {
    let ctx = setup(&[Chapter::new(2, "Al-Baqarah", 286, 6116)]).await;
    let sequence = generate_sequence(&ctx, SequenceRequest::new(10))
        .await
        .expect("sequence");
    assert!(sequence.is_empty());
}

#[tokio::test]
async fn empty_catalogue_is_internal_error() {
    let ctx = setup(&[]).await;
    let err = generate_sequence(&ctx, SequenceRequest::new(10))
        .await
        .expect_err("should fail");
    assert_eq!(err.code, ErrorCode::Internal);
}
