use image::{DynamicImage, GrayImage};
use menu_recipes::config::OcrConfig;
use menu_recipes::{CatalogStore, ExtractionPipeline, GoogleVisionEngine, JsonCatalogStore};
use mockito::Matcher;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_catalog(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

const CATALOG: &str = r#"
[
    {
        "ingredients": [
            {"name": "Hearty Radish", "norm_name": "hearty_raolsh", "type": "veg"},
            {"name": "Big Radish", "type": "veg"},
            {"name": "Raw Meat", "norm_name": "raw_meat", "type": "meat"}
        ],
        "meals": [
            {"ingredient1": "veg", "ingredient2": "meat", "effect": "Hearty"},
            {"ingredient_type_1": "veg", "ingredient_type_2": "veg", "effect": "Energizing"}
        ]
    }
]
"#;

#[test]
fn test_load_catalog_from_file() {
    let file = write_catalog(CATALOG);
    let store = JsonCatalogStore::from_path(file.path()).unwrap();

    assert_eq!(store.profile_count(), 1);
    let profile = store.profile(0).unwrap();
    assert_eq!(profile.ingredients[1].norm_name, "blg_raolsh");
    assert_eq!(profile.meals[1].effect, "Energizing");
    assert!(store.profile(1).is_err());
}

#[tokio::test]
async fn test_file_catalog_with_google_vision() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/images:annotate")
        .match_query(Matcher::UrlEncoded("key".into(), "test_key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"responses": [{"fullTextAnnotation": {"text": "Hearty Radlsh x3\nBig Raddish\nRaw Meet\n"}}]}"#,
        )
        .create_async()
        .await;

    let config = OcrConfig {
        engine: "google_vision".to_string(),
        api_key: Some("test_key".to_string()),
        base_url: server.url(),
        ..OcrConfig::default()
    };

    let file = write_catalog(CATALOG);
    let pipeline = ExtractionPipeline::builder()
        .ocr_engine(GoogleVisionEngine::new(&config).unwrap())
        .catalog(JsonCatalogStore::from_path(file.path()).unwrap())
        .build()
        .unwrap();

    let image = DynamicImage::ImageLuma8(GrayImage::new(32, 8));
    let recipes = pipeline.extract(&[image], 1).await.unwrap();

    mock.assert_async().await;
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].ingredient1, "Hearty Radish");
    assert_eq!(recipes[0].ingredient2, "Raw Meat");
    assert_eq!(recipes[0].effect, "Hearty");
    assert_eq!(recipes[1].ingredient1, "Hearty Radish");
    assert_eq!(recipes[1].ingredient2, "Big Radish");
    assert_eq!(recipes[1].effect, "Energizing");
}
