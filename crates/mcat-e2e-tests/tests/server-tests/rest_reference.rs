use mcat_e2e_tests::{launch_env, prepare_env};
use serde_json::{Value, json};
use tracing::info;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_reference_data() {
    let (args, _config_guard) = prepare_env("test_reference_data").await.unwrap();
    let (client, base_url, _server) = launch_env(args).await.unwrap();

    for path in ["genres", "genres/"] {
        let response = client.get(base_url.join(path).unwrap()).send().await.unwrap();
        info!("Response: {:#?}", response);
        assert!(response.status().is_success());
        let genres: Value = response.json().await.unwrap();
        assert_eq!(3, genres.as_array().unwrap().len());
    }

    let response = client
        .get(base_url.join("directors/5").unwrap())
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let director: Value = response.json().await.unwrap();
    assert_eq!(json!({"id": 5, "name": "Coen"}), director);

    let response = client
        .get(base_url.join("directors/4").unwrap())
        .send()
        .await
        .unwrap();
    assert_eq!(404, response.status().as_u16());

    let response = client
        .post(base_url.join("genres/").unwrap())
        .json(&json!({"name": "Horror"}))
        .send()
        .await
        .unwrap();
    assert_eq!(405, response.status().as_u16());
}
