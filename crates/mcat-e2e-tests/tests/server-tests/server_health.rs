use mcat_e2e_tests::{base_url, prepare_env, spawn_server};
use tracing::info;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_health() {
    let (args, _config_guard) = prepare_env("test_health").await.unwrap();
    let base_url = base_url(&args).unwrap();

    let _server = spawn_server(args).await.unwrap();

    let client = reqwest::Client::new();

    let url = base_url.join("health").unwrap();
    let response = client.get(url).send().await.unwrap();
    info! {"Response: {:#?}", response};
    assert!(response.status().is_success());
    assert_eq!("OK", response.text().await.unwrap());
}

#[tokio::test]
#[traced_test]
async fn test_database_created() {
    let (args, _config_guard) = prepare_env("test_database_created").await.unwrap();
    let db_file = args.data_dir().join("mcat.db");
    assert!(!db_file.exists());

    let _server = spawn_server(args).await.unwrap();
    assert!(db_file.exists());
}
