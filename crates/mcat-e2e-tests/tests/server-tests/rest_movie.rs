use mcat_dal::movie::{MovieDetail, MovieFields};
use mcat_e2e_tests::{
    launch_env, prepare_env,
    rest::{create_movie, dune, get_movie, movie_url},
};
use serde_json::{Value, json};
use tracing::info;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_movie_round_trip() {
    let (args, _config_guard) = prepare_env("test_movie_round_trip").await.unwrap();
    let (client, base_url, _server) = launch_env(args).await.unwrap();

    let payload = json!({
        "id": 999,
        "title": "Dune",
        "description": "...",
        "trailer": "http://x",
        "year": 2021,
        "rating": 8.0,
        "genre_id": 1,
        "director_id": 1
    });
    let created = create_movie(&client, &base_url, &payload).await.unwrap();
    assert_ne!(999, created.id);

    let movie = get_movie(&client, &base_url, created.id).await.unwrap();
    info!("Movie: {:#?}", movie);
    assert_eq!(
        MovieDetail {
            id: created.id,
            title: Some("Dune".to_string()),
            description: Some("...".to_string()),
            trailer: Some("http://x".to_string()),
            year: Some(2021),
            rating: Some(8.0),
            genre_id: 1,
            director_id: 1,
            genre: "Sci-Fi".to_string(),
            director: "Villeneuve".to_string(),
        },
        movie
    );

    let response = client.get(movie_url(&base_url, 12345)).send().await.unwrap();
    assert_eq!(404, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!("Movie with id 12345 not found", body["error"]);
}

#[tokio::test]
#[traced_test]
async fn test_movie_updates() {
    let (args, _config_guard) = prepare_env("test_movie_updates").await.unwrap();
    let (client, base_url, _server) = launch_env(args).await.unwrap();

    let created = create_movie(&client, &base_url, &dune()).await.unwrap();
    let url = movie_url(&base_url, created.id);

    let replacement = MovieFields {
        title: Some(Some("Oppenheimer".to_string())),
        description: Some(Some("Trinity".to_string())),
        trailer: Some(Some("http://o".to_string())),
        year: Some(Some(2023)),
        rating: Some(Some(8.3)),
        genre_id: Some(Some(2)),
        director_id: Some(Some(2)),
    };
    let response = client.put(url.clone()).json(&replacement).send().await.unwrap();
    assert_eq!(204, response.status().as_u16());
    let movie = get_movie(&client, &base_url, created.id).await.unwrap();
    assert_eq!("Nolan", movie.director);
    assert_eq!("Drama", movie.genre);

    let response = client
        .put(url.clone())
        .json(&json!({"title": "Tenet"}))
        .send()
        .await
        .unwrap();
    assert_eq!(400, response.status().as_u16());
    assert_eq!(movie, get_movie(&client, &base_url, created.id).await.unwrap());

    let response = client
        .patch(url.clone())
        .json(&json!({"rating": 9.0, "unknown": true}))
        .send()
        .await
        .unwrap();
    assert_eq!(204, response.status().as_u16());
    let patched = get_movie(&client, &base_url, created.id).await.unwrap();
    assert_eq!(Some(9.0), patched.rating);
    assert_eq!(MovieDetail { rating: Some(9.0), ..movie }, patched);

    let response = client.delete(url.clone()).send().await.unwrap();
    assert_eq!(204, response.status().as_u16());

    let after_delete = [
        client.get(url.clone()),
        client.put(url.clone()).json(&replacement),
        client.patch(url.clone()).json(&json!({"title": "X"})),
        client.delete(url.clone()),
    ];
    for request in after_delete {
        let response = request.send().await.unwrap();
        assert_eq!(404, response.status().as_u16());
    }
}

#[tokio::test]
#[traced_test]
async fn test_movie_filters() {
    let (args, _config_guard) = prepare_env("test_movie_filters").await.unwrap();
    let (client, base_url, _server) = launch_env(args).await.unwrap();

    let combinations = [(1, 1), (1, 2), (3, 5), (3, 5), (3, 1)];
    for (genre_id, director_id) in combinations {
        let payload = MovieFields {
            genre_id: Some(Some(genre_id)),
            director_id: Some(Some(director_id)),
            ..dune()
        };
        create_movie(&client, &base_url, &payload).await.unwrap();
    }

    let list = async |query: &str| -> Vec<MovieDetail> {
        let mut url = base_url.join("movies/").unwrap();
        url.set_query(Some(query));
        let response = client.get(url).send().await.unwrap();
        assert!(response.status().is_success());
        response.json().await.unwrap()
    };

    assert_eq!(5, list("").await.len());

    let comedies = list("genre_id=3").await;
    assert_eq!(3, comedies.len());
    assert!(comedies.iter().all(|m| m.genre_id == 3));

    let coen_comedies = list("genre_id=3&director_id=5").await;
    assert_eq!(2, coen_comedies.len());
    assert!(
        coen_comedies
            .iter()
            .all(|m| m.genre_id == 3 && m.director_id == 5)
    );

    assert!(list("genre_id=2").await.is_empty());
}
