use anyhow::Result;
use mcat_dal::movie::{Movie, MovieDetail, MovieFields};
use reqwest::{StatusCode, Url};
use tracing::info;

pub fn dune() -> MovieFields {
    MovieFields {
        title: Some(Some("Dune".to_string())),
        description: Some(Some("Desert planet".to_string())),
        trailer: Some(Some("http://x".to_string())),
        year: Some(Some(2021)),
        rating: Some(Some(8.0)),
        genre_id: Some(Some(1)),
        director_id: Some(Some(1)),
    }
}

pub fn movie_url(base_url: &Url, id: i64) -> Url {
    base_url.join(&format!("movies/{id}")).unwrap()
}

pub async fn create_movie<T>(client: &reqwest::Client, base_url: &Url, payload: &T) -> Result<Movie>
where
    T: serde::Serialize,
{
    let api_url = base_url.join("movies/")?;

    let response = client.post(api_url).json(payload).send().await?;
    info!("Response: {:#?}", response);
    assert_eq!(StatusCode::CREATED, response.status());

    let new_movie: Movie = response.json().await?;
    Ok(new_movie)
}

pub async fn get_movie(client: &reqwest::Client, base_url: &Url, id: i64) -> Result<MovieDetail> {
    let response = client.get(movie_url(base_url, id)).send().await?;
    assert_eq!(StatusCode::OK, response.status());

    let movie: MovieDetail = response.json().await?;
    Ok(movie)
}
