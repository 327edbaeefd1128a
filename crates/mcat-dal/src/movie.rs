use std::{fmt::Display, str::FromStr};

use futures::TryStreamExt as _;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::{Acquire, Executor, QueryBuilder};
use tracing::debug;

use crate::{ChosenDB, Error, error::Result};

const ENTITY: &str = "Movie";

const MOVIE_COLUMNS: &str =
    "id, title, description, trailer, year, rating, genre_id, director_id";

const DETAIL_SELECT: &str = r#"
    SELECT m.id, m.title, m.description, m.trailer, m.year, m.rating, m.genre_id, m.director_id,
    g.name AS genre, d.name AS director
    FROM movie m
    JOIN director d ON m.director_id = d.id
    JOIN genre g ON m.genre_id = g.id
    "#;

const COUNT_SELECT: &str = r#"
    SELECT count(*)
    FROM movie m
    JOIN director d ON m.director_id = d.id
    JOIN genre g ON m.genre_id = g.id
    "#;

/// Stored movie row, as returned after creation.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, sqlx::FromRow)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Movie {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

/// Movie joined with names of its genre and director.
///
/// Only movies with existing genre and director have this representation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MovieDetail {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: i64,
    pub director_id: i64,
    pub genre: String,
    pub director: String,
}

/// Writable movie fields accepted from clients.
///
/// Outer `None` is a key absent from the payload, `Some(None)` is an explicit `null`.
/// Any other key in the payload (including `id`) is ignored.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MovieFields {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub trailer: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub year: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub rating: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub director_id: Option<Option<i64>>,
}

impl MovieFields {
    /// Fails with the name of first field, which is not present.
    pub fn ensure_complete(&self) -> Result<()> {
        let missing = [
            ("title", self.title.is_none()),
            ("description", self.description.is_none()),
            ("trailer", self.trailer.is_none()),
            ("year", self.year.is_none()),
            ("rating", self.rating.is_none()),
            ("genre_id", self.genre_id.is_none()),
            ("director_id", self.director_id.is_none()),
        ]
        .into_iter()
        .find_map(|(name, missing)| missing.then_some(name));

        match missing {
            Some(name) => Err(Error::MissingField(name)),
            None => Ok(()),
        }
    }

    /// Present fields (`null` included) win, absent ones are taken from stored record.
    pub fn merged_into(self, stored: Movie) -> Movie {
        Movie {
            id: stored.id,
            title: self.title.unwrap_or(stored.title),
            description: self.description.unwrap_or(stored.description),
            trailer: self.trailer.unwrap_or(stored.trailer),
            year: self.year.unwrap_or(stored.year),
            rating: self.rating.unwrap_or(stored.rating),
            genre_id: self.genre_id.unwrap_or(stored.genre_id),
            director_id: self.director_id.unwrap_or(stored.director_id),
        }
    }
}

// `default` keeps absent key as `None`, so only present keys get here
fn present<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Optional equality filters for movie listing, combined with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct MovieFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub director_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub genre_id: Option<i64>,
}

impl MovieFilter {
    pub fn is_empty(&self) -> bool {
        self.director_id.is_none() && self.genre_id.is_none()
    }
}

// query string sends `?genre_id=` for empty form fields
fn empty_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let value = Option::<String>::deserialize(de)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn joined_query<'q>(select: &str, filter: &MovieFilter) -> QueryBuilder<'q, ChosenDB> {
    let mut query = QueryBuilder::new(select);
    let mut conjunction = " WHERE ";
    if let Some(director_id) = filter.director_id {
        query
            .push(conjunction)
            .push("m.director_id = ")
            .push_bind(director_id);
        conjunction = " AND ";
    }
    if let Some(genre_id) = filter.genre_id {
        query
            .push(conjunction)
            .push("m.genre_id = ")
            .push_bind(genre_id);
    }
    query
}

pub type MovieRepository = MovieRepositoryImpl<crate::Pool>;

pub struct MovieRepositoryImpl<E> {
    executor: E,
}

impl<'c, E> MovieRepositoryImpl<E>
where
    for<'a> &'a E: Executor<'c, Database = ChosenDB> + Acquire<'c, Database = ChosenDB>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub async fn list(&self, filter: &MovieFilter) -> Result<Vec<MovieDetail>> {
        let mut query = joined_query(DETAIL_SELECT, filter);
        query.push(" ORDER BY m.id");
        let records = query
            .build_query_as::<MovieDetail>()
            .fetch(&self.executor)
            .try_collect::<Vec<_>>()
            .await?;
        Ok(records)
    }

    pub async fn count(&self, filter: &MovieFilter) -> Result<u64> {
        let mut query = joined_query(COUNT_SELECT, filter);
        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(&self.executor)
            .await?;
        Ok(count as u64)
    }

    pub async fn get(&self, id: i64) -> Result<MovieDetail> {
        let mut query = QueryBuilder::<ChosenDB>::new(DETAIL_SELECT);
        query.push(" WHERE m.id = ").push_bind(id);
        let record = query
            .build_query_as::<MovieDetail>()
            .fetch_optional(&self.executor)
            .await?;
        record.ok_or_else(|| Error::not_found(ENTITY, id))
    }

    pub async fn find(&self, id: i64) -> Result<Option<Movie>> {
        find(id, &self.executor).await
    }

    pub async fn create(&self, payload: MovieFields) -> Result<Movie> {
        let values = payload.merged_into(Movie::default());
        let mut transaction = self.executor.begin().await?;
        let result = sqlx::query(
            "INSERT INTO movie (title, description, trailer, year, rating, genre_id, director_id)
            VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&values.title)
        .bind(&values.description)
        .bind(&values.trailer)
        .bind(values.year)
        .bind(values.rating)
        .bind(values.genre_id)
        .bind(values.director_id)
        .execute(&mut *transaction)
        .await?;

        let id = result.last_insert_rowid();
        let record = find(id, &mut *transaction)
            .await?
            .ok_or_else(|| Error::not_found(ENTITY, id))?;
        transaction.commit().await?;
        debug!("Created movie {id}");
        Ok(record)
    }

    /// Overwrites all fields, all of them must be present.
    pub async fn replace(&self, id: i64, payload: MovieFields) -> Result<Movie> {
        let mut transaction = self.executor.begin().await?;
        let stored = find(id, &mut *transaction)
            .await?
            .ok_or_else(|| Error::not_found(ENTITY, id))?;
        payload.ensure_complete()?;
        let record = write(&payload.merged_into(stored), &mut *transaction).await?;
        transaction.commit().await?;
        debug!("Replaced movie {id}");
        Ok(record)
    }

    /// Overwrites only fields present in payload.
    pub async fn merge(&self, id: i64, payload: MovieFields) -> Result<Movie> {
        let mut transaction = self.executor.begin().await?;
        let stored = find(id, &mut *transaction)
            .await?
            .ok_or_else(|| Error::not_found(ENTITY, id))?;
        let record = write(&payload.merged_into(stored), &mut *transaction).await?;
        transaction.commit().await?;
        debug!("Merged changes into movie {id}");
        Ok(record)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut transaction = self.executor.begin().await?;
        let res = sqlx::query("DELETE FROM movie WHERE id = ?")
            .bind(id)
            .execute(&mut *transaction)
            .await?;

        if res.rows_affected() == 0 {
            Err(Error::not_found(ENTITY, id))
        } else {
            transaction.commit().await?;
            debug!("Deleted movie {id}");
            Ok(())
        }
    }
}

async fn find<'c, E>(id: i64, executor: E) -> Result<Option<Movie>>
where
    E: Executor<'c, Database = ChosenDB>,
{
    let record = sqlx::query_as::<_, Movie>(&format!(
        "SELECT {MOVIE_COLUMNS} FROM movie WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(record)
}

async fn write<'c, E>(values: &Movie, executor: E) -> Result<Movie>
where
    E: Executor<'c, Database = ChosenDB>,
{
    let record = sqlx::query_as::<_, Movie>(&format!(
        "UPDATE movie SET title = ?, description = ?, trailer = ?, year = ?, rating = ?,
        genre_id = ?, director_id = ? WHERE id = ? RETURNING {MOVIE_COLUMNS}"
    ))
    .bind(&values.title)
    .bind(&values.description)
    .bind(&values.trailer)
    .bind(values.year)
    .bind(values.rating)
    .bind(values.genre_id)
    .bind(values.director_id)
    .bind(values.id)
    .fetch_optional(executor)
    .await?;
    record.ok_or_else(|| Error::not_found(ENTITY, values.id))
}
