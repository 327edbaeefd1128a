/// Generates read-only entity with `id` and `name` and its repository.
///
/// Reference tables are maintained outside of the API (seed data),
/// so repository only lists and fetches records.
macro_rules! reference_repository {
    ($entity:ident, $table:literal) => {
        paste::paste! {
            #[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, sqlx::FromRow)]
            #[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
            pub struct $entity {
                pub id: i64,
                pub name: String,
            }

            pub type [<$entity Repository>] = [<$entity RepositoryImpl>]<crate::Pool>;

            pub struct [<$entity RepositoryImpl>]<E> {
                executor: E,
            }

            impl<'c, E> [<$entity RepositoryImpl>]<E>
            where
                for<'a> &'a E: sqlx::Executor<'c, Database = crate::ChosenDB>,
            {
                pub fn new(executor: E) -> Self {
                    Self { executor }
                }

                pub async fn list(&self) -> crate::error::Result<Vec<$entity>> {
                    use futures::TryStreamExt as _;
                    let records = sqlx::query_as::<_, $entity>(concat!(
                        "SELECT id, name FROM ", $table, " ORDER BY id"
                    ))
                    .fetch(&self.executor)
                    .try_collect::<Vec<_>>()
                    .await?;
                    Ok(records)
                }

                pub async fn get(&self, id: i64) -> crate::error::Result<$entity> {
                    let record = sqlx::query_as::<_, $entity>(concat!(
                        "SELECT id, name FROM ", $table, " WHERE id = ?"
                    ))
                    .bind(id)
                    .fetch_optional(&self.executor)
                    .await?;
                    record.ok_or_else(|| crate::Error::not_found(stringify!($entity), id))
                }
            }
        }
    };
}

pub(crate) use reference_repository;
