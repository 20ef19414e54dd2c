use async_graphql::{Context, Object, Result, ID};
use cinegraph_store::{
    records::{NewDirector, NewMovie},
    store::UpsertOutcome as StoreOutcome,
};

use super::catalog;

/// What an add mutation resolves to: the acknowledgment of the conditional
/// write, not the entity. `upsertedId` identifies a freshly inserted record
/// and is null when an existing record with the same name was left untouched.
pub struct UpsertOutcome(pub StoreOutcome);

#[Object]
impl UpsertOutcome {
    async fn matched_count(&self) -> u64 {
        self.0.matched_count
    }

    async fn modified_count(&self) -> u64 {
        self.0.modified_count
    }

    async fn upserted_id(&self) -> Option<ID> {
        self.0.upserted_id.map(|id| ID::from(id.to_hex()))
    }
}

pub struct MutationRoot;

/// Per record kind: insert a record unless one with this name exists. All
/// arguments are required and validated before any store access; reference
/// arguments are stored verbatim with no existence check.
#[Object]
impl MutationRoot {
    async fn add_language(&self, ctx: &Context<'_>, name: String) -> Result<UpsertOutcome> {
        Ok(UpsertOutcome(catalog(ctx).add_language(&name).await?))
    }

    async fn add_genre(&self, ctx: &Context<'_>, name: String) -> Result<UpsertOutcome> {
        Ok(UpsertOutcome(catalog(ctx).add_genre(&name).await?))
    }

    async fn add_country(&self, ctx: &Context<'_>, name: String) -> Result<UpsertOutcome> {
        Ok(UpsertOutcome(catalog(ctx).add_country(&name).await?))
    }

    async fn add_director(
        &self,
        ctx: &Context<'_>,
        name: String,
        #[graphql(name = "countryID")] country_id: ID,
    ) -> Result<UpsertOutcome> {
        let director = NewDirector {
            name,
            country_id: country_id.0,
        };
        Ok(UpsertOutcome(catalog(ctx).add_director(director).await?))
    }

    async fn add_movie(
        &self,
        ctx: &Context<'_>,
        name: String,
        year: String,
        #[graphql(name = "genreID")] genre_id: ID,
        #[graphql(name = "directorID")] director_id: ID,
        #[graphql(name = "languageID")] language_id: ID,
    ) -> Result<UpsertOutcome> {
        let movie = NewMovie {
            name,
            year,
            genre_id: genre_id.0,
            language_id: language_id.0,
            director_id: director_id.0,
        };
        Ok(UpsertOutcome(catalog(ctx).add_movie(movie).await?))
    }
}

#[cfg(test)]
mod tests {
    use cinegraph_store::{
        records::{NewDirector, NewMovie},
        store::{MockCatalogStore, UpsertOutcome as StoreOutcome},
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::super::test_fixtures::{oid, schema_with, COUNTRY_ID, GENRE_ID, LANGUAGE_ID};

    #[tokio::test]
    async fn add_language_reports_the_inserted_id() {
        let mut store = MockCatalogStore::new();
        store.expect_add_language().returning(|name| {
            assert_eq!(name, "English");
            Ok(StoreOutcome {
                matched_count: 0,
                modified_count: 0,
                upserted_id: Some(oid(LANGUAGE_ID)),
            })
        });

        let response = schema_with(store)
            .execute(
                r#"mutation {
                    addLanguage(name: "English") { matchedCount modifiedCount upsertedId }
                }"#,
            )
            .await;

        assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({
                "addLanguage": {
                    "matchedCount": 0,
                    "modifiedCount": 0,
                    "upsertedId": LANGUAGE_ID,
                }
            })
        );
    }

    #[tokio::test]
    async fn add_language_matches_an_existing_name_without_inserting() {
        let mut store = MockCatalogStore::new();
        store.expect_add_language().returning(|_| {
            Ok(StoreOutcome {
                matched_count: 1,
                modified_count: 0,
                upserted_id: None,
            })
        });

        let response = schema_with(store)
            .execute(
                r#"mutation {
                    addLanguage(name: "English") { matchedCount upsertedId }
                }"#,
            )
            .await;

        assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({ "addLanguage": { "matchedCount": 1, "upsertedId": null } })
        );
    }

    #[tokio::test]
    async fn add_director_stores_the_country_reference_verbatim() {
        let mut store = MockCatalogStore::new();
        store.expect_add_director().returning(|director| {
            assert_eq!(
                director,
                NewDirector {
                    name: "Nolan".to_owned(),
                    country_id: COUNTRY_ID.to_owned(),
                }
            );
            Ok(StoreOutcome {
                matched_count: 0,
                modified_count: 0,
                upserted_id: Some(oid("65d4f0a1b2c3d4e5f6a7b8ff")),
            })
        });

        let mutation = format!(
            r#"mutation {{
                addDirector(name: "Nolan", countryID: "{COUNTRY_ID}") {{ upsertedId }}
            }}"#
        );
        let response = schema_with(store).execute(mutation.as_str()).await;

        assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
    }

    #[tokio::test]
    async fn add_movie_requires_every_argument_before_touching_the_store() {
        // No expectations: a store call would fail the test.
        let store = MockCatalogStore::new();

        let mutation = format!(
            r#"mutation {{
                addMovie(name: "Inception", genreID: "{GENRE_ID}",
                         directorID: "x", languageID: "y") {{ matchedCount }}
            }}"#
        );
        let response = schema_with(store).execute(mutation.as_str()).await;

        assert!(!response.errors.is_empty(), "missing year must be rejected");
        assert_eq!(response.data, async_graphql::Value::Null);
    }

    #[tokio::test]
    async fn add_movie_passes_all_fields_through() {
        let mut store = MockCatalogStore::new();
        store.expect_add_movie().returning(|movie| {
            assert_eq!(
                movie,
                NewMovie {
                    name: "Inception".to_owned(),
                    year: "2010".to_owned(),
                    genre_id: "g".to_owned(),
                    language_id: "l".to_owned(),
                    director_id: "d".to_owned(),
                }
            );
            Ok(StoreOutcome {
                matched_count: 0,
                modified_count: 0,
                upserted_id: Some(oid("65d4f0a1b2c3d4e5f6a7b8fe")),
            })
        });

        let response = schema_with(store)
            .execute(
                r#"mutation {
                    addMovie(name: "Inception", year: "2010", genreID: "g",
                             directorID: "d", languageID: "l") { upsertedId }
                }"#,
            )
            .await;

        assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({ "addMovie": { "upsertedId": "65d4f0a1b2c3d4e5f6a7b8fe" } })
        );
    }
}
