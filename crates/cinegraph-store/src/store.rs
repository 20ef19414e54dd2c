use async_trait::async_trait;
use mongodb::bson::{self, doc, Document};
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "test-helpers"))]
use mockall::automock;

use crate::{
    error::StoreError,
    ops,
    records::{
        CountryRecord, DirectorRecord, GenreRecord, LanguageRecord, MovieRecord, NewDirector,
        NewMovie,
    },
    state::CatalogState,
};

pub use crate::mongodb::UpsertOutcome;

type Result<T> = std::result::Result<T, StoreError>;

/// Catalog reads and writes as the graph layer sees them. Putting the seam
/// here lets resolver tests substitute a mock store; the automock attribute
/// generates a struct called MockCatalogStore that implements this trait.
///
/// Lookups take identifiers as strings and resolve unknown, dangling, or
/// malformed identifiers to Ok(None) rather than an error. The add operations
/// are single conditional writes keyed on `name` (see [ops::insert_if_absent]
/// for the race they carry).
#[cfg_attr(any(test, feature = "test-helpers"), automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn language(&self, id: &str) -> Result<Option<LanguageRecord>>;
    async fn languages(&self) -> Result<Vec<LanguageRecord>>;
    async fn add_language(&self, name: &str) -> Result<UpsertOutcome>;

    async fn genre(&self, id: &str) -> Result<Option<GenreRecord>>;
    async fn genres(&self) -> Result<Vec<GenreRecord>>;
    async fn add_genre(&self, name: &str) -> Result<UpsertOutcome>;

    async fn country(&self, id: &str) -> Result<Option<CountryRecord>>;
    async fn countries(&self) -> Result<Vec<CountryRecord>>;
    async fn add_country(&self, name: &str) -> Result<UpsertOutcome>;

    async fn director(&self, id: &str) -> Result<Option<DirectorRecord>>;
    async fn directors(&self) -> Result<Vec<DirectorRecord>>;
    async fn add_director(&self, director: NewDirector) -> Result<UpsertOutcome>;

    async fn movie(&self, id: &str) -> Result<Option<MovieRecord>>;
    async fn movies(&self) -> Result<Vec<MovieRecord>>;
    /// Movies whose directorID equals the given identifier. This is how a
    /// director's movie list is derived; there is no stored edge.
    async fn movies_by_director(&self, director_id: &str) -> Result<Vec<MovieRecord>>;
    async fn add_movie(&self, movie: NewMovie) -> Result<UpsertOutcome>;

    /// Round-trips a ping command. Used by the health endpoint.
    async fn ping(&self) -> Result<()>;
}

fn decode<T: DeserializeOwned>(document: Document) -> Result<T> {
    Ok(bson::from_document(document)?)
}

fn decode_all<T: DeserializeOwned>(documents: Vec<Document>) -> Result<Vec<T>> {
    documents.into_iter().map(decode).collect()
}

impl CatalogState {
    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.database().collection::<Document>(name)
    }
}

#[async_trait]
impl CatalogStore for CatalogState {
    async fn language(&self, id: &str) -> Result<Option<LanguageRecord>> {
        let collection = self.collection(LanguageRecord::COLLECTION);
        ops::find_by_id(&collection, id).await?.map(decode).transpose()
    }

    async fn languages(&self) -> Result<Vec<LanguageRecord>> {
        let collection = self.collection(LanguageRecord::COLLECTION);
        decode_all(ops::all_sorted_by_name(&collection).await?)
    }

    async fn add_language(&self, name: &str) -> Result<UpsertOutcome> {
        let collection = self.collection(LanguageRecord::COLLECTION);
        ops::insert_if_absent(&collection, name, doc! { "name": name }).await
    }

    async fn genre(&self, id: &str) -> Result<Option<GenreRecord>> {
        let collection = self.collection(GenreRecord::COLLECTION);
        ops::find_by_id(&collection, id).await?.map(decode).transpose()
    }

    async fn genres(&self) -> Result<Vec<GenreRecord>> {
        let collection = self.collection(GenreRecord::COLLECTION);
        decode_all(ops::all_sorted_by_name(&collection).await?)
    }

    async fn add_genre(&self, name: &str) -> Result<UpsertOutcome> {
        let collection = self.collection(GenreRecord::COLLECTION);
        ops::insert_if_absent(&collection, name, doc! { "name": name }).await
    }

    async fn country(&self, id: &str) -> Result<Option<CountryRecord>> {
        let collection = self.collection(CountryRecord::COLLECTION);
        ops::find_by_id(&collection, id).await?.map(decode).transpose()
    }

    async fn countries(&self) -> Result<Vec<CountryRecord>> {
        let collection = self.collection(CountryRecord::COLLECTION);
        decode_all(ops::all_sorted_by_name(&collection).await?)
    }

    async fn add_country(&self, name: &str) -> Result<UpsertOutcome> {
        let collection = self.collection(CountryRecord::COLLECTION);
        ops::insert_if_absent(&collection, name, doc! { "name": name }).await
    }

    async fn director(&self, id: &str) -> Result<Option<DirectorRecord>> {
        let collection = self.collection(DirectorRecord::COLLECTION);
        ops::find_by_id(&collection, id).await?.map(decode).transpose()
    }

    async fn directors(&self) -> Result<Vec<DirectorRecord>> {
        let collection = self.collection(DirectorRecord::COLLECTION);
        decode_all(ops::all_sorted_by_name(&collection).await?)
    }

    async fn add_director(&self, director: NewDirector) -> Result<UpsertOutcome> {
        let collection = self.collection(DirectorRecord::COLLECTION);
        let candidate = bson::to_document(&director)?;
        ops::insert_if_absent(&collection, &director.name, candidate).await
    }

    async fn movie(&self, id: &str) -> Result<Option<MovieRecord>> {
        let collection = self.collection(MovieRecord::COLLECTION);
        ops::find_by_id(&collection, id).await?.map(decode).transpose()
    }

    async fn movies(&self) -> Result<Vec<MovieRecord>> {
        let collection = self.collection(MovieRecord::COLLECTION);
        decode_all(ops::all_sorted_by_name(&collection).await?)
    }

    async fn movies_by_director(&self, director_id: &str) -> Result<Vec<MovieRecord>> {
        let collection = self.collection(MovieRecord::COLLECTION);
        let documents =
            ops::find_by_field(&collection, MovieRecord::DIRECTOR_ID_FIELD, director_id).await?;
        decode_all(documents)
    }

    async fn add_movie(&self, movie: NewMovie) -> Result<UpsertOutcome> {
        let collection = self.collection(MovieRecord::COLLECTION);
        let candidate = bson::to_document(&movie)?;
        ops::insert_if_absent(&collection, &movie.name, candidate).await
    }

    async fn ping(&self) -> Result<()> {
        self.database().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
