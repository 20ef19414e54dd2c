use async_trait::async_trait;
use futures_util::Stream;
use mongodb::{
    bson::{oid::ObjectId, Document},
    error::Error,
    options::{FindOptions, UpdateOptions},
    results::UpdateResult,
    Collection,
};

#[cfg(any(test, feature = "test-helpers"))]
use mockall::automock;

#[cfg(any(test, feature = "test-helpers"))]
use super::test_helpers::MockCursor;

/// What a name-keyed conditional insert reports back. On a fresh insert
/// `upserted_id` carries the generated identifier; on a match the existing
/// record is untouched and counts show a match with no modification.
#[derive(Clone, Debug, PartialEq)]
pub struct UpsertOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<ObjectId>,
}

impl From<UpdateResult> for UpsertOutcome {
    fn from(result: UpdateResult) -> Self {
        UpsertOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.and_then(|id| id.as_object_id()),
        }
    }
}

/// Abstract MongoDB collection methods. This lets us mock a database
/// connection in tests. The automock attribute generates a struct called
/// MockCollectionTrait that implements this trait. See
/// https://docs.rs/mockall/latest/mockall/
#[cfg_attr(any(test, feature = "test-helpers"), automock(
    type RowCursor=MockCursor;
))]
#[async_trait]
pub trait CollectionTrait {
    type RowCursor: Stream<Item = Result<Document, Error>> + 'static + Unpin + Send;

    async fn find(
        &self,
        filter: Document,
        options: Option<FindOptions>,
    ) -> Result<Self::RowCursor, Error>;

    async fn find_one(&self, filter: Document) -> Result<Option<Document>, Error>;

    async fn update_one(
        &self,
        query: Document,
        update: Document,
        options: Option<UpdateOptions>,
    ) -> Result<UpsertOutcome, Error>;
}

#[async_trait]
impl CollectionTrait for Collection<Document> {
    type RowCursor = mongodb::Cursor<Document>;

    async fn find(
        &self,
        filter: Document,
        options: Option<FindOptions>,
    ) -> Result<Self::RowCursor, Error> {
        Collection::find(self, filter).with_options(options).await
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Document>, Error> {
        Collection::find_one(self, filter).await
    }

    async fn update_one(
        &self,
        query: Document,
        update: Document,
        options: Option<UpdateOptions>,
    ) -> Result<UpsertOutcome, Error> {
        let result = Collection::update_one(self, query, update)
            .with_options(options)
            .await?;
        Ok(result.into())
    }
}
