//! The four store operations behind every graph field: lookup by identifier,
//! full scan sorted by name, scan by a foreign-key field, and the name-keyed
//! conditional insert. Each takes the collection through [CollectionTrait] so
//! tests can run against a mock and assert the exact documents sent to the
//! driver.

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOptions, UpdateOptions},
};

use crate::{
    error::StoreError,
    mongodb::{CollectionTrait, UpsertOutcome},
};

type Result<T> = std::result::Result<T, StoreError>;

/// Every document in the collection, ascending by `name`. The sort carries no
/// collation option, so MongoDB applies its simple binary collation and
/// ordering is case-sensitive ("Alpha" < "beta"). No pagination.
pub async fn all_sorted_by_name<C>(collection: &C) -> Result<Vec<Document>>
where
    C: CollectionTrait,
{
    let options = FindOptions::builder().sort(doc! { "name": 1 }).build();
    let cursor = collection.find(doc! {}, Some(options)).await?;
    let documents = cursor.try_collect().await?;
    Ok(documents)
}

/// The document whose `_id` matches, or None. An identifier that does not
/// parse as an ObjectId cannot match anything, so it resolves to None without
/// a round trip.
pub async fn find_by_id<C>(collection: &C, id: &str) -> Result<Option<Document>>
where
    C: CollectionTrait,
{
    let Ok(object_id) = ObjectId::parse_str(id) else {
        return Ok(None);
    };
    let document = collection.find_one(doc! { "_id": object_id }).await?;
    Ok(document)
}

/// Every document whose `field` equals `value`. Used to derive reverse
/// references; the foreign key is a plain string field with no index beyond
/// `_id`, so this is a collection scan on the database side.
pub async fn find_by_field<C>(collection: &C, field: &str, value: &str) -> Result<Vec<Document>>
where
    C: CollectionTrait,
{
    let mut filter = Document::new();
    filter.insert(field, value);
    let cursor = collection.find(filter, None).await?;
    let documents = cursor.try_collect().await?;
    Ok(documents)
}

/// Inserts the candidate unless a document with this `name` already exists;
/// a match leaves the existing document untouched ($setOnInsert only). `name`
/// is not backed by a unique index, so two racing calls can both observe no
/// match and insert twice.
pub async fn insert_if_absent<C>(
    collection: &C,
    name: &str,
    candidate: Document,
) -> Result<UpsertOutcome>
where
    C: CollectionTrait,
{
    tracing::debug!(name, "conditional insert");
    let options = UpdateOptions::builder().upsert(true).build();
    let outcome = collection
        .update_one(
            doc! { "name": name },
            doc! { "$setOnInsert": candidate },
            Some(options),
        )
        .await?;
    Ok(outcome)
}
