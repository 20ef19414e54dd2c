use futures_util::stream::iter;
use mongodb::{bson::Document, error::Error};

/// Cursor type used by MockCollectionTrait. `Iter` wraps an iterator and
/// implements `Stream` (and by extension `TryStreamExt`), which is all the
/// store operations need from a cursor.
pub type MockCursor = futures_util::stream::Iter<std::vec::IntoIter<Result<Document, Error>>>;

/// Create a stream that can be returned from mock implementations for
/// CollectionTrait::find.
pub fn mock_stream(documents: Vec<Document>) -> MockCursor {
    iter(documents.into_iter().map(Ok).collect::<Vec<_>>())
}
