pub mod collection;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use self::collection::{CollectionTrait, UpsertOutcome};

#[cfg(any(test, feature = "test-helpers"))]
pub use self::collection::MockCollectionTrait;
