pub mod entities;
pub mod mutation;
pub mod query;

#[cfg(test)]
mod test_fixtures;

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Schema};
use cinegraph_store::store::CatalogStore;

pub use self::{mutation::MutationRoot, query::QueryRoot};

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the executable schema. The store handle is the only context data;
/// every relationship or root field borrows it for its single lookup or scan.
pub fn build_schema(store: Arc<dyn CatalogStore>) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub(crate) fn catalog<'a>(ctx: &'a Context<'_>) -> &'a Arc<dyn CatalogStore> {
    ctx.data_unchecked::<Arc<dyn CatalogStore>>()
}
