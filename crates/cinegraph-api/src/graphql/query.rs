use async_graphql::{Context, Object, Result, ID};

use super::{
    catalog,
    entities::{Country, Director, Genre, Language, Movie},
};

pub struct QueryRoot;

/// Per record kind: fetch one by identifier (null when nothing matches, with
/// no error) and fetch all sorted ascending by name. No pagination, no
/// filtering.
#[Object]
impl QueryRoot {
    async fn movie(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Movie>> {
        Ok(catalog(ctx).movie(&id).await?.map(Movie))
    }

    async fn director(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Director>> {
        Ok(catalog(ctx).director(&id).await?.map(Director))
    }

    async fn genre(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Genre>> {
        Ok(catalog(ctx).genre(&id).await?.map(Genre))
    }

    async fn language(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Language>> {
        Ok(catalog(ctx).language(&id).await?.map(Language))
    }

    async fn country(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Country>> {
        Ok(catalog(ctx).country(&id).await?.map(Country))
    }

    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        Ok(catalog(ctx).movies().await?.into_iter().map(Movie).collect())
    }

    async fn directors(&self, ctx: &Context<'_>) -> Result<Vec<Director>> {
        Ok(catalog(ctx)
            .directors()
            .await?
            .into_iter()
            .map(Director)
            .collect())
    }

    async fn genres(&self, ctx: &Context<'_>) -> Result<Vec<Genre>> {
        Ok(catalog(ctx).genres().await?.into_iter().map(Genre).collect())
    }

    async fn languages(&self, ctx: &Context<'_>) -> Result<Vec<Language>> {
        Ok(catalog(ctx)
            .languages()
            .await?
            .into_iter()
            .map(Language)
            .collect())
    }

    async fn countries(&self, ctx: &Context<'_>) -> Result<Vec<Country>> {
        Ok(catalog(ctx)
            .countries()
            .await?
            .into_iter()
            .map(Country)
            .collect())
    }
}
