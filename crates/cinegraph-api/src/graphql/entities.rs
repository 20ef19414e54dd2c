//! One output type per record kind. Scalar fields come straight off the
//! stored record; each relationship field performs exactly one store
//! operation, lazily, only when the query asks for it. A reference that
//! matches nothing resolves to null, never an error.

use async_graphql::{Context, Object, Result, ID};
use cinegraph_store::records::{
    CountryRecord, DirectorRecord, GenreRecord, LanguageRecord, MovieRecord,
};

use super::catalog;

pub struct Language(pub LanguageRecord);

#[Object]
impl Language {
    async fn id(&self) -> ID {
        ID::from(self.0.id.to_hex())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }
}

pub struct Genre(pub GenreRecord);

#[Object]
impl Genre {
    async fn id(&self) -> ID {
        ID::from(self.0.id.to_hex())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }
}

pub struct Country(pub CountryRecord);

#[Object]
impl Country {
    async fn id(&self) -> ID {
        ID::from(self.0.id.to_hex())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }
}

pub struct Director(pub DirectorRecord);

#[Object]
impl Director {
    async fn id(&self) -> ID {
        ID::from(self.0.id.to_hex())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn country(&self, ctx: &Context<'_>) -> Result<Option<Country>> {
        Ok(catalog(ctx).country(&self.0.country_id).await?.map(Country))
    }

    /// Derived, not stored: scans the movie collection for records whose
    /// directorID matches this director.
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let movies = catalog(ctx).movies_by_director(&self.0.id.to_hex()).await?;
        Ok(movies.into_iter().map(Movie).collect())
    }
}

pub struct Movie(pub MovieRecord);

#[Object]
impl Movie {
    async fn id(&self) -> ID {
        ID::from(self.0.id.to_hex())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn year(&self) -> &str {
        &self.0.year
    }

    async fn genre(&self, ctx: &Context<'_>) -> Result<Option<Genre>> {
        Ok(catalog(ctx).genre(&self.0.genre_id).await?.map(Genre))
    }

    async fn language(&self, ctx: &Context<'_>) -> Result<Option<Language>> {
        Ok(catalog(ctx).language(&self.0.language_id).await?.map(Language))
    }

    async fn director(&self, ctx: &Context<'_>) -> Result<Option<Director>> {
        Ok(catalog(ctx).director(&self.0.director_id).await?.map(Director))
    }
}
