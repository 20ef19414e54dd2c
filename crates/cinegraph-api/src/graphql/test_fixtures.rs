//! Shared fixtures for schema tests: a tiny catalog around one movie, plus a
//! schema constructor that wires in a mock store.

use std::sync::Arc;

use cinegraph_store::records::{
    CountryRecord, DirectorRecord, GenreRecord, LanguageRecord, MovieRecord,
};
use cinegraph_store::store::MockCatalogStore;
use mongodb::bson::oid::ObjectId;

use super::{build_schema, CatalogSchema};

pub const MOVIE_ID: &str = "65d4f0a1b2c3d4e5f6a7b801";
pub const DIRECTOR_ID: &str = "65d4f0a1b2c3d4e5f6a7b802";
pub const COUNTRY_ID: &str = "65d4f0a1b2c3d4e5f6a7b803";
pub const GENRE_ID: &str = "65d4f0a1b2c3d4e5f6a7b804";
pub const LANGUAGE_ID: &str = "65d4f0a1b2c3d4e5f6a7b805";
pub const SECOND_MOVIE_ID: &str = "65d4f0a1b2c3d4e5f6a7b806";

pub fn oid(hex: &str) -> ObjectId {
    ObjectId::parse_str(hex).expect("fixture ids are valid hex")
}

pub fn schema_with(store: MockCatalogStore) -> CatalogSchema {
    build_schema(Arc::new(store))
}

pub fn english() -> LanguageRecord {
    LanguageRecord {
        id: oid(LANGUAGE_ID),
        name: "English".to_owned(),
    }
}

pub fn sci_fi() -> GenreRecord {
    GenreRecord {
        id: oid(GENRE_ID),
        name: "SciFi".to_owned(),
    }
}

pub fn usa() -> CountryRecord {
    CountryRecord {
        id: oid(COUNTRY_ID),
        name: "USA".to_owned(),
    }
}

pub fn nolan() -> DirectorRecord {
    DirectorRecord {
        id: oid(DIRECTOR_ID),
        name: "Nolan".to_owned(),
        country_id: COUNTRY_ID.to_owned(),
    }
}

pub fn inception() -> MovieRecord {
    MovieRecord {
        id: oid(MOVIE_ID),
        name: "Inception".to_owned(),
        year: "2010".to_owned(),
        genre_id: GENRE_ID.to_owned(),
        language_id: LANGUAGE_ID.to_owned(),
        director_id: DIRECTOR_ID.to_owned(),
    }
}

pub fn tenet() -> MovieRecord {
    MovieRecord {
        id: oid(SECOND_MOVIE_ID),
        name: "Tenet".to_owned(),
        year: "2020".to_owned(),
        genre_id: GENRE_ID.to_owned(),
        language_id: LANGUAGE_ID.to_owned(),
        director_id: DIRECTOR_ID.to_owned(),
    }
}
