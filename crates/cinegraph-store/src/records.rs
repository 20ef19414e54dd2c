//! The five catalog record kinds, with serde renames matching the field names
//! stored in MongoDB. Foreign-key fields hold the referent's ObjectId rendered
//! as a hex string; nothing validates that the referent exists, and a dangling
//! reference simply fails to resolve at read time.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanguageRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
}

impl LanguageRecord {
    pub const COLLECTION: &'static str = "languages";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenreRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
}

impl GenreRecord {
    pub const COLLECTION: &'static str = "genres";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
}

impl CountryRecord {
    pub const COLLECTION: &'static str = "countries";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectorRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(rename = "countryID")]
    pub country_id: String,
}

impl DirectorRecord {
    pub const COLLECTION: &'static str = "directors";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub year: String,
    #[serde(rename = "genreID")]
    pub genre_id: String,
    #[serde(rename = "languageID")]
    pub language_id: String,
    #[serde(rename = "directorID")]
    pub director_id: String,
}

impl MovieRecord {
    pub const COLLECTION: &'static str = "movies";

    /// Field scanned to derive a director's movie list.
    pub const DIRECTOR_ID_FIELD: &'static str = "directorID";
}

/// Candidate fields for a director insert. `country_id` is stored verbatim;
/// there is no existence check against the countries collection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewDirector {
    pub name: String,
    #[serde(rename = "countryID")]
    pub country_id: String,
}

/// Candidate fields for a movie insert. All references are stored verbatim.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewMovie {
    pub name: String,
    pub year: String,
    #[serde(rename = "genreID")]
    pub genre_id: String,
    #[serde(rename = "languageID")]
    pub language_id: String,
    #[serde(rename = "directorID")]
    pub director_id: String,
}
