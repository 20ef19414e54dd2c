use anyhow::anyhow;
use mongodb::{Client, Database};

use crate::connection::get_mongodb_client;

pub const DATABASE_URI_ENV_VAR: &str = "MONGODB_DATABASE_URI";

/// Long-lived handle to the catalog database, initialized once at startup.
/// The wrapped client manages its own connection pool so clones are cheap,
/// and nothing here is mutated after initialization.
#[derive(Clone, Debug)]
pub struct CatalogState {
    client: Client,

    /// Name of the database to connect to
    database: String,
}

impl CatalogState {
    pub fn database(&self) -> Database {
        self.client.database(&self.database)
    }
}

/// The connection URI must name a default database; that is where the catalog
/// collections live.
pub async fn try_init_state_from_uri(
    database_uri: Option<&impl AsRef<str>>,
) -> anyhow::Result<CatalogState> {
    let database_uri = database_uri.ok_or(anyhow!(
        "Missing environment variable {}",
        DATABASE_URI_ENV_VAR
    ))?;
    let client = get_mongodb_client(database_uri.as_ref()).await?;
    let database_name = match client.default_database() {
        Some(database) => Ok(database.name().to_owned()),
        None => Err(anyhow!(
            "${DATABASE_URI_ENV_VAR} environment variable must include a database"
        )),
    }?;
    Ok(CatalogState {
        client,
        database: database_name,
    })
}
