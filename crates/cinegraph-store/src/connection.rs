use mongodb::{
    options::{ClientOptions, DriverInfo},
    Client,
};

use crate::error::StoreError;

const DRIVER_NAME: &str = "cinegraph";

pub async fn get_mongodb_client(database_uri: &str) -> Result<Client, StoreError> {
    let mut options = ClientOptions::parse(database_uri).await?;

    // Identifies this application in MongoDB server logs
    options.driver_info = Some(DriverInfo::builder().name(DRIVER_NAME).build());

    let client = Client::with_options(options)?;
    Ok(client)
}
