//! Replace command handler.

use std::path::Path;

use color_eyre::Result;

use crate::models::Advisory;

use super::App;

impl App {
    /// Replace the city's advisory with one read from a JSON file.
    pub async fn run_replace(&self, city_id: &str, file: &Path) -> Result<()> {
        let raw = std::fs::read_to_string(file)?;
        let advisory: Advisory = serde_json::from_str(&raw)?;

        let repository = super::repository()?;
        let replaced = repository.replace(city_id, advisory).await?;

        tracing::info!(id = ?replaced.id, city_id, "advisory replaced");
        println!("{}", serde_json::to_string_pretty(&replaced)?);
        Ok(())
    }
}
