//! One command handler.

use color_eyre::Result;

use super::App;

impl App {
    /// Print the advisory currently linked to the city.
    pub async fn run_one(&self, city_id: &str) -> Result<()> {
        let repository = super::repository()?;

        match repository.one(city_id).await {
            Ok(advisory) => {
                println!("{}", serde_json::to_string_pretty(&advisory)?);
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                tracing::warn!(city_id, "no advisory linked to city");
                println!("no advisory linked to city {city_id}");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
