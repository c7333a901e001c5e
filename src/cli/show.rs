use anyhow::{anyhow, Result};
use clap::Args;
use tracing::debug;

use crate::api::{CatalogApi, PokeApiClient};
use crate::config::Config;

const BADGE_LIMIT: usize = 8;

/// Print one entry's details without starting the browser
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Name of the entry to look up
    pub name: String,
}

impl ShowCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        debug!("Executing show command for {}", self.name);

        if self.name.trim().is_empty() {
            return Err(anyhow!("No name provided"));
        }

        let client = PokeApiClient::new(&config.api_base_url);
        let url = client.detail_url(self.name.trim());
        let detail = client
            .fetch_detail(&url)
            .await
            .map_err(|e| anyhow!("Failed to fetch {}: {}", self.name, e))?;

        println!("{}", detail.name);
        println!("  types: {}", join_upper(&detail.type_names()));
        println!("  HT {}  WT {} lbs.", detail.height, detail.weight);
        if let Some(sprite) = &detail.sprites.front_default {
            println!("  sprite: {}", sprite);
        }
        println!("  moves: {}", join_upper(&detail.move_names()));
        println!("  abilities: {}", join_upper(&detail.ability_names()));

        Ok(())
    }
}

fn join_upper(names: &[&str]) -> String {
    names
        .iter()
        .take(BADGE_LIMIT)
        .map(|name| name.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_upper_caps_at_eight() {
        let names: Vec<String> = (1..=12).map(|i| format!("move-{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();

        let joined = join_upper(&refs);
        assert_eq!(joined.matches(',').count(), 7);
        assert!(joined.starts_with("MOVE-1"));
        assert!(!joined.contains("MOVE-9"));
    }
}
