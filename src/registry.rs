use std::collections::HashMap;

use anyhow::{Context, Result, anyhow};
use once_cell::sync::OnceCell;
use tracing::{debug, info};

use crate::players::PlayerData;

/// Built-in fixtures, keyed by slug. Adding a player means adding both the JSON
/// file under `data/` and an entry here.
pub const BUILTIN_FIXTURES: &[(&str, &str)] = &[
    ("mahomes", include_str!("../data/mahomes.json")),
    ("allen", include_str!("../data/allen.json")),
    ("burrow", include_str!("../data/burrow.json")),
    ("jackson", include_str!("../data/jackson.json")),
    ("herbert", include_str!("../data/herbert.json")),
    ("stroud", include_str!("../data/stroud.json")),
];

static REGISTRY: OnceCell<PlayerRegistry> = OnceCell::new();

/// Process-wide registry built from [`BUILTIN_FIXTURES`] on first use.
pub fn registry() -> Result<&'static PlayerRegistry> {
    REGISTRY.get_or_try_init(|| {
        PlayerRegistry::from_fixtures(BUILTIN_FIXTURES).context("failed to load built-in fixtures")
    })
}

/// Read-only slug -> record mapping. Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<PlayerData>,
    index: HashMap<String, usize>,
}

impl PlayerRegistry {
    pub fn from_fixtures(fixtures: &[(&str, &str)]) -> Result<Self> {
        let mut records = Vec::with_capacity(fixtures.len());
        for (slug, raw) in fixtures {
            let data: PlayerData = serde_json::from_str(raw)
                .with_context(|| format!("invalid fixture json for `{slug}`"))?;
            if data.player.slug != *slug {
                return Err(anyhow!(
                    "fixture registered as `{slug}` carries slug `{}`",
                    data.player.slug
                ));
            }
            debug!(
                slug = *slug,
                seasons = data.season_stats.len(),
                news = data.news_feed.len(),
                "fixture loaded"
            );
            records.push(data);
        }
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<PlayerData>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, data) in records.iter().enumerate() {
            check_season_order(data)?;
            if index.insert(data.player.slug.clone(), pos).is_some() {
                return Err(anyhow!("duplicate player slug `{}`", data.player.slug));
            }
        }
        info!(players = records.len(), "player registry ready");
        Ok(Self {
            players: records,
            index,
        })
    }

    pub fn get_player(&self, slug: &str) -> Option<&PlayerData> {
        self.index.get(slug).map(|&pos| &self.players[pos])
    }

    pub fn all_players(&self) -> &[PlayerData] {
        &self.players
    }

    pub fn all_slugs(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.slug()).collect()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

// Gaps between years are fine; going backwards is not.
fn check_season_order(data: &PlayerData) -> Result<()> {
    let out_of_order = data
        .season_stats
        .windows(2)
        .find(|w| w[1].year < w[0].year);
    if let Some(w) = out_of_order {
        return Err(anyhow!(
            "season_stats for `{}` out of order: {} after {}",
            data.player.slug,
            w[1].year,
            w[0].year
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_fixtures_have_unique_keys() {
        let mut keys: Vec<&str> = BUILTIN_FIXTURES.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), BUILTIN_FIXTURES.len());
    }

    #[test]
    fn empty_registry_finds_nothing() {
        let reg = PlayerRegistry::default();
        assert!(reg.is_empty());
        assert!(reg.get_player("mahomes").is_none());
        assert!(reg.all_slugs().is_empty());
    }
}
