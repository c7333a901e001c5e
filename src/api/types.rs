//! Wire types for the PokéAPI list and detail endpoints

use serde::Deserialize;

/// One page of the paged list endpoint.
///
/// `count` is the authoritative total number of items in the remote
/// collection; it is read from the first successful response and treated
/// as immutable for the rest of the session.
#[derive(Debug, Clone, Deserialize)]
pub struct PagedList {
    pub count: u64,
    pub results: Vec<NamedResource>,
}

/// A name plus the URL of its detail record.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Detail record for a single Pokémon.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDetail {
    pub name: String,
    pub height: u64,
    pub weight: u64,
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeEntry>,
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
    #[serde(default)]
    pub abilities: Vec<AbilityEntry>,
}

/// Sprite URLs; `front_default` may be null for some entries.
#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeEntry {
    #[serde(rename = "type")]
    pub type_info: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_info: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilityEntry {
    pub ability: NamedResource,
}

impl PokemonDetail {
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.type_info.name.as_str()).collect()
    }

    pub fn move_names(&self) -> Vec<&str> {
        self.moves.iter().map(|m| m.move_info.name.as_str()).collect()
    }

    pub fn ability_names(&self) -> Vec<&str> {
        self.abilities.iter().map(|a| a.ability.name.as_str()).collect()
    }
}
