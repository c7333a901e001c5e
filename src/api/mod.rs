pub mod client;
pub mod errors;
pub mod types;

pub use client::{CatalogApi, PokeApiClient};
pub use errors::ApiResult;
pub use types::PokemonDetail;
