pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const LOCATION_AREA_PATH: &str = "location-area";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Catalog indices shown per page.
pub const PAGE_SIZE: u32 = 20;

pub const PROMPT: &str = "Pokedex > ";
pub const WELCOME: &str = "Welcome to the Pokedex!";
pub const HELP_BANNER: &str = "Welcome to the pokedex! You can ask for information on Pokemon.";
pub const FAREWELL: &str = "Exiting...";
pub const UNKNOWN_COMMAND: &str = "That's not a known command, please try again.";
pub const AT_FIRST_PAGE: &str = "Sorry, you've reached the beginning of the results.";
