use serde::Deserialize;

/// `{name, url}` pointer to another catalog entity.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct NamedResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One location area as served by `GET <base>/location-area/<index>`.
///
/// Only `name` is displayed, and it is the one required field.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct LocationArea {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub game_index: u32,
    #[serde(default)]
    pub encounter_method_rates: Vec<EncounterMethodRate>,
    #[serde(default)]
    pub location: NamedResource,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct EncounterMethodRate {
    #[serde(default)]
    pub encounter_method: NamedResource,
    #[serde(default)]
    pub version_details: Vec<MethodVersionDetail>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct MethodVersionDetail {
    #[serde(default)]
    pub rate: u32,
    #[serde(default)]
    pub version: NamedResource,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct LocalizedName {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub language: NamedResource,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct PokemonEncounter {
    #[serde(default)]
    pub pokemon: NamedResource,
    #[serde(default)]
    pub version_details: Vec<EncounterVersionDetail>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct EncounterVersionDetail {
    #[serde(default)]
    pub version: NamedResource,
    #[serde(default)]
    pub max_chance: u32,
    #[serde(default)]
    pub encounter_details: Vec<Encounter>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Encounter {
    #[serde(default)]
    pub min_level: u32,
    #[serde(default)]
    pub max_level: u32,
    #[serde(default)]
    pub condition_values: Vec<NamedResource>,
    #[serde(default)]
    pub chance: u32,
    #[serde(default)]
    pub method: NamedResource,
}
