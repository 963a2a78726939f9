use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{resolver::resolve_icon, table::IconId};

/// The part of an OpenWeather current-weather document that carries the
/// condition. Any other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weather: Vec<PayloadWeather>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayloadWeather {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Payload {
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).context("Failed to parse OpenWeather JSON")
    }

    /// Icon code of the primary (first) condition.
    pub fn icon_code(&self) -> Option<&str> {
        self.weather.first().and_then(|w| w.icon.as_deref())
    }

    /// Condition group name, e.g. `Rain`.
    pub fn condition(&self) -> Option<&str> {
        self.weather.first().and_then(|w| w.main.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        self.weather.first().and_then(|w| w.description.as_deref())
    }

    pub fn resolve_icon(&self) -> Option<IconId> {
        resolve_icon(self.icon_code())
    }
}
