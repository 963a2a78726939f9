//! The fixed code to icon table.
//!
//! The table is plain constant data: there is nothing to initialize and
//! nothing can change it at runtime.

use serde::Serialize;
use std::fmt;

use crate::code::{Condition, Period, WeatherCode};

/// Name of an icon in the UI icon set, e.g. `hugeicons:sun-03`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IconId(&'static str);

impl IconId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}

impl PartialEq<&str> for IconId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for IconId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl WeatherCode {
    /// Icon for this code.
    ///
    /// Scattered and broken clouds share the plain cloud icon by day; at
    /// night few, scattered and broken clouds all use the moon-cloud icon.
    pub fn icon(&self) -> IconId {
        use Condition::*;
        use Period::*;

        let name = match (self.condition(), self.period()) {
            (ClearSky, Day) => "hugeicons:sun-03",
            (FewClouds, Day) => "hugeicons:sun-cloud-01",
            (ScatteredClouds, Day) => "hugeicons:cloud",
            (BrokenClouds, Day) => "hugeicons:cloud",
            (ShowerRain, Day) => "hugeicons:cloud-little-rain",
            (Rain, Day) => "hugeicons:cloud-angled-rain",
            (Thunderstorm, Day) => "hugeicons:cloud-angled-rain-zap",
            (Snow, Day) => "hugeicons:cloud-mid-snow",
            (Mist, Day) => "hugeicons:slow-winds",
            (ClearSky, Night) => "hugeicons:moon-02",
            (FewClouds, Night) => "hugeicons:moon-cloud",
            (ScatteredClouds, Night) => "hugeicons:moon-cloud",
            (BrokenClouds, Night) => "hugeicons:moon-cloud",
            (ShowerRain, Night) => "hugeicons:moon-cloud-little-rain",
            (Rain, Night) => "hugeicons:moon-cloud-angled-rain",
            (Thunderstorm, Night) => "hugeicons:moon-angled-rain-zap",
            (Snow, Night) => "hugeicons:moon-cloud-mid-snow",
            (Mist, Night) => "hugeicons:moon-slow-wind",
        };

        IconId(name)
    }
}

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub code: WeatherCode,
    pub icon: IconId,
}

/// Every row of the table, in [`WeatherCode::all`] order.
pub fn entries() -> impl ExactSizeIterator<Item = TableEntry> {
    WeatherCode::all().iter().map(|code| TableEntry {
        code: *code,
        icon: code.icon(),
    })
}
