use std::{fmt, str::FromStr};

use crate::resolver::IconError;

/// Weather condition group, the two-digit prefix of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    ClearSky,
    FewClouds,
    ScatteredClouds,
    BrokenClouds,
    ShowerRain,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
}

impl Condition {
    pub fn group(&self) -> &'static str {
        match self {
            Condition::ClearSky => "01",
            Condition::FewClouds => "02",
            Condition::ScatteredClouds => "03",
            Condition::BrokenClouds => "04",
            Condition::ShowerRain => "09",
            Condition::Rain => "10",
            Condition::Thunderstorm => "11",
            Condition::Snow => "13",
            Condition::Mist => "50",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Condition::ClearSky => "clear sky",
            Condition::FewClouds => "few clouds",
            Condition::ScatteredClouds => "scattered clouds",
            Condition::BrokenClouds => "broken clouds",
            Condition::ShowerRain => "shower rain",
            Condition::Rain => "rain",
            Condition::Thunderstorm => "thunderstorm",
            Condition::Snow => "snow",
            Condition::Mist => "mist",
        }
    }

    pub const fn all() -> &'static [Condition] {
        &[
            Condition::ClearSky,
            Condition::FewClouds,
            Condition::ScatteredClouds,
            Condition::BrokenClouds,
            Condition::ShowerRain,
            Condition::Rain,
            Condition::Thunderstorm,
            Condition::Snow,
            Condition::Mist,
        ]
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Time of day, the one-letter suffix of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Day,
    Night,
}

impl Period {
    pub fn suffix(&self) -> &'static str {
        match self {
            Period::Day => "d",
            Period::Night => "n",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Night => "night",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the known provider icon codes, e.g. `01d` or `11n`.
///
/// Only obtainable through [`TryFrom<&str>`] / [`FromStr`], which compare the
/// whole input against the known codes. Nothing is trimmed or case-folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeatherCode {
    condition: Condition,
    period: Period,
}

impl WeatherCode {
    const fn new(condition: Condition, period: Period) -> Self {
        Self { condition, period }
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn as_str(&self) -> &'static str {
        use Condition::*;
        use Period::*;

        match (self.condition, self.period) {
            (ClearSky, Day) => "01d",
            (FewClouds, Day) => "02d",
            (ScatteredClouds, Day) => "03d",
            (BrokenClouds, Day) => "04d",
            (ShowerRain, Day) => "09d",
            (Rain, Day) => "10d",
            (Thunderstorm, Day) => "11d",
            (Snow, Day) => "13d",
            (Mist, Day) => "50d",
            (ClearSky, Night) => "01n",
            (FewClouds, Night) => "02n",
            (ScatteredClouds, Night) => "03n",
            (BrokenClouds, Night) => "04n",
            (ShowerRain, Night) => "09n",
            (Rain, Night) => "10n",
            (Thunderstorm, Night) => "11n",
            (Snow, Night) => "13n",
            (Mist, Night) => "50n",
        }
    }

    /// All known codes: day variants first, then night, each in group order.
    pub const fn all() -> &'static [WeatherCode] {
        ALL_CODES
    }
}

const ALL_CODES: &[WeatherCode] = {
    use Condition::*;
    use Period::*;

    &[
        WeatherCode::new(ClearSky, Day),
        WeatherCode::new(FewClouds, Day),
        WeatherCode::new(ScatteredClouds, Day),
        WeatherCode::new(BrokenClouds, Day),
        WeatherCode::new(ShowerRain, Day),
        WeatherCode::new(Rain, Day),
        WeatherCode::new(Thunderstorm, Day),
        WeatherCode::new(Snow, Day),
        WeatherCode::new(Mist, Day),
        WeatherCode::new(ClearSky, Night),
        WeatherCode::new(FewClouds, Night),
        WeatherCode::new(ScatteredClouds, Night),
        WeatherCode::new(BrokenClouds, Night),
        WeatherCode::new(ShowerRain, Night),
        WeatherCode::new(Rain, Night),
        WeatherCode::new(Thunderstorm, Night),
        WeatherCode::new(Snow, Night),
        WeatherCode::new(Mist, Night),
    ]
};

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for WeatherCode {
    type Error = IconError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use Condition::*;
        use Period::*;

        let (condition, period) = match value {
            "" => return Err(IconError::Empty),
            "01d" => (ClearSky, Day),
            "02d" => (FewClouds, Day),
            "03d" => (ScatteredClouds, Day),
            "04d" => (BrokenClouds, Day),
            "09d" => (ShowerRain, Day),
            "10d" => (Rain, Day),
            "11d" => (Thunderstorm, Day),
            "13d" => (Snow, Day),
            "50d" => (Mist, Day),
            "01n" => (ClearSky, Night),
            "02n" => (FewClouds, Night),
            "03n" => (ScatteredClouds, Night),
            "04n" => (BrokenClouds, Night),
            "09n" => (ShowerRain, Night),
            "10n" => (Rain, Night),
            "11n" => (Thunderstorm, Night),
            "13n" => (Snow, Night),
            "50n" => (Mist, Night),
            _ => return Err(IconError::UnknownCode(value.to_string())),
        };

        Ok(WeatherCode::new(condition, period))
    }
}

impl FromStr for WeatherCode {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeatherCode::try_from(s)
    }
}
