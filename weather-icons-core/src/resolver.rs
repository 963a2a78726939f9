use thiserror::Error;
use tracing::warn;

use crate::{code::WeatherCode, table::IconId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IconError {
    #[error("Weather code is empty")]
    Empty,
    #[error("Sorry, no icon found for \"{0}\".")]
    UnknownCode(String),
}

/// Strict lookup: tells an empty code apart from an unknown one. Never logs.
pub fn try_resolve(code: &str) -> Result<IconId, IconError> {
    WeatherCode::try_from(code).map(|code| code.icon())
}

/// Resolve a provider icon code to a UI icon.
///
/// Absent or empty input yields `None` silently. A non-empty code that is not
/// in the table yields `None` and a warning naming the code.
pub fn resolve_icon(code: Option<&str>) -> Option<IconId> {
    let code = code.filter(|c| !c.is_empty())?;

    match try_resolve(code) {
        Ok(icon) => Some(icon),
        Err(err) => {
            warn!(code, "{err}");
            None
        }
    }
}
