//! Build errors for the machine builder.

use crate::odds::OddsError;
use thiserror::Error;

/// Errors that can occur when building a machine.
///
/// Event handling itself never fails; construction is the only fallible
/// surface, and only when the requested odds are unusable.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid odds configuration: {0}")]
    Odds(#[from] OddsError),
}
