//! Request types for the Holiday Query Engine API.
//!
//! This module defines the query-string structures accepted by the
//! endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Query string for `GET /holidays/latest-payday`.
///
/// `day` is kept as text so that a non-integer value produces the engine's
/// own validation error instead of a generic extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaydayQuery {
    /// Target day-of-month, `1..=31`. Absent means "last work day of month".
    #[serde(default)]
    pub day: Option<String>,
}

impl PaydayQuery {
    /// Parses the target day.
    ///
    /// Range checking happens in the resolver; this only rejects text that
    /// is not a non-negative integer.
    ///
    /// # Example
    ///
    /// ```
    /// use holiday_engine::api::PaydayQuery;
    ///
    /// let query = PaydayQuery { day: Some("15".to_string()) };
    /// assert_eq!(query.target_day().unwrap(), Some(15));
    ///
    /// let query = PaydayQuery { day: None };
    /// assert_eq!(query.target_day().unwrap(), None);
    ///
    /// let query = PaydayQuery { day: Some("1.5".to_string()) };
    /// assert!(query.target_day().is_err());
    /// ```
    pub fn target_day(&self) -> EngineResult<Option<u32>> {
        let raw = match self.day.as_deref().map(str::trim) {
            None | Some("") => return Ok(None),
            Some(raw) => raw,
        };

        raw.parse::<u32>()
            .map(Some)
            .map_err(|_| EngineError::InvalidArgument {
                field: "day".to_string(),
                message: format!("must be an integer between 1 and 31, got '{}'", raw),
            })
    }
}
