//! Season and roster field validation.

use crate::error::CoreError;
use crate::standings::validate_top_matchdays_limit;
use crate::types::Date;

/// Validate that a season does not end before it starts.
pub fn validate_date_range(start_date: Date, end_date: Date) -> Result<(), CoreError> {
    if end_date < start_date {
        return Err(CoreError::Validation(format!(
            "end_date {end_date} is before start_date {start_date}"
        )));
    }
    Ok(())
}

/// Reject names that are empty or only whitespace.
pub fn validate_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Validate the configurable parts of a season.
///
/// Fields that are `None` are left unchecked so the same helper serves
/// create and partial update payloads. Point values accept any integer.
pub fn validate_season_rules(
    start_date: Option<Date>,
    end_date: Option<Date>,
    top_matchdays_limit: Option<i32>,
) -> Result<(), CoreError> {
    if let Some(limit) = top_matchdays_limit {
        validate_top_matchdays_limit(limit)?;
    }
    if let (Some(start), Some(end)) = (start_date, end_date) {
        validate_date_range(start, end)?;
    }
    Ok(())
}
