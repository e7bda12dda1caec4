//! Askama template filters.
//!
//! Price and count formatting happens in the view structs, so the
//! templates only need one filter.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::Datelike;

/// Current year, for the footer copyright line.
///
/// Askama filters always receive a value; this one ignores it, so templates
/// call it as `{{ ""|current_year }}`.
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    Ok(chrono::Utc::now().year())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_current_year_moves_forward() {
        let year = current_year::default()
            .execute("ignored", askama::NO_VALUES)
            .unwrap();
        assert!((2025..3000).contains(&year));
    }
}
