//! Listing query translation.
//!
//! [`ListParams`] carries the flat key/value parameters exactly as they
//! arrive on the wire; [`ProductQuery::from_params`] turns them into a
//! typed query or rejects them with one of the documented messages.
//! Malformed input is never coerced.

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw listing parameters, straight off the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub price_range: Option<String>,
    pub date_range: Option<String>,
}

/// Rejection of listing parameters; messages are part of the wire
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid sort field")]
    InvalidSortField,

    #[error("Invalid price range format")]
    InvalidPriceRange,

    #[error("Invalid date range format")]
    InvalidDateRange,

    #[error("Invalid pagination parameters")]
    InvalidPagination,
}

/// Field a listing is ordered by, always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    ProductName,
    Price,
}

impl SortField {
    /// Store column backing this sort field.
    pub(crate) fn column(self) -> &'static str {
        match self {
            Self::ProductName => "product_name",
            Self::Price => "price",
        }
    }

    fn parse(value: &str) -> Result<Self, QueryError> {
        match value {
            "productName" => Ok(Self::ProductName),
            "price" => Ok(Self::Price),
            _ => Err(QueryError::InvalidSortField),
        }
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// Inclusive availability-date bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

/// A validated listing query, ready for SQL translation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub price_range: Option<PriceRange>,
    pub date_range: Option<DateRange>,
    pub sort: SortField,
    pub page: u32,
    pub limit: u32,
}

impl ProductQuery {
    /// Translate raw wire parameters into a typed query.
    ///
    /// Absent optional parameters impose no filter; absent `sort`
    /// defaults to the product name, absent `page`/`limit` default to
    /// 1 and 10.
    ///
    /// # Errors
    ///
    /// Returns the documented [`QueryError`] for an unknown sort field
    /// or a malformed range or pagination value.
    pub fn from_params(params: &ListParams) -> Result<Self, QueryError> {
        let sort = match params.sort.as_deref() {
            None => SortField::default(),
            Some(value) => SortField::parse(value)?,
        };

        let price_range = match non_empty(params.price_range.as_deref()) {
            None => None,
            Some(value) => Some(parse_price_range(value)?),
        };

        let date_range = match non_empty(params.date_range.as_deref()) {
            None => None,
            Some(value) => Some(parse_date_range(value)?),
        };

        Ok(Self {
            product_name: non_empty(params.product_name.as_deref()).map(str::to_owned),
            category: non_empty(params.category.as_deref()).map(str::to_owned),
            price_range,
            date_range,
            sort,
            page: parse_positive(params.page.as_deref(), 1)?,
            limit: parse_positive(params.limit.as_deref(), 10)?,
        })
    }

    /// Number of records skipped before this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_positive(value: Option<&str>, default: u32) -> Result<u32, QueryError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(QueryError::InvalidPagination),
    }
}

// Range values are exactly "min:max". Extra separators make the second
// part unparseable and are rejected, never truncated to the first two.
fn parse_price_range(value: &str) -> Result<PriceRange, QueryError> {
    let (min, max) = value.split_once(':').ok_or(QueryError::InvalidPriceRange)?;

    let min: Decimal = min
        .parse()
        .map_err(|_ignored| QueryError::InvalidPriceRange)?;
    let max: Decimal = max
        .parse()
        .map_err(|_ignored| QueryError::InvalidPriceRange)?;

    Ok(PriceRange { min, max })
}

fn parse_date_range(value: &str) -> Result<DateRange, QueryError> {
    let (start, end) = value.split_once(':').ok_or(QueryError::InvalidDateRange)?;

    let start: Date = start
        .parse()
        .map_err(|_ignored| QueryError::InvalidDateRange)?;
    let end: Date = end
        .parse()
        .map_err(|_ignored| QueryError::InvalidDateRange)?;

    Ok(DateRange { start, end })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn empty_params_use_defaults() -> TestResult {
        let query = ProductQuery::from_params(&ListParams::default())?;

        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert_eq!(query.sort, SortField::ProductName);
        assert_eq!(query.product_name, None);
        assert_eq!(query.category, None);
        assert_eq!(query.price_range, None);
        assert_eq!(query.date_range, None);

        Ok(())
    }

    #[test]
    fn sort_by_price_is_accepted() -> TestResult {
        let params = ListParams {
            sort: Some("price".to_string()),
            ..ListParams::default()
        };

        let query = ProductQuery::from_params(&params)?;

        assert_eq!(query.sort, SortField::Price);

        Ok(())
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let params = ListParams {
            sort: Some("availabilityDate".to_string()),
            ..ListParams::default()
        };

        let result = ProductQuery::from_params(&params);

        assert_eq!(result, Err(QueryError::InvalidSortField));
    }

    #[test]
    fn empty_sort_value_is_rejected() {
        let params = ListParams {
            sort: Some(String::new()),
            ..ListParams::default()
        };

        assert_eq!(
            ProductQuery::from_params(&params),
            Err(QueryError::InvalidSortField)
        );
    }

    #[test]
    fn price_range_parses_inclusive_bounds() -> TestResult {
        let params = ListParams {
            price_range: Some("49.99:799.99".to_string()),
            ..ListParams::default()
        };

        let query = ProductQuery::from_params(&params)?;

        assert_eq!(
            query.price_range,
            Some(PriceRange {
                min: "49.99".parse()?,
                max: "799.99".parse()?,
            })
        );

        Ok(())
    }

    #[test]
    fn non_numeric_price_range_is_rejected() {
        for raw in ["abc:20", "10:xyz", "10", "10:20:30", ":"] {
            let params = ListParams {
                price_range: Some(raw.to_string()),
                ..ListParams::default()
            };

            assert_eq!(
                ProductQuery::from_params(&params),
                Err(QueryError::InvalidPriceRange),
                "price range {raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn date_range_parses_inclusive_bounds() -> TestResult {
        let params = ListParams {
            date_range: Some("2026-10-01:2026-12-31".to_string()),
            ..ListParams::default()
        };

        let query = ProductQuery::from_params(&params)?;

        assert_eq!(
            query.date_range,
            Some(DateRange {
                start: date(2026, 10, 1),
                end: date(2026, 12, 31),
            })
        );

        Ok(())
    }

    #[test]
    fn malformed_date_range_is_rejected() {
        for raw in [
            "notadate:2026-01-01",
            "2026-01-01:soon",
            "2026-01-01",
            "2026-01-01:2026-02-01:2026-03-01",
        ] {
            let params = ListParams {
                date_range: Some(raw.to_string()),
                ..ListParams::default()
            };

            assert_eq!(
                ProductQuery::from_params(&params),
                Err(QueryError::InvalidDateRange),
                "date range {raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn empty_filters_impose_no_constraint() -> TestResult {
        let params = ListParams {
            product_name: Some(String::new()),
            category: Some(String::new()),
            price_range: Some(String::new()),
            date_range: Some(String::new()),
            ..ListParams::default()
        };

        let query = ProductQuery::from_params(&params)?;

        assert_eq!(query.product_name, None);
        assert_eq!(query.category, None);
        assert_eq!(query.price_range, None);
        assert_eq!(query.date_range, None);

        Ok(())
    }

    #[test]
    fn pagination_computes_offset() -> TestResult {
        let params = ListParams {
            page: Some("3".to_string()),
            limit: Some("25".to_string()),
            ..ListParams::default()
        };

        let query = ProductQuery::from_params(&params)?;

        assert_eq!(query.page, 3);
        assert_eq!(query.limit, 25);
        assert_eq!(query.offset(), 50);

        Ok(())
    }

    #[test]
    fn zero_or_non_numeric_pagination_is_rejected() {
        for (page, limit) in [("0", "10"), ("1", "0"), ("two", "10"), ("1", "-5")] {
            let params = ListParams {
                page: Some(page.to_string()),
                limit: Some(limit.to_string()),
                ..ListParams::default()
            };

            assert_eq!(
                ProductQuery::from_params(&params),
                Err(QueryError::InvalidPagination),
                "page={page} limit={limit} should be rejected"
            );
        }
    }

    #[test]
    fn error_messages_match_wire_contract() {
        assert_eq!(QueryError::InvalidSortField.to_string(), "Invalid sort field");
        assert_eq!(
            QueryError::InvalidPriceRange.to_string(),
            "Invalid price range format"
        );
        assert_eq!(
            QueryError::InvalidDateRange.to_string(),
            "Invalid date range format"
        );
    }
}
