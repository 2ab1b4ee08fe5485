//! Listing query construction.

use jiff::civil::Date;
use rust_decimal::Decimal;

/// Field to order listings by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sort {
    #[default]
    ProductName,
    Price,
}

impl Sort {
    fn as_param(self) -> &'static str {
        match self {
            Self::ProductName => "productName",
            Self::Price => "price",
        }
    }
}

/// Parameters for a product listing request.
///
/// A price or date range is only sent when both endpoints are set;
/// half-open ranges are not part of the wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub sort: Sort,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            sort: Sort::default(),
            product_name: None,
            category: None,
            min_price: None,
            max_price: None,
            start_date: None,
            end_date: None,
        }
    }
}

impl ListQuery {
    /// Render the query string, without a leading `?`.
    ///
    /// Filter values are form-encoded; the range separator stays a
    /// literal `:` since both halves only contain digits, dots, and
    /// dashes.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut query = format!(
            "page={}&limit={}&sort={}",
            self.page,
            self.limit,
            self.sort.as_param()
        );

        if let Some(name) = self.product_name.as_deref().filter(|v| !v.is_empty()) {
            query.push_str("&productName=");
            query.extend(form_urlencoded::byte_serialize(name.as_bytes()));
        }

        if let Some(category) = self.category.as_deref().filter(|v| !v.is_empty()) {
            query.push_str("&category=");
            query.extend(form_urlencoded::byte_serialize(category.as_bytes()));
        }

        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            query.push_str(&format!("&priceRange={min}:{max}"));
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            query.push_str(&format!("&dateRange={start}:{end}"));
        }

        query
    }
}
