//! Products Data

use jiff::civil::Date;
use rust_decimal::Decimal;

/// Unvalidated product fields as received from a client.
///
/// Every field is optional; the validation rule set decides which
/// absences and values are errors. The availability date stays a raw
/// string here so an unparseable date surfaces as a field message
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub availability_date: Option<String>,
}

/// Product fields that passed the validation rule set.
///
/// The only way to obtain one is through
/// [`ValidationRules::validate`](crate::domain::products::validation::ValidationRules::validate),
/// so drafts never reach the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub product_name: String,
    pub category: String,
    pub price: Decimal,
    pub availability_date: Date,
}
