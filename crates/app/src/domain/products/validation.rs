//! Product validation rule set.
//!
//! The constraints live in a plain [`ValidationRules`] value checked by
//! the service before any store write, so the same rules apply
//! regardless of the backing store.

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::domain::products::data::{NewProduct, ProductDraft};

/// Categories accepted when none are configured explicitly.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Electronics", "Appliances", "Furniture"];

/// Field constraints applied to every product write.
#[derive(Debug, Clone)]
pub struct ValidationRules {
    pub name_min_len: usize,
    pub name_max_len: usize,
    pub min_price: Decimal,
    pub categories: Vec<String>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_min_len: 3,
            name_max_len: 100,
            min_price: Decimal::ZERO,
            categories: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ValidationRules {
    /// Replace the accepted category set.
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// Check `draft` against the rule set, with `today` as the earliest
    /// acceptable availability date.
    ///
    /// # Errors
    ///
    /// Returns every failed constraint as a human-readable message, in
    /// field order (name, category, price, availability date).
    pub fn validate(&self, draft: &ProductDraft, today: Date) -> Result<NewProduct, Vec<String>> {
        let mut errors = Vec::new();

        let product_name = match draft.product_name.as_deref().filter(|v| !v.is_empty()) {
            None => {
                errors.push("Product name is required".to_string());
                None
            }
            Some(name) if name.chars().count() < self.name_min_len => {
                errors.push(format!(
                    "Product name must be at least {} characters long",
                    self.name_min_len
                ));
                None
            }
            Some(name) if name.chars().count() > self.name_max_len => {
                errors.push(format!(
                    "Product name must be less than {} characters long",
                    self.name_max_len
                ));
                None
            }
            Some(name) => Some(name.to_string()),
        };

        let category = match draft.category.as_deref().filter(|v| !v.is_empty()) {
            None => {
                errors.push("Category is required".to_string());
                None
            }
            Some(category) if !self.categories.iter().any(|c| c == category) => {
                errors.push(format!("{category} is not a valid category"));
                None
            }
            Some(category) => Some(category.to_string()),
        };

        let price = match draft.price {
            None => {
                errors.push("Price is required".to_string());
                None
            }
            Some(price) if price < self.min_price => {
                errors.push(format!("Price must be at least {}", self.min_price));
                None
            }
            Some(price) => Some(price),
        };

        let availability_date = match draft.availability_date.as_deref().filter(|v| !v.is_empty()) {
            None => {
                errors.push("Availability date is required".to_string());
                None
            }
            Some(raw) => match raw.parse::<Date>() {
                Err(_parse) => {
                    errors.push("Availability date must be a valid date".to_string());
                    None
                }
                Ok(date) if date < today => {
                    errors.push("Availability date must be today or in the future".to_string());
                    None
                }
                Ok(date) => Some(date),
            },
        };

        match (product_name, category, price, availability_date) {
            (Some(product_name), Some(category), Some(price), Some(availability_date))
                if errors.is_empty() =>
            {
                Ok(NewProduct {
                    product_name,
                    category,
                    price,
                    availability_date,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    const TODAY: Date = date(2026, 8, 29);

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            product_name: Some("Smartphone".to_string()),
            category: Some("Electronics".to_string()),
            price: Some(Decimal::new(69999, 2)),
            availability_date: Some("2026-09-10".to_string()),
        }
    }

    #[test]
    fn valid_draft_passes() -> TestResult {
        let rules = ValidationRules::default();

        let new = rules.validate(&valid_draft(), TODAY).map_err(|e| e.join("; "))?;

        assert_eq!(new.product_name, "Smartphone");
        assert_eq!(new.category, "Electronics");
        assert_eq!(new.price, Decimal::new(69999, 2));
        assert_eq!(new.availability_date, date(2026, 9, 10));

        Ok(())
    }

    #[test]
    fn two_character_name_fails_three_passes() -> TestResult {
        let rules = ValidationRules::default();

        let mut draft = valid_draft();
        draft.product_name = Some("Sm".to_string());

        let errors = rules.validate(&draft, TODAY).err().unwrap_or_default();
        assert_eq!(
            errors,
            vec!["Product name must be at least 3 characters long".to_string()]
        );

        draft.product_name = Some("Smp".to_string());
        let new = rules.validate(&draft, TODAY).map_err(|e| e.join("; "))?;
        assert_eq!(new.product_name, "Smp");

        Ok(())
    }

    #[test]
    fn hundred_character_name_passes_longer_fails() -> TestResult {
        let rules = ValidationRules::default();

        let mut draft = valid_draft();
        draft.product_name = Some("x".repeat(100));
        assert!(rules.validate(&draft, TODAY).is_ok(), "100 chars should pass");

        draft.product_name = Some("x".repeat(101));
        let errors = rules.validate(&draft, TODAY).err().unwrap_or_default();
        assert_eq!(
            errors,
            vec!["Product name must be less than 100 characters long".to_string()]
        );

        Ok(())
    }

    #[test]
    fn unknown_category_is_rejected_with_its_value() {
        let rules = ValidationRules::default();

        let mut draft = valid_draft();
        draft.category = Some("Groceries".to_string());

        let errors = rules.validate(&draft, TODAY).err().unwrap_or_default();
        assert_eq!(errors, vec!["Groceries is not a valid category".to_string()]);
    }

    #[test]
    fn configured_categories_replace_defaults() {
        let rules =
            ValidationRules::default().with_categories(vec!["Groceries".to_string()]);

        let mut draft = valid_draft();
        draft.category = Some("Groceries".to_string());
        assert!(rules.validate(&draft, TODAY).is_ok(), "configured category");

        draft.category = Some("Electronics".to_string());
        assert!(rules.validate(&draft, TODAY).is_err(), "former default");
    }

    #[test]
    fn negative_price_is_rejected() {
        let rules = ValidationRules::default();

        let mut draft = valid_draft();
        draft.price = Some(Decimal::new(-1, 2));

        let errors = rules.validate(&draft, TODAY).err().unwrap_or_default();
        assert_eq!(errors, vec!["Price must be at least 0".to_string()]);
    }

    #[test]
    fn past_date_fails_today_passes() -> TestResult {
        let rules = ValidationRules::default();

        let mut draft = valid_draft();
        draft.availability_date = Some("2026-08-28".to_string());

        let errors = rules.validate(&draft, TODAY).err().unwrap_or_default();
        assert_eq!(
            errors,
            vec!["Availability date must be today or in the future".to_string()]
        );

        draft.availability_date = Some("2026-08-29".to_string());
        let new = rules.validate(&draft, TODAY).map_err(|e| e.join("; "))?;
        assert_eq!(new.availability_date, TODAY);

        Ok(())
    }

    #[test]
    fn unparseable_date_gets_its_own_message() {
        let rules = ValidationRules::default();

        let mut draft = valid_draft();
        draft.availability_date = Some("invalid-date".to_string());

        let errors = rules.validate(&draft, TODAY).err().unwrap_or_default();
        assert_eq!(errors, vec!["Availability date must be a valid date".to_string()]);
    }

    #[test]
    fn missing_fields_report_in_field_order() {
        let rules = ValidationRules::default();

        let errors = rules
            .validate(&ProductDraft::default(), TODAY)
            .err()
            .unwrap_or_default();

        assert_eq!(
            errors,
            vec![
                "Product name is required".to_string(),
                "Category is required".to_string(),
                "Price is required".to_string(),
                "Availability date is required".to_string(),
            ]
        );
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let rules = ValidationRules::default();

        let draft = ProductDraft {
            product_name: Some(String::new()),
            category: Some(String::new()),
            price: None,
            availability_date: Some(String::new()),
        };

        let errors = rules.validate(&draft, TODAY).err().unwrap_or_default();

        assert_eq!(errors.len(), 4, "all four fields should be reported");
        assert_eq!(
            errors.first().map(String::as_str),
            Some("Product name is required")
        );
    }
}
