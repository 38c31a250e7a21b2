// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Administrative admission settings.
//!
//! Settings are an immutable value handed to each evaluation. Nothing in the
//! admission rules reads or mutates shared configuration.

use crate::types::ProductCategory;
use serde::{Deserialize, Serialize};

/// Enable flag and price for one product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPolicy {
    pub enabled: bool,
    /// Price for the full product term, in whole won.
    pub price: u64,
}

impl CategoryPolicy {
    #[must_use]
    pub const fn new(enabled: bool, price: u64) -> Self {
        Self { enabled, price }
    }
}

/// Per-category policies, one field per [`ProductCategory`].
///
/// Deserialization fills any missing category, or any missing field inside a
/// category, from [`CategoryPolicies::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PartialCategoryPolicies")]
pub struct CategoryPolicies {
    pub full_day: CategoryPolicy,
    pub morning: CategoryPolicy,
    pub evening: CategoryPolicy,
}

impl CategoryPolicies {
    /// Returns the policy for a category.
    #[must_use]
    pub const fn get(&self, category: ProductCategory) -> &CategoryPolicy {
        match category {
            ProductCategory::FullDay => &self.full_day,
            ProductCategory::Morning => &self.morning,
            ProductCategory::Evening => &self.evening,
        }
    }
}

impl Default for CategoryPolicies {
    fn default() -> Self {
        Self {
            full_day: CategoryPolicy::new(true, 150_000),
            morning: CategoryPolicy::new(true, 100_000),
            evening: CategoryPolicy::new(true, 100_000),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialCategoryPolicy {
    enabled: Option<bool>,
    price: Option<u64>,
}

impl PartialCategoryPolicy {
    fn merge_into(self, base: CategoryPolicy) -> CategoryPolicy {
        CategoryPolicy {
            enabled: self.enabled.unwrap_or(base.enabled),
            price: self.price.unwrap_or(base.price),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialCategoryPolicies {
    full_day: PartialCategoryPolicy,
    morning: PartialCategoryPolicy,
    evening: PartialCategoryPolicy,
}

impl From<PartialCategoryPolicies> for CategoryPolicies {
    fn from(partial: PartialCategoryPolicies) -> Self {
        let base = Self::default();
        Self {
            full_day: partial.full_day.merge_into(base.full_day),
            morning: partial.morning.merge_into(base.morning),
            evening: partial.evening.merge_into(base.evening),
        }
    }
}

/// Locker add-on policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockerPolicy {
    pub enabled: bool,
    /// Price for the locker over the membership term, in whole won.
    pub price: u64,
}

impl Default for LockerPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            price: 30_000,
        }
    }
}

/// The complete settings value consumed by eligibility and guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmissionSettings {
    pub categories: CategoryPolicies,
    pub locker: LockerPolicy,
    /// When false the registration window guard always passes.
    pub enforce_registration_window: bool,
    /// When true whitelist purchases need a confirmed manual verification.
    pub require_whitelist_verification: bool,
    /// When true an admission uses up the matching whitelist entry.
    pub consume_whitelist_on_admission: bool,
}

impl AdmissionSettings {
    /// Returns whether a category is administratively enabled.
    #[must_use]
    pub const fn is_enabled(&self, category: ProductCategory) -> bool {
        self.categories.get(category).enabled
    }
}

impl Default for AdmissionSettings {
    fn default() -> Self {
        Self {
            categories: CategoryPolicies::default(),
            locker: LockerPolicy::default(),
            enforce_registration_window: true,
            require_whitelist_verification: false,
            consume_whitelist_on_admission: true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_from_default() {
        let settings: AdmissionSettings =
            serde_json::from_str(r#"{"enforce_registration_window": false}"#).unwrap();

        assert!(!settings.enforce_registration_window);
        assert_eq!(settings.locker, AdmissionSettings::default().locker);
        assert!(settings.is_enabled(ProductCategory::Evening));
    }

    #[test]
    fn test_nested_partial_settings_fill_from_default() {
        let defaults = AdmissionSettings::default();

        let settings: AdmissionSettings =
            serde_json::from_str(r#"{"locker": {"enabled": false}}"#).unwrap();
        assert!(!settings.locker.enabled);
        assert_eq!(settings.locker.price, defaults.locker.price);
        assert_eq!(settings.categories, defaults.categories);

        let settings: AdmissionSettings =
            serde_json::from_str(r#"{"categories": {"morning": {"enabled": false}}}"#).unwrap();
        assert!(!settings.is_enabled(ProductCategory::Morning));
        assert_eq!(settings.categories.morning.price, 100_000);
        assert_eq!(settings.categories.full_day, defaults.categories.full_day);
        assert_eq!(settings.categories.evening, defaults.categories.evening);

        let settings: AdmissionSettings =
            serde_json::from_str(r#"{"categories": {"full_day": {"price": 175000}}}"#).unwrap();
        assert!(settings.is_enabled(ProductCategory::FullDay));
        assert_eq!(settings.categories.full_day.price, 175_000);
    }

    #[test]
    fn test_category_lookup_is_per_field() {
        let mut settings = AdmissionSettings::default();
        settings.categories.morning.enabled = false;

        assert!(settings.is_enabled(ProductCategory::FullDay));
        assert!(!settings.is_enabled(ProductCategory::Morning));
        assert!(settings.is_enabled(ProductCategory::Evening));
    }
}
