use serde::{Deserialize, Serialize};

/// Active filter constraints for one catalog query
///
/// Every bound is optional; the default value constrains nothing. A bound
/// of zero counts as "not set" — it is indistinguishable from `None`, so a
/// minimum of exactly zero cannot be expressed. This mirrors the upstream
/// behavior and is pinned by the engine tests. Negative bounds are kept
/// and applied literally.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Minimum price (inclusive)
    pub price_min: Option<i64>,
    /// Maximum price (inclusive)
    pub price_max: Option<i64>,
    /// Accepted property types; empty = no constraint
    pub property_types: Vec<String>,
    /// Minimum number of bedrooms (inclusive)
    pub bedrooms_min: Option<u32>,
    /// Minimum number of bathrooms (inclusive)
    pub bathrooms_min: Option<u32>,
    /// Minimum size in square feet (inclusive)
    pub square_feet_min: Option<u32>,
    /// Maximum size in square feet (inclusive)
    pub square_feet_max: Option<u32>,
}

/// Resolve an optional bound to its effective value, treating zero as unset.
pub(crate) fn set_bound<T: Copy + PartialEq + Default>(value: Option<T>) -> Option<T> {
    value.filter(|v| *v != T::default())
}

impl FilterCriteria {
    /// True when at least one constraint would actually narrow a result set
    pub fn is_active(&self) -> bool {
        !self.property_types.is_empty()
            || set_bound(self.price_min).is_some()
            || set_bound(self.price_max).is_some()
            || set_bound(self.bedrooms_min).is_some()
            || set_bound(self.bathrooms_min).is_some()
            || set_bound(self.square_feet_min).is_some()
            || set_bound(self.square_feet_max).is_some()
    }
}
