//! Check-category mask for response validation
//!
//! Each category can be toggled independently:
//! - keys: presence of template keys at the top level
//! - sub_entity_keys: presence of template keys inside nested objects
//! - types_of_values: variant-tag equality per matched key
//! - extended_rules: rule entries embedded in the template
//!
//! The mask is constructed per validation call and carries no state
//! between calls. Single-category values combine with `|`.

use std::ops::{BitOr, BitOrAssign};

/// Enabled validation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationChecks {
    /// Check top-level key presence
    pub keys: bool,
    /// Check key presence inside nested objects
    pub sub_entity_keys: bool,
    /// Check that value types match the template
    pub types_of_values: bool,
    /// Apply rule entries found in the template
    pub extended_rules: bool,
}

impl ValidationChecks {
    /// All four categories enabled
    pub fn all() -> Self {
        Self {
            keys: true,
            sub_entity_keys: true,
            types_of_values: true,
            extended_rules: true,
        }
    }

    /// No categories enabled
    pub fn none() -> Self {
        Self {
            keys: false,
            sub_entity_keys: false,
            types_of_values: false,
            extended_rules: false,
        }
    }

    /// Only top-level key presence
    pub fn keys() -> Self {
        Self {
            keys: true,
            ..Self::none()
        }
    }

    /// Only nested key presence
    pub fn sub_entity_keys() -> Self {
        Self {
            sub_entity_keys: true,
            ..Self::none()
        }
    }

    /// Only type checking
    pub fn types_of_values() -> Self {
        Self {
            types_of_values: true,
            ..Self::none()
        }
    }

    /// Only extended rules
    pub fn extended_rules() -> Self {
        Self {
            extended_rules: true,
            ..Self::none()
        }
    }

    /// Returns the copy with the given categories disabled
    pub fn without(self, other: Self) -> Self {
        Self {
            keys: self.keys && !other.keys,
            sub_entity_keys: self.sub_entity_keys && !other.sub_entity_keys,
            types_of_values: self.types_of_values && !other.types_of_values,
            extended_rules: self.extended_rules && !other.extended_rules,
        }
    }
}

impl Default for ValidationChecks {
    fn default() -> Self {
        Self::all()
    }
}

impl BitOr for ValidationChecks {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            keys: self.keys || rhs.keys,
            sub_entity_keys: self.sub_entity_keys || rhs.sub_entity_keys,
            types_of_values: self.types_of_values || rhs.types_of_values,
            extended_rules: self.extended_rules || rhs.extended_rules,
        }
    }
}

impl BitOrAssign for ValidationChecks {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}
