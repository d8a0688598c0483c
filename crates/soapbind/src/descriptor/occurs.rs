// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Occurrence bounds for one array nesting level.

use std::fmt;

/// Upper occurrence bound of a sequence element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaxOccurs {
    /// Fixed upper bound.
    Bounded(u32),
    /// No upper bound (`maxOccurs="unbounded"`).
    Unbounded,
}

impl MaxOccurs {
    /// Numeric bound, `None` when unbounded.
    pub fn bound(&self) -> Option<u32> {
        match self {
            Self::Bounded(n) => Some(*n),
            Self::Unbounded => None,
        }
    }
}

impl fmt::Display for MaxOccurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(n) => write!(f, "{}", n),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// `minOccurs` / `maxOccurs` pair of one nesting level.
///
/// Constructed through [`Occurs::new`], which rejects `max < min` and a
/// zero upper bound; every `Occurs` in circulation is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurs {
    min: u32,
    max: MaxOccurs,
}

impl Occurs {
    /// The `[]` shorthand: zero or more items.
    pub const UNBOUNDED_LIST: Self = Self {
        min: 0,
        max: MaxOccurs::Unbounded,
    };

    /// Validate and build an occurrence pair.
    ///
    /// Returns the rejection reason as text so the caller can attach the
    /// offending descriptor.
    pub fn new(min: u32, max: MaxOccurs) -> Result<Self, String> {
        match max {
            MaxOccurs::Bounded(0) => Err("zero-length array bound".to_string()),
            MaxOccurs::Bounded(max) if min > max => Err(format!(
                "minOccurs {} exceeds maxOccurs {}",
                min, max
            )),
            _ => Ok(Self { min, max }),
        }
    }

    /// Fixed-size array: `min == max == n`.
    pub fn exactly(n: u32) -> Result<Self, String> {
        Self::new(n, MaxOccurs::Bounded(n))
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> MaxOccurs {
        self.max
    }

    /// True for `(0, unbounded)`, the shape named plainly `ArrayOf`.
    pub fn is_unbounded_list(&self) -> bool {
        *self == Self::UNBOUNDED_LIST
    }

    /// Type-name prefix contributed by this level.
    ///
    /// `ArrayOf` for `(0, unbounded)`, `Array.<n>.Of` for fixed sizes,
    /// `Array.<min>.<max>.Of` otherwise.
    pub fn wrapper_prefix(&self) -> String {
        if self.is_unbounded_list() {
            return "ArrayOf".to_string();
        }
        match self.max {
            MaxOccurs::Bounded(max) if max == self.min => format!("Array.{}.Of", max),
            max => format!("Array.{}.{}.Of", self.min, max),
        }
    }
}

impl fmt::Display for Occurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_prefixes() {
        assert_eq!(Occurs::UNBOUNDED_LIST.wrapper_prefix(), "ArrayOf");
        assert_eq!(Occurs::exactly(3).unwrap().wrapper_prefix(), "Array.3.Of");
        assert_eq!(
            Occurs::new(2, MaxOccurs::Bounded(5)).unwrap().wrapper_prefix(),
            "Array.2.5.Of"
        );
        assert_eq!(
            Occurs::new(2, MaxOccurs::Unbounded).unwrap().wrapper_prefix(),
            "Array.2.unbounded.Of"
        );
    }

    #[test]
    fn test_zero_min_unbounded_is_plain_list() {
        let occurs = Occurs::new(0, MaxOccurs::Unbounded).unwrap();
        assert!(occurs.is_unbounded_list());
        assert_eq!(occurs.wrapper_prefix(), "ArrayOf");
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        assert!(Occurs::new(5, MaxOccurs::Bounded(2)).is_err());
        assert!(Occurs::exactly(0).is_err());
        assert!(Occurs::new(0, MaxOccurs::Bounded(0)).is_err());
        assert!(Occurs::new(0, MaxOccurs::Bounded(4)).is_ok());
    }
}
