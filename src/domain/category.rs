//! Note categories and the category filter used by the tab surface.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The pseudo-category meaning "no filter". Never a real note's category.
pub const ALL_CATEGORIES: &str = "all";

/// A user-defined label grouping notes, such as `work` or `personal`.
///
/// Categories form an open set. Labels are trimmed but otherwise kept as
/// typed; filtering compares them exactly.
///
/// # Validation Rules
/// - Non-empty after trimming
/// - Not the reserved word `all` (in any case)
///
/// # Examples
///
/// ```
/// use pinnotes::domain::Category;
///
/// let work = Category::new(" work ").unwrap();
/// assert_eq!(work.as_str(), "work");
/// assert!(Category::new("all").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

/// Error returned when parsing an invalid category.
#[derive(Debug, Clone)]
pub struct ParseCategoryError(String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl Category {
    /// Creates a new Category from a label.
    ///
    /// # Errors
    ///
    /// Returns `ParseCategoryError` if the label is empty or reserved.
    pub fn new(s: &str) -> Result<Self, ParseCategoryError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseCategoryError("category cannot be empty".to_string()));
        }

        if trimmed.eq_ignore_ascii_case(ALL_CATEGORIES) {
            return Err(ParseCategoryError(format!(
                "'{}' is reserved and cannot be used as a category",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category(\"{}\")", self.0)
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Which notes a view shows: every note, or one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if `category` passes this filter.
    pub fn admits(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Returns the selected category, or `None` for `All`.
    pub fn category(&self) -> Option<&Category> {
        match self {
            Self::All => None,
            Self::Only(category) => Some(category),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL_CATEGORIES),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_CATEGORIES) {
            return Ok(Self::All);
        }
        Category::new(s).map(Self::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}
