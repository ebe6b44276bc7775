//! Name/stock filtering.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// What the user typed and ticked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub text: String,
    pub in_stock_only: bool,
}

impl FilterState {
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    pub fn with_in_stock_only(&self, in_stock_only: bool) -> Self {
        Self {
            in_stock_only,
            ..self.clone()
        }
    }

    pub fn toggled_in_stock_only(&self) -> Self {
        self.with_in_stock_only(!self.in_stock_only)
    }

    /// Compile the state into a reusable predicate.
    pub fn predicate(&self) -> ProductFilter {
        ProductFilter::from(self)
    }
}

#[derive(Debug, Clone)]
enum NamePattern {
    Any,
    Regex(Regex),
    /// Lowercased needle, used when the text is not a valid expression.
    Literal(String),
}

impl NamePattern {
    fn compile(text: &str) -> Self {
        if text.is_empty() {
            return Self::Any;
        }
        match RegexBuilder::new(text).case_insensitive(true).build() {
            Ok(re) => Self::Regex(re),
            Err(err) => {
                tracing::debug!(pattern = text, error = %err, "filter text is not a regex; matching literally");
                Self::Literal(text.to_lowercase())
            }
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Regex(re) => re.is_match(name),
            Self::Literal(needle) => name.to_lowercase().contains(needle.as_str()),
        }
    }
}

/// Compiled form of [`FilterState`].
///
/// A product passes when it is stocked (or stock is ignored) and its name
/// matches the text, case-insensitively.
#[derive(Debug, Clone)]
pub struct ProductFilter {
    pattern: NamePattern,
    in_stock_only: bool,
}

impl From<&FilterState> for ProductFilter {
    fn from(state: &FilterState) -> Self {
        Self {
            pattern: NamePattern::compile(&state.text),
            in_stock_only: state.in_stock_only,
        }
    }
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            pattern: NamePattern::Any,
            in_stock_only: false,
        }
    }
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_stock(product) && self.matches_name(product)
    }

    pub fn matches_stock(&self, product: &Product) -> bool {
        !self.in_stock_only || product.stocked()
    }

    pub fn matches_name(&self, product: &Product) -> bool {
        self.pattern.matches(product.name())
    }
}
