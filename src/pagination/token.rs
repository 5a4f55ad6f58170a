//! Page tokens and the window sequence handed to renderers.

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for the ellipsis marker in display and JSON forms.
pub const ELLIPSIS_LABEL: &str = "...";

/// One entry of a pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A clickable one-based page number.
    Page(usize),
    /// An omitted run of page numbers.
    Ellipsis,
}

impl PageToken {
    /// Page number carried by this token, if any.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(page) => Some(*page),
            PageToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(page) => write!(f, "{}", page),
            PageToken::Ellipsis => f.write_str(ELLIPSIS_LABEL),
        }
    }
}

// JSON shape is `number | "..."`.
impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(page) => serializer.serialize_u64(*page as u64),
            PageToken::Ellipsis => serializer.serialize_str(ELLIPSIS_LABEL),
        }
    }
}

impl<'de> Deserialize<'de> for PageToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TokenVisitor;

        impl<'de> Visitor<'de> for TokenVisitor {
            type Value = PageToken;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a page number or \"{}\"", ELLIPSIS_LABEL)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<PageToken, E> {
                usize::try_from(value)
                    .map(PageToken::Page)
                    .map_err(|_| E::custom(format!("page number {} out of range", value)))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<PageToken, E> {
                usize::try_from(value)
                    .map(PageToken::Page)
                    .map_err(|_| E::custom(format!("page number {} out of range", value)))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<PageToken, E> {
                if value == ELLIPSIS_LABEL {
                    Ok(PageToken::Ellipsis)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_any(TokenVisitor)
    }
}

/// Ordered token sequence produced by the window calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaginationWindow(Vec<PageToken>);

impl PaginationWindow {
    pub fn new(tokens: Vec<PageToken>) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &[PageToken] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Page numbers in window order, skipping ellipsis markers.
    pub fn pages(&self) -> Vec<usize> {
        self.0.iter().filter_map(PageToken::page).collect()
    }

    pub fn contains_page(&self, page: usize) -> bool {
        self.0.contains(&PageToken::Page(page))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageToken> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<PageToken> {
        self.0
    }
}

impl From<Vec<PageToken>> for PaginationWindow {
    fn from(tokens: Vec<PageToken>) -> Self {
        Self(tokens)
    }
}

impl<'a> IntoIterator for &'a PaginationWindow {
    type Item = &'a PageToken;
    type IntoIter = std::slice::Iter<'a, PageToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for PaginationWindow {
    type Item = PageToken;
    type IntoIter = std::vec::IntoIter<PageToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for PaginationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
