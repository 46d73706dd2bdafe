//! Common types

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Index of the first page an endpoint expects.
///
/// The backend is not consistent here (the user list counts from 0, the menu,
/// client and relation lists from 1) and the console keeps each endpoint's
/// convention instead of normalizing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBase {
    Zero,
    One,
}

impl PageBase {
    /// Map a 1-based page number, as shown to an operator, onto the endpoint's
    /// own numbering.
    pub fn from_display(self, display_page: u32) -> u32 {
        let display_page = display_page.max(1);
        match self {
            PageBase::Zero => display_page - 1,
            PageBase::One => display_page,
        }
    }

    pub fn to_display(self, page: u32) -> u32 {
        match self {
            PageBase::Zero => page + 1,
            PageBase::One => page.max(1),
        }
    }
}

/// List request, sent form-encoded as `page`, `size` and optional `keyword`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            keyword: None,
        }
    }

    /// Blank keywords are dropped so they never reach the query.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        let trimmed = keyword.trim();
        self.keyword = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// First page for an endpoint with the given base.
    pub fn first(base: PageBase) -> Self {
        Self::new(base.from_display(1), DEFAULT_PAGE_SIZE)
    }
}

/// Paged list returned inside the response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page_num: u32,
    #[serde(default)]
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
