use crate::domain::constants::PAGE_SIZE;
use std::ops::RangeInclusive;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("already at the first page")]
pub struct AtBoundary;

/// Page cursor for the location listing. Page 0 means nothing has been
/// listed yet; once listing starts the cursor never drops below 1.
#[derive(Debug, Default, Clone)]
pub struct Pager {
    page: u32,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u32 {
        self.page
    }

    pub fn advance(&mut self) -> u32 {
        self.page = self.page.saturating_add(1);
        self.page
    }

    pub fn retreat(&mut self) -> Result<u32, AtBoundary> {
        if self.page <= 1 {
            return Err(AtBoundary);
        }
        self.page -= 1;
        Ok(self.page)
    }
}

/// Catalog indices covered by `page` (1-based, inclusive).
pub fn page_range(page: u32) -> RangeInclusive<u32> {
    let last = page.saturating_mul(PAGE_SIZE);
    let first = last.saturating_sub(PAGE_SIZE) + 1;
    first..=last
}
