//! Limit/offset window for `first-users`

/// Default number of users returned by a page
pub const DEFAULT_LIMIT: u32 = 10;

/// A contiguous slice of the id-ordered user list.
///
/// No clamping: `limit = 0` yields an empty page and an offset past the end
/// of the table yields an empty page rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of users to return
    pub limit: u32,
    /// Number of users to skip
    pub offset: u32,
}

impl Page {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// SQL `LIMIT` value
    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }

    /// SQL `OFFSET` value
    pub fn offset(&self) -> i64 {
        i64::from(self.offset)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
