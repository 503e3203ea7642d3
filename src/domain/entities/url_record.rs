//! Url record entity representing a shortened URL mapping.

/// A stored mapping between a short code and its original URL.
///
/// `id` is assigned by the store on insert and never changes. `short_code`
/// is unique among all records; the store's unique index enforces this even
/// when two requests race on the same candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, original_url: String, short_code: String) -> Self {
        Self {
            id,
            original_url,
            short_code,
        }
    }
}

/// Input data for creating a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrl {
    pub original_url: String,
    pub short_code: String,
}
