use crate::domain::recommendation::entities::ReferenceRow;

/// Read-only lookup over the reference rows, built once at startup.
#[cfg_attr(test, mockall::automock)]
pub trait ReferenceTable: Send + Sync {
    /// First row whose category equals `category`.
    fn find_by_category(&self, category: &str) -> Option<ReferenceRow>;

    fn row_count(&self) -> usize;
}
