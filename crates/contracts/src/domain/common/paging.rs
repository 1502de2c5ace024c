use serde::{Deserialize, Serialize};

/// Paging envelope returned by the paged list endpoints
/// (customers, room bookings, booking groups).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub page: u32,

    #[serde(rename = "pageSize")]
    pub page_size: u32,

    #[serde(rename = "totalItems")]
    pub total_items: u64,

    #[serde(rename = "totalPages")]
    pub total_pages: u32,

    pub data: Vec<T>,
}

impl<T> Default for PagedResponse<T> {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            total_items: 0,
            total_pages: 0,
            data: Vec::new(),
        }
    }
}
