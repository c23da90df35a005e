use crate::{model::admin::PendingPageDto, server::model::resource::ResourceSummary};

/// One page of the review queue.
#[derive(Debug, Clone)]
pub struct PendingPage {
    pub items: Vec<ResourceSummary>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PendingPage {
    pub fn new(items: Vec<ResourceSummary>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    pub fn empty(page: u64, per_page: u64) -> Self {
        Self::new(Vec::new(), 0, page, per_page)
    }

    pub fn into_dto(self) -> PendingPageDto {
        PendingPageDto {
            items: self
                .items
                .into_iter()
                .map(ResourceSummary::into_pending_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
