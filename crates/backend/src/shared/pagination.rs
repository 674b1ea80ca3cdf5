use contracts::shared::response::PageInfo;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;

/// Page and limit as parsed from the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// `page >= 1`, `limit` clamped to `1..=100`; unparsable input falls back
    /// to the defaults
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_int(page)
            .map(|p| p.max(1) as usize)
            .unwrap_or(DEFAULT_PAGE);
        let limit = parse_int(limit)
            .map(|l| l.clamp(1, MAX_LIMIT as i64) as usize)
            .unwrap_or(DEFAULT_LIMIT);
        Self { page, limit }
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Pages an already filtered and sorted list in memory
    pub fn paginate<T>(&self, items: Vec<T>) -> (Vec<T>, PageInfo) {
        let info = PageInfo::new(self.page, self.limit, items.len());
        let page = items
            .into_iter()
            .skip(self.offset())
            .take(self.limit)
            .collect();
        (page, info)
    }
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}
