use chrono::NaiveDate;

use super::cheque::ChequeStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Any,
    Only(ChequeStatus),
}

/// Inclusive calendar-date window. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Amount,
    Name,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChequeSort {
    pub key: SortKey,
    pub order: SortOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChequeFilter {
    pub status: StatusFilter,
    pub search: String,
    pub date_range: DateRange,
    /// Without a sort, the ledger's newest-first order is kept.
    pub sort: Option<ChequeSort>,
}

// --

impl DateRange {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn from(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn until(end: NaiveDate) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

impl ChequeFilter {
    pub fn with_status(self, status: ChequeStatus) -> Self {
        Self {
            status: StatusFilter::Only(status),
            ..self
        }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    pub fn with_date_range(self, date_range: DateRange) -> Self {
        Self { date_range, ..self }
    }

    pub fn sorted_by(self, key: SortKey, order: SortOrder) -> Self {
        Self {
            sort: Some(ChequeSort { key, order }),
            ..self
        }
    }
}
