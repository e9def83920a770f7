//! Pagination/filter state machine for the incident list. Transitions are
//! pure: each returns the `Fetch` command the caller must issue, and the
//! response comes back through [`ListState::apply`] guarded by a monotonic
//! sequence number so a late response can never overwrite a newer one.

use crate::error::{Failure, RequestError};
use crate::incident::{Incident, Status};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub status_filter: Option<Status>,
    pub page: u32,
    pub page_size: u32,
}

impl ListQuery {
    /// Query parameters as GET /incidents/ expects them. There is no
    /// server-side total count; paging is skip/limit only.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("sort_by", "created_at".to_string()),
            ("skip", ((self.page - 1) * self.page_size).to_string()),
            ("limit", self.page_size.to_string()),
        ];
        if let Some(status) = self.status_filter {
            params.push(("status", status.as_str().to_string()));
        }
        params
    }
}

/// A fetch the caller must issue. The sequence number ties the eventual
/// response back to the state that requested it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fetch {
    pub seq: u64,
    pub query: ListQuery,
}

#[derive(Clone, Debug)]
pub struct ListState {
    incidents: Vec<Incident>,
    status_filter: Option<Status>,
    page: u32,
    page_size: u32,
    issued_seq: u64,
    last_page_len: Option<usize>,
    last_error: Option<Failure>,
}

impl ListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            incidents: Vec::new(),
            status_filter: None,
            page: 1,
            page_size,
            issued_seq: 0,
            last_page_len: None,
            last_error: None,
        }
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn status_filter(&self) -> Option<Status> {
        self.status_filter
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn last_error(&self) -> Option<&Failure> {
        self.last_error.as_ref()
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            status_filter: self.status_filter,
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// A full page was last applied, so more rows likely exist.
    pub fn has_next_page(&self) -> bool {
        self.last_page_len == Some(self.page_size as usize)
    }

    /// Changing the filter resets to page 1 and issues exactly one fetch.
    pub fn set_status_filter(&mut self, filter: Option<Status>) -> Fetch {
        self.status_filter = filter;
        self.page = 1;
        self.refetch()
    }

    /// No-op unless the last applied page was exactly full.
    pub fn next_page(&mut self) -> Option<Fetch> {
        if !self.has_next_page() {
            return None;
        }
        self.page += 1;
        Some(self.refetch())
    }

    /// No-op on page 1.
    pub fn prev_page(&mut self) -> Option<Fetch> {
        if self.page <= 1 {
            return None;
        }
        self.page -= 1;
        Some(self.refetch())
    }

    pub fn refetch(&mut self) -> Fetch {
        self.issued_seq += 1;
        Fetch {
            seq: self.issued_seq,
            query: self.query(),
        }
    }

    /// Applies a fetch response. Returns false and changes nothing when `seq`
    /// is not the latest issued fetch (a stale, out-of-order arrival). On
    /// failure the previously displayed rows stay untouched.
    pub fn apply(&mut self, seq: u64, result: Result<Vec<Incident>, RequestError>) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        match result {
            Ok(rows) => {
                self.last_page_len = Some(rows.len());
                self.incidents = rows;
                self.last_error = None;
            }
            Err(err) => {
                self.last_error = Some(Failure::Fetch(err));
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incident::Priority;

    fn incident(id: i64) -> Incident {
        Incident {
            id,
            title: format!("incident {id}"),
            description: Some("details".into()),
            status: Status::Open,
            priority: Priority::Medium,
            created_at: format!("{id:010}"),
            updated_at: None,
        }
    }

    fn full_page(page_size: u32) -> Vec<Incident> {
        (0..page_size as i64).map(incident).collect()
    }

    #[test]
    fn query_params_include_status_only_when_filtered() {
        let query = ListQuery {
            status_filter: None,
            page: 3,
            page_size: 10,
        };
        assert_eq!(
            query.params(),
            vec![
                ("sort_by", "created_at".to_string()),
                ("skip", "20".to_string()),
                ("limit", "10".to_string()),
            ]
        );

        let filtered = ListQuery {
            status_filter: Some(Status::InProgress),
            ..query
        };
        assert!(filtered
            .params()
            .contains(&("status", "In_Progress".to_string())));
    }

    #[test]
    fn filter_change_resets_page_and_issues_one_fetch() {
        let mut state = ListState::new(10);
        state.refetch();
        state.apply(1, Ok(full_page(10)));
        state.next_page().expect("full page allows next");
        state.apply(2, Ok(full_page(10)));
        assert_eq!(state.page(), 2);

        let fetch = state.set_status_filter(Some(Status::Resolved));
        assert_eq!(state.page(), 1);
        assert_eq!(fetch.query.page, 1);
        assert_eq!(fetch.query.status_filter, Some(Status::Resolved));
        // Exactly one fetch issued: the sequence advanced by one.
        assert_eq!(fetch.seq, 3);

        let again = state.set_status_filter(None);
        assert_eq!(again.seq, 4);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn next_page_is_noop_after_short_page() {
        let mut state = ListState::new(10);
        state.refetch();
        state.apply(1, Ok(full_page(10)[..4].to_vec()));

        assert_eq!(state.next_page(), None);
        assert_eq!(state.page(), 1);

        // And before any page has been applied at all.
        let mut fresh = ListState::new(10);
        assert_eq!(fresh.next_page(), None);
    }

    #[test]
    fn prev_page_is_noop_on_first_page() {
        let mut state = ListState::new(10);
        assert_eq!(state.prev_page(), None);

        state.refetch();
        state.apply(1, Ok(full_page(10)));
        state.next_page().expect("next");
        state.apply(2, Ok(full_page(10)));

        let fetch = state.prev_page().expect("prev from page 2");
        assert_eq!(fetch.query.page, 1);
        assert_eq!(state.prev_page(), None);
    }

    #[test]
    fn failed_fetch_keeps_previous_rows_and_records_failure() {
        let mut state = ListState::new(10);
        state.refetch();
        state.apply(1, Ok(vec![incident(1)]));

        state.refetch();
        state.apply(2, Err(RequestError::http(500, "boom")));

        assert_eq!(state.incidents().len(), 1);
        let failure = state.last_error().expect("failure recorded");
        assert_eq!(failure.request_error().status, Some(500));

        // The next successful fetch clears it.
        state.refetch();
        state.apply(3, Ok(Vec::new()));
        assert!(state.last_error().is_none());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = ListState::new(10);
        let first = state.refetch();
        let second = state.set_status_filter(Some(Status::Open));

        // The newer fetch answers first.
        assert!(state.apply(second.seq, Ok(vec![incident(2)])));
        // The older one arrives late and must not overwrite.
        assert!(!state.apply(first.seq, Ok(vec![incident(1)])));

        assert_eq!(state.incidents().len(), 1);
        assert_eq!(state.incidents()[0].id, 2);
    }

    #[test]
    fn stale_order_arrival_still_applies_latest() {
        let mut state = ListState::new(10);
        let first = state.refetch();
        let second = state.refetch();

        // Old response first, then the current one.
        assert!(!state.apply(first.seq, Ok(vec![incident(1)])));
        assert!(state.apply(second.seq, Ok(vec![incident(2)])));
        assert_eq!(state.incidents()[0].id, 2);
    }
}
