use super::alert::{Alert, AlertStatus};

/// Number of alerts requested per page
pub const PAGE_SIZE: u32 = 10;

/// View state for the alert dashboard: the active status filter, the
/// 1-indexed page, and the last page of alerts fetched from the backend.
///
/// The state also carries a fetch generation. Every fetch is tagged with the
/// generation current at the time it started; a response is applied only if
/// no newer fetch has started since, so a slow stale response cannot
/// overwrite a fresher page.
#[derive(Debug, Clone)]
pub struct AlertListState {
    pub status_filter: Option<AlertStatus>,
    page: u32,
    pub alerts: Vec<Alert>,
    generation: u64,
}

impl Default for AlertListState {
    fn default() -> Self {
        Self {
            status_filter: None,
            page: 1,
            alerts: Vec::new(),
            generation: 0,
        }
    }
}

impl AlertListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current 1-indexed page
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Offset sent to the backend: skip = (page - 1) * PAGE_SIZE
    pub fn offset(&self) -> u32 {
        (self.page - 1) * PAGE_SIZE
    }

    /// Whether a "Previous" control should be offered. There is no matching
    /// bound for "Next": the backend exposes no total count, so paging past
    /// the last page just yields an empty list.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Switch the status filter. The page is intentionally left untouched:
    /// the original client behaves this way, so switching filters on page 3
    /// keeps requesting offset 20 under the new filter.
    pub fn set_filter(&mut self, filter: Option<AlertStatus>) {
        self.status_filter = filter;
    }

    /// Mark the start of a fetch and return its generation tag. Any fetch
    /// started earlier becomes stale from this point on.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Replace the page wholesale with a fetch result. Returns false (and
    /// leaves the state untouched) when the result is stale.
    pub fn apply(&mut self, generation: u64, alerts: Vec<Alert>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.alerts = alerts;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn alert(id: i64, coin_id: &str) -> Alert {
        Alert {
            id,
            coin_id: coin_id.to_string(),
            target_price: 100.0,
            status: AlertStatus::Created,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_offset_arithmetic() {
        let mut list = AlertListState::new();
        assert_eq!(list.offset(), 0);
        list.next_page();
        assert_eq!(list.offset(), 10);
        list.next_page();
        assert_eq!(list.offset(), 20);
    }

    #[test]
    fn test_prev_unavailable_on_first_page() {
        let mut list = AlertListState::new();
        assert!(!list.has_prev());
        list.prev_page();
        assert_eq!(list.page(), 1);
        list.next_page();
        assert!(list.has_prev());
        list.prev_page();
        assert!(!list.has_prev());
    }

    #[test]
    fn test_next_has_no_upper_bound() {
        let mut list = AlertListState::new();
        for _ in 0..100 {
            list.next_page();
        }
        assert_eq!(list.page(), 101);
    }

    #[test]
    fn test_filter_change_keeps_page() {
        let mut list = AlertListState::new();
        list.next_page();
        list.next_page();
        list.set_filter(Some(AlertStatus::Triggered));
        assert_eq!(list.page(), 3);
        assert_eq!(list.offset(), 20);
    }

    #[test]
    fn test_apply_replaces_page_wholesale() {
        let mut list = AlertListState::new();
        let generation = list.begin_fetch();
        assert!(list.apply(generation, vec![alert(1, "bitcoin"), alert(2, "solana")]));
        assert_eq!(list.alerts.len(), 2);

        let generation = list.begin_fetch();
        assert!(list.apply(generation, vec![alert(3, "ethereum")]));
        assert_eq!(list.alerts.len(), 1);
        assert_eq!(list.alerts[0].id, 3);
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut list = AlertListState::new();
        let slow = list.begin_fetch();
        let fast = list.begin_fetch();

        // The newer fetch resolves first.
        assert!(list.apply(fast, vec![alert(2, "solana")]));
        // The older one resolves late and must not overwrite it.
        assert!(!list.apply(slow, vec![alert(1, "bitcoin")]));
        assert_eq!(list.alerts[0].id, 2);
    }
}
