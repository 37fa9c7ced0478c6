/// Tracks which teaser request the open modal is waiting for.
/// A response whose ticket is no longer current is dropped.
#[derive(Debug, Default)]
pub struct TeaserTicket {
    current: u64,
    open: bool,
}

impl TeaserTicket {
    /// Start a request for a newly opened star; older tickets go stale.
    pub fn issue(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.open = true;
        self.current
    }

    /// Modal closed: nothing is awaited any more.
    pub fn invalidate(&mut self) {
        self.current = self.current.wrapping_add(1);
        self.open = false;
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.open && ticket == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_makes_pending_response_stale() {
        let mut t = TeaserTicket::default();
        let first = t.issue();
        assert!(t.is_current(first));
        t.invalidate();
        assert!(!t.is_current(first));
    }

    #[test]
    fn reopen_drops_previous_response() {
        let mut t = TeaserTicket::default();
        let first = t.issue();
        let second = t.issue();
        assert!(!t.is_current(first));
        assert!(t.is_current(second));
    }

    #[test]
    fn reopen_after_close_ignores_response_from_before_close() {
        let mut t = TeaserTicket::default();
        let before = t.issue();
        t.invalidate();
        let after = t.issue();
        assert!(!t.is_current(before));
        assert!(t.is_current(after));
    }

    #[test]
    fn nothing_is_current_before_first_issue() {
        let t = TeaserTicket::default();
        assert!(!t.is_current(0));
    }
}
