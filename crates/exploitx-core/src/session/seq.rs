use tokio_util::sync::CancellationToken;

/// Tag of one reconciliation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchId(pub u64);

#[derive(Debug, Default)]
pub struct FetchSeq {
    next: u64,
}

impl FetchSeq {
    pub fn next_id(&mut self) -> FetchId {
        let id = FetchId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// The fetch whose result may still be applied.
#[derive(Debug, Default, Clone)]
pub struct FetchState {
    pub active: Option<FetchId>,
    pub cancel: Option<CancellationToken>,
}

impl FetchState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, id: FetchId, cancel: CancellationToken) {
        self.active = Some(id);
        self.cancel = Some(cancel);
    }

    /// Clears the state if `id` is the active fetch. Returns whether it was.
    pub fn finish_if_active(&mut self, id: FetchId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
            self.cancel = None;
        }
        ok
    }

    /// Forgets the active fetch, returning its token so the caller can cancel it.
    pub fn take(&mut self) -> Option<CancellationToken> {
        self.active = None;
        self.cancel.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let mut seq = FetchSeq::default();
        assert_eq!(seq.next_id(), FetchId(0));
        assert_eq!(seq.next_id(), FetchId(1));
    }

    #[test]
    fn test_finish_only_matches_active() {
        let mut seq = FetchSeq::default();
        let mut state = FetchState::default();
        let old = seq.next_id();
        let new = seq.next_id();
        state.on_started(new, CancellationToken::new());

        assert!(!state.finish_if_active(old));
        assert!(state.is_running());
        assert!(state.finish_if_active(new));
        assert!(!state.is_running());
        assert!(!state.finish_if_active(new));
    }
}
