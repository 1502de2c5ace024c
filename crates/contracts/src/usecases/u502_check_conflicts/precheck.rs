use crate::domain::a003_room_booking::BookingConflict;

/// Last-write-wins gate for the advisory pre-check.
///
/// Every triggered check takes a token from `begin`; a response is
/// accepted only while its token is still the newest one issued, so a
/// superseded in-flight check can never overwrite the result of a later
/// one, whatever order the responses arrive in.
///
/// The check is advisory: its conflicts drive room disabling in the
/// picker, but the bulk-submit response stays the single source of truth.
#[derive(Debug, Clone, Default)]
pub struct PrecheckState {
    generation: u64,
    conflicts: Vec<BookingConflict>,
}

impl PrecheckState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new check and return its token.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether this token still belongs to the newest check. Debounce
    /// timers use it to drop superseded work before it is even sent.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }

    /// Apply a response; returns whether it was current. Stale responses
    /// are dropped without touching the known conflicts.
    pub fn apply(&mut self, token: u64, conflicts: Vec<BookingConflict>) -> bool {
        if token != self.generation {
            return false;
        }
        self.conflicts = conflicts;
        true
    }

    /// Forget the known conflicts and invalidate any in-flight check.
    /// Used when the draft's inputs become incomplete.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.conflicts.clear();
    }

    pub fn conflicts(&self) -> &[BookingConflict] {
        &self.conflicts
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Whether the picker must refuse this room for the current draft.
    pub fn is_room_conflicted(&self, room_id: i32) -> bool {
        self.conflicts.iter().any(|c| c.room_id == room_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conflict(room_id: i32) -> BookingConflict {
        BookingConflict {
            room_id,
            date: None,
            start_time: None,
            end_time: None,
            message: "Room occupied".into(),
        }
    }

    #[test]
    fn stale_response_never_overwrites_newer_result() {
        let mut state = PrecheckState::new();
        let first = state.begin();
        let second = state.begin();

        // The newer check resolves first.
        assert!(state.apply(second, vec![conflict(7)]));
        // The superseded one arrives late and is dropped.
        assert!(!state.apply(first, Vec::new()));
        assert!(state.is_room_conflicted(7));
    }

    #[test]
    fn latest_inputs_win_regardless_of_edit_count() {
        let mut state = PrecheckState::new();
        let mut last = 0;
        for _ in 0..5 {
            last = state.begin();
        }
        assert!(state.apply(last, vec![conflict(3)]));
        assert_eq!(state.conflicts().len(), 1);
    }

    #[test]
    fn clear_empties_and_invalidates_in_flight() {
        let mut state = PrecheckState::new();
        let token = state.begin();
        state.clear();
        assert!(!state.apply(token, vec![conflict(4)]));
        assert!(!state.has_conflicts());
    }

    #[test]
    fn conflict_clears_when_a_later_check_returns_clean() {
        let mut state = PrecheckState::new();
        let token = state.begin();
        assert!(state.apply(token, vec![conflict(7)]));
        assert!(state.is_room_conflicted(7));

        // The user changed the time window; the next check comes back clean.
        let token = state.begin();
        assert!(state.apply(token, Vec::new()));
        assert!(!state.is_room_conflicted(7));
    }
}
