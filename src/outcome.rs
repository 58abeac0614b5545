use crate::round::RoundState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_finished(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// Where the round stands. Won is checked before lost.
pub fn evaluate(state: &RoundState) -> Outcome {
    if state.is_won() {
        Outcome::Won
    } else if state.is_lost() {
        Outcome::Lost
    } else {
        Outcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_round_continues() {
        let state = RoundState::new("owl", 6).unwrap();
        assert_eq!(evaluate(&state), Outcome::Continue);
        assert!(!evaluate(&state).is_finished());
    }

    #[test]
    fn test_won_takes_precedence() {
        let mut state = RoundState::new("o", 1).unwrap();
        state.record_letter('o');
        state.lose_life();
        assert_eq!(evaluate(&state), Outcome::Won);
    }

    #[test]
    fn test_lost_when_out_of_lives() {
        let mut state = RoundState::new("owl", 1).unwrap();
        state.record_letter('z');
        state.lose_life();
        assert_eq!(evaluate(&state), Outcome::Lost);
        assert!(Outcome::Lost.is_finished());
    }
}
