// Score card shown after a crash

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Medal {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Medal {
    pub fn for_score(score: u32) -> Self {
        match score {
            100.. => Medal::Platinum,
            25.. => Medal::Gold,
            5.. => Medal::Silver,
            _ => Medal::Bronze,
        }
    }

    pub fn display_text(&self) -> &str {
        match self {
            Medal::Bronze => "Bronze",
            Medal::Silver => "Silver",
            Medal::Gold => "Gold",
            Medal::Platinum => "Platinum",
        }
    }
}

pub struct GameOverState {
    pub score: u32,
    pub best: u32,
    pub new_best: bool,
    pub medal: Medal,
}

impl GameOverState {
    pub fn new(score: u32, best: u32, new_best: bool) -> Self {
        Self {
            score,
            best,
            new_best,
            medal: Medal::for_score(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medal_thresholds() {
        assert_eq!(Medal::for_score(0), Medal::Bronze);
        assert_eq!(Medal::for_score(4), Medal::Bronze);
        assert_eq!(Medal::for_score(5), Medal::Silver);
        assert_eq!(Medal::for_score(24), Medal::Silver);
        assert_eq!(Medal::for_score(25), Medal::Gold);
        assert_eq!(Medal::for_score(99), Medal::Gold);
        assert_eq!(Medal::for_score(100), Medal::Platinum);
        assert_eq!(Medal::for_score(u32::MAX), Medal::Platinum);
    }

    #[test]
    fn test_state_picks_medal_from_score() {
        let state = GameOverState::new(30, 42, false);
        assert_eq!(state.medal, Medal::Gold);
        assert_eq!(state.medal.display_text(), "Gold");
    }
}
