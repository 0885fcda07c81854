use super::board::Cell;

/// Which of the two seats a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        Cell::Occupied(self)
    }

    /// Player number as shown to humans (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

/// A player's identity and how it is displayed. Built once per game and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    token: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, token: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
            token: token.into(),
        }
    }

    /// The stock player for a seat: "Player 1" with a white disc, "Player 2"
    /// with a black one.
    pub fn default_for(id: PlayerId) -> Self {
        match id {
            PlayerId::One => Player::new(id, "Player 1", "\u{26aa}"),
            PlayerId::Two => Player::new(id, "Player 2", "\u{26ab}"),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
    }

    #[test]
    fn test_player_number() {
        assert_eq!(PlayerId::One.number(), 1);
        assert_eq!(PlayerId::Two.number(), 2);
    }

    #[test]
    fn test_default_players() {
        let one = Player::default_for(PlayerId::One);
        let two = Player::default_for(PlayerId::Two);
        assert_eq!(one.name(), "Player 1");
        assert_eq!(two.name(), "Player 2");
        assert_eq!(one.id(), PlayerId::One);
        assert_ne!(one.token(), two.token());
    }
}
