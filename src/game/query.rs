use super::Session;

/// Action availability for the acting player, computed from a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BettingView {
    /// Whether checking is available.
    pub can_check: bool,
    /// Whether calling is available.
    pub can_call: bool,
    /// Whether raising is available.
    pub can_raise: bool,
    /// Chips needed to call.
    pub call_amount: usize,
    /// Smallest suggested raise target.
    pub min_raise: usize,
    /// Largest raise target the player can afford.
    pub max_raise: usize,
}

impl Session {
    /// Chips the acting player needs to match the table bet.
    #[must_use]
    pub fn call_amount(&self) -> usize {
        self.acting_player()
            .map_or(0, |player| self.current_bet.saturating_sub(player.current_bet))
    }

    /// Returns whether the acting player may check.
    #[must_use]
    pub fn can_check(&self) -> bool {
        self.current_bet == 0
            || self
                .acting_player()
                .is_some_and(|player| player.current_bet == self.current_bet)
    }

    /// Returns whether the acting player may call.
    #[must_use]
    pub fn can_call(&self) -> bool {
        self.current_bet > 0
            && self
                .acting_player()
                .is_some_and(|player| player.current_bet < self.current_bet)
    }

    /// Returns whether the acting player may raise.
    #[must_use]
    pub fn can_raise(&self) -> bool {
        self.acting_player().is_some_and(|player| player.chips > 0)
    }

    /// Smallest suggested raise target for the given raise step.
    #[must_use]
    pub const fn min_raise(&self, increment: usize) -> usize {
        let target = self.current_bet + increment;
        if target > increment { target } else { increment }
    }

    /// Largest raise target the acting player can afford, or 0 without one.
    #[must_use]
    pub fn max_raise(&self) -> usize {
        self.acting_player().map_or(0, |player| player.chips)
    }

    /// Collects every derived betting value into one snapshot.
    #[must_use]
    pub fn betting_view(&self, increment: usize) -> BettingView {
        BettingView {
            can_check: self.can_check(),
            can_call: self.can_call(),
            can_raise: self.can_raise(),
            call_amount: self.call_amount(),
            min_raise: self.min_raise(increment),
            max_raise: self.max_raise(),
        }
    }
}
