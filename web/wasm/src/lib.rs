use holdem_rs::{
    ActionKind, ActionOutcome, ActionReport, BettingView, Card, Game, Player, PotAward,
    RoundState, TableOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(TableOptions::default(), seed as u64),
        }
    }

    pub fn start_new_game(&mut self) -> Result<(), JsValue> {
        self.game.start_new_game().map_err(js_err)
    }

    pub fn reset_game(&mut self) {
        self.game.reset_game();
    }

    pub fn perform_action(
        &mut self,
        action: &str,
        amount: Option<u32>,
    ) -> Result<JsValue, JsValue> {
        let kind: ActionKind = action.parse().map_err(js_err)?;
        let report = self
            .game
            .perform_action(kind, amount.map(|value| value as usize))
            .map_err(js_err)?;
        to_js_value(&JsActionReport::from(report))
    }

    pub fn award_pot(&mut self, winner: u32) -> Result<JsValue, JsValue> {
        let winner = u8::try_from(winner).map_err(js_err)?;
        let award = self.game.award_pot(winner).map_err(js_err)?;
        to_js_value(&JsPotAward::from(award))
    }

    pub fn clamp_raise(&self, amount: u32) -> u32 {
        self.game.clamp_raise(amount as usize) as u32
    }

    pub fn is_human_turn(&self) -> bool {
        self.game.is_human_turn()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.game.round_state();
        let reveal = state == RoundState::Finished;

        let snapshot = Snapshot {
            state: state.as_str(),
            phase: self.game.phase().as_str(),
            pot: self.game.pot() as u32,
            current_bet: self.game.current_bet() as u32,
            current_player: self.game.current_player().map(u32::from),
            community_cards: self
                .game
                .community_cards()
                .iter()
                .copied()
                .map(card_to_js)
                .collect(),
            players: self
                .game
                .players()
                .iter()
                .map(|player| JsPlayer::from_player(player, reveal))
                .collect(),
            betting: JsBetting::from(self.game.betting_view()),
            is_human_turn: self.game.is_human_turn(),
            cards_remaining: self.game.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    phase: &'static str,
    pot: u32,
    current_bet: u32,
    current_player: Option<u32>,
    community_cards: Vec<JsCard>,
    players: Vec<JsPlayer>,
    betting: JsBetting,
    is_human_turn: bool,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsCard {
    rank: &'static str,
    suit: String,
    red: bool,
}

#[derive(Serialize)]
struct JsPlayer {
    id: u32,
    name: String,
    chips: u32,
    current_bet: u32,
    is_active: bool,
    has_folded: bool,
    hand: Vec<Option<JsCard>>,
    hands_won: u32,
    hands_lost: u32,
}

impl JsPlayer {
    fn from_player(player: &Player, reveal: bool) -> Self {
        let visible = reveal || player.is_human();
        Self {
            id: u32::from(player.id),
            name: player.name.clone(),
            chips: player.chips as u32,
            current_bet: player.current_bet as u32,
            is_active: player.is_active,
            has_folded: player.has_folded,
            hand: player
                .hand
                .iter()
                .map(|card| visible.then(|| card_to_js(*card)))
                .collect(),
            hands_won: player.hands_won,
            hands_lost: player.hands_lost,
        }
    }
}

#[derive(Serialize)]
struct JsBetting {
    can_check: bool,
    can_call: bool,
    can_raise: bool,
    call_amount: u32,
    min_raise: u32,
    max_raise: u32,
}

impl From<BettingView> for JsBetting {
    fn from(view: BettingView) -> Self {
        Self {
            can_check: view.can_check,
            can_call: view.can_call,
            can_raise: view.can_raise,
            call_amount: view.call_amount as u32,
            min_raise: view.min_raise as u32,
            max_raise: view.max_raise as u32,
        }
    }
}

#[derive(Serialize)]
struct JsActionReport {
    player_id: u32,
    action: &'static str,
    applied: bool,
    chips: u32,
    ignored_reason: Option<String>,
    next_player: Option<u32>,
    advanced_to: Option<&'static str>,
}

impl From<ActionReport> for JsActionReport {
    fn from(report: ActionReport) -> Self {
        let (chips, ignored_reason) = match report.outcome {
            ActionOutcome::Applied { chips } => (chips as u32, None),
            ActionOutcome::Ignored(reason) => (0, Some(reason.to_string())),
        };

        Self {
            player_id: u32::from(report.player_id),
            action: report.kind.as_str(),
            applied: report.is_applied(),
            chips,
            ignored_reason,
            next_player: report.next_player.map(u32::from),
            advanced_to: report.advanced_to.map(|phase| phase.as_str()),
        }
    }
}

#[derive(Serialize)]
struct JsPotAward {
    winner: u32,
    amount: u32,
}

impl From<PotAward> for JsPotAward {
    fn from(award: PotAward) -> Self {
        Self {
            winner: u32::from(award.winner),
            amount: award.amount as u32,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        rank: card.rank.label(),
        suit: card.suit.symbol().to_string(),
        red: card.suit.is_red(),
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
