use dartrs::{
    GameState, Match, MatchOptions, Redo, Ring, RosterEntry, ScoreEvent, Standing, ThrowResult,
    Turn, TurnStatus, Undo,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmMatch {
    game: Match,
}

#[wasm_bindgen]
impl WasmMatch {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Match::new(MatchOptions::default(), seed as u64),
        }
    }

    pub fn start_game(&self, names: Vec<String>, starting_score: u32) -> Result<(), JsValue> {
        let roster: Vec<RosterEntry> = names.into_iter().map(RosterEntry::new).collect();
        self.game
            .start_game(&roster, starting_score)
            .map_err(js_err)
    }

    pub fn tap(
        &self,
        x: f64,
        y: f64,
        center_x: f64,
        center_y: f64,
        board_radius: f64,
        now: f64,
    ) -> Result<JsValue, JsValue> {
        let (event, result) = self
            .game
            .tap(x, y, center_x, center_y, board_radius, now as u64)
            .map_err(js_err)?;
        to_js_value(&JsThrowResult::new(&event, result))
    }

    pub fn throw_shorthand(&self, shorthand: &str, now: f64) -> Result<JsValue, JsValue> {
        let event = ScoreEvent::parse(shorthand, now as u64).map_err(js_err)?;
        let result = self.game.add_throw(event).map_err(js_err)?;
        to_js_value(&JsThrowResult::new(&event, result))
    }

    pub fn undo(&self) -> &'static str {
        match self.game.undo() {
            Undo::Nothing => "Nothing",
            Undo::Throw(_) => "Throw",
            Undo::Turn { .. } => "Turn",
        }
    }

    pub fn redo(&self) -> bool {
        !matches!(self.game.redo(), Redo::Nothing)
    }

    pub fn reset(&self) {
        self.game.reset();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.game.snapshot();
        to_js_value(&Snapshot::from_state(&state, &self.game))
    }
}

#[derive(Serialize)]
struct Snapshot {
    players: Vec<JsPlayer>,
    current_player: Option<u32>,
    open_turn: Option<JsTurn>,
    closed_turns: Vec<JsTurn>,
    redo_count: u32,
    can_undo: bool,
    game_over: bool,
}

impl Snapshot {
    fn from_state(state: &GameState, game: &Match) -> Self {
        Self {
            players: state.standings.iter().map(JsPlayer::from).collect(),
            current_player: state.current_player.map(|index| index as u32),
            open_turn: state.open_turn.as_ref().map(JsTurn::from),
            closed_turns: state.closed_turns.iter().map(JsTurn::from).collect(),
            redo_count: state.redo_turns.len() as u32,
            can_undo: game.can_undo(),
            game_over: state.game_over,
        }
    }
}

#[derive(Serialize)]
struct JsPlayer {
    id: String,
    name: String,
    starting_score: u32,
    remaining: i64,
    active: bool,
}

impl From<&Standing> for JsPlayer {
    fn from(standing: &Standing) -> Self {
        Self {
            id: standing.player.id.clone(),
            name: standing.player.name.clone(),
            starting_score: standing.player.starting_score,
            remaining: standing.remaining,
            active: standing.player.active,
        }
    }
}

#[derive(Serialize)]
struct JsTurn {
    player: u32,
    throws: Vec<JsScore>,
    status: &'static str,
    subtotal: u32,
    remaining_after: Option<u32>,
}

impl From<&Turn> for JsTurn {
    fn from(turn: &Turn) -> Self {
        Self {
            player: turn.player() as u32,
            throws: turn
                .throws()
                .iter()
                .map(|throw| JsScore::from(&throw.event))
                .collect(),
            status: status_to_str(turn.status()),
            subtotal: turn.subtotal(),
            remaining_after: turn.remaining_after(),
        }
    }
}

#[derive(Serialize)]
struct JsScore {
    label: String,
    ring: &'static str,
    sector: Option<u8>,
    multiplier: u8,
    total: u32,
}

impl From<&ScoreEvent> for JsScore {
    fn from(event: &ScoreEvent) -> Self {
        Self {
            label: event.shorthand(),
            ring: ring_to_str(event.ring),
            sector: event.sector,
            multiplier: event.multiplier,
            total: event.total,
        }
    }
}

#[derive(Serialize)]
struct JsThrowResult {
    score: JsScore,
    player: u32,
    throw_index: u32,
    status: &'static str,
    remaining: u32,
    game_over: bool,
}

impl JsThrowResult {
    fn new(event: &ScoreEvent, result: ThrowResult) -> Self {
        Self {
            score: JsScore::from(event),
            player: result.player as u32,
            throw_index: result.throw_index as u32,
            status: status_to_str(result.status),
            remaining: result.remaining,
            game_over: result.game_over,
        }
    }
}

fn status_to_str(status: TurnStatus) -> &'static str {
    match status {
        TurnStatus::Open => "Open",
        TurnStatus::Complete => "Complete",
        TurnStatus::Bust => "Bust",
        TurnStatus::Win => "Win",
    }
}

fn ring_to_str(ring: Ring) -> &'static str {
    match ring {
        Ring::Miss => "Miss",
        Ring::SingleInner => "SingleInner",
        Ring::SingleOuter => "SingleOuter",
        Ring::Triple => "Triple",
        Ring::Double => "Double",
        Ring::OuterBull => "OuterBull",
        Ring::InnerBull => "InnerBull",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
