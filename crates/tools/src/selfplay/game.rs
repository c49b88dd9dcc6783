use std::time::Instant;

use anyhow::{Result, bail};
use draughts_core::movegen::piece_moves;
use draughts_core::{Board, Color, Move, MoveGenerator, MoveList, Value};

use super::player::{Player, PlayerAction};

/// ゲーム設定
pub struct GameConfig {
    /// この手番数に達したら引き分け
    pub max_turns: u32,
}

/// 対局の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    WhiteWin,
    BlackWin,
    Draw,
}

impl GameOutcome {
    pub fn label(self) -> &'static str {
        match self {
            GameOutcome::InProgress => "in_progress",
            GameOutcome::WhiteWin => "white_win",
            GameOutcome::BlackWin => "black_win",
            GameOutcome::Draw => "draw",
        }
    }

    /// `color` の勝ち
    pub fn win_for(color: Color) -> GameOutcome {
        match color {
            Color::White => GameOutcome::WhiteWin,
            Color::Black => GameOutcome::BlackWin,
        }
    }
}

/// 対局結果
#[derive(Debug, Clone)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub reason: &'static str,
    pub turns: u32,
}

/// 指し終えた 1 手番
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub side: Color,
    pub board_before: Board,
    pub moves: Vec<Move>,
}

/// 1 手番ごとに呼ばれるイベント
pub struct TurnEvent<'a> {
    /// 1 始まりの手番数
    pub turn: u32,
    pub side: Color,
    pub board_before: &'a Board,
    pub moves: &'a [Move],
    pub player: &'a str,
    pub elapsed_ms: u64,
    pub score: Option<Value>,
    pub nodes: Option<u64>,
}

/// 実際の盤面と手番・履歴
///
/// 盤面を変えるのは `apply_turn` と `rollback` だけ。
pub struct Game {
    board: Board,
    side: Color,
    history: Vec<TurnRecord>,
    movegen: MoveGenerator,
}

impl Game {
    /// 初期局面・白番から
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Color::White)
    }

    pub fn from_board(board: Board, side: Color) -> Self {
        Self {
            board,
            side,
            history: Vec::new(),
            movegen: MoveGenerator::new(0),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side
    }

    /// 指し終えた手番数
    pub fn turn(&self) -> u32 {
        self.history.len() as u32
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// 手番側の合法手（連続取りの 1 手目）
    pub fn legal_moves(&mut self) -> MoveList {
        self.movegen.moves_for(&self.board, self.side)
    }

    /// 1 手番分の手順を検証して適用し、手番を渡す
    ///
    /// 各手は合法手と照合し、取られる駒のマスを補った手順を履歴に残して返す。
    pub fn apply_turn(&mut self, moves: &[Move]) -> Result<&[Move]> {
        let Some(&first) = moves.first() else {
            bail!("empty turn for {}", self.side);
        };
        let Some(first) = self.legal_moves().find(&first) else {
            bail!("illegal move {first} for {}", self.side);
        };

        let mut board = self.board.with_move(first);
        let mut last = first;
        let mut applied = vec![first];
        for &mv in &moves[1..] {
            if !last.is_capture() || mv.from() != last.to() {
                bail!("{mv} does not continue the capture chain");
            }
            let list = piece_moves(&board, mv.from());
            let Some(hop) = list.find(&mv).filter(|m| m.is_capture()) else {
                bail!("illegal chain capture {mv}");
            };
            board = board.with_move(hop);
            last = hop;
            applied.push(hop);
        }
        if last.is_capture() && piece_moves(&board, last.to()).has_captures() {
            bail!("capture chain ending at {} is incomplete", last.to());
        }

        self.history.push(TurnRecord {
            side: self.side,
            board_before: self.board,
            moves: applied,
        });
        self.board = board;
        self.side = self.side.opponent();
        Ok(&self.history[self.history.len() - 1].moves)
    }

    /// 最後の 1 手番を取り消す。履歴が空なら false。
    pub fn rollback(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            return false;
        };
        self.board = record.board_before;
        self.side = record.side;
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// 1 局を実行する。
///
/// - 手番側に合法手がなければその側の負け
/// - `max_turns` 手番に達したら引き分け
/// - 人間の `undo` は直前の自分の手番まで戻す（相手がエンジンならその応手ごと）
/// - `on_turn`: 1 手番ごとに呼ばれるコールバック
pub fn run_game(
    game: &mut Game,
    white: &mut dyn Player,
    black: &mut dyn Player,
    config: &GameConfig,
    on_turn: &mut dyn FnMut(&TurnEvent<'_>) -> Result<()>,
) -> Result<GameResult> {
    loop {
        if game.turn() >= config.max_turns {
            return Ok(GameResult {
                outcome: GameOutcome::Draw,
                reason: "max_turns",
                turns: game.turn(),
            });
        }

        let side = game.side_to_move();
        if game.legal_moves().is_empty() {
            return Ok(GameResult {
                outcome: GameOutcome::win_for(side.opponent()),
                reason: "no_moves",
                turns: game.turn(),
            });
        }

        let opponent_is_human = match side {
            Color::White => black.is_human(),
            Color::Black => white.is_human(),
        };
        let player: &mut dyn Player = match side {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        let start = Instant::now();
        match player.choose_turn(game)? {
            PlayerAction::Turn(choice) => {
                let board_before = *game.board();
                let moves = game.apply_turn(&choice.moves)?.to_vec();
                let elapsed_ms = start.elapsed().as_millis().min(u128::from(u64::MAX)) as u64;
                on_turn(&TurnEvent {
                    turn: game.turn(),
                    side,
                    board_before: &board_before,
                    moves: &moves,
                    player: player.label(),
                    elapsed_ms,
                    score: choice.score,
                    nodes: choice.nodes,
                })?;
            }
            PlayerAction::Undo => {
                let count = if opponent_is_human { 1 } else { 2 };
                for _ in 0..count {
                    game.rollback();
                }
                log::info!(
                    "undo: back to turn {} ({} to move)",
                    game.turn() + 1,
                    game.side_to_move()
                );
            }
            PlayerAction::Quit => {
                return Ok(GameResult {
                    outcome: GameOutcome::InProgress,
                    reason: "quit",
                    turns: game.turn(),
                });
            }
        }
    }
}
