//! 対局者
//!
//! エンジン（`SearchEngine`）と、標準入力から 1 手ずつ指す人間。

use std::io::{BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use draughts_core::movegen::piece_moves;
use draughts_core::{Move, SearchEngine, Square, Value};

use super::game::Game;

/// 1 手番分の選択
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnChoice {
    pub moves: Vec<Move>,
    pub score: Option<Value>,
    pub nodes: Option<u64>,
}

pub enum PlayerAction {
    Turn(TurnChoice),
    /// 直前の自分の手番まで戻す
    Undo,
    Quit,
}

pub trait Player {
    fn label(&self) -> &str;

    fn is_human(&self) -> bool {
        false
    }

    /// 手番側に合法手があるときだけ呼ばれる
    fn choose_turn(&mut self, game: &mut Game) -> Result<PlayerAction>;
}

/// 探索エンジン
pub struct EnginePlayer {
    label: String,
    engine: SearchEngine,
    delay: Duration,
}

impl EnginePlayer {
    pub fn new(label: impl Into<String>, engine: SearchEngine) -> Self {
        Self {
            label: label.into(),
            engine,
            delay: Duration::ZERO,
        }
    }

    /// 1 手番あたりの最小待ち時間（連続取りは 1 枚ごとに追加で待つ）
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Player for EnginePlayer {
    fn label(&self) -> &str {
        &self.label
    }

    fn choose_turn(&mut self, game: &mut Game) -> Result<PlayerAction> {
        let start = Instant::now();
        let side = game.side_to_move();
        let result = self
            .engine
            .search(game.board(), side)
            .with_context(|| format!("search failed for {side}"))?;

        let elapsed = start.elapsed();
        if !self.delay.is_zero() {
            thread::sleep(self.delay.saturating_sub(elapsed));
            for _ in 1..result.moves.len() {
                thread::sleep(self.delay);
            }
        }

        log::info!(
            "{} ({side}) turn {}: {} score={} nodes={} time={}ms",
            self.label,
            game.turn() + 1,
            result.moves.iter().map(Move::to_string).collect::<Vec<_>>().join(" "),
            result.score,
            result.nodes,
            elapsed.as_millis(),
        );
        if result.score.is_decisive() {
            let verdict = if result.score > Value::ZERO { "win" } else { "loss" };
            log::info!("{} ({side}) sees a forced {verdict}", self.label);
        }

        Ok(PlayerAction::Turn(TurnChoice {
            moves: result.moves,
            score: Some(result.score),
            nodes: Some(result.nodes),
        }))
    }
}

/// 標準入力などから 1 手ずつ読む人間
///
/// `c3-d4` / `c3:e5` 形式で 1 手ずつ入力する。連続取りの途中は続きの手を促す。
/// `undo` は手番開始時なら 1 手番戻し、連続取りの途中ならその手番をやり直す。
/// `quit` または入力の終わりで対局を中断する。
pub struct HumanPlayer<R, W> {
    label: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(label: impl Into<String>, input: R, output: W) -> Self {
        Self {
            label: label.into(),
            input,
            output,
        }
    }

    fn read_command(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}> ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

enum Input {
    Hop(Move),
    Undo,
    Quit,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// `legal` の中から 1 手を読む
    fn read_hop(&mut self, prompt: &str, legal: &[Move]) -> Result<Input> {
        loop {
            let Some(line) = self.read_command(prompt)? else {
                return Ok(Input::Quit);
            };
            match line.as_str() {
                "" => continue,
                "undo" => return Ok(Input::Undo),
                "quit" => return Ok(Input::Quit),
                _ => {}
            }
            match line.parse::<Move>() {
                Ok(mv) => {
                    if let Some(found) = legal.iter().find(|m| **m == mv) {
                        return Ok(Input::Hop(*found));
                    }
                    writeln!(self.output, "illegal move: {line}")?;
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
            let hint: Vec<String> = legal.iter().map(Move::to_string).collect();
            writeln!(self.output, "legal: {}", hint.join(" "))?;
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn label(&self) -> &str {
        &self.label
    }

    fn is_human(&self) -> bool {
        true
    }

    fn choose_turn(&mut self, game: &mut Game) -> Result<PlayerAction> {
        let side = game.side_to_move();
        'turn: loop {
            writeln!(self.output, "{}", game.board())?;
            let legal = game.legal_moves();
            let prompt = format!("{} ({side})", self.label);

            let first = match self.read_hop(&prompt, legal.as_slice())? {
                Input::Hop(mv) => mv,
                Input::Undo => return Ok(PlayerAction::Undo),
                Input::Quit => return Ok(PlayerAction::Quit),
            };
            let mut moves = vec![first];
            let mut board = game.board().with_move(first);
            let mut at: Square = first.to();

            while first.is_capture() {
                let next = piece_moves(&board, at);
                if !next.has_captures() {
                    break;
                }
                writeln!(self.output, "{board}")?;
                match self.read_hop(&format!("{prompt} continue from {at}"), next.as_slice())? {
                    Input::Hop(mv) => {
                        board = board.with_move(mv);
                        at = mv.to();
                        moves.push(mv);
                    }
                    Input::Undo => continue 'turn,
                    Input::Quit => return Ok(PlayerAction::Quit),
                }
            }

            return Ok(PlayerAction::Turn(TurnChoice {
                moves,
                score: None,
                nodes: None,
            }));
        }
    }
}
