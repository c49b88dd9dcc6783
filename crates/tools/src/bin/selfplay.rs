use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use draughts_core::{Color, MoveGenerator, SearchEngine};
use serde::Serialize;
use tools::selfplay::{
    EnginePlayer, Game, GameConfig, GameOutcome, HumanPlayer, Player, Settings, TurnEvent,
    run_game,
};

/// チェッカーの対局ハーネス（エンジン同士、またはエンジンと人間）
///
/// # よく使うコマンド例
///
/// - エンジン同士で 10 局（深さ 4 と 6）:
///   `cargo run -p tools --bin selfplay -- --games 10 --white-depth 4 --black-depth 6 --out runs/selfplay.jsonl`
///
/// - 設定ファイルに従って人間と対局（`IsWhiteBot: false` の側を標準入力で指す）:
///   `cargo run -p tools --bin selfplay -- --settings settings.json`
///
#[derive(Parser, Debug)]
#[command(author, version, about = "draughts selfplay harness")]
struct Cli {
    /// Settings JSON (Bot / Game sections)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Number of games to run
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Maximum turns per game before declaring a draw (overrides Game.MaxNumTurns)
    #[arg(long)]
    max_turns: Option<u32>,

    /// Search depth for White, counting its own turn (overrides Bot.WhiteBotLevel = depth - 1)
    #[arg(long)]
    white_depth: Option<u32>,

    /// Search depth for Black, counting its own turn (overrides Bot.BlackBotLevel = depth - 1)
    #[arg(long)]
    black_depth: Option<u32>,

    /// Fixed seed for move ordering (overrides Bot.NoRandom)
    #[arg(long)]
    seed: Option<u64>,

    /// JSONL output path for turn and result logs
    #[arg(long)]
    out: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Serialize)]
struct TurnLog {
    #[serde(rename = "type")]
    kind: &'static str,
    game_id: u32,
    turn: u32,
    side: &'static str,
    player: String,
    board_before: [[u8; 8]; 8],
    moves: Vec<String>,
    elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes: Option<u64>,
}

#[derive(Serialize)]
struct ResultLog<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    game_id: u32,
    outcome: &'a str,
    reason: &'a str,
    turns: u32,
}

fn init_logger(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}

/// 設定ファイルとコマンドライン引数をまとめる
fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(depth) = cli.white_depth {
        settings.bot.white_bot_level =
            depth.checked_sub(1).context("--white-depth must be at least 1")?;
    }
    if let Some(depth) = cli.black_depth {
        settings.bot.black_bot_level =
            depth.checked_sub(1).context("--black-depth must be at least 1")?;
    }
    if let Some(max_turns) = cli.max_turns {
        settings.game.max_num_turns = max_turns;
    }
    Ok(settings)
}

fn make_player(
    settings: &Settings,
    color: Color,
    seed: Option<u64>,
) -> Result<Box<dyn Player>> {
    if !settings.is_bot(color) {
        let stdin = io::stdin().lock();
        return Ok(Box::new(HumanPlayer::new(format!("human-{color}"), stdin, io::stdout())));
    }
    let config = settings.search_config(color)?;
    let movegen = match seed {
        Some(seed) => MoveGenerator::new(seed),
        None => MoveGenerator::from_entropy(),
    };
    let engine = SearchEngine::new(config, movegen)
        .with_context(|| format!("failed to create engine for {color}"))?;
    let label = format!("depth{}-{color}", config.max_depth);
    Ok(Box::new(EnginePlayer::new(label, engine).with_delay(settings.bot_delay())))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let settings = resolve_settings(&cli)?;
    let base_seed = cli.seed.or(settings.fixed_seed());
    let config = GameConfig {
        max_turns: settings.game.max_num_turns,
    };

    let mut writer = match &cli.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
            }
            Some(BufWriter::new(
                File::create(path).with_context(|| format!("failed to open {}", path.display()))?,
            ))
        }
        None => None,
    };

    let (mut white_wins, mut black_wins, mut draws) = (0u32, 0u32, 0u32);
    for game_idx in 0..cli.games {
        let game_id = game_idx + 1;
        let game_seed = base_seed.map(|s| s.wrapping_add(u64::from(game_idx) * 2));
        let mut white = make_player(&settings, Color::White, game_seed)?;
        let mut black = make_player(&settings, Color::Black, game_seed.map(|s| s.wrapping_add(1)))?;

        let mut game = Game::new();
        let mut on_turn = |event: &TurnEvent<'_>| -> Result<()> {
            let Some(w) = writer.as_mut() else {
                return Ok(());
            };
            let log = TurnLog {
                kind: "turn",
                game_id,
                turn: event.turn,
                side: event.side.label(),
                player: event.player.to_string(),
                board_before: event.board_before.to_codes(),
                moves: event.moves.iter().map(ToString::to_string).collect(),
                elapsed_ms: event.elapsed_ms,
                score: event.score.map(|v| v.raw()),
                nodes: event.nodes,
            };
            serde_json::to_writer(&mut *w, &log)?;
            w.write_all(b"\n")?;
            Ok(())
        };

        let result = run_game(&mut game, white.as_mut(), black.as_mut(), &config, &mut on_turn)?;
        match result.outcome {
            GameOutcome::WhiteWin => white_wins += 1,
            GameOutcome::BlackWin => black_wins += 1,
            GameOutcome::Draw => draws += 1,
            GameOutcome::InProgress => {}
        }
        log::info!(
            "game {game_id}: {} ({}) after {} turns",
            result.outcome.label(),
            result.reason,
            result.turns
        );
        println!("{}", game.board());

        if let Some(w) = writer.as_mut() {
            let log = ResultLog {
                kind: "result",
                game_id,
                outcome: result.outcome.label(),
                reason: result.reason,
                turns: result.turns,
            };
            serde_json::to_writer(&mut *w, &log)?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        if result.reason == "quit" {
            break;
        }
    }

    log::info!("white {white_wins} / black {black_wins} / draw {draws}");
    Ok(())
}
