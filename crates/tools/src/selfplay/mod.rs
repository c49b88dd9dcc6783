pub mod game;
pub mod player;
pub mod settings;

pub use game::{Game, GameConfig, GameOutcome, GameResult, TurnEvent, TurnRecord, run_game};
pub use player::{EnginePlayer, HumanPlayer, Player, PlayerAction, TurnChoice};
pub use settings::{BotSettings, GameSettings, Settings};
