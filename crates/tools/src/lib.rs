//! チェッカーエンジンの対局ハーネス
//!
//! - `selfplay::settings`: 設定ファイル（JSON）の読み込み
//! - `selfplay::game`: 盤面・手番・履歴の管理と対局ループ
//! - `selfplay::player`: エンジン／人間（標準入力）のプレイヤー

pub mod selfplay;
