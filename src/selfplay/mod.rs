use crate::core::PlayerId;
use crate::error::ConfigurationError;
use crate::game::Game;
use crate::logic::new_state;
use crate::player::StrategyKind;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    pub side_length: usize,
    pub player1: StrategyKind,
    pub player2: StrategyKind,
    /// Base seed for random strategies; game `i` uses `seed + i`.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub first_player: PlayerId,
    pub winner: Option<PlayerId>,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub p1_wins: usize,
    pub p2_wins: usize,
    pub draws: usize,
    /// 先手が勝った数
    pub first_player_wins: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub side_length: usize,
    pub player1: String,
    pub player2: String,
    /// 集計用のみ、出力しない
    #[serde(skip)]
    pub games: Vec<GameRecord>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameRecord) {
        self.total_games += 1;
        match result.winner {
            Some(PlayerId::Player1) => self.p1_wins += 1,
            Some(PlayerId::Player2) => self.p2_wins += 1,
            None => self.draws += 1,
        }
        if result.winner == Some(result.first_player) {
            self.first_player_wins += 1;
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }

    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        let wins = match player {
            PlayerId::Player1 => self.p1_wins,
            PlayerId::Player2 => self.p2_wins,
        };
        wins as f64 / self.total_games as f64
    }
}

/// Plays `num_games` games between two AI strategies in parallel.
/// Even-numbered games start with Player1, odd ones with Player2.
pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    if config.player1.is_human() || config.player2.is_human() {
        return Err(ConfigurationError::Invalid("self-play needs two AI strategies".into()).into());
    }
    // 盤サイズの検証を並列実行の前に済ませる
    new_state(config.side_length, PlayerId::Player1)?;

    tracing::info!(
        games = config.num_games,
        side = config.side_length,
        p1 = %config.player1,
        p2 = %config.player2,
        "starting self-play"
    );

    let records = (0..config.num_games)
        .into_par_iter()
        .map(|i| play_one(config, i))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut stats = SelfPlayStats::new();
    stats.side_length = config.side_length;
    stats.player1 = config.player1.to_string();
    stats.player2 = config.player2.to_string();
    for record in records {
        stats.add_result(record);
    }

    tracing::info!(
        p1_wins = stats.p1_wins,
        p2_wins = stats.p2_wins,
        draws = stats.draws,
        avg_moves = stats.avg_moves,
        "self-play finished"
    );
    Ok(stats)
}

fn play_one(config: &SelfPlayConfig, game_idx: usize) -> anyhow::Result<GameRecord> {
    let start_time = Instant::now();
    let first_player = if game_idx % 2 == 0 {
        PlayerId::Player1
    } else {
        PlayerId::Player2
    };

    // 乱数AIのシードはゲームごとにずらす (P2 はさらに別系列)
    let seed = config.seed.map(|s| s.wrapping_add(game_idx as u64));
    let p1 = config.player1.build("AI-P1", seed);
    let p2 = config
        .player2
        .build("AI-P2", seed.map(|s| s.wrapping_add(1 << 32)));

    let mut game = Game::new(new_state(config.side_length, first_player)?);
    game.show_board = false;
    let result = game.play(p1.as_ref(), p2.as_ref(), |player, mv, _| {
        tracing::trace!(game = game_idx, %player, %mv, "move");
    });

    let record = GameRecord {
        first_player,
        winner: result.winner,
        moves: result.moves,
        time_ms: start_time.elapsed().as_millis(),
    };
    tracing::info!(
        game = game_idx + 1,
        total = config.num_games,
        winner = ?record.winner,
        moves = record.moves,
        "game completed"
    );
    Ok(record)
}
