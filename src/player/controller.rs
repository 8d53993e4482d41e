use crate::core::{GameState, Label};

/// プレイヤー操作のtrait
pub trait PlayerController {
    /// 指し手を選ぶ。`None` は投了 (または指せる手がない)。
    fn choose_move(&self, state: &GameState) -> Option<Label>;
    fn name(&self) -> &str;
}
