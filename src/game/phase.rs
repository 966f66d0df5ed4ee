//! 遊戲階段與結束狀態

use serde::{Deserialize, Serialize};

/// 遊戲階段
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// 接受一般玩家意圖
    InProgress,
    /// 方塊 K 能力啟動後，等待玩家決定底牌去向
    BottomCardChoice,
    /// 終局
    End(GameEnd),
}

/// 遊戲結束狀態
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnd {
    Win,
    Lose,
}

/// 對外回報的勝負狀態
///
/// 經典模式獲勝時附帶分數（剩餘能量牌庫張數）。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won { score: Option<usize> },
    Lost,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
