use super::*;

// 和了牌の取得方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinType {
    Tsumo,   // 自摸
    Ron,     // 栄和 (打牌)
    Rinshan, // 嶺上牌の自摸
    Chankan, // 加槓の牌の栄和
}

impl WinType {
    #[inline]
    pub fn is_self_drawn(self) -> bool {
        matches!(self, WinType::Tsumo | WinType::Rinshan)
    }
}

// 局の情報
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundContext {
    pub prevalent_wind: Tnum, // 場風 (東: 1, 南: 2, 西: 3, 北: 4)
    pub wall_count: usize,    // ツモ山の残り枚数 (海底, 河底の判定)
    pub has_calls: bool,      // この局で鳴きが発生したかどうか (天和, 地和の判定)
    pub doras: Vec<Tile>,     // ドラ表示牌 (注:ドラそのものではない)
    pub ura_doras: Vec<Tile>, // 裏ドラ表示牌
}

impl Default for RoundContext {
    fn default() -> Self {
        Self {
            prevalent_wind: WE,
            wall_count: 70,
            has_calls: false,
            doras: vec![],
            ura_doras: vec![],
        }
    }
}

// 和了者の情報
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatContext {
    pub seat_wind: Tnum,     // 自風 (同上)
    pub is_riichi: bool,     // 立直
    pub is_daburii: bool,    // ダブル立直
    pub is_ippatsu: bool,    // 一発の権利あり
    pub is_first_draw: bool, // 第一ツモ (天和, 地和の判定)
}

impl SeatContext {
    #[inline]
    pub fn is_dealer(&self) -> bool {
        self.seat_wind == WE
    }
}

impl Default for SeatContext {
    fn default() -> Self {
        Self {
            seat_wind: WE,
            is_riichi: false,
            is_daburii: false,
            is_ippatsu: false,
            is_first_draw: false,
        }
    }
}
