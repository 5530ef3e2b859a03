use serde::Serialize;

use crate::model::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum GroupType {
    Pair,    // 雀頭
    Shuntsu, // 順子
    Koutsu,  // 刻子
    Kantsu,  // 槓子
}

// 面子または雀頭
// 牌は昇順に格納. 刻子, 槓子, 雀頭はすべて同じ牌, 順子は同じ種別の連続した3枚の数牌.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandGroup {
    pub type_: GroupType,
    pub tiles: Vec<Tile>,
    pub is_open: bool,
}

impl HandGroup {
    pub fn new(type_: GroupType, mut tiles: Vec<Tile>, is_open: bool) -> Self {
        tiles.sort();
        let g = Self {
            type_,
            tiles,
            is_open,
        };
        debug_assert!(g.is_valid(), "invalid group: {:?}", g);
        g
    }

    pub fn from_meld(meld: &Meld) -> Self {
        let type_ = match meld.meld_type {
            MeldType::Chi => GroupType::Shuntsu,
            MeldType::Pon => GroupType::Koutsu,
            MeldType::Minkan | MeldType::Kakan | MeldType::Ankan => GroupType::Kantsu,
        };
        Self::new(type_, meld.tiles.clone(), meld.is_open())
    }

    pub fn is_valid(&self) -> bool {
        let ts = &self.tiles;
        match self.type_ {
            GroupType::Pair => ts.len() == 2 && ts[0] == ts[1],
            GroupType::Koutsu => ts.len() == 3 && ts.iter().all(|t| *t == ts[0]),
            GroupType::Kantsu => ts.len() == 4 && ts.iter().all(|t| *t == ts[0]),
            GroupType::Shuntsu => {
                ts.len() == 3
                    && ts[0].is_suit()
                    && ts[0].offset(1) == Some(ts[1])
                    && ts[0].offset(2) == Some(ts[2])
            }
        }
    }

    // 代表牌 (順子の場合は先頭の牌)
    #[inline]
    pub fn tile(&self) -> Tile {
        self.tiles[0]
    }

    // 刻子または槓子
    #[inline]
    pub fn is_set(&self) -> bool {
        matches!(self.type_, GroupType::Koutsu | GroupType::Kantsu)
    }

    #[inline]
    pub fn is_sequence(&self) -> bool {
        self.type_ == GroupType::Shuntsu
    }

    #[inline]
    pub fn is_pair(&self) -> bool {
        self.type_ == GroupType::Pair
    }

    // 么九牌を含む
    pub fn has_end(&self) -> bool {
        self.tiles.iter().any(|t| t.is_end())
    }

    // 1,9牌を含む
    pub fn has_terminal(&self) -> bool {
        self.tiles.iter().any(|t| t.is_terminal())
    }
}

impl std::fmt::Display for HandGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: Vec<String> = self.tiles.iter().map(|t| t.to_string()).collect();
        let open = if self.is_open { "+" } else { "" };
        write!(f, "{}{}", s.join(""), open)
    }
}
