use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldType {
    Chi,
    Pon,
    Minkan,
    Kakan,
    Ankan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub meld_type: MeldType,
    pub tiles: Vec<Tile>,
}

impl Meld {
    pub fn new(meld_type: MeldType, mut tiles: Vec<Tile>) -> Self {
        tiles.sort();
        Self { meld_type, tiles }
    }

    // 暗槓以外は副露扱い
    #[inline]
    pub fn is_open(&self) -> bool {
        self.meld_type != MeldType::Ankan
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: Vec<String> = self.tiles.iter().map(|t| t.to_string()).collect();
        write!(f, "{:?}({})", self.meld_type, s.join("|"))
    }
}
