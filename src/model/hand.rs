use super::*;

// 手牌
// tiles(鳴き以外の牌)は常にソート済み. meldsは追加のみ.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
    melds: Vec<Meld>,
}

impl Hand {
    pub fn new(mut tiles: Vec<Tile>, melds: Vec<Meld>) -> Self {
        tiles.sort();
        Self { tiles, melds }
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    pub fn insert(&mut self, tile: Tile) {
        let pos = self.tiles.partition_point(|t| *t <= tile);
        self.tiles.insert(pos, tile);
    }

    // 赤5を区別して一致する牌を優先して削除. 見つからない場合はfalse
    pub fn remove(&mut self, tile: Tile) -> bool {
        let pos = self
            .tiles
            .iter()
            .position(|t| t.eq_strict(&tile))
            .or_else(|| self.tiles.iter().position(|t| *t == tile));
        match pos {
            Some(i) => {
                self.tiles.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn add_meld(&mut self, meld: Meld) {
        self.melds.push(meld);
    }

    pub fn is_open(&self) -> bool {
        self.melds.iter().any(|m| m.is_open())
    }

    // 鳴きを含むすべての牌
    pub fn all_tiles(&self) -> Vec<Tile> {
        let mut res = self.tiles.clone();
        for m in &self.melds {
            res.extend(m.tiles.iter().copied());
        }
        res
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: Vec<String> = self.tiles.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", s.join(""))?;
        for m in &self.melds {
            write!(f, " {}", m)?;
        }
        Ok(())
    }
}

#[test]
fn test_hand_insert_remove() {
    let mut hand = Hand::new(vec![Tile(TP, 3), Tile(TM, 5), Tile(TM, 1)], vec![]);
    assert_eq!(hand.tiles(), &[Tile(TM, 1), Tile(TM, 5), Tile(TP, 3)]);

    hand.insert(Tile(TM, 0));
    hand.insert(Tile(TZ, WE));
    assert_eq!(hand.tiles().len(), 5);
    assert!(hand.tiles().windows(2).all(|w| w[0] <= w[1]));

    // 赤5が優先して削除される
    assert!(hand.remove(Tile(TM, 0)));
    assert!(hand.tiles().iter().all(|t| !t.is_red5()));
    assert!(hand.remove(Tile(TM, 5)));
    assert!(!hand.remove(Tile(TM, 5)));
}

#[test]
fn test_hand_open() {
    let mut hand = Hand::new(vec![Tile(TM, 1)], vec![]);
    hand.add_meld(Meld::new(MeldType::Ankan, vec![Tile(TZ, DW); 4]));
    assert!(!hand.is_open());
    hand.add_meld(Meld::new(MeldType::Pon, vec![Tile(TZ, DG); 3]));
    assert!(hand.is_open());
    assert_eq!(hand.all_tiles().len(), 8);
}
