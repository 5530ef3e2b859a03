use serde::Serialize;

use super::group::HandGroup;
use super::interpretation::{HandInterpretation, WaitType};
use super::interpreter::INTERPRETERS;
use crate::model::*;
use crate::util::common::tiles_to_tile_table;

// 手牌の評価結果
// 手牌が変化した場合は再度assessを呼び出すこと (差分更新は行わない)
#[derive(Debug, Clone, Serialize)]
pub struct HandAssessment {
    pub counts: TileTable,     // 鳴きを含むすべての牌の枚数
    pub suits: [bool; TYPE],   // 牌種別ごとの有無
    pub has_terminal: bool,    // 1,9牌を含む
    pub has_honor: bool,       // 字牌を含む
    pub is_open: bool,         // 副露の有無 (暗槓は含まない)
    pub interpretations: Vec<HandInterpretation>,
}

impl HandAssessment {
    // すべての解釈の和了牌 (ソート済み,重複なし)
    pub fn waits(&self) -> Vec<Tile> {
        let mut res: Vec<Tile> = self
            .interpretations
            .iter()
            .flat_map(|ip| ip.waits.iter().copied())
            .collect();
        res.sort();
        res.dedup();
        res
    }

    #[inline]
    pub fn is_tenpai(&self) -> bool {
        self.interpretations.iter().any(|ip| !ip.waits.is_empty())
    }

    // 牌の種類が手牌(鳴きを含む)に存在する
    #[inline]
    pub fn has_tile(&self, tile: Tile) -> bool {
        self.counts[tile.0][tile.n()] > 0
    }

    // tileを和了牌とする解釈
    pub fn interpretations_waiting_on(
        &self,
        tile: Tile,
    ) -> impl Iterator<Item = &HandInterpretation> + '_ {
        self.interpretations
            .iter()
            .filter(move |ip| ip.is_waiting_on(tile))
    }
}

pub fn assess(hand: &Hand) -> HandAssessment {
    let all = hand.all_tiles();
    let counts = tiles_to_tile_table(&all);

    let mut suits = [false; TYPE];
    for t in &all {
        suits[t.0] = true;
    }

    let fixed: Vec<HandGroup> = hand.melds().iter().map(HandGroup::from_meld).collect();
    let mut interpretations = vec![];
    for interpreter in INTERPRETERS {
        interpretations.extend(interpreter.interpret(&fixed, hand.tiles()));
    }

    // 4枚とも手牌(鳴きを含む)にある牌は和了牌にならない
    for ip in &mut interpretations {
        ip.waits.retain(|t| counts[t.0][t.n()] < TILE);
        if ip.waits.is_empty() {
            ip.wait_type = WaitType::None;
        }
    }

    HandAssessment {
        counts,
        suits,
        has_terminal: all.iter().any(|t| t.is_terminal()),
        has_honor: suits[TZ],
        is_open: hand.is_open(),
        interpretations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::string::{meld_from_string, tiles_from_string};

    fn hand(exp: &str, melds: &[&str]) -> Hand {
        let melds = melds.iter().map(|m| meld_from_string(m).unwrap()).collect();
        Hand::new(tiles_from_string(exp).unwrap(), melds)
    }

    #[test]
    fn test_assess() {
        let a = assess(&hand("m234p456s06z11", &["z5+55"]));
        assert!(a.is_open);
        assert!(a.has_honor);
        assert!(!a.has_terminal);
        assert_eq!(a.suits, [true, true, true, true]);
        assert_eq!(a.counts[TS][5], 1);
        assert_eq!(a.counts[TS][0], 1);
        assert!(a.has_tile(Tile(TZ, DW)));
        assert!(!a.has_tile(Tile(TM, 9)));
        assert_eq!(a.waits(), vec![Tile(TS, 4), Tile(TS, 7)]);
        assert!(a.is_tenpai());
        assert!(a
            .interpretations
            .iter()
            .all(|ip| ip.groups.first().map_or(false, |g| g.is_open)));
    }

    #[test]
    fn test_assess_waits_union() {
        // 七対子と二盃口形の両方で単騎待ち
        let a = assess(&hand("m112233p445566z7", &[]));
        assert_eq!(a.waits(), vec![Tile(TZ, DR)]);
        assert_eq!(a.interpretations_waiting_on(Tile(TZ, DR)).count(), 2);

        let a = assess(&hand("m147p258s369z1234", &[]));
        assert!(!a.is_tenpai());
        assert!(a.waits().is_empty());
        assert!(!a.interpretations.is_empty());
    }

    #[test]
    fn test_assess_exhausted_wait() {
        // m2の4枚使いの単騎, 双碰は待ちにならない
        let a = assess(&hand("m2222p123s456z111", &[]));
        assert!(!a.is_tenpai());
        assert!(a.waits().is_empty());
        assert!(a
            .interpretations
            .iter()
            .all(|ip| ip.wait_type == WaitType::None));

        let a = assess(&hand("m2222m3p123s456z11", &[]));
        let waits = a.waits();
        assert!(!waits.contains(&Tile(TM, 2)));
        assert!(waits.contains(&Tile(TM, 1)));
        assert!(waits.contains(&Tile(TM, 4)));

        // 鳴きの牌も数える
        let a = assess(&hand("m2p123s456z111", &["m2+22"]));
        assert!(!a.is_tenpai());
    }
}
