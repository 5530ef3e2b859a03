use serde::Serialize;

use super::group::{GroupType, HandGroup};
use super::rank::Rank;
use crate::model::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WaitType {
    None,    // 待ちなし
    Tanki,   // 単騎待ち
    Kanchan, // 嵌張待ち
    Penchan, // 辺張待ち
    Ryanmen, // 両面待ち
    Shanpon, // 双碰待ち
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HandShape {
    Normal,       // 4面子1雀頭
    Chiitoitsu,   // 七対子
    Kokushimusou, // 国士無双
}

// 手牌の解釈 (面子と雀頭への分解の一つ)
#[derive(Debug, Clone, Serialize)]
pub struct HandInterpretation {
    pub shape: HandShape,
    pub groups: Vec<HandGroup>, // 鳴きを含む面子, 雀頭
    pub ungrouped: Vec<Tile>,   // どの面子にも属さない牌
    pub wait_type: WaitType,
    pub waits: Vec<Tile>, // 和了牌の一覧
}

impl HandInterpretation {
    pub fn new(shape: HandShape, groups: Vec<HandGroup>) -> Self {
        Self {
            shape,
            groups,
            ungrouped: vec![],
            wait_type: WaitType::None,
            waits: vec![],
        }
    }

    pub fn rank(&self) -> Rank {
        let n_set = self.groups.iter().filter(|g| g.is_set()).count();
        let n_sequence = self.groups.iter().filter(|g| g.is_sequence()).count();
        Rank::new(n_set, n_sequence, self.pair().is_some())
    }

    pub fn pair(&self) -> Option<&HandGroup> {
        self.groups.iter().find(|g| g.is_pair())
    }

    #[inline]
    pub fn is_waiting_on(&self, tile: Tile) -> bool {
        self.waits.contains(&tile)
    }

    // 余り牌から待ちの形と和了牌を決定
    pub fn classify_wait(&mut self) {
        let (wait_type, waits) = calc_wait(&self.ungrouped);
        self.wait_type = wait_type;
        self.waits = waits;
    }

    // 面子構成と余り牌が同一 (探索順序のみが異なる解釈)
    pub fn is_same_shape(&self, other: &Self) -> bool {
        fn key(ip: &HandInterpretation) -> Vec<(GroupType, Tile)> {
            let mut k: Vec<(GroupType, Tile)> =
                ip.groups.iter().map(|g| (g.type_, g.tile())).collect();
            k.sort();
            k
        }
        self.shape == other.shape && self.ungrouped == other.ungrouped && key(self) == key(other)
    }

    // 和了牌を加えて完成した面子と雀頭の一覧を返却
    // 余り牌と和了牌を合わせた面子を末尾に追加する. ロンで完成した刻子は明刻扱い.
    pub fn complete(&self, winning_tile: Tile, is_self_drawn: bool) -> Vec<HandGroup> {
        assert!(
            self.is_waiting_on(winning_tile),
            "{} is not a winning tile of {:?}",
            winning_tile,
            self.waits
        );

        let mut groups = self.groups.clone();
        if self.shape == HandShape::Kokushimusou {
            return groups;
        }

        let mut tiles = self.ungrouped.clone();
        tiles.push(winning_tile);
        let g = match self.wait_type {
            WaitType::Tanki => HandGroup::new(GroupType::Pair, tiles, false),
            WaitType::Shanpon => HandGroup::new(GroupType::Koutsu, tiles, !is_self_drawn),
            WaitType::Kanchan | WaitType::Penchan | WaitType::Ryanmen => {
                HandGroup::new(GroupType::Shuntsu, tiles, false)
            }
            WaitType::None => unreachable!(),
        };
        groups.push(g);
        groups
    }
}

// 1枚または2枚の余り牌の待ちの形と和了牌を返却
pub fn calc_wait(tiles: &[Tile]) -> (WaitType, Vec<Tile>) {
    match *tiles {
        [t] => (WaitType::Tanki, vec![t.to_normal()]),
        [t0, t1] if t0 == t1 => (WaitType::Shanpon, vec![t0.to_normal()]),
        [t0, t1] if t0.is_suit() && t0.0 == t1.0 => {
            let (lo, hi) = if t0 < t1 { (t0, t1) } else { (t1, t0) };
            match hi.n() - lo.n() {
                1 => match (lo.offset(-1), hi.offset(1)) {
                    (Some(w0), Some(w1)) => (WaitType::Ryanmen, vec![w0, w1]),
                    (None, Some(w)) | (Some(w), None) => (WaitType::Penchan, vec![w]),
                    (None, None) => unreachable!(),
                },
                2 => (WaitType::Kanchan, lo.offset(1).into_iter().collect()),
                _ => (WaitType::None, vec![]),
            }
        }
        _ => (WaitType::None, vec![]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Tile {
        Tile::from_symbol(s).unwrap()
    }

    #[test]
    fn test_calc_wait() {
        assert_eq!(calc_wait(&[t("z5")]), (WaitType::Tanki, vec![t("z5")]));
        assert_eq!(calc_wait(&[t("p0")]), (WaitType::Tanki, vec![t("p5")]));
        assert_eq!(
            calc_wait(&[t("s3"), t("s3")]),
            (WaitType::Shanpon, vec![t("s3")])
        );
        assert_eq!(
            calc_wait(&[t("m4"), t("m5")]),
            (WaitType::Ryanmen, vec![t("m3"), t("m6")])
        );
        assert_eq!(
            calc_wait(&[t("m1"), t("m2")]),
            (WaitType::Penchan, vec![t("m3")])
        );
        assert_eq!(
            calc_wait(&[t("p8"), t("p9")]),
            (WaitType::Penchan, vec![t("p7")])
        );
        assert_eq!(
            calc_wait(&[t("s7"), t("s9")]),
            (WaitType::Kanchan, vec![t("s8")])
        );
        assert_eq!(calc_wait(&[t("s1"), t("s4")]).0, WaitType::None);
        assert_eq!(calc_wait(&[t("m1"), t("p2")]).0, WaitType::None);
        assert_eq!(calc_wait(&[t("z1"), t("z2")]).0, WaitType::None);
        assert_eq!(calc_wait(&[]).0, WaitType::None);
    }

    #[test]
    fn test_complete() {
        let mut ip = HandInterpretation::new(
            HandShape::Normal,
            vec![HandGroup::new(GroupType::Pair, vec![t("z1"), t("z1")], false)],
        );
        ip.ungrouped = vec![t("m6"), t("m6")];
        ip.classify_wait();

        let groups = ip.complete(t("m6"), false);
        let last = groups.last().unwrap();
        assert_eq!(last.type_, GroupType::Koutsu);
        assert!(last.is_open);

        let groups = ip.complete(t("m6"), true);
        assert!(!groups.last().unwrap().is_open);
    }

    #[test]
    #[should_panic]
    fn test_complete_not_waiting() {
        let mut ip = HandInterpretation::new(HandShape::Normal, vec![]);
        ip.ungrouped = vec![t("m2"), t("m3")];
        ip.classify_wait();
        ip.complete(t("m5"), true);
    }
}
