use super::generate::generate;
use super::group::{GroupType, HandGroup};
use super::interpretation::{HandInterpretation, HandShape, WaitType};
use crate::model::*;

// 手牌の解釈方法
// 面子(鳴き)とソート済みの牌から解釈の一覧を返却. 該当する形が存在しない場合は空.
pub trait HandInterpreter {
    fn interpret(&self, fixed: &[HandGroup], tiles: &[Tile]) -> Vec<HandInterpretation>;
}

// 登録済みの解釈方法 (手牌評価ではこの順で実行)
pub static INTERPRETERS: &[&(dyn HandInterpreter + Sync)] = &[
    &NormalInterpreter,
    &ChiitoitsuInterpreter,
    &KokushimusouInterpreter,
];

// 4面子1雀頭
pub struct NormalInterpreter;

impl HandInterpreter for NormalInterpreter {
    fn interpret(&self, fixed: &[HandGroup], tiles: &[Tile]) -> Vec<HandInterpretation> {
        generate(fixed, tiles)
    }
}

// 七対子
// 同じ牌4枚を2つの対子とはみなさない
pub struct ChiitoitsuInterpreter;

impl HandInterpreter for ChiitoitsuInterpreter {
    fn interpret(&self, fixed: &[HandGroup], tiles: &[Tile]) -> Vec<HandInterpretation> {
        if !fixed.is_empty() || !(13..=14).contains(&tiles.len()) {
            return vec![];
        }

        let mut ip = HandInterpretation::new(HandShape::Chiitoitsu, vec![]);
        for run in tiles.chunk_by(|a, b| a == b) {
            match run.len() {
                1 => ip.ungrouped.push(run[0]),
                2 => ip
                    .groups
                    .push(HandGroup::new(GroupType::Pair, run.to_vec(), false)),
                _ => return vec![],
            }
        }

        match (ip.groups.len(), ip.ungrouped.len()) {
            (6, 1) => ip.classify_wait(),
            (7, 0) => {}
            _ => return vec![],
        }
        vec![ip]
    }
}

// 国士無双
pub struct KokushimusouInterpreter;

const ORPHANS: [Tile; 13] = [
    Tile(TM, 1),
    Tile(TM, 9),
    Tile(TP, 1),
    Tile(TP, 9),
    Tile(TS, 1),
    Tile(TS, 9),
    Tile(TZ, WE),
    Tile(TZ, WS),
    Tile(TZ, WW),
    Tile(TZ, WN),
    Tile(TZ, DW),
    Tile(TZ, DG),
    Tile(TZ, DR),
];

impl HandInterpreter for KokushimusouInterpreter {
    fn interpret(&self, fixed: &[HandGroup], tiles: &[Tile]) -> Vec<HandInterpretation> {
        if !fixed.is_empty() || !(13..=14).contains(&tiles.len()) {
            return vec![];
        }
        if !tiles.iter().all(|t| t.is_end()) {
            return vec![];
        }

        let missing: Vec<Tile> = ORPHANS
            .iter()
            .filter(|t| !tiles.contains(t))
            .copied()
            .collect();
        let mut ip = HandInterpretation::new(HandShape::Kokushimusou, vec![]);
        ip.ungrouped = tiles.to_vec();
        match (tiles.len(), missing.len()) {
            (13, 0) => {
                // 十三面待ち
                ip.wait_type = WaitType::Tanki;
                ip.waits = ORPHANS.to_vec();
            }
            (13, 1) => {
                ip.wait_type = WaitType::Tanki;
                ip.waits = missing;
            }
            (14, 0) => {} // 和了形
            _ => return vec![],
        }
        vec![ip]
    }
}
