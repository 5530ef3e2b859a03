use super::*;
use crate::hand::HandInterpretation;

pub type Points = (Point, Point, Point); // (ロンの支払い, ツモ・子の支払い, ツモ・親の支払い)

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Yaku {
    pub name: String,
    pub fan: usize, // 役満の場合は役満倍率
}

// 手役評価関数 hand::evaluate_handの返り値
#[derive(Debug, Clone, Serialize)]
pub struct ScoreContext {
    pub yakus: Vec<Yaku>, // 役一覧(ドラを含む)
    pub fu: usize,        // 符数
    pub fan: usize,       // 飜数(ドラを含む), 役満の場合は0
    pub yakuman: usize,   // 役満倍率 (0: 通常役, 1: 役満, 2: 二倍役満, ...)
    pub score: Point,     // 和了得点
    pub points: Points,   // 支払い得点の内訳
    pub title: String,    // 倍満, 跳満, ...
    pub interpretation: HandInterpretation, // 採用された手牌の解釈
}
