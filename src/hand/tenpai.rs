use super::assess::assess;
use crate::model::*;

// [聴牌捨て牌判定]
// ツモ番において聴牌となる打牌と待ちの組み合わせの一覧を返却
// 主にリーチ宣言が可能かどうかを確認する用途
// 赤5と通常の5は別の打牌として扱う
pub fn calc_discards_to_tenpai(hand: &Hand) -> Vec<(Tile, Vec<Tile>)> {
    debug_assert!(
        hand.tiles().len() % 3 == 2,
        "invalid number of tiles: {}",
        hand
    );

    let mut res = vec![];
    let mut checked: Vec<Tile> = vec![];
    for &t in hand.tiles() {
        if checked.iter().any(|c| c.eq_strict(&t)) {
            continue;
        }
        checked.push(t);

        let mut h = hand.clone();
        h.remove(t);
        let waits = assess(&h).waits();
        if !waits.is_empty() {
            res.push((t, waits));
        }
    }

    res
}
