use super::group::GroupType;
use super::interpretation::{HandShape, WaitType};
use super::yaku::{is_pinfu, YakuContext};

// 符計算
pub fn calc_fu(ctx: &YakuContext<'_>) -> usize {
    if ctx.interp.shape == HandShape::Chiitoitsu {
        return 25;
    }
    if is_pinfu(ctx) && ctx.is_self_drawn() {
        return 20;
    }

    // 副底
    let mut fu = 20;

    // 和了り方
    fu += if ctx.is_self_drawn() {
        2 // ツモ
    } else if !ctx.is_open() {
        10 // 門前ロン
    } else {
        0
    };

    // 面子
    for g in ctx.groups() {
        let base = match g.type_ {
            GroupType::Koutsu => 2,
            GroupType::Kantsu => 8,
            _ => continue,
        };
        let end = if g.tile().is_end() { 2 } else { 1 };
        let closed = if g.is_open { 1 } else { 2 };
        fu += base * end * closed;
    }

    // 雀頭
    fu += ctx.pair_fu();

    // 待ちの形
    match ctx.interp.wait_type {
        WaitType::Tanki | WaitType::Kanchan | WaitType::Penchan => fu += 2,
        _ => {}
    }

    // 喰い平和形
    if fu == 20 {
        fu = 30;
    }

    (fu + 9) / 10 * 10 // １の位は切り上げ
}
