use std::fmt;

use super::assess::HandAssessment;
use super::group::{GroupType, HandGroup};
use super::interpretation::{HandInterpretation, HandShape, WaitType};
use crate::model::*;
use crate::util::common::{inc_tile, tiles_to_tile_table};

// 役満の翻数 (k倍役満はYAKUMAN + k - 1)
pub const YAKUMAN: usize = 13;

// 役の判定に必要な情報
// 手牌の解釈の一つと和了牌の組み合わせごとに生成
pub struct YakuContext<'a> {
    pub round: &'a RoundContext,
    pub seat: &'a SeatContext,
    pub hand: &'a Hand,
    pub assess: &'a HandAssessment,
    pub interp: &'a HandInterpretation,
    pub winning_tile: Tile,
    pub win_type: WinType,
    groups: Vec<HandGroup>,  // 和了牌で完成させた面子と雀頭 (鳴きを含む)
    tiles: TileTable,        // 鳴き以外の牌と和了牌 九蓮宝燈の判定などに使用
    pair_tile: Option<Tile>, // 雀頭の牌
    counts: Counts,          // 面子や牌種別のカウント
    iipeikou_count: usize,   // 一盃口, 二盃口用
    yakuhai_check: TileRow,  // 役牌面子のカウント(雀頭は含まない)
}

impl<'a> YakuContext<'a> {
    // interpの和了牌にwinning_tileが含まれていない場合はpanic
    pub fn new(
        round: &'a RoundContext,
        seat: &'a SeatContext,
        hand: &'a Hand,
        assess: &'a HandAssessment,
        interp: &'a HandInterpretation,
        winning_tile: Tile,
        win_type: WinType,
    ) -> Self {
        let groups = interp.complete(winning_tile, win_type.is_self_drawn());
        let mut tiles = tiles_to_tile_table(hand.tiles());
        inc_tile(&mut tiles, winning_tile);
        let pair_tile = groups.iter().find(|g| g.is_pair()).map(|g| g.tile());
        let counts = count_type(&groups);
        let iipeikou_count = count_iipeikou(&groups);
        let yakuhai_check = check_yakuhai(&groups);

        Self {
            round,
            seat,
            hand,
            assess,
            interp,
            winning_tile,
            win_type,
            groups,
            tiles,
            pair_tile,
            counts,
            iipeikou_count,
            yakuhai_check,
        }
    }

    #[inline]
    pub fn groups(&self) -> &[HandGroup] {
        &self.groups
    }

    #[inline]
    pub fn pair_tile(&self) -> Option<Tile> {
        self.pair_tile
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.assess.is_open
    }

    #[inline]
    pub fn is_self_drawn(&self) -> bool {
        self.win_type.is_self_drawn()
    }

    // 役牌(三元牌, 場風, 自風)の雀頭に付く符
    pub fn pair_fu(&self) -> usize {
        let pt = match self.pair_tile {
            Some(t) if t.is_hornor() => t,
            _ => return 0,
        };
        let mut fu = 0;
        if pt.is_doragon() {
            fu += 2;
        }
        if pt.1 == self.round.prevalent_wind {
            fu += 2;
        }
        if pt.1 == self.seat.seat_wind {
            fu += 2;
        }
        fu
    }
}

impl fmt::Debug for YakuContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gs: Vec<String> = self.groups.iter().map(|g| g.to_string()).collect();
        write!(
            f,
            "YakuContext({:?}, [{}], {}, {:?})",
            self.interp.shape,
            gs.join(" "),
            self.winning_tile,
            self.win_type
        )
    }
}

#[derive(Debug, Default)]
struct Counts {
    shuntsu: usize,
    koutsu: usize,
    chii: usize,
    pon: usize,
    minkan: usize,
    ankan: usize,
    shuntsu_total: usize, // shuntsu + chii
    koutsu_total: usize,  // koutsu + pon + minkan + ankan
    ankou_total: usize,   // koutsu + ankan
    kantsu_total: usize,  // minkan + ankan
    tis: [usize; TYPE],   // tile Type Indices counts
}

fn count_type(groups: &[HandGroup]) -> Counts {
    use GroupType::*;
    let mut cnt = Counts::default();
    for g in groups {
        match (g.type_, g.is_open) {
            (Pair, _) => {}
            (Shuntsu, false) => cnt.shuntsu += 1,
            (Shuntsu, true) => cnt.chii += 1,
            (Koutsu, false) => cnt.koutsu += 1,
            (Koutsu, true) => cnt.pon += 1,
            (Kantsu, false) => cnt.ankan += 1,
            (Kantsu, true) => cnt.minkan += 1,
        }
        cnt.tis[g.tile().0] += 1;
    }
    cnt.shuntsu_total = cnt.shuntsu + cnt.chii;
    cnt.koutsu_total = cnt.koutsu + cnt.pon + cnt.minkan + cnt.ankan;
    cnt.ankou_total = cnt.koutsu + cnt.ankan;
    cnt.kantsu_total = cnt.minkan + cnt.ankan;

    cnt
}

fn count_iipeikou(groups: &[HandGroup]) -> usize {
    let mut n = 0;
    let mut shuntsu = TileTable::default();
    for g in groups {
        if g.is_sequence() && !g.is_open {
            let t = g.tile();
            shuntsu[t.0][t.n()] += 1;
            // 同じ順子が2つで1組, 4つで2組
            if shuntsu[t.0][t.n()] % 2 == 0 {
                n += 1;
            }
        }
    }

    n
}

fn check_yakuhai(groups: &[HandGroup]) -> TileRow {
    let mut tr = TileRow::default();
    for g in groups {
        let t = g.tile();
        if g.is_set() && t.is_hornor() {
            tr[t.1] += 1;
        }
    }

    tr
}

// 役の判定ルール
// 成立する場合は翻数を返却. YAKUMAN以上の値は役満(倍率はvalue - YAKUMAN + 1).
pub trait YakuRule {
    fn name(&self) -> &str;
    fn evaluate(&self, ctx: &YakuContext<'_>) -> Option<usize>;
}

impl<T: YakuRule + ?Sized> YakuRule for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(&self, ctx: &YakuContext<'_>) -> Option<usize> {
        (**self).evaluate(ctx)
    }
}

pub struct YakuDefine {
    pub name: &'static str,
    pub func: fn(&YakuContext<'_>) -> bool,
    pub fan_close: usize, // 鳴きなしの翻
    pub fan_open: usize,  // 鳴きありの翻(食い下がり) 0の場合は門前限定
}

impl YakuRule for YakuDefine {
    fn name(&self) -> &str {
        self.name
    }

    fn evaluate(&self, ctx: &YakuContext<'_>) -> Option<usize> {
        let fan = if ctx.is_open() {
            self.fan_open
        } else {
            self.fan_close
        };
        if fan != 0 && (self.func)(ctx) {
            Some(fan)
        } else {
            None
        }
    }
}

impl fmt::Debug for YakuDefine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.name, self.fan_close, self.fan_open)
    }
}

// 役の一覧 (順序は表示順)
pub struct YakuRegistry {
    rules: Vec<Box<dyn YakuRule + Send + Sync>>,
}

impl YakuRegistry {
    pub fn new() -> Self {
        Self { rules: vec![] }
    }

    // 標準の役をすべて登録
    pub fn standard() -> Self {
        let mut reg = Self::new();
        for y in YAKU_LIST {
            reg.push(Box::new(y));
        }
        reg
    }

    pub fn push(&mut self, rule: Box<dyn YakuRule + Send + Sync>) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // (役一覧, 役満倍率, 翻数)を返却
    // 役満が含まれている場合は役満のみを返却し, 翻数は0
    pub fn evaluate(&self, ctx: &YakuContext<'_>) -> (Vec<Yaku>, usize, usize) {
        let mut yakus = vec![];
        for r in &self.rules {
            if let Some(fan) = r.evaluate(ctx) {
                yakus.push(Yaku {
                    name: r.name().to_string(),
                    fan,
                });
            }
        }

        if yakus.iter().any(|y| y.fan >= YAKUMAN) {
            let mut yakuman: Vec<Yaku> = yakus.into_iter().filter(|y| y.fan >= YAKUMAN).collect();
            let mut m = 0;
            for y in &mut yakuman {
                y.fan -= YAKUMAN - 1;
                m += y.fan;
            }
            (yakuman, m, 0)
        } else {
            let fan = yakus.iter().map(|y| y.fan).sum();
            (yakus, 0, fan)
        }
    }
}

impl Default for YakuRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

macro_rules! yaku {
    ($n: expr, $f: expr, $c: expr, $o: expr) => {
        YakuDefine {
            name: $n,
            func: $f,
            fan_close: $c,
            fan_open: $o,
        }
    };
}

static YAKU_LIST: &[YakuDefine] = &[
    yaku!("場風", is_bakaze, 1, 1),
    yaku!("自風", is_jikaze, 1, 1),
    yaku!("白", is_haku, 1, 1),
    yaku!("發", is_hatsu, 1, 1),
    yaku!("中", is_chun, 1, 1),
    yaku!("断么九", is_tanyaochuu, 1, 1),
    yaku!("平和", is_pinfu, 1, 0),
    yaku!("一盃口", is_iipeikou, 1, 0),
    yaku!("二盃口", is_ryanpeikou, 3, 0),
    yaku!("一気通貫", is_ikkitsuukan, 2, 1),
    yaku!("三色同順", is_sanshokudoujun, 2, 1),
    yaku!("三色同刻", is_sanshokudoukou, 2, 2),
    yaku!("チャンタ", is_chanta, 2, 1),
    yaku!("純チャン", is_junchan, 3, 2),
    yaku!("混老頭", is_honroutou, 2, 2),
    yaku!("清老頭", is_chinroutou, 13, 13),
    yaku!("対々和", is_toitoihou, 2, 2),
    yaku!("三暗刻", is_sanankou, 2, 2),
    yaku!("四暗刻", is_suuankou, 13, 0),
    yaku!("四暗刻単騎", is_suuankoutanki, 14, 0),
    yaku!("三槓子", is_sankantsu, 2, 2),
    yaku!("四槓子", is_suukantsu, 13, 13),
    yaku!("混一色", is_honiisou, 3, 2),
    yaku!("清一色", is_chiniisou, 6, 5),
    yaku!("小三元", is_shousangen, 2, 2),
    yaku!("大三元", is_daisangen, 13, 13),
    yaku!("小四喜", is_shousuushii, 13, 13),
    yaku!("大四喜", is_daisuushii, 14, 14),
    yaku!("緑一色", is_ryuuiisou, 13, 13),
    yaku!("字一色", is_tuuiisou, 13, 13),
    yaku!("九蓮宝燈", is_chuurenpoutou, 13, 0),
    yaku!("純正九蓮宝燈", is_junseichuurenpoutou, 14, 0),
    // 特殊な組み合わせ
    yaku!("国士無双", is_kokushimusou, 13, 0),
    yaku!("国士無双十三面待ち", is_kokushimusoujuusanmenmachi, 14, 0),
    yaku!("七対子", is_chiitoitsu, 2, 0),
    // 特殊条件
    yaku!("門前自摸", is_menzentsumo, 1, 0),
    yaku!("リーチ", is_riichi, 1, 0),
    yaku!("ダブルリーチ", is_dabururiichi, 2, 0),
    yaku!("一発", is_ippatsu, 1, 0),
    yaku!("海底摸月", is_haiteiraoyue, 1, 1),
    yaku!("河底撈魚", is_houteiraoyui, 1, 1),
    yaku!("嶺上開花", is_rinshankaihou, 1, 1),
    yaku!("槍槓", is_chankan, 1, 1),
    yaku!("天和", is_tenhou, 13, 0),
    yaku!("地和", is_tiihou, 13, 0),
];

// 役の優先順位 =================================================================
// * 役満が存在する場合は役満以外の役は削除
// * 以下の役は排他的(包含関係)であり右側を優先
//     一盃口, 二盃口
//     チャンタ, 純チャンタ
//     混老頭, 清老頭
//     混一色, 清一色
//     三暗刻, 四暗刻, 四暗刻単騎
//     三槓子, 四槓子
//     小四喜, 大四喜
//     九蓮宝燈, 純正九蓮宝燈
//     国士無双, 国士無双十三面待ち

// 場風
fn is_bakaze(ctx: &YakuContext<'_>) -> bool {
    ctx.yakuhai_check[ctx.round.prevalent_wind] == 1
}

// 自風
fn is_jikaze(ctx: &YakuContext<'_>) -> bool {
    ctx.yakuhai_check[ctx.seat.seat_wind] == 1
}

// 白
fn is_haku(ctx: &YakuContext<'_>) -> bool {
    ctx.yakuhai_check[DW] == 1
}

// 發
fn is_hatsu(ctx: &YakuContext<'_>) -> bool {
    ctx.yakuhai_check[DG] == 1
}

// 中
fn is_chun(ctx: &YakuContext<'_>) -> bool {
    ctx.yakuhai_check[DR] == 1
}

// 断么九
fn is_tanyaochuu(ctx: &YakuContext<'_>) -> bool {
    if ctx.groups.is_empty() {
        return false; // 国士対策
    }
    ctx.groups.iter().all(|g| !g.has_end())
}

// 平和
pub(super) fn is_pinfu(ctx: &YakuContext<'_>) -> bool {
    if ctx.counts.shuntsu != 4 || ctx.interp.wait_type != WaitType::Ryanmen {
        return false;
    }
    ctx.pair_fu() == 0
}

// 一盃口
fn is_iipeikou(ctx: &YakuContext<'_>) -> bool {
    ctx.iipeikou_count == 1
}

// 二盃口
fn is_ryanpeikou(ctx: &YakuContext<'_>) -> bool {
    ctx.iipeikou_count == 2
}

// 一気通貫
fn is_ikkitsuukan(ctx: &YakuContext<'_>) -> bool {
    if ctx.counts.shuntsu_total < 3 {
        return false;
    }

    let mut f147 = [[false; 3]; 3];
    for g in ctx.groups.iter().filter(|g| g.is_sequence()) {
        let t = g.tile();
        match t.1 {
            1 | 4 | 7 => f147[t.0][t.1 / 3] = true,
            _ => {}
        }
    }

    f147.iter().any(|f| f[0] && f[1] && f[2])
}

// 三色同順
fn is_sanshokudoujun(ctx: &YakuContext<'_>) -> bool {
    if ctx.counts.shuntsu_total < 3 {
        return false;
    }
    is_sanshoku(ctx, HandGroup::is_sequence)
}

// 三色同刻
fn is_sanshokudoukou(ctx: &YakuContext<'_>) -> bool {
    if ctx.counts.koutsu_total < 3 {
        return false;
    }
    is_sanshoku(ctx, HandGroup::is_set)
}

// チャンタ
fn is_chanta(ctx: &YakuContext<'_>) -> bool {
    if ctx.counts.shuntsu_total == 0 {
        return false;
    }
    ctx.groups.iter().all(|g| g.has_end()) && ctx.counts.tis[TZ] > 0
}

// 純チャン
fn is_junchan(ctx: &YakuContext<'_>) -> bool {
    if ctx.counts.shuntsu_total == 0 {
        return false;
    }
    ctx.groups.iter().all(|g| g.has_terminal())
}

// 混老頭
fn is_honroutou(ctx: &YakuContext<'_>) -> bool {
    if ctx.counts.shuntsu_total != 0 || ctx.groups.is_empty() {
        return false;
    }

    let mut has_hornor = false;
    let mut has_terminal = false;
    for g in &ctx.groups {
        let t = g.tile();
        if t.is_hornor() {
            has_hornor = true;
        } else if t.is_terminal() {
            has_terminal = true;
        } else {
            return false;
        }
    }

    has_hornor && has_terminal
}

// 清老頭
fn is_chinroutou(ctx: &YakuContext<'_>) -> bool {
    if ctx.counts.shuntsu_total != 0 || ctx.groups.is_empty() {
        return false;
    }
    ctx.groups.iter().all(|g| g.tile().is_terminal())
}

// 対々和
fn is_toitoihou(ctx: &YakuContext<'_>) -> bool {
    ctx.counts.koutsu_total == 4
}

// 三暗刻
fn is_sanankou(ctx: &YakuContext<'_>) -> bool {
    ctx.counts.ankou_total == 3
}

// 四暗刻
// ロンで完成した刻子は明刻扱いなので双碰待ちのロンは三暗刻になる
fn is_suuankou(ctx: &YakuContext<'_>) -> bool {
    ctx.counts.ankou_total == 4 && ctx.interp.wait_type != WaitType::Tanki
}

// 四暗刻単騎
fn is_suuankoutanki(ctx: &YakuContext<'_>) -> bool {
    ctx.counts.ankou_total == 4 && ctx.interp.wait_type == WaitType::Tanki
}

// 三槓子
fn is_sankantsu(ctx: &YakuContext<'_>) -> bool {
    ctx.counts.kantsu_total == 3
}

// 四槓子
fn is_suukantsu(ctx: &YakuContext<'_>) -> bool {
    ctx.counts.kantsu_total == 4
}

// 混一色
fn is_honiisou(ctx: &YakuContext<'_>) -> bool {
    let tis = &ctx.counts.tis;
    count_suits(tis) == 1 && tis[TZ] > 0
}

// 清一色
fn is_chiniisou(ctx: &YakuContext<'_>) -> bool {
    let tis = &ctx.counts.tis;
    count_suits(tis) == 1 && tis[TZ] == 0
}

// 小三元
fn is_shousangen(ctx: &YakuContext<'_>) -> bool {
    let yc = &ctx.yakuhai_check;
    yc[DW] + yc[DG] + yc[DR] == 2 && ctx.pair_tile.map_or(false, |t| t.is_doragon())
}

// 大三元
fn is_daisangen(ctx: &YakuContext<'_>) -> bool {
    let yc = &ctx.yakuhai_check;
    yc[DW] + yc[DG] + yc[DR] == 3
}

// 小四喜
fn is_shousuushii(ctx: &YakuContext<'_>) -> bool {
    let yc = &ctx.yakuhai_check;
    yc[WE] + yc[WS] + yc[WW] + yc[WN] == 3 && ctx.pair_tile.map_or(false, |t| t.is_wind())
}

// 大四喜
fn is_daisuushii(ctx: &YakuContext<'_>) -> bool {
    let yc = &ctx.yakuhai_check;
    yc[WE] + yc[WS] + yc[WW] + yc[WN] == 4
}

// 緑一色
fn is_ryuuiisou(ctx: &YakuContext<'_>) -> bool {
    if ctx.groups.is_empty() {
        return false;
    }
    ctx.groups.iter().flat_map(|g| g.tiles.iter()).all(|t| {
        if t.is_hornor() {
            t.1 == DG
        } else {
            t.0 == TS && matches!(t.n(), 2 | 3 | 4 | 6 | 8)
        }
    })
}

// 字一色
fn is_tuuiisou(ctx: &YakuContext<'_>) -> bool {
    !ctx.groups.is_empty() && ctx.groups.iter().all(|g| g.tile().is_hornor())
}

// 九蓮宝燈
fn is_chuurenpoutou(ctx: &YakuContext<'_>) -> bool {
    let wt = &ctx.winning_tile;
    let cnt = ctx.tiles[wt.0][wt.n()];
    is_chuurenpoutou2(ctx) && (cnt == 1 || cnt == 3)
}

// 純正九蓮宝燈
fn is_junseichuurenpoutou(ctx: &YakuContext<'_>) -> bool {
    let wt = &ctx.winning_tile;
    let cnt = ctx.tiles[wt.0][wt.n()];
    is_chuurenpoutou2(ctx) && (cnt == 2 || cnt == 4)
}

// 国士無双
fn is_kokushimusou(ctx: &YakuContext<'_>) -> bool {
    ctx.interp.shape == HandShape::Kokushimusou && ctx.interp.waits.len() != 13
}

// 国士無双十三面待ち
fn is_kokushimusoujuusanmenmachi(ctx: &YakuContext<'_>) -> bool {
    ctx.interp.shape == HandShape::Kokushimusou && ctx.interp.waits.len() == 13
}

// 七対子
fn is_chiitoitsu(ctx: &YakuContext<'_>) -> bool {
    ctx.interp.shape == HandShape::Chiitoitsu
}

// 門前自摸
fn is_menzentsumo(ctx: &YakuContext<'_>) -> bool {
    ctx.is_self_drawn()
}

// リーチ
fn is_riichi(ctx: &YakuContext<'_>) -> bool {
    ctx.seat.is_riichi && !ctx.seat.is_daburii
}

// ダブルリーチ
fn is_dabururiichi(ctx: &YakuContext<'_>) -> bool {
    ctx.seat.is_daburii
}

// 一発
fn is_ippatsu(ctx: &YakuContext<'_>) -> bool {
    ctx.seat.is_ippatsu && (ctx.seat.is_riichi || ctx.seat.is_daburii)
}

// 海底摸月
fn is_haiteiraoyue(ctx: &YakuContext<'_>) -> bool {
    ctx.round.wall_count == 0 && ctx.win_type == WinType::Tsumo
}

// 河底撈魚
fn is_houteiraoyui(ctx: &YakuContext<'_>) -> bool {
    ctx.round.wall_count == 0 && ctx.win_type == WinType::Ron
}

// 嶺上開花
fn is_rinshankaihou(ctx: &YakuContext<'_>) -> bool {
    ctx.win_type == WinType::Rinshan
}

// 槍槓
fn is_chankan(ctx: &YakuContext<'_>) -> bool {
    ctx.win_type == WinType::Chankan
}

// 天和
fn is_tenhou(ctx: &YakuContext<'_>) -> bool {
    is_first_draw_win(ctx) && ctx.seat.is_dealer()
}

// 地和
fn is_tiihou(ctx: &YakuContext<'_>) -> bool {
    is_first_draw_win(ctx) && !ctx.seat.is_dealer()
}

// 共通処理 ====================================================================

fn count_suits(tis: &[usize; TYPE]) -> usize {
    tis[..TZ].iter().filter(|&&n| n > 0).count()
}

// 萬子, 筒子, 索子に同じ数字の面子がある
fn is_sanshoku(ctx: &YakuContext<'_>, pred: fn(&HandGroup) -> bool) -> bool {
    let mut mps = [[false; TNUM]; 3];
    for g in ctx.groups.iter().filter(|g| pred(g)) {
        let t = g.tile();
        if t.is_suit() {
            mps[t.0][t.n()] = true;
        }
    }
    (1..TNUM).any(|n| mps[TM][n] && mps[TP][n] && mps[TS][n])
}

// 九蓮宝燈(純正を含む)
fn is_chuurenpoutou2(ctx: &YakuContext<'_>) -> bool {
    if !ctx.hand.melds().is_empty() || ctx.interp.shape != HandShape::Normal {
        return false;
    }

    let tis = &ctx.counts.tis;
    let ti = if tis[TM] == 5 {
        TM
    } else if tis[TP] == 5 {
        TP
    } else if tis[TS] == 5 {
        TS
    } else {
        return false;
    };

    let h = &ctx.tiles;
    if h[ti][1] < 3 || h[ti][9] < 3 {
        return false;
    }
    (2..9).all(|ni| h[ti][ni] > 0)
}

// 鳴きのない第一ツモでの和了
fn is_first_draw_win(ctx: &YakuContext<'_>) -> bool {
    ctx.seat.is_first_draw && !ctx.round.has_calls && ctx.win_type == WinType::Tsumo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::assess::assess;
    use crate::util::string::{meld_from_string, tiles_from_string};

    struct Case {
        round: RoundContext,
        seat: SeatContext,
        hand: Hand,
        assess: HandAssessment,
        winning_tile: Tile,
        win_type: WinType,
    }

    impl Case {
        fn new(exp: &str, melds: &[&str], winning_tile: &str, win_type: WinType) -> Self {
            let melds = melds.iter().map(|m| meld_from_string(m).unwrap()).collect();
            let hand = Hand::new(tiles_from_string(exp).unwrap(), melds);
            let assess = assess(&hand);
            Self {
                round: RoundContext::default(),
                seat: SeatContext {
                    seat_wind: WS,
                    ..Default::default()
                },
                hand,
                assess,
                winning_tile: Tile::from_symbol(winning_tile).unwrap(),
                win_type,
            }
        }

        // 和了牌を待つ各解釈の役名一覧
        fn yakus(&self, reg: &YakuRegistry) -> Vec<(Vec<String>, usize, usize)> {
            self.assess
                .interpretations_waiting_on(self.winning_tile)
                .map(|ip| {
                    let ctx = YakuContext::new(
                        &self.round,
                        &self.seat,
                        &self.hand,
                        &self.assess,
                        ip,
                        self.winning_tile,
                        self.win_type,
                    );
                    let (ys, yakuman, fan) = reg.evaluate(&ctx);
                    (ys.into_iter().map(|y| y.name).collect(), yakuman, fan)
                })
                .collect()
        }

        fn has_yaku(&self, name: &str) -> bool {
            self.yakus(&YakuRegistry::standard())
                .iter()
                .any(|(ys, _, _)| ys.iter().any(|y| y == name))
        }
    }

    #[test]
    fn test_pinfu_tanyao() {
        let c = Case::new("m234p567s23456s88", &[], "s7", WinType::Ron);
        let res = c.yakus(&YakuRegistry::standard());
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].0, vec!["断么九", "平和"]);
        assert_eq!(res[0].2, 2);

        // 嵌張待ちは平和にならない
        let c = Case::new("m234p567s2346888", &[], "s7", WinType::Ron);
        assert!(!c.has_yaku("平和"));
    }

    #[test]
    fn test_yakuhai() {
        // 東場南家: 南の刻子は自風のみ, 西の刻子は役なし
        let c = Case::new("m234p567s88z333z22", &[], "z2", WinType::Ron);
        let res = c.yakus(&YakuRegistry::standard());
        assert!(res.iter().any(|(ys, _, fan)| ys == &["自風"] && *fan == 1));
        assert!(!c.has_yaku("場風"));
    }

    #[test]
    fn test_iipeikou_ryanpeikou() {
        let c = Case::new("m112233p445566z7", &[], "z7", WinType::Ron);
        let res = c.yakus(&YakuRegistry::standard());
        assert_eq!(res.len(), 2);
        assert!(res.iter().any(|(ys, _, fan)| ys == &["二盃口"] && *fan == 3));
        assert!(res.iter().any(|(ys, _, fan)| ys == &["七対子"] && *fan == 2));

        let c = Case::new("m112233p456p99s67", &[], "s8", WinType::Ron);
        let res = c.yakus(&YakuRegistry::standard());
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].0, vec!["平和", "一盃口"]);

        // 同じ順子4つ
        let c = Case::new("m111122223333z1", &[], "z1", WinType::Ron);
        assert!(c.has_yaku("二盃口"));
        assert!(!c.has_yaku("一盃口"));
        let res = c.yakus(&YakuRegistry::standard());
        assert!(res
            .iter()
            .any(|(ys, _, fan)| ys == &["二盃口", "チャンタ", "混一色"] && *fan == 8));
    }

    #[test]
    fn test_open_reduction() {
        // 食い下がり
        let c = Case::new("m123456p11z33", &["m7+89"], "z3", WinType::Ron);
        let res = c.yakus(&YakuRegistry::standard());
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].0, vec!["一気通貫"]);
        assert_eq!(res[0].2, 1);

        // 鳴きありで役なし
        let c = Case::new("m234567s11z33", &["m8+88"], "z3", WinType::Ron);
        let res = c.yakus(&YakuRegistry::standard());
        assert_eq!(res.len(), 1);
        assert!(res[0].0.is_empty());
    }

    #[test]
    fn test_suuankou() {
        // 双碰待ちのロンは三暗刻+対々和
        let c = Case::new("m111p222s333z11z22", &[], "z2", WinType::Ron);
        let res = c.yakus(&YakuRegistry::standard());
        assert!(res.iter().all(|(_, yakuman, _)| *yakuman == 0));
        assert!(c.has_yaku("三暗刻"));
        assert!(c.has_yaku("対々和"));

        let c = Case::new("m111p222s333z11z22", &[], "z2", WinType::Tsumo);
        let res = c.yakus(&YakuRegistry::standard());
        assert!(res.iter().any(|(ys, yakuman, fan)| ys == &["四暗刻"]
            && *yakuman == 1
            && *fan == 0));

        let c = Case::new("m111p222s333z222z1", &[], "z1", WinType::Ron);
        let res = c.yakus(&YakuRegistry::standard());
        assert!(res
            .iter()
            .any(|(ys, yakuman, _)| ys == &["四暗刻単騎"] && *yakuman == 2));
    }

    #[test]
    fn test_kokushimusou() {
        let c = Case::new("m19p19s19z1234567", &[], "m1", WinType::Ron);
        let res = c.yakus(&YakuRegistry::standard());
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].0, vec!["国士無双十三面待ち"]);
        assert_eq!(res[0].1, 2);

        let c = Case::new("m19p19s19z1234566", &[], "z7", WinType::Tsumo);
        let res = c.yakus(&YakuRegistry::standard());
        assert_eq!(res[0].0, vec!["国士無双"]);
        assert_eq!(res[0].1, 1);
    }

    #[test]
    fn test_chuurenpoutou() {
        let c = Case::new("m1112345678999", &[], "m5", WinType::Tsumo);
        let res = c.yakus(&YakuRegistry::standard());
        assert!(!res.is_empty());
        assert!(res
            .iter()
            .all(|(ys, yakuman, _)| ys == &["純正九蓮宝燈"] && *yakuman == 2));

        let c = Case::new("m1112345678899", &[], "m9", WinType::Ron);
        assert!(c.has_yaku("九蓮宝燈"));
        assert!(!c.has_yaku("純正九蓮宝燈"));
    }

    #[test]
    fn test_situational() {
        let mut c = Case::new("m234p567s23456s88", &[], "s7", WinType::Tsumo);
        c.seat.is_riichi = true;
        c.seat.is_ippatsu = true;
        c.round.wall_count = 0;
        let res = c.yakus(&YakuRegistry::standard());
        assert_eq!(
            res[0].0,
            vec!["断么九", "平和", "門前自摸", "リーチ", "一発", "海底摸月"]
        );
        assert_eq!(res[0].2, 6);

        c.seat.is_first_draw = true;
        c.seat.is_riichi = false;
        c.seat.is_ippatsu = false;
        c.round.wall_count = 70;
        let res = c.yakus(&YakuRegistry::standard());
        assert_eq!(res[0].0, vec!["地和"]);

        c.round.has_calls = true;
        assert!(!c.has_yaku("地和"));
    }

    #[test]
    fn test_rule_idempotent() {
        let c = Case::new("m123p123s12399z77", &[], "z7", WinType::Ron);
        let reg = YakuRegistry::standard();
        let first = c.yakus(&reg);
        assert_eq!(first, c.yakus(&reg));
        assert!(first.iter().any(|(ys, _, _)| ys.contains(&"三色同順".to_string())));
    }

    struct Bonus(usize);

    impl YakuRule for Bonus {
        fn name(&self) -> &str {
            "ボーナス"
        }

        fn evaluate(&self, _ctx: &YakuContext<'_>) -> Option<usize> {
            Some(self.0)
        }
    }

    #[test]
    fn test_registry_extension() {
        let c = Case::new("m234p567s23456s88", &[], "s7", WinType::Ron);
        let before = c.yakus(&YakuRegistry::standard());

        let mut reg = YakuRegistry::standard();
        reg.push(Box::new(Bonus(2)));
        let after = c.yakus(&reg);
        assert_eq!(after.len(), before.len());
        for (b, a) in before.iter().zip(&after) {
            assert!(a.2 >= b.2);
            assert_eq!(a.2, b.2 + 2);
        }

        // 空のレジストリでは役なし
        let empty = YakuRegistry::new();
        assert!(empty.is_empty());
        assert!(c.yakus(&empty).iter().all(|(ys, _, fan)| ys.is_empty() && *fan == 0));
    }
}
