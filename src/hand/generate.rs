use super::group::{GroupType, HandGroup};
use super::interpretation::{HandInterpretation, HandShape};
use crate::model::*;

// 確定済みの面子(鳴き)とソート済みの牌から,劣った解釈を除いたすべての手牌の解釈を返却
// 返り値は空にならない (面子を一つも作れない場合はすべての牌を余り牌とした解釈を返す)
pub fn generate(fixed: &[HandGroup], tiles: &[Tile]) -> Vec<HandInterpretation> {
    debug_assert!(
        tiles.windows(2).all(|w| w[0] <= w[1]),
        "tiles are not sorted: {:?}",
        tiles
    );

    let mut res = vec![];
    let ip = HandInterpretation::new(HandShape::Normal, fixed.to_vec());
    search(&ip, tiles.to_vec(), 0, &mut res);
    res
}

// restのstart以降の牌を先頭とする面子,雀頭を再帰的に探索
// startより左の牌はこの分岐では余り牌として確定している
fn search(
    ip: &HandInterpretation,
    rest: Vec<Tile>,
    start: usize,
    res: &mut Vec<HandInterpretation>,
) {
    if rest.len() < 3 {
        finish(ip, rest, res);
        return;
    }

    let need_pair = ip.pair().is_none();
    let mut branched = false;
    for i in start..rest.len() {
        // 左隣と同じ牌を先頭とする分解は左隣の牌の分岐で探索済み
        if i > start && rest[i] == rest[i - 1] {
            continue;
        }
        let t = rest[i];

        // 雀頭
        if need_pair && i + 1 < rest.len() && rest[i + 1] == t {
            branch(ip, &rest, &[i, i + 1], GroupType::Pair, i, res);
            branched = true;
        }

        // 刻子
        if i + 2 < rest.len() && rest[i + 2] == t {
            branch(ip, &rest, &[i, i + 1, i + 2], GroupType::Koutsu, i, res);
            branched = true;
        }

        // 順子
        if let Some((j, k)) = find_sequence(&rest, i) {
            branch(ip, &rest, &[i, j, k], GroupType::Shuntsu, i, res);
            branched = true;
        }
    }

    if !branched {
        finish(ip, rest, res);
    }
}

// rest[i]を先頭とする順子の残り2枚の位置 (それぞれ最初に見つかった牌)
fn find_sequence(rest: &[Tile], i: usize) -> Option<(usize, usize)> {
    let t1 = rest[i].offset(1)?;
    let t2 = rest[i].offset(2)?;
    let j = i + 1 + rest[i + 1..].iter().position(|t| *t == t1)?;
    let k = j + 1 + rest[j + 1..].iter().position(|t| *t == t2)?;
    Some((j, k))
}

fn branch(
    ip: &HandInterpretation,
    rest: &[Tile],
    idxs: &[usize],
    type_: GroupType,
    start: usize,
    res: &mut Vec<HandInterpretation>,
) {
    let tiles: Vec<Tile> = idxs.iter().map(|&i| rest[i]).collect();
    let rest2: Vec<Tile> = rest
        .iter()
        .enumerate()
        .filter(|(i, _)| !idxs.contains(i))
        .map(|(_, &t)| t)
        .collect();

    let mut ip2 = ip.clone();
    ip2.groups.push(HandGroup::new(type_, tiles, false));
    search(&ip2, rest2, start, res);
}

fn finish(ip: &HandInterpretation, rest: Vec<Tile>, res: &mut Vec<HandInterpretation>) {
    let mut ip = ip.clone();
    ip.ungrouped = rest;
    if ip.groups.len() >= 4 && ip.ungrouped.len() <= 2 {
        ip.classify_wait();
    }
    insert(res, ip);
}

// 支配関係を考慮して解釈を追加
// 既存の解釈より真に劣る場合は追加せず,既存の解釈が真に劣る場合はそれを削除する
fn insert(res: &mut Vec<HandInterpretation>, ip: HandInterpretation) {
    let rank = ip.rank();
    if res
        .iter()
        .any(|x| rank.is_strict_subset_of(x.rank()) || x.is_same_shape(&ip))
    {
        return;
    }
    res.retain(|x| !x.rank().is_strict_subset_of(rank));
    res.push(ip);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::interpretation::WaitType;
    use crate::util::string::tiles_from_string;

    fn gen(exp: &str) -> Vec<HandInterpretation> {
        let mut tiles = tiles_from_string(exp).unwrap();
        tiles.sort();
        generate(&[], &tiles)
    }

    fn all_waits(ips: &[HandInterpretation]) -> Vec<Tile> {
        let mut waits: Vec<Tile> = ips.iter().flat_map(|ip| ip.waits.clone()).collect();
        waits.sort();
        waits.dedup();
        waits
    }

    fn assert_invariants(ips: &[HandInterpretation]) {
        assert!(!ips.is_empty());
        for a in ips {
            for g in &a.groups {
                assert!(g.is_valid(), "{:?}", g);
            }
            for b in ips {
                assert!(!a.rank().is_strict_subset_of(b.rank()));
            }
        }
    }

    #[test]
    fn test_nine_gates() {
        let ips = gen("m1112345678999");
        assert_invariants(&ips);
        assert!(ips.len() > 1);
        assert_eq!(all_waits(&ips), tiles_from_string("m123456789").unwrap());

        let kinds: Vec<WaitType> = ips.iter().map(|ip| ip.wait_type).collect();
        for wt in [
            WaitType::Tanki,
            WaitType::Shanpon,
            WaitType::Ryanmen,
            WaitType::Penchan,
        ] {
            assert!(kinds.contains(&wt), "{:?} not found", wt);
        }
    }

    #[test]
    fn test_shanpon() {
        let ips = gen("m22789p33s234567");
        assert_invariants(&ips);
        let shanpon: Vec<&HandInterpretation> = ips
            .iter()
            .filter(|ip| ip.wait_type == WaitType::Shanpon)
            .collect();
        assert_eq!(shanpon.len(), 2);
        assert_eq!(all_waits(&ips), tiles_from_string("m2p3").unwrap());
    }

    #[test]
    fn test_all_pairs_shape() {
        // 対子のみの形は通常形として2面子までしか構成できないので待ちは発生しない
        let ips = gen("m2233p2233s22333");
        assert_invariants(&ips);
        assert!(ips.iter().all(|ip| ip.wait_type == WaitType::None));
        assert!(ips.iter().all(|ip| ip.groups.len() == 2));
    }

    #[test]
    fn test_penchan_ryanmen() {
        let single = |exp: &str| {
            let ips = gen(exp);
            assert_invariants(&ips);
            assert_eq!(ips.len(), 1);
            (ips[0].wait_type, ips[0].waits.clone())
        };

        assert_eq!(
            single("m123456789p12z11"),
            (WaitType::Penchan, vec![Tile(TP, 3)])
        );
        assert_eq!(
            single("m123456789p89z11"),
            (WaitType::Penchan, vec![Tile(TP, 7)])
        );
        assert_eq!(
            single("m123456789p45z11"),
            (WaitType::Ryanmen, vec![Tile(TP, 3), Tile(TP, 6)])
        );
        assert_eq!(
            single("m123456789p23z11"),
            (WaitType::Ryanmen, vec![Tile(TP, 1), Tile(TP, 4)])
        );
    }

    #[test]
    fn test_nobetan() {
        // 1234の単騎待ちは1と4の二通りの解釈
        let ips = gen("m1234p234789s555");
        assert_invariants(&ips);
        let tanki: Vec<Vec<Tile>> = ips
            .iter()
            .filter(|ip| ip.wait_type == WaitType::Tanki)
            .map(|ip| ip.waits.clone())
            .collect();
        assert_eq!(tanki.len(), 2);
        assert_eq!(all_waits(&ips), tiles_from_string("m14").unwrap());
    }

    #[test]
    fn test_kanchan_and_triplet_ambiguity() {
        // 3334の形は 333+4の単騎 と 33(雀頭)+34の両面 の二通り
        let ips = gen("m3334p123456s789");
        assert_invariants(&ips);
        assert_eq!(all_waits(&ips), tiles_from_string("m245").unwrap());
    }

    #[test]
    fn test_with_melds() {
        let fixed = vec![
            HandGroup::new(GroupType::Koutsu, vec![Tile(TZ, DW); 3], true),
            HandGroup::new(GroupType::Shuntsu, tiles_from_string("s789").unwrap(), true),
        ];
        let tiles = tiles_from_string("m567p46s55").unwrap();
        let ips = generate(&fixed, &tiles);
        assert_invariants(&ips);
        assert_eq!(all_waits(&ips), tiles_from_string("p5").unwrap());
        let ip = ips.iter().find(|ip| !ip.waits.is_empty()).unwrap();
        assert_eq!(ip.wait_type, WaitType::Kanchan);
        assert_eq!(ip.groups.len(), 4);
        assert_eq!(ip.groups[0], fixed[0]);
    }

    #[test]
    fn test_complete_hand() {
        let ips = gen("m123456789p11z222");
        let complete: Vec<&HandInterpretation> =
            ips.iter().filter(|ip| ip.groups.len() == 5).collect();
        assert_eq!(complete.len(), 1);
        assert!(complete[0].ungrouped.is_empty());
        assert_eq!(complete[0].wait_type, WaitType::None);
    }

    #[test]
    fn test_no_groups() {
        let ips = gen("m147p258s369z1234");
        assert_eq!(ips.len(), 1);
        assert_eq!(ips[0].ungrouped.len(), 13);
        assert!(ips[0].waits.is_empty());
    }

    #[test]
    fn test_no_duplicates() {
        let ips = gen("m1112223334445");
        assert_invariants(&ips);
        for (i, a) in ips.iter().enumerate() {
            for b in &ips[i + 1..] {
                assert!(!a.is_same_shape(b));
            }
        }
    }
}
