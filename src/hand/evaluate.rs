use super::assess::{assess, HandAssessment};
use super::fu::calc_fu;
use super::point::calc_points;
use super::yaku::{YakuContext, YakuRegistry};
use crate::model::*;
use crate::util::common::count_dora;

// 和了牌を待つ解釈の中で最も高得点となるような役の組み合わせのSome(ScoreContext)を返却
// 和了形でない場合や無役の場合はNone
// 同点の場合は飜数, 符数の高い方を優先し, それも同じ場合は先に生成された解釈を採用
// この関数は本場数の得点を計算しない.
pub fn evaluate_hand(
    round: &RoundContext,     // 局の情報
    seat: &SeatContext,       // 和了者の情報
    hand: &Hand,              // 手牌(和了牌を含まない)
    assess: &HandAssessment,  // handの評価結果
    winning_tile: Tile,       // 和了牌
    win_type: WinType,        // 和了牌の取得方法
    registry: &YakuRegistry,  // 判定する役の一覧
) -> Option<ScoreContext> {
    let mut tiles = hand.all_tiles();
    tiles.push(winning_tile);
    let n_dora = count_dora(&tiles, &round.doras);
    let n_red_dora = tiles.iter().filter(|t| t.is_red5()).count();
    let n_ura_dora = if seat.is_riichi || seat.is_daburii {
        count_dora(&tiles, &round.ura_doras)
    } else {
        0
    };

    let mut best: Option<ScoreContext> = None;
    for ip in assess.interpretations_waiting_on(winning_tile) {
        let ctx = YakuContext::new(round, seat, hand, assess, ip, winning_tile, win_type);
        let (mut yakus, yakuman, mut fan) = registry.evaluate(&ctx);
        if yakus.is_empty() {
            continue; // 無役
        }

        let fu = calc_fu(&ctx);
        if yakuman == 0 {
            for (name, n) in [
                ("ドラ", n_dora),
                ("赤ドラ", n_red_dora),
                ("裏ドラ", n_ura_dora),
            ] {
                if n != 0 {
                    fan += n;
                    yakus.push(Yaku {
                        name: name.to_string(),
                        fan: n,
                    });
                }
            }
        }

        let (points, title) = calc_points(seat.is_dealer(), fu, fan, yakuman);
        let score = if win_type.is_self_drawn() {
            if seat.is_dealer() {
                points.1 * 3
            } else {
                points.1 * 2 + points.2
            }
        } else {
            points.0
        };

        let sc = ScoreContext {
            yakus,
            fu,
            fan,
            yakuman,
            score,
            points,
            title,
            interpretation: ip.clone(),
        };
        let is_better = match &best {
            Some(b) => (sc.score, sc.fan, sc.fu) > (b.score, b.fan, b.fu),
            None => true,
        };
        if is_better {
            best = Some(sc);
        }
    }

    best
}

// 手牌の評価と標準の役一覧による和了判定をまとめて行う
pub fn evaluate_win(
    round: &RoundContext,
    seat: &SeatContext,
    hand: &Hand,
    winning_tile: Tile,
    win_type: WinType,
) -> Option<ScoreContext> {
    let a = assess(hand);
    evaluate_hand(
        round,
        seat,
        hand,
        &a,
        winning_tile,
        win_type,
        &YakuRegistry::standard(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::interpretation::{HandShape, WaitType};
    use crate::util::string::{meld_from_string, tiles_from_string};

    fn hand(exp: &str, melds: &[&str]) -> Hand {
        let melds = melds.iter().map(|m| meld_from_string(m).unwrap()).collect();
        Hand::new(tiles_from_string(exp).unwrap(), melds)
    }

    fn t(s: &str) -> Tile {
        Tile::from_symbol(s).unwrap()
    }

    #[test]
    fn test_evaluate_best_interpretation() {
        // 二盃口(3) > 七対子(2)
        let h = hand("m112233p445566z7", &[]);
        let seat = SeatContext {
            seat_wind: WS,
            ..Default::default()
        };
        let sc = evaluate_win(&RoundContext::default(), &seat, &h, t("z7"), WinType::Ron).unwrap();
        assert_eq!(sc.interpretation.shape, HandShape::Normal);
        assert_eq!(sc.fan, 3);
        assert_eq!(sc.fu, 40);
        assert_eq!(sc.score, 5200);
    }

    #[test]
    fn test_evaluate_dora() {
        let h = hand("m234p067s23456s88", &[]);
        let round = RoundContext {
            doras: vec![t("s7")],
            ura_doras: vec![t("m1")],
            ..Default::default()
        };
        let mut seat = SeatContext {
            seat_wind: WS,
            ..Default::default()
        };

        // 断么九, 平和, ドラ2(s8が2枚), 赤ドラ1
        let sc = evaluate_win(&round, &seat, &h, t("s7"), WinType::Ron).unwrap();
        let names: Vec<&str> = sc.yakus.iter().map(|y| y.name.as_str()).collect();
        assert_eq!(names, vec!["断么九", "平和", "ドラ", "赤ドラ"]);
        assert_eq!(sc.fan, 5);
        assert_eq!(sc.score, 8000);
        assert_eq!(sc.title, "満貫");

        // 裏ドラはリーチ時のみ
        seat.is_riichi = true;
        let sc = evaluate_win(&round, &seat, &h, t("s7"), WinType::Ron).unwrap();
        assert_eq!(sc.yakus.last().unwrap().name, "裏ドラ");
        assert_eq!(sc.fan, 7);
        assert_eq!(sc.score, 12000);
    }

    #[test]
    fn test_evaluate_no_yaku() {
        // ドラのみでは和了できない
        let h = hand("m234567s11z33", &["m8+88"]);
        let round = RoundContext {
            doras: vec![t("m7")],
            ..Default::default()
        };
        let sc = evaluate_win(&round, &SeatContext::default(), &h, t("z3"), WinType::Ron);
        assert!(sc.is_none());

        // 和了牌ではない
        let h = hand("m234p567s23456s88", &[]);
        let sc = evaluate_win(&round, &SeatContext::default(), &h, t("s9"), WinType::Tsumo);
        assert!(sc.is_none());
    }

    #[test]
    fn test_evaluate_yakuman() {
        let h = hand("m19p19s19z1234567", &[]);
        let round = RoundContext {
            doras: vec![t("m9")],
            ..Default::default()
        };
        let sc = evaluate_win(&round, &SeatContext::default(), &h, t("m1"), WinType::Tsumo).unwrap();
        assert_eq!(sc.yakuman, 2);
        assert_eq!(sc.fan, 0);
        assert_eq!(sc.score, 96000);
        assert_eq!(sc.points, (96000, 32000, 0));
        assert_eq!(sc.yakus.len(), 1);
    }

    #[test]
    fn test_evaluate_prefers_higher_score() {
        // m3のツモ: 両面(門前自摸+平和 20符2飜) と 辺張(門前自摸 30符1飜)
        let h = hand("m12345p234s678s88", &[]);
        let seat = SeatContext {
            seat_wind: WS,
            ..Default::default()
        };
        let a = assess(&h);
        assert_eq!(a.interpretations_waiting_on(t("m3")).count(), 2);

        let sc = evaluate_win(&RoundContext::default(), &seat, &h, t("m3"), WinType::Tsumo).unwrap();
        assert_eq!(sc.interpretation.wait_type, WaitType::Ryanmen);
        assert_eq!((sc.fu, sc.fan, sc.score), (20, 2, 1500));
        assert_eq!(sc.points, (1300, 400, 700));
    }
}
