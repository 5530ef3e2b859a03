use crate::model::{Point, Points};

fn ceil(n: Point) -> Point {
    (n + 99) / 100 * 100
}

// 基本点
fn calc_base_point(fu: usize, fan: usize, yakuman: usize) -> Point {
    (if yakuman == 0 {
        let base = fu * 2_usize.pow(fan as u32 + 2);
        if fan >= 5 || base >= 2000 {
            match fan {
                0..=5 => 2000,   // 満貫
                6..=7 => 3000,   // 跳満
                8..=10 => 4000,  // 倍満
                11..=12 => 6000, // 三倍満
                _ => 8000,       // 数え役満
            }
        } else {
            base
        }
    } else {
        8000 * yakuman
    }) as Point
}

pub fn get_score_title(base_point: Point, yakuman: usize) -> String {
    match yakuman {
        0 => match base_point {
            2000 => "満貫",
            3000 => "跳満",
            4000 => "倍満",
            6000 => "三倍満",
            8000 => "数え役満",
            _ => "",
        },
        1 => "役満",
        2 => "二倍役満",
        3 => "三倍役満",
        4 => "四倍役満",
        5 => "五倍役満",
        6 => "六倍役満",
        _ => "N倍役満",
    }
    .to_string()
}

// 親: (ロン, ツモ・全員の支払い, 0), 子: (ロン, ツモ・子の支払い, ツモ・親の支払い) と役の称号を返却
pub fn calc_points(is_dealer: bool, fu: usize, fan: usize, yakuman: usize) -> (Points, String) {
    let base = calc_base_point(fu, fan, yakuman);
    let title = get_score_title(base, yakuman);
    if is_dealer {
        ((ceil(base * 6), ceil(base * 2), 0), title)
    } else {
        ((ceil(base * 4), ceil(base), ceil(base * 2)), title)
    }
}

#[test]
fn test_calc_points() {
    assert_eq!(calc_points(false, 30, 1, 0).0, (1000, 300, 500));
    assert_eq!(calc_points(false, 40, 3, 0).0, (5200, 1300, 2600));
    assert_eq!(calc_points(false, 25, 4, 0).0, (6400, 1600, 3200));
    assert_eq!(calc_points(true, 30, 4, 0).0, (11600, 3900, 0));
    assert_eq!(calc_points(true, 20, 2, 0).0, (2000, 700, 0));

    // 切り上げ満貫は行わない
    assert_eq!(calc_points(false, 30, 4, 0).0, (7700, 2000, 3900));

    let (points, title) = calc_points(false, 40, 4, 0);
    assert_eq!(points, (8000, 2000, 4000));
    assert_eq!(title, "満貫");

    let (points, title) = calc_points(false, 20, 5, 0);
    assert_eq!(points.0, 8000);
    assert_eq!(title, "満貫");
    assert_eq!(calc_points(false, 30, 7, 0).1, "跳満");
    assert_eq!(calc_points(true, 30, 10, 0).0, (24000, 8000, 0));
    assert_eq!(calc_points(false, 30, 12, 0).1, "三倍満");
    assert_eq!(calc_points(false, 30, 15, 0).1, "数え役満");

    let (points, title) = calc_points(false, 0, 0, 2);
    assert_eq!(points, (64000, 16000, 32000));
    assert_eq!(title, "二倍役満");
}

#[test]
fn test_points_monotonic() {
    let fu_list = [20, 25, 30, 40, 50, 60, 70, 80, 90, 100, 110];
    for is_dealer in [false, true] {
        for fan in 1..=13 {
            let mut prev = 0;
            for fu in fu_list {
                let ron = calc_points(is_dealer, fu, fan, 0).0 .0;
                assert!(ron >= prev, "fu: {}, fan: {}", fu, fan);
                prev = ron;
            }
        }
        for fu in fu_list {
            let mut prev = 0;
            for fan in 1..=13 {
                let ron = calc_points(is_dealer, fu, fan, 0).0 .0;
                assert!(ron >= prev, "fu: {}, fan: {}", fu, fan);
                prev = ron;
            }
        }
        assert!(calc_points(is_dealer, 0, 0, 1).0 .0 < calc_points(is_dealer, 0, 0, 2).0 .0);
    }
}

// cargo test --release print_points_table -- --nocapture
#[test]
fn print_points_table() {
    let fu_list = [20, 25, 30, 40, 50, 60, 70, 80, 90, 100, 110];

    println!("点数計算表 (子) ============================================");
    for fu in fu_list {
        print!("[{fu:3}符] ");
        for fan in 1..=4 {
            let (scores, _) = calc_points(false, fu, fan, 0);
            print!("{fan}飜:{:5}({:4}/{:4}) ", scores.0, scores.1, scores.2)
        }
        println!();
    }
    for fan in 5..=13 {
        let (scores, title) = calc_points(false, 30, fan, 0);
        println!(
            "{fan:2}飜:{:5}({:4}/{:5}) {title}",
            scores.0, scores.1, scores.2
        );
    }
    println!();

    println!("点数計算表 (親) ============================================");
    for fu in fu_list {
        print!("[{fu:3}符] ");
        for fan in 1..=4 {
            let (scores, _) = calc_points(true, fu, fan, 0);
            print!("{fan}飜:{:5}({:4}) ", scores.0, scores.1)
        }
        println!();
    }
    for fan in 5..=13 {
        let (scores, title) = calc_points(true, 30, fan, 0);
        println!("{fan:2}飜:{:5}({:5}) {title}", scores.0, scores.1);
    }
    println!();
}
