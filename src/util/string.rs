use super::misc::{vec_count, Res};
use crate::model::*;

pub fn tile_type_from_char(ch: char) -> Res<Type> {
    match ch {
        'm' => Ok(TM),
        'p' => Ok(TP),
        's' => Ok(TS),
        'z' => Ok(TZ),
        _ => Err(format!("invalid tile type char: {}", ch))?,
    }
}

pub fn tile_type_to_char(ti: Type) -> char {
    match ti {
        TM => 'm',
        TP => 'p',
        TS => 's',
        TZ => 'z',
        _ => panic!("invalid tile type index: {}", ti),
    }
}

pub fn tile_number_from_char(ch: char) -> Res<Tnum> {
    if let Some(i) = ch.to_digit(10) {
        Ok(i as Tnum)
    } else {
        Err(format!("invalid tile number char: {}", ch))?
    }
}

pub fn wind_from_char(ch: char) -> Res<Tnum> {
    Ok(match ch {
        'E' => WE,
        'S' => WS,
        'W' => WW,
        'N' => WN,
        _ => Err(format!("invalid wind char: {}", ch))?,
    })
}

// "m123p406z77" のような表記をパース (0は赤5)
pub fn tiles_from_string(exp: &str) -> Res<Vec<Tile>> {
    let mut tiles = vec![];
    let mut ti = None;
    for ch in exp.chars() {
        match ch {
            'm' | 'p' | 's' | 'z' => ti = Some(tile_type_from_char(ch)?),
            '0'..='9' => {
                let ti = ti.ok_or("tile number before tile type")?;
                let ni = tile_number_from_char(ch)?;
                if ti == TZ && !(WE..=DR).contains(&ni) {
                    Err(format!("invalid honor tile: z{}", ni))?;
                }
                tiles.push(Tile(ti, ni));
            }
            _ => Err(format!("invalid char: '{}'", ch))?,
        }
    }
    Ok(tiles)
}

pub fn tiles_to_string(tiles: &[Tile]) -> String {
    let mut res = String::new();
    let mut last_ti = None;
    for t in tiles {
        if last_ti != Some(t.0) {
            last_ti = Some(t.0);
            res.push(tile_type_to_char(t.0));
        }
        res.push_str(&t.1.to_string());
    }
    res
}

// "m4+56", "z666+", "p5555" のような表記をパース
// '+'は直前の牌が他家から鳴いた牌であることを表す. '+'のない槓子は暗槓.
pub fn meld_from_string(exp: &str) -> Res<Meld> {
    let mut ti = None;
    let mut tiles = vec![];
    let mut n_called = 0;
    for ch in exp.chars() {
        match ch {
            'm' | 'p' | 's' | 'z' => ti = Some(tile_type_from_char(ch)?),
            '+' => {
                if tiles.is_empty() {
                    Err("invalid '+' suffix")?;
                }
                n_called += 1;
            }
            '0'..='9' => {
                let ti = ti.ok_or("tile number before tile type")?;
                tiles.push(Tile(ti, tile_number_from_char(ch)?));
            }
            _ => Err(format!("invalid char: '{}'", ch))?,
        }
    }
    if tiles.len() < 3 {
        Err(format!("invalid meld: '{}'", exp))?;
    }

    let mut nis: Vec<Tnum> = tiles.iter().map(|t| t.n()).collect();
    nis.sort();
    let diffs: Vec<usize> = nis.windows(2).map(|w| w[1] - w[0]).collect();
    let same_type = tiles.iter().all(|t| t.0 == tiles[0].0);

    let meld_type = if !same_type {
        Err(format!("invalid meld: '{}'", exp))?
    } else if diffs.len() == 2 && vec_count(&diffs, &1) == 2 && tiles[0].is_suit() {
        MeldType::Chi
    } else if diffs.len() == 2 && vec_count(&diffs, &0) == 2 {
        MeldType::Pon
    } else if diffs.len() == 3 && vec_count(&diffs, &0) == 3 {
        if n_called == 0 {
            MeldType::Ankan
        } else {
            MeldType::Minkan
        }
    } else {
        Err(format!("invalid meld: '{}'", exp))?
    };

    Ok(Meld::new(meld_type, tiles))
}

#[test]
fn test_tiles_to_string() {
    let hand_str = "p34777s1230567z66";
    let hand = tiles_from_string(hand_str).unwrap();
    assert_eq!(hand.len(), 14);
    assert_eq!(hand_str, tiles_to_string(&hand));
}

#[test]
fn test_tiles_from_string_error() {
    assert!(tiles_from_string("123m").is_err());
    assert!(tiles_from_string("m12x").is_err());
    assert!(tiles_from_string("z18").is_err());
}

#[test]
fn test_meld_from_string() {
    let m = meld_from_string("m4+56").unwrap();
    assert_eq!(m.meld_type, MeldType::Chi);
    assert_eq!(m.tiles, vec![Tile(TM, 4), Tile(TM, 5), Tile(TM, 6)]);

    assert_eq!(meld_from_string("z666+").unwrap().meld_type, MeldType::Pon);
    assert_eq!(meld_from_string("p5055").unwrap().meld_type, MeldType::Ankan);
    assert_eq!(meld_from_string("s2+222").unwrap().meld_type, MeldType::Minkan);
    assert!(meld_from_string("z123+").is_err());
    assert!(meld_from_string("m12").is_err());
}
