use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{de, ser};

use super::*;
use crate::util::misc::Res;
use crate::util::string::{tile_number_from_char, tile_type_from_char};

// 牌 (type index, number index)
// number index 0は赤5. 比較(==, Ord, Hash)は牌の種類のみで行い赤5と通常の5を区別しない.
// 赤5を区別する必要がある場合はeq_strictを使用すること.
#[derive(Clone, Copy)]
pub struct Tile(pub Type, pub Tnum);

impl Tile {
    pub fn from_symbol(s: &str) -> Res<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            Err(format!("invalid tile symbol: {}", s))?;
        }
        let t = tile_type_from_char(chars[0])?;
        let n = tile_number_from_char(chars[1])?;
        if (t == TZ && !(WE..=DR).contains(&n)) || (t != TZ && n >= TNUM) {
            Err(format!("invalid tile symbol: {}", s))?;
        }
        Ok(Self(t, n))
    }

    // 赤5の場合,通常の5を返却. それ以外の場合はコピーをそのまま返却.
    #[inline]
    pub fn to_normal(self) -> Self {
        if self.1 == 0 {
            Self(self.0, 5)
        } else {
            self
        }
    }

    // number index(赤5考慮)を返却
    #[inline]
    pub fn n(&self) -> Tnum {
        if self.1 == 0 {
            5
        } else {
            self.1
        }
    }

    #[inline]
    pub fn is_red5(&self) -> bool {
        self.0 != TZ && self.1 == 0
    }

    // 赤5を区別した比較
    #[inline]
    pub fn eq_strict(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 == other.1
    }

    // 数牌
    #[inline]
    pub fn is_suit(&self) -> bool {
        self.0 != TZ
    }

    // 字牌
    #[inline]
    pub fn is_hornor(&self) -> bool {
        self.0 == TZ
    }

    // 1,9牌
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.0 != TZ && (self.1 == 1 || self.1 == 9)
    }

    // 么九牌
    #[inline]
    pub fn is_end(&self) -> bool {
        self.0 == TZ || self.1 == 1 || self.1 == 9
    }

    // 風牌
    #[inline]
    pub fn is_wind(&self) -> bool {
        self.0 == TZ && self.1 <= WN
    }

    // 三元牌
    #[inline]
    pub fn is_doragon(&self) -> bool {
        self.0 == TZ && DW <= self.1 && self.1 <= DR
    }

    // 同じ種別でd個先の数牌 (範囲外や字牌の場合はNone)
    pub fn offset(&self, d: isize) -> Option<Self> {
        if self.is_hornor() {
            return None;
        }
        let n = self.n() as isize + d;
        if (1..=9).contains(&n) {
            Some(Self(self.0, n as Tnum))
        } else {
            None
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ['m', 'p', 's', 'z'][self.0], self.1)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.n() == other.n()
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
        self.n().hash(state);
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.0, self.n()).cmp(&(other.0, other.n()))
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Tile::from_symbol(v).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

// [TileTable]
// 牌種別ごとの枚数表. index 0は赤5の枚数 (5の枚数にも含む)
pub type TileRow = [usize; TNUM];
pub type TileTable = [TileRow; TYPE];

#[test]
fn test_tile_equality() {
    let red = Tile(TM, 0);
    let five = Tile(TM, 5);
    assert_eq!(red, five);
    assert!(!red.eq_strict(&five));
    assert!(red.eq_strict(&Tile(TM, 0)));
    assert_eq!(red.cmp(&five), Ordering::Equal);
    assert!(Tile(TM, 4) < red && red < Tile(TM, 6));
    assert!(Tile(TM, 9) < Tile(TP, 1));
}

#[test]
fn test_tile_symbol() {
    let t = Tile::from_symbol("p0").unwrap();
    assert!(t.is_red5());
    assert_eq!(t.to_string(), "p0");
    assert!(Tile::from_symbol("z8").is_err());
    assert!(Tile::from_symbol("x1").is_err());

    let json = serde_json::to_string(&vec![Tile(TS, 7), Tile(TZ, DR)]).unwrap();
    assert_eq!(json, r#"["s7","z7"]"#);
    let tiles: Vec<Tile> = serde_json::from_str(&json).unwrap();
    assert_eq!(tiles, vec![Tile(TS, 7), Tile(TZ, DR)]);
}

#[test]
fn test_tile_offset() {
    assert_eq!(Tile(TP, 8).offset(1), Some(Tile(TP, 9)));
    assert_eq!(Tile(TP, 9).offset(1), None);
    assert_eq!(Tile(TS, 0).offset(-2), Some(Tile(TS, 3)));
    assert_eq!(Tile(TZ, WE).offset(1), None);
}
