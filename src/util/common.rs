use crate::model::*;

pub fn inc_tile(tt: &mut TileTable, tile: Tile) {
    let t = tile;
    tt[t.0][t.1] += 1;
    if t.1 == 0 {
        // 0は赤5のフラグなので本来の5をたてる
        tt[t.0][5] += 1;
    }
}

pub fn tiles_to_tile_table(tiles: &[Tile]) -> TileTable {
    let mut tt = TileTable::default();
    for &t in tiles {
        inc_tile(&mut tt, t);
    }
    tt
}

// ドラ表示牌から実際のドラを返却
pub fn dora_from_indicator(d: Tile) -> Tile {
    let ni = if d.is_hornor() {
        match d.1 {
            WN => WE,
            DR => DW,
            i => i + 1,
        }
    } else {
        match d.n() {
            9 => 1,
            n => n + 1,
        }
    };
    Tile(d.0, ni)
}

// ドラ表示牌によるドラの数を勘定 (赤5は含まない)
pub fn count_dora(tiles: &[Tile], indicators: &[Tile]) -> usize {
    let mut n_dora = 0;
    for &d in indicators {
        let dora = dora_from_indicator(d);
        n_dora += tiles.iter().filter(|&&t| t == dora).count();
    }
    n_dora
}

#[test]
fn test_dora_from_indicator() {
    assert_eq!(dora_from_indicator(Tile(TM, 9)), Tile(TM, 1));
    assert_eq!(dora_from_indicator(Tile(TP, 0)), Tile(TP, 6));
    assert_eq!(dora_from_indicator(Tile(TZ, WN)), Tile(TZ, WE));
    assert_eq!(dora_from_indicator(Tile(TZ, DR)), Tile(TZ, DW));
    assert_eq!(dora_from_indicator(Tile(TZ, DW)), Tile(TZ, DG));
}

#[test]
fn test_count_dora() {
    let tiles = vec![Tile(TS, 5), Tile(TS, 0), Tile(TS, 6), Tile(TZ, WE)];
    assert_eq!(count_dora(&tiles, &[Tile(TS, 4)]), 2);
    assert_eq!(count_dora(&tiles, &[Tile(TS, 4), Tile(TZ, WN)]), 3);
    assert_eq!(count_dora(&tiles, &[]), 0);

    let tt = tiles_to_tile_table(&tiles);
    assert_eq!(tt[TS][5], 2);
    assert_eq!(tt[TS][0], 1);
}
