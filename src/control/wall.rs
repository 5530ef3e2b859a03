use rand::prelude::*;

use crate::model::*;

// 136枚の牌をシード値に従ってシャッフルして返却
// n_red5: 各数牌の5のうち赤5にする枚数
pub fn create_wall(seed: u64, n_red5: usize) -> Vec<Tile> {
    assert!(n_red5 <= TILE);
    let mut wall = Vec::new();
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            if ti == TZ && ni > DR {
                break;
            }
            for n in 0..TILE {
                let ni2 = if ti != TZ && ni == 5 && n < n_red5 {
                    0
                } else {
                    ni
                }; // 赤5
                wall.push(Tile(ti, ni2));
            }
        }
    }

    let mut rng: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(seed);
    wall.shuffle(&mut rng);
    wall
}

// 牌山の先頭からn枚を配牌としてソート済みの手牌にする
pub fn deal_hand(wall: &[Tile], n: usize) -> Hand {
    Hand::new(wall[..n].to_vec(), vec![])
}

#[test]
fn test_create_wall() {
    let wall = create_wall(0, 1);
    assert_eq!(wall.len(), 136);
    assert_eq!(wall.iter().filter(|t| t.is_red5()).count(), 3);
    assert_eq!(wall.iter().filter(|t| **t == Tile(TP, 5)).count(), TILE);
    assert_eq!(wall, create_wall(0, 1));
    assert_ne!(wall, create_wall(1, 1));

    let hand = deal_hand(&wall, 13);
    assert_eq!(hand.tiles().len(), 13);
    assert!(hand.tiles().windows(2).all(|w| w[0] <= w[1]));
}
