// 手牌解釈の優劣判定用のビットマスク
// bit 0-3: 刻子(槓子を含む)の数, bit 4-7: 順子の数, bit 8: 雀頭の有無
// 一方のビットが他方の真部分集合であれば、その解釈は劣っている(支配されている)とみなす.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rank(u16);

const SEQUENCE_OFFSET: usize = 4;
const PAIR_BIT: u16 = 1 << 8;

impl Rank {
    pub fn new(n_set: usize, n_sequence: usize, has_pair: bool) -> Self {
        let slots = |n: usize| ((1u16 << n.min(4)) - 1);
        let mut r = slots(n_set) | (slots(n_sequence) << SEQUENCE_OFFSET);
        if has_pair {
            r |= PAIR_BIT;
        }
        Self(r)
    }

    #[inline]
    pub fn bits(self) -> u16 {
        self.0
    }

    // selfがotherの真部分集合
    #[inline]
    pub fn is_strict_subset_of(self, other: Self) -> bool {
        self.0 != other.0 && self.0 & other.0 == self.0
    }
}

#[test]
fn test_rank_subset() {
    let a = Rank::new(1, 2, true);
    let b = Rank::new(2, 2, true);
    let c = Rank::new(0, 3, true);
    let d = Rank::new(4, 0, false);

    assert_eq!(a.bits(), 0b1_0011_0001);
    assert!(a.is_strict_subset_of(b));
    assert!(!b.is_strict_subset_of(a));
    assert!(!a.is_strict_subset_of(a));
    assert!(!a.is_strict_subset_of(c));
    assert!(!c.is_strict_subset_of(a));
    assert!(Rank::default().is_strict_subset_of(d));
    assert_eq!(Rank::new(5, 0, false), Rank::new(4, 0, false));
}
