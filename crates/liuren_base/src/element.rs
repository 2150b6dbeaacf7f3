//! Five elements (wuxing) and yin/yang polarity.
//!
//! The generation cycle runs wood → fire → earth → metal → water → wood.
//! The conquest cycle runs metal ⊣ wood ⊣ earth ⊣ water ⊣ fire ⊣ metal,
//! i.e. each element conquers the one two steps ahead of it in generation.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generation order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Chinese name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// English name of the element.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// 0-based index in generation order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one generates.
    pub const fn generates(self) -> Element {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one conquers.
    pub const fn conquers(self) -> Element {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }

    /// The element that conquers this one.
    pub const fn conquered_by(self) -> Element {
        ALL_ELEMENTS[((self.index() + 3) % 5) as usize]
    }

    /// True if `self` conquers `other`.
    pub const fn is_conquering(self, other: Element) -> bool {
        self.conquers().index() == other.index()
    }

    /// True if either element conquers the other.
    pub const fn in_conflict(self, other: Element) -> bool {
        self.is_conquering(other) || other.is_conquering(self)
    }

    /// Branches standing for this element when a conquest target is needed.
    ///
    /// Earth has four branches, the others two. Callers take the first entry.
    pub fn representative_branches(self) -> &'static [Branch] {
        match self {
            Self::Metal => &[Branch::Shen, Branch::You],
            Self::Wood => &[Branch::Yin, Branch::Mao],
            Self::Water => &[Branch::Zi, Branch::Hai],
            Self::Fire => &[Branch::Si, Branch::Wu],
            Self::Earth => &[Branch::Chou, Branch::Chen, Branch::Wei, Branch::Xu],
        }
    }

    /// First representative branch.
    pub fn representative_branch(self) -> Branch {
        self.representative_branches()[0]
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Chinese name (阳 / 阴).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }

    /// Polarity of an even (yang) or odd (yin) cycle position.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conquest_cycle() {
        assert_eq!(Element::Metal.conquers(), Element::Wood);
        assert_eq!(Element::Wood.conquers(), Element::Earth);
        assert_eq!(Element::Earth.conquers(), Element::Water);
        assert_eq!(Element::Water.conquers(), Element::Fire);
        assert_eq!(Element::Fire.conquers(), Element::Metal);
    }

    #[test]
    fn generation_cycle() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn conquered_by_inverts_conquers() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.conquers().conquered_by(), e);
        }
    }

    #[test]
    fn conflict_is_symmetric_and_excludes_self() {
        for a in ALL_ELEMENTS {
            assert!(!a.in_conflict(a));
            for b in ALL_ELEMENTS {
                assert_eq!(a.in_conflict(b), b.in_conflict(a));
            }
        }
    }

    #[test]
    fn each_element_conflicts_with_two_others() {
        for a in ALL_ELEMENTS {
            let n = ALL_ELEMENTS.iter().filter(|&&b| a.in_conflict(b)).count();
            assert_eq!(n, 2, "{}", a.english_name());
        }
    }

    #[test]
    fn representative_branches_share_element() {
        for e in ALL_ELEMENTS {
            for b in e.representative_branches() {
                assert_eq!(b.element(), e);
            }
        }
        assert_eq!(Element::Earth.representative_branch(), Branch::Chou);
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(Polarity::from_index(0), Polarity::Yang);
        assert_eq!(Polarity::from_index(7), Polarity::Yin);
    }
}
