//! Elemental types and the type-advantage table

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Rock,
    Thunder,
    Fire,
    Grass,
    Water,
}

/// Ordered (attacker, defender) pairs where the attacker deals double damage.
/// The reverse of each pair deals half.
const ADVANTAGES: [(Element, Element); 8] = [
    (Element::Rock, Element::Thunder),
    (Element::Rock, Element::Fire),
    (Element::Thunder, Element::Water),
    (Element::Water, Element::Rock),
    (Element::Water, Element::Fire),
    (Element::Grass, Element::Rock),
    (Element::Grass, Element::Water),
    (Element::Fire, Element::Grass),
];

pub const ADVANTAGE_MULTIPLIER: f64 = 2.0;
pub const DISADVANTAGE_MULTIPLIER: f64 = 0.5;
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

impl Element {
    /// Returns all elements
    pub fn all() -> [Element; 5] {
        [
            Element::Rock,
            Element::Thunder,
            Element::Fire,
            Element::Grass,
            Element::Water,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Element::Rock => "Rock",
            Element::Thunder => "Thunder",
            Element::Fire => "Fire",
            Element::Grass => "Grass",
            Element::Water => "Water",
        }
    }

    pub fn has_advantage_over(self, defender: Element) -> bool {
        ADVANTAGES.contains(&(self, defender))
    }

    /// Damage multiplier applied to the die roll of an attack against `defender`
    pub fn multiplier_against(self, defender: Element) -> f64 {
        if self.has_advantage_over(defender) {
            ADVANTAGE_MULTIPLIER
        } else if defender.has_advantage_over(self) {
            DISADVANTAGE_MULTIPLIER
        } else {
            NEUTRAL_MULTIPLIER
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advantaged_pairs() {
        assert_eq!(Element::Rock.multiplier_against(Element::Thunder), 2.0);
        assert_eq!(Element::Rock.multiplier_against(Element::Fire), 2.0);
        assert_eq!(Element::Thunder.multiplier_against(Element::Water), 2.0);
        assert_eq!(Element::Water.multiplier_against(Element::Rock), 2.0);
        assert_eq!(Element::Water.multiplier_against(Element::Fire), 2.0);
        assert_eq!(Element::Grass.multiplier_against(Element::Rock), 2.0);
        assert_eq!(Element::Grass.multiplier_against(Element::Water), 2.0);
        assert_eq!(Element::Fire.multiplier_against(Element::Grass), 2.0);
    }

    #[test]
    fn test_disadvantaged_pairs() {
        assert_eq!(Element::Thunder.multiplier_against(Element::Rock), 0.5);
        assert_eq!(Element::Fire.multiplier_against(Element::Water), 0.5);
        assert_eq!(Element::Rock.multiplier_against(Element::Grass), 0.5);
    }

    #[test]
    fn test_mirror_matches_are_neutral() {
        for element in Element::all() {
            assert_eq!(element.multiplier_against(element), 1.0);
        }
        assert_eq!(Element::Thunder.multiplier_against(Element::Fire), 1.0);
        assert_eq!(Element::Grass.multiplier_against(Element::Thunder), 1.0);
    }

    #[test]
    fn test_table_counts() {
        let mut counts = (0, 0, 0);
        for a in Element::all() {
            for b in Element::all() {
                match a.multiplier_against(b) {
                    m if m == 2.0 => counts.0 += 1,
                    m if m == 0.5 => counts.1 += 1,
                    _ => counts.2 += 1,
                }
            }
        }
        assert_eq!(counts, (8, 8, 9));
    }
}
