//! Property tests for combat arithmetic, the type table and the inventory

use pocket_trainer::battle::{run_rounds, Battlefield};
use pocket_trainer::combat::{BattleActionResult, Element, Exchange};
use pocket_trainer::core::{GameRng, Pacing};
use pocket_trainer::entity::{Creature, Inventory, Item};
use pocket_trainer::ui::{AutoPilot, Console};
use proptest::prelude::*;

fn element() -> impl Strategy<Value = Element> {
    prop::sample::select(Element::all().to_vec())
}

proptest! {
    #[test]
    fn prop_hit_reduces_life_by_margin(life in 0u32..500, strength in 0u32..500, resistance in 0u32..500) {
        let mut c = Creature::with_stats("Onyx", Element::Rock, 5, life, 5, 5, 5);
        c.get_hit(strength, resistance);
        if strength > resistance {
            prop_assert_eq!(c.life, life.saturating_sub(strength - resistance));
        } else {
            prop_assert_eq!(c.life, life);
        }
    }

    #[test]
    fn prop_commit_never_raises_stats(
        strength in 0u32..100,
        resistance in 0u32..100,
        kind in 0usize..3,
    ) {
        let before = Creature::with_stats("Goldeen", Element::Water, 5, 40, 8, 8, 8);
        let ex = Exchange::new(&before, strength, resistance);
        let result = match kind {
            0 => BattleActionResult::Hit(ex),
            1 => BattleActionResult::Weakened(ex),
            _ => BattleActionResult::Scared(ex),
        };
        let mut after = before.clone();
        result.commit(&mut after);
        prop_assert!(after.life <= before.life);
        prop_assert!(after.strength <= before.strength);
        prop_assert!(after.defense <= before.defense);
        prop_assert_eq!(after.agility, before.agility);
    }

    #[test]
    fn prop_type_table_is_complementary(a in element(), b in element()) {
        let forward = a.multiplier_against(b);
        let backward = b.multiplier_against(a);
        if forward == 2.0 {
            prop_assert_eq!(backward, 0.5);
        } else if forward == 0.5 {
            prop_assert_eq!(backward, 2.0);
        } else {
            prop_assert_eq!(forward, 1.0);
            prop_assert_eq!(backward, 1.0);
        }
    }

    #[test]
    fn prop_inventory_add_has_toss(preloaded in 0usize..5) {
        let mut inv = Inventory::new();
        for _ in 0..preloaded {
            inv.add(Item::Pokeball);
        }
        inv.add(Item::Pokeball);
        prop_assert!(inv.has(Item::Pokeball));

        for _ in 0..=preloaded {
            prop_assert!(inv.toss(Item::Pokeball));
        }
        prop_assert!(!inv.has(Item::Pokeball));
    }

    #[test]
    fn prop_battles_terminate(seed in any::<u64>(), trainer_level in 1u32..10, wild_level in 1u32..10) {
        let mut rng = GameRng::new(seed);
        let mut trainer = Creature::generate("Squirtle", Some(trainer_level), &mut rng);
        trainer.set_owner(Some("Ash".into()));
        let wild = Creature::generate("Pikachu", Some(wild_level), &mut rng);

        let mut field = Battlefield::new(trainer, wild);
        let mut console = Console::new(AutoPilot::new(seed), Pacing::instant());
        let rounds = run_rounds(&mut field, &mut console, &mut rng).unwrap();

        prop_assert!(rounds >= 1);
        prop_assert!(!field.both_alive());
    }
}
