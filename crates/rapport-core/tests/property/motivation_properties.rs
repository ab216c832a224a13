use proptest::prelude::*;
use rapport_core::{classify, resolve, score, Archetype, CoreDesire, CoreFear};

fn desire_signal() -> impl Strategy<Value = Option<CoreDesire>> {
    prop_oneof![Just(None), prop::sample::select(CoreDesire::ALL.to_vec()).prop_map(Some)]
}

fn fear_signal() -> impl Strategy<Value = Option<CoreFear>> {
    prop_oneof![Just(None), prop::sample::select(CoreFear::ALL.to_vec()).prop_map(Some)]
}

proptest! {
    #[test]
    fn scores_stay_in_allowed_set(desire in desire_signal(), fear in fear_signal()) {
        let table = score(desire, fear);
        for (_, s) in table.iter() {
            prop_assert!(s == 0 || s == 2 || s == 4, "unexpected score {}", s);
        }
        prop_assert!(table.total() <= 4);
    }

    #[test]
    fn classify_matches_resolve(desire in desire_signal(), fear in fear_signal()) {
        prop_assert_eq!(classify(desire, fear), resolve(&score(desire, fear)));
    }

    #[test]
    fn classification_is_idempotent(desire in desire_signal(), fear in fear_signal()) {
        prop_assert_eq!(classify(desire, fear), classify(desire, fear));
        prop_assert_eq!(score(desire, fear), score(desire, fear));
    }

    #[test]
    fn winner_has_max_score(desire in desire_signal(), fear in fear_signal()) {
        let table = score(desire, fear);
        let archetype = resolve(&table);
        if archetype != Archetype::Balanced {
            prop_assert_eq!(table.get(archetype), table.max());
            // nothing earlier in the order reaches the max
            for earlier in Archetype::PROFILED.iter().take_while(|a| **a != archetype) {
                prop_assert!(table.get(*earlier) < table.max());
            }
        } else {
            prop_assert!(table.is_zero());
        }
    }

    #[test]
    fn unknown_strings_carry_no_signal(s in "[a-z]{1,12}") {
        let desire = CoreDesire::from_wire(&s);
        let fear = CoreFear::from_wire(&s);
        if desire.is_none() && fear.is_none() {
            prop_assert_eq!(classify(desire, fear), Archetype::Balanced);
        }
    }
}

#[test]
fn full_grid_is_total() {
    let desires: Vec<Option<CoreDesire>> =
        std::iter::once(None).chain(CoreDesire::ALL.into_iter().map(Some)).collect();
    let fears: Vec<Option<CoreFear>> =
        std::iter::once(None).chain(CoreFear::ALL.into_iter().map(Some)).collect();

    let mut seen = 0;
    for desire in &desires {
        for fear in &fears {
            let archetype = classify(*desire, *fear);
            assert!(Archetype::ALL.contains(&archetype));
            seen += 1;
        }
    }
    assert_eq!(seen, 36);
}
