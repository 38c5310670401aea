//! Static travel quote pool with an exclusion-aware random picker.
//!
//! Quotes decorate the cover and the closing page. The picker is a pure
//! function of its seed, so callers that need reproducible documents can
//! fix the seed instead of drawing one from the clock.

use crate::util::time_seed_nanos;

/// One quotation from the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

/// Fallback returned when the pool cannot satisfy a request.
pub const DEFAULT_QUOTE: Quote = Quote {
    text: "Мир — это книга, и тот, кто не путешествует, читает лишь одну её страницу",
    author: "Августин Аврелий",
};

static TRAVEL_QUOTES: [Quote; 10] = [
    DEFAULT_QUOTE,
    Quote {
        text: "Путешествовать — значит жить",
        author: "Ганс Христиан Андерсен",
    },
    Quote {
        text: "Не все те, кто странствует, сбились с пути",
        author: "Дж. Р. Р. Толкин",
    },
    Quote {
        text: "Жизнь — это путешествие, а не пункт назначения",
        author: "Ральф Уолдо Эмерсон",
    },
    Quote {
        text: "Через двадцать лет вы будете больше жалеть о том, чего не сделали, чем о том, что сделали",
        author: "Марк Твен",
    },
    Quote {
        text: "Дорогу осилит идущий",
        author: "Русская пословица",
    },
    Quote {
        text: "Лучше один раз увидеть, чем сто раз услышать",
        author: "Русская пословица",
    },
    Quote {
        text: "Путешествия учат больше, чем что бы то ни было. Иногда один день, проведённый в других местах, даёт больше, чем десять лет жизни дома",
        author: "Анатоль Франс",
    },
    Quote {
        text: "Счастье — это не станция назначения, а способ путешествовать",
        author: "Маргарет Ли Ранбек",
    },
    Quote {
        text: "Каждое путешествие начинается с первого шага",
        author: "Лао-цзы",
    },
];

/// The full quote pool, in order.
pub fn travel_quotes() -> &'static [Quote] {
    &TRAVEL_QUOTES
}

/// Pick a quote at random, optionally excluding one.
///
/// Seeds from the clock; see [`pick_random_quote_seeded`] for the
/// reproducible variant and the exclusion contract.
pub fn pick_random_quote(exclude: Option<&Quote>) -> &'static Quote {
    pick_random_quote_seeded(exclude, time_seed_nanos())
}

/// Pick a quote using the caller's seed, optionally excluding one.
///
/// The pick is uniform over the pool. When it lands on `exclude` (by
/// text + author equality), a single wrapping scan finds the next entry
/// that differs. Bounded by construction: a pool where every entry equals
/// `exclude` returns the original pick, and an empty pool returns
/// [`DEFAULT_QUOTE`]. An `exclude` absent from the pool excludes nothing.
pub fn pick_random_quote_seeded(exclude: Option<&Quote>, seed: u64) -> &'static Quote {
    let pool = travel_quotes();
    if pool.is_empty() {
        return &DEFAULT_QUOTE;
    }

    let mut state = seed;
    state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    let start = (state >> 33) as usize % pool.len();

    let Some(excluded) = exclude else {
        return &pool[start];
    };

    for offset in 0..pool.len() {
        let candidate = &pool[(start + offset) % pool.len()];
        if candidate != excluded {
            return candidate;
        }
    }
    &pool[start]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pool_is_nonempty_and_distinct() {
        let pool = travel_quotes();
        assert!(pool.len() >= 2);
        for (i, a) in pool.iter().enumerate() {
            for b in &pool[i + 1..] {
                assert_ne!(a, b, "pool entries must be distinct");
            }
        }
    }

    #[test]
    fn test_seeded_pick_is_reproducible() {
        let a = pick_random_quote_seeded(None, 42);
        let b = pick_random_quote_seeded(None, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_exclusion_skips_matching_entry() {
        let first = &travel_quotes()[0];
        for seed in 0..200u64 {
            let picked = pick_random_quote_seeded(Some(first), seed);
            assert_ne!(picked, first);
        }
    }

    #[test]
    fn test_pool_miss_exclude_returns_defined_quote() {
        let foreign = Quote {
            text: "not in the pool",
            author: "nobody",
        };
        let picked = pick_random_quote_seeded(Some(&foreign), 7);
        assert!(travel_quotes().contains(picked));
    }

    #[test]
    fn test_unseeded_pick_comes_from_pool() {
        let picked = pick_random_quote(None);
        assert!(travel_quotes().contains(picked));
    }

    proptest! {
        #[test]
        fn prop_exclusion_always_differs(seed in any::<u64>(), index in 0usize..10) {
            let excluded = &travel_quotes()[index];
            let picked = pick_random_quote_seeded(Some(excluded), seed);
            prop_assert_ne!(picked, excluded);
        }

        #[test]
        fn prop_pick_is_uniform_over_pool(seed in any::<u64>()) {
            let picked = pick_random_quote_seeded(None, seed);
            prop_assert!(travel_quotes().contains(picked));
        }
    }
}
