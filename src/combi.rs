use itertools::Itertools;

use crate::types::{Item, Pair};

/// Distinct items of a basket, in first-seen order.
pub fn dedup_basket<T: Item>(basket: &[T]) -> Vec<&T> {
    basket.iter().unique().collect()
}

/// All unordered pairs of `items`, canonicalised. `items` must already be
/// free of duplicates, otherwise `{A, A}` pairs would come out.
pub fn pair_step<'s, 't, T: Item>(
    items: &'s [&'t T],
) -> impl Iterator<Item = Pair<&'t T>> + 's {
    items
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| Pair::new(a, b))
}
