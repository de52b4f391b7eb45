use crate::models::TopProduct;

pub const MIN_RANK: i64 = 1;
pub const MAX_RANK: i64 = 3;

/// Related products for `item_id`, at most one per rank in `MIN_RANK..=MAX_RANK`
///
/// Storage may hold several rows for the same rank. The sort is stable, so the
/// row that comes first in table order is the one kept.
pub fn select_top_ranked(rows: &[TopProduct], item_id: i64) -> Vec<&TopProduct> {
    let mut selected: Vec<&TopProduct> = rows
        .iter()
        .filter(|row| row.item_id == item_id && (MIN_RANK..=MAX_RANK).contains(&row.rank))
        .collect();

    selected.sort_by_key(|row| row.rank);
    selected.dedup_by_key(|row| row.rank);

    tracing::debug!(item_id, selected = selected.len(), "Selected top-ranked products");

    selected
}
