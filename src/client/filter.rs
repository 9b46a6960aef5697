// src/client/filter.rs

use crate::models::ProductView;
use uuid::Uuid;

/// Derives the filtered product view from the full list. Pure and
/// synchronous: the text query is a case-insensitive substring match against
/// name and description, AND-combined with an exact category filter. An
/// empty query and an absent category are both pass-through.
pub fn filter_products(products: &[ProductView], query: &str, category_id: Option<Uuid>) -> Vec<ProductView> {
  let needle = query.trim().to_lowercase();
  products
    .iter()
    .filter(|product| {
      let text_matches = needle.is_empty()
        || product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle);
      let category_matches = category_id.map_or(true, |id| product.category_id == id);
      text_matches && category_matches
    })
    .cloned()
    .collect()
}
