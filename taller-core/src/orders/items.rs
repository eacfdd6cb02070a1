//! Item editing on an order's owned item list
//!
//! Insert/remove by index with sequential renumbering afterward, keeping
//! the non-empty invariant. Callers own the vector and persist the order
//! after editing.

use shared::models::{ItemInput, OrderItem};
use shared::{DomainError, DomainResult};

use crate::validation::{
    MAX_ITEM_TEXT_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};

/// Validate an item's required text fields and length limits
pub fn validate_item(input: &ItemInput) -> DomainResult<()> {
    validate_required_text(&input.article_type, "articleType", MAX_ITEM_TEXT_LEN)?;
    validate_required_text(&input.services, "services", MAX_ITEM_TEXT_LEN)?;
    validate_required_text(&input.problem_description, "problemDescription", MAX_NOTE_LEN)?;
    validate_optional_text(&input.solution_details, "solutionDetails", MAX_NOTE_LEN)?;
    Ok(())
}

/// Reassign `item_number` sequentially (1..N) following current order
pub fn renumber(items: &mut [OrderItem]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.item_number = index as i32 + 1;
    }
}

/// Append a new item to the end of the list
pub fn push_item(items: &mut Vec<OrderItem>, input: &ItemInput) -> DomainResult<()> {
    insert_item(items, items.len(), input)
}

/// Insert a new item at `index`, shifting later items
pub fn insert_item(items: &mut Vec<OrderItem>, index: usize, input: &ItemInput) -> DomainResult<()> {
    validate_item(input)?;
    if index > items.len() {
        return Err(DomainError::validation(format!(
            "item index {index} out of bounds (len {})",
            items.len()
        )));
    }
    items.insert(
        index,
        OrderItem {
            id: None,
            item_number: 0, // assigned by renumber below
            article_type: input.article_type.clone(),
            services: input.services.clone(),
            problem_description: input.problem_description.clone(),
            solution_details: input.solution_details.clone(),
        },
    );
    renumber(items);
    Ok(())
}

/// Remove the item at `index`, keeping at least one item on the order
pub fn remove_item(items: &mut Vec<OrderItem>, index: usize) -> DomainResult<OrderItem> {
    if index >= items.len() {
        return Err(DomainError::validation(format!(
            "item index {index} out of bounds (len {})",
            items.len()
        )));
    }
    if items.len() == 1 {
        return Err(DomainError::BusinessRule(
            "an order must keep at least one item".to_string(),
        ));
    }
    let removed = items.remove(index);
    renumber(items);
    Ok(removed)
}
