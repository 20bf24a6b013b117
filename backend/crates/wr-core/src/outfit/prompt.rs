use crate::{ClothingItem, CoreError, Result as CoreResult};

/// System message sent alongside every outfit prompt.
pub const OUTFIT_SYSTEM_INSTRUCTION: &str = "You are an AI fashion assistant. Analyze the user's \
clothing items and prompt to generate an outfit. Return a JSON object with keys \"top\", \
\"bottom\", \"shoes\" containing the IDs of the selected items. Respond only with the JSON, \
no explanations.";

/// `<id>: <name> (<section>): <color>, <style>, <type>`
pub fn format_catalog_line(item: &ClothingItem) -> String {
    format!(
        "{}: {} ({}): {}, {}, {}",
        item.id, item.name, item.section, item.color, item.style, item.item_type
    )
}

pub fn format_catalog(items: &[ClothingItem]) -> String {
    items
        .iter()
        .map(format_catalog_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Composes the user message for the completion call.
///
/// The request text is trimmed and must not be empty.
pub fn build_outfit_prompt(request: &str, catalog: &[ClothingItem]) -> CoreResult<String> {
    let request = request.trim();
    if request.is_empty() {
        return Err(CoreError::field("prompt", "Prompt cannot be empty"));
    }

    Ok(format!(
        "USER PROMPT: \"{request}\"\n\n\
         USER'S CLOTHING ITEMS:\n{catalog}\n\n\
         INSTRUCTIONS:\n\
         1. Generate an outfit using only the user's clothing items listed above.\n\
         2. Return the outfit as a JSON object with exactly the keys \"top\", \"bottom\" and \"shoes\": \
         {{ \"top\": \"id\", \"bottom\": \"id\", \"shoes\": \"id\" }}. \
         Use null for a slot when no item fits.\n\
         3. Only respond with the JSON, no extra text.",
        catalog = format_catalog(catalog),
    ))
}
