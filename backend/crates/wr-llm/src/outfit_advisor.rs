use crate::{CompletionProvider, Result as LlmErrorResult};

use wr_core::{
    ClothingItem, OUTFIT_SYSTEM_INSTRUCTION, OutfitPicks, OutfitSelection, build_outfit_prompt,
    decode_outfit_picks, reconcile,
};

use std::sync::Arc;

/// Runs one AI-assisted selection: prompt, complete, decode, reconcile.
///
/// Any failure ends the attempt. Nothing is retried. An empty catalog never
/// reaches the provider.
#[derive(Clone)]
pub struct OutfitAdvisor {
    provider: Arc<dyn CompletionProvider>,
}

impl OutfitAdvisor {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn suggest(
        &self,
        request: &str,
        catalog: &[ClothingItem],
    ) -> LlmErrorResult<OutfitSelection> {
        let prompt = build_outfit_prompt(request, catalog)?;

        if catalog.is_empty() {
            return Ok(reconcile(catalog, &OutfitPicks::default()));
        }

        let text = self
            .provider
            .complete(OUTFIT_SYSTEM_INSTRUCTION, &prompt)
            .await?;

        let picks = decode_outfit_picks(&text).inspect_err(|e| {
            log::warn!("{} returned an undecodable outfit: {}", self.provider.name(), e);
        })?;

        let selection = reconcile(catalog, &picks);
        for notice in &selection.notices {
            log::info!("Outfit suggestion notice: {}", notice);
        }

        Ok(selection)
    }
}
