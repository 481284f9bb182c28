use crate::core::resolver::CardResolver;
use crate::core::{CardStore, CardTable, Clock, ResolvedCard, Result};
use std::sync::Arc;

/// Shared entry point for the page and the JSON API. The table is reloaded on every call.
#[derive(Clone)]
pub struct MotivationService {
    store: Arc<dyn CardStore>,
    clock: Arc<dyn Clock>,
    resolver: CardResolver,
}

impl MotivationService {
    pub fn new(store: Arc<dyn CardStore>, clock: Arc<dyn Clock>, resolver: CardResolver) -> Self {
        Self {
            store,
            clock,
            resolver,
        }
    }

    async fn load_table(&self) -> Result<CardTable> {
        let table = self.store.load().await?;
        tracing::debug!(
            "Card table has {} cards for {}",
            table.card_count(self.resolver.year()),
            self.resolver.year()
        );
        Ok(table)
    }

    pub async fn today(&self) -> Result<ResolvedCard> {
        let table = self.load_table().await?;
        let now = self.clock.today();
        tracing::debug!("Resolving card for today: {}", now);

        let resolved = self.resolver.resolve_today(&table, now)?;
        if resolved.is_fallback {
            tracing::warn!(
                "No card for {}/{} in {}, serving the first card in the table",
                resolved.month,
                resolved.day,
                resolved.year
            );
        }
        Ok(resolved)
    }

    pub async fn for_date(&self, month: &str, day: &str) -> Result<ResolvedCard> {
        let table = self.load_table().await?;
        tracing::debug!("Resolving card for {}/{}", month, day);
        self.resolver.resolve_explicit(&table, month, day)
    }
}
