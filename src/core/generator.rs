use crate::adapters::fallback::StaticFallback;
use crate::core::composer::PasswordComposer;
use crate::core::retry::RetryPolicy;
use crate::domain::model::{Category, GeneratedPassword, Origin, WordEntry};
use crate::domain::ports::WordSource;
use crate::utils::error::Result;
use std::sync::Arc;

/// Draws an adjective and a noun, then hands them to the composer.
pub struct PasswordGenerator {
    source: Arc<dyn WordSource>,
    fallback: Option<StaticFallback>,
    retry: RetryPolicy,
    composer: PasswordComposer,
}

impl PasswordGenerator {
    pub fn new(
        source: Arc<dyn WordSource>,
        fallback: Option<StaticFallback>,
        retry: RetryPolicy,
        composer: PasswordComposer,
    ) -> Self {
        Self {
            source,
            fallback,
            retry,
            composer,
        }
    }

    pub fn source(&self) -> &Arc<dyn WordSource> {
        &self.source
    }

    pub fn fallback_enabled(&self) -> bool {
        self.fallback.is_some()
    }

    pub async fn generate(&self) -> Result<GeneratedPassword> {
        let (adjective, noun) = tokio::join!(
            self.draw(Category::Adjective),
            self.draw(Category::Noun)
        );
        let (adjective, adjective_origin) = adjective?;
        let (noun, noun_origin) = noun?;

        let origin = if adjective_origin == Origin::Fallback || noun_origin == Origin::Fallback {
            Origin::Fallback
        } else {
            Origin::Wordlist
        };

        let generated = self
            .composer
            .compose(adjective, noun, origin, &mut rand::thread_rng());

        tracing::info!(
            origin = %generated.origin,
            backend = self.source.name(),
            "Password generated (obscured): {}",
            generated.obscured()
        );
        Ok(generated)
    }

    async fn draw(&self, category: Category) -> Result<(WordEntry, Origin)> {
        let source = self.source.as_ref();
        let label = format!("{} {} fetch", source.name(), category);
        let fetched = self
            .retry
            .run(&label, move |_| source.fetch_category(category))
            .await;

        match fetched {
            Ok(entry) => {
                tracing::debug!("Selected {}: {}", category, entry.word);
                Ok((entry, Origin::Wordlist))
            }
            Err(e) if e.allows_fallback() => match &self.fallback {
                Some(fallback) => {
                    tracing::warn!(
                        "🔁 Using fallback {} after backend failure: {}",
                        category,
                        e
                    );
                    let entry = fallback.draw(category, &mut rand::thread_rng())?;
                    Ok((entry, Origin::Fallback))
                }
                None => Err(e),
            },
            Err(e) => Err(e),
        }
    }
}
