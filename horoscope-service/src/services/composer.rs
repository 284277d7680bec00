//! Per-sign message composition: fetch, translate, decorate, or fall back.

use crate::models::ZodiacSign;
use crate::services::content::{
    decorate, fetch_fallback, select_template, select_translation_fallback,
};
use crate::services::providers::{HoroscopeProvider, TranslationProvider};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

pub const SOURCE_LANGUAGE: &str = "en";
pub const TARGET_LANGUAGE: &str = "es";

pub struct MessageComposer {
    horoscope: Arc<dyn HoroscopeProvider>,
    translator: Arc<dyn TranslationProvider>,
}

impl MessageComposer {
    pub fn new(
        horoscope: Arc<dyn HoroscopeProvider>,
        translator: Arc<dyn TranslationProvider>,
    ) -> Self {
        Self {
            horoscope,
            translator,
        }
    }

    pub async fn compose(&self, sign: ZodiacSign) -> String {
        let mut rng = StdRng::from_entropy();
        self.compose_with(sign, &mut rng).await
    }

    /// Never fails: a fetch failure yields the sign's fixed fallback, a translation
    /// failure yields one of its pre-written Spanish messages and drops the fetched text.
    pub async fn compose_with<R>(&self, sign: ZodiacSign, rng: &mut R) -> String
    where
        R: Rng + Send + ?Sized,
    {
        let english = match self.horoscope.fetch(sign).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(sign = %sign, error = %e, "Error fetching horoscope");
                return fetch_fallback(sign).into_owned();
            }
        };

        match self
            .translator
            .translate(&english, SOURCE_LANGUAGE, TARGET_LANGUAGE)
            .await
        {
            Ok(spanish) => {
                tracing::info!(sign = %sign, "Successfully fetched and translated horoscope");
                decorate(&select_template(sign, rng), &spanish)
            }
            Err(e) => {
                tracing::error!(sign = %sign, error = %e, "Error translating horoscope");
                select_translation_fallback(sign, rng).into_owned()
            }
        }
    }
}
