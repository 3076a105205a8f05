//! Font availability resolution
//!
//! Before any text style is created, every weight of the selected family is
//! loaded from the host, one at a time and in catalog order. A weight that
//! fails to load is skipped for the rest of the pass; it never aborts the
//! request.

use std::collections::BTreeSet;

use design_tokens::FontWeightToken;
use style_host::{FontName, HostError, StylingHost};

/// Font variants that loaded successfully during one pass
///
/// Keys have the form `"{family}-{weightName}"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedFontSet {
    keys: BTreeSet<String>,
}

impl LoadedFontSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for a family and weight
    pub fn key(family: &str, weight: &FontWeightToken) -> String {
        format!("{}-{}", family, weight.name)
    }

    /// Whether the weight of `family` loaded
    pub fn contains(&self, family: &str, weight: &FontWeightToken) -> bool {
        self.keys.contains(&Self::key(family, weight))
    }

    /// Number of loaded variants
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing loaded
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Loaded keys in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    fn insert(&mut self, family: &str, weight: &FontWeightToken) {
        self.keys.insert(Self::key(family, weight));
    }
}

impl FromIterator<(String, FontWeightToken)> for LoadedFontSet {
    fn from_iter<I: IntoIterator<Item = (String, FontWeightToken)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (family, weight) in iter {
            set.insert(&family, &weight);
        }
        set
    }
}

/// Outcome of loading every weight of one family
#[derive(Debug, Clone)]
pub struct FontLoadReport {
    family: String,
    outcomes: Vec<(FontWeightToken, Result<(), HostError>)>,
}

impl FontLoadReport {
    /// Family the report covers
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Per-weight outcomes in the order they were attempted
    pub fn outcomes(&self) -> &[(FontWeightToken, Result<(), HostError>)] {
        &self.outcomes
    }

    /// Weights that loaded
    pub fn loaded(&self) -> impl Iterator<Item = &FontWeightToken> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_ok())
            .map(|(weight, _)| weight)
    }

    /// Weights that failed, with the host's reason
    pub fn failed(&self) -> impl Iterator<Item = (&FontWeightToken, &HostError)> {
        self.outcomes
            .iter()
            .filter_map(|(weight, outcome)| outcome.as_ref().err().map(|e| (weight, e)))
    }

    /// Fold the outcomes into the set of usable variants
    pub fn into_loaded_set(self) -> LoadedFontSet {
        let family = self.family;
        self.outcomes
            .into_iter()
            .filter(|(_, outcome)| outcome.is_ok())
            .map(|(weight, _)| (family.clone(), weight))
            .collect()
    }
}

/// Try to load every weight of `family`, recording each outcome
///
/// Attempts run sequentially; the next weight is not tried until the host
/// has answered for the current one.
pub async fn load_font_variants<H>(host: &H, family: &str, weights: &[FontWeightToken]) -> FontLoadReport
where
    H: StylingHost + ?Sized,
{
    let mut outcomes = Vec::with_capacity(weights.len());

    for weight in weights {
        let font = FontName::new(family, weight.name);
        let outcome = host.load_font(&font).await;
        match &outcome {
            Ok(()) => tracing::info!(font = %font, "Loaded font"),
            Err(e) => tracing::warn!(font = %font, error = %e, "Failed to load font"),
        }
        outcomes.push((*weight, outcome));
    }

    FontLoadReport {
        family: family.to_string(),
        outcomes,
    }
}

/// Load every weight of `family` and return the ones that are usable
pub async fn resolve_fonts<H>(host: &H, family: &str, weights: &[FontWeightToken]) -> LoadedFontSet
where
    H: StylingHost + ?Sized,
{
    let report = load_font_variants(host, family, weights).await;
    let loaded = report.into_loaded_set();
    tracing::debug!(family, loaded = loaded.len(), attempted = weights.len(), "Resolved fonts");
    loaded
}
