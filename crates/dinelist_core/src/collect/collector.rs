//! Line-oriented interactive collection of one restaurant draft.
//!
//! # Responsibility
//! - Ask for every field in a fixed order over any `BufRead`/`Write` pair.
//! - Apply defaults, list parsing and yes/no coercion.
//! - Surface advisory warnings for unknown areas, cuisines and price tiers,
//!   and for URLs typed without a scheme.
//!
//! # Invariants
//! - Prompts are strictly sequential; nothing is read ahead.
//! - Required fields left empty abort collection; there is no re-prompt.
//! - Optional fields never abort collection; odd values fall back with a warning.
//! - Closed input is read as an empty answer.

use crate::collect::input::{optional, or_default, parse_bool, parse_list};
use crate::model::restaurant::{is_http_url, PriceTier};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

/// Maximum suggestions printed in one prompt hint.
const MAX_HINTS: usize = 12;

/// Collected operator answers before slug assignment and photo derivation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RestaurantDraft {
    pub name: String,
    /// Operator-supplied slug seed; empty means "derive from name".
    pub slug_seed: String,
    pub area_key: String,
    pub address: String,
    pub price: PriceTier,
    pub cuisines: Vec<String>,
    pub vibes: Vec<String>,
    pub good_for: Vec<String>,
    pub short_blurb: String,
    pub long_blurb: String,
    pub must_try: Vec<String>,
    pub website: Option<String>,
    pub menu_url: Option<String>,
    pub featured: bool,
}

/// Suggestion lists loaded from the reference tables.
///
/// An empty list disables hints and unknown-value warnings for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions {
    pub area_keys: Vec<String>,
    pub cuisines: Vec<String>,
}

/// Collection errors.
#[derive(Debug)]
pub enum CollectError {
    /// A required field was empty after defaulting.
    RequiredInputMissing(&'static str),
    Io(std::io::Error),
}

impl Display for CollectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequiredInputMissing(field) => write!(f, "{field} is required"),
            Self::Io(err) => write!(f, "failed to read operator input: {err}"),
        }
    }
}

impl Error for CollectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RequiredInputMissing(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CollectError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Prompt/answer channel over a reader and a writer.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `label` and reads one answer line (without the line ending).
    pub fn ask(&mut self, label: &str) -> Result<String, CollectError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Writes one informational line to the operator.
    pub fn say(&mut self, line: &str) -> Result<(), CollectError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Gives back the writer, e.g. to print the run summary.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }
}

/// Runs the full prompt sequence and returns the draft.
///
/// # Errors
/// - `RequiredInputMissing` for an empty name, area key or cuisine list.
/// - `Io` when reading input or writing prompts fails.
pub fn collect_draft<R: BufRead, W: Write>(
    prompter: &mut LinePrompter<R, W>,
    suggestions: &Suggestions,
) -> Result<RestaurantDraft, CollectError> {
    let name = required(prompter.ask("Restaurant name")?, "name")?;
    let slug_seed = prompter
        .ask("Slug (leave blank to derive from name)")?
        .trim()
        .to_string();

    let area_label = with_hints("Area key", &suggestions.area_keys);
    let area_key = required(prompter.ask(&area_label)?, "area key")?;
    if !suggestions.area_keys.is_empty() && !suggestions.area_keys.contains(&area_key) {
        warn!("event=collect_area module=collect status=warn reason=unknown_area_key");
        prompter.say(&format!(
            "warning: area key `{area_key}` is not in the area table; keeping it anyway"
        ))?;
    }

    let address = prompter.ask("Address")?.trim().to_string();

    let price_raw = or_default(
        &prompter.ask(&format!("Price tier [{}]", PriceTier::default()))?,
        PriceTier::default().symbol(),
    );
    let price = match PriceTier::from_symbol(&price_raw) {
        Some(price) => price,
        None => {
            warn!("event=collect_price module=collect status=warn reason=unknown_price_tier");
            prompter.say(&format!(
                "warning: price tier `{}` is not one of $, $$, $$$, $$$$; using {}",
                price_raw.trim(),
                PriceTier::default()
            ))?;
            PriceTier::default()
        }
    };

    let cuisine_label = with_hints("Cuisines (comma-separated)", &suggestions.cuisines);
    let cuisines = parse_list(&prompter.ask(&cuisine_label)?);
    if cuisines.is_empty() {
        return Err(CollectError::RequiredInputMissing("at least one cuisine"));
    }
    if !suggestions.cuisines.is_empty() {
        for cuisine in &cuisines {
            let known = suggestions
                .cuisines
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(cuisine));
            if !known {
                warn!("event=collect_cuisine module=collect status=warn reason=unknown_cuisine");
                prompter.say(&format!(
                    "warning: cuisine `{cuisine}` is not in the cuisine table; keeping it anyway"
                ))?;
            }
        }
    }

    let vibes = parse_list(&prompter.ask("Vibes (comma-separated)")?);
    let good_for = parse_list(&prompter.ask("Good for (comma-separated)")?);
    let short_blurb = prompter.ask("One-sentence blurb")?.trim().to_string();
    let long_blurb = prompter.ask("Longer blurb")?.trim().to_string();
    let must_try = parse_list(&prompter.ask("Must-try items (comma-separated)")?);
    let website = optional_url(prompter, "Website URL (optional)")?;
    let menu_url = optional_url(prompter, "Menu URL (optional)")?;
    let featured = parse_bool(&prompter.ask("Featured? [y/N]")?, false);

    info!(
        "event=collect_draft module=collect status=ok cuisines={} vibes={} good_for={} must_try={} featured={}",
        cuisines.len(),
        vibes.len(),
        good_for.len(),
        must_try.len(),
        featured
    );

    Ok(RestaurantDraft {
        name,
        slug_seed,
        area_key,
        address,
        price,
        cuisines,
        vibes,
        good_for,
        short_blurb,
        long_blurb,
        must_try,
        website,
        menu_url,
        featured,
    })
}

fn required(raw: String, field: &'static str) -> Result<String, CollectError> {
    optional(&raw).ok_or(CollectError::RequiredInputMissing(field))
}

/// Asks for an optional URL; a value typed without a scheme gets `https://`.
fn optional_url<R: BufRead, W: Write>(
    prompter: &mut LinePrompter<R, W>,
    label: &str,
) -> Result<Option<String>, CollectError> {
    let Some(url) = optional(&prompter.ask(label)?) else {
        return Ok(None);
    };
    if is_http_url(&url) || url.contains("://") {
        return Ok(Some(url));
    }
    let normalized = format!("https://{url}");
    warn!("event=collect_url module=collect status=warn reason=missing_scheme");
    prompter.say(&format!("warning: url `{url}` has no scheme; saving `{normalized}`"))?;
    Ok(Some(normalized))
}

fn with_hints(label: &str, hints: &[String]) -> String {
    if hints.is_empty() {
        return label.to_string();
    }
    let shown = hints
        .iter()
        .take(MAX_HINTS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if hints.len() > MAX_HINTS {
        format!("{label} [known: {shown}, ... +{} more]", hints.len() - MAX_HINTS)
    } else {
        format!("{label} [known: {shown}]")
    }
}

#[cfg(test)]
mod tests {
    use super::with_hints;

    #[test]
    fn hints_are_omitted_when_unavailable() {
        assert_eq!(with_hints("Area key", &[]), "Area key");
    }

    #[test]
    fn hints_are_capped() {
        let many: Vec<String> = (0..15).map(|i| format!("a{i}")).collect();
        let label = with_hints("Area key", &many);
        assert!(label.contains("a11"));
        assert!(!label.contains("a12,"));
        assert!(label.ends_with("+3 more]"));
    }
}
