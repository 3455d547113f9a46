//! Sentence scoring by keyword coverage

use crate::types::{Keyword, ScoredUnit, TextUnit};

/// Constant bonus added to every score.
///
/// Ordering ties are broken by unit index, so this never changes the
/// ranking; it only keeps every score strictly positive.
pub const DEFAULT_POSITION_WEIGHT: f64 = 0.15;

/// Score a unit: keywords contained in its lowercased text plus `position_weight`.
pub fn score_unit<'a>(
    unit: &'a TextUnit,
    keywords: &[Keyword],
    position_weight: f64,
) -> ScoredUnit<'a> {
    let lowered = unit.text.to_lowercase();
    let coverage = keywords
        .iter()
        .filter(|kw| lowered.contains(kw.term.as_str()))
        .count();

    ScoredUnit {
        unit,
        score: coverage as f64 + position_weight,
    }
}

/// Score every unit and sort by descending score, earlier units first on ties.
pub fn rank_units<'a>(
    units: &'a [TextUnit],
    keywords: &[Keyword],
    position_weight: f64,
) -> Vec<ScoredUnit<'a>> {
    let mut scored: Vec<ScoredUnit<'a>> = units
        .iter()
        .map(|unit| score_unit(unit, keywords, position_weight))
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.index().cmp(&b.index()))
    });
    scored
}
