//! Smoothie recipe calculator.
//!
//! Every fruit is a [`FruitKind`] with a fixed [`FruitProperties`] row; a recipe
//! is a list of `(fruit, grams)` pairs aggregated into a [`RecipeSummary`].

use crate::utils::error::{ReportError, Result};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Declared alphabetically so that ordered sets list fruits by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FruitKind {
    Apple,
    Banana,
    Lemon,
    Orange,
    Strawberry,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FruitProperties {
    pub citrus: bool,
    pub vitamin_c: f64,
    pub flavour_strength: f64,
}

impl FruitKind {
    pub const ALL: [FruitKind; 5] = [
        FruitKind::Apple,
        FruitKind::Banana,
        FruitKind::Lemon,
        FruitKind::Orange,
        FruitKind::Strawberry,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FruitKind::Apple => "apple",
            FruitKind::Banana => "banana",
            FruitKind::Lemon => "lemon",
            FruitKind::Orange => "orange",
            FruitKind::Strawberry => "strawberry",
        }
    }

    pub fn properties(self) -> FruitProperties {
        let (citrus, vitamin_c, flavour_strength) = match self {
            FruitKind::Apple => (false, 75.0, 50.0),
            FruitKind::Banana => (false, 85.0, 40.0),
            FruitKind::Lemon => (true, 130.0, 90.0),
            FruitKind::Orange => (true, 150.0, 70.0),
            FruitKind::Strawberry => (false, 90.0, 50.0),
        };
        FruitProperties {
            citrus,
            vitamin_c,
            flavour_strength,
        }
    }
}

impl fmt::Display for FruitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FruitKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        FruitKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ReportError::RecipeError {
                message: format!("Unsupported fruit type: {}", s),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeSummary {
    pub fruits: BTreeSet<FruitKind>,
    pub total_weight: f64,
    /// Share of the total weight that is citrus fruit, in percent.
    pub citrus_percent: f64,
    pub total_vitamin_c: f64,
    pub top_flavours: Vec<FruitKind>,
}

pub fn parse_weight(raw: &str) -> Result<f64> {
    let weight: f64 = raw.trim().parse().map_err(|_| ReportError::RecipeError {
        message: format!("Error: weight \"{}\" is not a number.", raw),
    })?;

    if !weight.is_finite() || weight < 0.0 {
        return Err(ReportError::RecipeError {
            message: format!("Error: weight \"{}\" must be a non-negative number.", raw),
        });
    }
    Ok(weight)
}

/// Groups a flat `[type, weight, type, weight, ...]` argument list into pairs.
pub fn fruit_pairs(values: &[String]) -> Vec<(String, String)> {
    values
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}

pub fn recipe(items: &[(String, String)]) -> Result<RecipeSummary> {
    if items.is_empty() {
        return Err(ReportError::RecipeError {
            message: "Error: at least one --fruit is required.".to_string(),
        });
    }

    let mut fruits = BTreeSet::new();
    let mut total_weight = 0.0;
    let mut citrus_weight = 0.0;
    let mut total_vitamin_c = 0.0;
    // first-appearance order decides ties between equal flavour totals
    let mut flavours: Vec<(FruitKind, f64)> = Vec::new();

    for (name, raw_weight) in items {
        let weight = parse_weight(raw_weight)?;
        let kind: FruitKind = name.parse()?;
        let props = kind.properties();

        fruits.insert(kind);
        total_weight += weight;
        if props.citrus {
            citrus_weight += weight;
        }
        total_vitamin_c += props.vitamin_c * weight;

        let flavour = props.flavour_strength * weight;
        match flavours.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, total)) => *total += flavour,
            None => flavours.push((kind, flavour)),
        }
    }

    flavours.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    let top_flavours = flavours.iter().take(2).map(|(k, _)| *k).collect();

    let citrus_percent = if total_weight > 0.0 {
        citrus_weight / total_weight * 100.0
    } else {
        0.0
    };

    tracing::debug!(
        "Recipe of {} items, {} distinct fruits, {} g",
        items.len(),
        fruits.len(),
        total_weight
    );

    Ok(RecipeSummary {
        fruits,
        total_weight,
        citrus_percent,
        total_vitamin_c,
        top_flavours,
    })
}

fn join_names<'a>(kinds: impl IntoIterator<Item = &'a FruitKind>) -> String {
    kinds
        .into_iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Weights print in their shortest float form, always with a fractional part.
pub fn render_summary(name: Option<&str>, summary: &RecipeSummary) -> String {
    format!(
        "Smoothie Name: {}\nFruits: {}\nTotal Weight: {:?}\nTotal Citrus Content: {:.2}%\nTotal Vitamin C: {:.2} mg\nTop Flavours: {}\n",
        name.unwrap_or("Unnamed"),
        join_names(&summary.fruits),
        summary.total_weight,
        summary.citrus_percent,
        summary.total_vitamin_c,
        join_names(&summary.top_flavours),
    )
}
