//! Rating collections and their text bar chart.
//!
//! Independent of the API client: the chart only needs a [`RatingCollection`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub name: String,
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingCollection {
    /// What the items have in common (e.g. "Films"). Used as the axis label.
    pub theme: String,
    pub items: Vec<Rating>,
}

const BAR: char = '█';

/// Renders one horizontal bar per item, scaled so the highest rating spans `width` cells.
pub fn render_bars(chart_title: &str, ratings: &RatingCollection, width: usize) -> String {
    let mut out = format!("{chart_title}\n{} / average rating\n", ratings.theme);

    if ratings.items.is_empty() {
        out.push_str("(no ratings)\n");
        return out;
    }

    let label_width = ratings
        .items
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0);
    let max = ratings
        .items
        .iter()
        .map(|item| item.average_rating)
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);

    for item in &ratings.items {
        let cells = if max > 0.0 && item.average_rating > 0.0 {
            ((item.average_rating / max) * width as f64).round() as usize
        } else {
            0
        };
        let bar: String = std::iter::repeat(BAR).take(cells.min(width)).collect();
        out.push_str(&format!(
            "{:<label_width$}  {bar} {:.2}\n",
            item.name, item.average_rating
        ));
    }

    out
}
