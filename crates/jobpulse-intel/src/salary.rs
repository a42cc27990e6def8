//! Salary-figure extraction from search snippets.

use std::sync::LazyLock;

use regex::Regex;

use jobpulse_core::{SalaryInsight, SearchSnippet};

use crate::trend::trend_polarity;

static SALARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$?(\d{1,3}(?:,\d{3})*(?:\.\d{2})?)[kK]?").expect("salary pattern is valid")
});

/// Figures strictly inside this range are read as thousands ("95" means 95000).
const THOUSANDS_LOW: u64 = 20;
const THOUSANDS_HIGH: u64 = 500;
/// Figures inside this range are taken as annual USD amounts verbatim.
const ANNUAL_MIN: u64 = 20_000;
const ANNUAL_MAX: u64 = 500_000;

/// Mines dollar figures out of the snippet corpus and summarizes them.
///
/// Returns [`SalaryInsight::default`] when no figure survives the plausibility
/// filter. The thousands heuristic is knowingly ambiguous: a genuine sub-$500
/// figure such as an hourly rate is also scaled up.
#[must_use]
pub fn extract_salary(snippets: &[SearchSnippet]) -> SalaryInsight {
    let mut figures: Vec<u64> = Vec::new();
    for snippet in snippets {
        let text = snippet.combined_text();
        for caps in SALARY_RE.captures_iter(&text) {
            if let Some(figure) = interpret_figure(&caps[1]) {
                figures.push(figure);
            }
        }
    }

    if figures.is_empty() {
        return SalaryInsight::default();
    }

    let sum: u64 = figures.iter().sum();
    let count = figures.len() as u64;
    let average = (sum + count / 2) / count;
    let min = figures.iter().copied().min().unwrap_or(average);
    let max = figures.iter().copied().max().unwrap_or(average);

    SalaryInsight {
        average: format_usd(average),
        range: format!("{} - {}", format_usd(min), format_usd(max)),
        trend: trend_polarity(snippets),
        sample_size: figures.len(),
    }
}

/// Maps a captured digit group to an annual USD figure, or drops it.
fn interpret_figure(raw: &str) -> Option<u64> {
    let cleaned = raw.replace(',', "");
    let integral = cleaned.split('.').next().unwrap_or(&cleaned);
    let value: u64 = integral.parse().ok()?;
    if value > THOUSANDS_LOW && value < THOUSANDS_HIGH {
        Some(value * 1000)
    } else if (ANNUAL_MIN..=ANNUAL_MAX).contains(&value) {
        Some(value)
    } else {
        None
    }
}

/// Renders `95000` as `"$95,000"`.
pub(crate) fn format_usd(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}
