//! The report engine: one pure function per report kind.
//!
//! Every report borrows the table immutably and returns a fresh
//! [`ReportResult`], so running the same kind twice yields identical output.

use std::collections::{BTreeSet, HashMap, HashSet};

use log::{debug, info};

use crate::data::{MedalTable, Record};
use crate::error::MedalstatError;
use crate::Result;

use super::groupby::{dedup_ordered, distinct_count_by, group_by, sort_desc, sum_by};
use super::kind::ReportKind;
use super::result::{
    Cell, Frame, MedalShare, Metric, ReportResult, Series, SeriesPoint, CORRELATION_METRIC,
};

/// Sport name fragments counted as swimming events (matched
/// case-insensitively as substrings). "Water Polo" spelled with a space
/// does not match.
pub const SWIMMING_SPORTS: [&str; 4] = [
    "swimming",
    "synchronized swimming",
    "diving",
    "waterpolo",
];

/// Rows shown by the only-bronze report; the full count is reported separately.
pub const ONLY_BRONZE_LIMIT: usize = 100;

/// Run the selected report against a loaded table.
pub fn run(table: &MedalTable, kind: ReportKind) -> Result<ReportResult> {
    info!("running report '{}' over {} records", kind.slug(), table.len());

    let result = match kind {
        ReportKind::MostGold => most_gold(table)?,
        ReportKind::MostTotalMedalsByCountry => {
            ReportResult::Table(ranked_frame("Country", "Total", country_totals(table), Some(5)))
        }
        ReportKind::TotalMedalsPerYear => total_medals_per_year(table),
        ReportKind::MedalsByCountrySport => medals_by_country_sport(table),
        ReportKind::SportMostMedals => sport_most_medals(table),
        ReportKind::ConsistentAthletes => consistent_athletes(table),
        ReportKind::TotalMedalsAllYears => {
            ReportResult::Table(ranked_frame("Country", "Total", country_totals(table), None))
        }
        ReportKind::MedalPercentages => medal_percentages(table)?,
        ReportKind::AverageAgeCorrelation => average_age_correlation(table),
        ReportKind::YearHighestGold => year_highest_gold(table),
        ReportKind::Top10CountriesByTotal => {
            ReportResult::Table(ranked_frame("Country", "Total", country_totals(table), Some(10)))
        }
        ReportKind::SwimmingDominance => swimming_dominance(table),
        ReportKind::YoungestOldest => youngest_oldest(table),
        ReportKind::OnlyBronze => only_bronze(table),
        ReportKind::MultiSportAthletes => multi_sport_athletes(table),
        ReportKind::GoldPivot => gold_pivot(table),
    };

    debug!("report '{}' produced {} rows", kind.slug(), result.row_count());
    Ok(result)
}

/// Build a two-column frame from ranked (label, value) pairs.
fn ranked_frame(
    label: &str,
    value: &str,
    items: Vec<(String, u64)>,
    limit: Option<usize>,
) -> Frame {
    let mut frame = Frame::new([label, value]);
    let take = limit.unwrap_or(items.len());
    for (name, total) in items.into_iter().take(take) {
        frame.push(vec![Cell::from(name), Cell::from(total)]);
    }
    frame
}

/// Total medals per country, largest first.
fn country_totals(table: &MedalTable) -> Vec<(String, u64)> {
    let mut totals = sum_by(table, |r| r.country.clone(), |r| r.total);
    sort_desc(&mut totals);
    totals
}

fn most_gold(table: &MedalTable) -> Result<ReportResult> {
    // First record holding the maximum, matching a stable descending sort.
    let best = table
        .iter()
        .fold(None::<&Record>, |best, r| match best {
            Some(b) if b.gold >= r.gold => Some(b),
            _ => Some(r),
        })
        .ok_or_else(|| MedalstatError::Computation("the table has no records".to_string()))?;

    let mut frame = Frame::new(["Athlete", "Gold"]);
    frame.push(vec![best.athlete.as_str().into(), best.gold.into()]);
    Ok(ReportResult::Table(frame))
}

fn total_medals_per_year(table: &MedalTable) -> ReportResult {
    let mut totals = sum_by(table, |r| r.year, |r| r.total);
    totals.sort_by_key(|(year, _)| *year);
    ReportResult::Series(year_series("Total", totals))
}

fn year_series(value: &str, items: Vec<(i32, u64)>) -> Series {
    Series {
        category: "Year".to_string(),
        value: value.to_string(),
        points: items
            .into_iter()
            .map(|(year, value)| SeriesPoint {
                category: year.into(),
                value,
            })
            .collect(),
    }
}

#[derive(Default)]
struct MedalCounts {
    gold: u64,
    silver: u64,
    bronze: u64,
}

fn medals_by_country_sport(table: &MedalTable) -> ReportResult {
    let mut groups = group_by(
        table,
        |r| (r.country.clone(), r.sport.clone()),
        |acc: &mut MedalCounts, r| {
            acc.gold += u64::from(r.gold);
            acc.silver += u64::from(r.silver);
            acc.bronze += u64::from(r.bronze);
        },
    );
    groups.sort_by(|a, b| a.0.cmp(&b.0));

    let mut frame = Frame::new(["Country", "Sport", "Gold", "Silver", "Bronze"]);
    for ((country, sport), counts) in groups {
        frame.push(vec![
            country.into(),
            sport.into(),
            counts.gold.into(),
            counts.silver.into(),
            counts.bronze.into(),
        ]);
    }
    ReportResult::Table(frame)
}

fn sport_most_medals(table: &MedalTable) -> ReportResult {
    let mut totals = sum_by(table, |r| r.sport.clone(), |r| r.total);
    sort_desc(&mut totals);
    ReportResult::Table(ranked_frame("Sport", "Total", totals, None))
}

fn consistent_athletes(table: &MedalTable) -> ReportResult {
    let mut counts: Vec<(String, usize)> =
        distinct_count_by(table, |r| r.athlete.clone(), |r| r.year)
            .into_iter()
            .filter(|(_, years)| *years > 1)
            .collect();
    sort_desc(&mut counts);

    let mut frame = Frame::new(["Athlete", "Years"]);
    for (athlete, years) in counts {
        frame.push(vec![athlete.into(), years.into()]);
    }
    ReportResult::Table(frame)
}

fn medal_percentages(table: &MedalTable) -> Result<ReportResult> {
    let (gold, silver, bronze) = table.iter().fold((0u64, 0u64, 0u64), |(g, s, b), r| {
        (
            g + u64::from(r.gold),
            s + u64::from(r.silver),
            b + u64::from(r.bronze),
        )
    });
    let total = gold + silver + bronze;
    if total == 0 {
        return Err(MedalstatError::Computation(
            "no gold, silver or bronze medals recorded; percentages are undefined".to_string(),
        ));
    }

    let pct = |count: u64| count as f64 / total as f64 * 100.0;
    Ok(ReportResult::Share(MedalShare {
        gold,
        silver,
        bronze,
        gold_pct: pct(gold),
        silver_pct: pct(silver),
        bronze_pct: pct(bronze),
    }))
}

fn average_age_correlation(table: &MedalTable) -> ReportResult {
    let pairs: Vec<(f64, f64)> = table
        .iter()
        .filter_map(|r| r.age.map(|age| (f64::from(age), f64::from(r.total))))
        .collect();

    let ages: Vec<f64> = pairs.iter().map(|(age, _)| *age).collect();
    let metrics = vec![
        Metric {
            name: "Average Age".to_string(),
            value: mean(&ages),
            precision: 2,
        },
        Metric {
            name: CORRELATION_METRIC.to_string(),
            value: pearson(&pairs),
            precision: 4,
        },
    ];
    ReportResult::Metrics { metrics }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Pearson correlation; undefined with fewer than two points or a
/// constant variable.
fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x * var_y).sqrt())
}

fn year_highest_gold(table: &MedalTable) -> ReportResult {
    let mut totals = sum_by(table, |r| r.year, |r| r.gold);
    sort_desc(&mut totals);
    ReportResult::Series(year_series("Gold", totals))
}

/// Whether a sport counts towards the swimming report.
pub fn is_swimming_sport(sport: &str) -> bool {
    let sport = sport.to_lowercase();
    SWIMMING_SPORTS
        .iter()
        .any(|fragment| sport.contains(fragment))
}

fn swimming_dominance(table: &MedalTable) -> ReportResult {
    let mut totals = sum_by(
        table.iter().filter(|r| is_swimming_sport(&r.sport)),
        |r| r.country.clone(),
        |r| r.total,
    );
    sort_desc(&mut totals);
    ReportResult::Table(ranked_frame("Country", "Total", totals, Some(5)))
}

type WinnerKey = (String, u32, String, String, i32);

fn youngest_oldest(table: &MedalTable) -> ReportResult {
    let ages = table.iter().filter_map(|r| r.age);
    let youngest = ages.clone().min();
    let oldest = ages.max();

    ReportResult::Extremes {
        youngest: winners_aged(table, youngest),
        oldest: winners_aged(table, oldest),
    }
}

fn winners_aged(table: &MedalTable, age: Option<u32>) -> Frame {
    let mut frame = Frame::new(["Athlete", "Age", "Country", "Sport", "Year"]);
    let Some(age) = age else {
        return frame;
    };

    let rows: Vec<WinnerKey> = dedup_ordered(table.iter().filter(|r| r.age == Some(age)).map(
        |r| {
            (
                r.athlete.clone(),
                age,
                r.country.clone(),
                r.sport.clone(),
                r.year,
            )
        },
    ));
    for (athlete, age, country, sport, year) in rows {
        frame.push(vec![
            athlete.into(),
            age.into(),
            country.into(),
            sport.into(),
            year.into(),
        ]);
    }
    frame
}

fn only_bronze(table: &MedalTable) -> ReportResult {
    let matching: Vec<&Record> = table
        .iter()
        .filter(|r| r.bronze > 0 && r.gold == 0 && r.silver == 0)
        .collect();

    let mut rows = Frame::new(["Athlete", "Bronze", "Country", "Sport", "Year"]);
    for r in matching.iter().take(ONLY_BRONZE_LIMIT) {
        rows.push(vec![
            r.athlete.as_str().into(),
            r.bronze.into(),
            r.country.as_str().into(),
            r.sport.as_str().into(),
            r.year.into(),
        ]);
    }

    ReportResult::Sample {
        rows,
        total: matching.len(),
    }
}

fn multi_sport_athletes(table: &MedalTable) -> ReportResult {
    let athletes: HashSet<String> =
        distinct_count_by(table, |r| r.athlete.clone(), |r| r.sport.clone())
            .into_iter()
            .filter(|(_, sports)| *sports > 1)
            .map(|(athlete, _)| athlete)
            .collect();

    let mut rows: Vec<(String, String, i32, u32)> = dedup_ordered(
        table
            .iter()
            .filter(|r| athletes.contains(&r.athlete))
            .map(|r| (r.athlete.clone(), r.sport.clone(), r.year, r.total)),
    );
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    let mut frame = Frame::new(["Athlete", "Sport", "Year", "Total"]);
    for (athlete, sport, year, total) in rows {
        frame.push(vec![athlete.into(), sport.into(), year.into(), total.into()]);
    }
    ReportResult::Table(frame)
}

fn gold_pivot(table: &MedalTable) -> ReportResult {
    let countries: BTreeSet<&str> = table.iter().map(|r| r.country.as_str()).collect();
    let years: BTreeSet<i32> = table.iter().map(|r| r.year).collect();

    let mut cells: HashMap<(&str, i32), u64> = HashMap::new();
    for r in table {
        *cells.entry((r.country.as_str(), r.year)).or_default() += u64::from(r.gold);
    }

    let mut columns = vec!["Country".to_string()];
    columns.extend(years.iter().map(|y| y.to_string()));
    let mut frame = Frame::new(columns);

    for country in countries {
        let mut row = vec![Cell::from(country)];
        row.extend(
            years
                .iter()
                .map(|year| Cell::from(cells.get(&(country, *year)).copied().unwrap_or(0))),
        );
        frame.push(row);
    }
    ReportResult::Table(frame)
}
