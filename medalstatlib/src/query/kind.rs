//! The fixed menu of report kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MedalstatError;

/// One of the sixteen reports offered for a loaded table.
///
/// Each kind carries a menu label (what a chooser shows), a title (the
/// heading above the result) and a kebab-case slug for command lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    MostGold,
    MostTotalMedalsByCountry,
    TotalMedalsPerYear,
    MedalsByCountrySport,
    SportMostMedals,
    ConsistentAthletes,
    TotalMedalsAllYears,
    MedalPercentages,
    AverageAgeCorrelation,
    YearHighestGold,
    Top10CountriesByTotal,
    SwimmingDominance,
    YoungestOldest,
    OnlyBronze,
    MultiSportAthletes,
    GoldPivot,
}

impl ReportKind {
    /// All kinds in menu order
    pub const ALL: [ReportKind; 16] = [
        ReportKind::MostGold,
        ReportKind::MostTotalMedalsByCountry,
        ReportKind::TotalMedalsPerYear,
        ReportKind::MedalsByCountrySport,
        ReportKind::SportMostMedals,
        ReportKind::ConsistentAthletes,
        ReportKind::TotalMedalsAllYears,
        ReportKind::MedalPercentages,
        ReportKind::AverageAgeCorrelation,
        ReportKind::YearHighestGold,
        ReportKind::Top10CountriesByTotal,
        ReportKind::SwimmingDominance,
        ReportKind::YoungestOldest,
        ReportKind::OnlyBronze,
        ReportKind::MultiSportAthletes,
        ReportKind::GoldPivot,
    ];

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::MostGold => "Athlete with Most Gold Medals",
            ReportKind::MostTotalMedalsByCountry => "Country with Most Total Medals",
            ReportKind::TotalMedalsPerYear => "Total Medal Count per Year",
            ReportKind::MedalsByCountrySport => "Medals per Country & Sport",
            ReportKind::SportMostMedals => "Sport with Most Medals",
            ReportKind::ConsistentAthletes => "Consistent Athletes (Multiple Olympics)",
            ReportKind::TotalMedalsAllYears => "Total Medals by Country (All Years)",
            ReportKind::MedalPercentages => "Medal Percentages (Gold/Silver/Bronze)",
            ReportKind::AverageAgeCorrelation => "Average Age & Age/Medal Correlation",
            ReportKind::YearHighestGold => "Year with Highest Gold Medals",
            ReportKind::Top10CountriesByTotal => "Top 10 Countries by Total Medals",
            ReportKind::SwimmingDominance => "Country Dominating Swimming",
            ReportKind::YoungestOldest => "Youngest and Oldest Medal Winners",
            ReportKind::OnlyBronze => "Athletes with Only Bronze Medals",
            ReportKind::MultiSportAthletes => "Athletes in Multiple Sports",
            ReportKind::GoldPivot => "Gold Medals by Country and Year (Pivot)",
        }
    }

    /// Heading shown above the rendered result
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::MostGold => "Athlete with Most Gold Medals",
            ReportKind::MostTotalMedalsByCountry => "Country with Most Total Medals (Top 5)",
            ReportKind::TotalMedalsPerYear => "Total Medal Count per Year",
            ReportKind::MedalsByCountrySport => "Medals per Country & Sport",
            ReportKind::SportMostMedals => "Sport with Most Medals (by Total Medals)",
            ReportKind::ConsistentAthletes => {
                "Athletes in Multiple Olympics (Won medals in >1 year)"
            }
            ReportKind::TotalMedalsAllYears => "Total Medals by Country (All Years)",
            ReportKind::MedalPercentages => "Overall Medal Percentages",
            ReportKind::AverageAgeCorrelation => "Average Age & Age vs. Total Medals Correlation",
            ReportKind::YearHighestGold => "Total Gold Medals by Year",
            ReportKind::Top10CountriesByTotal => "Top 10 Countries by Total Medals",
            ReportKind::SwimmingDominance => "Top 5 Countries in Swimming (by Total Medals)",
            ReportKind::YoungestOldest => "Youngest and Oldest Medal Winners",
            ReportKind::OnlyBronze => "Athletes Who Won Only Bronze Medals",
            ReportKind::MultiSportAthletes => "Athletes Who Won Medals in Multiple Sports",
            ReportKind::GoldPivot => "Gold Medals by Country and Year",
        }
    }

    /// Command-line identifier
    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::MostGold => "most-gold",
            ReportKind::MostTotalMedalsByCountry => "most-total-medals-by-country",
            ReportKind::TotalMedalsPerYear => "total-medals-per-year",
            ReportKind::MedalsByCountrySport => "medals-by-country-sport",
            ReportKind::SportMostMedals => "sport-most-medals",
            ReportKind::ConsistentAthletes => "consistent-athletes",
            ReportKind::TotalMedalsAllYears => "total-medals-all-years",
            ReportKind::MedalPercentages => "medal-percentages",
            ReportKind::AverageAgeCorrelation => "average-age-correlation",
            ReportKind::YearHighestGold => "year-highest-gold",
            ReportKind::Top10CountriesByTotal => "top10-countries-by-total",
            ReportKind::SwimmingDominance => "swimming-dominance",
            ReportKind::YoungestOldest => "youngest-oldest",
            ReportKind::OnlyBronze => "only-bronze",
            ReportKind::MultiSportAthletes => "multi-sport-athletes",
            ReportKind::GoldPivot => "gold-pivot",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReportKind {
    type Err = MedalstatError;

    /// Accepts a slug or a menu label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ReportKind::ALL
            .into_iter()
            .find(|kind| {
                kind.slug().eq_ignore_ascii_case(wanted)
                    || kind.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| MedalstatError::UnknownReport(wanted.to_string()))
    }
}
