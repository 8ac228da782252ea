//! Pure filter/query engine over a report collection.
//!
//! [`visible`] computes the subset of reports matching the current filter
//! criteria. It is side-effect free and re-evaluated on every change to the
//! collection or the criteria; expected data volumes make incremental
//! filtering unnecessary.

use chrono::NaiveDate;

use crate::model::Report;

/// Filter criteria for the report list.
///
/// `None` on an optional field means "Any"/unset. The default criteria
/// match every report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against description, location, and
    /// category. Empty text matches everything.
    pub text: String,
    /// Exact location match, or `None` for any location.
    pub location: Option<String>,
    /// Exact category match (by its wire name), or `None` for any.
    pub category: Option<String>,
    /// Inclusive lower bound on the report date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the report date.
    pub date_to: Option<NaiveDate>,
}

/// Return the reports matching `criteria`, preserving collection order.
///
/// All conditions are conjunctive. Date bounds compare `NaiveDate`
/// values, whose ordering is identical to lexicographic ordering of
/// zero-padded ISO-8601 date strings.
pub fn visible(reports: &[Report], criteria: &FilterCriteria) -> Vec<Report> {
    reports
        .iter()
        .filter(|r| matches(r, criteria))
        .cloned()
        .collect()
}

fn matches(report: &Report, criteria: &FilterCriteria) -> bool {
    if let Some(location) = &criteria.location {
        if &report.location != location {
            return false;
        }
    }

    if let Some(category) = &criteria.category {
        if &report.category.to_string() != category {
            return false;
        }
    }

    if !criteria.text.is_empty() {
        let haystack = format!(
            "{} {} {}",
            report.description, report.location, report.category
        )
        .to_lowercase();
        if !haystack.contains(&criteria.text.to_lowercase()) {
            return false;
        }
    }

    if let Some(from) = criteria.date_from {
        if report.date < from {
            return false;
        }
    }

    if let Some(to) = criteria.date_to {
        if report.date > to {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, RiskLevel};
    use chrono::{NaiveDate, Utc};

    fn report(id: &str, date: &str, location: &str, category: Category, desc: &str) -> Report {
        Report {
            id: id.to_string(),
            date: date.parse::<NaiveDate>().unwrap(),
            location: location.to_string(),
            category,
            description: desc.to_string(),
            risk_level: RiskLevel::Low,
            photo: None,
            follow_up_done: false,
            created_at: Utc::now(),
        }
    }

    fn sample() -> Vec<Report> {
        vec![
            report("3", "2024-03-05", "Kantor", Category::Equipment, "Frayed cable"),
            report("2", "2024-02-10", "Gudang", Category::HumanError, "Forklift near hit"),
            report("1", "2024-01-01", "Gudang", Category::Operational, "Spill"),
        ]
    }

    #[test]
    fn location_filter_is_exact() {
        let reports = vec![report(
            "1",
            "2024-01-01",
            "Gudang",
            Category::Operational,
            "Spill",
        )];

        let mut criteria = FilterCriteria {
            location: Some("Gudang".to_string()),
            ..Default::default()
        };
        assert_eq!(visible(&reports, &criteria).len(), 1);

        criteria.location = Some("Kantor".to_string());
        assert!(visible(&reports, &criteria).is_empty());
    }

    #[test]
    fn default_criteria_match_everything_in_order() {
        let reports = sample();
        let result = visible(&reports, &FilterCriteria::default());

        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn text_match_is_case_insensitive_across_fields() {
        let reports = sample();

        let criteria = FilterCriteria {
            text: "FORKLIFT".to_string(),
            ..Default::default()
        };
        assert_eq!(visible(&reports, &criteria).len(), 1);

        // Matches the location field of both Gudang reports.
        let criteria = FilterCriteria {
            text: "gudang".to_string(),
            ..Default::default()
        };
        assert_eq!(visible(&reports, &criteria).len(), 2);

        // Matches the category wire name.
        let criteria = FilterCriteria {
            text: "humanerror".to_string(),
            ..Default::default()
        };
        assert_eq!(visible(&reports, &criteria).len(), 1);
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let reports = sample();
        let criteria = FilterCriteria {
            date_from: Some("2024-01-01".parse().unwrap()),
            date_to: Some("2024-02-10".parse().unwrap()),
            ..Default::default()
        };

        let result = visible(&reports, &criteria);
        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn conditions_are_conjunctive() {
        let reports = sample();
        let criteria = FilterCriteria {
            text: "spill".to_string(),
            location: Some("Gudang".to_string()),
            category: Some("HumanError".to_string()),
            ..Default::default()
        };

        // "Spill" is Operational, so the category condition excludes it.
        assert!(visible(&reports, &criteria).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let reports = sample();
        let criteria = FilterCriteria {
            location: Some("Gudang".to_string()),
            ..Default::default()
        };

        let once = visible(&reports, &criteria);
        let twice = visible(&once, &criteria);
        assert_eq!(once, twice);
    }
}
