use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Completed,
    Pending,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "Completed"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

/// A row of the Reports page table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub name: String,
    pub date: NaiveDate,
    pub status: ReportStatus,
}

impl Report {
    /// Creates a report from an ISO date string (YYYY-MM-DD)
    pub fn new(name: impl Into<String>, date: &str, status: ReportStatus) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            date: date.parse::<NaiveDate>()?,
            status,
        })
    }
}

pub fn reports() -> Result<Vec<Report>> {
    Ok(vec![
        Report::new("Sales Q1", "2025-03-31", ReportStatus::Completed)?,
        Report::new("User Growth", "2025-04-15", ReportStatus::Pending)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    #[test]
    fn test_reports_seed() {
        let reports = reports().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].date, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
        assert_eq!(reports[1].status.to_string(), "Pending");
    }

    #[test]
    fn test_report_rejects_bad_date() {
        let result = Report::new("Broken", "31/03/2025", ReportStatus::Pending);
        assert!(matches!(result, Err(DashboardError::InvalidDate(_))));
    }

    #[test]
    fn test_report_serializes_iso_date() {
        let report = Report::new("Sales Q1", "2025-03-31", ReportStatus::Completed).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"date\":\"2025-03-31\""));
        assert!(json.contains("\"status\":\"completed\""));
    }
}
