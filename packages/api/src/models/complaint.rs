use serde::{Deserialize, Serialize};

use super::{string_or_number, string_or_number_opt, TrendBucket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    #[serde(other)]
    Unknown,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
            ComplaintStatus::Unknown => "Unknown",
        }
    }

    /// The status an employee moves a complaint to next.
    pub fn next(&self) -> Option<ComplaintStatus> {
        match self {
            ComplaintStatus::Pending => Some(ComplaintStatus::InProgress),
            ComplaintStatus::InProgress => Some(ComplaintStatus::Resolved),
            ComplaintStatus::Resolved | ComplaintStatus::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Complaint {
    #[serde(default, deserialize_with = "string_or_number")]
    pub complaint_id: String,
    #[serde(default)]
    pub complaint_text: String,
    #[serde(default)]
    pub complaint_category: String,
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub priority_confidence: Option<f64>,
    #[serde(default)]
    pub complaint_status: ComplaintStatus,
    #[serde(default, deserialize_with = "string_or_number_opt")]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number_opt")]
    pub room_no: Option<String>,
    #[serde(default)]
    pub tenant_name: Option<String>,
    #[serde(default)]
    pub complaint_date: Option<String>,
}

fn lenient_priority<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match s.as_str() {
        "High" => Some(Priority::High),
        "Medium" => Some(Priority::Medium),
        "Low" => Some(Priority::Low),
        _ => None,
    }))
}

/// Categories offered on the tenant complaint form.
pub const COMPLAINT_CATEGORIES: [&str; 5] = ["Electricity", "Plumbing", "Housekeeping", "Water", "Other"];

/// `GET /complaints` query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComplaintQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ComplaintStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ComplaintQuery {
    pub fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewComplaint {
    pub complaint_text: String,
    pub complaint_category: String,
    pub room_no: String,
}

/// `POST /complaints` acknowledgement; the backend classifies priority on create.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreatedComplaint {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "string_or_number_opt")]
    pub complaint_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Option<Priority>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComplaintUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complaint_status: Option<ComplaintStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl ComplaintUpdate {
    pub fn status(status: ComplaintStatus) -> Self {
        Self {
            complaint_status: Some(status),
            ..Default::default()
        }
    }

    pub fn assign(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: Some(employee_id.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComplaintTrends {
    #[serde(default)]
    pub by_category: Vec<TrendBucket>,
    #[serde(default)]
    pub by_status: Vec<TrendBucket>,
    #[serde(default)]
    pub by_priority: Vec<TrendBucket>,
}

/// Work-queue filter on the employee dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComplaintFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
    Pending,
    InProgress,
}

impl ComplaintFilter {
    pub const ALL: [ComplaintFilter; 6] = [
        ComplaintFilter::All,
        ComplaintFilter::High,
        ComplaintFilter::Medium,
        ComplaintFilter::Low,
        ComplaintFilter::Pending,
        ComplaintFilter::InProgress,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComplaintFilter::All => "All",
            ComplaintFilter::High => "High Priority",
            ComplaintFilter::Medium => "Medium Priority",
            ComplaintFilter::Low => "Low Priority",
            ComplaintFilter::Pending => "Pending",
            ComplaintFilter::InProgress => "In Progress",
        }
    }

    pub fn matches(&self, complaint: &Complaint) -> bool {
        match self {
            ComplaintFilter::All => true,
            ComplaintFilter::High => complaint.priority == Some(Priority::High),
            ComplaintFilter::Medium => complaint.priority == Some(Priority::Medium),
            ComplaintFilter::Low => complaint.priority == Some(Priority::Low),
            ComplaintFilter::Pending => complaint.complaint_status == ComplaintStatus::Pending,
            ComplaintFilter::InProgress => complaint.complaint_status == ComplaintStatus::InProgress,
        }
    }

    pub fn apply<'a>(&self, complaints: &'a [Complaint]) -> Vec<&'a Complaint> {
        complaints.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Status and priority tallies for summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplaintCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ComplaintCounts {
    pub fn tally(complaints: &[Complaint]) -> Self {
        let mut counts = Self::default();
        for complaint in complaints {
            match complaint.complaint_status {
                ComplaintStatus::Pending => counts.pending += 1,
                ComplaintStatus::InProgress => counts.in_progress += 1,
                ComplaintStatus::Resolved => counts.resolved += 1,
                ComplaintStatus::Unknown => {}
            }
            match complaint.priority {
                Some(Priority::High) => counts.high += 1,
                Some(Priority::Medium) => counts.medium += 1,
                Some(Priority::Low) => counts.low += 1,
                None => {}
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn queue() -> Vec<Complaint> {
        serde_json::from_value(json!([
            {"complaint_id": "C1", "complaint_text": "Socket sparking", "complaint_category": "Electricity",
             "priority": "High", "complaint_status": "Pending"},
            {"complaint_id": 2, "complaint_text": "Tap leaking", "complaint_category": "Plumbing",
             "priority": "Medium", "complaint_status": "In Progress", "employee_id": "E3001"},
            {"complaint_id": "C3", "complaint_text": "Paint peeling", "complaint_category": "Maintenance",
             "priority": "Low", "complaint_status": "Resolved"},
            {"complaint_id": "C4", "complaint_text": "Lift noise", "complaint_category": "Maintenance",
             "priority": null, "complaint_status": "Pending"},
            {"complaint_id": "C5", "complaint_text": "Other", "complaint_status": "Escalated"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_lenient_decoding() {
        let complaints = queue();
        assert_eq!(complaints[1].complaint_id, "2");
        assert_eq!(complaints[1].employee_id.as_deref(), Some("E3001"));
        assert_eq!(complaints[3].priority, None);
        assert_eq!(complaints[4].complaint_status, ComplaintStatus::Unknown);
    }

    #[test]
    fn test_filters() {
        let complaints = queue();
        let ids = |filter: ComplaintFilter| -> Vec<String> {
            filter.apply(&complaints).iter().map(|c| c.complaint_id.clone()).collect()
        };
        assert_eq!(ids(ComplaintFilter::All).len(), 5);
        assert_eq!(ids(ComplaintFilter::High), vec!["C1"]);
        assert_eq!(ids(ComplaintFilter::Medium), vec!["2"]);
        assert_eq!(ids(ComplaintFilter::Low), vec!["C3"]);
        assert_eq!(ids(ComplaintFilter::Pending), vec!["C1", "C4"]);
        assert_eq!(ids(ComplaintFilter::InProgress), vec!["2"]);
    }

    #[test]
    fn test_counts() {
        let counts = ComplaintCounts::tally(&queue());
        assert_eq!(
            counts,
            ComplaintCounts {
                pending: 2,
                in_progress: 1,
                resolved: 1,
                high: 1,
                medium: 1,
                low: 1,
            }
        );
        assert_eq!(ComplaintCounts::tally(&[]), ComplaintCounts::default());
    }

    #[test]
    fn test_status_transitions() {
        assert_eq!(ComplaintStatus::Pending.next(), Some(ComplaintStatus::InProgress));
        assert_eq!(ComplaintStatus::InProgress.next(), Some(ComplaintStatus::Resolved));
        assert_eq!(ComplaintStatus::Resolved.next(), None);
    }

    #[test]
    fn test_query_params() {
        let query = ComplaintQuery {
            status: Some(ComplaintStatus::InProgress),
            priority: Some(Priority::High),
            ..ComplaintQuery::limit(50)
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"limit": 50, "status": "In Progress", "priority": "High"})
        );
    }

    #[test]
    fn test_update_bodies() {
        assert_eq!(
            serde_json::to_value(ComplaintUpdate::status(ComplaintStatus::InProgress)).unwrap(),
            json!({"complaint_status": "In Progress"})
        );
        assert_eq!(
            serde_json::to_value(ComplaintUpdate::assign("E3001")).unwrap(),
            json!({"employee_id": "E3001"})
        );
    }
}
