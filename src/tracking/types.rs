//! Public tracking record returned by the API service.

use serde::{Deserialize, Serialize};

/// One shipment as returned by `GET /api/v1/public/track/{number}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingRecord {
    pub tracking: String,
    pub status: ShipmentStatus,
    pub route: Route,
    pub dates: Dates,
    #[serde(default)]
    pub sender: Party,
    #[serde(default)]
    pub recipient: Party,
    #[serde(default)]
    pub commodity: Commodity,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub images: Images,
    #[serde(default)]
    pub interventions: Interventions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentStatus {
    /// Machine code, e.g. `EN_ROUTE`.
    pub current: String,
    /// Human label, e.g. `En Route`.
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dates {
    pub sending: String,
    pub estimated: String,
    #[serde(default)]
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Commodity {
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub timestamp: String,
    pub display: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub front: Option<String>,
    #[serde(default)]
    pub rear: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interventions {
    #[serde(default)]
    pub customs_active: bool,
    #[serde(default)]
    pub security_active: bool,
    #[serde(default)]
    pub damage_reported: bool,
    #[serde(default)]
    pub delay_active: bool,
}

impl Interventions {
    pub fn any_active(&self) -> bool {
        self.customs_active || self.security_active || self.damage_reported || self.delay_active
    }
}

/// Display tone for a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Primary,
    Warning,
    Success,
    Danger,
    Default,
}

impl StatusTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Info => "info",
            StatusTone::Primary => "primary",
            StatusTone::Warning => "warning",
            StatusTone::Success => "success",
            StatusTone::Danger => "danger",
            StatusTone::Default => "default",
        }
    }
}

/// Milestones shown as a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub booked: bool,
    pub in_transit: bool,
    pub delivered: bool,
}

impl ShipmentStatus {
    pub fn tone(&self) -> StatusTone {
        match self.current.as_str() {
            "BOOKED" | "COLLECTED" | "WAREHOUSE_PROCESSING" | "TERMINAL_ARRIVAL"
            | "DESTINATION_HUB" | "WITH_COURIER" => StatusTone::Info,
            "EN_ROUTE" => StatusTone::Primary,
            "CUSTOMS_BOND" | "SECURITY_HOLD" | "RETURN_TO_SENDER" | "TRANSIT_EXCEPTION" => {
                StatusTone::Warning
            }
            "CUSTOMS_CLEARED" | "SECURITY_CLEARED" | "DAMAGE_RESOLVED" | "DELIVERED" => {
                StatusTone::Success
            }
            "DAMAGE_REPORTED" => StatusTone::Danger,
            _ => StatusTone::Default,
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            booked: true,
            in_transit: self.current != "BOOKED",
            delivered: self.current == "DELIVERED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: &str) -> ShipmentStatus {
        ShipmentStatus {
            current: code.into(),
            display: code.into(),
        }
    }

    #[test]
    fn decode_full_record() {
        let record: TrackingRecord = serde_json::from_str(
            r#"{
                "tracking": "EUK12345678",
                "status": {"current": "CUSTOMS_BOND", "display": "Held at Customs"},
                "route": {"origin": "London", "destination": "Lagos"},
                "dates": {"sending": "2024-05-01", "estimated": "2024-05-09", "actual": null},
                "sender": {"name": "A. Sender"},
                "recipient": {"name": "B. Recipient"},
                "commodity": {"weight": 12.5, "description": "Documents"},
                "timeline": [
                    {"timestamp": "2024-05-01T09:00:00", "display": "Booked", "location": "London"},
                    {"timestamp": "2024-05-03T11:30:00", "display": "Held at Customs"}
                ],
                "images": {"front": "/uploads/shipments/f.jpg", "rear": null},
                "interventions": {
                    "customs_active": true,
                    "security_active": false,
                    "damage_reported": false,
                    "delay_active": false
                }
            }"#,
        )
        .unwrap();

        assert_eq!(record.tracking, "EUK12345678");
        assert_eq!(record.status.tone(), StatusTone::Warning);
        assert_eq!(record.commodity.weight, Some(12.5));
        assert_eq!(record.timeline.len(), 2);
        assert_eq!(record.timeline[1].location, None);
        assert_eq!(record.images.rear, None);
        assert!(record.interventions.any_active());
    }

    #[test]
    fn decode_minimal_record() {
        let record: TrackingRecord = serde_json::from_str(
            r#"{
                "tracking": "EUK1",
                "status": {"current": "BOOKED", "display": "Booked"},
                "route": {"origin": "A", "destination": "B"},
                "dates": {"sending": "2024-01-01", "estimated": "2024-01-05"}
            }"#,
        )
        .unwrap();

        assert!(record.timeline.is_empty());
        assert_eq!(record.sender.name, None);
        assert_eq!(record.dates.actual, None);
        assert!(!record.interventions.any_active());
    }

    #[test]
    fn tones() {
        assert_eq!(status("WITH_COURIER").tone(), StatusTone::Info);
        assert_eq!(status("EN_ROUTE").tone(), StatusTone::Primary);
        assert_eq!(status("DAMAGE_REPORTED").tone(), StatusTone::Danger);
        assert_eq!(status("DELIVERED").tone(), StatusTone::Success);
        assert_eq!(status("LOST_IN_SPACE").tone(), StatusTone::Default);
    }

    #[test]
    fn progress_stages() {
        assert_eq!(
            status("BOOKED").progress(),
            Progress { booked: true, in_transit: false, delivered: false }
        );
        assert_eq!(
            status("EN_ROUTE").progress(),
            Progress { booked: true, in_transit: true, delivered: false }
        );
        assert_eq!(
            status("DELIVERED").progress(),
            Progress { booked: true, in_transit: true, delivered: true }
        );
    }
}
