use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a price alert as reported by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Created,
    Triggered,
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertStatus::Created => write!(f, "created"),
            AlertStatus::Triggered => write!(f, "triggered"),
        }
    }
}

impl FromStr for AlertStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(AlertStatus::Created),
            "triggered" => Ok(AlertStatus::Triggered),
            other => Err(format!("unknown alert status: {}", other)),
        }
    }
}

/// Price alert entity. Owned by the backend; this is the client-side copy
/// of one row from `GET /alerts/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    pub coin_id: String,
    pub target_price: f64,
    pub status: AlertStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_form_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&AlertStatus::Created).unwrap(),
            "\"created\""
        );
        assert_eq!(
            serde_json::to_string(&AlertStatus::Triggered).unwrap(),
            "\"triggered\""
        );
    }

    #[test]
    fn test_status_round_trips_through_from_str() {
        for status in [AlertStatus::Created, AlertStatus::Triggered] {
            assert_eq!(status.to_string().parse::<AlertStatus>(), Ok(status));
        }
        assert!("deleted".parse::<AlertStatus>().is_err());
    }

    #[test]
    fn test_alert_deserializes_from_backend_payload() {
        let json = r#"{
            "id": 7,
            "coin_id": "bitcoin",
            "target_price": 65000.5,
            "status": "created",
            "created_at": "2024-05-01T12:00:00Z"
        }"#;

        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.id, 7);
        assert_eq!(alert.coin_id, "bitcoin");
        assert_eq!(alert.target_price, 65000.5);
        assert_eq!(alert.status, AlertStatus::Created);
    }
}
