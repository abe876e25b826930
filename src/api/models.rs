use serde::{Deserialize, Serialize};

/// Body of a successful `POST /token` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Body of a successful `POST /register` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub username: String,
}

/// Form fields sent to `POST /token`
#[derive(Debug, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// JSON body sent to `POST /register`
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// JSON body sent to `POST /alerts/create/`
#[derive(Debug, Serialize)]
pub struct CreateAlertRequest {
    pub coin_id: String,
    pub target_price: f64,
}

/// Body of a successful `DELETE /alerts/delete/{id}` response
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResult {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_without_token_type() {
        let body: TokenResponse = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(body.access_token, "abc");
        assert!(body.token_type.is_none());
    }

    #[test]
    fn test_create_alert_request_wire_form() {
        let body = CreateAlertRequest {
            coin_id: "bitcoin".to_string(),
            target_price: 65000.0,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["coin_id"], "bitcoin");
        assert_eq!(json["target_price"], 65000.0);
    }
}
