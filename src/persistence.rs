//! Writes pilot bookings to the hosted Supabase table over its PostgREST API.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

/// Row shape of the `pilot_bookings` table.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PilotBookingRecord {
    pub name: String,
    pub email: String,
    pub company: String,
    pub contact_number: String,
    pub team_size: String,
    pub role: String,
    pub problem: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("could not encode booking: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("insert rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

#[derive(Deserialize)]
struct PostgrestError {
    message: String,
}

pub fn table_endpoint(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
}

/// Pulls the `message` out of a PostgREST error body, falling back to the raw text.
pub fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => err.message,
        Err(_) => body.trim().to_string(),
    }
}

/// Inserts one booking row. Makes exactly one attempt.
pub async fn insert_pilot_booking(record: &PilotBookingRecord) -> Result<(), SubmitError> {
    let url = table_endpoint(config::supabase_url(), config::PILOT_BOOKINGS_TABLE);
    let anon_key = config::supabase_anon_key();

    let mut request = Request::post(&url).header("Prefer", "return=minimal");
    if !anon_key.is_empty() {
        request = request
            .header("apikey", anon_key)
            .header("Authorization", &format!("Bearer {}", anon_key));
    }

    let response = request
        .json(&[record])
        .map_err(|e| SubmitError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(SubmitError::Rejected {
        status,
        message: rejection_message(&body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_uses_table_column_names() {
        let record = PilotBookingRecord {
            name: "Arastu Sharma".to_string(),
            email: "arastu@example.com".to_string(),
            company: "Shodh AI".to_string(),
            contact_number: "+91-912345678".to_string(),
            team_size: "10-50".to_string(),
            role: "CTO".to_string(),
            problem: String::new(),
        };
        let value = serde_json::to_value(&[record]).unwrap();
        let row = &value[0];
        assert_eq!(row["contact_number"], "+91-912345678");
        assert_eq!(row["team_size"], "10-50");
        assert_eq!(row["problem"], "");
        assert_eq!(row.as_object().unwrap().len(), 7);
    }

    #[test]
    fn endpoint_joins_base_and_table() {
        assert_eq!(
            table_endpoint("https://abc.supabase.co/", "pilot_bookings"),
            "https://abc.supabase.co/rest/v1/pilot_bookings"
        );
        assert_eq!(table_endpoint("", "pilot_bookings"), "/rest/v1/pilot_bookings");
    }

    #[test]
    fn rejection_message_prefers_postgrest_message() {
        let body = r#"{"code":"42501","details":null,"hint":null,"message":"new row violates row-level security policy"}"#;
        assert_eq!(rejection_message(body), "new row violates row-level security policy");
        assert_eq!(rejection_message(" Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn errors_display_detail() {
        let err = SubmitError::Rejected { status: 401, message: "Invalid API key".to_string() };
        assert_eq!(err.to_string(), "insert rejected with status 401: Invalid API key");
    }
}
