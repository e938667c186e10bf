use crate::{Error, Gateway, Participant, PollResult};
use log::debug;
use serde::Deserialize;
use serde_json::Value;

impl Gateway {
    pub async fn get_poll(&self, token: &str) -> Result<PollResult, Error> {
        if token.is_empty() {
            return Err(Error::Usage(String::from("Poll token must not be empty.")));
        }

        //https://eldood.uk/<token>/json

        let url = self.poll_url(token);
        let (status, text) = self.get_once(url).await?;

        match decode_poll(&text, token) {
            Ok(poll) => Ok(poll),
            // An error page that is not a poll document at all.
            Err(Error::MalformedResponse(_)) if !(200..=299).contains(&status) => {
                Err(Error::Api(status, text))
            }
            Err(err) => Err(err),
        }
    }
}

/// Decodes a poll document. `status` is checked before anything else, so a
/// service error reply fails with `BadStatus` even if the other fields are
/// missing.
pub fn decode_poll(body: &str, token: &str) -> Result<PollResult, Error> {
    #[derive(Deserialize)]
    struct Entry {
        name: String,
        ok_dates: Vec<String>,
        ifneedbe_dates: Vec<String>,
    }

    #[derive(Deserialize)]
    struct Document {
        name: String,
        descr: String,
        dates: Vec<String>,
        responses: Vec<Entry>,
    }

    let document: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(err) => {
            return Err(Error::MalformedResponse(format!(
                "response body is not valid JSON ({})",
                err
            )))
        }
    };

    match document.get("status") {
        Some(Value::String(status)) if status == "ok" => {}
        Some(Value::String(_)) => {
            return Err(Error::BadStatus {
                token: token.to_string(),
            })
        }
        Some(_) => {
            return Err(Error::MalformedResponse(String::from(
                "invalid field `status` (expected a string)",
            )))
        }
        None => {
            return Err(Error::MalformedResponse(String::from(
                "missing field `status`",
            )))
        }
    }

    let document: Document = match serde_json::from_value(document) {
        Ok(d) => d,
        Err(err) => return Err(Error::MalformedResponse(err.to_string())),
    };

    let responses: Vec<Participant> = document
        .responses
        .into_iter()
        .map(|e| Participant::new(e.name, &e.ok_dates, &e.ifneedbe_dates))
        .collect();

    debug!(
        "Decoded poll \"{}\" with {} dates and {} responses.",
        document.name,
        document.dates.len(),
        responses.len()
    );

    Ok(PollResult {
        name: document.name,
        description: document.descr,
        dates: document.dates,
        responses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attendance;

    const POLL: &str = r#"{
        "status": "ok",
        "name": "Board games",
        "descr": "Which evening works?",
        "dates": ["20240101", "20240102"],
        "responses": [
            {"name": "Al", "ok_dates": ["20240101"], "ifneedbe_dates": ["20240102"]},
            {"name": "Bo", "ok_dates": [], "ifneedbe_dates": []}
        ]
    }"#;

    #[test]
    fn decodes_a_complete_document() {
        let poll = decode_poll(POLL, "tok").unwrap();
        assert_eq!(poll.name, "Board games");
        assert_eq!(poll.description, "Which evening works?");
        assert_eq!(poll.dates, vec!["20240101", "20240102"]);
        assert_eq!(poll.responses.len(), 2);
        assert_eq!(poll.responses[0].name, "Al");
        assert_eq!(poll.responses[0].attendance("20240101"), Attendance::Ok);
        assert_eq!(poll.responses[0].attendance("20240102"), Attendance::IfNeedBe);
        assert_eq!(poll.responses[1].attendance("20240101"), Attendance::None);
    }

    #[test]
    fn bad_status_wins_over_missing_fields() {
        let err = decode_poll(r#"{"status": "error"}"#, "nope").unwrap_err();
        assert_eq!(
            err,
            Error::BadStatus {
                token: "nope".to_string()
            }
        );
    }

    #[test]
    fn unparseable_body_is_malformed() {
        let err = decode_poll("<html>not json</html>", "tok").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn missing_status_is_malformed() {
        let err = decode_poll(r#"{"name": "x"}"#, "tok").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedResponse("missing field `status`".to_string())
        );
    }

    #[test]
    fn wrong_element_type_is_malformed() {
        let body = r#"{
            "status": "ok", "name": "n", "descr": "d", "dates": [],
            "responses": [{"name": "Al", "ok_dates": [1], "ifneedbe_dates": []}]
        }"#;
        match decode_poll(body, "tok").unwrap_err() {
            Error::MalformedResponse(msg) => {
                assert!(msg.starts_with("invalid type"), "{}", msg)
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn missing_nested_field_is_named() {
        let body = r#"{
            "status": "ok", "name": "n", "descr": "d", "dates": [],
            "responses": [{"name": "Al", "ok_dates": []}]
        }"#;
        assert_eq!(
            decode_poll(body, "tok").unwrap_err(),
            Error::MalformedResponse("missing field `ifneedbe_dates`".to_string())
        );
    }

    #[test]
    fn non_string_status_is_malformed() {
        let err = decode_poll(r#"{"status": 1}"#, "tok").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn missing_descr_is_named() {
        let body = r#"{"status": "ok", "name": "n", "dates": [], "responses": []}"#;
        assert_eq!(
            decode_poll(body, "tok").unwrap_err(),
            Error::MalformedResponse("missing field `descr`".to_string())
        );
    }
}
