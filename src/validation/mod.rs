//! Request body validation.
//!
//! A [`Pipeline`] is an ordered list of field checks over a JSON body. It
//! stops at the first failing check and returns that failure, so a client
//! only ever sees one problem at a time.

pub mod coerce;
pub mod fields;

use serde_json::Value;
use thiserror::Error;

use crate::types::{Talk, TalkerInput};
use coerce::{float_value, int_value};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// A check over the whole body; it picks out the field it cares about
pub type BodyCheck = fn(&Value) -> Result<(), ValidationError>;

#[derive(Clone)]
struct Step {
    field: &'static str,
    check: BodyCheck,
}

#[derive(Clone)]
pub struct Pipeline {
    name: &'static str,
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn new(name: &'static str) -> Self {
        Self { name, steps: Vec::new() }
    }

    /// Append a check; checks run in insertion order
    pub fn step(mut self, field: &'static str, check: BodyCheck) -> Self {
        self.steps.push(Step { field, check });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field names in evaluation order
    pub fn fields(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.field).collect()
    }

    /// Run every check in order, returning the first failure
    pub fn run(&self, body: &Value) -> Result<(), ValidationError> {
        for step in &self.steps {
            if let Err(err) = (step.check)(body) {
                tracing::debug!(pipeline = self.name, field = step.field, "validation failed: {}", err);
                return Err(err);
            }
        }
        Ok(())
    }
}

/// POST /login: email, then password
pub fn login_pipeline() -> Pipeline {
    Pipeline::new("login")
        .step("email", |body| fields::validate_email(body.get("email")))
        .step("password", |body| fields::validate_password(body.get("password")))
}

/// POST/PUT /talker: name, age, talk, talk.watchedAt, talk.rate
pub fn talker_pipeline() -> Pipeline {
    Pipeline::new("talker")
        .step("name", |body| fields::validate_name(body.get("name")))
        .step("age", |body| fields::validate_age(body.get("age")))
        .step("talk", |body| fields::validate_talk(body.get("talk")))
        .step("talk.watchedAt", |body| fields::validate_watched_at(body.get("talk")))
        .step("talk.rate", |body| fields::validate_rate(body.get("talk")))
}

impl TalkerInput {
    /// Validate `body` and read it into the typed payload.
    ///
    /// Age is stored as its leading integer and rate as an integer, whatever
    /// form the client sent them in.
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        talker_pipeline().run(body)?;

        let name = body
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| ValidationError::new(fields::NAME_REQUIRED))?;
        let age = body
            .get("age")
            .and_then(int_value)
            .ok_or_else(|| ValidationError::new(fields::AGE_RANGE))?;

        let talk = body.get("talk");
        let watched_at = talk
            .and_then(|t| t.get("watchedAt"))
            .and_then(Value::as_str)
            .ok_or_else(|| ValidationError::new(fields::WATCHED_AT_REQUIRED))?;
        let rate = talk
            .and_then(|t| t.get("rate"))
            .and_then(float_value)
            .ok_or_else(|| ValidationError::new(fields::RATE_RANGE))?;

        Ok(Self {
            name: name.to_string(),
            age,
            talk: Talk {
                watched_at: watched_at.to_string(),
                rate: rate as i64,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_talker() -> Value {
        json!({
            "name": "Danielle Santos",
            "age": 56,
            "talk": { "watchedAt": "22/10/2019", "rate": 5 }
        })
    }

    #[test]
    fn test_login_pipeline_order() {
        assert_eq!(login_pipeline().fields(), vec!["email", "password"]);

        // Both fields missing: email is reported
        let err = login_pipeline().run(&json!({})).unwrap_err();
        assert_eq!(err.message, fields::EMAIL_REQUIRED);

        let err = login_pipeline()
            .run(&json!({ "email": "email@email.com" }))
            .unwrap_err();
        assert_eq!(err.message, "O campo \"password\" é obrigatório");

        assert!(login_pipeline()
            .run(&json!({ "email": "email@email.com", "password": "123456" }))
            .is_ok());
    }

    #[test]
    fn test_talker_pipeline_first_error_wins() {
        assert_eq!(
            talker_pipeline().fields(),
            vec!["name", "age", "talk", "talk.watchedAt", "talk.rate"]
        );

        // Everything is wrong: only the name error surfaces
        let err = talker_pipeline()
            .run(&json!({ "name": "Jo", "age": 10, "talk": "x" }))
            .unwrap_err();
        assert_eq!(err.message, fields::NAME_LENGTH);

        let err = talker_pipeline()
            .run(&json!({ "name": "Joana", "age": 10 }))
            .unwrap_err();
        assert_eq!(err.message, fields::AGE_RANGE);

        let err = talker_pipeline()
            .run(&json!({ "name": "Joana", "age": 20 }))
            .unwrap_err();
        assert_eq!(err.message, fields::TALK_REQUIRED);

        let err = talker_pipeline()
            .run(&json!({ "name": "Joana", "age": 20, "talk": { "rate": 9 } }))
            .unwrap_err();
        assert_eq!(err.message, fields::WATCHED_AT_REQUIRED);

        let err = talker_pipeline()
            .run(&json!({ "name": "Joana", "age": 20, "talk": { "watchedAt": "01/01/2020" } }))
            .unwrap_err();
        assert_eq!(err.message, fields::RATE_REQUIRED);

        assert!(talker_pipeline().run(&valid_talker()).is_ok());
    }

    #[test]
    fn test_custom_pipeline_stops_early() {
        let pipeline = Pipeline::new("custom")
            .step("always", |_| Err(ValidationError::new("first")))
            .step("never", |_| Err(ValidationError::new("second")));

        assert_eq!(pipeline.name(), "custom");
        assert_eq!(pipeline.run(&json!({})).unwrap_err().message, "first");
    }

    #[test]
    fn test_talker_input_from_body() {
        let input = TalkerInput::from_body(&valid_talker()).unwrap();
        assert_eq!(input.name, "Danielle Santos");
        assert_eq!(input.age, 56);
        assert_eq!(input.talk.watched_at, "22/10/2019");
        assert_eq!(input.talk.rate, 5);
    }

    #[test]
    fn test_talker_input_normalizes_numeric_strings() {
        let body = json!({
            "name": "Ricardo Xavier Filho",
            "age": "33",
            "talk": { "watchedAt": "23/10/2020", "rate": "4" }
        });
        let input = TalkerInput::from_body(&body).unwrap();
        assert_eq!(input.age, 33);
        assert_eq!(input.talk.rate, 4);
    }

    #[test]
    fn test_talker_input_rejects_invalid_body() {
        let body = json!({ "name": "Ana", "age": 17, "talk": {} });
        assert_eq!(TalkerInput::from_body(&body).unwrap_err().message, fields::AGE_RANGE);
    }
}
