// Single-field rules. Each one looks at one value and either accepts it or
// returns the message shown to the client.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::coerce::{float_value, int_value, is_falsy, is_integral, text_length};
use super::ValidationError;

pub const EMAIL_REQUIRED: &str = "O campo \"email\" é obrigatório";
pub const EMAIL_FORMAT: &str = "O \"email\" deve ter o formato \"email@email.com\"";
pub const PASSWORD_REQUIRED: &str = "O campo \"password\" é obrigatório";
pub const PASSWORD_LENGTH: &str = "O \"password\" deve ter pelo menos 6 caracteres";
pub const NAME_REQUIRED: &str = "O campo \"name\" é obrigatório";
pub const NAME_LENGTH: &str = "O \"name\" deve ter pelo menos 3 caracteres";
pub const AGE_REQUIRED: &str = "O campo \"age\" é obrigatório";
pub const AGE_RANGE: &str = "O campo \"age\" deve ser um número inteiro igual ou maior que 18";
pub const TALK_REQUIRED: &str = "O campo \"talk\" é obrigatório";
pub const WATCHED_AT_REQUIRED: &str = "O campo \"watchedAt\" é obrigatório";
pub const WATCHED_AT_FORMAT: &str = "O campo \"watchedAt\" deve ter o formato \"dd/mm/aaaa\"";
pub const RATE_REQUIRED: &str = "O campo \"rate\" é obrigatório";
pub const RATE_RANGE: &str = "O campo \"rate\" deve ser um número inteiro entre 1 e 5";

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_NAME_LENGTH: usize = 3;
pub const MIN_AGE: i64 = 18;
pub const RATE_MIN: f64 = 1.0;
pub const RATE_MAX: f64 = 5.0;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex"));

// Pattern only; 31/02/2020 passes
static WATCHED_AT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("valid date regex"));

fn fail(message: &str) -> Result<(), ValidationError> {
    Err(ValidationError::new(message))
}

pub fn validate_email(email: Option<&Value>) -> Result<(), ValidationError> {
    if is_falsy(email) {
        return fail(EMAIL_REQUIRED);
    }

    match email {
        Some(Value::String(s)) if s.trim().is_empty() => fail(EMAIL_REQUIRED),
        Some(Value::String(s)) if EMAIL.is_match(s) => Ok(()),
        _ => fail(EMAIL_FORMAT),
    }
}

pub fn validate_password(password: Option<&Value>) -> Result<(), ValidationError> {
    if is_falsy(password) {
        return fail(PASSWORD_REQUIRED);
    }

    match password {
        Some(Value::String(s)) if s.trim().is_empty() => fail(PASSWORD_REQUIRED),
        Some(Value::String(s)) if text_length(s) >= MIN_PASSWORD_LENGTH => Ok(()),
        _ => fail(PASSWORD_LENGTH),
    }
}

pub fn validate_name(name: Option<&Value>) -> Result<(), ValidationError> {
    if is_falsy(name) {
        return fail(NAME_REQUIRED);
    }

    match name {
        Some(Value::String(s)) if text_length(s) >= MIN_NAME_LENGTH => Ok(()),
        _ => fail(NAME_LENGTH),
    }
}

pub fn validate_age(age: Option<&Value>) -> Result<(), ValidationError> {
    let age = match age {
        Some(value) if !is_falsy(Some(value)) => value,
        _ => return fail(AGE_REQUIRED),
    };

    let integral = float_value(age).map_or(false, is_integral);
    match int_value(age) {
        Some(years) if integral && years >= MIN_AGE => Ok(()),
        _ => fail(AGE_RANGE),
    }
}

pub fn validate_talk(talk: Option<&Value>) -> Result<(), ValidationError> {
    match talk {
        Some(Value::Object(_)) | Some(Value::Array(_)) => Ok(()),
        _ => fail(TALK_REQUIRED),
    }
}

/// `talk` is the parent object; a missing or non-object parent reads as "no watchedAt"
pub fn validate_watched_at(talk: Option<&Value>) -> Result<(), ValidationError> {
    let watched_at = talk.and_then(|t| t.get("watchedAt"));
    if is_falsy(watched_at) {
        return fail(WATCHED_AT_REQUIRED);
    }

    match watched_at {
        Some(Value::String(s)) if WATCHED_AT.is_match(s) => Ok(()),
        _ => fail(WATCHED_AT_FORMAT),
    }
}

/// Presence is checked on the key, so `"rate": 0` is present (and then out of range)
pub fn validate_rate(talk: Option<&Value>) -> Result<(), ValidationError> {
    let rate = match talk.and_then(Value::as_object).and_then(|t| t.get("rate")) {
        Some(rate) => rate,
        None => return fail(RATE_REQUIRED),
    };

    match float_value(rate) {
        Some(r) if is_integral(r) && (RATE_MIN..=RATE_MAX).contains(&r) => Ok(()),
        _ => fail(RATE_RANGE),
    }
}
