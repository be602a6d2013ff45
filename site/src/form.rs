use std::{fmt, sync::LazyLock};

use regex::Regex;
use tracing::debug;

pub const ERROR_COLOR: &str = "#EF4444";
pub const NEUTRAL_COLOR: &str = "#D1D5DB";

// something@something.something, no whitespace and a single @
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

// contact form fields
//
// anything other than the four known names only has to be non-empty
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    Other(String),
}

impl Field {
    pub fn min_len(&self) -> Option<usize> {
        match self {
            Field::Name => Some(2),
            Field::Subject => Some(5),
            Field::Message => Some(10),
            Field::Email | Field::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
            Field::Other(name) => name,
        }
    }

    // id of the element that displays this field's error text
    pub fn error_slot(&self) -> String {
        format!("{}-error", self.as_str())
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        match value {
            "name" => Field::Name,
            "email" => Field::Email,
            "subject" => Field::Subject,
            "message" => Field::Message,
            other => Field::Other(other.to_owned()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooShort { field: Field, min: usize },
}

impl FieldError {
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::Required => "required",
            FieldError::InvalidEmail => "invalid_email",
            FieldError::TooShort { .. } => "too_short",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "Este campo é obrigatório."),
            FieldError::InvalidEmail => write!(f, "Por favor, insira um e-mail válido."),
            FieldError::TooShort { field, min } => match field {
                Field::Name => write!(f, "O nome deve ter pelo menos {min} caracteres."),
                Field::Subject => write!(f, "O assunto deve ter pelo menos {min} caracteres."),
                Field::Message => write!(f, "A mensagem deve ter pelo menos {min} caracteres."),
                _ => write!(f, "Este campo deve ter pelo menos {min} caracteres."),
            },
        }
    }
}

impl std::error::Error for FieldError {}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

// validate a single field value
//
// the value is trimmed first; lengths are counted in characters, not bytes
pub fn validate_field(field: &Field, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(FieldError::Required);
    }

    if *field == Field::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }

    if let Some(min) = field.min_len().filter(|&min| value.chars().count() < min) {
        return Err(FieldError::TooShort {
            field: field.clone(),
            min,
        });
    }

    Ok(())
}

// the transient result shown next to a field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub message: String,
}

impl From<Result<(), FieldError>> for Validation {
    fn from(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => Validation {
                valid: true,
                message: String::new(),
            },
            Err(err) => Validation {
                valid: false,
                message: err.to_string(),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Sent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    // at least one field failed; all of them are annotated
    Rejected,
    // the caller should run complete_submission() after the configured delay
    Scheduled,
    // a submission is already in flight or finished
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
struct FieldState {
    field: Field,
    value: String,
    error: Option<FieldError>,
}

// contact form state
//
// each field goes Empty -> (blur) -> Validated, and any edit clears the error again
// without re-validating.  the form as a whole goes Editing -> Submitting -> Sent
#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    fields: Vec<FieldState>,
    phase: Phase,
}

impl ContactForm {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        ContactForm {
            fields: names
                .iter()
                .map(|name| FieldState {
                    field: Field::from(name.as_ref()),
                    value: String::new(),
                    error: None,
                })
                .collect(),
            phase: Phase::Editing,
        }
    }

    fn state(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|s| s.field.as_str() == name)
    }

    fn state_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|s| s.field.as_str() == name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().map(|s| &s.field)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn value(&self, name: &str) -> &str {
        self.state(name).map(|s| s.value.as_str()).unwrap_or("")
    }

    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.state(name).and_then(|s| s.error.as_ref())
    }

    pub fn error_text(&self, name: &str) -> String {
        self.error(name).map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn border_color(&self, name: &str) -> &'static str {
        match self.error(name) {
            Some(_) => ERROR_COLOR,
            None => NEUTRAL_COLOR,
        }
    }

    // input event: store the text and optimistically clear any error
    pub fn edit(&mut self, name: &str, value: impl Into<String>) {
        if let Some(state) = self.state_mut(name) {
            state.value = value.into();
            state.error = None;
        }
    }

    // blur event: validate one field and annotate it
    pub fn blur(&mut self, name: &str) -> Validation {
        match self.state_mut(name) {
            Some(state) => {
                let result = validate_field(&state.field, &state.value);
                state.error = result.clone().err();
                Validation::from(result)
            }
            None => Validation::from(Ok(())),
        }
    }

    // visits every field so all invalid ones are annotated in one pass
    pub fn validate_all(&mut self) -> bool {
        let mut valid = true;

        for state in self.fields.iter_mut() {
            let result = validate_field(&state.field, &state.value);
            if result.is_err() {
                valid = false;
            }
            state.error = result.err();
        }

        valid
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase != Phase::Editing {
            debug!({ phase = ?self.phase }, "ignoring repeated submit");
            return SubmitOutcome::Ignored;
        }

        if !self.validate_all() {
            debug!("contact form rejected");
            return SubmitOutcome::Rejected;
        }

        self.phase = Phase::Submitting;
        debug!("contact form submission scheduled");
        SubmitOutcome::Scheduled
    }

    pub fn complete_submission(&mut self) {
        if self.phase == Phase::Submitting {
            self.phase = Phase::Sent;
            debug!("contact form sent");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

    fn filled() -> ContactForm {
        let mut form = ContactForm::new(&FIELDS);
        form.edit("name", "Ana");
        form.edit("email", "ana@example.com");
        form.edit("subject", "Orçamento");
        form.edit("message", "Gostaria de um site novo.");
        form
    }

    #[test]
    fn empty_values_are_required() {
        for name in FIELDS.iter().chain(["phone"].iter()) {
            let err = validate_field(&Field::from(*name), "   ").unwrap_err();
            assert_eq!(err, FieldError::Required);
            assert_eq!(err.code(), "required");
            assert_eq!(err.to_string(), "Este campo é obrigatório.");
        }
    }

    #[test]
    fn email_pattern() {
        assert!(validate_field(&Field::Email, "a@b.co").is_ok());
        assert!(validate_field(&Field::Email, "  a@b.co  ").is_ok());

        for bad in ["not-an-email", "a@b", "a @b.co", "a@@b.co", "@b.co"] {
            let err = validate_field(&Field::Email, bad).unwrap_err();
            assert_eq!(err, FieldError::InvalidEmail, "{bad}");
            assert_eq!(err.to_string(), "Por favor, insira um e-mail válido.");
        }
    }

    #[test]
    fn minimum_length_boundaries() {
        assert!(validate_field(&Field::Name, "Jo").is_ok());
        assert_eq!(
            validate_field(&Field::Name, "J").unwrap_err().to_string(),
            "O nome deve ter pelo menos 2 caracteres."
        );

        assert!(validate_field(&Field::Subject, "Olá!!").is_ok());
        assert_eq!(
            validate_field(&Field::Subject, "Olá!").unwrap_err().to_string(),
            "O assunto deve ter pelo menos 5 caracteres."
        );

        assert!(validate_field(&Field::Message, "0123456789").is_ok());
        let err = validate_field(&Field::Message, "012345678").unwrap_err();
        assert_eq!(err.code(), "too_short");
        assert_eq!(err.to_string(), "A mensagem deve ter pelo menos 10 caracteres.");
    }

    #[test]
    fn length_ignores_surrounding_whitespace() {
        assert!(validate_field(&Field::Name, "  J  ").is_err());
    }

    // trimming and the email pattern follow unicode White_Space: NEL counts, BOM does not
    #[test]
    fn unicode_whitespace_rules() {
        assert_eq!(validate_field(&Field::Name, "\u{85}\u{85}"), Err(FieldError::Required));
        assert!(validate_field(&Field::Name, "\u{feff}A").is_ok());

        assert!(!is_valid_email("a\u{85}b@c.co"));
        assert!(is_valid_email("a\u{feff}b@c.co"));
    }

    #[test]
    fn unknown_fields_only_need_a_value() {
        assert!(validate_field(&Field::from("phone"), "1").is_ok());
    }

    #[test]
    fn validation_result_carries_message() {
        let ok = Validation::from(validate_field(&Field::Name, "Ana"));
        assert!(ok.valid);
        assert!(ok.message.is_empty());

        let bad = Validation::from(validate_field(&Field::Name, ""));
        assert!(!bad.valid);
        assert_eq!(bad.message, "Este campo é obrigatório.");
    }

    #[test]
    fn error_slot_naming() {
        assert_eq!(Field::Email.error_slot(), "email-error");
        assert_eq!(Field::from("phone").error_slot(), "phone-error");
    }

    #[test]
    fn blur_annotates_and_edit_clears() {
        let mut form = ContactForm::new(&FIELDS);

        form.edit("name", "A");
        assert_eq!(form.border_color("name"), NEUTRAL_COLOR);

        let result = form.blur("name");
        assert!(!result.valid);
        assert_eq!(form.border_color("name"), ERROR_COLOR);
        assert_eq!(form.error_text("name"), "O nome deve ter pelo menos 2 caracteres.");

        // still too short, but editing never re-validates
        form.edit("name", "B");
        assert!(form.error("name").is_none());
        assert_eq!(form.error_text("name"), "");
        assert_eq!(form.border_color("name"), NEUTRAL_COLOR);
    }

    #[test]
    fn validate_all_annotates_every_invalid_field() {
        let mut form = ContactForm::new(&FIELDS);
        form.edit("email", "a@b");
        form.edit("subject", "Olá, tudo bem?");

        assert!(!form.validate_all());
        assert_eq!(form.error("name"), Some(&FieldError::Required));
        assert_eq!(form.error("email"), Some(&FieldError::InvalidEmail));
        assert_eq!(form.error("subject"), None);
        assert_eq!(form.error("message"), Some(&FieldError::Required));
    }

    #[test]
    fn validate_all_is_true_iff_every_field_is() {
        let mut form = filled();
        assert!(form.validate_all());

        form.edit("message", "curta");
        assert!(!form.validate_all());
        assert_eq!(form.fields().count(), 4);
    }

    #[test]
    fn submission_lifecycle() {
        let mut form = ContactForm::new(&FIELDS);
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.phase(), Phase::Editing);

        let mut form = filled();
        assert_eq!(form.submit(), SubmitOutcome::Scheduled);
        assert_eq!(form.phase(), Phase::Submitting);

        assert_eq!(form.submit(), SubmitOutcome::Ignored);

        form.complete_submission();
        assert_eq!(form.phase(), Phase::Sent);
        assert_eq!(form.submit(), SubmitOutcome::Ignored);
    }

    #[test]
    fn completing_without_submitting_does_nothing() {
        let mut form = filled();
        form.complete_submission();
        assert_eq!(form.phase(), Phase::Editing);
    }
}
