use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_REQUESTED_AMOUNT: f64 = 50_000.0;

pub const CONSENT_NOTICE: &str = "By submitting, you consent to a soft credit check. \
     No impact to your credit score for pre-qualification.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Purpose {
    #[default]
    Unset,
    Home,
    Education,
    Business,
    Personal,
}

impl Purpose {
    pub const ALL: [Purpose; 5] = [
        Purpose::Unset,
        Purpose::Home,
        Purpose::Education,
        Purpose::Business,
        Purpose::Personal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Purpose::Unset => "Select",
            Purpose::Home => "Home improvement",
            Purpose::Education => "Education",
            Purpose::Business => "Business",
            Purpose::Personal => "Personal",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub requested_amount: f64,
    pub purpose: Purpose,
}

impl Default for ApplicationDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            requested_amount: DEFAULT_REQUESTED_AMOUNT,
            purpose: Purpose::Unset,
        }
    }
}

impl ApplicationDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let blank = |s: &str| s.trim().is_empty();
        if blank(&self.full_name) || blank(&self.email) || blank(&self.phone) {
            return Err(ValidationError::MissingContactInfo);
        }
        // NaN fails this comparison too
        if !(self.requested_amount > 0.0) {
            return Err(ValidationError::InvalidAmount);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in name, email and phone.")]
    MissingContactInfo,
    #[error("Loan amount must be greater than 0.")]
    InvalidAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationOutcome {
    #[default]
    None,
    Rejected(ValidationError),
    Accepted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    FullName(String),
    Email(String),
    Phone(String),
    RequestedAmount(f64),
    Purpose(Purpose),
}

#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    draft: ApplicationDraft,
    outcome: ApplicationOutcome,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn outcome(&self) -> &ApplicationOutcome {
        &self.outcome
    }

    pub fn is_submitted(&self) -> bool {
        self.outcome == ApplicationOutcome::Accepted
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self.outcome {
            ApplicationOutcome::Rejected(err) => Some(err),
            _ => None,
        }
    }

    /// Replaces one field of the draft. Leaves any displayed error alone.
    /// Ignored once the application has been accepted.
    pub fn update_field(&mut self, update: FieldUpdate) {
        if self.is_submitted() {
            debug!(?update, "ignoring edit to submitted application");
            return;
        }
        match update {
            FieldUpdate::FullName(v) => self.draft.full_name = v,
            FieldUpdate::Email(v) => self.draft.email = v,
            FieldUpdate::Phone(v) => self.draft.phone = v,
            FieldUpdate::RequestedAmount(v) => self.draft.requested_amount = v,
            FieldUpdate::Purpose(v) => self.draft.purpose = v,
        }
    }

    pub fn submit(&mut self) -> &ApplicationOutcome {
        if self.is_submitted() {
            return &self.outcome;
        }
        self.outcome = match self.draft.validate() {
            Ok(()) => {
                info!(
                    amount = self.draft.requested_amount,
                    purpose = ?self.draft.purpose,
                    "application accepted"
                );
                ApplicationOutcome::Accepted
            }
            Err(err) => {
                info!(%err, "application rejected");
                ApplicationOutcome::Rejected(err)
            }
        };
        &self.outcome
    }

    /// Restores the empty draft and clears the error. An accepted
    /// application stays accepted.
    pub fn reset(&mut self) {
        if self.is_submitted() {
            return;
        }
        debug!("application form reset");
        self.draft = ApplicationDraft::default();
        self.outcome = ApplicationOutcome::None;
    }

    /// Reopens an accepted application for editing, keeping its contents.
    pub fn edit_again(&mut self) {
        if self.is_submitted() {
            debug!("reopening submitted application");
            self.outcome = ApplicationOutcome::None;
        }
    }

    pub fn confirmation(&self) -> Option<String> {
        if !self.is_submitted() {
            return None;
        }
        let name = if self.draft.full_name.trim().is_empty() {
            "applicant"
        } else {
            self.draft.full_name.as_str()
        };
        Some(format!(
            "Thanks, {}. We'll be in touch at {} or {} with the next steps.",
            name, self.draft.email, self.draft.phone
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, phone: &str, amount: f64) -> ApplicationForm {
        let mut form = ApplicationForm::new();
        form.update_field(FieldUpdate::FullName(name.into()));
        form.update_field(FieldUpdate::Email(email.into()));
        form.update_field(FieldUpdate::Phone(phone.into()));
        form.update_field(FieldUpdate::RequestedAmount(amount));
        form
    }

    #[test]
    fn new_form_has_defaults() {
        let form = ApplicationForm::new();
        assert_eq!(form.draft().requested_amount, 50_000.0);
        assert_eq!(form.draft().purpose, Purpose::Unset);
        assert_eq!(form.outcome(), &ApplicationOutcome::None);
        assert!(form.confirmation().is_none());
    }

    #[test]
    fn missing_name_is_rejected() {
        let mut form = filled("", "x@y.com", "123", 1_000.0);
        assert_eq!(
            form.submit(),
            &ApplicationOutcome::Rejected(ValidationError::MissingContactInfo)
        );
        assert!(!form.is_submitted());

        form.update_field(FieldUpdate::FullName("Jane".into()));
        assert_eq!(form.draft().full_name, "Jane");
        // editing does not clear the error
        assert_eq!(form.error(), Some(ValidationError::MissingContactInfo));
    }

    #[test]
    fn whitespace_contact_counts_as_missing() {
        let mut form = filled("Jane", "   ", "123", 1_000.0);
        assert_eq!(form.submit(), &ApplicationOutcome::Rejected(ValidationError::MissingContactInfo));
    }

    #[test]
    fn zero_amount_is_rejected() {
        let mut form = filled("Jane", "jane@x.com", "1234567890", 0.0);
        assert_eq!(
            form.submit(),
            &ApplicationOutcome::Rejected(ValidationError::InvalidAmount)
        );
        assert_eq!(
            form.error().map(|e| e.to_string()).as_deref(),
            Some("Loan amount must be greater than 0.")
        );

        form.update_field(FieldUpdate::RequestedAmount(f64::NAN));
        assert_eq!(
            form.submit(),
            &ApplicationOutcome::Rejected(ValidationError::InvalidAmount)
        );
    }

    #[test]
    fn contact_rule_wins_over_amount_rule() {
        let mut form = filled("", "", "", 0.0);
        assert_eq!(
            form.submit(),
            &ApplicationOutcome::Rejected(ValidationError::MissingContactInfo)
        );
        assert_eq!(
            ValidationError::MissingContactInfo.to_string(),
            "Please fill in name, email and phone."
        );
    }

    #[test]
    fn valid_application_is_accepted_and_frozen() {
        let mut form = filled("Jane", "jane@x.com", "1234567890", 50_000.0);
        form.update_field(FieldUpdate::Purpose(Purpose::Home));
        assert_eq!(form.submit(), &ApplicationOutcome::Accepted);
        assert!(form.is_submitted());

        let text = form.confirmation().unwrap();
        assert!(text.contains("Jane"));
        assert!(text.contains("jane@x.com"));
        assert!(text.contains("1234567890"));

        form.update_field(FieldUpdate::FullName("Mallory".into()));
        assert_eq!(form.draft().full_name, "Jane");

        form.reset();
        assert!(form.is_submitted());
        assert_eq!(form.draft().purpose, Purpose::Home);
    }

    #[test]
    fn rejection_is_cleared_by_successful_resubmit() {
        let mut form = filled("Jane", "jane@x.com", "1234567890", 0.0);
        form.submit();
        form.update_field(FieldUpdate::RequestedAmount(2_500.0));
        assert_eq!(form.submit(), &ApplicationOutcome::Accepted);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn reset_restores_defaults_and_clears_error() {
        let mut form = filled("Ja", "", "98", 12.0);
        form.update_field(FieldUpdate::Purpose(Purpose::Business));
        form.submit();
        assert!(form.error().is_some());

        form.reset();
        assert_eq!(form.draft(), &ApplicationDraft::default());
        assert_eq!(form.draft().requested_amount, 50_000.0);
        assert_eq!(form.draft().purpose, Purpose::Unset);
        assert!(form.draft().full_name.is_empty());
        assert!(form.draft().email.is_empty());
        assert!(form.draft().phone.is_empty());
        assert_eq!(form.outcome(), &ApplicationOutcome::None);
    }

    #[test]
    fn edit_again_reopens_accepted_draft() {
        let mut form = filled("Jane", "jane@x.com", "1234567890", 50_000.0);
        form.submit();
        form.edit_again();
        assert!(!form.is_submitted());
        assert_eq!(form.draft().full_name, "Jane");

        form.update_field(FieldUpdate::Phone("555".into()));
        assert_eq!(form.draft().phone, "555");
    }

    #[test]
    fn purpose_cycles_through_options() {
        assert_eq!(Purpose::Unset.next(), Purpose::Home);
        assert_eq!(Purpose::Personal.next(), Purpose::Unset);
        assert_eq!(Purpose::Unset.prev(), Purpose::Personal);
        assert_eq!(Purpose::Home.label(), "Home improvement");
    }
}
