//! Two-step booking wizard.
//!
//! Step 1 collects party size, date and time; step 2 collects contact
//! details and shows a summary. Transitions that are not allowed are
//! no-ops, mirroring the disabled buttons that gate them on screen.

use chrono::NaiveDate;
use tracing::debug;

use crate::draft::{BookingDraft, PartySize, Reservation, TimeSlot};
use crate::error::{BookingError, Result};

/// Current page of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Details,
    Contact,
}

impl WizardStep {
    /// 1-based position, as shown in "Step N of 2".
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Details => 1,
            WizardStep::Contact => 2,
        }
    }

    pub const COUNT: u8 = 2;

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Details => "Table Details",
            WizardStep::Contact => "Contact Information",
        }
    }

    /// Fraction of the progress bar to fill.
    pub fn progress(self) -> f32 {
        f32::from(self.number()) / f32::from(Self::COUNT)
    }

    /// Caption of the primary footer button.
    pub fn primary_action(self) -> &'static str {
        match self {
            WizardStep::Details => "Continue",
            WizardStep::Contact => "Confirm Reservation",
        }
    }
}

/// The booking state machine: a draft plus the step it is on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingWizard {
    step: WizardStep,
    draft: BookingDraft,
}

impl BookingWizard {
    /// A freshly mounted wizard: step 1, every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    // ===== Field Updates =====

    pub fn set_party_size(&mut self, party_size: PartySize) {
        self.draft.party_size = Some(party_size);
    }

    /// Sets the date, rejecting anything before `today`.
    ///
    /// A previously chosen time is kept.
    pub fn set_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<()> {
        if date < today {
            return Err(BookingError::DateInPast { date, today });
        }
        self.draft.date = Some(date);
        Ok(())
    }

    /// Parses a typed `YYYY-MM-DD` date and sets it.
    pub fn set_date_str(&mut self, input: &str, today: NaiveDate) -> Result<()> {
        let input = input.trim();
        let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map_err(|_| BookingError::InvalidDate(input.to_string()))?;
        self.set_date(date, today)
    }

    pub fn set_time(&mut self, time: TimeSlot) {
        self.draft.time = Some(time);
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.draft.customer_name = name.into();
    }

    pub fn set_customer_phone(&mut self, phone: impl Into<String>) {
        self.draft.customer_phone = phone.into();
    }

    /// Mutable access to the contact fields for text inputs.
    pub fn contact_fields_mut(&mut self) -> (&mut String, &mut String) {
        (&mut self.draft.customer_name, &mut self.draft.customer_phone)
    }

    // ===== Guards =====

    pub fn can_advance(&self) -> bool {
        self.step == WizardStep::Details && self.draft.is_step1_valid()
    }

    pub fn can_confirm(&self) -> bool {
        self.step == WizardStep::Contact && self.draft.has_contact_details()
    }

    /// Whether the primary button of the current step is enabled.
    pub fn primary_enabled(&self) -> bool {
        match self.step {
            WizardStep::Details => self.can_advance(),
            WizardStep::Contact => self.can_confirm(),
        }
    }

    // ===== Transitions =====

    /// Moves to the contact step if step 1 is complete; otherwise does nothing.
    pub fn advance(&mut self) -> WizardStep {
        if self.can_advance() {
            self.step = WizardStep::Contact;
        }
        self.step
    }

    /// Returns to the details step. Fields are kept.
    pub fn back(&mut self) -> WizardStep {
        self.step = WizardStep::Details;
        self.step
    }

    /// Finalizes the booking.
    ///
    /// On success the draft is discarded and the wizard starts over; the
    /// returned record is the only copy.
    pub fn confirm(&mut self) -> Option<Reservation> {
        if !self.can_confirm() {
            return None;
        }
        let reservation = self.draft.to_reservation()?;
        debug!("booking draft finalized, resetting wizard");
        *self = Self::new();
        Some(reservation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled_step1(today: NaiveDate) -> BookingWizard {
        let mut wizard = BookingWizard::new();
        wizard.set_party_size(PartySize::Two);
        wizard.set_date(today, today).unwrap();
        wizard.set_time("19:00".parse().unwrap());
        wizard
    }

    #[test]
    fn test_fresh_wizard() {
        let wizard = BookingWizard::new();
        assert_eq!(wizard.step(), WizardStep::Details);
        assert_eq!(wizard.draft(), &BookingDraft::default());
        assert!(!wizard.primary_enabled());
    }

    #[test]
    fn test_step_presentation() {
        assert_eq!(WizardStep::Details.number(), 1);
        assert_eq!(WizardStep::Contact.number(), 2);
        assert_eq!(WizardStep::Details.progress(), 0.5);
        assert_eq!(WizardStep::Contact.progress(), 1.0);
        assert_eq!(WizardStep::Details.primary_action(), "Continue");
        assert_eq!(WizardStep::Contact.label(), "Contact Information");
    }

    #[test]
    fn test_advance_blocked_when_any_field_missing() {
        let today = date(2025, 5, 20);
        for missing in 0..3 {
            let mut wizard = BookingWizard::new();
            if missing != 0 {
                wizard.set_party_size(PartySize::Three);
            }
            if missing != 1 {
                wizard.set_date(date(2025, 6, 1), today).unwrap();
            }
            if missing != 2 {
                wizard.set_time("18:30".parse().unwrap());
            }

            assert!(!wizard.can_advance());
            assert_eq!(wizard.advance(), WizardStep::Details, "field {missing} missing");
        }
    }

    #[test]
    fn test_advance_and_back() {
        let today = date(2025, 5, 20);
        let mut wizard = filled_step1(today);

        assert_eq!(wizard.advance(), WizardStep::Contact);
        // Already at the last step.
        assert_eq!(wizard.advance(), WizardStep::Contact);

        let draft_before = wizard.draft().clone();
        assert_eq!(wizard.back(), WizardStep::Details);
        assert_eq!(wizard.draft(), &draft_before);
        assert_eq!(wizard.back(), WizardStep::Details);
    }

    #[test]
    fn test_setters_replace_one_field() {
        let today = date(2025, 5, 20);
        let mut wizard = filled_step1(today);
        let before = wizard.draft().clone();

        wizard.set_party_size(PartySize::FivePlus);
        assert_eq!(wizard.draft().party_size, Some(PartySize::FivePlus));
        assert_eq!(wizard.draft().date, before.date);
        assert_eq!(wizard.draft().time, before.time);
        assert_eq!(wizard.draft().customer_name, before.customer_name);
    }

    #[test]
    fn test_changing_date_keeps_time() {
        let today = date(2025, 5, 20);
        let mut wizard = filled_step1(today);
        let time = wizard.draft().time;

        wizard.set_date(date(2025, 7, 4), today).unwrap();
        assert_eq!(wizard.draft().date, Some(date(2025, 7, 4)));
        assert_eq!(wizard.draft().time, time);
    }

    #[test]
    fn test_past_dates_rejected() {
        let today = date(2025, 5, 20);
        let mut wizard = BookingWizard::new();

        assert!(wizard.set_date(today, today).is_ok());
        assert_eq!(wizard.draft().date, Some(today));

        let yesterday = today.pred_opt().unwrap();
        let err = wizard.set_date(yesterday, today).unwrap_err();
        assert!(matches!(err, BookingError::DateInPast { date, .. } if date == yesterday));
        assert_eq!(wizard.draft().date, Some(today));

        assert!(wizard.set_date(date(2024, 12, 31), today).is_err());
        assert!(wizard.set_date(date(2030, 1, 1), today).is_ok());
    }

    #[test]
    fn test_typed_dates() {
        let today = date(2025, 5, 20);
        let mut wizard = BookingWizard::new();

        wizard.set_date_str(" 2025-06-01 ", today).unwrap();
        assert_eq!(wizard.draft().date, Some(date(2025, 6, 1)));

        assert!(matches!(
            wizard.set_date_str("06/01/2025", today),
            Err(BookingError::InvalidDate(_))
        ));
        assert!(matches!(
            wizard.set_date_str("2025-02-30", today),
            Err(BookingError::InvalidDate(_))
        ));
        assert!(matches!(
            wizard.set_date_str("2025-05-19", today),
            Err(BookingError::DateInPast { .. })
        ));
        assert_eq!(wizard.draft().date, Some(date(2025, 6, 1)));
    }

    #[test]
    fn test_confirm_requires_contact_step_and_details() {
        let today = date(2025, 5, 20);
        let mut wizard = filled_step1(today);
        wizard.set_customer_name("Jane Doe");
        wizard.set_customer_phone("+15550000000");

        // Still on step 1.
        assert!(!wizard.can_confirm());
        assert_eq!(wizard.confirm(), None);

        wizard.advance();
        wizard.set_customer_phone("");
        assert!(!wizard.primary_enabled());
        assert_eq!(wizard.confirm(), None);
        assert_eq!(wizard.step(), WizardStep::Contact);

        wizard.set_customer_phone("+15550000000");
        let reservation = wizard.confirm().unwrap();
        assert_eq!(reservation.party_size, PartySize::Two);
        assert_eq!(reservation.date, today);
        assert_eq!(reservation.customer_phone, "+15550000000");

        assert_eq!(wizard, BookingWizard::new());
    }

    #[test]
    fn test_contact_fields_mut() {
        let mut wizard = BookingWizard::new();
        let (name, phone) = wizard.contact_fields_mut();
        name.push_str("Ada");
        phone.push_str("555");
        assert_eq!(wizard.draft().customer_name, "Ada");
        assert_eq!(wizard.draft().customer_phone, "555");
    }
}
