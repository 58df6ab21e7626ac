//! Email-verification-gated registration workflow.
//!
//! Pure state machine: no I/O happens here. The popup component asks the flow
//! whether an action is allowed, performs the HTTP call, and feeds the outcome
//! back through the `*_succeeded` / `*_failed` transitions. This keeps the
//! ordering rules (code before account, one call in flight, session touched
//! exactly once) testable without a browser or a backend.

use thiserror::Error;

/// Number of single-character code entry slots.
pub const CODE_SLOTS: usize = 6;

/// Locally held, unsaved registration input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationDraft {
    /// A code may only be requested once email and password are filled in.
    /// Full name is optional metadata forwarded for display.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

/// An issued verification code plus the user's entry so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVerification {
    issued_code: String,
    slots: [String; CODE_SLOTS],
}

impl PendingVerification {
    fn new(issued_code: String) -> Self {
        Self {
            issued_code,
            slots: Default::default(),
        }
    }

    /// The entry in the given slot; empty for out-of-range indexes.
    pub fn slot(&self, index: usize) -> &str {
        self.slots.get(index).map(String::as_str).unwrap_or("")
    }

    /// True once every slot holds a character.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| !s.is_empty())
    }

    /// The entered characters concatenated in slot order.
    pub fn entered_code(&self) -> String {
        self.slots.concat()
    }

    fn clear_slots(&mut self) {
        self.slots = Default::default();
    }
}

/// Everything that can go wrong, recovered locally into the Failed state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Could not reach the server. Please try again.")]
    Network,
    #[error("{0}")]
    ServerRejected(String),
    #[error("The code you entered is incorrect")]
    CodeMismatch,
    #[error("{0}")]
    RegistrationRejected(String),
}

/// Exactly one status at a time; drives which affordances are enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlowStatus {
    #[default]
    Idle,
    SendingCode,
    CodeSent,
    Verifying,
    Verified,
    Failed(FlowError),
}

/// Result of checking the entered digits against the issued code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeCheck {
    Match,
    Mismatch,
}

/// The registration workflow for a single signup popup instance.
///
/// Dropped wholesale when the popup closes, which is what discards the draft
/// and any pending verification.
#[derive(Debug, Clone, Default)]
pub struct VerificationFlow {
    draft: RegistrationDraft,
    pending: Option<PendingVerification>,
    status: FlowStatus,
}

impl VerificationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &FlowStatus {
        &self.status
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn pending(&self) -> Option<&PendingVerification> {
        self.pending.as_ref()
    }

    /// The human-readable failure reason, if the flow is in the Failed state.
    pub fn failure(&self) -> Option<&FlowError> {
        match &self.status {
            FlowStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn set_full_name(&mut self, value: String) {
        self.draft.full_name = value;
    }

    pub fn set_email(&mut self, value: String) {
        self.draft.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.draft.password = value;
    }

    /// Whether the "request code" action is currently allowed.
    pub fn can_request_code(&self) -> bool {
        self.draft.is_complete()
            && !matches!(self.status, FlowStatus::SendingCode | FlowStatus::Verifying)
    }

    /// Gate for the code request. Returns `true` when the caller should issue
    /// the HTTP call; `false` means the action is disabled and nothing changed.
    /// A fresh request clears any previous failure reason.
    pub fn begin_code_request(&mut self) -> bool {
        if !self.can_request_code() {
            return false;
        }
        self.status = FlowStatus::SendingCode;
        true
    }

    /// Apply a successful code-request response. The issued code is opaque to
    /// the client; it is only ever compared for exact equality.
    pub fn code_request_succeeded(&mut self, issued_code: String) {
        if self.status != FlowStatus::SendingCode {
            return;
        }
        self.pending = Some(PendingVerification::new(issued_code));
        self.status = FlowStatus::CodeSent;
    }

    pub fn code_request_failed(&mut self, error: FlowError) {
        if self.status != FlowStatus::SendingCode {
            return;
        }
        self.status = FlowStatus::Failed(error);
    }

    /// Record a keystroke in a code slot, keeping at most the last character
    /// typed. Returns the slot that should receive focus next: entering a
    /// character advances to the following slot, except past the last one.
    /// Editing a slot while in the Failed state clears the reason and returns
    /// the flow to code entry.
    pub fn enter_slot(&mut self, index: usize, value: &str) -> Option<usize> {
        let pending = self.pending.as_mut()?;
        if index >= CODE_SLOTS {
            return None;
        }

        pending.slots[index] = value.chars().last().map(String::from).unwrap_or_default();

        if matches!(self.status, FlowStatus::Failed(_)) {
            self.status = FlowStatus::CodeSent;
        }

        if self.pending.as_ref()?.slots[index].is_empty() || index + 1 >= CODE_SLOTS {
            None
        } else {
            Some(index + 1)
        }
    }

    /// Whether the "verify" action is currently allowed.
    pub fn can_verify(&self) -> bool {
        let complete = self.pending.as_ref().is_some_and(|p| p.is_complete());
        complete && matches!(self.status, FlowStatus::CodeSent | FlowStatus::Failed(_))
    }

    /// Check the entered digits against the issued code. On a match the flow
    /// enters Verifying and the caller must invoke the registration call; on a
    /// mismatch the slots reset and the flow awaits re-entry of the same code.
    /// Returns `None` when verification is not currently allowed.
    pub fn submit_code(&mut self) -> Option<CodeCheck> {
        if !self.can_verify() {
            return None;
        }
        let pending = self.pending.as_mut()?;
        if pending.entered_code() == pending.issued_code {
            self.status = FlowStatus::Verifying;
            Some(CodeCheck::Match)
        } else {
            pending.clear_slots();
            self.status = FlowStatus::Failed(FlowError::CodeMismatch);
            Some(CodeCheck::Mismatch)
        }
    }

    /// Registration completed: terminal state. The popup shows the success
    /// indication briefly and tears the whole instance down.
    pub fn registration_succeeded(&mut self) {
        if self.status != FlowStatus::Verifying {
            return;
        }
        self.pending = None;
        self.status = FlowStatus::Verified;
    }

    /// Registration rejected: stay on the code entry screen with the issued
    /// code and entered digits retained so the user may verify again.
    pub fn registration_failed(&mut self, error: FlowError) {
        if self.status != FlowStatus::Verifying {
            return;
        }
        self.status = FlowStatus::Failed(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> RegistrationDraft {
        RegistrationDraft {
            full_name: "Ann".into(),
            email: "a@x.com".into(),
            password: "pw123".into(),
        }
    }

    fn flow_with_draft(draft: RegistrationDraft) -> VerificationFlow {
        let mut flow = VerificationFlow::new();
        flow.set_full_name(draft.full_name);
        flow.set_email(draft.email);
        flow.set_password(draft.password);
        flow
    }

    fn flow_at_code_entry(issued: &str) -> VerificationFlow {
        let mut flow = flow_with_draft(ann());
        assert!(flow.begin_code_request());
        flow.code_request_succeeded(issued.into());
        flow
    }

    fn enter_code(flow: &mut VerificationFlow, code: &str) {
        for (i, ch) in code.chars().enumerate() {
            flow.enter_slot(i, &ch.to_string());
        }
    }

    #[test]
    fn request_code_refused_until_email_and_password_present() {
        let mut flow = VerificationFlow::new();
        assert!(!flow.can_request_code());
        assert!(!flow.begin_code_request());
        assert_eq!(flow.status(), &FlowStatus::Idle);

        flow.set_email("a@x.com".into());
        assert!(!flow.can_request_code());

        flow.set_password("pw123".into());
        assert!(flow.can_request_code());

        // Full name stays optional.
        assert!(flow.begin_code_request());
        assert_eq!(flow.status(), &FlowStatus::SendingCode);
    }

    #[test]
    fn request_code_refused_while_one_is_in_flight() {
        let mut flow = flow_with_draft(ann());
        assert!(flow.begin_code_request());
        assert!(!flow.can_request_code());
        assert!(!flow.begin_code_request());
    }

    #[test]
    fn code_request_success_presents_six_empty_slots() {
        let flow = flow_at_code_entry("482913");
        assert_eq!(flow.status(), &FlowStatus::CodeSent);

        let pending = flow.pending().expect("pending verification");
        for i in 0..CODE_SLOTS {
            assert_eq!(pending.slot(i), "");
        }
        assert!(!flow.can_verify());
    }

    #[test]
    fn code_request_failure_surfaces_reason_and_allows_retry() {
        let mut flow = flow_with_draft(ann());
        assert!(flow.begin_code_request());
        flow.code_request_failed(FlowError::ServerRejected("mail rejected".into()));

        assert_eq!(
            flow.failure(),
            Some(&FlowError::ServerRejected("mail rejected".into()))
        );
        assert!(flow.pending().is_none());

        // A fresh request clears the reason.
        assert!(flow.begin_code_request());
        assert_eq!(flow.status(), &FlowStatus::SendingCode);
    }

    #[test]
    fn verify_disabled_until_every_slot_is_populated() {
        let mut flow = flow_at_code_entry("482913");
        enter_code(&mut flow, "48291");
        assert!(!flow.can_verify());
        assert_eq!(flow.submit_code(), None);

        flow.enter_slot(5, "3");
        assert!(flow.can_verify());
    }

    #[test]
    fn slot_entry_keeps_one_character_and_advances_focus() {
        let mut flow = flow_at_code_entry("482913");

        assert_eq!(flow.enter_slot(0, "4"), Some(1));
        // Typing into an already-filled slot keeps the last character only.
        assert_eq!(flow.enter_slot(0, "48"), Some(1));
        assert_eq!(flow.pending().unwrap().slot(0), "8");

        // Clearing a slot does not advance.
        assert_eq!(flow.enter_slot(0, ""), None);
        assert_eq!(flow.pending().unwrap().slot(0), "");

        // The last slot never advances past the end.
        assert_eq!(flow.enter_slot(5, "3"), None);
    }

    #[test]
    fn out_of_range_slot_access_is_harmless() {
        let mut flow = flow_at_code_entry("482913");
        assert_eq!(flow.pending().unwrap().slot(CODE_SLOTS), "");
        assert_eq!(flow.pending().unwrap().slot(usize::MAX), "");

        // Writing past the last slot is ignored too.
        assert_eq!(flow.enter_slot(CODE_SLOTS, "9"), None);
        assert_eq!(flow.status(), &FlowStatus::CodeSent);
    }

    #[test]
    fn slot_entry_before_any_code_is_issued_is_ignored() {
        let mut flow = flow_with_draft(ann());
        assert_eq!(flow.enter_slot(0, "1"), None);
        assert_eq!(flow.status(), &FlowStatus::Idle);
    }

    #[test]
    fn verify_succeeds_only_on_exact_equality() {
        // Case-sensitive, no trimming: the issued code is opaque.
        let mut flow = flow_at_code_entry("4829aB");
        enter_code(&mut flow, "4829ab");
        assert_eq!(flow.submit_code(), Some(CodeCheck::Mismatch));

        enter_code(&mut flow, "4829aB");
        assert_eq!(flow.submit_code(), Some(CodeCheck::Match));
        assert_eq!(flow.status(), &FlowStatus::Verifying);
    }

    #[test]
    fn mismatch_clears_slots_and_returns_to_code_entry_without_new_request() {
        let mut flow = flow_at_code_entry("482913");
        enter_code(&mut flow, "000000");

        assert_eq!(flow.submit_code(), Some(CodeCheck::Mismatch));
        assert_eq!(flow.failure(), Some(&FlowError::CodeMismatch));

        let pending = flow.pending().expect("issued code retained");
        assert!(!pending.is_complete());
        for i in 0..CODE_SLOTS {
            assert_eq!(pending.slot(i), "");
        }

        // First edit clears the reason and re-enters code entry; the retained
        // code still matches, so no new request is needed.
        flow.enter_slot(0, "4");
        assert_eq!(flow.status(), &FlowStatus::CodeSent);
        enter_code(&mut flow, "482913");
        assert_eq!(flow.submit_code(), Some(CodeCheck::Match));
    }

    #[test]
    fn registration_success_reaches_verified_and_drops_pending() {
        let mut flow = flow_at_code_entry("482913");
        enter_code(&mut flow, "482913");
        assert_eq!(flow.submit_code(), Some(CodeCheck::Match));

        flow.registration_succeeded();
        assert_eq!(flow.status(), &FlowStatus::Verified);
        assert!(flow.pending().is_none());
    }

    #[test]
    fn registration_failure_keeps_code_entry_and_allows_reverify() {
        let mut flow = flow_at_code_entry("482913");
        enter_code(&mut flow, "482913");
        assert_eq!(flow.submit_code(), Some(CodeCheck::Match));

        flow.registration_failed(FlowError::RegistrationRejected("User already exists".into()));
        assert_eq!(
            flow.failure(),
            Some(&FlowError::RegistrationRejected("User already exists".into()))
        );

        // Issued code and entered digits are retained; re-verify is allowed
        // straight from the failure display.
        assert!(flow.can_verify());
        assert_eq!(flow.submit_code(), Some(CodeCheck::Match));
    }

    #[test]
    fn stale_completions_in_the_wrong_status_are_ignored() {
        let mut flow = flow_with_draft(ann());

        // No request in flight: nothing to apply.
        flow.code_request_succeeded("482913".into());
        assert_eq!(flow.status(), &FlowStatus::Idle);
        flow.code_request_failed(FlowError::Network);
        assert_eq!(flow.status(), &FlowStatus::Idle);

        // Not verifying: registration outcomes do not apply.
        flow.registration_succeeded();
        assert_eq!(flow.status(), &FlowStatus::Idle);
        flow.registration_failed(FlowError::Network);
        assert_eq!(flow.status(), &FlowStatus::Idle);
    }

    #[test]
    fn full_success_scenario() {
        let mut flow = flow_with_draft(ann());
        assert!(flow.begin_code_request());
        flow.code_request_succeeded("482913".into());
        enter_code(&mut flow, "482913");
        assert_eq!(flow.submit_code(), Some(CodeCheck::Match));

        // The caller registers with the full draft at this point.
        assert_eq!(flow.draft().full_name, "Ann");
        assert_eq!(flow.draft().email, "a@x.com");
        assert_eq!(flow.draft().password, "pw123");

        flow.registration_succeeded();
        assert_eq!(flow.status(), &FlowStatus::Verified);
    }

    #[test]
    fn wrong_code_scenario() {
        let mut flow = flow_with_draft(ann());
        assert!(flow.begin_code_request());
        flow.code_request_succeeded("482913".into());
        enter_code(&mut flow, "000000");

        assert_eq!(flow.submit_code(), Some(CodeCheck::Mismatch));
        assert_eq!(flow.failure(), Some(&FlowError::CodeMismatch));
        assert!(flow.pending().is_some_and(|p| p.entered_code().is_empty()));
    }
}
