use std::time::Duration;

use bublik::auth::{
    AuthRequest, AuthStep, AuthWizard, RequestTicket, SimulatedVerification,
    VerificationService, is_complete_code, sanitize_code,
};
use bublik::models::Identity;
use tracing_test::traced_test;

/// Submits the current step and returns the ticket of the issued request.
fn submit_ticket(wizard: &mut AuthWizard) -> RequestTicket {
    wizard
        .submit()
        .and_then(|request| request.ticket())
        .expect("verification request")
}

/// Drives a wizard to the given step with successful results.
fn wizard_at(step: AuthStep) -> AuthWizard {
    let mut wizard = AuthWizard::new();
    if step == AuthStep::Email {
        return wizard;
    }
    wizard.set_email("a@b.com");
    let ticket = submit_ticket(&mut wizard);
    assert!(wizard.resolve(ticket, Ok(())));
    if step == AuthStep::Code {
        return wizard;
    }
    wizard.set_code("123456");
    let ticket = submit_ticket(&mut wizard);
    assert!(wizard.resolve(ticket, Ok(())));
    wizard
}

#[test]
fn test_code_sanitizing() {
    assert_eq!(sanitize_code("12a34-56789"), "123456");
    assert_eq!(sanitize_code("abc"), "");
    assert!(is_complete_code("123456"));
    assert!(is_complete_code("12 34 56"));
    assert!(!is_complete_code("12345"));
    assert!(!is_complete_code("1234567"));
}

#[test]
fn test_email_guard() {
    let mut wizard = AuthWizard::new();
    assert!(!wizard.can_proceed());
    assert_eq!(wizard.submit(), None);
    wizard.set_email("not-an-email");
    assert!(!wizard.can_proceed());
    wizard.set_email("a@b.com");
    assert!(wizard.can_proceed());
}

#[test]
fn test_code_guard_and_input_cap() {
    let mut wizard = wizard_at(AuthStep::Code);
    wizard.set_code("12345");
    assert!(!wizard.can_proceed());
    wizard.set_code("1234567");
    assert_eq!(wizard.code(), "123456");
    assert!(wizard.can_proceed());
}

#[test]
fn test_profile_guard_normalizes_username() {
    let mut wizard = wizard_at(AuthStep::Profile);
    wizard.set_name("Bob");
    wizard.set_username("!!!");
    assert_eq!(wizard.username(), "");
    assert!(!wizard.can_proceed());
    wizard.set_username("Bob_1");
    assert_eq!(wizard.username(), "bob_1");
    assert!(wizard.can_proceed());
    wizard.set_name("");
    assert!(!wizard.can_proceed());
}

#[test]
fn test_full_sign_in_scenario() {
    // Arrange
    let mut wizard = AuthWizard::new();
    wizard.set_email("a@b.com");
    // Act: email step
    let request = wizard.submit().expect("send code request");
    // Assert
    let ticket = request.ticket().expect("ticket");
    assert_eq!(ticket.step, AuthStep::Email);
    assert_eq!(
        request,
        AuthRequest::SendCode {
            email: "a@b.com".to_string(),
            ticket,
        }
    );
    assert!(wizard.is_busy());
    assert!(!wizard.can_submit());
    assert_eq!(wizard.submit(), None, "no second request while busy");
    assert!(wizard.resolve(ticket, Ok(())));
    assert_eq!(wizard.step(), AuthStep::Code);
    assert!(!wizard.is_busy());

    // Act: code step
    wizard.set_code("123456");
    let request = wizard.submit().expect("verify code request");
    let ticket = request.ticket().expect("ticket");
    assert_eq!(
        request,
        AuthRequest::VerifyCode {
            email: "a@b.com".to_string(),
            code: "123456".to_string(),
            ticket,
        }
    );
    assert!(wizard.resolve(ticket, Ok(())));
    assert_eq!(wizard.step(), AuthStep::Profile);

    // Act: profile step
    wizard.set_username("bob");
    wizard.set_name("Bob");
    let request = wizard.submit();
    // Assert
    assert_eq!(
        request,
        Some(AuthRequest::Complete(Identity::new("a@b.com", "bob", "Bob")))
    );
    assert!(wizard.is_completed());
}

#[test]
fn test_complete_is_emitted_once() {
    let mut wizard = wizard_at(AuthStep::Profile);
    wizard.set_username("bob");
    wizard.set_name("Bob");
    assert!(matches!(wizard.submit(), Some(AuthRequest::Complete(_))));
    assert_eq!(wizard.submit(), None);
    assert!(!wizard.can_submit());
}

#[test]
fn test_reopen_after_failed_save() {
    let mut wizard = wizard_at(AuthStep::Profile);
    wizard.set_username("bob");
    wizard.set_name("Bob");
    assert!(wizard.submit().is_some());
    wizard.reopen("disk full");
    assert_eq!(wizard.error(), Some("disk full"));
    assert!(!wizard.is_completed());
    assert!(matches!(wizard.submit(), Some(AuthRequest::Complete(_))));
}

#[test]
fn test_failed_step_keeps_step_and_reports_error() {
    let mut wizard = AuthWizard::new();
    wizard.set_email("a@b.com");
    let ticket = submit_ticket(&mut wizard);
    assert!(wizard.resolve(ticket, Err("server down".to_string())));
    assert_eq!(wizard.step(), AuthStep::Email);
    assert_eq!(wizard.error(), Some("server down"));
    assert!(wizard.can_submit());
    wizard.set_email("c@d.com");
    assert_eq!(wizard.error(), None);
}

#[test]
fn test_change_email_returns_to_email_step() {
    let mut wizard = wizard_at(AuthStep::Code);
    wizard.set_code("123");
    wizard.change_email();
    assert_eq!(wizard.step(), AuthStep::Email);
    assert_eq!(wizard.code(), "");
    assert_eq!(wizard.email(), "a@b.com");
}

#[test]
#[traced_test]
fn test_stale_result_after_change_email_is_dropped() {
    // Arrange: a verification is in flight when the user goes back
    let mut wizard = wizard_at(AuthStep::Code);
    wizard.set_code("123456");
    let ticket = submit_ticket(&mut wizard);
    wizard.change_email();
    // Act
    let applied = wizard.resolve(ticket, Ok(()));
    // Assert
    assert!(!applied);
    assert_eq!(wizard.step(), AuthStep::Email);
    assert!(!wizard.is_busy());
}

#[test]
fn test_abandoned_verification_does_not_resolve_newer_one() {
    // Arrange: verify a code, go back, then verify again for a new address
    let mut wizard = AuthWizard::new();
    wizard.set_email("old@b.com");
    let send_old = submit_ticket(&mut wizard);
    assert!(wizard.resolve(send_old, Ok(())));
    wizard.set_code("111111");
    let verify_old = submit_ticket(&mut wizard);
    wizard.change_email();
    wizard.set_email("new@b.com");
    let send_new = submit_ticket(&mut wizard);
    assert!(wizard.resolve(send_new, Ok(())));
    wizard.set_code("222222");
    let verify_new = submit_ticket(&mut wizard);
    assert_ne!(verify_old, verify_new);
    // Act: the first verification finishes late
    let applied = wizard.resolve(verify_old, Ok(()));
    // Assert
    assert!(!applied);
    assert_eq!(wizard.step(), AuthStep::Code);
    assert!(wizard.is_busy());
    assert!(wizard.resolve(verify_new, Ok(())));
    assert_eq!(wizard.step(), AuthStep::Profile);
}

#[test]
fn test_result_without_request_is_dropped() {
    let mut wizard = AuthWizard::new();
    wizard.set_email("a@b.com");
    let ticket = RequestTicket {
        step: AuthStep::Email,
        generation: 1,
    };
    assert!(!wizard.resolve(ticket, Ok(())));
    assert_eq!(wizard.step(), AuthStep::Email);
}

#[tokio::test]
async fn test_simulated_verification() {
    let service = SimulatedVerification::with_delay(Duration::ZERO);
    assert!(service.send_code("a@b.com").await.is_ok());
    assert!(service.send_code("nobody").await.is_err());
    assert!(service.verify_code("a@b.com", "123456").await.is_ok());
    assert!(service.verify_code("a@b.com", "12").await.is_err());
}
