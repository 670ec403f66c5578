//! Tests for the full intake flow: validation, banner, form reset and the
//! delayed redirect.

use rmcp::ServerHandler;
use site_intake::services::{BOOKING_ACCEPTED_TEXT, CONTACT_ACCEPTED_TEXT, REJECTED_TEXT};
use site_intake::{
    FieldError, FieldFormat, FormSchema, FormSession, IntakeError, IntakeMcpServer,
    IntakeService, Metrics, NoticeKind, RedirectStatus,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

mod fixtures;
mod mocks;
use fixtures::*;
use mocks::RecordingOpener;

fn fill(session: &mut FormSession, submission: &site_intake::FormSubmission) {
    for (name, value) in &submission.values {
        session.set(name.clone(), value.clone());
    }
}

#[test]
fn test_prepare_is_pure() {
    let opener = RecordingOpener::new();
    let metrics = Metrics::new();
    let service = intake_service(Arc::new(opener.clone()), metrics.clone());

    let prepared = service.prepare(&valid_contact()).unwrap();
    assert_eq!(prepared.schema, FormSchema::Contact);
    assert_eq!(prepared.link.text().as_deref(), Some(prepared.message.as_str()));

    assert_eq!(opener.open_count(), 0);
    assert_eq!(metrics.submissions_accepted_total(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_accepted_booking_redirects_once_after_delay() {
    let opener = RecordingOpener::new();
    let metrics = Metrics::new();
    let service = intake_service(Arc::new(opener.clone()), metrics.clone());

    let start = Instant::now();
    let submitted = service.submit(&valid_booking()).unwrap();

    assert_eq!(submitted.notice.kind, NoticeKind::Success);
    assert_eq!(submitted.notice.text, BOOKING_ACCEPTED_TEXT);

    tokio::time::advance(Duration::from_millis(1500)).await;
    assert_eq!(opener.open_count(), 0, "redirect must wait for the delay");

    assert_eq!(submitted.redirect.wait().await, RedirectStatus::Opened);
    assert!(start.elapsed() >= Duration::from_millis(2000));

    tokio::time::advance(Duration::from_secs(60)).await;
    assert_eq!(opener.opened(), vec![submitted.prepared.link.clone()]);
    assert_eq!(metrics.submissions_accepted_total(), 1);
    assert_eq!(metrics.redirects_opened_total(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_rejected_submission_never_redirects() {
    let opener = RecordingOpener::new();
    let metrics = Metrics::new();
    let service = intake_service(Arc::new(opener.clone()), metrics.clone());

    let result = service.submit(&valid_booking().with("email", "ab.co"));
    let report = match result {
        Err(IntakeError::Rejected(report)) => report,
        other => panic!("Expected rejection, got: {:?}", other.map(|s| s.prepared)),
    };
    assert_eq!(
        report.error_for("email"),
        Some(FieldError::Malformed(FieldFormat::Email))
    );

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(opener.open_count(), 0);
    assert_eq!(metrics.submissions_rejected_total(), 1);
    assert_eq!(metrics.redirects_opened_total(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_redirect_is_not_opened() {
    let opener = RecordingOpener::new();
    let service = intake_service(Arc::new(opener.clone()), Metrics::new());

    let mut submitted = service.submit(&valid_contact()).unwrap();
    assert!(submitted.redirect.cancel());
    assert_eq!(submitted.redirect.wait().await, RedirectStatus::Cancelled);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(opener.open_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_opener_failure_is_not_reported_to_the_form() {
    let opener = RecordingOpener::failing();
    let metrics = Metrics::new();
    let service = intake_service(Arc::new(opener.clone()), metrics.clone());

    let mut session = FormSession::new(FormSchema::Contact);
    fill(&mut session, &valid_contact());

    let submitted = tokio_test::assert_ok!(session.submit(&service));
    assert_eq!(submitted.redirect.wait().await, RedirectStatus::Failed);

    assert_eq!(opener.open_count(), 1);
    assert_eq!(metrics.redirects_failed_total(), 1);
    assert_eq!(
        session.notice().map(|n| n.kind),
        Some(NoticeKind::Success)
    );
}

#[tokio::test(start_paused = true)]
async fn test_session_shows_every_error_then_clears_on_next_submit() {
    let opener = RecordingOpener::new();
    let service = intake_service(Arc::new(opener.clone()), Metrics::new());
    let mut session = FormSession::new(FormSchema::Booking);

    fill(&mut session, &valid_booking());
    session.set("phone", "12345");
    session.set("fullName", " ");

    let err = tokio_test::assert_err!(session.submit(&service));
    assert!(matches!(err, IntakeError::Rejected(_)));
    assert_eq!(session.field_error("fullName"), Some(FieldError::Required));
    assert_eq!(
        session.field_error("phone"),
        Some(FieldError::Malformed(FieldFormat::Phone))
    );
    assert_eq!(session.field_errors().count(), 2);
    assert_eq!(session.notice().map(|n| n.text.as_str()), Some(REJECTED_TEXT));
    assert_eq!(session.value("location"), Some("Victoria Island, Lagos"));

    // Fix one field only: the fixed field's error goes away, the other stays
    session.set("phone", "0704 002 3236");
    tokio_test::assert_err!(session.submit(&service));
    assert_eq!(session.field_error("phone"), None);
    assert_eq!(session.field_error("fullName"), Some(FieldError::Required));

    session.set("fullName", "Chidi Okafor");
    let submitted = tokio_test::assert_ok!(session.submit(&service));
    assert_eq!(session.field_errors().count(), 0);
    assert!(session.is_blank());
    assert_eq!(session.value("fullName"), None);

    let notice = session.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.text, BOOKING_ACCEPTED_TEXT);

    assert_eq!(submitted.redirect.wait().await, RedirectStatus::Opened);
    assert_eq!(opener.open_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_session_notice_expires() {
    let service = intake_service(Arc::new(RecordingOpener::new()), Metrics::new());
    let mut session = FormSession::new(FormSchema::Contact);
    fill(&mut session, &valid_contact());

    tokio_test::assert_ok!(session.submit(&service));
    assert_eq!(
        session.notice().map(|n| n.text.as_str()),
        Some(CONTACT_ACCEPTED_TEXT)
    );

    tokio::time::advance(Duration::from_millis(4999)).await;
    assert!(session.notice().is_some());

    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(session.notice().is_none());
}

#[test]
fn test_min_booking_date_matches_clock() {
    let service = intake_service(Arc::new(RecordingOpener::new()), Metrics::new());
    assert_eq!(service.min_booking_date(), "2026-10-18");
}

#[test]
fn test_mcp_server_info() {
    let metrics = Metrics::new();
    let service = Arc::new(intake_service(Arc::new(RecordingOpener::new()), metrics.clone()));
    let server = IntakeMcpServer::new(service, metrics, Duration::from_millis(2000));

    let info = server.get_info();
    assert_eq!(info.server_info.name, "site-intake");
    assert!(info.capabilities.tools.is_some());
}
