//! Tests for outbound message rendering and deep links.

use site_intake::message::{render, DeepLinkTarget};
use site_intake::ValidatedForm;

mod fixtures;
use fixtures::*;

fn render_booking(submission: &site_intake::FormSubmission) -> String {
    let form = validator().validate(submission).unwrap();
    render(&form).into_inner()
}

#[test]
fn test_service_label_without_optional_sections() {
    let message = render_booking(&valid_booking());

    assert!(message.contains("Service: Aerial Photography\n"));
    assert!(!message.contains("Budget Range"));
    assert!(!message.contains("Project Description"));
    assert!(message.starts_with("🚁 *DRONE SERVICE BOOKING REQUEST*\n\n"));
    assert!(message.ends_with("Thank you!\n- Gat Tech Hub Ltd Website"));
}

#[test]
fn test_unknown_budget_code_rendered_verbatim() {
    let message = render_booking(&valid_booking().with("budget", "unknown-code"));
    assert!(message.contains("*Budget Range:* unknown-code\n"));
}

#[test]
fn test_known_budget_and_description() {
    let message = render_booking(
        &valid_booking()
            .with("budget", "2500-5000")
            .with("description", "Progress shots of a construction site"),
    );
    assert!(message.contains("*Budget Range:* $2,500 - $5,000\n"));
    assert!(message.contains("*Project Description:*\nProgress shots of a construction site\n"));

    let description_at = message.find("Project Description").unwrap();
    let budget_at = message.find("Budget Range").unwrap();
    assert!(description_at < budget_at);
}

#[test]
fn test_values_rendered_as_entered() {
    let message = render_booking(&valid_booking().with("location", "  Ikeja  "));
    assert!(message.contains("Location:   Ikeja  \n"));
}

#[test]
fn test_date_rendered_as_entered() {
    let message = render_booking(&valid_booking().with("date", "2026-11-5"));
    assert!(message.contains("Date: 2026-11-5\n"));
    assert!(!message.contains("2026-11-05"));
}

#[test]
fn test_rendering_is_byte_identical() {
    let submission = valid_booking().with("budget", "under-500");
    assert_eq!(render_booking(&submission), render_booking(&submission));

    let form = validator().validate(&valid_contact()).unwrap();
    assert_eq!(render(&form), render(&form));
}

#[test]
fn test_contact_message_layout() {
    let form = validator().validate(&valid_contact()).unwrap();
    assert!(matches!(form, ValidatedForm::Contact(_)));

    let message = render(&form).into_inner();
    assert_eq!(
        message,
        "📧 *CONTACT MESSAGE*\n\n\
         *From:* Chidi Okafor\n\
         *Email:* chidi@example.com\n\
         *Subject:* Survey pricing\n\n\
         *Message:*\nHow much for a 5 hectare plot?\n\n\
         - Sent via Gat Tech Hub Ltd Website"
    );
}

#[test]
fn test_deep_link_round_trips_message() {
    let form = validator().validate(&valid_booking()).unwrap();
    let message = render(&form);
    let link = DeepLinkTarget::default().link_for(&message);

    assert!(link.as_str().starts_with("https://wa.me/2347040023236?text="));
    assert_eq!(link.text().as_deref(), Some(message.as_str()));
}
