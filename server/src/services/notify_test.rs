use super::*;
use time::OffsetDateTime;
use uuid::Uuid;

fn row(subject: &str, message: &str) -> ContactMessageRow {
    ContactMessageRow {
        id: Uuid::nil(),
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: subject.to_owned(),
        message: message.to_owned(),
        created_at: OffsetDateTime::UNIX_EPOCH,
    }
}

#[test]
fn escape_html_replaces_markup() {
    assert_eq!(escape_html(r#"<b>"hi" & 'bye'</b>"#), "&lt;b&gt;&quot;hi&quot; &amp; &#39;bye&#39;&lt;/b&gt;");
    assert_eq!(escape_html("plain text"), "plain text");
}

#[test]
fn render_template_injects_every_field() {
    let html = render_contact_notification(&row("Hello", "Line one\nLine two"));
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("ada@example.com"));
    assert!(html.contains("Hello"));
    assert!(html.contains("Line one\nLine two"));
    assert!(!html.contains("{{"));
}

#[test]
fn render_template_escapes_visitor_input() {
    let html = render_contact_notification(&row("<script>", "x"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn subject_prefixes_visitor_subject() {
    assert_eq!(notification_subject(&row("Collab", "x")), "Portfolio contact: Collab");
}

#[test]
fn render_template_keeps_placeholder_lookalikes_literal() {
    let html = render_contact_notification(&row("{{MESSAGE}}", "SECRET BODY"));
    assert!(html.contains(r#"font-weight:600;">{{MESSAGE}}</p>"#), "subject was re-substituted");
    assert_eq!(html.matches("SECRET BODY").count(), 1);
}

#[test]
fn render_template_keeps_name_lookalike_literal() {
    let mut message = row("Real subject", "x");
    message.name = "{{SUBJECT}}".to_owned();
    let html = render_contact_notification(&message);
    assert!(html.contains("{{SUBJECT}} &lt;"));
    assert_eq!(html.matches("Real subject").count(), 1);
}
