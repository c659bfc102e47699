use super::*;

#[test]
fn control_class_marks_errors() {
    assert_eq!(control_class(false), "form-control");
    assert_eq!(control_class(true), "form-control form-control--error");
}

#[test]
fn submit_label_switches_while_busy() {
    assert_eq!(submit_label(false, "Send Message", "Sending Message..."), "Send Message");
    assert_eq!(submit_label(true, "Send Message", "Sending Message..."), "Sending Message...");
}

#[test]
fn reveal_label_names_the_next_action() {
    assert_eq!(reveal_label(false), "Show");
    assert_eq!(reveal_label(true), "Hide");
}

#[test]
fn input_kinds_map_to_html_types() {
    let attrs: Vec<_> = [InputKind::Text, InputKind::Email, InputKind::Tel].map(InputKind::as_attr).to_vec();
    assert_eq!(attrs, vec!["text", "email", "tel"]);
}
