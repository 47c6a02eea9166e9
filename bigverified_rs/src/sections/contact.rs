use crate::anchors;
use crate::catalog::{ContactContent, ContactField, FieldKind, FieldSpan};
use crate::layout::{ButtonRole, Node, NodeKind};
use crate::submission::SubmissionHandler;

/// Class tag on grid items spanning both columns.
pub const COL_SPAN_FULL: &str = "md:col-span-2";

const FIELD: &str = "p-3 ring-1 ring-gray-100 rounded-lg";

/// Form shell on a two-column grid; the send action comes from `handler`.
///
/// Composition only asks the handler for its form action. It never submits.
pub fn contact_panel(content: &ContactContent, handler: &dyn SubmissionHandler) -> Node {
    let fields = content.fields.iter().map(field);

    let mut hint = Node::block().class("text-sm text-gray-500");
    if !content.email.is_empty() {
        hint = hint
            .child(Node::inline("Or email us at "))
            .child(Node::inline(content.email.as_str()).class("text-indigo-600"));
    }

    let actions = Node::block()
        .class(COL_SPAN_FULL)
        .class("flex items-center justify-between")
        .child(hint)
        .child(
            Node::button(content.send_label.as_str(), ButtonRole::Send)
                .class("bg-indigo-600 text-white px-5 py-3 rounded-lg"),
        );

    let form = Node::new(NodeKind::Form {
        action: handler.form_action(),
    })
    .class("mt-6 grid grid-cols-1 md:grid-cols-2 gap-4")
    .children(fields)
    .child(actions);

    let mut card = Node::block().class("bg-white rounded-xl p-8 shadow-sm");
    if !content.eyebrow.is_empty() {
        card = card.child(
            Node::heading(3, content.eyebrow.as_str())
                .class("text-sm text-indigo-600 font-semibold"),
        );
    }
    card = card
        .child(Node::heading(2, content.heading.as_str()).class("mt-2 text-2xl font-bold"))
        .child(form);

    Node::new(NodeKind::Section)
        .anchor(anchors::CONTACT)
        .class("max-w-4xl mx-auto px-6 py-16")
        .child(card)
}

fn field(field: &ContactField) -> Node {
    let mut node = Node::new(NodeKind::Field {
        name: field.name.clone(),
        placeholder: field.placeholder.clone(),
        kind: field.kind,
        span: field.span,
    })
    .key(format!("field-{}", field.name));
    if field.span == FieldSpan::Full {
        node = node.class(COL_SPAN_FULL);
    }
    node = node.class(FIELD);
    if field.kind == FieldKind::MultiLine {
        node = node.class("h-32");
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSpec;
    use crate::layout::FormAction;
    use crate::submission::testing::RecordingTransport;
    use crate::submission::{NetworkedSubmission, NoopSubmission};
    use pretty_assertions::assert_eq;

    fn spec_field(name: &str, kind: FieldKind, span: FieldSpan) -> ContactField {
        ContactField {
            name: name.into(),
            placeholder: name.into(),
            kind,
            span,
        }
    }

    fn form(section: &Node) -> &Node {
        section
            .walk()
            .find(|n| matches!(n.kind, NodeKind::Form { .. }))
            .expect("form present")
    }

    #[test]
    fn half_fields_share_columns_and_full_field_spans_both() {
        let mut content = CatalogSpec::bigverified().contact;
        content.fields = vec![
            spec_field("name", FieldKind::SingleLine, FieldSpan::Half),
            spec_field("company", FieldKind::SingleLine, FieldSpan::Half),
            spec_field("email", FieldKind::SingleLine, FieldSpan::Half),
            spec_field("phone", FieldKind::SingleLine, FieldSpan::Half),
            spec_field("message", FieldKind::MultiLine, FieldSpan::Full),
        ];
        let section = contact_panel(&content, &NoopSubmission);
        let form = form(&section);

        assert!(form.classes.contains("md:grid-cols-2"));
        let placement: Vec<_> = form
            .children
            .iter()
            .filter_map(|n| match &n.kind {
                NodeKind::Field { name, span, .. } => {
                    Some((name.as_str(), *span, n.classes.contains(COL_SPAN_FULL)))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            placement,
            vec![
                ("name", FieldSpan::Half, false),
                ("company", FieldSpan::Half, false),
                ("email", FieldSpan::Half, false),
                ("phone", FieldSpan::Half, false),
                ("message", FieldSpan::Full, true),
            ]
        );
    }

    #[test]
    fn noop_handler_leaves_form_without_action() {
        let content = CatalogSpec::bigverified().contact;
        let section = contact_panel(&content, &NoopSubmission);

        assert_eq!(form(&section).kind, NodeKind::Form { action: FormAction::None });
        assert!(section.walk().any(|n| matches!(
            &n.kind,
            NodeKind::Button { label, role: ButtonRole::Send } if label == "Send message"
        )));
        assert!(section.walk().any(|n| n.text_content() == Some("hello@bigverified.com")));
    }

    #[test]
    fn composing_never_calls_the_transport() {
        let content = CatalogSpec::bigverified().contact;
        let handler =
            NetworkedSubmission::new("https://example.com/leads", RecordingTransport::default());

        let section = contact_panel(&content, &handler);
        assert_eq!(
            form(&section).kind,
            NodeKind::Form {
                action: FormAction::Post {
                    endpoint: "https://example.com/leads".into()
                }
            }
        );
        assert!(handler.transport().calls.borrow().is_empty());
    }
}
