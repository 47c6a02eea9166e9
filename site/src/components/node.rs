//! Recursive layout renderer - one HTML element per node.

use bigverified::catalog::FieldKind;
use bigverified::layout::{ButtonRole, FormAction, Node, NodeKind};
use leptos::prelude::*;

use super::Graphic;

/// Renders a layout subtree.
#[component]
pub fn LayoutView(node: Node) -> impl IntoView {
    render_node(&node)
}

/// Whether the enclosing form actually sends anything.
#[derive(Clone, Copy, Default)]
struct Scope {
    live_form: bool,
}

/// Renders `node` and its children. Anchors become `id`, keys become
/// `data-key`.
pub fn render_node(node: &Node) -> AnyView {
    render(node, Scope::default())
}

fn render(node: &Node, scope: Scope) -> AnyView {
    let class = node.classes.to_string();
    let id = node.anchor.clone();
    let key = node.key.clone();

    let scope = match &node.kind {
        NodeKind::Form { action } => Scope {
            live_form: matches!(action, FormAction::Post { .. }),
        },
        _ => scope,
    };
    let children = node
        .children
        .iter()
        .map(|child| render(child, scope))
        .collect::<Vec<_>>();

    match &node.kind {
        NodeKind::Main => {
            view! { <main id=id class=class data-key=key>{children}</main> }.into_any()
        }
        NodeKind::Header => {
            view! { <header id=id class=class data-key=key>{children}</header> }.into_any()
        }
        NodeKind::Nav => {
            view! { <nav id=id class=class data-key=key>{children}</nav> }.into_any()
        }
        NodeKind::Section => {
            view! { <section id=id class=class data-key=key>{children}</section> }.into_any()
        }
        NodeKind::Article => {
            view! { <article id=id class=class data-key=key>{children}</article> }.into_any()
        }
        NodeKind::Footer => {
            view! { <footer id=id class=class data-key=key>{children}</footer> }.into_any()
        }
        NodeKind::Block => {
            view! { <div id=id class=class data-key=key>{children}</div> }.into_any()
        }
        NodeKind::List => {
            view! { <ul id=id class=class data-key=key>{children}</ul> }.into_any()
        }
        NodeKind::Heading { level, text } => {
            heading(*level, text.clone(), Attrs { class, id, key })
        }
        NodeKind::Text { text } => {
            view! { <p id=id class=class data-key=key>{text.clone()}</p> }.into_any()
        }
        NodeKind::Inline { text } => {
            view! { <span id=id class=class data-key=key>{text.clone()}</span> }.into_any()
        }
        NodeKind::ListItem { text } => {
            view! { <li id=id class=class data-key=key>{text.clone()}</li> }.into_any()
        }
        NodeKind::Link { href, label } => view! {
            <a href=href.clone() id=id class=class data-key=key>{label.clone()}</a>
        }
        .into_any(),
        NodeKind::Button { label, role } => {
            button(*role, label.clone(), Attrs { class, id, key }, scope)
        }
        NodeKind::Form { action } => {
            let (method, target) = match action {
                FormAction::None => (None, None),
                FormAction::Post { endpoint } => (Some("post"), Some(endpoint.clone())),
            };
            view! {
                <form id=id class=class data-key=key method=method action=target>
                    {children}
                </form>
            }
            .into_any()
        }
        NodeKind::Field {
            name,
            placeholder,
            kind,
            ..
        } => match kind {
            FieldKind::SingleLine => view! {
                <input
                    name=name.clone()
                    placeholder=placeholder.clone()
                    id=id
                    class=class
                    data-key=key
                />
            }
            .into_any(),
            FieldKind::MultiLine => view! {
                <textarea
                    name=name.clone()
                    placeholder=placeholder.clone()
                    id=id
                    class=class
                    data-key=key
                ></textarea>
            }
            .into_any(),
        },
        NodeKind::Graphic(graphic) => {
            view! { <Graphic graphic=graphic.clone() class=class /> }.into_any()
        }
    }
}

/// Attributes every element carries.
struct Attrs {
    class: String,
    id: Option<String>,
    key: Option<String>,
}

fn heading(level: u8, text: String, attrs: Attrs) -> AnyView {
    let Attrs { class, id, key } = attrs;
    match level {
        1 => view! { <h1 id=id class=class data-key=key>{text}</h1> }.into_any(),
        2 => view! { <h2 id=id class=class data-key=key>{text}</h2> }.into_any(),
        3 => view! { <h3 id=id class=class data-key=key>{text}</h3> }.into_any(),
        4 => view! { <h4 id=id class=class data-key=key>{text}</h4> }.into_any(),
        5 => view! { <h5 id=id class=class data-key=key>{text}</h5> }.into_any(),
        _ => view! { <h6 id=id class=class data-key=key>{text}</h6> }.into_any(),
    }
}

fn button(role: ButtonRole, label: String, attrs: Attrs, scope: Scope) -> AnyView {
    let Attrs { class, id, key } = attrs;
    match role {
        // Presentational only; starts closed and controls nothing outside the bar.
        ButtonRole::MenuToggle => view! {
            <button
                type="button"
                id=id
                class=class
                data-key=key
                aria-label="Toggle navigation"
                aria-expanded="false"
            >
                {label}
            </button>
        }
        .into_any(),
        ButtonRole::Send => {
            let kind = if scope.live_form { "submit" } else { "button" };
            view! { <button type=kind id=id class=class data-key=key>{label}</button> }.into_any()
        }
    }
}
