//! Hero illustration

use bigverified::catalog::Graphic as GraphicRef;
use leptos::prelude::*;

/// Hosted image or a gradient panel drawn with CSS.
#[component]
pub fn Graphic(
    graphic: GraphicRef,
    #[prop(default = String::new())] class: String,
) -> impl IntoView {
    match graphic {
        GraphicRef::Asset { src, alt } => view! {
            <img src=src alt=alt class=class />
        }
        .into_any(),
        GraphicRef::Gradient { from, to, alt } => {
            let style = format!("background: linear-gradient(135deg, {from}, {to});");
            let class = format!("hero-graphic {class}").trim_end().to_string();
            view! {
                <div class=class role="img" aria-label=alt style=style></div>
            }
            .into_any()
        }
    }
}
