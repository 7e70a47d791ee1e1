//! Dashed outline with corner markers, the recurring card chrome across the
//! product, security, docs and contact panels. Styling lives in the global
//! style block in `main.rs`.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TechFrameProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(TechFrame)]
pub fn tech_frame(props: &TechFrameProps) -> Html {
    html! {
        <div class={classes!("tech-frame", props.class.clone())}>
            <span class="tech-corner tech-corner-tl"></span>
            <span class="tech-corner tech-corner-tr"></span>
            <span class="tech-corner tech-corner-bl"></span>
            <span class="tech-corner tech-corner-br"></span>
            <div class="tech-frame-inner">
                { for props.children.iter() }
            </div>
        </div>
    }
}
