use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ButtonProps {
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub variant: f::ButtonVariant,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub button_type: Option<f::AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<f::AttrValue>,
    #[prop_or_default]
    pub onclick: f::Callback<f::MouseEvent>,
    #[prop_or_default]
    pub onkeydown: f::Callback<f::KeyboardEvent>,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Button)]
pub fn button(props: &ButtonProps) -> f::Html {
    let mut classes = f::class_list(&["btn"], &props.class);
    classes.push(props.variant.class("btn"));
    let button_type = props.button_type.clone().unwrap_or_else(|| "button".into());
    f::html! {
        <button
            type={button_type}
            class={classes}
            aria-label={props.aria_label.clone()}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
            onkeydown={props.onkeydown.clone()}
        >
            { if props.children.is_empty() {
                props.label.as_ref().map(|l| f::html!{ { l.clone() } }).unwrap_or_default()
            } else {
                props.children.iter().collect::<f::Html>()
            }}
        </button>
    }
}
