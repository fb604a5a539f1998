use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonKind {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonKind {
    fn as_str(self) -> &'static str {
        match self {
            ButtonKind::Button => "button",
            ButtonKind::Submit => "submit",
            ButtonKind::Reset => "reset",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub kind: ButtonKind,
    /// Styling hook suffix: "primary", "secondary", "danger", or any other
    /// variant the stylesheet defines.
    #[prop_or(AttrValue::Static("primary"))]
    pub variant: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            class={classes!("btn", format!("btn--{}", props.variant))}
            onclick={props.onclick.clone()}
            type={props.kind.as_str()}
            disabled={props.disabled}
        >
            { props.children.clone() }
        </button>
    }
}
