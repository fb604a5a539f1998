use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Controlled text field: the displayed value is whatever the caller passed
/// in, and every edit is reported upward as the raw new value. No internal
/// buffering.
#[derive(Properties, PartialEq)]
pub struct InputProps {
    #[prop_or(AttrValue::Static("text"))]
    pub kind: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub name: Option<AttrValue>,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let field: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(field.value());
        })
    };

    html! {
        <input
            class="clean-input"
            type={props.kind.clone()}
            value={props.value.clone()}
            {oninput}
            placeholder={props.placeholder.clone()}
            disabled={props.disabled}
            name={props.name.clone()}
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn displays_exactly_the_supplied_value() {
        #[function_component(Wrap)]
        fn wrap() -> Html {
            let on_change = Callback::from(|_: String| ());
            html! { <Input value="shoes" {on_change} /> }
        }
        let out = ServerRenderer::<Wrap>::new().hydratable(false).render().await;
        assert!(out.contains(r#"value="shoes""#), "{out}");
        assert!(out.contains(r#"class="clean-input""#), "{out}");
        assert!(out.contains(r#"type="text""#), "{out}");
    }

    #[tokio::test]
    async fn optional_attributes_only_render_when_given() {
        #[function_component(Bare)]
        fn bare() -> Html {
            let on_change = Callback::from(|_: String| ());
            html! { <Input value="" {on_change} /> }
        }
        let out = ServerRenderer::<Bare>::new().hydratable(false).render().await;
        assert!(!out.contains("placeholder="), "{out}");
        assert!(!out.contains("name="), "{out}");

        #[function_component(Full)]
        fn full() -> Html {
            let on_change = Callback::from(|_: String| ());
            html! { <Input value="" {on_change} placeholder="Type here" name="query" /> }
        }
        let out = ServerRenderer::<Full>::new().hydratable(false).render().await;
        assert!(out.contains(r#"placeholder="Type here""#), "{out}");
        assert!(out.contains(r#"name="query""#), "{out}");
    }
}
