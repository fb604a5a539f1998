use yew::prelude::*;

use super::button::{Button, ButtonKind};
use super::input::Input;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    /// Receives the committed term once per submit. Defaults to a no-op.
    #[prop_or_default]
    pub on_search: Callback<String>,
    #[prop_or(AttrValue::Static("Search..."))]
    pub placeholder: AttrValue,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let term = use_state(String::new);

    let on_change = {
        let term = term.clone();
        Callback::from(move |value: String| term.set(value))
    };

    // The term is deliberately left in place after submit.
    let onsubmit = {
        let term = term.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_search.emit((*term).clone());
        })
    };

    html! {
        <form class="search-input-molecule" {onsubmit}>
            <Input
                value={(*term).clone()}
                {on_change}
                placeholder={props.placeholder.clone()}
            />
            <Button kind={ButtonKind::Submit}>{ "Search" }</Button>
        </form>
    }
}
