mod catalog;
mod components;
mod layout;
mod pages;

use yew::prelude::*;

use pages::HomePage;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="app-container">
            <HomePage />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
