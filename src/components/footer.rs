use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="site-footer__content">
                <p>{ format!("© {} MyShop. All rights reserved.", current_year()) }</p>
                <div class="site-footer__links">
                    <a href="/privacy">{ "Privacy" }</a>
                    <a href="/terms">{ "Terms" }</a>
                </div>
            </div>
        </footer>
    }
}
