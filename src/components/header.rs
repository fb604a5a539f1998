use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <div class="site-header__container">
                <h1 class="site-header__logo">{ "MyShop" }</h1>
                <nav class="site-header__nav">
                    <a href="/" class="site-header__link">{ "Home" }</a>
                    <a href="/products" class="site-header__link">{ "Products" }</a>
                    <a href="/cart" class="site-header__link">{ "Cart" }</a>
                </nav>
            </div>
        </header>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn renders_logo_and_fixed_navigation() {
        let out = ServerRenderer::<Header>::new().hydratable(false).render().await;
        assert!(out.contains(r#"class="site-header""#), "{out}");
        assert!(out.contains("MyShop"), "{out}");
        assert!(out.contains(r#"href="/""#), "{out}");
        assert!(out.contains(r#"href="/products""#), "{out}");
        assert!(out.contains(r#"href="/cart""#), "{out}");
    }
}
