use yew::prelude::*;

use super::button::Button;
use crate::catalog::{format_price, Product, ProductId};

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    pub on_add_to_cart: Callback<ProductId>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    let onclick = {
        let on_add_to_cart = props.on_add_to_cart.clone();
        let id = product.id;
        Callback::from(move |_: MouseEvent| on_add_to_cart.emit(id))
    };

    html! {
        <div class="product-card">
            <img
                src={product.image_url.clone()}
                alt={product.name.clone()}
                class="product-card__image"
            />
            <div class="product-card__content">
                <h3 class="product-card__name">{ product.name.clone() }</h3>
                <p class="product-card__price">{ format_price(product.price) }</p>
                if let Some(description) = &product.description {
                    <p class="product-card__description">{ description.clone() }</p>
                }
                <Button {onclick}>{ "Add to Cart" }</Button>
            </div>
        </div>
    }
}
