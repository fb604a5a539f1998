use yew::prelude::*;

use crate::components::{Footer, Header};

#[derive(Properties, PartialEq)]
pub struct ProductListingTemplateProps {
    #[prop_or_default]
    pub children: Children,
}

/// Page chrome: injected content sandwiched between the site header and
/// footer.
#[function_component(ProductListingTemplate)]
pub fn product_listing_template(props: &ProductListingTemplateProps) -> Html {
    html! {
        <div class="product-listing-template">
            <Header />
            <main class="product-listing-template__main">
                { props.children.clone() }
            </main>
            <Footer />
        </div>
    }
}
