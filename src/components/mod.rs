mod button;
mod footer;
mod header;
mod input;
mod product_card;
mod search_bar;

pub use button::{Button, ButtonKind};
pub use footer::Footer;
pub use header::Header;
pub use input::Input;
pub use product_card::ProductCard;
pub use search_bar::SearchBar;
