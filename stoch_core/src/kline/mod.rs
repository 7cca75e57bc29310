pub mod price_bar;
