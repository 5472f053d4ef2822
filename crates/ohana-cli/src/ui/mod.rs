pub mod star_field;
pub mod toast;
pub mod widgets;
