pub mod catalog;
pub mod contact;
pub mod hero;
pub mod nav;
