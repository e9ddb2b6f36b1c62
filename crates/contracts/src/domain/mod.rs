pub mod a001_merchant;
pub mod common;
