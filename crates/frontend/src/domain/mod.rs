pub mod a001_merchant;
