pub mod input;
pub mod kana;
pub mod synthesis;
