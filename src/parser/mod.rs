pub mod background;
pub mod tokenizer;
