pub mod prompt;
pub mod word_list;

pub use prompt::{parse_query, prompt_query};
pub use word_list::{load_word_list, read_word_list};
