pub mod text_gen;

pub use text_gen::{GeminiClient, fetch_daily_quote, fetch_teaser};
