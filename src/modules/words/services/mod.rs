mod amount_in_words;

pub use amount_in_words::AmountInWords;
