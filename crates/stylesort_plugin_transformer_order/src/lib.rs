pub use order_transformer::*;

mod order_transformer;
mod scss_comments;
