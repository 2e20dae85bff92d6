mod view;

pub use view::{Props, QuestionCard, is_savable};
