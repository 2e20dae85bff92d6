pub mod badge_shelf;
pub mod fit_headline;
pub mod question_card;
pub mod story_card;
