pub mod currency;
pub mod recommender;
pub mod report;

pub use currency::Currency;
pub use recommender::{BudgetStatus, Recommendation, Recommender};
pub use report::{render_json, TextReport};
