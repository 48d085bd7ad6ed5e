mod battalion;
pub use battalion::Battalion;

mod route;
pub use route::Route;

mod stat;
pub use stat::Stat;

mod shop;
pub use shop::ShopEntry;

mod quest;
pub use quest::{ChapterStep, QuestSteps, Quests, RoutedStep};
