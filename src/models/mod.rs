pub mod booking;
pub mod content;
pub mod navigation;
pub mod news;
pub mod quest;
pub mod review;
pub mod table;
pub mod user;

pub use booking::{Booking, BookingStatus, BookingType};
pub use content::{Media, PageBlock, PageKey};
pub use navigation::AdminMenuItem;
pub use news::NewsItem;
pub use quest::{Difficulty, Quest};
pub use review::Review;
pub use table::Table;
pub use user::{AuthUser, Employee, Role, User};
