#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};

use questhouse::auth::{hash_password_with_cost, TokenService};
use questhouse::models::{
    Booking, BookingStatus, BookingType, Difficulty, Employee, Media, NewsItem, PageBlock,
    PageKey, Quest, Review, Role, Table, User,
};
use questhouse::services::AppServices;
use questhouse::store::{MemoryStore, Store};
use questhouse::AppError;

pub const SECRET: &str = "integration-test-secret";
pub const PASSWORD: &str = "Secret123";
pub const ADMIN_EMAIL: &str = "admin@questhouse.test";
pub const INACTIVE_EMAIL: &str = "former@questhouse.test";

pub fn tokens() -> TokenService {
    TokenService::new(SECRET, 1)
}

pub fn services(store: impl Store + 'static) -> web::Data<AppServices> {
    web::Data::new(AppServices::new(Arc::new(store), tokens()))
}

fn employee(id: i32, email: &str, role: Role, is_active: bool) -> Employee {
    let now = Utc::now();
    Employee {
        id,
        email: email.to_string(),
        full_name: format!("Employee {}", id),
        password_hash: hash_password_with_cost(PASSWORD, 4).unwrap(),
        role,
        is_active,
        created_at: now,
        updated_at: now,
    }
}

pub fn admin() -> Employee {
    employee(1, ADMIN_EMAIL, Role::Admin, true)
}

/// A bearer header value for the active admin.
pub fn bearer() -> String {
    format!("Bearer {}", tokens().issue(&admin()).unwrap())
}

pub fn quest(id: i32, title: &str, is_active: bool) -> Quest {
    Quest {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        duration: 60,
        min_players: 2,
        max_players: 6,
        difficulty: Difficulty::Medium,
        price: 4000,
        is_active,
    }
}

pub fn booking(id: i32) -> Booking {
    Booking {
        id,
        user_id: 10,
        quest_id: Some(1),
        booking_type: BookingType::Quest,
        date: NaiveDate::from_ymd_opt(2026, 11, 7).unwrap(),
        time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        guests_count: 4,
        status: BookingStatus::Pending,
        total_price: 4000,
        comment: Some("Birthday".to_string()),
        created_at: Utc::now(),
    }
}

pub fn block(id: i32, title: &str) -> PageBlock {
    PageBlock {
        id,
        title: title.to_string(),
        content: format!("<p>{} body</p>", title),
        media: vec![],
    }
}

/// Two employees (one inactive), catalog data and some page content.
pub fn store() -> MemoryStore {
    let now = Utc::now();
    let mut about = block(3, "Our story");
    about.media.push(Media {
        id: 1,
        url: "/media/hall.jpg".to_string(),
        alt: "Main hall".to_string(),
    });

    MemoryStore {
        employees: vec![admin(), employee(2, INACTIVE_EMAIL, Role::Staff, false)],
        bookings: vec![booking(1), booking(2)],
        quests: vec![
            quest(1, "Haunted Manor", true),
            quest(2, "Retired Room", false),
        ],
        users: vec![User {
            id: 10,
            email: "guest@questhouse.test".to_string(),
            name: "Guest".to_string(),
            role: Role::Staff,
            created_at: now,
            updated_at: now,
        }],
        tables: vec![Table {
            id: 1,
            number: 1,
            capacity: 4,
            location: "Window".to_string(),
            is_active: true,
        }],
        news: vec![
            NewsItem {
                id: 1,
                title: "New quest opens".to_string(),
                content: "<p>Book now</p>".to_string(),
                image_url: None,
                published_at: now,
                is_published: true,
            },
            NewsItem {
                id: 2,
                title: "Draft announcement".to_string(),
                content: String::new(),
                image_url: None,
                published_at: now,
                is_published: false,
            },
        ],
        reviews: vec![Review {
            id: 1,
            user_name: "Olga".to_string(),
            rating: 5,
            text: "Loved it".to_string(),
            quest_id: Some(1),
            is_approved: true,
            created_at: now,
        }],
        page_blocks: vec![],
    }
    .with_page_block(PageKey::Home, block(1, "Welcome"))
    .with_page_block(PageKey::Home, block(2, "Opening hours"))
    .with_page_block(PageKey::About, about)
}

/// A store whose every call fails, as an unreachable database would.
pub struct FailingStore;

fn down<T>() -> Result<T, AppError> {
    Err(AppError::UpstreamFailure("database is unreachable".into()))
}

#[async_trait]
impl Store for FailingStore {
    async fn ping(&self) -> Result<(), AppError> {
        down()
    }

    async fn find_employee_by_email(&self, _email: &str) -> Result<Option<Employee>, AppError> {
        down()
    }

    async fn find_bookings(&self) -> Result<Vec<Booking>, AppError> {
        down()
    }

    async fn find_quests(&self) -> Result<Vec<Quest>, AppError> {
        down()
    }

    async fn find_quest(&self, _id: i32) -> Result<Option<Quest>, AppError> {
        down()
    }

    async fn find_users(&self) -> Result<Vec<User>, AppError> {
        down()
    }

    async fn find_tables(&self) -> Result<Vec<Table>, AppError> {
        down()
    }

    async fn find_news(&self) -> Result<Vec<NewsItem>, AppError> {
        down()
    }

    async fn find_reviews(&self) -> Result<Vec<Review>, AppError> {
        down()
    }

    async fn find_page_blocks(&self, _page: PageKey) -> Result<Vec<PageBlock>, AppError> {
        down()
    }
}
