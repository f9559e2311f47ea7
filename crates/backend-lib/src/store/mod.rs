// ============================
// catalog-backend/src/store/mod.rs
// ============================
//! Storage abstraction with in-memory implementations.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::Role;
use crate::error::AppError;

/// A registered account as persisted by the user store.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub enabled: bool,
    pub roles: Vec<Role>,
}

/// Fields required to create an account; the id is store-assigned.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub enabled: bool,
    pub roles: Vec<Role>,
}

/// A product record.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: u32,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating or updating a product; the id is store-assigned.
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: u32,
    pub category: Option<String>,
}

/// Trait for user credential stores
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new account.
    ///
    /// The check-then-insert is atomic: concurrent inserts with the same
    /// username or email resolve to exactly one success.
    async fn insert(&self, user: NewUser) -> Result<User, AppError>;

    /// Find an account by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Check if a username exists
    async fn username_exists(&self, username: &str) -> Result<bool, AppError>;

    /// Find an account by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Check if an email exists
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;
}

/// Trait for product stores
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Create a product; fails if the name is taken
    async fn create(&self, fields: ProductFields) -> Result<Product, AppError>;

    /// Get a product by id
    async fn get(&self, id: u64) -> Result<Option<Product>, AppError>;

    /// List all products, ordered by id
    async fn list(&self) -> Result<Vec<Product>, AppError>;

    /// Update a product; fails if absent or the new name belongs to another
    async fn update(&self, id: u64, fields: ProductFields) -> Result<Product, AppError>;

    /// Delete a product by id
    async fn delete(&self, id: u64) -> Result<(), AppError>;

    /// Check if a product id exists
    async fn exists(&self, id: u64) -> Result<bool, AppError>;

    /// Check if a product name exists
    async fn name_exists(&self, name: &str) -> Result<bool, AppError>;
}
