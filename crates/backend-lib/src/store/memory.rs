// ============================
// catalog-backend/src/store/memory.rs
// ============================
//! DashMap-backed stores.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::AppError;

use super::{NewUser, Product, ProductFields, ProductStore, User, UserStore};

/// In-memory user store.
///
/// Uniqueness is enforced inside single entry operations, so concurrent
/// registrations with the same username or email cannot both succeed.
pub struct MemoryUserStore {
    by_username: DashMap<String, User>,
    // email -> username, reserved before the account record is created
    emails: DashMap<String, String>,
    next_id: AtomicU64,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            by_username: DashMap::new(),
            emails: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: NewUser) -> Result<User, AppError> {
        match self.emails.entry(user.email.clone()) {
            Entry::Occupied(_) => return Err(AppError::UsernameTaken),
            Entry::Vacant(slot) => {
                slot.insert(user.username.clone());
            }
        }

        match self.by_username.entry(user.username.clone()) {
            Entry::Occupied(_) => {
                // release the email reservation taken above
                self.emails.remove(&user.email);
                Err(AppError::UsernameTaken)
            }
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let user = User {
                    id,
                    username: user.username,
                    email: user.email,
                    password_hash: user.password_hash,
                    enabled: user.enabled,
                    roles: user.roles,
                };
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.by_username.get(username).map(|entry| entry.value().clone()))
    }

    async fn username_exists(&self, username: &str) -> Result<bool, AppError> {
        Ok(self.by_username.contains_key(username))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let Some(username) = self.emails.get(email).map(|entry| entry.value().clone()) else {
            return Ok(None);
        };
        Ok(self.by_username.get(&username).map(|entry| entry.value().clone()))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.emails.contains_key(email))
    }
}

/// In-memory product store with a unique-name index.
pub struct MemoryProductStore {
    products: DashMap<u64, Product>,
    // name -> id, reserved before the record is created
    names: DashMap<String, u64>,
    next_id: AtomicU64,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
            names: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, fields: ProductFields) -> Result<Product, AppError> {
        let id = match self.names.entry(fields.name.clone()) {
            Entry::Occupied(_) => return Err(AppError::ProductNameTaken),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                slot.insert(id);
                id
            }
        };

        let now = Utc::now();
        let product = Product {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            quantity: fields.quantity,
            category: fields.category,
            created_at: now,
            updated_at: now,
        };
        self.products.insert(id, product.clone());

        Ok(product)
    }

    async fn get(&self, id: u64) -> Result<Option<Product>, AppError> {
        Ok(self.products.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let mut products: Vec<Product> =
            self.products.iter().map(|entry| entry.value().clone()).collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn update(&self, id: u64, fields: ProductFields) -> Result<Product, AppError> {
        let current_name = self
            .products
            .get(&id)
            .map(|p| p.name.clone())
            .ok_or(AppError::ProductNotFound)?;

        if fields.name != current_name {
            match self.names.entry(fields.name.clone()) {
                Entry::Occupied(_) => return Err(AppError::ProductNameTaken),
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
            }
            self.names.remove(&current_name);
        }

        let mut entry = self.products.get_mut(&id).ok_or(AppError::ProductNotFound)?;
        entry.name = fields.name;
        entry.description = fields.description;
        entry.price = fields.price;
        entry.quantity = fields.quantity;
        entry.category = fields.category;
        entry.updated_at = Utc::now();

        Ok(entry.value().clone())
    }

    async fn delete(&self, id: u64) -> Result<(), AppError> {
        let (_, product) = self.products.remove(&id).ok_or(AppError::ProductNotFound)?;
        self.names.remove(&product.name);
        Ok(())
    }

    async fn exists(&self, id: u64) -> Result<bool, AppError> {
        Ok(self.products.contains_key(&id))
    }

    async fn name_exists(&self, name: &str) -> Result<bool, AppError> {
        Ok(self.names.contains_key(name))
    }
}
