//! Catalog Service - menu management with in-memory caching
//!
//! Owns menu persistence plus a read cache so hot paths (ordering UIs
//! polling the menu) never touch the database. Writes go storage first,
//! then cache.

use crate::services::notification_service::Notifier;
use crate::tabs::money;
use crate::tabs::storage::{StorageError, TabStorage};
use crate::utils::validation::{self, MAX_NAME_LEN, MAX_URL_LEN};
use parking_lot::RwLock;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::tab::DISH_CATEGORY;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Default menu category for alcoholic drinks
const ALCOHOLIC_CATEGORY: &str = "Alcoholic Drinks";

/// Default menu category for soft drinks
const SOFT_DRINKS_CATEGORY: &str = "Soft Drinks";

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Menu catalog with persistent storage and in-memory read cache
#[derive(Clone)]
pub struct CatalogService {
    storage: TabStorage,
    /// Items cache: item id -> MenuItem
    items: Arc<RwLock<HashMap<String, MenuItem>>>,
    notifier: Notifier,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let items_count = self.items.read().len();
        f.debug_struct("CatalogService")
            .field("items_count", &items_count)
            .finish()
    }
}

impl CatalogService {
    /// Create a new CatalogService
    pub fn new(storage: TabStorage, notifier: Notifier) -> Self {
        Self {
            storage,
            items: Arc::new(RwLock::new(HashMap::new())),
            notifier,
        }
    }

    /// Load all menu items into the memory cache
    pub fn warmup(&self) -> CatalogResult<()> {
        let items = self.storage.get_all_menu_items()?;

        {
            let mut cache = self.items.write();
            cache.clear();
            for item in &items {
                cache.insert(item.id.clone(), item.clone());
            }
        }
        tracing::info!("📦 CatalogService: Loaded {} menu items", items.len());

        Ok(())
    }

    /// Insert the built-in menu when the database is fresh
    ///
    /// Returns the number of items inserted (zero when the menu already
    /// has content).
    pub fn seed_default_menu(&self) -> CatalogResult<usize> {
        if !self.storage.get_all_menu_items()?.is_empty() {
            tracing::debug!("Menu already seeded, skipping defaults");
            return Ok(0);
        }

        let defaults = default_menu();
        let count = defaults.len();
        let now = shared::util::now_millis();

        for data in defaults {
            let item = MenuItem {
                id: uuid::Uuid::new_v4().to_string(),
                name: data.name,
                price: data.price,
                category: data.category,
                image: data.image,
                created_at: now,
                updated_at: now,
            };
            self.storage.store_menu_item(&item)?;
            self.items.write().insert(item.id.clone(), item);
        }

        tracing::info!(count, "Seeded default menu");
        Ok(count)
    }

    // =========================================================================
    // Read (from cache)
    // =========================================================================

    /// Get a menu item by ID
    pub fn get_item(&self, id: &str) -> Option<MenuItem> {
        let cache = self.items.read();
        cache.get(id).cloned()
    }

    /// List all menu items, ordered by name
    pub fn list_items(&self) -> Vec<MenuItem> {
        let cache = self.items.read();
        let mut items: Vec<_> = cache.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// Number of items currently in the catalog
    pub fn item_count(&self) -> usize {
        self.items.read().len()
    }

    // =========================================================================
    // Write (storage first, then cache)
    // =========================================================================

    /// Add a new menu item
    pub fn add_item(&self, data: MenuItemCreate) -> CatalogResult<MenuItem> {
        validation::validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validation::validate_required_text(&data.category, "category", MAX_NAME_LEN)?;
        validation::validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
        validate_price(data.price)?;

        let now = shared::util::now_millis();
        let item = MenuItem {
            id: uuid::Uuid::new_v4().to_string(),
            name: data.name.trim().to_string(),
            price: data.price,
            category: data.category.trim().to_string(),
            image: data.image,
            created_at: now,
            updated_at: now,
        };

        self.storage.store_menu_item(&item)?;
        self.items.write().insert(item.id.clone(), item.clone());

        self.notifier.success(format!("Menu item added: {}", item.name));
        Ok(item)
    }

    /// Update a menu item; absent fields are left unchanged
    pub fn update_item(&self, id: &str, data: MenuItemUpdate) -> CatalogResult<MenuItem> {
        let mut item = self
            .get_item(id)
            .ok_or_else(|| CatalogError::NotFound(format!("Menu item {id} not found")))?;

        // Validate everything before touching the entity
        if let Some(name) = &data.name {
            validation::validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        if let Some(category) = &data.category {
            validation::validate_required_text(category, "category", MAX_NAME_LEN)?;
        }
        validation::validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
        if let Some(price) = data.price {
            validate_price(price)?;
        }

        if let Some(name) = data.name {
            item.name = name.trim().to_string();
        }
        if let Some(category) = data.category {
            item.category = category.trim().to_string();
        }
        if let Some(image) = data.image {
            item.image = Some(image);
        }
        if let Some(price) = data.price {
            item.price = price;
        }
        item.updated_at = shared::util::now_millis();

        self.storage.store_menu_item(&item)?;
        self.items.write().insert(item.id.clone(), item.clone());

        self.notifier.success(format!("Menu item updated: {}", item.name));
        Ok(item)
    }

    /// Delete a menu item
    ///
    /// Lines already ordered keep their own copy of the item data, so
    /// open tabs are unaffected.
    pub fn delete_item(&self, id: &str) -> CatalogResult<()> {
        let item = self
            .get_item(id)
            .ok_or_else(|| CatalogError::NotFound(format!("Menu item {id} not found")))?;

        self.storage.remove_menu_item(id)?;
        self.items.write().remove(id);

        self.notifier.success(format!("Menu item removed: {}", item.name));
        Ok(())
    }
}

fn validate_price(price: f64) -> CatalogResult<()> {
    if !price.is_finite() {
        return Err(CatalogError::Validation("price must be finite".to_string()));
    }
    if price < 0.0 {
        return Err(CatalogError::Validation(format!(
            "price cannot be negative: {price}"
        )));
    }
    if price > money::MAX_PRICE {
        return Err(CatalogError::Validation(format!(
            "price exceeds maximum: {price} > {}",
            money::MAX_PRICE
        )));
    }
    Ok(())
}

/// Built-in menu used when the database is fresh
fn default_menu() -> Vec<MenuItemCreate> {
    let entry = |name: &str, price: f64, category: &str| MenuItemCreate {
        name: name.to_string(),
        price,
        category: category.to_string(),
        image: None,
    };

    vec![
        // Dishes
        entry("Grilled Tilapia Fillet", 55.0, DISH_CATEGORY),
        entry("Pork Ribs", 55.0, DISH_CATEGORY),
        entry("Crispy Fried Chicken", 45.0, DISH_CATEGORY),
        entry("Tilapia Fillet with Shrimp", 85.0, DISH_CATEGORY),
        entry("French Fries", 25.0, DISH_CATEGORY),
        entry("Fries with Bacon and Cheddar", 30.0, DISH_CATEGORY),
        entry("Sirloin with Onions", 90.0, DISH_CATEGORY),
        entry("Fried Cassava", 20.0, DISH_CATEGORY),
        // Alcoholic drinks
        entry("Lager Can", 6.0, ALCOHOLIC_CATEGORY),
        entry("Pilsner Can", 5.0, ALCOHOLIC_CATEGORY),
        entry("Premium Lager Can", 6.0, ALCOHOLIC_CATEGORY),
        entry("Wheat Beer Can", 6.0, ALCOHOLIC_CATEGORY),
        entry("Gin and Tonic Can", 10.0, ALCOHOLIC_CATEGORY),
        entry("Vodka Mixer Can", 12.0, ALCOHOLIC_CATEGORY),
        // Soft drinks
        entry("Alcohol-free Beer", 6.0, SOFT_DRINKS_CATEGORY),
        entry("Soda Can", 6.0, SOFT_DRINKS_CATEGORY),
        entry("Cola 2L", 14.0, SOFT_DRINKS_CATEGORY),
        entry("Orange Soda 2L", 14.0, SOFT_DRINKS_CATEGORY),
        entry("Guarana 1.5L", 10.0, SOFT_DRINKS_CATEGORY),
        entry("Juice Box", 3.0, SOFT_DRINKS_CATEGORY),
        entry("Juice Can", 6.0, SOFT_DRINKS_CATEGORY),
    ]
}
