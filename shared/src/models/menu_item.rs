//! Menu Item Model

use serde::{Deserialize, Serialize};

use super::serde_helpers::flexible_price;

/// Menu item entity
///
/// Serialized as-is by the admin listing (price as a JSON number).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Price rounded to 2 decimal places
    pub price: f64,
    pub availability: bool,
}

/// Storefront view of a menu item (price as a 2dp string, e.g. `"4.50"`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemView {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub availability: bool,
}

impl From<MenuItem> for MenuItemView {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: format!("{:.2}", item.price),
            availability: item.availability,
        }
    }
}

/// Compact view used by the order form (`GET /api/menu_items`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableMenuItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl From<MenuItem> for AvailableMenuItem {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
        }
    }
}

/// Create menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "flexible_price")]
    pub price: Option<f64>,
    /// Defaults to `true`
    pub availability: Option<bool>,
}

/// Update menu item payload; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "flexible_price")]
    pub price: Option<f64>,
    pub availability: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn croissant() -> MenuItem {
        MenuItem {
            id: 7,
            name: "Croissant".into(),
            description: Some("Butter".into()),
            price: 2.5,
            availability: true,
        }
    }

    #[test]
    fn storefront_view_formats_price_as_string() {
        let view = MenuItemView::from(croissant());
        assert_eq!(view.price, "2.50");
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["price"], "2.50");
    }

    #[test]
    fn admin_view_keeps_price_numeric() {
        let json = serde_json::to_value(croissant()).unwrap();
        assert_eq!(json["price"], 2.5);
    }

    #[test]
    fn create_payload_accepts_string_price() {
        let data: MenuItemCreate =
            serde_json::from_str(r#"{"name":"Bagel","price":"1.20"}"#).unwrap();
        assert_eq!(data.price, Some(1.2));
        assert!(data.availability.is_none());
        assert!(data.description.is_none());
    }
}
