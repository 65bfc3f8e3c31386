use serde::{Deserialize, Serialize};

/// Роль пользователя, для которого строится экран возвратов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    Customer,
    Seller,
    Admin,
}

impl ViewerRole {
    pub fn code(&self) -> &'static str {
        match self {
            ViewerRole::Customer => "customer",
            ViewerRole::Seller => "seller",
            ViewerRole::Admin => "admin",
        }
    }

    pub fn all() -> Vec<ViewerRole> {
        vec![ViewerRole::Customer, ViewerRole::Seller, ViewerRole::Admin]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "customer" => Some(ViewerRole::Customer),
            "seller" => Some(ViewerRole::Seller),
            "admin" => Some(ViewerRole::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for ViewerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
