use serde::{Deserialize, Serialize};

use crate::domain::product::ProductRecord;

// ============================================================================
// Category Stub
// ============================================================================

/// Заготовка категории — исходная запись раздела каталога.
///
/// Списки заготовок авторизуются литералами на каждый раздел витрины,
/// создаются при загрузке модуля и никогда не мутируются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStub {
    /// Явный id; при отсутствии обогащение подставляет `index + 1`
    pub id: Option<u32>,

    pub name: String,

    #[serde(rename = "imageRef")]
    pub image_ref: String,

    /// Ссылка на страницу категории
    #[serde(rename = "linkRef")]
    pub link_ref: String,
}

impl CategoryStub {
    pub fn new(name: &str, image_ref: &str, link_ref: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            image_ref: image_ref.to_string(),
            link_ref: link_ref.to_string(),
        }
    }

    pub fn with_id(id: u32, name: &str, image_ref: &str, link_ref: &str) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, image_ref, link_ref)
        }
    }
}

// ============================================================================
// Enriched Category
// ============================================================================

/// Заготовка категории вместе с синтезированной карточкой товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCategory {
    #[serde(flatten)]
    pub stub: CategoryStub,

    pub product: ProductRecord,
}
