use serde::{Deserialize, Serialize};

/// Происхождение запчасти: оригинал (OEM) или аналог
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Origin {
    #[serde(rename = "OEM (genuine)")]
    Oem,
    #[serde(rename = "Aftermarket")]
    Aftermarket,
}

impl Origin {
    /// Получить код происхождения (значение на витрине и в фильтрах)
    pub fn code(&self) -> &'static str {
        match self {
            Origin::Oem => "OEM (genuine)",
            Origin::Aftermarket => "Aftermarket",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Origin::Oem => "Оригинал (OEM)",
            Origin::Aftermarket => "Аналог (aftermarket)",
        }
    }

    /// Получить все варианты происхождения
    pub fn all() -> Vec<Origin> {
        vec![Origin::Oem, Origin::Aftermarket]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "OEM (genuine)" => Some(Origin::Oem),
            "Aftermarket" => Some(Origin::Aftermarket),
            _ => None,
        }
    }

    /// Происхождение по признаку оригинальности
    pub fn from_is_oem(is_oem: bool) -> Self {
        if is_oem {
            Origin::Oem
        } else {
            Origin::Aftermarket
        }
    }
}

impl ToString for Origin {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
