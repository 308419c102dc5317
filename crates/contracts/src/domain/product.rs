use serde::{Deserialize, Serialize};

use crate::enums::origin::Origin;

// ============================================================================
// Product Record
// ============================================================================

/// Карточка запчасти, синтезированная из заготовки категории.
///
/// Запись неизменяема после создания: все поля детерминированно выводятся
/// из `(id, name, image_ref, base_price, class_tag)` и таблиц подстановки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u32,

    /// Название товара (в верхнем регистре)
    pub name: String,

    /// Бренд из таблицы подстановки (`brands[id % N]`)
    pub brand: String,

    /// Артикул: две буквы бренда + две буквы класса + id с нулями до 3 знаков
    #[serde(rename = "partNumber")]
    pub part_number: String,

    /// Ссылка на изображение (переносится с заготовки без изменений)
    #[serde(rename = "imageRef")]
    pub image_ref: String,

    /// Цена продажи
    pub price: f64,

    /// Рекомендованная цена (всегда `price * 1.2`)
    pub mrp: f64,

    /// Скидка в процентах: `floor((mrp - price) / mrp * 100)`
    #[serde(rename = "discountPercent")]
    pub discount_percent: u32,

    /// Признак оригинальной запчасти (`id % 2 == 1`)
    #[serde(rename = "isOEM")]
    pub is_oem: bool,

    /// Происхождение, согласовано с `is_oem`
    pub origin: Origin,

    /// Логистику ведёт площадка, а не сторонний продавец
    #[serde(rename = "fulfilledByPlatform")]
    pub fulfilled_by_platform: bool,

    #[serde(rename = "freeDelivery")]
    pub free_delivery: bool,

    /// Бейдж "выбор площадки"
    #[serde(rename = "platformChoice")]
    pub platform_choice: bool,

    /// Класс запчастей раздела каталога (engine, brake, filter, ...)
    #[serde(rename = "classTag")]
    pub class_tag: String,

    /// Город продавца из таблицы подстановки (`seller_locations[id % M]`)
    #[serde(rename = "sellerLocation")]
    pub seller_location: String,

    #[serde(rename = "deliveryDays")]
    pub delivery_days: u32,

    #[serde(rename = "returnDays")]
    pub return_days: u32,

    pub rating: f64,

    #[serde(rename = "reviewCount")]
    pub review_count: u32,
}

impl ProductRecord {
    /// Валидация инвариантов синтезированной записи
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название не может быть пустым".into());
        }
        if self.mrp < self.price {
            return Err("Рекомендованная цена не может быть ниже цены продажи".into());
        }
        if self.discount_percent >= 100 {
            return Err("Скидка должна быть в диапазоне 0..100".into());
        }
        let expected = ((self.mrp - self.price) / self.mrp * 100.0).floor() as u32;
        if self.discount_percent != expected {
            return Err(format!(
                "Скидка {} не согласована с ценами (ожидалось {})",
                self.discount_percent, expected
            ));
        }
        if self.is_oem != (self.origin == Origin::Oem) {
            return Err("Признак is_oem не согласован с происхождением".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            id: 7,
            name: "SPARK PLUG".into(),
            brand: "BOSCH".into(),
            part_number: "BOEN007".into(),
            image_ref: "/images/categories/spark_plug.png".into(),
            price: 1199.0,
            mrp: 1438.8,
            discount_percent: 16,
            is_oem: true,
            origin: Origin::Oem,
            fulfilled_by_platform: true,
            free_delivery: true,
            platform_choice: false,
            class_tag: "engine".into(),
            seller_location: "Delhi".into(),
            delivery_days: 4,
            return_days: 10,
            rating: 4.2,
            review_count: 271,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn test_validate_mrp_below_price() {
        let mut r = record();
        r.mrp = r.price - 1.0;
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_validate_origin_mismatch() {
        let mut r = record();
        r.origin = Origin::Aftermarket;
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["partNumber"], "BOEN007");
        assert_eq!(json["isOEM"], true);
        assert_eq!(json["origin"], "OEM (genuine)");
        assert_eq!(json["discountPercent"], 16);
        assert_eq!(json["sellerLocation"], "Delhi");
    }
}
