use contracts::domain::product::ProductRecord;
use contracts::enums::origin::Origin;

// ============================================================================
// Таблицы подстановки
// ============================================================================

// Единственный источник вариативности — остаток от деления id на длину
// таблицы. Данные "выглядят случайными", но детерминированы: никакого PRNG,
// иначе ломается стабильность карточек между перерисовками и кэширование.
const BRANDS: [&str; 8] = [
    "BOSCH", "DENSO", "VALEO", "MAHLE", "DELPHI", "NGK", "SKF", "GATES",
];

const SELLER_LOCATIONS: [&str; 6] = ["Delhi", "Mumbai", "Gurgaon", "Pune", "Chennai", "Jaipur"];

/// Порог бесплатной доставки (по цене продажи)
const FREE_DELIVERY_THRESHOLD: f64 = 499.0;

/// Нижняя граница базовой цены: неположительный вход зажимается,
/// чтобы деление при расчёте скидки не увидело нулевую mrp
const MIN_BASE_PRICE: f64 = 0.01;

/// Округление до двух знаков (денежные значения)
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Первые две буквы бренда + первые две буквы класса, в верхнем регистре
fn part_number(brand: &str, class_tag: &str, id: u32) -> String {
    let prefix: String = brand
        .chars()
        .take(2)
        .chain(class_tag.chars().take(2))
        .collect();
    format!("{}{:03}", prefix.to_uppercase(), id)
}

// ============================================================================
// Синтез карточки
// ============================================================================

/// Синтезировать карточку товара из заготовки категории.
///
/// Чистая тотальная функция: для любого неотрицательного `id` результат
/// определён и побайтово совпадает между вызовами с теми же аргументами.
/// `id = 0` валиден, таблицы непусты по построению.
pub fn synthesize(
    id: u32,
    name: &str,
    image_ref: &str,
    base_price: f64,
    class_tag: &str,
) -> ProductRecord {
    let base_price = base_price.max(MIN_BASE_PRICE);

    let price = round2(base_price + id as f64 * 100.0);
    let mrp = round2(price * 1.2);
    let discount_percent = ((mrp - price) / mrp * 100.0).floor() as u32;

    let brand = BRANDS[id as usize % BRANDS.len()];
    let seller_location = SELLER_LOCATIONS[id as usize % SELLER_LOCATIONS.len()];

    let is_oem = id % 2 == 1;

    ProductRecord {
        id,
        name: name.to_uppercase(),
        brand: brand.to_string(),
        part_number: part_number(brand, class_tag, id),
        image_ref: image_ref.to_string(),
        price,
        mrp,
        discount_percent,
        is_oem,
        origin: Origin::from_is_oem(is_oem),
        fulfilled_by_platform: id % 3 != 0,
        free_delivery: price >= FREE_DELIVERY_THRESHOLD,
        platform_choice: id % 5 == 0,
        class_tag: class_tag.to_string(),
        seller_location: seller_location.to_string(),
        delivery_days: 2 + id % 5,
        return_days: 10,
        rating: (35 + id % 15) as f64 / 10.0,
        review_count: (12 + (id as u64 * 37) % 480) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let a = synthesize(7, "Spark Plug", "/img/spark_plug.png", 499.0, "engine");
        let b = synthesize(7, "Spark Plug", "/img/spark_plug.png", 499.0, "engine");
        assert_eq!(a, b);
    }

    #[test]
    fn test_price_invariants() {
        for id in 0..50 {
            let r = synthesize(id, "Oil Filter", "/img/oil_filter.png", 199.0, "filter");
            assert!(r.mrp >= r.price, "id={}: mrp < price", id);
            assert!(r.discount_percent < 100);
            let expected = ((r.mrp - r.price) / r.mrp * 100.0).floor() as u32;
            assert_eq!(r.discount_percent, expected, "id={}", id);
            assert!(r.validate().is_ok(), "id={}: {:?}", id, r.validate());
        }
    }

    #[test]
    fn test_price_arithmetic() {
        let r = synthesize(3, "Brake Pad", "/img/brake_pad.png", 299.0, "brake");
        assert_eq!(r.price, 599.0);
        assert_eq!(r.mrp, 718.8);
        // floor((718.8 - 599) / 718.8 * 100) = floor(16.66) = 16
        assert_eq!(r.discount_percent, 16);
    }

    #[test]
    fn test_oem_origin_coupling() {
        for id in 0..20 {
            let r = synthesize(id, "Wheel Bearing", "/img/wheel_bearing.png", 350.0, "bearing");
            assert_eq!(r.is_oem, id % 2 == 1);
            let expected = if r.is_oem { "OEM (genuine)" } else { "Aftermarket" };
            assert_eq!(r.origin.code(), expected);
        }
    }

    #[test]
    fn test_table_lookups_stable() {
        let r = synthesize(9, "Radiator", "/img/radiator.png", 800.0, "cooling");
        assert_eq!(r.brand, BRANDS[9 % BRANDS.len()]);
        assert_eq!(r.seller_location, SELLER_LOCATIONS[9 % SELLER_LOCATIONS.len()]);
    }

    #[test]
    fn test_part_number_format() {
        // BRANDS[7 % 8] = GATES → "GA" + "EN" + "007"
        let r = synthesize(7, "Timing Belt", "/img/timing_belt.png", 450.0, "engine");
        assert_eq!(r.part_number, "GAEN007");

        // id = 0: BOSCH, класс brake → BOBR000
        let r = synthesize(0, "Brake Shoe", "/img/brake_shoe.png", 250.0, "brake");
        assert_eq!(r.part_number, "BOBR000");
    }

    #[test]
    fn test_id_zero_valid() {
        let r = synthesize(0, "Air Filter", "/img/air_filter.png", 199.0, "filter");
        assert_eq!(r.id, 0);
        assert_eq!(r.price, 199.0);
        assert!(!r.is_oem);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_name_uppercased() {
        let r = synthesize(2, "fuel pump", "/img/fuel_pump.png", 1500.0, "fuel");
        assert_eq!(r.name, "FUEL PUMP");
    }

    #[test]
    fn test_non_positive_base_price_clamped() {
        let r = synthesize(0, "Gasket", "/img/gasket.png", -50.0, "engine");
        assert_eq!(r.price, MIN_BASE_PRICE);
        assert!(r.mrp > 0.0);
        assert!(r.discount_percent < 100);
    }

    #[test]
    fn test_free_delivery_threshold() {
        let cheap = synthesize(0, "Fuse", "/img/fuse.png", 49.0, "electrical");
        assert!(!cheap.free_delivery);
        let costly = synthesize(0, "Alternator", "/img/alternator.png", 4999.0, "electrical");
        assert!(costly.free_delivery);
    }
}
