use once_cell::sync::Lazy;

use contracts::domain::category::{CategoryStub, EnrichedCategory};

use crate::enrich::enrich;

/// Раздел каталога: заголовок, класс запчастей и авторский список заготовок
#[derive(Debug, Clone)]
pub struct CatalogSection {
    pub title: String,
    pub class_tag: String,

    /// Базовая цена раздела, от неё обогащение строит линейный разброс
    pub base_price: f64,

    pub stubs: Vec<CategoryStub>,
}

impl CatalogSection {
    /// Обогатить заготовки раздела карточками товаров
    pub fn enriched(&self) -> Vec<EnrichedCategory> {
        enrich(&self.stubs, &self.class_tag, self.base_price)
    }
}

fn stub(name: &str, link_ref: &str) -> CategoryStub {
    CategoryStub::new(
        name,
        &format!("/images/categories/{}.png", link_ref),
        link_ref,
    )
}

/// Засеянные разделы витрины.
///
/// Списки авторизуются литералами при загрузке модуля и не мутируются;
/// каждая страница каталога читает свой раздел по тегу.
pub static SECTIONS: Lazy<Vec<CatalogSection>> = Lazy::new(|| {
    vec![
        CatalogSection {
            title: "Детали двигателя".into(),
            class_tag: "engine".into(),
            base_price: 499.0,
            stubs: vec![
                stub("Spark Plug", "spark_plug"),
                stub("Timing Belt", "timing_belt"),
                stub("Piston Ring Set", "piston_ring_set"),
                stub("Engine Mount", "engine_mount"),
                stub("Cylinder Head Gasket", "cylinder_head_gasket"),
                stub("Fuel Injector", "fuel_injector"),
            ],
        },
        CatalogSection {
            title: "Тормозная система".into(),
            class_tag: "brake".into(),
            base_price: 299.0,
            stubs: vec![
                stub("Brake Pad", "brake_pad"),
                stub("Brake Disc", "brake_disc"),
                stub("Brake Shoe", "brake_shoe"),
                stub("Brake Caliper", "brake_caliper"),
                stub("Wheel Cylinder", "wheel_cylinder"),
            ],
        },
        CatalogSection {
            title: "Фильтры".into(),
            class_tag: "filter".into(),
            base_price: 199.0,
            stubs: vec![
                stub("Oil Filter", "oil_filter"),
                stub("Air Filter", "air_filter"),
                stub("Fuel Filter", "fuel_filter"),
                stub("Cabin Filter", "cabin_filter"),
            ],
        },
        CatalogSection {
            title: "Электрика".into(),
            class_tag: "electrical".into(),
            base_price: 349.0,
            stubs: vec![
                stub("Alternator", "alternator"),
                stub("Starter Motor", "starter_motor"),
                stub("Ignition Coil", "ignition_coil"),
                stub("Headlight Bulb", "headlight_bulb"),
                stub("Horn", "horn"),
                stub("Wiper Motor", "wiper_motor"),
            ],
        },
        CatalogSection {
            title: "Подвеска и рулевое".into(),
            class_tag: "suspension".into(),
            base_price: 599.0,
            stubs: vec![
                stub("Shock Absorber", "shock_absorber"),
                stub("Control Arm", "control_arm"),
                stub("Ball Joint", "ball_joint"),
                stub("Tie Rod End", "tie_rod_end"),
                stub("Stabilizer Link", "stabilizer_link"),
            ],
        },
    ]
});

/// Найти раздел по классу запчастей
pub fn section_by_tag(class_tag: &str) -> Option<&'static CatalogSection> {
    SECTIONS.iter().find(|s| s.class_tag == class_tag)
}
