//! Locale-conditional display strings
//!
//! A pure lookup from a locale key to a fixed set of display strings.
//! Kept entirely outside the prediction core; the log itself stores
//! locale-independent tier labels.

use crate::classifier::StatusTier;
use serde::{Deserialize, Serialize};

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ar" | "arabic" => Ok(Locale::Ar),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// Display strings for one locale
#[derive(Debug, Clone, Serialize)]
pub struct Labels {
    pub title: &'static str,
    pub active_power: &'static str,
    pub reactive_power: &'static str,
    pub oil_pressure: &'static str,
    pub predict: &'static str,
    pub show_log: &'static str,
    pub download_log: &'static str,
    pub clear_log: &'static str,
    pub status: &'static str,
    pub temperature: &'static str,
    pub model_info: &'static str,
    pub trained: &'static str,
    pub algorithm: &'static str,
    pub importance: &'static str,
}

const EN: Labels = Labels {
    title: "U1 Generator TE Bearing Temp Prediction",
    active_power: "Active Power (MW)",
    reactive_power: "Reactive Power (MVAR)",
    oil_pressure: "Oil Pressure (kPa)",
    predict: "Predict",
    show_log: "Show Prediction Log",
    download_log: "Download Log as CSV",
    clear_log: "Clear Log",
    status: "Status",
    temperature: "Temperature",
    model_info: "Model Info",
    trained: "Trained Date: 2025-06-04",
    algorithm: "Algorithm: Gradient Boosting",
    importance: "Input Importance",
};

const AR: Labels = Labels {
    title: "توقع درجة حرارة كرسي تحميل المولد الأول",
    active_power: "القدرة الفعالة (MW)",
    reactive_power: "القدرة غير الفعالة (MVAR)",
    oil_pressure: "ضغط الزيت (kPa)",
    predict: "تنبؤ",
    show_log: "عرض سجل التنبؤات",
    download_log: "تحميل السجل",
    clear_log: "مسح السجل",
    status: "الحالة",
    temperature: "درجة الحرارة",
    model_info: "معلومات النموذج",
    trained: "تاريخ التدريب: 2025-06-04",
    algorithm: "الخوارزمية: الانحدار المعزز",
    importance: "أهمية المدخلات",
};

/// The label table for a locale
pub fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::En => &EN,
        Locale::Ar => &AR,
    }
}

/// Localized display label for a status tier
pub fn status_label(locale: Locale, tier: StatusTier) -> &'static str {
    match (locale, tier) {
        (Locale::En, StatusTier::Normal) => "Normal",
        (Locale::En, StatusTier::Warning) => "Warning",
        (Locale::En, StatusTier::Alarm) => "Alarm",
        (Locale::Ar, StatusTier::Normal) => "طبيعي",
        (Locale::Ar, StatusTier::Warning) => "تحذير",
        (Locale::Ar, StatusTier::Alarm) => "إنذار",
    }
}
