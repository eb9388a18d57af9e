use sanjesh_core::models::cutoff::Severity;

use crate::cutoff::band;
use crate::definition::{InstrumentDefinition, SubscaleDefinition};
use crate::recommend::{RecommendationRule, Trigger};
use crate::scoring::LIKERT_5;

/// Curiosity: appetite for new information and experiences.
pub static CURIOSITY: InstrumentDefinition = InstrumentDefinition {
    id: "curiosity",
    name: "کنجکاوی",
    item_count: 12,
    scale: LIKERT_5,
    subscales: &[
        SubscaleDefinition {
            id: "joyous_exploration",
            name: "لذت کاوشگری",
            items: &[1, 2, 3],
            cutoffs: &[
                band(1.0, 2.5, "پایین", None, "تجربه‌های تازه کمتر برایتان جذاب است و ترجیح می‌دهید در محدوده آشنا بمانید."),
                band(2.51, 3.7, "متوسط", None, "گاهی از کشف چیزهای جدید لذت می‌برید، به‌ویژه وقتی به علایقتان مربوط باشد."),
                band(3.71, 5.0, "بالا", None, "کشف ایده‌ها و تجربه‌های تازه برایتان منبع شادی و انرژی است."),
            ],
        },
        SubscaleDefinition {
            id: "deprivation_sensitivity",
            name: "میل به دانستن",
            items: &[4, 5, 6],
            cutoffs: &[
                band(1.0, 2.5, "پایین", None, "پرسش‌های بی‌پاسخ معمولاً ذهن شما را درگیر نمی‌کند."),
                band(2.51, 3.7, "متوسط", None, "وقتی مسئله‌ای برایتان مهم باشد، تا یافتن پاسخ پیگیری می‌کنید."),
                band(3.71, 5.0, "بالا", None, "تا زمانی که پاسخ یک پرسش را پیدا نکنید آرام نمی‌گیرید."),
            ],
        },
        SubscaleDefinition {
            id: "stress_tolerance",
            name: "تحمل ابهام",
            items: &[7, 8, 9],
            cutoffs: &[
                band(1.0, 2.5, "پایین", None, "موقعیت‌های مبهم و ناآشنا برایتان اضطراب‌آور است و از آن‌ها دوری می‌کنید."),
                band(2.51, 3.7, "متوسط", None, "ابهام را تا حدی تحمل می‌کنید، اما ترجیح می‌دهید زودتر به وضوح برسید."),
                band(3.71, 5.0, "بالا", None, "ابهام شما را نمی‌ترساند و با وجود ناشناخته‌ها به کاوش ادامه می‌دهید."),
            ],
        },
        SubscaleDefinition {
            id: "social_curiosity",
            name: "کنجکاوی اجتماعی",
            items: &[10, 11, 12],
            cutoffs: &[
                band(1.0, 2.5, "پایین", None, "کمتر به دانستن افکار و زندگی دیگران علاقه نشان می‌دهید."),
                band(2.51, 3.7, "متوسط", None, "به دیدگاه‌های دیگران علاقه دارید، به‌ویژه در جمع‌های آشنا."),
                band(3.71, 5.0, "بالا", None, "شنیدن تجربه‌ها و دیدگاه‌های دیگران برایتان بسیار جذاب است."),
            ],
        },
    ],
    reverse_items: &[3, 7, 8, 11],
    total_cutoffs: &[
        band(1.0, 2.5, "پایین", Some(Severity::Moderate), "کنجکاوی شما در حال حاضر پایین است. ممکن است روزمرگی یا خستگی انگیزه کشف را در شما کاهش داده باشد."),
        band(2.51, 3.5, "متوسط", Some(Severity::Mild), "کنجکاوی شما در حد متوسط است. در حوزه‌های مورد علاقه‌تان جست‌وجوگر هستید، اما کمتر از آن فراتر می‌روید."),
        band(3.51, 4.2, "بالا", None, "شما فردی کنجکاو هستید و از یادگیری و تجربه چیزهای تازه لذت می‌برید."),
        band(4.21, 5.0, "بسیار بالا", None, "کنجکاوی یکی از نقاط قوت برجسته شماست. دائماً در پی دانستن و کشف هستید."),
    ],
    recommendations: &[
        RecommendationRule {
            when: Trigger::TotalAtMost { threshold: 2.5 },
            tests: &["growth-mindset", "learning-style"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAtMost { subscale: "stress_tolerance", threshold: 2.5 },
            tests: &["adaptability"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAbove { subscale: "joyous_exploration", threshold: 3.7 },
            tests: &["innovation"],
        },
        RecommendationRule {
            when: Trigger::TotalAbove { threshold: 4.2 },
            tests: &["innovation", "learning-style"],
        },
    ],
};
