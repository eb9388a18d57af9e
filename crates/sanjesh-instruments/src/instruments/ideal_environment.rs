use crate::cutoff::band;
use crate::definition::{InstrumentDefinition, SubscaleDefinition};
use crate::recommend::{RecommendationRule, Trigger};
use crate::scoring::LIKERT_5;

/// Ideal environment: the working conditions a person thrives in.
/// Descriptive, so no band carries a severity.
pub static IDEAL_ENVIRONMENT: InstrumentDefinition = InstrumentDefinition {
    id: "ideal-environment",
    name: "محیط ایده‌آل",
    item_count: 12,
    scale: LIKERT_5,
    subscales: &[
        SubscaleDefinition {
            id: "structure",
            name: "ساختار و نظم",
            items: &[1, 2, 3],
            cutoffs: &[
                band(1.0, 2.6, "کم", None, "محیط‌های آزاد و کم‌قاعده را به چارچوب‌های سخت‌گیرانه ترجیح می‌دهید."),
                band(2.61, 3.6, "متوسط", None, "به کمی ساختار نیاز دارید، اما قوانین خشک را دوست ندارید."),
                band(3.61, 5.0, "زیاد", None, "در محیطی با وظایف روشن، قوانین مشخص و نظم بالا بهترین عملکرد را دارید."),
            ],
        },
        SubscaleDefinition {
            id: "collaboration",
            name: "همکاری تیمی",
            items: &[4, 5, 6],
            cutoffs: &[
                band(1.0, 2.6, "کم", None, "کار مستقل و تمرکز فردی را به کار گروهی ترجیح می‌دهید."),
                band(2.61, 3.6, "متوسط", None, "ترکیبی از کار فردی و گروهی برایتان مناسب است."),
                band(3.61, 5.0, "زیاد", None, "در تعامل نزدیک با همکاران و کار تیمی شکوفا می‌شوید."),
            ],
        },
        SubscaleDefinition {
            id: "autonomy",
            name: "استقلال",
            items: &[7, 8, 9],
            cutoffs: &[
                band(1.0, 2.6, "کم", None, "ترجیح می‌دهید دیگران مسیر و اولویت‌ها را برایتان روشن کنند."),
                band(2.61, 3.6, "متوسط", None, "در چارچوبی مشخص، آزادی عمل را دوست دارید."),
                band(3.61, 5.0, "زیاد", None, "به آزادی کامل در تصمیم‌گیری و شیوه انجام کار نیاز دارید."),
            ],
        },
        SubscaleDefinition {
            id: "pace",
            name: "سرعت و پویایی",
            items: &[10, 11, 12],
            cutoffs: &[
                band(1.0, 2.6, "آرام", None, "محیط آرام و قابل پیش‌بینی را به محیط پرشتاب ترجیح می‌دهید."),
                band(2.61, 3.6, "متعادل", None, "با سرعت متوسط و تغییرات گاه‌به‌گاه راحت هستید."),
                band(3.61, 5.0, "پرشتاب", None, "در محیط‌های پرتحرک با ضرب‌الاجل‌های کوتاه انرژی می‌گیرید."),
            ],
        },
    ],
    reverse_items: &[2, 5, 8, 11],
    total_cutoffs: &[
        band(1.0, 2.4, "نیازهای محیطی اندک", None, "شما در طیف گسترده‌ای از محیط‌ها می‌توانید کار کنید و شرایط خاصی را برای موفقیت لازم نمی‌دانید."),
        band(2.41, 3.4, "نیازهای محیطی متوسط", None, "ترجیحات محیطی مشخصی دارید، اما در صورت لزوم با شرایط دیگر نیز کنار می‌آیید."),
        band(3.41, 4.2, "نیازهای محیطی روشن", None, "ترجیحات محیطی شما روشن است و در محیطی که با آن‌ها هماهنگ باشد بهترین عملکرد را خواهید داشت."),
        band(4.21, 5.0, "نیازهای محیطی قوی", None, "محیط کار نقش تعیین‌کننده‌ای در رضایت و عملکرد شما دارد. انتخاب محیط مناسب برایتان اهمیت ویژه دارد."),
    ],
    recommendations: &[
        RecommendationRule {
            when: Trigger::SubscaleAbove { subscale: "autonomy", threshold: 3.6 },
            tests: &["innovation"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAtMost { subscale: "collaboration", threshold: 2.6 },
            tests: &["personal-values"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAbove { subscale: "structure", threshold: 3.6 },
            tests: &["time-preference"],
        },
        RecommendationRule {
            when: Trigger::TotalAbove { threshold: 4.2 },
            tests: &["personal-values", "lifestyle-harmony"],
        },
    ],
};
