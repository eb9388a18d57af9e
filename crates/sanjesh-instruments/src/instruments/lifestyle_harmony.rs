use sanjesh_core::models::cutoff::Severity;

use crate::cutoff::band;
use crate::definition::{InstrumentDefinition, SubscaleDefinition};
use crate::recommend::{RecommendationRule, Trigger};
use crate::scoring::LIKERT_5;

pub static LIFESTYLE_HARMONY: InstrumentDefinition = InstrumentDefinition {
    id: "lifestyle-harmony",
    name: "هماهنگی سبک زندگی",
    item_count: 12,
    scale: LIKERT_5,
    subscales: &[
        SubscaleDefinition {
            id: "work_life_balance",
            name: "تعادل کار و زندگی",
            items: &[1, 2, 3],
            cutoffs: &[
                band(1.0, 2.5, "نامتعادل", Some(Severity::Moderate), "کار بخش بزرگی از زمان و انرژی شما را می‌گیرد و فرصت کمی برای زندگی شخصی می‌ماند."),
                band(2.51, 3.5, "نسبتاً متعادل", Some(Severity::Mild), "بیشتر اوقات بین کار و زندگی تعادل برقرار می‌کنید، اما در دوره‌های پرکار این تعادل به هم می‌خورد."),
                band(3.51, 5.0, "متعادل", None, "مرز سالمی میان کار و زندگی شخصی خود حفظ می‌کنید."),
            ],
        },
        SubscaleDefinition {
            id: "physical_wellbeing",
            name: "سلامت جسمی",
            items: &[4, 5, 6],
            cutoffs: &[
                band(1.0, 2.5, "نیازمند توجه", Some(Severity::Moderate), "خواب، تغذیه یا تحرک بدنی شما نیاز به توجه جدی دارد."),
                band(2.51, 3.5, "قابل قبول", Some(Severity::Mild), "عادت‌های سلامت شما قابل قبول است، اما جای بهبود دارد."),
                band(3.51, 5.0, "مطلوب", None, "به خواب، تغذیه و تحرک بدنی خود به‌خوبی رسیدگی می‌کنید."),
            ],
        },
        SubscaleDefinition {
            id: "social_connection",
            name: "ارتباطات اجتماعی",
            items: &[7, 8, 9],
            cutoffs: &[
                band(1.0, 2.5, "ضعیف", Some(Severity::Moderate), "احساس تنهایی یا دوری از دیگران در زندگی شما پررنگ است."),
                band(2.51, 3.5, "متوسط", Some(Severity::Mild), "روابط حمایتگری دارید، اما زمان کمی برای آن‌ها می‌گذارید."),
                band(3.51, 5.0, "قوی", None, "شبکه‌ای از روابط نزدیک و حمایتگر در اطراف خود دارید."),
            ],
        },
        SubscaleDefinition {
            id: "inner_peace",
            name: "آرامش درونی",
            items: &[10, 11, 12],
            cutoffs: &[
                band(1.0, 2.5, "پایین", Some(Severity::Moderate), "نگرانی و تنش درونی بخش زیادی از روز شما را در بر می‌گیرد."),
                band(2.51, 3.5, "متوسط", Some(Severity::Mild), "گاهی به آرامش می‌رسید، اما فشارهای روزمره آن را برهم می‌زند."),
                band(3.51, 5.0, "بالا", None, "در بیشتر اوقات احساس آرامش و رضایت درونی دارید."),
            ],
        },
    ],
    reverse_items: &[2, 5, 8, 10],
    total_cutoffs: &[
        band(1.0, 2.4, "ناهماهنگ", Some(Severity::Severe), "بخش‌های مختلف زندگی شما با هم هماهنگ نیستند و این ناهماهنگی می‌تواند به فرسودگی منجر شود. بازنگری در اولویت‌ها توصیه می‌شود."),
        band(2.41, 3.4, "نیمه‌هماهنگ", Some(Severity::Moderate), "برخی حوزه‌های زندگی شما در تعادل است و برخی دیگر نیاز به توجه دارد."),
        band(3.41, 4.2, "هماهنگ", Some(Severity::Mild), "سبک زندگی شما در مجموع هماهنگ است و تنها در چند حوزه جای بهبود وجود دارد."),
        band(4.21, 5.0, "کاملاً هماهنگ", None, "زندگی شما از هماهنگی بالایی برخوردار است. کار، سلامت، روابط و آرامش درونی در تعادل خوبی قرار دارند."),
    ],
    recommendations: &[
        RecommendationRule {
            when: Trigger::TotalAtMost { threshold: 2.4 },
            tests: &["personal-values", "time-preference", "adaptability"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAtMost { subscale: "work_life_balance", threshold: 2.5 },
            tests: &["time-preference"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAtMost { subscale: "social_connection", threshold: 2.5 },
            tests: &["ideal-environment"],
        },
    ],
};
