use sanjesh_core::models::cutoff::Severity;

use crate::cutoff::band;
use crate::definition::{InstrumentDefinition, SubscaleDefinition};
use crate::recommend::{RecommendationRule, Trigger};
use crate::scoring::LIKERT_5;

/// Growth mindset: belief that ability develops through effort. Items 1, 4,
/// 7 and 10 state the fixed view and are reverse-keyed.
///
/// Subscales reuse the four total-score tiers.
pub static GROWTH_MINDSET: InstrumentDefinition = InstrumentDefinition {
    id: "growth-mindset",
    name: "ذهنیت رشد",
    item_count: 12,
    scale: LIKERT_5,
    subscales: &[
        SubscaleDefinition {
            id: "beliefs_about_ability",
            name: "باور به رشدپذیری توانایی",
            items: &[1, 2, 3],
            cutoffs: &[
                band(1.0, 2.4, "ثابت", None, "باور دارید توانایی‌ها ذاتی‌اند و تغییر چندانی نمی‌کنند."),
                band(2.41, 3.4, "ترکیبی", None, "گاهی توانایی را رشدپذیر می‌دانید و گاهی ثابت."),
                band(3.41, 4.2, "رو به رشد", None, "بیشتر باور دارید که توانایی با تمرین بهتر می‌شود."),
                band(4.21, 5.0, "رشد", None, "قاطعانه باور دارید که هر توانایی با تلاش قابل پرورش است."),
            ],
        },
        SubscaleDefinition {
            id: "response_to_challenge",
            name: "مواجهه با چالش",
            items: &[4, 5, 6],
            cutoffs: &[
                band(1.0, 2.4, "اجتناب", None, "از کارهای دشوار دوری می‌کنید تا احتمال شکست را کم کنید."),
                band(2.41, 3.4, "مردد", None, "چالش‌ها را می‌پذیرید، اما با نخستین مانع دلسرد می‌شوید."),
                band(3.41, 4.2, "پذیرا", None, "چالش‌ها را فرصتی برای یادگیری می‌بینید."),
                band(4.21, 5.0, "جست‌وجوگر", None, "فعالانه به دنبال چالش‌های تازه می‌گردید."),
            ],
        },
        SubscaleDefinition {
            id: "effort_perception",
            name: "نگرش به تلاش",
            items: &[7, 8, 9],
            cutoffs: &[
                band(1.0, 2.4, "منفی", None, "تلاش زیاد را نشانه کمبود استعداد می‌دانید."),
                band(2.41, 3.4, "دوگانه", None, "ارزش تلاش را می‌دانید، اما گاهی آن را بی‌ثمر می‌بینید."),
                band(3.41, 4.2, "مثبت", None, "تلاش را مسیر اصلی پیشرفت می‌دانید."),
                band(4.21, 5.0, "بسیار مثبت", None, "از فرایند تلاش لذت می‌برید، نه فقط از نتیجه آن."),
            ],
        },
        SubscaleDefinition {
            id: "learning_from_feedback",
            name: "یادگیری از بازخورد",
            items: &[10, 11, 12],
            cutoffs: &[
                band(1.0, 2.4, "تدافعی", None, "انتقاد را حمله شخصی تلقی می‌کنید و کمتر از آن استفاده می‌کنید."),
                band(2.41, 3.4, "گزینشی", None, "بازخوردهای ملایم را می‌پذیرید، اما انتقاد جدی آزارتان می‌دهد."),
                band(3.41, 4.2, "پذیرا", None, "بازخورد را منبع یادگیری می‌دانید."),
                band(4.21, 5.0, "جویای بازخورد", None, "خودتان به دنبال بازخورد می‌روید تا بهتر شوید."),
            ],
        },
    ],
    reverse_items: &[1, 4, 7, 10],
    total_cutoffs: &[
        band(1.0, 2.4, "ذهنیت ثابت", Some(Severity::Severe), "ذهنیت شما بیشتر ثابت است. باور به ذاتی بودن توانایی‌ها ممکن است شما را از تجربه و یادگیری بازدارد."),
        band(2.41, 3.4, "ترکیبی با گرایش ثابت", Some(Severity::Moderate), "ذهنیت شما ترکیبی است و به سمت ثابت گرایش دارد. در برخی حوزه‌ها رشد را ممکن می‌دانید و در برخی دیگر نه."),
        band(3.41, 4.2, "ترکیبی با گرایش رشد", Some(Severity::Mild), "ذهنیت شما ترکیبی با گرایش به رشد است. در بیشتر موقعیت‌ها به اثر تلاش و یادگیری باور دارید."),
        band(4.21, 5.0, "ذهنیت رشد", None, "ذهنیت رشد در شما تثبیت شده است. چالش، تلاش و بازخورد را ابزار پیشرفت می‌دانید."),
    ],
    recommendations: &[
        RecommendationRule {
            when: Trigger::TotalAtMost { threshold: 3.4 },
            tests: &["adaptability", "curiosity"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAtMost { subscale: "learning_from_feedback", threshold: 2.4 },
            tests: &["learning-style"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAtMost { subscale: "response_to_challenge", threshold: 2.4 },
            tests: &["adaptability"],
        },
        RecommendationRule {
            when: Trigger::TotalAbove { threshold: 4.2 },
            tests: &["innovation"],
        },
    ],
};
