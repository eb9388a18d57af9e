use sanjesh_core::models::cutoff::Severity;

use crate::cutoff::band;
use crate::definition::{InstrumentDefinition, SubscaleDefinition};
use crate::recommend::{RecommendationRule, Trigger};
use crate::scoring::LIKERT_5;

/// Personal values. The total measures how clearly held the values are,
/// not which ones win.
pub static PERSONAL_VALUES: InstrumentDefinition = InstrumentDefinition {
    id: "personal-values",
    name: "ارزش‌های شخصی",
    item_count: 12,
    scale: LIKERT_5,
    subscales: &[
        SubscaleDefinition {
            id: "achievement",
            name: "موفقیت",
            items: &[1, 2, 3],
            cutoffs: &[
                band(1.0, 2.4, "کم‌اهمیت", None, "دستاورد و شناخته شدن برایتان اولویت اصلی نیست."),
                band(2.41, 3.8, "متوسط", None, "موفقیت برایتان مهم است، اما نه به هر قیمتی."),
                band(3.81, 5.0, "محوری", None, "پیشرفت و دستیابی به اهداف بلندپروازانه از ارزش‌های محوری شماست."),
            ],
        },
        SubscaleDefinition {
            id: "benevolence",
            name: "خیرخواهی",
            items: &[4, 5, 6],
            cutoffs: &[
                band(1.0, 2.4, "کم‌اهمیت", None, "تمرکز شما بیشتر بر اهداف شخصی است تا رفاه دیگران."),
                band(2.41, 3.8, "متوسط", None, "به اطرافیان خود اهمیت می‌دهید و در حد توان کمکشان می‌کنید."),
                band(3.81, 5.0, "محوری", None, "کمک به دیگران و بهبود زندگی آن‌ها برایتان معنابخش است."),
            ],
        },
        SubscaleDefinition {
            id: "self_direction",
            name: "خودراهبری",
            items: &[7, 8, 9],
            cutoffs: &[
                band(1.0, 2.4, "کم‌اهمیت", None, "پیروی از مسیرهای شناخته‌شده را به استقلال فکری ترجیح می‌دهید."),
                band(2.41, 3.8, "متوسط", None, "استقلال در تصمیم‌گیری را ارزشمند می‌دانید، اما از راهنمایی دیگران هم استقبال می‌کنید."),
                band(3.81, 5.0, "محوری", None, "آزادی انتخاب و تفکر مستقل برایتان ارزشی بنیادین است."),
            ],
        },
        SubscaleDefinition {
            id: "security",
            name: "امنیت",
            items: &[10, 11, 12],
            cutoffs: &[
                band(1.0, 2.4, "کم‌اهمیت", None, "ثبات و امنیت را فدای تجربه و فرصت‌های تازه می‌کنید."),
                band(2.41, 3.8, "متوسط", None, "به ثبات اهمیت می‌دهید، اما آن را تنها معیار تصمیم‌گیری نمی‌دانید."),
                band(3.81, 5.0, "محوری", None, "ثبات، امنیت و پیش‌بینی‌پذیری برایتان اولویت بالایی دارد."),
            ],
        },
    ],
    reverse_items: &[3, 6, 9, 12],
    total_cutoffs: &[
        band(1.0, 2.4, "مبهم", Some(Severity::Moderate), "ارزش‌های شخصی شما هنوز به‌روشنی شکل نگرفته‌اند و ممکن است در تصمیم‌گیری‌ها احساس سردرگمی کنید."),
        band(2.41, 3.4, "در حال شکل‌گیری", Some(Severity::Mild), "ارزش‌های شما در حال شکل‌گیری است. برخی را به‌وضوح می‌شناسید و برخی دیگر هنوز نیاز به تأمل دارد."),
        band(3.41, 4.2, "روشن", None, "ارزش‌های شخصی شما روشن است و در بیشتر تصمیم‌ها راهنمایتان است."),
        band(4.21, 5.0, "بسیار روشن", None, "ارزش‌هایتان را به‌خوبی می‌شناسید و زندگی خود را بر پایه آن‌ها بنا کرده‌اید."),
    ],
    recommendations: &[
        RecommendationRule {
            when: Trigger::TotalAtMost { threshold: 2.4 },
            tests: &["growth-mindset", "lifestyle-harmony"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAbove { subscale: "self_direction", threshold: 3.8 },
            tests: &["innovation"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAbove { subscale: "security", threshold: 3.8 },
            tests: &["ideal-environment"],
        },
    ],
};
