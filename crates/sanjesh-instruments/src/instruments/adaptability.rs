use sanjesh_core::models::cutoff::Severity;

use crate::cutoff::band;
use crate::definition::{InstrumentDefinition, SubscaleDefinition};
use crate::recommend::{RecommendationRule, Trigger};
use crate::scoring::LIKERT_5;

/// Adaptability: how readily a person adjusts thinking, feelings and
/// behaviour when circumstances change. 12 items, 4 subscales of 3.
pub static ADAPTABILITY: InstrumentDefinition = InstrumentDefinition {
    id: "adaptability",
    name: "سازگاری",
    item_count: 12,
    scale: LIKERT_5,
    subscales: &[
        SubscaleDefinition {
            id: "cognitive_flexibility",
            name: "انعطاف‌پذیری شناختی",
            items: &[1, 2, 3],
            cutoffs: &[
                band(1.0, 2.4, "پایین", None, "در تغییر زاویه دید و یافتن راه‌حل‌های جایگزین دشواری دارید."),
                band(2.41, 3.4, "متوسط", None, "گاهی می‌توانید از زاویه‌ای تازه به مسائل نگاه کنید، اما در موقعیت‌های فشار به الگوهای قدیمی برمی‌گردید."),
                band(3.41, 5.0, "بالا", None, "به‌راحتی دیدگاه خود را تغییر می‌دهید و برای هر مسئله چند راه‌حل می‌بینید."),
            ],
        },
        SubscaleDefinition {
            id: "emotional_regulation",
            name: "تنظیم هیجانی",
            items: &[4, 5, 6],
            cutoffs: &[
                band(1.0, 2.4, "پایین", None, "تغییرات ناگهانی اغلب شما را مضطرب یا آشفته می‌کند."),
                band(2.41, 3.4, "متوسط", None, "معمولاً هیجان‌های خود را مدیریت می‌کنید، اما تغییرات بزرگ هنوز شما را برهم می‌زند."),
                band(3.41, 5.0, "بالا", None, "در برابر تغییر آرامش خود را حفظ می‌کنید و هیجان‌هایتان را به‌خوبی مهار می‌کنید."),
            ],
        },
        SubscaleDefinition {
            id: "openness_to_change",
            name: "پذیرش تغییر",
            items: &[7, 8, 9],
            cutoffs: &[
                band(1.0, 2.4, "پایین", None, "ترجیح می‌دهید شرایط همان‌طور که هست باقی بماند و در برابر تغییر مقاومت می‌کنید."),
                band(2.41, 3.4, "متوسط", None, "تغییر را می‌پذیرید، به شرط آنکه دلیل آن برایتان روشن باشد."),
                band(3.41, 5.0, "بالا", None, "تغییر را فرصتی برای تجربه‌های تازه می‌دانید و از آن استقبال می‌کنید."),
            ],
        },
        SubscaleDefinition {
            id: "resilience",
            name: "تاب‌آوری",
            items: &[10, 11, 12],
            cutoffs: &[
                band(1.0, 2.4, "پایین", None, "پس از شکست یا ناکامی بازگشت به حالت عادی برایتان زمان‌بر است."),
                band(2.41, 3.4, "متوسط", None, "پس از دشواری‌ها دوباره سر پا می‌شوید، هرچند گاهی به حمایت دیگران نیاز دارید."),
                band(3.41, 5.0, "بالا", None, "سختی‌ها را به‌سرعت پشت سر می‌گذارید و از آن‌ها درس می‌گیرید."),
            ],
        },
    ],
    reverse_items: &[2, 4, 5, 7, 10, 12],
    total_cutoffs: &[
        band(1.0, 2.4, "ضعیف", Some(Severity::Severe), "سازگاری شما با تغییرات در حال حاضر پایین است. موقعیت‌های تازه برایتان فشار زیادی ایجاد می‌کند و تمرین مهارت‌های مقابله‌ای می‌تواند کمک‌کننده باشد."),
        band(2.41, 3.4, "متوسط", Some(Severity::Moderate), "سازگاری شما در حد متوسط است. با برخی تغییرات کنار می‌آیید، اما تغییرات بزرگ یا ناگهانی هنوز برایتان چالش‌برانگیز است."),
        band(3.41, 4.2, "خوب", None, "سازگاری شما خوب است. در بیشتر موقعیت‌ها خود را با شرایط جدید هماهنگ می‌کنید و تغییر را مدیریت‌پذیر می‌دانید."),
        band(4.21, 5.0, "عالی", None, "سازگاری شما بسیار بالاست. تغییر را با آغوش باز می‌پذیرید و در شرایط نامطمئن نیز کارآمد می‌مانید."),
    ],
    recommendations: &[
        RecommendationRule {
            when: Trigger::TotalAtMost { threshold: 2.4 },
            tests: &["growth-mindset", "lifestyle-harmony", "personal-values"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAtMost { subscale: "emotional_regulation", threshold: 2.4 },
            tests: &["lifestyle-harmony"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAtMost { subscale: "openness_to_change", threshold: 2.4 },
            tests: &["curiosity"],
        },
        RecommendationRule {
            when: Trigger::TotalAbove { threshold: 4.2 },
            tests: &["innovation"],
        },
    ],
};

