use sanjesh_core::models::cutoff::Severity;

use crate::cutoff::band;
use crate::definition::{InstrumentDefinition, SubscaleDefinition};
use crate::recommend::{RecommendationRule, Trigger};
use crate::scoring::LIKERT_5;

pub static INNOVATION: InstrumentDefinition = InstrumentDefinition {
    id: "innovation",
    name: "نوآوری",
    item_count: 12,
    scale: LIKERT_5,
    subscales: &[
        SubscaleDefinition {
            id: "creative_thinking",
            name: "تفکر خلاق",
            items: &[1, 2, 3],
            cutoffs: &[
                band(1.0, 2.4, "پایین", None, "بیشتر به راه‌حل‌های آزموده تکیه می‌کنید تا ایده‌های تازه."),
                band(2.41, 3.4, "متوسط", None, "گاهی ایده‌های نو دارید، به‌ویژه وقتی فرصت فکر کردن داشته باشید."),
                band(3.41, 5.0, "بالا", None, "ذهنی زایا دارید و به‌راحتی ایده‌های متفاوت تولید می‌کنید."),
            ],
        },
        SubscaleDefinition {
            id: "risk_taking",
            name: "ریسک‌پذیری",
            items: &[4, 5, 6],
            cutoffs: &[
                band(1.0, 2.4, "پایین", None, "از خطر کردن پرهیز می‌کنید، حتی وقتی پاداش آن بالا باشد."),
                band(2.41, 3.4, "متوسط", None, "ریسک‌های حساب‌شده را می‌پذیرید."),
                band(3.41, 5.0, "بالا", None, "برای آزمودن ایده‌های تازه از پذیرش خطر نمی‌ترسید."),
            ],
        },
        SubscaleDefinition {
            id: "idea_implementation",
            name: "اجرای ایده",
            items: &[7, 8, 9],
            cutoffs: &[
                band(1.0, 2.4, "پایین", None, "ایده‌هایتان اغلب در مرحله فکر باقی می‌مانند."),
                band(2.41, 3.4, "متوسط", None, "برخی ایده‌ها را به عمل می‌رسانید، اما پیگیری تا پایان برایتان دشوار است."),
                band(3.41, 5.0, "بالا", None, "ایده‌ها را به برنامه و نتیجه ملموس تبدیل می‌کنید."),
            ],
        },
        SubscaleDefinition {
            id: "challenging_status_quo",
            name: "به چالش کشیدن وضع موجود",
            items: &[10, 11, 12],
            cutoffs: &[
                band(1.0, 2.4, "پایین", None, "روش‌های جاری را کمتر زیر سؤال می‌برید."),
                band(2.41, 3.4, "متوسط", None, "وقتی ناکارآمدی آشکار باشد، پیشنهاد تغییر می‌دهید."),
                band(3.41, 5.0, "بالا", None, "مدام می‌پرسید چرا کارها باید به همین شکل انجام شوند."),
            ],
        },
    ],
    reverse_items: &[5, 6, 9, 12],
    total_cutoffs: &[
        band(1.0, 2.4, "محافظه‌کار", Some(Severity::Moderate), "گرایش نوآورانه شما پایین است. ثبات و روش‌های آشنا را به آزمودن راه‌های تازه ترجیح می‌دهید."),
        band(2.41, 3.4, "نوآور بالقوه", Some(Severity::Mild), "ظرفیت نوآوری در شما وجود دارد، اما هنوز به‌طور کامل شکوفا نشده است."),
        band(3.41, 4.2, "نوآور", None, "شما فردی نوآور هستید و ایده‌های تازه را با جسارت دنبال می‌کنید."),
        band(4.21, 5.0, "نوآور برجسته", None, "نوآوری بخشی از هویت شماست. ایده‌پردازی، پذیرش خطر و اجرا در شما به‌خوبی با هم ترکیب شده‌اند."),
    ],
    recommendations: &[
        RecommendationRule {
            when: Trigger::TotalAtMost { threshold: 2.4 },
            tests: &["curiosity", "growth-mindset"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAtMost { subscale: "risk_taking", threshold: 2.4 },
            tests: &["adaptability"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAtMost { subscale: "idea_implementation", threshold: 2.4 },
            tests: &["time-preference"],
        },
        RecommendationRule {
            when: Trigger::TotalAbove { threshold: 3.4 },
            tests: &["ideal-environment"],
        },
    ],
};
