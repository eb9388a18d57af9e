use crate::cutoff::band;
use crate::definition::{InstrumentDefinition, SubscaleDefinition};
use crate::recommend::{RecommendationRule, Trigger};
use crate::scoring::LIKERT_5;

/// Learning style: preference for visual, auditory, reading/writing and
/// hands-on channels. The total reads as breadth across channels.
/// Subscale tiers split the scale into thirds.
pub static LEARNING_STYLE: InstrumentDefinition = InstrumentDefinition {
    id: "learning-style",
    name: "سبک یادگیری",
    item_count: 12,
    scale: LIKERT_5,
    subscales: &[
        SubscaleDefinition {
            id: "visual",
            name: "دیداری",
            items: &[1, 2, 3],
            cutoffs: &[
                band(1.0, 2.33, "ضعیف", None, "تصویر و نمودار کمکی به یادگیری شما نمی‌کند."),
                band(2.34, 3.66, "متوسط", None, "تصاویر و نمودارها گاهی به درک بهتر شما کمک می‌کنند."),
                band(3.67, 5.0, "غالب", None, "با دیدن تصویر، نمودار و نقشه ذهنی بهتر از هر روش دیگری یاد می‌گیرید."),
            ],
        },
        SubscaleDefinition {
            id: "auditory",
            name: "شنیداری",
            items: &[4, 5, 6],
            cutoffs: &[
                band(1.0, 2.33, "ضعیف", None, "گوش دادن به توضیحات برای یادگیری شما کافی نیست."),
                band(2.34, 3.66, "متوسط", None, "بحث و گفت‌وگو در کنار روش‌های دیگر به یادگیری شما کمک می‌کند."),
                band(3.67, 5.0, "غالب", None, "با شنیدن، بحث کردن و توضیح دادن با صدای بلند بهتر یاد می‌گیرید."),
            ],
        },
        SubscaleDefinition {
            id: "reading_writing",
            name: "خواندن و نوشتن",
            items: &[7, 8, 9],
            cutoffs: &[
                band(1.0, 2.33, "ضعیف", None, "متن‌های طولانی و یادداشت‌برداری برایتان خسته‌کننده است."),
                band(2.34, 3.66, "متوسط", None, "خواندن و نوشتن را در کنار روش‌های دیگر مفید می‌دانید."),
                band(3.67, 5.0, "غالب", None, "با خواندن متن و نوشتن خلاصه، مطالب را عمیق‌تر درک می‌کنید."),
            ],
        },
        SubscaleDefinition {
            id: "kinesthetic",
            name: "عملی",
            items: &[10, 11, 12],
            cutoffs: &[
                band(1.0, 2.33, "ضعیف", None, "یادگیری از راه انجام دادن برایتان اولویت ندارد."),
                band(2.34, 3.66, "متوسط", None, "تمرین عملی گاهی به تثبیت یادگیری شما کمک می‌کند."),
                band(3.67, 5.0, "غالب", None, "با انجام دادن، آزمایش کردن و تجربه مستقیم بهترین یادگیری را دارید."),
            ],
        },
    ],
    reverse_items: &[3, 6, 9, 12],
    total_cutoffs: &[
        band(1.0, 2.4, "تک‌کاناله", None, "یادگیری شما به یک یا دو کانال محدود است. بهتر است منابع آموزشی را متناسب با کانال غالب خود انتخاب کنید."),
        band(2.41, 3.4, "ترکیبی محدود", None, "از چند کانال یادگیری استفاده می‌کنید، اما یکی از آن‌ها به‌وضوح برایتان مؤثرتر است."),
        band(3.41, 4.2, "چندکاناله", None, "شما یادگیرنده‌ای چندکاناله هستید و از روش‌های متنوع آموزشی بهره می‌برید."),
        band(4.21, 5.0, "کاملاً چندکاناله", None, "تقریباً از هر روش آموزشی به‌خوبی یاد می‌گیرید و به‌راحتی بین آن‌ها جابه‌جا می‌شوید."),
    ],
    recommendations: &[
        RecommendationRule {
            when: Trigger::TotalAtMost { threshold: 2.4 },
            tests: &["curiosity"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAbove { subscale: "kinesthetic", threshold: 3.66 },
            tests: &["innovation"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAbove { subscale: "reading_writing", threshold: 3.66 },
            tests: &["growth-mindset"],
        },
    ],
};
