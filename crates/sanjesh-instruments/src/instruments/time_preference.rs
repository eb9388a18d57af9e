use sanjesh_core::models::cutoff::Severity;

use crate::cutoff::band;
use crate::definition::{InstrumentDefinition, SubscaleDefinition};
use crate::recommend::{RecommendationRule, Trigger};
use crate::scoring::LIKERT_5;

/// Time preference: present versus future orientation. Five reverse items;
/// item 7 and 8 both describe impulsive spending.
pub static TIME_PREFERENCE: InstrumentDefinition = InstrumentDefinition {
    id: "time-preference",
    name: "ترجیح زمانی",
    item_count: 12,
    scale: LIKERT_5,
    subscales: &[
        SubscaleDefinition {
            id: "future_orientation",
            name: "آینده‌نگری",
            items: &[1, 2, 3],
            cutoffs: &[
                band(1.0, 2.4, "پایین", None, "بیشتر به امروز فکر می‌کنید و آینده دور برایتان مبهم است."),
                band(2.41, 3.4, "متوسط", None, "گاهی به پیامدهای بلندمدت تصمیم‌هایتان فکر می‌کنید."),
                band(3.41, 5.0, "بالا", None, "تصمیم‌هایتان را با نگاه به اهداف بلندمدت می‌گیرید."),
            ],
        },
        SubscaleDefinition {
            id: "planning",
            name: "برنامه‌ریزی",
            items: &[4, 5, 6],
            cutoffs: &[
                band(1.0, 2.4, "پایین", None, "کارها را بدون برنامه و لحظه‌ای پیش می‌برید."),
                band(2.41, 3.4, "متوسط", None, "برای کارهای مهم برنامه دارید، اما همیشه به آن پایبند نمی‌مانید."),
                band(3.41, 5.0, "بالا", None, "روزها و هفته‌هایتان را با دقت برنامه‌ریزی می‌کنید."),
            ],
        },
        SubscaleDefinition {
            id: "delay_of_gratification",
            name: "به تعویق انداختن لذت",
            items: &[7, 8, 9],
            cutoffs: &[
                band(1.0, 2.4, "پایین", None, "پاداش فوری برایتان جذاب‌تر از پاداش بزرگ‌تر در آینده است."),
                band(2.41, 3.4, "متوسط", None, "گاهی برای نتیجه بهتر صبر می‌کنید، اما وسوسه‌های فوری هم اثر دارند."),
                band(3.41, 5.0, "بالا", None, "به‌راحتی لذت امروز را برای دستاورد بزرگ‌تر فردا کنار می‌گذارید."),
            ],
        },
        SubscaleDefinition {
            id: "punctuality",
            name: "وقت‌شناسی",
            items: &[10, 11, 12],
            cutoffs: &[
                band(1.0, 2.4, "پایین", None, "اغلب دیر می‌رسید یا ضرب‌الاجل‌ها را از دست می‌دهید."),
                band(2.41, 3.4, "متوسط", None, "بیشتر اوقات به‌موقع هستید، اما گاهی زمان از دستتان می‌رود."),
                band(3.41, 5.0, "بالا", None, "همیشه به‌موقع هستید و به زمان دیگران احترام می‌گذارید."),
            ],
        },
    ],
    reverse_items: &[2, 5, 7, 8, 11],
    total_cutoffs: &[
        band(1.0, 2.4, "حال‌محور", Some(Severity::Moderate), "شما فردی حال‌محور هستید. از لحظه لذت می‌برید، اما ممکن است اهداف بلندمدت قربانی نیازهای فوری شوند."),
        band(2.41, 3.4, "متعادل با گرایش به حال", Some(Severity::Mild), "میان حال و آینده در نوسان هستید و در بیشتر موارد نیازهای فوری غلبه می‌کند."),
        band(3.41, 4.2, "متعادل با گرایش به آینده", None, "میان حال و آینده تعادل خوبی برقرار کرده‌اید و در بیشتر تصمیم‌ها آینده را در نظر می‌گیرید."),
        band(4.21, 5.0, "آینده‌محور", None, "شما به‌شدت آینده‌محور هستید. برنامه‌ریزی و صبر از ویژگی‌های برجسته شماست؛ مراقب باشید لذت لحظه را از دست ندهید."),
    ],
    recommendations: &[
        RecommendationRule {
            when: Trigger::TotalAtMost { threshold: 2.4 },
            tests: &["personal-values", "growth-mindset"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAtMost { subscale: "planning", threshold: 2.4 },
            tests: &["lifestyle-harmony"],
        },
        RecommendationRule {
            when: Trigger::SubscaleAtMost { subscale: "delay_of_gratification", threshold: 2.4 },
            tests: &["adaptability"],
        },
        RecommendationRule {
            when: Trigger::TotalAbove { threshold: 4.2 },
            tests: &["lifestyle-harmony"],
        },
    ],
};
