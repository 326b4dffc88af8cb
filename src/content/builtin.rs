//! Built-in content pack
//!
//! Placement and practice questions plus the lesson card that ship with
//! the binary. Correct answers are kept exactly as authored.

use crate::models::{Lesson, Question};

pub(super) fn placement_questions() -> Vec<Question> {
    vec![
        Question::new(
            "أيُّ العبادات تُسمّى عمود الدين؟",
            ["الصيام", "الصلاة", "الزكاة"],
            "الصلاة",
        ),
        // Content note: the authored key for this question is disputed in
        // the source material. It is carried unchanged.
        Question::new(
            "ترك صلاة الفجر حتى خرج وقتها نومًا",
            [
                "عليه كفارة مالية",
                "يقضيها آخر اليوم فقط",
                "يقضيها إذا استيقظ",
                "تسقط ولا تُقضى",
            ],
            "يقضيها إذا استيقظ",
        ),
        Question::new("عدد ركعات صلاة المغرب", ["3", "4", "2"], "3"),
    ]
}

pub(super) fn lesson() -> Lesson {
    Lesson {
        title: "أنواع الطهارة".to_string(),
        body: vec![
            "هناك نوعان من الطهارة".to_string(),
            "أولا الطهارة المعنوية: وهي طهارة القلب من الشرك والبدع فيما يتعلق بحقوق الله عز وجل، وهذا هو أعظم الطهارتين".to_string(),
            "ثانياً الطهارة الحسية: وهي رفع الحدث وزوال الخبث".to_string(),
            "والخبث هو النجاسة ويتوجب إزالتها من بدن المصلي وملابسه ومكان صلاته".to_string(),
        ],
    }
}

pub(super) fn practice_questions() -> Vec<Question> {
    vec![
        Question::new(
            "مسُّ الفرج باليد مباشرةً بلا حائل",
            ["يوجب الوضوء", "لا يوجب الوضوء", "يوجب الغُسل"],
            "يوجب الوضوء",
        ),
        Question::new(
            "من نواقض الوضوء",
            ["غسل اليدين", "خروج الريح", "مسح الرأس", "شرب العصير"],
            "خروج الريح",
        ),
        Question::new(
            "الصلاة بلا وضوء عمدًا",
            [
                "باطلة ويأثم",
                "صحيحة إن قرأ الفاتحة",
                "تصح إن قرأ الفاتحة",
                "لا تصح",
            ],
            "باطلة ويأثم",
        ),
    ]
}
