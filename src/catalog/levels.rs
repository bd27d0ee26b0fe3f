//! Built-in task definitions for each level.

pub struct StaticTask {
    pub id: &'static str,
    pub name: &'static str,
    pub name_en: &'static str,
    pub hasanat: u32,
    pub is_time: bool,
}

pub struct StaticCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub name_en: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
    pub tasks: &'static [StaticTask],
}

pub struct StaticSection {
    pub id: &'static str,
    pub title: &'static str,
    pub title_ur: &'static str,
    pub categories: &'static [StaticCategory],
}

const fn task(id: &'static str, name: &'static str, name_en: &'static str, hasanat: u32) -> StaticTask {
    StaticTask {
        id,
        name,
        name_en,
        hasanat,
        is_time: false,
    }
}

const fn time_task(id: &'static str, name: &'static str, name_en: &'static str) -> StaticTask {
    StaticTask {
        id,
        name,
        name_en,
        hasanat: 0,
        is_time: true,
    }
}

const ROUTINE: StaticCategory = StaticCategory {
    id: "routine",
    name: "معمولات",
    name_en: "Routine",
    color: "#5D6D7E",
    emoji: "⏰",
    tasks: &[
        time_task("wake", "بیداری کا وقت", "Wake time"),
        time_task("sleep", "سونے کا وقت", "Sleep time"),
    ],
};

const FARAIZ_BASIC: StaticCategory = StaticCategory {
    id: "faraiz",
    name: "فرائض",
    name_en: "Obligatory prayers",
    color: "#27AE60",
    emoji: "🕌",
    tasks: &[
        task("fajr", "فجر", "Fajr", 27),
        task("zuhr", "ظہر", "Zuhr", 27),
        task("asr", "عصر", "Asr", 27),
        task("maghrib", "مغرب", "Maghrib", 27),
        task("isha", "عشاء", "Isha", 27),
    ],
};

const FARAIZ_FULL: StaticCategory = StaticCategory {
    id: "faraiz",
    name: "فرائض",
    name_en: "Obligatory prayers",
    color: "#27AE60",
    emoji: "🕌",
    tasks: &[
        task("fajr", "فجر", "Fajr", 27),
        task("zuhr", "ظہر", "Zuhr", 27),
        task("asr", "عصر", "Asr", 27),
        task("maghrib", "مغرب", "Maghrib", 27),
        task("isha", "عشاء", "Isha", 27),
        task("takbeer", "تکبیر اولیٰ", "First takbeer", 50),
    ],
};

const QURAN_SURAHS: StaticCategory = StaticCategory {
    id: "quran",
    name: "تلاوت قرآن",
    name_en: "Quran",
    color: "#3498DB",
    emoji: "📖",
    tasks: &[
        task("yaseen", "سورۃ یٰسین", "Surah Yaseen", 100),
        task("mulk", "سورۃ الملک", "Surah Mulk", 100),
    ],
};

const QURAN_JUZ: StaticCategory = StaticCategory {
    id: "quran",
    name: "تلاوت قرآن",
    name_en: "Quran",
    color: "#3498DB",
    emoji: "📖",
    tasks: &[
        task("tilawat", "ایک پارہ", "One juz", 50),
        task("yaseen", "سورۃ یٰسین", "Surah Yaseen", 100),
        task("waqiah", "سورۃ الواقعہ", "Surah Waqiah", 100),
        task("mulk", "سورۃ الملک", "Surah Mulk", 100),
    ],
};

const QURAN_MULTI_JUZ: StaticCategory = StaticCategory {
    id: "quran",
    name: "تلاوت قرآن",
    name_en: "Quran",
    color: "#3498DB",
    emoji: "📖",
    tasks: &[
        task("tilawat", "ایک سے تین پارے", "One to three juz", 50),
        task("yaseen", "سورۃ یٰسین", "Surah Yaseen", 100),
        task("waqiah", "سورۃ الواقعہ", "Surah Waqiah", 100),
        task("mulk", "سورۃ الملک", "Surah Mulk", 100),
        task("kahf", "سورۃ الکہف", "Surah Kahf", 10),
    ],
};

const AZKAR_MORNING_100: StaticCategory = StaticCategory {
    id: "azkar-morning",
    name: "صبح کے اذکار",
    name_en: "Morning azkar",
    color: "#F39C12",
    emoji: "🌅",
    tasks: &[
        task("istighfar-100", "استغفار ۱۰۰ بار", "Istighfar 100x", 10),
        task("durood-100", "درود شریف ۱۰۰ بار", "Durood 100x", 10),
        task("kalima-100", "تیسرا کلمہ ۱۰۰ بار", "Third kalima 100x", 10),
    ],
};

const AZKAR_EVENING_100: StaticCategory = StaticCategory {
    id: "azkar-evening",
    name: "شام کے اذکار",
    name_en: "Evening azkar",
    color: "#8E44AD",
    emoji: "🌇",
    tasks: &[
        task("istighfar-100", "استغفار ۱۰۰ بار", "Istighfar 100x", 10),
        task("durood-100", "درود شریف ۱۰۰ بار", "Durood 100x", 10),
        task("kalima-100", "تیسرا کلمہ ۱۰۰ بار", "Third kalima 100x", 10),
    ],
};

const AZKAR_MORNING_300: StaticCategory = StaticCategory {
    id: "azkar-morning",
    name: "صبح کے اذکار",
    name_en: "Morning azkar",
    color: "#F39C12",
    emoji: "🌅",
    tasks: &[
        task("istighfar-300", "استغفار ۳۰۰ بار", "Istighfar 300x", 10),
        task("durood-300", "درود شریف ۳۰۰ بار", "Durood 300x", 10),
        task("kalima-300", "تیسرا کلمہ ۳۰۰ بار", "Third kalima 300x", 10),
    ],
};

const AZKAR_EVENING_300: StaticCategory = StaticCategory {
    id: "azkar-evening",
    name: "شام کے اذکار",
    name_en: "Evening azkar",
    color: "#8E44AD",
    emoji: "🌇",
    tasks: &[
        task("istighfar-300", "استغفار ۳۰۰ بار", "Istighfar 300x", 10),
        task("durood-300", "درود شریف ۳۰۰ بار", "Durood 300x", 10),
        task("kalima-300", "تیسرا کلمہ ۳۰۰ بار", "Third kalima 300x", 10),
    ],
};

const AZKAR_MORNING_1000: StaticCategory = StaticCategory {
    id: "azkar-morning",
    name: "صبح کے اذکار",
    name_en: "Morning azkar",
    color: "#F39C12",
    emoji: "🌅",
    tasks: &[
        task("istighfar-1000", "استغفار ۱۰۰۰ بار", "Istighfar 1000x", 10),
        task("durood-1000", "درود شریف ۱۰۰۰ بار", "Durood 1000x", 10),
        task("kalima-1000", "تیسرا کلمہ ۱۰۰۰ بار", "Third kalima 1000x", 10),
    ],
};

const AZKAR_EVENING_1000: StaticCategory = StaticCategory {
    id: "azkar-evening",
    name: "شام کے اذکار",
    name_en: "Evening azkar",
    color: "#8E44AD",
    emoji: "🌇",
    tasks: &[
        task("istighfar-1000", "استغفار ۱۰۰۰ بار", "Istighfar 1000x", 10),
        task("durood-1000", "درود شریف ۱۰۰۰ بار", "Durood 1000x", 10),
        task("kalima-1000", "تیسرا کلمہ ۱۰۰۰ بار", "Third kalima 1000x", 10),
    ],
};

const NAWAFIL_TAHAJJUD: StaticCategory = StaticCategory {
    id: "nawafil",
    name: "نوافل",
    name_en: "Voluntary prayers",
    color: "#1A1A2E",
    emoji: "🌙",
    tasks: &[task("tahajjud", "تہجد", "Tahajjud", 100)],
};

const NAWAFIL_DAYTIME: StaticCategory = StaticCategory {
    id: "nawafil",
    name: "نوافل",
    name_en: "Voluntary prayers",
    color: "#1A1A2E",
    emoji: "🌙",
    tasks: &[
        task("tahajjud", "تہجد", "Tahajjud", 100),
        task("ishraq", "اشراق", "Ishraq", 50),
        task("chasht", "چاشت", "Chasht", 50),
    ],
};

const NAWAFIL_ALL: StaticCategory = StaticCategory {
    id: "nawafil",
    name: "نوافل",
    name_en: "Voluntary prayers",
    color: "#1A1A2E",
    emoji: "🌙",
    tasks: &[
        task("tahajjud", "تہجد", "Tahajjud", 100),
        task("ishraq", "اشراق", "Ishraq", 50),
        task("chasht", "چاشت", "Chasht", 50),
        task("awabeen", "اوابین", "Awabeen", 50),
    ],
};

const PROTECTION_BASIC: StaticCategory = StaticCategory {
    id: "protection",
    name: "حفاظتی دعائیں",
    name_en: "Protection duas",
    color: "#16A085",
    emoji: "🛡️",
    tasks: &[task("ayat-kursi", "آیت الکرسی", "Ayat al-Kursi", 10)],
};

const PROTECTION_STANDARD: StaticCategory = StaticCategory {
    id: "protection",
    name: "حفاظتی دعائیں",
    name_en: "Protection duas",
    color: "#16A085",
    emoji: "🛡️",
    tasks: &[
        task("ayat-kursi", "آیت الکرسی", "Ayat al-Kursi", 10),
        task("three-quls", "تینوں قل", "Three Quls", 10),
    ],
};

const PROTECTION_MANZIL: StaticCategory = StaticCategory {
    id: "protection",
    name: "حفاظتی دعائیں",
    name_en: "Protection duas",
    color: "#16A085",
    emoji: "🛡️",
    tasks: &[
        task("ayat-kursi", "آیت الکرسی", "Ayat al-Kursi", 10),
        task("three-quls", "تینوں قل", "Three Quls", 10),
        task("manzil", "منزل", "Complete Manzil", 10),
    ],
};

pub static BEGINNER: &[StaticSection] = &[
    StaticSection {
        id: "obligations",
        title: "Obligations",
        title_ur: "فرائض و معمولات",
        categories: &[ROUTINE, FARAIZ_BASIC],
    },
    StaticSection {
        id: "worship",
        title: "Worship",
        title_ur: "عبادات",
        categories: &[QURAN_SURAHS, NAWAFIL_TAHAJJUD],
    },
    StaticSection {
        id: "azkar",
        title: "Azkar",
        title_ur: "اذکار",
        categories: &[AZKAR_MORNING_100, AZKAR_EVENING_100, PROTECTION_BASIC],
    },
];

pub static INTERMEDIATE: &[StaticSection] = &[
    StaticSection {
        id: "obligations",
        title: "Obligations",
        title_ur: "فرائض و معمولات",
        categories: &[ROUTINE, FARAIZ_FULL],
    },
    StaticSection {
        id: "worship",
        title: "Worship",
        title_ur: "عبادات",
        categories: &[QURAN_JUZ, NAWAFIL_DAYTIME],
    },
    StaticSection {
        id: "azkar",
        title: "Azkar",
        title_ur: "اذکار",
        categories: &[AZKAR_MORNING_300, AZKAR_EVENING_300, PROTECTION_STANDARD],
    },
];

pub static ADVANCED: &[StaticSection] = &[
    StaticSection {
        id: "obligations",
        title: "Obligations",
        title_ur: "فرائض و معمولات",
        categories: &[ROUTINE, FARAIZ_FULL],
    },
    StaticSection {
        id: "worship",
        title: "Worship",
        title_ur: "عبادات",
        categories: &[QURAN_MULTI_JUZ, NAWAFIL_ALL],
    },
    StaticSection {
        id: "azkar",
        title: "Azkar",
        title_ur: "اذکار",
        categories: &[AZKAR_MORNING_1000, AZKAR_EVENING_1000, PROTECTION_MANZIL],
    },
];
