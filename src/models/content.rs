//! Built-in study material: phrases, roleplays, grammar notes and business email templates.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phrase {
    pub id: &'static str,
    pub jp: &'static str,
    pub romaji: &'static str,
    pub kr: &'static str,
    pub en: &'static str,
    pub tags: &'static [&'static str],
}

impl Phrase {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Roleplay {
    pub id: &'static str,
    pub title: &'static str,
    pub jp: &'static [&'static str],
    pub kr: &'static [&'static str],
    pub en: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct GrammarPoint {
    pub id: &'static str,
    pub point: &'static str,
    pub jp: &'static str,
    pub kr: &'static str,
    pub en: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmailTemplate {
    pub id: &'static str,
    pub subject_jp: &'static str,
    pub body_jp: &'static str,
    pub subject_kr: &'static str,
    pub body_kr: &'static str,
    pub subject_en: &'static str,
    pub body_en: &'static str,
}

impl EmailTemplate {
    /// Japanese subject line and body, ready to paste into a mail client.
    pub fn clipboard_text(&self) -> String {
        format!("件名: {}\n\n{}", self.subject_jp, self.body_jp)
    }
}

pub const ALL_TAGS: &[&str] = &[
    "greeting",
    "daily",
    "restaurant",
    "meeting",
    "email",
    "business",
    "business-polite",
    "service",
    "payment",
    "travel",
    "office",
];

pub const PHRASES: &[Phrase] = &[
    Phrase {
        id: "p1",
        jp: "はじめまして。よろしくお願いします。",
        romaji: "Hajimemashite. Yoroshiku onegai shimasu.",
        kr: "처음 뵙겠습니다. 잘 부탁드립니다.",
        en: "Nice to meet you. I look forward to working with you.",
        tags: &["greeting", "business-polite"],
    },
    Phrase {
        id: "p2",
        jp: "おはようございます",
        romaji: "Ohayō gozaimasu",
        kr: "좋은 아침입니다",
        en: "Good morning",
        tags: &["greeting"],
    },
    Phrase {
        id: "p3",
        jp: "ありがとうございます",
        romaji: "Arigatō gozaimasu",
        kr: "감사합니다",
        en: "Thank you",
        tags: &["greeting"],
    },
    Phrase {
        id: "p4",
        jp: "すみません、もう一度お願いします。",
        romaji: "Sumimasen, mō ichido onegai shimasu.",
        kr: "죄송하지만, 한 번 더 말씀해 주세요.",
        en: "Excuse me, could you say that again?",
        tags: &["meeting", "business-polite"],
    },
    Phrase {
        id: "p5",
        jp: "これはどういう意味ですか？",
        romaji: "Kore wa dō iu imi desu ka?",
        kr: "이건 무슨 의미인가요?",
        en: "What does this mean?",
        tags: &["meeting"],
    },
    Phrase {
        id: "p6",
        jp: "今お時間よろしいでしょうか。",
        romaji: "Ima ojikan yoroshii deshō ka?",
        kr: "지금 시간 괜찮으실까요?",
        en: "Do you have a moment now?",
        tags: &["business-polite"],
    },
    Phrase {
        id: "p7",
        jp: "少々お待ちください。",
        romaji: "Shōshō omachi kudasai.",
        kr: "잠시만 기다려 주세요.",
        en: "Please wait a moment.",
        tags: &["service"],
    },
    Phrase {
        id: "p8",
        jp: "ご連絡ありがとうございます。",
        romaji: "Go-renraku arigatō gozaimasu.",
        kr: "연락 주셔서 감사합니다.",
        en: "Thank you for your message.",
        tags: &["email", "business-polite"],
    },
    Phrase {
        id: "p9",
        jp: "失礼いたします。",
        romaji: "Shitsurei itashimasu.",
        kr: "실례하겠습니다.",
        en: "Excuse me (polite).",
        tags: &["business-polite"],
    },
    Phrase {
        id: "p10",
        jp: "よろしくお願いいたします。",
        romaji: "Yoroshiku onegai itashimasu.",
        kr: "부탁드립니다.",
        en: "Thank you in advance.",
        tags: &["email", "business-polite"],
    },
    Phrase {
        id: "p11",
        jp: "これは経費で落とせますか？",
        romaji: "Kore wa keihi de otosemasu ka?",
        kr: "이건 비용 처리 가능할까요?",
        en: "Can this be expensed?",
        tags: &["office", "business"],
    },
    Phrase {
        id: "p12",
        jp: "最終確認をお願いします。",
        romaji: "Saishū kakunin o onegai shimasu.",
        kr: "최종 확인 부탁드립니다.",
        en: "Please do a final check.",
        tags: &["business", "meeting", "email"],
    },
    Phrase {
        id: "p13",
        jp: "今日は予約しています。",
        romaji: "Kyō wa yoyaku shite imasu.",
        kr: "오늘 예약했습니다.",
        en: "I have a reservation today.",
        tags: &["travel", "daily"],
    },
    Phrase {
        id: "p14",
        jp: "領収書をいただけますか。",
        romaji: "Ryōshūsho o itadakemasu ka?",
        kr: "영수증 주실 수 있을까요?",
        en: "May I have a receipt?",
        tags: &["daily", "payment"],
    },
    Phrase {
        id: "p15",
        jp: "おすすめは何ですか？",
        romaji: "Osusume wa nan desu ka?",
        kr: "추천 메뉴가 무엇인가요?",
        en: "What do you recommend?",
        tags: &["restaurant", "daily"],
    },
];

pub const ROLEPLAYS: &[Roleplay] = &[
    Roleplay {
        id: "r1",
        title: "첫 인사 (비즈니스)",
        jp: &[
            "A: はじめまして、ソンと申します。",
            "B: はじめまして。ABCの田中です。",
            "A: 本日はお時間をいただき、ありがとうございます。",
        ],
        kr: &[
            "A: 처음 뵙겠습니다, 손이라고 합니다.",
            "B: 처음 뵙겠습니다. ABC의 다나카입니다.",
            "A: 오늘 시간 내주셔서 감사합니다.",
        ],
        en: &[
            "A: Nice to meet you, I’m Son.",
            "B: Nice to meet you. I’m Tanaka from ABC.",
            "A: Thank you for your time today.",
        ],
    },
    Roleplay {
        id: "r2",
        title: "식당 예약 확인",
        jp: &[
            "A: 予約のソンです。",
            "B: ありがとうございます。二名様ですね。",
            "A: はい、よろしくお願いします。",
        ],
        kr: &[
            "A: 예약한 손입니다.",
            "B: 감사합니다. 두 분이시죠?",
            "A: 네, 부탁드립니다.",
        ],
        en: &[
            "A: I’m Son with a reservation.",
            "B: Thank you. Table for two?",
            "A: Yes, please.",
        ],
    },
];

pub const GRAMMAR: &[GrammarPoint] = &[
    GrammarPoint {
        id: "g1",
        point: "です／ます 체",
        jp: "丁寧体（です・ます）",
        kr: "정중체: 문장을 공손하게.",
        en: "Polite style used in business.",
    },
    GrammarPoint {
        id: "g2",
        point: "〜でしょうか",
        jp: "確認・依頼のやわらかい表現",
        kr: "확인/요청을 부드럽게.",
        en: "Soft check/request.",
    },
    GrammarPoint {
        id: "g3",
        point: "〜ていただけますか",
        jp: "依頼の丁寧表現",
        kr: "정중한 부탁.",
        en: "Polite request.",
    },
];

pub const EMAILS: &[EmailTemplate] = &[
    EmailTemplate {
        id: "e1",
        subject_jp: "ご挨拶",
        body_jp: "いつもお世話になっております。ABCのソンでございます。〜",
        subject_kr: "인사",
        body_kr: "평소 도움에 감사드립니다. ABC의 손입니다. ~",
        subject_en: "Greetings",
        body_en: "I hope you are well. This is Son from ABC. ~",
    },
    EmailTemplate {
        id: "e2",
        subject_jp: "打ち合わせのお願い",
        body_jp: "打ち合わせのお時間をいただけますでしょうか。〜",
        subject_kr: "미팅 요청",
        body_kr: "미팅 시간을 내주실 수 있을까요? ~",
        subject_en: "Meeting Request",
        body_en: "May I request time for a meeting? ~",
    },
];

pub fn find_phrase(id: &str) -> Option<&'static Phrase> {
    PHRASES.iter().find(|p| p.id == id)
}

/// Phrases carrying `tag`, or every phrase when `tag` is empty.
pub fn phrases_with_tag(tag: &str) -> Vec<&'static Phrase> {
    PHRASES
        .iter()
        .filter(|p| tag.is_empty() || p.has_tag(tag))
        .collect()
}
