//! Main application UI.
//! Renders the study screens and routes every progress change through the store.

use chrono::{DateTime, Local};
use eframe::egui;
use jaspresso::clock::{Clock, SystemClock};
use jaspresso::export::json::{export_json_to_path, import_json};
use jaspresso::models::content::{self, ALL_TAGS, EMAILS, GRAMMAR, ROLEPLAYS};
use jaspresso::models::kana::{self, KanaSet};
use jaspresso::models::srs::{format_interval, preview};
use jaspresso::models::{
    FlipOutcome, FontSize, LangUi, MemoryMatch, QueueMode, Quiz, QuizDirection, ReviewQueue,
    ReviewState,
};
use jaspresso::Store;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Application screens, in navigation order
#[derive(Clone, Copy, Default, PartialEq, Eq)]
enum Screen {
    #[default]
    Dashboard,
    Phrases,
    Kana,
    Grammar,
    Emails,
    Games,
    Review,
    Settings,
}

const SCREENS: [Screen; 8] = [
    Screen::Dashboard,
    Screen::Phrases,
    Screen::Kana,
    Screen::Grammar,
    Screen::Emails,
    Screen::Games,
    Screen::Review,
    Screen::Settings,
];

impl Screen {
    fn label(self, lang: LangUi) -> &'static str {
        match self {
            Screen::Dashboard => tr(lang, "대시보드", "Dashboard"),
            Screen::Phrases => tr(lang, "문장", "Phrases"),
            Screen::Kana => tr(lang, "가나", "Kana"),
            Screen::Grammar => tr(lang, "문법", "Grammar"),
            Screen::Emails => tr(lang, "비즈 이메일", "Biz Email"),
            Screen::Games => tr(lang, "게임", "Games"),
            Screen::Review => tr(lang, "복습", "Review"),
            Screen::Settings => tr(lang, "설정", "Settings"),
        }
    }
}

fn tr(lang: LangUi, kr: &'static str, en: &'static str) -> &'static str {
    match lang {
        LangUi::Kr => kr,
        LangUi::En => en,
    }
}

/// Formats a millisecond timestamp as local YYYY-MM-DD HH:MM
fn format_timestamp(ts: i64) -> String {
    match DateTime::from_timestamp_millis(ts) {
        Some(dt) if ts > 0 => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        _ => "-".to_string(),
    }
}

fn feedback(correct: bool, answer: &str) -> String {
    if correct {
        "정답!".to_string()
    } else {
        format!("오답: {}", answer)
    }
}

/// Adds a CJK-capable font as fallback for every family
pub fn install_cjk_font(ctx: &egui::Context, bytes: Vec<u8>) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push("cjk".to_owned());
    }
    ctx.set_fonts(fonts);
}

/// When a review item is due: "now", or the due time with the days left
fn due_label(lang: LangUi, review: &ReviewState, now_ms: i64) -> String {
    match review.days_until_due(now_ms) {
        0 => tr(lang, "지금", "now").to_string(),
        days => format!("{} ({}d)", format_timestamp(review.due_ts), days),
    }
}

/// Main application state
pub struct MyApp {
    store: Store,
    clock: SystemClock,
    rng: StdRng,
    current_screen: Screen,
    status_message: Option<String>,
    applied_font_size: Option<FontSize>,

    tag_filter: String,
    phrase_quiz: Option<Quiz>,
    phrase_quiz_feedback: Option<String>,

    kana_set: KanaSet,
    kana_current: &'static str,
    kana_input: String,
    kana_feedback: Option<String>,

    picked_email: usize,
    copied: bool,

    quick_match: Quiz,
    quick_match_feedback: Option<String>,
    sprint_kana: &'static str,
    sprint_input: String,
    sprint_score: u32,
    sprint_feedback: Option<String>,
    multiple_choice: Quiz,
    multiple_choice_feedback: Option<String>,
    memory_match: MemoryMatch,

    review_queue: ReviewQueue,

    show_reset_dialog: bool,
}

impl MyApp {
    pub fn new(store: Store) -> Self {
        let clock = SystemClock;
        let mut rng = StdRng::from_entropy();
        let review_queue = ReviewQueue::snapshot(&store.state().srs, clock.now_ms());
        let kana_current = kana::random_kana(KanaSet::Hiragana, &mut rng);
        let sprint_kana = kana::random_any_kana(&mut rng);
        let quick_match = Quiz::generate(QuizDirection::JpToKr, &mut rng);
        let multiple_choice = Quiz::generate(QuizDirection::KrToJp, &mut rng);
        let memory_match = MemoryMatch::new(&mut rng);

        Self {
            store,
            clock,
            rng,
            current_screen: Screen::Dashboard,
            status_message: None,
            applied_font_size: None,
            tag_filter: String::new(),
            phrase_quiz: None,
            phrase_quiz_feedback: None,
            kana_set: KanaSet::Hiragana,
            kana_current,
            kana_input: String::new(),
            kana_feedback: None,
            picked_email: 0,
            copied: false,
            quick_match,
            quick_match_feedback: None,
            sprint_kana,
            sprint_input: String::new(),
            sprint_score: 0,
            sprint_feedback: None,
            multiple_choice,
            multiple_choice_feedback: None,
            memory_match,
            review_queue,
            show_reset_dialog: false,
        }
    }

    fn lang(&self) -> LangUi {
        self.store.state().lang_ui
    }

    /// Persists the document after a mutation; failures are logged and shown
    fn commit(&mut self) {
        if let Err(e) = self.store.save() {
            log::error!("Failed to save progress: {}", e);
            self.status_message = Some(format!("Save failed: {}", e));
        }
    }

    fn navigate(&mut self, screen: Screen) {
        if screen == Screen::Review {
            self.review_queue
                .refresh(&self.store.state().srs, self.clock.now_ms());
        }
        self.current_screen = screen;
    }

    fn render_nav(&mut self, ctx: &egui::Context) {
        let lang = self.lang();
        let mut target: Option<Screen> = None;
        let mut new_lang = lang;

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.heading("Jaspresso");
                ui.label("KR→JP w/ EN help");
                ui.separator();
                for screen in SCREENS {
                    if ui
                        .selectable_label(self.current_screen == screen, screen.label(lang))
                        .clicked()
                    {
                        target = Some(screen);
                    }
                }
                ui.separator();
                egui::ComboBox::from_id_salt("lang_ui")
                    .selected_text(match new_lang {
                        LangUi::Kr => "KR UI",
                        LangUi::En => "EN UI",
                    })
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut new_lang, LangUi::Kr, "KR UI");
                        ui.selectable_value(&mut new_lang, LangUi::En, "EN UI");
                    });
            });
            if let Some(message) = &self.status_message {
                ui.colored_label(egui::Color32::RED, message);
            }
        });

        if new_lang != lang {
            self.store.state_mut().lang_ui = new_lang;
            self.commit();
        }
        if let Some(screen) = target {
            self.navigate(screen);
        }
    }

    fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let lang = self.lang();
        let now = self.clock.now_ms();
        let state = self.store.state();
        let stats = &state.stats;

        ui.heading(Screen::Dashboard.label(lang));
        ui.add_space(10.0);

        egui::Grid::new("dashboard_stats")
            .num_columns(2)
            .spacing([40.0, 8.0])
            .show(ui, |ui| {
                ui.label("진도 / Progress");
                ui.strong(format!("{} items learned", stats.learned));
                ui.end_row();

                ui.label("퀴즈 횟수 / Quizzes");
                ui.strong(format!("{} completed", stats.quizzes));
                ui.end_row();

                ui.label("연속 학습 / Streak");
                ui.strong(format!("{}d", stats.streak));
                ui.end_row();

                ui.label("마지막 / Last");
                ui.label(format_timestamp(stats.last_ts));
                ui.end_row();

                ui.label("SRS 큐 / Queue");
                ui.label(format!(
                    "{} items, {} due",
                    state.srs.len(),
                    state.due_count(now)
                ));
                ui.end_row();
            });

        ui.separator();
        ui.label("오늘의 팁 / Today’s tip");
        ui.strong("매일 15분: 생활 문장 5개 + 가나 5개 + 미니게임 1판");
        ui.label("15 min daily: 5 phrases + 5 kana + 1 mini game");

        ui.separator();
        ui.label("추천 학습 경로 / Suggested Path");
        ui.label("1. 생활 필수 문장 5개 익히기 (정중체)");
        ui.label("2. 히라가나/가타카나 10개 복습");
        ui.label("3. 미니게임 1판");
        ui.label("4. 비즈 이메일 템플릿 1개 읽고 저장");
    }

    fn render_phrases(&mut self, ui: &mut egui::Ui) {
        let lang = self.lang();
        let show_romaji = self.store.state().settings.show_romaji;

        ui.heading(Screen::Phrases.label(lang));

        ui.horizontal_wrapped(|ui| {
            if ui.selectable_label(self.tag_filter.is_empty(), "ALL").clicked() {
                self.tag_filter.clear();
            }
            for tag in ALL_TAGS {
                if ui.selectable_label(self.tag_filter == *tag, *tag).clicked() {
                    self.tag_filter = tag.to_string();
                }
            }
        });
        ui.separator();

        // Actions are applied after rendering to avoid borrowing conflicts
        let mut action_add: Option<&'static str> = None;
        let mut action_quiz: Option<&'static content::Phrase> = None;

        for phrase in content::phrases_with_tag(&self.tag_filter) {
            let tracked = self.store.state().srs.contains(phrase.id);
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(phrase.jp).size(18.0).strong());
                if show_romaji {
                    ui.weak(phrase.romaji);
                }
                ui.label(format!("KR: {}", phrase.kr));
                ui.weak(format!("EN: {}", phrase.en));
                ui.horizontal(|ui| {
                    let add_label = if tracked {
                        tr(lang, "복습 중 ✔", "In review ✔")
                    } else {
                        tr(lang, "복습에 추가", "Add to review")
                    };
                    if ui.button(add_label).clicked() {
                        action_add = Some(phrase.id);
                    }
                    if ui.button(tr(lang, "퀴즈", "Quiz")).clicked() {
                        action_quiz = Some(phrase);
                    }
                    ui.weak(phrase.tags.join(", "));
                });
            });
        }

        if let Some(id) = action_add {
            let now = self.clock.now_ms();
            self.store.state_mut().add_to_review(id, now);
            self.commit();
        }
        if let Some(phrase) = action_quiz {
            self.phrase_quiz = Some(Quiz::for_phrase(
                phrase,
                QuizDirection::JpToKr,
                &mut self.rng,
            ));
            self.phrase_quiz_feedback = None;
        }
    }

    fn render_phrase_quiz(&mut self, ctx: &egui::Context) {
        let Some(quiz) = &self.phrase_quiz else {
            return;
        };
        let mut picked: Option<usize> = None;
        let mut close = false;

        egui::Window::new("퀴즈 / Quiz")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(quiz.prompt).size(18.0));
                ui.label("무슨 뜻일까요?");
                for (i, choice) in quiz.choices.iter().enumerate() {
                    if ui.button(format!("{}. {}", i + 1, choice)).clicked() {
                        picked = Some(i);
                    }
                }
                if let Some(message) = &self.phrase_quiz_feedback {
                    ui.strong(message);
                }
                if ui.button("Close").clicked() {
                    close = true;
                }
            });

        if let Some(i) = picked {
            if self.phrase_quiz_feedback.is_none() {
                let correct = quiz.is_correct(i);
                self.phrase_quiz_feedback = Some(feedback(correct, quiz.answer()));
                let now = self.clock.now_ms();
                self.store.state_mut().record_quiz(now);
                self.commit();
            }
        }
        if close {
            self.phrase_quiz = None;
            self.phrase_quiz_feedback = None;
        }
    }

    fn render_kana(&mut self, ui: &mut egui::Ui) {
        let lang = self.lang();
        ui.heading(Screen::Kana.label(lang));

        let mut new_set = self.kana_set;
        ui.horizontal(|ui| {
            ui.selectable_value(&mut new_set, KanaSet::Hiragana, "히라가나");
            ui.selectable_value(&mut new_set, KanaSet::Katakana, "가타카나");
        });
        if new_set != self.kana_set {
            self.kana_set = new_set;
            self.kana_current = kana::random_kana(new_set, &mut self.rng);
            self.kana_input.clear();
            self.kana_feedback = None;
        }

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(self.kana_current).size(72.0).strong());
            ui.weak("romaji hint");
            ui.monospace(kana::romaji(self.kana_current).unwrap_or(""));
        });

        let mut submitted = false;
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.kana_input).hint_text("타자 입력 (romaji)"),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }
            if ui.button("체크").clicked() {
                submitted = true;
            }
        });
        if submitted {
            let correct = kana::check_romaji(self.kana_current, &self.kana_input);
            self.kana_feedback = Some(feedback(
                correct,
                kana::romaji(self.kana_current).unwrap_or(""),
            ));
            self.kana_current = kana::random_kana(self.kana_set, &mut self.rng);
            self.kana_input.clear();
        }
        if let Some(message) = &self.kana_feedback {
            ui.strong(message);
        }

        ui.separator();
        egui::Grid::new("kana_chart").show(ui, |ui| {
            for (i, k) in self.kana_set.chars().iter().enumerate() {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(*k).size(20.0));
                    ui.small(kana::romaji(k).unwrap_or(""));
                });
                if (i + 1) % 10 == 0 {
                    ui.end_row();
                }
            }
        });
    }

    fn render_grammar(&mut self, ui: &mut egui::Ui) {
        ui.heading(Screen::Grammar.label(self.lang()));
        for point in GRAMMAR {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.weak(point.jp);
                ui.strong(point.point);
                ui.label(format!("KR: {}", point.kr));
                ui.weak(format!("EN: {}", point.en));
            });
        }
        ui.label("예) 今お時間よろしいでしょうか（부드러운 확인）");
    }

    fn render_emails(&mut self, ui: &mut egui::Ui) {
        ui.heading(Screen::Emails.label(self.lang()));
        ui.label("템플릿 선택");
        ui.horizontal_wrapped(|ui| {
            for (i, email) in EMAILS.iter().enumerate() {
                let label = format!("{} / {}", email.subject_kr, email.subject_en);
                if ui.selectable_label(self.picked_email == i, label).clicked() {
                    self.picked_email = i;
                    self.copied = false;
                }
            }
        });

        if let Some(email) = EMAILS.get(self.picked_email) {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.weak("Subject");
                ui.strong(email.subject_jp);
                ui.label(email.body_jp);
                ui.label(format!("KR: {}", email.body_kr));
                ui.weak(format!("EN: {}", email.body_en));
                ui.horizontal(|ui| {
                    if ui.button("일본어 본문 복사").clicked() {
                        ui.output_mut(|o| o.copied_text = email.clipboard_text());
                        self.copied = true;
                    }
                    if self.copied {
                        ui.colored_label(egui::Color32::DARK_GREEN, "복사됨!");
                    }
                });
            });
        }

        ui.separator();
        ui.strong("롤플레이 / Roleplay");
        for roleplay in ROLEPLAYS {
            ui.collapsing(roleplay.title, |ui| {
                ui.columns(3, |columns| {
                    for (column, (title, lines)) in columns.iter_mut().zip([
                        ("JP", roleplay.jp),
                        ("KR", roleplay.kr),
                        ("EN", roleplay.en),
                    ]) {
                        column.weak(title);
                        for line in lines {
                            column.label(*line);
                        }
                    }
                });
            });
        }
    }

    fn render_games(&mut self, ui: &mut egui::Ui) {
        ui.heading(Screen::Games.label(self.lang()));

        // Quick Match: Japanese prompt, Korean choices, counts as a quiz
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.weak("게임: 빠른 매칭");
            ui.strong(self.quick_match.prompt);
            if let Some(phrase) = content::find_phrase(self.quick_match.phrase_id) {
                ui.small(phrase.romaji);
            }
            let mut picked = None;
            for (i, choice) in self.quick_match.choices.iter().enumerate() {
                if ui.button(format!("{}. {}", i + 1, choice)).clicked() {
                    picked = Some(i);
                }
            }
            if let Some(message) = &self.quick_match_feedback {
                ui.strong(message);
            }
            if let Some(i) = picked {
                let correct = self.quick_match.is_correct(i);
                self.quick_match_feedback =
                    Some(if correct { "정답!".to_string() } else { "오답".to_string() });
                self.quick_match = Quiz::generate(QuizDirection::JpToKr, &mut self.rng);
                let now = self.clock.now_ms();
                self.store.state_mut().record_quiz(now);
                self.commit();
            }
        });

        // Type Sprint: romaji for random kana from both sets
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.weak("게임: 타자 스프린트");
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(self.sprint_kana).size(56.0).strong());
            });
            let mut submitted = false;
            ui.horizontal(|ui| {
                let response =
                    ui.add(egui::TextEdit::singleline(&mut self.sprint_input).hint_text("romaji"));
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }
                if ui.button("입력").clicked() {
                    submitted = true;
                }
            });
            if submitted {
                if kana::check_romaji(self.sprint_kana, &self.sprint_input) {
                    self.sprint_score += 1;
                    self.sprint_feedback = None;
                } else {
                    self.sprint_feedback = Some(format!(
                        "정답: {}",
                        kana::romaji(self.sprint_kana).unwrap_or("")
                    ));
                }
                self.sprint_kana = kana::random_any_kana(&mut self.rng);
                self.sprint_input.clear();
            }
            ui.label(format!("점수: {}", self.sprint_score));
            if let Some(message) = &self.sprint_feedback {
                ui.strong(message);
            }
        });

        // Multiple Choice: Korean prompt, Japanese choices
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.weak("게임: 객관식 (KR→JP)");
            ui.strong(self.multiple_choice.prompt);
            let mut picked = None;
            for (i, choice) in self.multiple_choice.choices.iter().enumerate() {
                if ui.button(format!("{}. {}", i + 1, choice)).clicked() {
                    picked = Some(i);
                }
            }
            if let Some(message) = &self.multiple_choice_feedback {
                ui.strong(message);
            }
            if let Some(i) = picked {
                let correct = self.multiple_choice.is_correct(i);
                self.multiple_choice_feedback =
                    Some(feedback(correct, self.multiple_choice.answer()));
                self.multiple_choice = Quiz::generate(QuizDirection::KrToJp, &mut self.rng);
            }
        });

        // Memory Match: pair each hiragana with its romaji
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.weak("게임: 메모리 매칭");
            let mut flipped = None;
            egui::Grid::new("memory_match").show(ui, |ui| {
                for (i, card) in self.memory_match.cards().iter().enumerate() {
                    let face = if self.memory_match.is_face_up(i) {
                        card.face
                    } else {
                        "?"
                    };
                    let button = egui::Button::new(egui::RichText::new(face).size(20.0))
                        .min_size(egui::vec2(56.0, 56.0));
                    if ui
                        .add_enabled(!self.memory_match.is_cleared(i), button)
                        .clicked()
                    {
                        flipped = Some(i);
                    }
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
            if let Some(i) = flipped {
                if self.memory_match.flip(i) == FlipOutcome::Matched {
                    log::debug!("Memory match pair found");
                }
            }
            ui.horizontal(|ui| {
                if self.memory_match.is_done() {
                    ui.strong("완료! 🎉");
                }
                if ui.button("다시 시작").clicked() {
                    self.memory_match = MemoryMatch::new(&mut self.rng);
                }
            });
        });
    }

    fn render_review(&mut self, ui: &mut egui::Ui) {
        let lang = self.lang();
        ui.heading(Screen::Review.label(lang));

        let Some(item_id) = self.review_queue.current().map(str::to_string) else {
            ui.label(tr(
                lang,
                "복습 항목이 없습니다. 문장에서 “복습에 추가”를 눌러보세요.",
                "Nothing to review yet. Add phrases from the Phrases screen.",
            ));
            return;
        };

        let now = self.clock.now_ms();
        let show_romaji = self.store.state().settings.show_romaji;
        let review = self.store.state().srs.get(&item_id).cloned();
        let (if_wrong, if_right) = preview(review.as_ref(), now);

        ui.label(match self.review_queue.mode() {
            QueueMode::Due => format!(
                "복습 SRS: {} / {} due",
                self.review_queue.position() + 1,
                self.review_queue.len()
            ),
            QueueMode::Ahead => format!(
                "복습 SRS (ahead of schedule): {} / {}",
                self.review_queue.position() + 1,
                self.review_queue.len()
            ),
        });

        ui.group(|ui| {
            ui.set_width(ui.available_width());
            match content::find_phrase(&item_id) {
                Some(phrase) => {
                    ui.label(egui::RichText::new(phrase.jp).size(20.0).strong());
                    if show_romaji {
                        ui.weak(phrase.romaji);
                    }
                    ui.label(format!("KR: {}", phrase.kr));
                    ui.weak(format!("EN: {}", phrase.en));
                }
                None => {
                    ui.label(format!("Unknown item '{}'", item_id));
                }
            }
            if let Some(review) = &review {
                ui.small(format!(
                    "interval {}d · ease {:.2} · due {}",
                    review.interval,
                    review.ease,
                    due_label(lang, review, now)
                ));
            }
        });

        let mut answer: Option<bool> = None;
        ui.horizontal(|ui| {
            let wrong = format!("틀림 ({})", format_interval(if_wrong.interval));
            let right = format!("맞음 ({})", format_interval(if_right.interval));
            if ui.button(wrong).clicked() {
                answer = Some(false);
            }
            if ui.button(right).clicked() {
                answer = Some(true);
            }
        });

        if let Some(correct) = answer {
            let next = self
                .store
                .state_mut()
                .answer_review(&item_id, correct, now);
            log::debug!(
                "Reviewed '{}' ({}): next in {} days",
                item_id,
                if correct { "right" } else { "wrong" },
                next.interval
            );
            self.commit();
            self.review_queue.advance();
        }
    }

    fn render_settings(&mut self, ui: &mut egui::Ui) {
        let lang = self.lang();
        ui.heading(Screen::Settings.label(lang));

        let mut settings = self.store.state().settings.clone();
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.strong("표시 옵션");
            ui.checkbox(&mut settings.show_romaji, "로마자 표기 보이기");
            ui.label("글자 크기");
            ui.horizontal(|ui| {
                ui.selectable_value(&mut settings.font_size, FontSize::Small, "작게");
                ui.selectable_value(&mut settings.font_size, FontSize::Base, "기본");
                ui.selectable_value(&mut settings.font_size, FontSize::Large, "크게");
            });
        });
        if settings != self.store.state().settings {
            self.store.state_mut().settings = settings;
            self.commit();
        }

        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.strong("데이터");
            ui.horizontal(|ui| {
                if ui.button(tr(lang, "진도 내보내기", "Export progress")).clicked() {
                    self.handle_export();
                }
                if ui.button(tr(lang, "진도 가져오기", "Import progress")).clicked() {
                    self.handle_import();
                }
                if ui
                    .button(egui::RichText::new("초기화").color(egui::Color32::RED))
                    .clicked()
                {
                    self.show_reset_dialog = true;
                }
            });
        });

        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.strong("학습 팁");
            ui.label("• 정중체(です・ます) 중심으로 먼저 익히고 캐주얼은 나중에.");
            ui.label("• 가나는 매일 10자씩, 총 9일 완성 루틴.");
            ui.label("• 비즈 이메일은 일본어 본문을 복사해서 실제로 써보기.");
        });
    }

    fn render_reset_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_reset_dialog {
            return;
        }
        egui::Window::new("모든 학습 데이터를 초기화할까요?")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("No").clicked() {
                        self.show_reset_dialog = false;
                    }
                    if ui.button("Yes").clicked() {
                        self.show_reset_dialog = false;
                        match self.store.reset() {
                            Ok(()) => {
                                self.review_queue
                                    .refresh(&self.store.state().srs, self.clock.now_ms());
                                self.status_message = None;
                            }
                            Err(e) => {
                                log::error!("Failed to reset progress: {}", e);
                                self.status_message = Some(format!("Reset failed: {}", e));
                            }
                        }
                    }
                });
            });
    }

    /// Saves the progress document to a JSON file chosen by the learner
    fn handle_export(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("jaspresso-progress.json")
            .add_filter("JSON files", &["json"])
            .save_file()
        {
            self.status_message = match export_json_to_path(self.store.state(), &path) {
                Ok(()) => Some(format!("Exported to {}", path.display())),
                Err(e) => {
                    log::error!("Export failed: {}", e);
                    Some(format!("Export failed: {}", e))
                }
            };
        }
    }

    /// Replaces current progress with a JSON file chosen by the learner
    fn handle_import(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        {
            match import_json(&path) {
                Ok(state) => {
                    if let Err(e) = self.store.replace(state) {
                        log::error!("Failed to save imported progress: {}", e);
                        self.status_message = Some(format!("Import failed: {}", e));
                        return;
                    }
                    self.review_queue
                        .refresh(&self.store.state().srs, self.clock.now_ms());
                    self.status_message = Some(format!(
                        "Imported {} review items",
                        self.store.state().srs.len()
                    ));
                }
                Err(e) => {
                    log::warn!("Import of {} failed: {}", path.display(), e);
                    self.status_message = Some(format!("Import failed: {}", e));
                }
            }
        }
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let font_size = self.store.state().settings.font_size;
        if self.applied_font_size != Some(font_size) {
            ctx.set_zoom_factor(font_size.zoom_factor());
            self.applied_font_size = Some(font_size);
        }

        self.render_nav(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("screen")
                .show(ui, |ui| match self.current_screen {
                    Screen::Dashboard => self.render_dashboard(ui),
                    Screen::Phrases => self.render_phrases(ui),
                    Screen::Kana => self.render_kana(ui),
                    Screen::Grammar => self.render_grammar(ui),
                    Screen::Emails => self.render_emails(ui),
                    Screen::Games => self.render_games(ui),
                    Screen::Review => self.render_review(ui),
                    Screen::Settings => self.render_settings(ui),
                });
        });

        self.render_phrase_quiz(ctx);
        self.render_reset_dialog(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_unset() {
        assert_eq!(format_timestamp(0), "-");
    }

    #[test]
    fn test_format_timestamp_shape() {
        let formatted = format_timestamp(1_700_000_000_000);
        assert_eq!(formatted.len(), "2023-11-14 22:13".len());
        assert!(formatted.starts_with("2023-11-1"));
    }

    #[test]
    fn test_every_screen_has_labels() {
        for screen in SCREENS {
            assert!(!screen.label(LangUi::Kr).is_empty());
            assert!(!screen.label(LangUi::En).is_empty());
        }
    }

    #[test]
    fn test_feedback_messages() {
        assert_eq!(feedback(true, "x"), "정답!");
        assert_eq!(feedback(false, "ふ"), "오답: ふ");
    }

    #[test]
    fn test_due_label() {
        let review = ReviewState::fresh(1_700_000_000_000);
        assert_eq!(due_label(LangUi::En, &review, 1_700_000_000_000), "now");
        assert_eq!(due_label(LangUi::Kr, &review, 1_700_000_000_001), "지금");

        let later = ReviewState {
            due_ts: 1_700_000_000_000 + 3 * 86_400_000,
            ..review
        };
        let label = due_label(LangUi::En, &later, 1_700_000_000_000);
        assert!(label.ends_with(" (3d)"), "{label}");
        assert!(label.starts_with(&format_timestamp(later.due_ts)));
    }
}
