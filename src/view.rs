use crate::constants::*;
use crate::copy;
use crate::dom;
use crate::overlay;
use trivia_core::{AnswerFeedback, Question, QuizResults, ViewRenderer};
use wasm_bindgen::JsCast;
use web_sys as web;

/// `ViewRenderer` over the page's static markup (see `index.html`).
pub struct DomView {
    document: web::Document,
    game_ui: web::HtmlElement,
    info_content: web::HtmlElement,
    info_text: web::HtmlElement,
    question_text: web::HtmlElement,
    options: web::HtmlElement,
    feedback: web::HtmlElement,
    progress: web::HtmlElement,
    final_score: web::HtmlElement,
    final_rank: web::HtmlElement,
    final_message: web::HtmlElement,
    results_list: web::HtmlElement,
    buttons: Vec<web::HtmlButtonElement>,
}

impl DomView {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            document: document.clone(),
            game_ui: dom::element(document, ID_GAME_UI)?,
            info_content: dom::element(document, ID_INFO_CONTENT)?,
            info_text: dom::element(document, ID_INFO_TEXT)?,
            question_text: dom::element(document, ID_QUESTION_TEXT)?,
            options: dom::element(document, ID_OPTIONS)?,
            feedback: dom::element(document, ID_FEEDBACK)?,
            progress: dom::element(document, ID_PROGRESS)?,
            final_score: dom::element(document, ID_FINAL_SCORE)?,
            final_rank: dom::element(document, ID_FINAL_RANK)?,
            final_message: dom::element(document, ID_FINAL_MESSAGE)?,
            results_list: dom::element(document, ID_RESULTS_LIST)?,
            buttons: Vec::new(),
        })
    }

    /// Start the exit animation of the question and info panels.
    pub fn play_exit(&self) {
        dom::add_class(&self.game_ui, CLASS_EXIT);
        dom::add_class(&self.info_content, CLASS_EXIT);
    }

    fn create(&self, tag: &str) -> Option<web::HtmlElement> {
        match self.document.create_element(tag) {
            Ok(el) => el.dyn_into::<web::HtmlElement>().ok(),
            Err(e) => {
                log::error!("create <{}> error: {:?}", tag, e);
                None
            }
        }
    }

    fn option_button(&self, index: usize, text: &str) -> Option<web::HtmlButtonElement> {
        let button = self
            .create("button")?
            .dyn_into::<web::HtmlButtonElement>()
            .ok()?;
        button.set_inner_text(text);
        dom::add_class(&button, CLASS_OPTION);
        _ = button.set_attribute(OPTION_INDEX_ATTR, &index.to_string());
        Some(button)
    }

    fn summary_item(
        &self,
        index: usize,
        was_correct: bool,
        correct_text: &str,
    ) -> Option<web::HtmlElement> {
        let item = self.create("div")?;
        dom::add_class(&item, CLASS_SUMMARY_ITEM);
        dom::add_class(
            &item,
            if was_correct {
                CLASS_SUMMARY_CORRECT
            } else {
                CLASS_SUMMARY_WRONG
            },
        );

        let head = self.create("div")?;
        let icon = self.create("span")?;
        dom::add_class(&icon, CLASS_SUMMARY_ICON);
        icon.set_inner_text(if was_correct {
            copy::SUMMARY_ICON_CORRECT
        } else {
            copy::SUMMARY_ICON_WRONG
        });
        _ = head.append_child(&icon);
        _ = head.append_with_str_1(&format!(" {}", copy::summary_label(index)));

        let detail = self.create("div")?;
        _ = detail.style().set_property("font-size", "0.8rem");
        dom::set_opacity(&detail, "0.8");
        detail.set_inner_text(&copy::summary_detail(was_correct, correct_text));

        _ = item.append_child(&head);
        _ = item.append_child(&detail);
        Some(item)
    }
}

impl ViewRenderer for DomView {
    fn show_question(&mut self, index: usize, question: &Question) {
        overlay::show_quiz(&self.document);
        dom::remove_class(&self.game_ui, CLASS_EXIT);
        dom::remove_class(&self.info_content, CLASS_EXIT);

        self.progress.set_inner_text(&copy::progress_label(index));
        self.question_text.set_inner_text(&question.prompt);
        self.options.set_inner_html("");
        self.feedback.set_inner_text("");
        dom::add_class(&self.feedback, CLASS_HIDDEN);

        self.info_text.set_inner_text(copy::INFO_PLACEHOLDER);
        dom::set_opacity(&self.info_text, INFO_PLACEHOLDER_OPACITY);

        self.buttons.clear();
        for (i, text) in question.options.iter().enumerate() {
            if let Some(button) = self.option_button(i, text) {
                _ = self.options.append_child(&button);
                self.buttons.push(button);
            }
        }

        dom::add_class(&self.game_ui, CLASS_ENTER);
        dom::add_class(&self.info_content, CLASS_ENTER);
        let game_ui = self.game_ui.clone();
        let info_content = self.info_content.clone();
        dom::set_timeout(ENTER_CLEANUP_MS, move || {
            dom::remove_class(&game_ui, CLASS_ENTER);
            dom::remove_class(&info_content, CLASS_ENTER);
        });
    }

    fn show_feedback(&mut self, feedback: &AnswerFeedback<'_>) {
        for button in &self.buttons {
            button.set_disabled(true);
        }
        if let Some(chosen) = self.buttons.get(feedback.selected_index) {
            dom::add_class(
                chosen,
                if feedback.is_correct {
                    CLASS_CORRECT
                } else {
                    CLASS_WRONG
                },
            );
        }
        if !feedback.is_correct {
            if let Some(right) = self.buttons.get(feedback.correct_index) {
                dom::add_class(right, CLASS_CORRECT);
            }
        }

        // swap the placeholder for the factoid once the fade-out is done
        dom::set_opacity(&self.info_text, INFO_HIDDEN_OPACITY);
        let label = self.create("strong");
        let info_text = self.info_text.clone();
        let factoid = feedback.factoid.to_owned();
        dom::set_timeout(INFO_FADE_MS, move || {
            info_text.set_text_content(None);
            if let Some(label) = label {
                _ = label.style().set_property("color", copy::INFO_LABEL_COLOR);
                label.set_inner_text("Info:");
                _ = info_text.append_child(&label);
            }
            _ = info_text.append_with_str_1(&format!(" {factoid}"));
            dom::set_opacity(&info_text, INFO_VISIBLE_OPACITY);
        });

        if feedback.is_correct {
            self.feedback.set_inner_text(copy::FEEDBACK_CORRECT);
            dom::set_color(&self.feedback, copy::FEEDBACK_CORRECT_COLOR);
        } else {
            self.feedback.set_inner_text(&copy::feedback_wrong(feedback.correct_text));
            dom::set_color(&self.feedback, copy::FEEDBACK_WRONG_COLOR);
        }
        dom::remove_class(&self.feedback, CLASS_HIDDEN);
    }

    fn show_results(&mut self, results: &QuizResults) {
        overlay::show_results(&self.document);
        self.buttons.clear();

        self.final_score.set_inner_text(&results.score.to_string());
        self.final_rank.set_inner_text(copy::rank_title(results.rank));
        self.final_message.set_inner_text(copy::rank_message(results.rank));

        self.results_list.set_inner_html("");
        for (i, record) in results.history.iter().enumerate() {
            if let Some(item) =
                self.summary_item(i, record.was_correct, &record.correct_option_text)
            {
                _ = self.results_list.append_child(&item);
            }
        }
    }
}
