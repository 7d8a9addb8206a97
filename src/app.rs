use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::application::{ApplicationForm, FieldUpdate};
use crate::config::Config;
use crate::content::FAQS;
use crate::format::CurrencyFormat;
use crate::quote::{QuoteParameters, Slider};

const PAGE_STEPS: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Calculator,
    Apply,
    Faqs,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Calculator, Screen::Apply, Screen::Faqs];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Calculator => "Calculator",
            Screen::Apply => "Apply",
            Screen::Faqs => "FAQs",
        }
    }

    fn next(self) -> Self {
        match self {
            Screen::Calculator => Screen::Apply,
            Screen::Apply => Screen::Faqs,
            Screen::Faqs => Screen::Calculator,
        }
    }

    fn prev(self) -> Self {
        match self {
            Screen::Calculator => Screen::Faqs,
            Screen::Apply => Screen::Calculator,
            Screen::Faqs => Screen::Apply,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FullName,
    Email,
    Phone,
    Amount,
    Purpose,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::FullName,
        FormField::Email,
        FormField::Phone,
        FormField::Amount,
        FormField::Purpose,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::FullName => "Full name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Amount => "Requested amount",
            FormField::Purpose => "Purpose",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::FullName => "Jane Doe",
            FormField::Email => "you@example.com",
            FormField::Phone => "+91 98xxxx",
            _ => "",
        }
    }

    fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Raw text typed into the form. The draft holds the parsed values.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInputs {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub amount: String,
}

impl FormInputs {
    fn from_form(form: &ApplicationForm) -> Self {
        let draft = form.draft();
        Self {
            full_name: draft.full_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            amount: format!("{}", draft.requested_amount),
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub quote: QuoteParameters,
    pub slider: Slider,
    pub form: ApplicationForm,
    pub inputs: FormInputs,
    pub focus: FormField,
    pub faq_selected: usize,
    pub faq_open: [bool; FAQS.len()],
    pub currency: CurrencyFormat,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    pub fn new(config: &Config) -> Self {
        let form = ApplicationForm::new();
        Self {
            screen: Screen::Calculator,
            quote: config.quote(),
            slider: Slider::Amount,
            inputs: FormInputs::from_form(&form),
            form,
            focus: FormField::FullName,
            faq_selected: 0,
            faq_open: [false; FAQS.len()],
            currency: config.currency(),
        }
    }

    fn push_char(&mut self, c: char) {
        let update = match self.focus {
            FormField::FullName => {
                self.inputs.full_name.push(c);
                FieldUpdate::FullName(self.inputs.full_name.clone())
            }
            FormField::Email => {
                self.inputs.email.push(c);
                FieldUpdate::Email(self.inputs.email.clone())
            }
            FormField::Phone => {
                self.inputs.phone.push(c);
                FieldUpdate::Phone(self.inputs.phone.clone())
            }
            FormField::Amount => {
                let accepted = c.is_ascii_digit() || (c == '.' && !self.inputs.amount.contains('.'));
                if !accepted {
                    return;
                }
                self.inputs.amount.push(c);
                FieldUpdate::RequestedAmount(parse_amount(&self.inputs.amount))
            }
            FormField::Purpose => return,
        };
        self.form.update_field(update);
    }

    fn pop_char(&mut self) {
        let update = match self.focus {
            FormField::FullName => {
                self.inputs.full_name.pop();
                FieldUpdate::FullName(self.inputs.full_name.clone())
            }
            FormField::Email => {
                self.inputs.email.pop();
                FieldUpdate::Email(self.inputs.email.clone())
            }
            FormField::Phone => {
                self.inputs.phone.pop();
                FieldUpdate::Phone(self.inputs.phone.clone())
            }
            FormField::Amount => {
                self.inputs.amount.pop();
                FieldUpdate::RequestedAmount(parse_amount(&self.inputs.amount))
            }
            FormField::Purpose => return,
        };
        self.form.update_field(update);
    }

    fn cycle_purpose(&mut self, forward: bool) {
        let current = self.form.draft().purpose;
        let purpose = if forward { current.next() } else { current.prev() };
        self.form.update_field(FieldUpdate::Purpose(purpose));
    }

    fn reset_form(&mut self) {
        self.form.reset();
        self.inputs = FormInputs::from_form(&self.form);
        self.focus = FormField::FullName;
    }
}

// Empty or unparsable text counts as zero so the amount rule rejects it.
fn parse_amount(raw: &str) -> f64 {
    raw.parse().unwrap_or(0.0)
}

/// Returns true when the app should exit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    match key.code {
        KeyCode::F(1) => {
            app.screen = Screen::Calculator;
            return false;
        }
        KeyCode::F(2) => {
            app.screen = Screen::Apply;
            return false;
        }
        KeyCode::F(3) => {
            app.screen = Screen::Faqs;
            return false;
        }
        _ => {}
    }

    match app.screen {
        Screen::Calculator => handle_calculator_input(app, key),
        Screen::Apply if app.form.is_submitted() => handle_confirmation_input(app, key),
        Screen::Apply => handle_form_input(app, key),
        Screen::Faqs => handle_faq_input(app, key),
    }
}

fn handle_calculator_input(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Tab => app.screen = app.screen.next(),
        KeyCode::BackTab => app.screen = app.screen.prev(),
        KeyCode::Up | KeyCode::Char('k') => app.slider = app.slider.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.slider = app.slider.next(),
        KeyCode::Left | KeyCode::Char('h') => app.quote.step(app.slider, -1),
        KeyCode::Right | KeyCode::Char('l') => app.quote.step(app.slider, 1),
        KeyCode::PageDown => app.quote.step(app.slider, -PAGE_STEPS),
        KeyCode::PageUp => app.quote.step(app.slider, PAGE_STEPS),
        KeyCode::Char('a') | KeyCode::Enter => app.screen = Screen::Apply,
        _ => {}
    }
    false
}

fn handle_form_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('r') {
            app.reset_form();
        }
        return false;
    }
    match key.code {
        KeyCode::Esc => app.screen = Screen::Calculator,
        KeyCode::Tab | KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.prev(),
        KeyCode::Enter => {
            app.form.submit();
        }
        KeyCode::Left if app.focus == FormField::Purpose => app.cycle_purpose(false),
        KeyCode::Right | KeyCode::Char(' ') if app.focus == FormField::Purpose => {
            app.cycle_purpose(true)
        }
        KeyCode::Char(c) => app.push_char(c),
        KeyCode::Backspace => app.pop_char(),
        _ => {}
    }
    false
}

fn handle_confirmation_input(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.form.edit_again();
            app.inputs = FormInputs::from_form(&app.form);
        }
        KeyCode::Esc => app.screen = Screen::Calculator,
        KeyCode::Tab => app.screen = app.screen.next(),
        KeyCode::BackTab => app.screen = app.screen.prev(),
        _ => {}
    }
    false
}

fn handle_faq_input(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Esc => app.screen = Screen::Calculator,
        KeyCode::Tab => app.screen = app.screen.next(),
        KeyCode::BackTab => app.screen = app.screen.prev(),
        KeyCode::Down | KeyCode::Char('j') => {
            if app.faq_selected + 1 < FAQS.len() {
                app.faq_selected += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.faq_selected = app.faq_selected.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.faq_open[app.faq_selected] = !app.faq_open[app.faq_selected];
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationOutcome, Purpose, ValidationError};

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn clear_amount(app: &mut App) {
        for _ in 0..app.inputs.amount.len() {
            press(app, KeyCode::Backspace);
        }
    }

    #[test]
    fn sliders_recompute_estimate() {
        let mut app = App::default();
        let before = app.quote.estimate().unwrap().monthly_payment;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.quote.principal(), 50_500);
        assert!(app.quote.estimate().unwrap().monthly_payment > before);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.slider, Slider::Term);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.quote.term_years(), 5);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.quote.annual_rate_percent(), 12.4);
    }

    #[test]
    fn navigation_between_screens() {
        let mut app = App::default();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Apply);
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.screen, Screen::Faqs);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Calculator);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn typing_q_in_form_does_not_quit() {
        let mut app = App::default();
        app.screen = Screen::Apply;
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.form.draft().full_name, "q");
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn full_submission_flow() {
        let mut app = App::default();
        app.screen = Screen::Apply;

        type_text(&mut app, "Jane");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "jane@x.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1234567890");
        press(&mut app, KeyCode::Tab);
        clear_amount(&mut app);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.form.outcome(),
            &ApplicationOutcome::Rejected(ValidationError::InvalidAmount)
        );

        type_text(&mut app, "50x000");
        assert_eq!(app.inputs.amount, "50000");
        assert_eq!(app.form.draft().requested_amount, 50_000.0);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.form.draft().purpose, Purpose::Home);

        press(&mut app, KeyCode::Enter);
        assert!(app.form.is_submitted());

        // read-only until reopened
        type_text(&mut app, "zz");
        assert_eq!(app.form.draft().full_name, "Jane");
        press(&mut app, KeyCode::Char('e'));
        assert!(!app.form.is_submitted());
        assert_eq!(app.inputs.full_name, "Jane");
    }

    #[test]
    fn amount_accepts_single_decimal_point() {
        let mut app = App::default();
        app.screen = Screen::Apply;
        app.focus = FormField::Amount;
        clear_amount(&mut app);
        type_text(&mut app, "12.5.0");
        assert_eq!(app.inputs.amount, "12.50");
        assert_eq!(app.form.draft().requested_amount, 12.5);
    }

    #[test]
    fn ctrl_r_resets_form() {
        let mut app = App::default();
        app.screen = Screen::Apply;
        type_text(&mut app, "Ja");
        press(&mut app, KeyCode::Enter);
        assert!(app.form.error().is_some());
        app.focus = FormField::Amount;
        press(&mut app, KeyCode::Backspace);

        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.form.error(), None);
        assert_eq!(app.inputs.full_name, "");
        assert_eq!(app.inputs.amount, "50000");
        assert_eq!(app.form.draft().requested_amount, 50_000.0);
        assert_eq!(app.focus, FormField::FullName);
    }

    #[test]
    fn faq_toggle() {
        let mut app = App::default();
        app.screen = Screen::Faqs;
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.faq_open, [false, true, false]);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.faq_selected, 2);
    }
}
