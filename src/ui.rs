use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, FormField, Screen};
use crate::application::CONSENT_NOTICE;
use crate::content;
use crate::quote::Slider;

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.size());

    render_header(f, app, chunks[0]);
    match app.screen {
        Screen::Calculator => render_calculator_screen(f, app, chunks[1]),
        Screen::Apply => render_apply_screen(f, app, chunks[1]),
        Screen::Faqs => render_faq_screen(f, app, chunks[1]),
    }
    render_help(f, app, chunks[2]);
}

fn title_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let selected = Screen::ALL
        .iter()
        .position(|s| *s == app.screen)
        .unwrap_or(0);
    let titles: Vec<Line> = Screen::ALL.iter().map(|s| Line::from(s.title())).collect();
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title(Span::styled(
                    format!("{} · {}", content::BRAND, content::TAGLINE),
                    title_style(),
                )),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.screen {
        Screen::Calculator => {
            "j/k or ↑/↓: select slider | h/l or ←/→: adjust | PgUp/PgDn: ×10 | a: apply | Tab: next section | q: quit"
        }
        Screen::Apply if app.form.is_submitted() => {
            "e: edit application | Esc: calculator | Tab: next section | q: quit"
        }
        Screen::Apply => {
            "Tab/↑/↓: move | ←/→: purpose | Enter: submit | Ctrl-R: reset | Esc: calculator | Ctrl-C: quit"
        }
        Screen::Faqs => "j/k or ↑/↓: select | Enter: expand | Tab: next section | q: quit",
    };
    let help = Paragraph::new(text)
        .style(dim())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

fn render_calculator_screen(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    let mut hero = vec![
        Line::from(Span::styled(content::HERO_TITLE, title_style())),
        Line::from(""),
        Line::from(content::HERO_BODY),
        Line::from(""),
    ];
    for (headline, detail) in content::HIGHLIGHTS {
        hero.push(Line::from(vec![
            Span::styled(format!("{:<12}", headline), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(detail, dim()),
        ]));
    }
    hero.push(Line::from(""));
    for (headline, detail) in content::FEATURES {
        hero.push(Line::from(Span::styled(headline, Style::default().add_modifier(Modifier::BOLD))));
        hero.push(Line::from(Span::styled(detail, dim())));
    }
    let hero = Paragraph::new(hero)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(hero, columns[0]);

    render_quick_estimate(f, app, columns[1]);
}

fn render_quick_estimate(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Quick estimate", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(inner);

    for (i, slider) in Slider::ALL.iter().enumerate() {
        let focused = *slider == app.slider;
        let marker = if focused { "▶ " } else { "  " };
        let style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{}{}", marker, slider.label())),
            )
            .gauge_style(style)
            .ratio(app.quote.ratio(*slider))
            .label(app.quote.display_value(*slider, &app.currency));
        f.render_widget(gauge, rows[i]);
    }

    let summary = match app.quote.estimate() {
        Ok(est) => vec![
            Line::from(Span::styled("Estimated monthly payment", dim())),
            Line::from(Span::styled(
                app.currency.money(est.monthly_payment),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "Total: {} over {} payments  (interest {})",
                app.currency.money(est.total_payable),
                est.num_payments,
                app.currency.money(est.total_interest())
            )),
        ],
        Err(err) => vec![Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        ))],
    };
    let summary = Paragraph::new(summary).block(Block::default().borders(Borders::TOP));
    f.render_widget(summary, rows[3]);
}

fn render_apply_screen(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(area);

    let form_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Start your application", title_style()));

    let lines = if let Some(confirmation) = app.form.confirmation() {
        vec![
            Line::from(Span::styled(
                "Application received",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(confirmation),
        ]
    } else {
        application_form_lines(app)
    };
    let form = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(form_block);
    f.render_widget(form, columns[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)].as_ref())
        .split(columns[1]);

    let why: Vec<Line> = content::WHY_CHOOSE_US
        .iter()
        .map(|item| Line::from(format!("• {}", item)))
        .collect();
    let why = Paragraph::new(why).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Why choose us"),
    );
    f.render_widget(why, side[0]);

    let example = match app.quote.repayment_example(&app.currency) {
        Ok(text) => text,
        Err(err) => err.to_string(),
    };
    let example = Paragraph::new(example)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Repayment example"),
        );
    f.render_widget(example, side[1]);
}

fn application_form_lines(app: &App) -> Vec<Line<'static>> {
    let draft = app.form.draft();
    let mut lines = Vec::new();

    for field in FormField::ALL {
        let focused = field == app.focus;
        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let raw = match field {
            FormField::FullName => app.inputs.full_name.clone(),
            FormField::Email => app.inputs.email.clone(),
            FormField::Phone => app.inputs.phone.clone(),
            FormField::Amount => app.inputs.amount.clone(),
            FormField::Purpose => format!("◀ {} ▶", draft.purpose.label()),
        };
        let value = if raw.is_empty() {
            Span::styled(field.placeholder().to_string(), dim())
        } else if focused && field != FormField::Purpose {
            Span::styled(format!("{}_", raw), Style::default().fg(Color::Yellow))
        } else {
            Span::raw(raw)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<18}", marker, field.label()), label_style),
            value,
        ]));
    }

    lines.push(Line::from(""));
    if let Some(err) = app.form.error() {
        lines.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("[Enter] Submit application", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::raw("[Ctrl-R] Reset"),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(CONSENT_NOTICE, dim())));
    lines
}

fn render_faq_screen(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(6)].as_ref())
        .split(area);

    let mut lines = Vec::new();
    for (i, faq) in content::FAQS.iter().enumerate() {
        let open = app.faq_open[i];
        let marker = if open { "▾" } else { "▸" };
        let style = if i == app.faq_selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", marker, faq.question),
            style,
        )));
        if open {
            lines.push(Line::from(Span::styled(format!("  {}", faq.answer), dim())));
        }
        lines.push(Line::from(""));
    }
    let faqs = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Frequently asked questions", title_style())),
    );
    f.render_widget(faqs, rows[0]);

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(content::BRAND, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(format!(
            "Support: {} | {}",
            content::SUPPORT_EMAIL,
            content::SUPPORT_PHONE
        )),
        Line::from(format!("Legal: {}", content::LEGAL)),
    ])
    .style(dim())
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FieldUpdate;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn calculator_shows_estimate() {
        let app = App::default();
        let screen = render(&app);
        assert!(screen.contains("Quick estimate"));
        assert!(screen.contains("Estimated monthly payment"));
        assert!(screen.contains("1,673"));
        assert!(screen.contains("60,217"));
        assert!(screen.contains("12.5%"));
    }

    #[test]
    fn apply_shows_error_then_confirmation() {
        let mut app = App::default();
        app.screen = Screen::Apply;
        app.form.submit();
        let screen = render(&app);
        assert!(screen.contains("Please fill in name, email and phone."));
        assert!(screen.contains("Repayment example"));

        app.form.update_field(FieldUpdate::FullName("Jane".into()));
        app.form.update_field(FieldUpdate::Email("jane@x.com".into()));
        app.form.update_field(FieldUpdate::Phone("1234567890".into()));
        app.form.submit();
        let screen = render(&app);
        assert!(screen.contains("Application received"));
        assert!(screen.contains("jane@x.com"));
    }

    #[test]
    fn faq_answers_hidden_until_opened() {
        let mut app = App::default();
        app.screen = Screen::Faqs;
        assert!(!render(&app).contains("Most applicants"));
        app.faq_open[0] = true;
        assert!(render(&app).contains("Most applicants"));
    }
}
