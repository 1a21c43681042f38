//! Wizard screen rendering
//!
//! One function per presented screen. Every screen is a centered block of
//! lines; the question screen additionally shows the progress line and the
//! two answers with their remaining-candidate previews.

use crate::dataset::{Attribute, Record};
use crate::theme::Styles;
use crate::ui::ViewState;
use crate::wizard::AnswerPreview;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Outer block shared by all screens.
fn screen_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::border())
}

/// Render centered lines inside the shared block.
fn render_lines(f: &mut Frame<'_>, area: Rect, title: &'static str, lines: Vec<Line<'_>>) {
    // Vertically center by padding with empty lines.
    let inner_height = area.height.saturating_sub(2) as usize;
    let pad = inner_height.saturating_sub(lines.len()) / 2;
    let mut padded: Vec<Line<'_>> = std::iter::repeat_with(Line::default).take(pad).collect();
    padded.extend(lines);

    let paragraph = Paragraph::new(padded)
        .block(screen_block(title))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

pub fn render_welcome(f: &mut Frame<'_>, area: Rect, _view_state: &ViewState) {
    let lines = vec![
        Line::styled("Will you be my valentine?", Styles::question()),
        Line::default(),
        Line::styled("[y] Yes      [n] No", Styles::answer()),
    ];
    render_lines(f, area, " omnom ", lines);
}

pub fn render_intro(f: &mut Frame<'_>, area: Rect, _view_state: &ViewState) {
    let lines = vec![
        Line::styled("Let's decide where to eat, shall we?", Styles::question()),
        Line::default(),
        Line::styled("[enter] Start    [d] Random    [r] Reset", Styles::answer()),
    ];
    render_lines(f, area, " omnom ", lines);
}

#[allow(clippy::too_many_arguments)]
pub fn render_question(
    f: &mut Frame<'_>,
    area: Rect,
    index: usize,
    total: usize,
    attribute: Attribute,
    remaining: usize,
    answers: &[AnswerPreview; 2],
    choice_cursor: usize,
) {
    let mut lines = vec![
        Line::styled(
            format!("{} / {} — {} potential restaurant(s)", index + 1, total, remaining),
            Styles::progress(),
        ),
        Line::default(),
        Line::styled(attribute.prompt(), Styles::question()),
        Line::default(),
    ];

    for (slot, answer) in answers.iter().enumerate() {
        if answer.available() {
            let label = format!(
                "{} ({})",
                attribute.answer_label(answer.value),
                answer.count
            );
            let style = if slot == choice_cursor {
                Styles::answer_selected()
            } else {
                Styles::answer()
            };
            lines.push(Line::from(Span::styled(label, style)));
        } else {
            lines.push(Line::from(Span::styled(
                attribute.exhausted_message(answer.value),
                Styles::answer_exhausted(),
            )));
        }
        lines.push(Line::default());
    }

    render_lines(f, area, " omnom ", lines);
}

pub fn render_single_result(f: &mut Frame<'_>, area: Rect, record: &Record) {
    let lines = vec![
        Line::styled("Tonight we're eating at", Styles::progress()),
        Line::default(),
        Line::styled(record.name.clone(), Styles::result()),
    ];
    render_lines(f, area, " omnom · the verdict ", lines);
}

pub fn render_browse(f: &mut Frame<'_>, area: Rect, record: &Record, position: usize, total: usize) {
    let lines = vec![
        Line::styled(
            format!("{} of {} finalists", position + 1, total),
            Styles::progress(),
        ),
        Line::default(),
        Line::styled(record.name.clone(), Styles::result()),
        Line::default(),
        Line::styled("[←] previous    [→] next", Styles::answer()),
    ];
    render_lines(f, area, " omnom · finalists ", lines);
}

pub fn render_random_peek(f: &mut Frame<'_>, area: Rect, record: &Record) {
    let lines = vec![
        Line::styled("The dice say", Styles::progress()),
        Line::default(),
        Line::styled(record.name.clone(), Styles::result()),
        Line::default(),
        Line::styled("[d] roll again    [r] reset", Styles::answer()),
    ];
    render_lines(f, area, " omnom · feeling lucky ", lines);
}
