use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::game::GameState;

use super::braille::{BrailleCanvas, Rgb};
use super::overlay::{render_overlay, OverlayMessage};
use super::viewport::Viewport;

/// Draw the whole field into the frame, with an optional message on top
pub fn render_game(frame: &mut Frame, state: &GameState, overlay: Option<&OverlayMessage>) {
    let area = frame.area();

    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);
    let view = Viewport::new(&canvas, state.tuning.field_width, state.tuning.field_height);
    state.draw(&mut canvas, &view);

    render_canvas(frame, &canvas, area);

    if let Some(message) = overlay {
        render_overlay(frame, message, area);
    }
}

/// Blit a canvas into the frame row by row
fn render_canvas(frame: &mut Frame, canvas: &BrailleCanvas, area: Rect) {
    let paragraph = Paragraph::new(canvas_lines(canvas));
    frame.render_widget(paragraph, area);
}

/// One line per cell row; neighbouring cells with the same colors share a span
pub fn canvas_lines(canvas: &BrailleCanvas) -> Vec<Line<'static>> {
    (0..canvas.height())
        .map(|y| {
            let mut spans = Vec::new();
            let mut run = String::new();
            let mut run_colors: Option<(Rgb, Rgb)> = None;

            for x in 0..canvas.width() {
                let colors = canvas.cell_colors(x, y);
                if run_colors != Some(colors) {
                    if let Some((fg, bg)) = run_colors {
                        spans.push(styled(std::mem::take(&mut run), fg, bg));
                    }
                    run_colors = Some(colors);
                }
                run.push(canvas.to_char(x, y));
            }

            if let Some((fg, bg)) = run_colors {
                spans.push(styled(run, fg, bg));
            }
            Line::from(spans)
        })
        .collect()
}

fn styled(text: String, fg: Rgb, bg: Rgb) -> Span<'static> {
    Span::styled(text, Style::default().fg(fg.to_color()).bg(bg.to_color()))
}
