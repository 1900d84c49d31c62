use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine, Points},
        Paragraph, Widget,
    },
};

use crate::App;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

const RIM_RADIUS: f64 = 0.97;
const TICK_RADIUS: f64 = 0.92;
const HOUR_TICK_INNER_RADIUS: f64 = 0.86;
const NUMERAL_RADIUS: f64 = 0.76;

fn split(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints(
            [
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(FOOTER_HEIGHT),
            ]
            .as_ref(),
        )
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Cells covered by the clock face for a given terminal area.
///
/// The face is twice as wide as it is tall so it looks round with the usual
/// 1:2 cell aspect; the input side maps mouse cells through this same rect.
/// Minute dots plus heavier strokes on every fifth mark, in canvas
/// coordinates (y up).
fn tick_marks() -> (Vec<(f64, f64)>, Vec<CanvasLine>) {
    let mut minor = Vec::with_capacity(48);
    let mut major = Vec::with_capacity(12);
    for i in 0..60u32 {
        let a = f64::from(i * 6).to_radians();
        let (sin, cos) = a.sin_cos();
        if i % 5 == 0 {
            major.push(CanvasLine {
                x1: HOUR_TICK_INNER_RADIUS * sin,
                y1: HOUR_TICK_INNER_RADIUS * cos,
                x2: TICK_RADIUS * sin,
                y2: TICK_RADIUS * cos,
                color: Color::White,
            });
        } else {
            minor.push((TICK_RADIUS * sin, TICK_RADIUS * cos));
        }
    }
    (minor, major)
}

pub fn clock_area(area: Rect) -> Rect {
    let (_, body, _) = split(area);
    let height = body.height.min(body.width / 2);
    let width = height * 2;
    Rect::new(
        body.x + (body.width - width) / 2,
        body.y + (body.height - height) / 2,
        width,
        height,
    )
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let practice = &self.practice;
        let widget = &practice.widget;

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);

        let (header, _, footer) = split(area);

        let mut title = vec![
            Span::styled("Set the clock to ", dim_style),
            Span::styled(practice.target().to_string(), bold_style),
        ];
        if practice.celebration.is_active() {
            let style = if practice.celebration.is_highlighted() {
                green_bold_style.add_modifier(Modifier::REVERSED)
            } else {
                green_bold_style
            };
            title.push(Span::raw("   "));
            title.push(Span::styled(practice.celebration.word, style));
        }
        Paragraph::new(vec![Line::default(), Line::from(title)])
            .alignment(Alignment::Center)
            .render(header, buf);

        let face = clock_area(area);
        if face.width > 0 && face.height > 0 {
            let rim_color = if widget.is_correct() {
                Color::Green
            } else {
                Color::White
            };
            let center = widget.center();
            let hour_tip = widget.hour_tip();
            let minute_tip = widget.minute_tip();
            let (minor_ticks, major_ticks) = tick_marks();

            Canvas::default()
                .marker(Marker::Braille)
                .x_bounds([-1.0, 1.0])
                .y_bounds([-1.0, 1.0])
                .paint(|ctx| {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: RIM_RADIUS,
                        color: rim_color,
                    });
                    ctx.draw(&Points {
                        coords: &minor_ticks,
                        color: Color::DarkGray,
                    });
                    for tick in &major_ticks {
                        ctx.draw(tick);
                    }
                    for n in 1..=12u32 {
                        let a = f64::from(n * 30).to_radians();
                        ctx.print(
                            NUMERAL_RADIUS * a.sin(),
                            NUMERAL_RADIUS * a.cos(),
                            n.to_string(),
                        );
                    }
                    ctx.layer();
                    // widget frame has y pointing down, the canvas has it up
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: hour_tip.x - center.x,
                        y2: center.y - hour_tip.y,
                        color: Color::Yellow,
                    });
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: minute_tip.x - center.x,
                        y2: center.y - minute_tip.y,
                        color: Color::Cyan,
                    });
                })
                .render(face, buf);
        }

        let mut status = vec![
            Span::styled("solved ", dim_style),
            Span::styled(practice.solved.to_string(), bold_style),
        ];
        if widget.is_locked() {
            status.push(Span::styled("  (locked)", dim_style));
        }
        let legend = Line::from(Span::styled(
            "drag a hand with the mouse / (n)ew time / (esc) quit",
            Style::default().add_modifier(Modifier::ITALIC),
        ));
        Paragraph::new(vec![Line::from(status), legend])
            .alignment(Alignment::Center)
            .render(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{App, Cli};
    use clap::Parser;
    use klok::config::Config;
    use klok::viewport::Viewport;

    fn create_test_app(time: &str) -> App {
        let cli = Cli::parse_from(["klok", "--time", time]);
        App::new(&cli, Config::default())
    }

    fn rendered(app: &App, area: Rect) -> String {
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_clock_area_is_twice_as_wide_as_tall() {
        let face = clock_area(Rect::new(0, 0, 80, 24));
        assert_eq!(face.width, face.height * 2);
        assert!(face.height > 0);
        // centered horizontally
        assert_eq!(face.x * 2 + face.width, 80);
    }

    #[test]
    fn test_clock_area_narrow_terminal() {
        let face = clock_area(Rect::new(0, 0, 20, 40));
        assert_eq!(face.width, 20);
        assert_eq!(face.height, 10);
    }

    #[test]
    fn test_clock_area_tiny_terminal() {
        let face = clock_area(Rect::new(0, 0, 1, 1));
        assert_eq!(face.width, 0);
    }

    #[test]
    fn test_render_shows_target_and_numerals() {
        let app = create_test_app("03:55");
        let out = rendered(&app, Rect::new(0, 0, 80, 30));
        assert!(out.contains("03:55"));
        assert!(out.contains("12"));
        assert!(out.contains("solved"));
    }

    #[test]
    fn test_render_rim_turns_green_when_solved() {
        let mut app = create_test_app("06:00");
        let area = Rect::new(0, 0, 80, 30);
        let face = clock_area(area);
        let viewport = Viewport::new(face);

        // press on the bottom row of the face: the hour hand jumps to 6
        let col = face.x + face.width / 2;
        let row = face.y + face.height - 1;
        let press = crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: col,
            row,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        app.practice.on_mouse(press, &viewport);
        assert!(app.practice.widget.is_correct());

        let mut buffer = Buffer::empty(area);
        (&app).render(area, &mut buffer);
        let has_green = buffer.content().iter().any(|c| c.fg == Color::Green);
        assert!(has_green);
    }

    #[test]
    fn test_five_minute_ticks_are_heavier() {
        let (minor, major) = tick_marks();
        assert_eq!(minor.len(), 48);
        assert_eq!(major.len(), 12);

        // the 12 o'clock stroke runs straight up from inside the dots to their radius
        let noon = &major[0];
        assert!(noon.x1.abs() < 1e-9 && noon.x2.abs() < 1e-9);
        assert!((noon.y1 - HOUR_TICK_INNER_RADIUS).abs() < 1e-9);
        assert!((noon.y2 - TICK_RADIUS).abs() < 1e-9);
        assert!(major.iter().all(|t| t.color == Color::White));

        // 3 o'clock is the fourth stroke and no dot sits on it
        assert!((major[3].x2 - TICK_RADIUS).abs() < 1e-9);
        assert!(minor
            .iter()
            .all(|&(x, y)| (x - TICK_RADIUS).abs() > 1e-6 || y.abs() > 1e-6));
    }

    #[test]
    fn test_render_small_areas_do_not_panic() {
        let app = create_test_app("10:10");
        for (w, h) in [(1, 1), (10, 5), (20, 8), (200, 60)] {
            let _ = rendered(&app, Rect::new(0, 0, w, h));
        }
    }
}
