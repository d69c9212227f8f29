//! Rendering of the play field, input line and stats panel.

use crate::core::constants::{CELL_HEIGHT_UNITS, CELL_WIDTH_UNITS};
use crate::core::{ClockEvent, GameSession, RoundState, Scheduler};
use crate::entities::WordEntity;
use crate::particles::Particle;
use crate::ui::game_common::{
    create_game_layout, format_number_short, heading, render_centered_overlay,
    render_info_panel_frame, render_status_bar,
};
use crate::words::ColorTag;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Distance particles are drawn from their burst center, in logical units.
const PARTICLE_SPREAD: f64 = 30.0;

const TITLE: &str = " CYBER TYPER ";

/// Render the whole game screen.
pub fn render_game<R: Rng, S: Scheduler<ClockEvent>>(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession<R, S>,
) {
    let layout = create_game_layout(frame, area, TITLE, Color::Cyan);
    let round = session.round();

    if round.active {
        render_play_field(
            frame.buffer_mut(),
            layout.play_field,
            session.entities(),
            session.particles().as_slice(),
        );
    } else {
        render_idle_overlay(frame, layout.play_field, round);
        // Bursts from the final word keep fading over the overlay
        render_particles(
            frame.buffer_mut(),
            layout.play_field,
            session.particles().as_slice(),
        );
    }

    render_input_line(frame, layout.status_bar, round, session.input());
    render_info_panel(frame, layout.info_panel, round);
}

/// Gradient start color of a palette entry.
pub fn color_tag_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::PurplePink => Color::Rgb(168, 85, 247),
        ColorTag::CyanBlue => Color::Rgb(6, 182, 212),
        ColorTag::GreenCyan => Color::Rgb(74, 222, 128),
        ColorTag::PinkRose => Color::Rgb(236, 72, 153),
        ColorTag::AmberRed => Color::Rgb(245, 158, 11),
    }
}

/// Map a logical position into a cell of `area`, or `None` if off-field.
fn to_cell(area: Rect, x: f64, y: f64) -> Option<(u16, u16)> {
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let col = (x / CELL_WIDTH_UNITS) as u16;
    let row = (y / CELL_HEIGHT_UNITS) as u16;
    if col >= area.width || row >= area.height {
        return None;
    }
    Some((area.x + col, area.y + row))
}

fn render_play_field(buf: &mut Buffer, area: Rect, entities: &[WordEntity], particles: &[Particle]) {
    render_particles(buf, area, particles);
    for entity in entities {
        render_word(buf, area, entity);
    }
}

fn render_word(buf: &mut Buffer, area: Rect, entity: &WordEntity) {
    let Some((col, row)) = to_cell(area, entity.x, entity.y) else {
        return;
    };
    let label = format!(" {} ", entity.word);
    let room = (area.x + area.width).saturating_sub(col) as usize;
    let style = Style::default()
        .fg(Color::Black)
        .bg(color_tag_color(entity.color))
        .add_modifier(Modifier::BOLD);
    buf.set_stringn(col, row, label, room, style);
}

fn render_particles(buf: &mut Buffer, area: Rect, particles: &[Particle]) {
    for particle in particles {
        let x = particle.x + particle.angle.cos() * PARTICLE_SPREAD;
        let y = particle.y + particle.angle.sin() * PARTICLE_SPREAD;
        if let Some((col, row)) = to_cell(area, x, y) {
            let (r, g, b) = particle.rgb();
            buf.set_string(col, row, "•", Style::default().fg(Color::Rgb(r, g, b)));
        }
    }
}

/// Title screen before the first round, game-over screen after each one.
fn render_idle_overlay(frame: &mut Frame, area: Rect, round: &RoundState) {
    let played = round.time_remaining == 0;
    let mut lines = vec![heading("CYBER TYPER", Color::Magenta), Line::from("")];

    if played {
        lines.push(heading("GAME OVER", Color::Red));
        lines.push(Line::from(Span::styled(
            format!("Score: {}", round.score),
            Style::default().fg(Color::White),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("High Score: {}", round.high_score),
        Style::default().fg(Color::Cyan),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Type the falling words before they reach the bottom!",
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] START GAME",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));

    render_centered_overlay(frame, area, Color::Magenta, lines);
}

fn render_input_line(frame: &mut Frame, area: Rect, round: &RoundState, input: &str) {
    let status = if !round.active {
        Line::from(Span::styled("GAME OVER", Style::default().fg(Color::DarkGray)))
    } else if input.is_empty() {
        Line::from(Span::styled(
            "TYPE TO DESTROY",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::styled(
                input.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(Color::Cyan)),
        ])
    };

    let controls: &[(&str, &str)] = if round.active {
        &[("[Bksp]", "Erase"), ("[Ctrl+U]", "Clear"), ("[Esc]", "Quit")]
    } else {
        &[("[Enter]", "Start"), ("[Esc]", "Quit")]
    };

    render_status_bar(frame, area, status, controls);
}

fn render_info_panel(frame: &mut Frame, area: Rect, round: &RoundState) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let time_color = if round.active && round.time_remaining <= 10 {
        Color::Red
    } else {
        Color::LightRed
    };

    let stat = |label: &'static str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::DarkGray)),
            Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let lines = vec![
        stat(" Score: ", format_number_short(round.score), Color::Cyan),
        stat(" Best:  ", format_number_short(round.high_score), Color::Yellow),
        Line::from(""),
        stat(" Level: ", round.level().to_string(), Color::Magenta),
        stat(" Speed: ", format!("x{:.1}", round.difficulty), Color::Magenta),
        Line::from(""),
        stat(" Time:  ", format!("{}s", round.time_remaining), time_color),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FrameClock, GameConfig};
    use crate::entities::{EntityId, Viewport};
    use crate::ui::game_common::compute_game_layout;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, Terminal};

    type TestSession = GameSession<ChaCha8Rng, FrameClock<ClockEvent>>;

    fn session() -> TestSession {
        GameSession::with_parts(
            GameConfig::default(),
            ChaCha8Rng::seed_from_u64(3),
            FrameClock::new(),
        )
    }

    fn render(session: &TestSession) -> Buffer {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|f| {
                let area = f.size();
                render_game(f, area, session);
            })
            .expect("draw");
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                text.push_str(buf.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_idle_screen_shows_title_and_start() {
        let text = buffer_text(&render(&session()));
        assert!(text.contains("CYBER TYPER"));
        assert!(text.contains("START GAME"));
        assert!(text.contains("GAME OVER"), "input placeholder while idle");
    }

    #[test]
    fn test_active_screen_shows_placeholder_and_stats() {
        let mut s = session();
        s.start();
        let text = buffer_text(&render(&s));
        assert!(text.contains("TYPE TO DESTROY"));
        assert!(text.contains("Time:  60s"));
        assert!(text.contains("Level: 1"));
    }

    #[test]
    fn test_typed_input_rendered() {
        let mut s = session();
        s.start();
        s.set_input("hac");
        let text = buffer_text(&render(&s));
        assert!(text.contains("> HAC_"));
    }

    #[test]
    fn test_spawned_word_drawn_in_play_field() {
        let mut s = session();
        let layout = compute_game_layout(Rect::new(0, 0, 80, 24));
        s.set_viewport(Viewport::from_cells(
            layout.play_field.width,
            layout.play_field.height,
        ));
        s.start();
        // First spawn at 2000ms, then let it fall into view
        for _ in 0..250 {
            s.advance(16);
        }
        let word = s.entities().first().map(|e| e.word).expect("one word spawned");
        let text = buffer_text(&render(&s));
        assert!(text.contains(word), "{} should be on screen", word);
    }

    #[test]
    fn test_to_cell_bounds() {
        let area = Rect::new(1, 1, 10, 5);
        assert_eq!(to_cell(area, 0.0, 0.0), Some((1, 1)));
        assert_eq!(to_cell(area, 95.0, 99.0), Some((10, 5)));
        assert_eq!(to_cell(area, 0.0, -50.0), None);
        assert_eq!(to_cell(area, 100.0, 0.0), None);
        assert_eq!(to_cell(area, 0.0, 100.0), None);
    }

    #[test]
    fn test_word_clipped_at_right_edge() {
        let area = Rect::new(0, 0, 5, 2);
        let mut buf = Buffer::empty(area);
        let entity = WordEntity {
            id: EntityId(0),
            word: "QUANTUM",
            x: 20.0,
            y: 0.0,
            speed: 1.0,
            color: ColorTag::CyanBlue,
        };
        render_word(&mut buf, area, &entity);
        assert_eq!(buf.get(3, 0).symbol(), "Q");
        assert_eq!(buf.get(4, 0).symbol(), "U");
    }
}
