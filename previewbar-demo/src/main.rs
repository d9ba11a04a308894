mod canvas;
mod scene;
mod terminal;

use std::cell::Cell;
use std::fs::File;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use previewbar::{
    AnimatorKind, Color, Direction, HostLayout, LayoutNode, NodeKind, PreviewConfig,
    PreviewDelegate, Rect, ScrubListener, Scrubber, SeekBar, Timeline, VisibilityListener,
};
use simplelog::{Config, LevelFilter, WriteLogger};

use scene::Scene;
use terminal::Terminal;

const FRAME: Duration = Duration::from_millis(16);
/// Playback advances one second of media per tick of this length.
const PLAYBACK_STEP: Duration = Duration::from_millis(100);
const MEDIA_SECONDS: i32 = 600;

const BAR_ID: u32 = 1;
const PREVIEW_ID: u32 = 2;
const PREVIEW_WIDTH: f32 = 24.0;
const PREVIEW_HEIGHT: f32 = 8.0;
const BAR_ROW: f32 = PREVIEW_HEIGHT + 4.0;
const THUMB_OFFSET: i32 = 1;

const HELP: &str =
    "drag the bar | space play | a animator | m animation | r reduced motion | h auto-hide | q quit";

struct ScrubLog;

impl ScrubListener for ScrubLog {
    fn on_scrub_start(&self) {
        log::debug!("scrub start");
    }

    fn on_scrub_stop(&self) {
        log::debug!("scrub stop");
    }
}

fn host_layout(width: u16, height: u16) -> HostLayout {
    let (width, height) = (f32::from(width), f32::from(height));
    let bar = Rect::new(2.0, BAR_ROW, (width - 4.0).max(1.0), 1.0);
    let frame = Rect::new(0.0, BAR_ROW - PREVIEW_HEIGHT - 1.0, PREVIEW_WIDTH, PREVIEW_HEIGHT);

    HostLayout::new(Rect::from_size(width, height))
        .padding_right(1.0)
        .child(LayoutNode::new(BAR_ID, NodeKind::Bar, bar))
        .child(LayoutNode::new(PREVIEW_ID, NodeKind::PreviewFrame, frame))
}

fn build_seek_bar(width: u16, height: u16, config: &PreviewConfig) -> io::Result<SeekBar> {
    let host = host_layout(width, height);
    let mut delegate = PreviewDelegate::with_config(Timeline::new(), config);
    delegate
        .attach_from_layout(&host, PREVIEW_ID, 0.0)
        .map_err(io::Error::other)?;
    let bar = host.find_bar().map_err(io::Error::other)?.bounds;

    Ok(SeekBar::new(bar, MEDIA_SECONDS, THUMB_OFFSET, delegate)
        .with_color(Color::oklch(0.7, 0.18, 25.0)))
}

fn resize(bar: &mut SeekBar, width: u16, height: u16) -> io::Result<()> {
    let host = host_layout(width, height);
    let layout = host
        .preview_layout(0.0, Direction::Ltr)
        .map_err(io::Error::other)?;
    bar.set_bounds(layout.bar);
    bar.delegate_mut().set_layout(layout);
    Ok(())
}

fn main() -> io::Result<()> {
    let log_file = File::create("previewbar-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .map_err(io::Error::other)?;

    let mut term = Terminal::new()?;
    let (width, height) = term.size()?;

    let mut animator = AnimatorKind::morph();
    let config = PreviewConfig::new().animator(animator);
    let mut bar = build_seek_bar(width, height, &config)?;

    let previewed = Rc::new(Cell::new(0_i64));
    let sink = previewed.clone();
    let visibility: Rc<dyn VisibilityListener> =
        Rc::new(|showing: bool| log::info!("preview showing: {}", showing));
    {
        let delegate = bar.delegate_mut();
        delegate.set_preview_loader(Some(Box::new(move |position: i64, _max: i64| {
            sink.set(position);
        })));
        delegate.add_visibility_listener(visibility);
        delegate.add_scrub_listener(Rc::new(ScrubLog));
    }

    let mut reduced_motion = false;
    let mut playing = false;
    let mut play_clock = Duration::ZERO;
    let mut last = Instant::now();

    loop {
        let (width, height) = term.size()?;
        let status = status_line(&bar, animator, reduced_motion, playing);
        let scene = Scene {
            bar: &bar,
            previewed: previewed.get(),
            help: HELP,
            status: &status,
        };
        term.draw(&scene.render(width, height))?;

        let timeout = if playing {
            Some(FRAME)
        } else {
            bar.delegate()
                .engine()
                .next_completion()
                .map(|left| left.clamp(Duration::from_millis(1), FRAME))
        };

        let events = term.poll(timeout)?;

        // Advance what ran while waiting before input starts anything new.
        let now = Instant::now();
        let dt = now - last;
        last = now;

        if playing && !bar.is_dragging() {
            play_clock += dt;
            while play_clock >= PLAYBACK_STEP {
                play_clock -= PLAYBACK_STEP;
                if bar.progress() >= bar.max() {
                    playing = false;
                    break;
                }
                bar.set_progress(bar.progress() + 1);
            }
        }
        bar.tick(dt);

        for event in events {
            match event {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                }) => match code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') => playing = !playing,
                    KeyCode::Char('a') => {
                        animator = match animator {
                            AnimatorKind::Fade { .. } => AnimatorKind::morph(),
                            AnimatorKind::Morph { .. } => AnimatorKind::fade(),
                        };
                        bar.delegate_mut().set_animator(animator.build());
                    }
                    KeyCode::Char('m') => {
                        let delegate = bar.delegate_mut();
                        let enabled = !delegate.is_animation_enabled();
                        delegate.set_animation_enabled(enabled);
                    }
                    KeyCode::Char('r') => {
                        reduced_motion = !reduced_motion;
                        bar.delegate_mut()
                            .engine_mut()
                            .set_reduced_motion(reduced_motion);
                    }
                    KeyCode::Char('h') => {
                        // Without auto-hide the preview stays pinned.
                        let auto_hide = !bar.delegate().is_auto_hide();
                        bar.delegate_mut().set_auto_hide(auto_hide);
                        if !auto_hide {
                            bar.delegate_mut().show();
                        } else if !bar.is_dragging() {
                            bar.delegate_mut().hide();
                        }
                    }
                    _ => {}
                },
                Event::Mouse(MouseEvent {
                    kind, column, row, ..
                }) => {
                    let (x, y) = (f32::from(column) + 0.5, f32::from(row) + 0.5);
                    match kind {
                        MouseEventKind::Down(MouseButton::Left) => {
                            bar.pointer_down(x, y);
                        }
                        MouseEventKind::Drag(MouseButton::Left) => bar.pointer_move(x),
                        MouseEventKind::Up(MouseButton::Left) => {
                            if let Some(position) = bar.pointer_up() {
                                log::info!("seek to {}", position);
                            }
                        }
                        _ => {}
                    }
                }
                Event::Resize(width, height) => resize(&mut bar, width, height)?,
                _ => {}
            }
        }
    }
}

fn status_line(
    bar: &SeekBar,
    animator: AnimatorKind,
    reduced_motion: bool,
    playing: bool,
) -> String {
    let delegate = bar.delegate();
    let animator = match animator {
        AnimatorKind::Fade { .. } => "fade",
        AnimatorKind::Morph { .. } => "morph",
    };
    format!(
        "{} | animator: {} | animation: {} | reduced motion: {} | auto-hide: {} | {:?}",
        if playing { "playing" } else { "paused" },
        animator,
        on_off(delegate.is_animation_enabled()),
        on_off(reduced_motion),
        on_off(delegate.is_auto_hide()),
        delegate.phase(),
    )
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
