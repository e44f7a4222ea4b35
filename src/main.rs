//! Headless playback of the typing indicator.
//!
//! Usage: `dotwave [preset.toml]`. Plays a few seconds of the wave on a
//! simulated 60 Hz event loop and logs one line per sampled frame.

use std::path::Path;

use dotwave::animation::{AnimatorConfig, DotRenderState, DotWaveAnimator};
use dotwave::cell::{
    AvatarHorizontal, AvatarPosition, AvatarVertical, ItemPosition,
    LayoutAttributes, MessageList, SolidColor, TypingIndicatorCell,
};
use dotwave::geometry::{Color, EdgeInsets, Rect};
use dotwave::options::IndicatorOptions;
use dotwave::util::clock::ManualClock;
use dotwave::DotwaveError;
use web_time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);
const FRAMES: u32 = 150;
const LOG_EVERY: u32 = 5;
const LEVELS: [char; 8] = ['▇', '▆', '▅', '▄', '▃', '▂', '▁', ' '];

fn load_options(arg: Option<String>) -> Result<IndicatorOptions, DotwaveError> {
    match arg {
        Some(path) => {
            let options = IndicatorOptions::load(Path::new(&path))?;
            log::info!("Loaded preset '{path}'");
            Ok(options)
        }
        None => Ok(IndicatorOptions::default()),
    }
}

fn glyph(state: &DotRenderState, travel: f32) -> char {
    if state.opacity < 0.6 {
        return '·';
    }
    let t = if travel > 0.0 {
        (state.frame.origin.y / travel).clamp(0.0, 1.0)
    } else {
        0.0
    };
    LEVELS[((t * (LEVELS.len() - 1) as f32).round()) as usize]
}

fn run(options: &IndicatorOptions) -> Result<(), DotwaveError> {
    let clock = ManualClock::new();
    let config = AnimatorConfig::from(options);
    let indicator = DotWaveAnimator::with_config(Rect::ZERO, config, clock.clone());
    let mut cell = TypingIndicatorCell::with_indicator(indicator);

    let list = MessageList::with_display_policy(SolidColor(Color::LIGHT_GRAY));
    cell.configure(&(), ItemPosition::new(0, 0), &list)?;
    cell.apply(&LayoutAttributes {
        avatar_position: AvatarPosition::new(
            AvatarHorizontal::CellLeading,
            AvatarVertical::MessageBottom,
        ),
        frame: Rect::from_xywh(0.0, 0.0, 320.0, 60.0),
        message_container_size: config.default_frame_size(),
        message_container_padding: EdgeInsets::new(4.0, 8.0, 4.0, 8.0),
        ..LayoutAttributes::default()
    })?;

    log::info!(
        "container {:?}, {} dots of {}pt, {}pt apart, {:?} stagger",
        cell.container().frame(),
        cell.indicator().dots().len(),
        cell.indicator().dot_size(),
        cell.indicator().spacing(),
        cell.indicator().delay_per_dot()
    );

    cell.start_typing();
    for frame in 0..FRAMES {
        cell.indicator_mut().advance();
        if frame % LOG_EVERY == 0 {
            let row: String = cell
                .indicator()
                .render_states()
                .iter()
                .map(|s| glyph(s, config.bounce_offset))
                .collect();
            log::info!("{:>5}ms |{row}|", (FRAME * frame).as_millis());
        }
        clock.advance(FRAME);
    }
    cell.stop_typing();
    log::info!("stopped; {} attaches left pending", cell.indicator().pending_len());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match load_options(std::env::args().nth(1)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
