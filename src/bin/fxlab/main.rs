//! fxlab - terminal viewer for fx_lab effects
//!
//! Run with: cargo run -- [input.wav] [impulse_response.wav]
//!
//! Without an input file a two second demo tone is used. The impulse
//! response enables the reverb preset.

mod app;
mod playback;
mod ui;

use app::{App, Source};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let source = Source::load(args.first(), args.get(1))?;

    let mut terminal = ratatui::init();
    let result = App::new(source).run(&mut terminal);
    ratatui::restore();
    result
}
