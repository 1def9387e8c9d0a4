use std::path::PathBuf;

use cadence::app::App;
use cadence::input;
use cadence::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();

    // Text comes from a file argument when given, otherwise from the
    // clipboard. Starting with nothing loaded is fine; the UI shows the
    // Ready placeholder until something arrives.
    if let Some(path) = std::env::args().nth(1) {
        let text = input::load_file(&PathBuf::from(path))?;
        app.load_text(&text);
    } else if let Ok(text) = input::clipboard::load() {
        app.load_text(&text);
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
