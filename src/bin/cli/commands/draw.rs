use anyhow::Result;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    count: usize,
    title: Option<&str>,
    flipped: bool,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    for i in 0..count {
        // An explicit title only names the first drawn card
        let card_title = if i == 0 { title } else { None };
        app.add_card(card_title)?;
    }

    if flipped {
        app.flip_all();
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(app.store.all())?);
        }
        OutputFormat::Plain => {
            for (idx, card) in app.store.all().iter().enumerate() {
                println!("{}", terminal::render_card(idx + 1, card, use_color));
            }
            println!("\n{}", terminal::render_stats(&app.stats()));
        }
    }

    Ok(())
}
