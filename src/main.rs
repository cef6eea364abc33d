//! datepick-demo - a small form of date fields
//!
//! Exercises the date select, its picker dialog and the screen stack
//! against a real terminal.

mod cli;

use anyhow::Result;
use chrono::Weekday;
use crossterm::event::Event;
use log::info;
use std::time::Duration;

use datepick::action::Action;
use datepick::app::App;
use datepick::component::Component;
use datepick::components::{DatePicker, DateSelect};
use datepick::config::Config;
use datepick::logger;
use datepick::tui::Tui;

fn main() -> Result<()> {
    let args = cli::parse_args();

    let mut config = Config::load().unwrap_or_default();
    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(placeholder) = args.placeholder {
        config.placeholder = placeholder;
    }

    if let Some(dir) = Config::config_dir() {
        logger::init(&dir.join("datepick.log"), config.log_level_filter())?;
    }

    let selects = args
        .fields
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let date = if i == 0 { args.date } else { None };
            Ok(DateSelect::new(name.to_lowercase().as_str())
                .with_name(name.as_str())
                .with_format(&config.format)?
                .with_placeholder(config.placeholder.as_str())
                .with_date(date))
        })
        .collect::<datepick::Result<Vec<_>>>()?;

    let first_weekday = Weekday::from(config.first_weekday);
    let mut app = App::new(selects);
    app.mount(|| DatePicker::default().with_first_weekday(first_weekday))?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;
    app.set_viewport(tui.size()?);
    info!("datepick-demo started");

    let result = run_app(&mut tui, &mut app);

    tui.exit()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    for select in &app.selects {
        if let Some(date) = select.value() {
            println!("{}: {}", select.id(), date.format(select.format()));
        }
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            draw_result = app.draw(frame, frame.area());
        })?;
        draw_result?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // An action may produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
