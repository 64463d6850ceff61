use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use eld_log_core::SheetConfig;
use eld_log_core::svg::render_svg;
use eld_log_core::text::render_text;
use eld_log_core::trip::{DaySheet, RouteSummary, parse_trip_plan, render_trip};

use crate::cli::{OutputFormat, RenderArgs};

pub fn run(args: &RenderArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            let data =
                fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
            SheetConfig::from_json(&data)
                .with_context(|| format!("loading config {}", path.display()))?
        }
        None => SheetConfig::default(),
    };
    if let Some(driver) = &args.driver {
        config.options.driver_name.clone_from(driver);
    }
    if args.dark {
        config.options.dark = true;
    }

    let data = fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let plan = parse_trip_plan(&data)
        .with_context(|| format!("parsing {}", args.input.display()))?;

    log::info!("route: {}", RouteSummary::from_route(&plan.route));
    if plan.daily_logs.is_empty() {
        log::warn!("response contains no daily logs");
    }

    let sheets = render_trip(&plan, &config.layout, &config.options);

    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut stdout = io::stdout().lock();
    for sheet in &sheets {
        let body = render_sheet(sheet, args.format, &config)?;
        match &args.out_dir {
            Some(dir) => {
                let path = dir.join(format!("day-{}.{}", sheet.day, args.format.extension()));
                fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
                log::info!("wrote {}", path.display());
            }
            None => {
                stdout.write_all(body.as_bytes())?;
                writeln!(stdout)?;
            }
        }
    }

    let failed = sheets.iter().filter(|s| !s.is_rendered()).count();
    if failed > 0 {
        log::error!("{failed} of {} days could not be rendered", sheets.len());
    }
    Ok(())
}

fn render_sheet(sheet: &DaySheet, format: OutputFormat, config: &SheetConfig) -> Result<String> {
    let layout = &config.layout;
    let body = match format {
        OutputFormat::Svg => render_svg(
            &sheet.commands,
            layout.width(),
            layout.height,
            config.options.dark,
        ),
        OutputFormat::Text => match &sheet.outcome {
            Ok(model) => render_text(model, layout.day_range_hours),
            Err(err) => format!("Day {}: log unavailable ({})\n", sheet.day, err.reason()),
        },
        OutputFormat::Json => match &sheet.outcome {
            Ok(model) => serde_json::to_string_pretty(model)?,
            Err(err) => serde_json::to_string_pretty(&serde_json::json!({
                "day": sheet.day,
                "error": err.to_string(),
            }))?,
        },
    };
    Ok(body)
}
