//! # Weldomatic CLI Application
//!
//! Terminal front end for the weld group calculator. Prompts for a standard
//! weld profile and its dimensions, then prints the section properties as a
//! table followed by JSON.
//!
//! Set `WELD_SETTINGS` to a JSON settings file to override defaults, and
//! `RUST_LOG` (e.g. `RUST_LOG=weld_core=debug`) to see calculation logs on
//! stderr.

use std::io::{self, BufRead, Write};

use tracing::warn;
use tracing_subscriber::EnvFilter;
use weld_core::profiles;
use weld_core::{CalcSettings, WeldError, WeldGroup, WeldResult, WeldType};

const PROFILES: [&str; 7] = [
    "single",
    "parallel",
    "angle",
    "rectangle",
    "tee",
    "partial_i",
    "circle",
];

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    read_line(prompt).unwrap_or_else(|| default.to_string())
}

fn load_settings() -> CalcSettings {
    let Ok(path) = std::env::var("WELD_SETTINGS") else {
        return CalcSettings::default();
    };

    let loaded = std::fs::read_to_string(&path)
        .map_err(|e| WeldError::invalid_input("WELD_SETTINGS", path.clone(), e.to_string()))
        .and_then(|json| CalcSettings::from_json(&json));

    match loaded {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %path, error = %e, "could not load settings, using defaults");
            CalcSettings::default()
        }
    }
}

fn build_profile(
    kind: &str,
    size: f64,
    weld_type: WeldType,
    settings: &CalcSettings,
) -> WeldResult<WeldGroup> {
    let name = format!("{} weld", kind);
    match kind {
        "single" => {
            let h = prompt_f64("Height [5.0]: ", 5.0);
            profiles::single(&name, h, size, weld_type)
        }
        "parallel" | "angle" | "rectangle" => {
            let b = prompt_f64("Base [5.0]: ", 5.0);
            let h = prompt_f64("Height [5.0]: ", 5.0);
            match kind {
                "parallel" => profiles::parallel(&name, b, h, size, weld_type),
                "angle" => profiles::angle(&name, b, h, size, weld_type),
                _ => profiles::rectangle(&name, b, h, size, weld_type),
            }
        }
        "tee" | "partial_i" => {
            let flange = prompt_f64("Flange width B [3.0]: ", 3.0);
            let depth = prompt_f64("Depth H [5.0]: ", 5.0);
            let gap = prompt_f64("Web gap S [0.25]: ", 0.25);
            let t = prompt_f64("Flange thickness t [0.25]: ", 0.25);
            if kind == "tee" {
                profiles::tee(&name, flange, depth, gap, t, size, weld_type)
            } else {
                profiles::partial_i(&name, flange, depth, gap, t, size, weld_type)
            }
        }
        "circle" => {
            let r = prompt_f64("Radius [5.0]: ", 5.0);
            profiles::circle(&name, r, settings.circle_chords, size, weld_type)
        }
        other => Err(WeldError::invalid_input(
            "profile",
            other,
            format!("Expected one of: {}", PROFILES.join(", ")),
        )),
    }
}

fn run(settings: &CalcSettings) -> WeldResult<()> {
    let kind = prompt_string(
        &format!("Profile ({}) [rectangle]: ", PROFILES.join("/")),
        "rectangle",
    );
    let size = prompt_f64(
        &format!("Weld size [{}]: ", settings.default_size),
        settings.default_size,
    );
    let weld_types: Vec<&str> = WeldType::ALL.iter().map(WeldType::as_str).collect();
    let weld_type: WeldType = prompt_string(
        &format!(
            "Weld type ({}) [{}]: ",
            weld_types.join("/"),
            settings.default_weld_type
        ),
        settings.default_weld_type.as_str(),
    )
    .parse()?;

    let group = build_profile(&kind.to_ascii_lowercase(), size, weld_type, settings)?;
    let props = group.properties()?;

    println!();
    println!("═══════════════════════════════════════");
    println!("  WELD GROUP PROPERTIES: {}", group.name());
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Segments:  {}", group.segment_count());
    println!("  Size:      {} ({}, throat {:.4})", size, weld_type, weld_type.throat(size));
    println!();
    println!("Properties:");
    println!("  Length:    {:.4}", props.length);
    println!("  Area:      {:.4}", props.area);
    println!(
        "  Centroid:  ({:.4}, {:.4}, {:.4})",
        props.centroid[0], props.centroid[1], props.centroid[2]
    );
    println!("  Ixx:       {:.4}", props.ixx);
    println!("  Iyy:       {:.4}", props.iyy);
    println!("  Izz (J):   {:.4}", props.izz);
    println!();
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for LLM/API use):");
    println!("{}", serde_json::to_string_pretty(&props)?);
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    println!("Weldomatic CLI - Weld Group Calculator");
    println!("======================================");
    println!();

    let settings = load_settings();

    if let Err(e) = run(&settings) {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}
