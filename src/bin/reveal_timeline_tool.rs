use animated_charts::api::{ChartDemoState, DemoConfig, DemoSnapshot};
use animated_charts::core::ChartKind;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const TIMELINE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug)]
struct CliArgs {
    kind: ChartKind,
    triggers: u32,
    trigger_interval_ms: u64,
    step_ms: u64,
    until_ms: u64,
    output: PathBuf,
    config_path: Option<PathBuf>,
    png_path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct TimelineFile {
    schema_version: u32,
    kind: ChartKind,
    config: DemoConfig,
    events: Vec<TimelineEvent>,
    frames: Vec<DemoSnapshot>,
}

#[derive(Debug, Serialize)]
struct TimelineEvent {
    at_ms: u64,
    action: &'static str,
}

fn main() {
    let _ = animated_charts::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            DemoConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => DemoConfig::default(),
    };
    if args.step_ms == 0 {
        return Err("--step-ms must be > 0".to_owned());
    }

    let mut state = ChartDemoState::new(config).map_err(|err| err.to_string())?;
    let mut events = Vec::new();
    let mut frames = Vec::new();

    state.on_appear();
    events.push(TimelineEvent {
        at_ms: 0,
        action: "appear",
    });
    if state.select_kind(args.kind) {
        events.push(TimelineEvent {
            at_ms: 0,
            action: "select_kind",
        });
    }

    let trigger_times = trigger_times(args.triggers, args.trigger_interval_ms)?;
    let mut next_trigger = 0usize;

    let mut at_ms = 0u64;
    loop {
        while next_trigger < trigger_times.len() && trigger_times[next_trigger] <= at_ms {
            state.advance_to(Duration::from_millis(trigger_times[next_trigger]));
            state.trigger();
            events.push(TimelineEvent {
                at_ms: trigger_times[next_trigger],
                action: "trigger",
            });
            next_trigger += 1;
        }
        state.advance_to(Duration::from_millis(at_ms));
        frames.push(state.snapshot());
        if at_ms >= args.until_ms {
            break;
        }
        at_ms = at_ms.saturating_add(args.step_ms).min(args.until_ms);
    }

    let timeline = TimelineFile {
        schema_version: TIMELINE_SCHEMA_VERSION,
        kind: state.kind(),
        config,
        events,
        frames,
    };
    let payload = serde_json::to_string_pretty(&timeline)
        .map_err(|err| format!("failed to serialize timeline: {err}"))?;
    fs::write(&args.output, payload)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))?;
    println!(
        "wrote {} frames to {}",
        timeline.frames.len(),
        args.output.display()
    );

    if let Some(path) = &args.png_path {
        write_png(&state, path)?;
    }
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn write_png(state: &ChartDemoState, path: &std::path::Path) -> Result<(), String> {
    use animated_charts::api::build_frame;
    use animated_charts::render::{CairoRenderer, Renderer};

    let (width, height) = state
        .config()
        .viewport
        .surface_size()
        .map_err(|err| err.to_string())?;
    let mut renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    let frame = build_frame(state).map_err(|err| err.to_string())?;
    renderer.render(&frame).map_err(|err| err.to_string())?;
    renderer.write_png(path).map_err(|err| err.to_string())?;
    println!("wrote final frame to {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(_state: &ChartDemoState, _path: &std::path::Path) -> Result<(), String> {
    Err("--png requires feature `cairo-backend`".to_owned())
}

fn trigger_times(triggers: u32, interval_ms: u64) -> Result<Vec<u64>, String> {
    (1..=u64::from(triggers))
        .map(|index| {
            index.checked_mul(interval_ms).ok_or_else(|| {
                format!("--triggers {triggers} x --trigger-interval-ms {interval_ms} overflows")
            })
        })
        .collect()
}

fn parse_args() -> Result<CliArgs, String> {
    let mut kind = ChartKind::Bar;
    let mut triggers = 0u32;
    let mut trigger_interval_ms = 400u64;
    let mut step_ms = 25u64;
    let mut until_ms = 1_000u64;
    let mut output: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut png_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--kind" => {
                let value = value_for("--kind")?;
                kind = ChartKind::from_label(&value)
                    .ok_or_else(|| format!("unknown chart kind `{value}`"))?;
            }
            "--triggers" => triggers = parse_number(&value_for("--triggers")?, "--triggers")?,
            "--trigger-interval-ms" => {
                trigger_interval_ms = parse_number(
                    &value_for("--trigger-interval-ms")?,
                    "--trigger-interval-ms",
                )?;
            }
            "--step-ms" => step_ms = parse_number(&value_for("--step-ms")?, "--step-ms")?,
            "--until-ms" => until_ms = parse_number(&value_for("--until-ms")?, "--until-ms")?,
            "--output" => output = Some(PathBuf::from(value_for("--output")?)),
            "--config" => config_path = Some(PathBuf::from(value_for("--config")?)),
            "--png" => png_path = Some(PathBuf::from(value_for("--png")?)),
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let output = output.ok_or_else(|| format!("missing --output\n\n{}", usage_message()))?;
    Ok(CliArgs {
        kind,
        triggers,
        trigger_interval_ms,
        step_ms,
        until_ms,
        output,
        config_path,
        png_path,
    })
}

fn parse_number<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid value `{raw}` for {flag}"))
}

fn usage_message() -> String {
    [
        "usage: reveal_timeline_tool --output <path> [options]",
        "",
        "options:",
        "  --kind <bar|line|pie>         chart kind to select after appearing (default: bar)",
        "  --triggers <n>                number of trigger presses (default: 0)",
        "  --trigger-interval-ms <ms>    spacing between trigger presses (default: 400)",
        "  --step-ms <ms>                snapshot interval (default: 25)",
        "  --until-ms <ms>               last snapshot time (default: 1000)",
        "  --config <path>               demo config json",
        "  --png <path>                  write the final frame (requires cairo-backend)",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::trigger_times;

    #[test]
    fn trigger_times_are_spaced_by_interval() {
        assert_eq!(trigger_times(3, 400).expect("fits"), vec![400, 800, 1_200]);
        assert!(trigger_times(0, 400).expect("empty").is_empty());
    }

    #[test]
    fn overflowing_trigger_schedule_is_an_argument_error() {
        let err = trigger_times(2, u64::MAX).expect_err("overflow");
        assert!(err.contains("overflows"));
    }
}
