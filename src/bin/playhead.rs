use std::{
    ops::ControlFlow,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "playhead", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a timeline's frame duration and node count.
    Info(InfoArgs),
    /// Evaluate node visuals at a single frame, as JSON.
    Eval(EvalArgs),
    /// Play a timeline in real time, printing each advanced frame.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame to evaluate (may be negative).
    #[arg(long, allow_hyphen_values = true)]
    frame: i64,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Start frame (seek target before playback).
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    from: i64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Eval(args) => cmd_eval(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn read_timeline(path: &Path) -> anyhow::Result<playhead::Timeline> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("open timeline '{}'", path.display()))?;
    let timeline = playhead::Timeline::from_json(&s)?;
    timeline.validate()?;
    Ok(timeline)
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let timeline = read_timeline(&args.in_path)?;
    println!("fps:      {}", timeline.fps.as_f64());
    println!("nodes:    {}", timeline.nodes.len());
    println!("duration: {} frames", timeline.duration_in_frames());
    Ok(())
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let timeline = read_timeline(&args.in_path)?;
    let graph = playhead::Evaluator::eval_frame(&timeline, playhead::FrameIndex(args.frame))?;
    println!("{}", serde_json::to_string_pretty(&graph)?);
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let timeline = read_timeline(&args.in_path)?;

    let mut clock = playhead::FrameClock::new(playhead::ClockConfig {
        fps: timeline.fps,
        duration_in_frames: Some(timeline.duration_in_frames()),
        ..playhead::ClockConfig::default()
    })?;
    if args.from != 0 {
        clock.seek(playhead::FrameIndex(args.from));
        clock.play();
    }

    let outcome = playhead::driver::run(&mut clock, Duration::from_millis(1), |clock, frame| {
        match playhead::Evaluator::eval_frame(&timeline, frame) {
            Ok(graph) => {
                println!(
                    "frame {:>4}  t={:>7.1}ms  {} node(s) visible",
                    frame,
                    clock.current_ms(),
                    graph.nodes.len()
                );
                ControlFlow::Continue(())
            }
            Err(err) => {
                eprintln!("evaluation failed: {err}");
                ControlFlow::Break(())
            }
        }
    });

    eprintln!("playback finished: {outcome:?} at frame {}", clock.frame());
    Ok(())
}
