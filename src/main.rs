//! Athena CLI
//!
//! Usage:
//!   athena --file match.json            # Analyze a match file
//!   athena --file match.json --json     # Full JSON report
//!   athena --file match.json --verbose  # Per-ball timeline
//!   athena --text commentary.txt        # Analyze pasted commentary lines
//!   athena --serve                      # HTTP API server

use clap::Parser;
use serde::Deserialize;

use athena::core::{normalizer, run_server, AnalysisStore, MatchAnalyzer};
use athena::types::{BallEvent, MatchContext, MatchReport, PhaseLabel};
use athena::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "athena",
    version = VERSION,
    about = "Athena - emotional analytics for ball-by-ball cricket commentary",
    long_about = "Athena turns an ordered list of ball events into an emotional\n\
                  timeline: per-ball sentiment, pressure, momentum, smoothed E(t)\n\
                  for both sides, collapse risk, batter cards, key moments,\n\
                  phases and an over heatmap.\n\n\
                  Modes:\n  \
                  --file   Analyze a match JSON file\n  \
                  --text   Analyze a plain-text commentary file (one ball per line)\n  \
                  --serve  HTTP API server mode"
)]
struct Args {
    /// Match JSON file with match_info and commentary
    #[arg(short, long)]
    file: Option<String>,

    /// Plain-text commentary file, one ball per line
    #[arg(short, long)]
    text: Option<String>,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Print the full per-ball timeline
    #[arg(long)]
    verbose: bool,

    /// Override the chase target
    #[arg(long)]
    target: Option<u32>,

    /// Override the expected innings length in balls
    #[arg(long)]
    total_balls: Option<usize>,

    /// Cached reports kept by the server (default: 64)
    #[arg(long, default_value_t = 64)]
    store_capacity: usize,
}

/// Match file layout: the shape produced by the ingestion adapters
#[derive(Debug, Deserialize)]
struct MatchFile {
    #[serde(default)]
    match_info: MatchContext,
    commentary: Vec<BallEvent>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.serve {
        run_serve(&args).await;
    } else if let Some(ref path) = args.file {
        run_file(path, &args);
    } else if let Some(ref path) = args.text {
        run_text(path, &args);
    } else {
        eprintln!("Nothing to do: pass --file, --text or --serve (see --help)");
        std::process::exit(2);
    }
}

/// Analyze a structured match file
fn run_file(path: &str, args: &Args) {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => fail(&format!("could not read {}: {}", path, e)),
    };
    let parsed: MatchFile = match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(e) => fail(&format!("could not parse {}: {}", path, e)),
    };

    analyze_and_print(parsed.commentary, parsed.match_info, args);
}

/// Analyze a plain-text commentary file, one ball per line
fn run_text(path: &str, args: &Args) {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => fail(&format!("could not read {}: {}", path, e)),
    };

    let events = normalizer::events_from_text(&raw);
    analyze_and_print(events, MatchContext::default(), args);
}

fn analyze_and_print(events: Vec<BallEvent>, mut context: MatchContext, args: &Args) {
    if let Some(target) = args.target {
        context.target = target;
    }
    if let Some(total_balls) = args.total_balls {
        context.total_balls = total_balls;
    }

    let analyzer = MatchAnalyzer::with_default_oracle();
    let report = match analyzer.analyze(&events, &context) {
        Ok(report) => report,
        Err(e) => fail(&e.to_string()),
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&format!("could not serialize report: {}", e)),
        }
    } else {
        print_report(&report, args);
    }
}

fn fail(message: &str) -> ! {
    eprintln!("error: {}", message);
    std::process::exit(1);
}

/// Print the report summary for a terminal
fn print_report(report: &MatchReport, args: &Args) {
    let no_color = args.no_color;
    let state = &report.current_state;
    let summary = &report.summary;

    print_header(no_color);

    println!(
        "  Balls: {} | Runs: {} | Wickets: {} | Momentum shifts: {}",
        summary.total_balls, summary.runs_scored, summary.wickets_fallen, summary.momentum_shifts
    );
    println!(
        "  E(t) batting  avg {:>5.1}  peak {:>5.1}",
        summary.avg_emotion, summary.peak_emotion
    );
    println!(
        "  E(t) bowling  avg {:>5.1}  peak {:>5.1}",
        summary.avg_emotion_bowling, summary.peak_emotion_bowling
    );
    println!("  Avg pressure  {:>5.3}", summary.avg_pressure);
    println!();

    let phase = state.phase;
    if no_color {
        println!("  Now: [{}] E(t)={:.1}", phase, state.emotion_score);
    } else {
        println!(
            "  Now: {}[{}]{} E(t)={:.1}",
            phase.color_code(),
            phase,
            PhaseLabel::color_reset(),
            state.emotion_score
        );
    }
    println!(
        "  Collapse risk: {:.1}% ({:?})",
        state.collapse_risk.percentage, state.collapse_risk.level
    );
    for reason in &state.collapse_risk.reasons {
        println!("    - {}", reason);
    }
    println!();

    if !state.batter_cards.is_empty() {
        println!("  At the crease:");
        for card in &state.batter_cards {
            println!(
                "    {} {}({}) SR {:.1} | 4s {} 6s {} | {:?} / {:?}",
                card.name,
                card.runs,
                card.balls,
                card.strike_rate,
                card.fours,
                card.sixes,
                card.clutch_rating,
                card.emotional_profile
            );
        }
        println!();
    }

    if !report.key_moments.is_empty() {
        println!("  Key moments:");
        for moment in report.key_moments.iter().take(5) {
            println!(
                "    #{:<3} E(t)={:>5.1} [{:?}] {}",
                moment.ball_number,
                moment.emotion_score,
                moment.event_type,
                clip(&moment.description, 60)
            );
        }
        println!();
    }

    if args.verbose {
        println!("  Timeline:");
        for point in &report.ball_by_ball {
            let line = format!(
                "    {:>3}. E(t)={:>6.2} bowl={:>6.2} p={:.3} m={:>7.4} | {}",
                point.ball_number,
                point.emotion_score,
                point.emotion_score_bowling,
                point.pressure,
                point.momentum,
                clip(&point.text, 48)
            );
            if no_color {
                println!("{}", line);
            } else {
                println!(
                    "{}{}{}",
                    point.phase.color_code(),
                    line,
                    PhaseLabel::color_reset()
                );
            }
        }
    }
}

fn print_header(no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Athena v{} - Match Analysis", VERSION);
        println!("========================================");
    } else {
        println!("\x1b[1m========================================\x1b[0m");
        println!("\x1b[1m  Athena v{} - Match Analysis\x1b[0m", VERSION);
        println!("\x1b[1m========================================\x1b[0m");
    }
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "athena=info".into()),
        )
        .init();

    println!();
    println!("========================================");
    println!("  Athena API Server v{}", VERSION);
    println!("========================================");
    println!();

    let analyzer = MatchAnalyzer::with_default_oracle();
    let store = AnalysisStore::new(args.store_capacity);

    if let Err(e) = run_server(&args.addr, analyzer, store).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
