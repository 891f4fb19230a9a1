use clap::Parser;
use intentscope::events::EventRecord;
use intentscope::{domains, report, store, top};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "intentscope", version, about = "Intention-gate usage analytics")]
struct Cli {
    /// Event log files in JSON Lines format (`-` for stdin). May be repeated.
    #[arg(required = false)]
    input: Vec<String>,

    /// Print only a specific section: daily | hourly | top
    #[arg(long = "only")]
    only: Option<String>,

    /// Restrict the report to events on these domains (exact or subdomain match)
    #[arg(long = "domain")]
    domain: Vec<String>,

    /// Max intention clusters per domain in the top section
    #[arg(long = "limit", default_value_t = top::DEFAULT_LIMIT)]
    limit: usize,

    /// Ignore intentions submitted before this RFC3339 instant
    #[arg(long = "from")]
    from: Option<String>,
}

fn read_all_events(paths: &[String]) -> anyhow::Result<Vec<EventRecord>> {
    let mut out = Vec::new();
    for p in paths {
        if p == "-" {
            let stdin = io::stdin();
            out.extend(store::read_events(stdin.lock())?);
        } else {
            out.extend(store::load_events(p)?);
        }
    }
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let input_files = if cli.input.is_empty() {
        vec!["-".to_string()]
    } else {
        cli.input.clone()
    };
    let mut events = read_all_events(&input_files)?;

    if !cli.domain.is_empty() {
        events.retain(|e| domains::matches_target_domain(&e.domain, &cli.domain));
    }

    let from_ts = match cli.from.as_deref() {
        Some(s) => Some(
            chrono::DateTime::parse_from_rfc3339(s)
                .map_err(|e| anyhow::anyhow!("invalid --from timestamp: {e}"))?
                .timestamp_millis(),
        ),
        None => None,
    };

    let out = report::build_report(&events, cli.limit, from_ts);
    match cli.only.as_deref() {
        Some("daily") => println!("{}", serde_json::to_string_pretty(&out.daily)?),
        Some("hourly") => println!("{}", serde_json::to_string_pretty(&out.hourly)?),
        Some("top") => println!("{}", serde_json::to_string_pretty(&out.top_intentions)?),
        Some(other) => anyhow::bail!("unknown section: {other} (expected daily | hourly | top)"),
        None => println!("{}", serde_json::to_string_pretty(&out)?),
    }
    Ok(())
}
