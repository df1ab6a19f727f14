use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use transportgraph::config::Settings;
use transportgraph::error::CliError;
use transportgraph::generator::{GeneratorConfig, generate};
use transportgraph::render::{format_json, format_text};
use transportgraph::tui::app::App;
use transportgraph::{logging, tui};

#[derive(Parser)]
#[command(
    name = "transportgraph",
    version,
    about = "Random directed graphs for transportation problems"
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a generated graph
    Generate {
        #[command(flatten)]
        graph: GraphArgs,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Browse a generated graph in the terminal
    View {
        #[command(flatten)]
        graph: GraphArgs,
    },
}

#[derive(Args)]
struct GraphArgs {
    #[arg(allow_negative_numbers = true)]
    num_nodes: i64,

    #[arg(allow_negative_numbers = true)]
    num_edges: i64,

    seed: u64,

    /// Supplies are drawn from -N..=N [default: 10]
    #[arg(long, value_name = "N")]
    supply_range: Option<u32>,

    /// Make the last node absorb the remaining supply so the total is zero
    #[arg(long)]
    balance_demand: bool,

    #[arg(long)]
    allow_self_loops: bool,

    /// TOML file with [generator] defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl GraphArgs {
    fn to_config(&self) -> Result<GeneratorConfig, CliError> {
        let mut config = GeneratorConfig::from_signed(self.num_nodes, self.num_edges, self.seed)?;
        if let Some(path) = &self.config {
            config = Settings::load(path)?.apply(config);
        }
        if let Some(supply_range) = self.supply_range {
            config.supply_range = supply_range;
        }
        config.balance_demand |= self.balance_demand;
        config.allow_self_loops |= self.allow_self_loops;
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate { graph, format } => {
            logging::init(cli.verbose);
            let (nodes, edges) = generate(&graph.to_config()?)?;
            match format {
                Format::Text => print!("{}", format_text(&nodes, &edges)),
                Format::Json => println!("{}", format_json(&nodes, &edges)?),
            }
        }
        Command::View { graph } => {
            let app = App::new(graph.to_config()?)?;
            tui::run(app)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_positional_parameters() {
        let cli = Cli::parse_from(["transportgraph", "generate", "6", "8", "42"]);
        let Command::Generate { graph, .. } = cli.command else {
            panic!("expected generate");
        };

        assert_eq!(GeneratorConfig::new(6, 8, 42), graph.to_config().unwrap());
    }

    #[test]
    fn test_negative_counts_are_invalid_parameters() {
        let cli = Cli::parse_from(["transportgraph", "generate", "-3", "2", "1"]);
        let Command::Generate { graph, .. } = cli.command else {
            panic!("expected generate");
        };

        assert!(matches!(graph.to_config(), Err(CliError::Graph(_))));
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "transportgraph",
            "view",
            "4",
            "5",
            "7",
            "--supply-range",
            "3",
            "--balance-demand",
            "--allow-self-loops",
        ]);
        let Command::View { graph } = cli.command else {
            panic!("expected view");
        };
        let config = graph.to_config().unwrap();

        assert_eq!(3, config.supply_range);
        assert!(config.balance_demand);
        assert!(config.allow_self_loops);
    }
}
