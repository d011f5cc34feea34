use cardiopath::modules;
use cardiopath::pathway::PathwayNode;
use cardiopath::prelude::*;
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Inspect, validate, walk and evaluate chest pain pathways
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the bundled graph pathways and procedural modules
    List,
    /// Validate the bundled pathways, or the given pathway JSON files
    Validate {
        /// Pathway JSON files to check instead of the bundled ones
        paths: Vec<String>,
    },
    /// Print the page labels of a graph pathway
    Index {
        /// Pathway id, e.g. `acute`
        pathway: String,
    },
    /// Print a module's field contract and decision tree
    Show {
        /// Module id, e.g. `no_known_cad`
        module: ModuleId,
    },
    /// Evaluate a module against a JSON input file
    Evaluate {
        module: ModuleId,
        /// Path to a JSON object of answers
        input_path: String,
        /// Print the raw result JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// Walk a graph pathway interactively
    Walk {
        pathway: String,
        /// Start at this node instead of the declared start
        #[arg(long)]
        node: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cardiopath=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::List => run_list(),
        Command::Validate { paths } => run_validate(&paths),
        Command::Index { pathway } => run_index(&pathway),
        Command::Show { module } => run_show(module),
        Command::Evaluate {
            module,
            input_path,
            json,
        } => run_evaluate(module, &input_path, json)?,
        Command::Walk { pathway, node } => run_walk(&pathway, node.as_deref()),
    }
    Ok(())
}

fn load_registry() -> PathwayRegistry {
    PathwayRegistry::builtin()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load bundled pathways: {}", e)))
}

fn run_list() {
    let registry = load_registry();
    println!("Graph pathways:");
    for pathway in registry.iter() {
        println!(
            "  {:<26} {} (v{}, {} nodes)",
            pathway.id(),
            pathway.title(),
            pathway.version(),
            pathway.len()
        );
    }

    println!("\nProcedural modules:");
    for (id, table) in modules::catalog() {
        println!("  {:<26} {} (v{})", id, table.title, table.version);
    }
}

fn run_validate(paths: &[String]) {
    if paths.is_empty() {
        let registry = load_registry();
        for pathway in registry.iter() {
            println!("OK  {} (start: {})", pathway.id(), pathway.start_id());
        }
        return;
    }

    let mut failures = 0;
    for path in paths {
        let json = fs::read_to_string(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to read '{}': {}", path, e)));
        match PathwayRegistry::builder()
            .with_json(&json)
            .and_then(|b| b.build())
        {
            Ok(registry) => {
                for pathway in registry.iter() {
                    println!("OK  {} ({}, start: {})", path, pathway.id(), pathway.start_id());
                }
            }
            Err(e) => {
                failures += 1;
                println!("ERR {}: {}", path, e);
            }
        }
    }

    if failures > 0 {
        exit_with_error(&format!("{} of {} pathway file(s) failed", failures, paths.len()));
    }
}

fn run_index(pathway_id: &str) {
    let registry = load_registry();
    let pathway = registry
        .get(pathway_id)
        .unwrap_or_else(|| exit_with_error(&format!("Unknown pathway '{}'", pathway_id)));

    for page in build_page_index(pathway) {
        let title = pathway.node(&page.node_id).map_or("", |n| n.title.as_str());
        println!("{}  {:<24} {}", page.label, page.node_id, title);
    }
}

fn run_show(module: ModuleId) {
    let table = module.table();
    println!("Fields:");
    for field in table.fields {
        println!("  {:<22} {:<32} {:?}", field.id, field.label, field.kind);
    }
    println!();
    print!("{}", DisplayTable { table });
}

fn run_evaluate(module: ModuleId, input_path: &str, json: bool) -> Result<()> {
    let raw = fs::read_to_string(input_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read input file '{}': {}", input_path, e))
    });
    let input = ModuleInput::from_json(&raw)
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid module input: {}", e)));

    let result = evaluate(module, &input);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", ReportFormatter::format_result(&result));
    }
    Ok(())
}

/// Interactive traversal: numbers pick options, `b` goes back, `r` restarts
/// and `q` quits.
fn run_walk(pathway_id: &str, node: Option<&str>) {
    let registry = load_registry();
    let mut runner = GraphRunner::new(&registry);
    if let RunnerView::UnknownPathway = runner.start(pathway_id, node) {
        exit_with_error(&format!("Unknown pathway '{}'", pathway_id));
    }

    let pages = registry
        .get(pathway_id)
        .map(build_page_index)
        .unwrap_or_default();
    let mut opened = |action: &cardiopath::pathway::NodeAction| {
        println!("\n-> Opening {:?}", action);
    };

    loop {
        let RunnerView::Node {
            node, can_go_back, ..
        } = runner.view()
        else {
            break;
        };
        println!();
        let page = pages.iter().find(|p| p.node_id == node.id);
        print!("{}", ReportFormatter::format_node(node, page));

        let hint = walk_hint(node, can_go_back);
        let answer = prompt_for_input(&hint, None);
        let advance = match answer.as_str() {
            "q" => break,
            "b" => {
                if runner.back() == Back::NothingToGoBack {
                    println!("Nothing to go back to.");
                }
                continue;
            }
            "r" => {
                runner.start(pathway_id, None);
                continue;
            }
            "" => runner.advance(Choice::Continue, &mut opened),
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => runner.advance(Choice::Option(n - 1), &mut opened),
                _ => {
                    println!("Invalid choice.");
                    continue;
                }
            },
        };
        if advance == Advance::NoOp {
            println!("Nothing to do here.");
        }
    }
}

fn walk_hint(node: &PathwayNode, can_go_back: bool) -> String {
    let mut hint = if node.is_terminal() {
        String::from("End of pathway. r = restart")
    } else {
        String::from("Choice (number or enter to continue), r = restart")
    };
    if can_go_back {
        hint.push_str(", b = back");
    }
    hint.push_str(", q = quit");
    hint
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or(String::new(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if io::stdout().flush().is_err() {
        exit_with_error("Failed to flush stdout");
    }

    if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
        // EOF ends the session like `q`.
        return String::from("q");
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
