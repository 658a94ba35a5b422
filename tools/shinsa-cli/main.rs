use clap::Parser;
use log::{info, warn};
use shinsa::prelude::*;
use std::io::{self, Write};
use std::sync::Arc;

/// Run a dynamic intake questionnaire in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow definition JSON file
    flow_path: String,

    /// Where the running session is saved between runs
    #[arg(short, long, default_value = "shinsa-session.json")]
    state: String,

    /// Optional navigator configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Print the eligible questions for the saved session and exit
    #[arg(long)]
    eligible: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let definition = FlowDefinition::from_file(&cli.flow_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load flow: {}", e)));
    let graph = Arc::new(FlowGraph::new(definition));
    info!(
        "Loaded flow '{}' with {} questions",
        cli.flow_path,
        graph.len()
    );
    let config = match &cli.config {
        Some(path) => NavigatorConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => NavigatorConfig::default(),
    };

    let store = JsonFileStore::new(&cli.state);
    let mut navigator = open_session(graph, config, &store);

    if cli.eligible {
        print_eligible(&navigator);
        return;
    }

    run_session(&mut navigator, &store);
}

/// Resumes the stored session if there is a usable one, otherwise starts fresh.
fn open_session(graph: Arc<FlowGraph>, config: NavigatorConfig, store: &JsonFileStore) -> Navigator {
    let fresh = |graph: Arc<FlowGraph>, config: NavigatorConfig| {
        Navigator::new(graph, config)
            .unwrap_or_else(|e| exit_with_error(&format!("Cannot start session: {}", e)))
    };

    match store.load() {
        Ok(Some(state)) => {
            let navigator = Navigator::resume(graph.clone(), config.clone(), state);
            if navigator.current_node().is_ok() {
                info!("Resumed session from '{}'", store.path().display());
                return navigator;
            }
            println!("The saved session no longer matches this flow. Starting over.");
            fresh(graph, config)
        }
        Ok(None) => fresh(graph, config),
        Err(e) => {
            warn!("Ignoring unreadable session file: {}", e);
            fresh(graph, config)
        }
    }
}

fn run_session(navigator: &mut Navigator, store: &JsonFileStore) {
    println!("--- Shinsa Intake ---");
    println!("Commands: :back, :edit <id>, :restart, :agent, :why, :quit\n");

    loop {
        let keep_going = match navigator.view() {
            ViewState::Wizard => wizard_step(navigator),
            ViewState::Review => review_step(navigator),
            ViewState::AgentExit => agent_exit_step(navigator),
            ViewState::ThankYou => {
                println!("\nYou're all set! We have received your information.");
                if let Err(e) = store.clear() {
                    warn!("Could not clear session file: {}", e);
                }
                return;
            }
        };

        if let Err(e) = store.save(navigator.state()) {
            warn!("Could not save session: {}", e);
        }
        if !keep_going {
            println!("Session saved to '{}'.", store.path().display());
            return;
        }
    }
}

/// Asks the current question. Returns `false` when the user quits.
fn wizard_step(navigator: &mut Navigator) -> bool {
    let node = match navigator.current_node() {
        Ok(node) => node.clone(),
        Err(e) => {
            println!("{}. Starting over.", e);
            navigator.restart();
            return true;
        }
    };

    let progress = navigator.progress();
    let position = progress.position.map_or("?".to_string(), |p| p.to_string());
    println!("\n[{}/{}] {}", position, progress.total, node.section);
    println!("{}", node.question);
    if let Some(helper) = &node.helper_text {
        println!("  {}", helper);
    }
    if !node.options.is_empty() {
        println!("  Options: {}", node.options.join(", "));
    } else if let Some(placeholder) = &node.placeholder {
        println!("  e.g. {}", placeholder);
    }

    let previous = navigator.previous_answer().map(str::to_string);
    let line = prompt_for_input("Answer", previous.as_deref());

    match parse_command(&line) {
        Some(("quit", _)) => return false,
        Some(("back", _)) => report(navigator.go_back()),
        Some(("edit", target)) => report(navigator.edit_answer(target)),
        Some(("restart", _)) => navigator.restart(),
        Some(("agent", _)) => report(navigator.force_agent_exit()),
        Some(("why", _)) => explain(navigator, &node.id),
        Some((other, _)) => println!("Unknown command ':{}'", other),
        None if line.is_empty() => println!("Please enter an answer."),
        None => match navigator.submit_answer(&line) {
            Ok(SubmitOutcome::HandedToAgent) => {
                println!("Let's connect you with an expert.");
            }
            Ok(_) => {}
            Err(e) => println!("{}", e),
        },
    }
    true
}

fn review_step(navigator: &mut Navigator) -> bool {
    println!("\n--- Review your information ---");
    for item in navigator.review_items() {
        println!(
            "Question {} [{}]: {}",
            item.number, item.record.node_id, item.record.question
        );
        println!("  -> {}", item.record.answer);
    }

    let line = prompt_for_input("Type :submit, :edit <id>, :back or :quit", None);
    match parse_command(&line) {
        Some(("submit", _)) => report(navigator.submit_review()),
        Some(("edit", target)) => report(navigator.edit_answer(target)),
        Some(("back", _)) => report(navigator.go_back()),
        Some(("restart", _)) => navigator.restart(),
        Some(("agent", _)) => report(navigator.force_agent_exit()),
        Some(("quit", _)) => return false,
        _ => println!("Please enter one of the listed commands."),
    }
    true
}

fn agent_exit_step(navigator: &mut Navigator) -> bool {
    println!("\nBased on your responses, a licensed representative will reach out.");
    let line = prompt_for_input(
        "What is the best way and time to reach you? (:restart to start over)",
        None,
    );
    match parse_command(&line) {
        Some(("restart", _)) => navigator.restart(),
        Some(("quit", _)) => return false,
        _ => report(navigator.finish_agent_exit(&line)),
    }
    true
}

fn explain(navigator: &Navigator, node_id: &str) {
    match navigator
        .graph()
        .resolver()
        .explain(node_id, &navigator.state().answers)
    {
        Some(trace) => println!("Asked because: {}", TraceFormatter::format_trace(&trace)),
        None => println!("This question is always asked."),
    }
}

fn print_eligible(navigator: &Navigator) {
    let progress = navigator.progress();
    println!("Eligible questions ({}):", progress.total);
    for id in navigator.eligible_ids() {
        let marker = if id == navigator.state().current_node_id { ">" } else { " " };
        let question = navigator
            .graph()
            .node_by_id(id)
            .map_or("", |n| n.question.as_str());
        println!("{} {:<24} {}", marker, id, question);
    }
    println!("View: {}, {}% complete", navigator.view(), progress.percent());
}

/// Splits `:name argument` into its parts.
fn parse_command(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim().strip_prefix(':')?;
    let (name, argument) = rest.split_once(' ').unwrap_or((rest, ""));
    Some((name, argument.trim()))
}

fn report(result: Result<(), NavigationError>) {
    if let Err(e) = result {
        println!("{}", e);
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to write prompt: {}", e));
    }

    match io::stdin().read_line(&mut line) {
        Ok(0) => ":quit".to_string(),
        Ok(_) => {
            let trimmed = line.trim().to_string();
            if trimmed.is_empty() {
                default.unwrap_or("").to_string()
            } else {
                trimmed
            }
        }
        Err(e) => exit_with_error(&format!("Failed to read input: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
