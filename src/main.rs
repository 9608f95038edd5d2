use std::fs;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use infix_calc::Lexer;
use miette::IntoDiagnostic;
use miette::NamedSource;
use miette::WrapErr;

const DEMO_EXPRESSION: &str = "2+2*2";

#[derive(Parser, Debug)]
#[command(version, about = "Evaluates infix arithmetic expressions")]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the tokens of an expression, one per line.
    Tokenize { expression: String },
    /// Evaluate a single expression.
    Eval { expression: String },
    /// Evaluate every non-blank line of a file.
    Run { filename: PathBuf },
}

fn evaluate(name: &str, expression: &str) -> miette::Result<f64> {
    infix_calc::evaluate(expression).map_err(|e| {
        miette::Report::new(e).with_source_code(NamedSource::new(name, expression.to_string()))
    })
}

fn main() -> miette::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match args.command {
        None => {
            let result = evaluate("<demo>", DEMO_EXPRESSION)?;
            println!("Result: {result}");
        }
        Some(Commands::Tokenize { expression }) => {
            for token in Lexer::new(&expression) {
                println!("{token}");
            }
        }
        Some(Commands::Eval { expression }) => {
            let result = evaluate("<input>", &expression)?;
            println!("Result: {result}");
        }
        Some(Commands::Run { filename }) => {
            let file_contents = fs::read_to_string(&filename)
                .into_diagnostic()
                .wrap_err_with(|| format!("reading `{}` failed", filename.display()))?;

            for (index, line) in file_contents.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let name = format!("{}:{}", filename.display(), index + 1);
                let result = evaluate(&name, line)?;
                println!("{} = {result}", line.trim());
            }
        }
    }
    Ok(())
}
