use std::error::Error;
use std::io::{self, BufRead, Write};

use anomaly_core::{parse_int_list, solve, GenerateOpts, Solution};
use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "anomaly", about = "Anomaly-free integer set generator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an anomaly-free set from two integer sequences.
    Solve(SolveArgs),
}

#[derive(ClapArgs, Debug)]
struct SolveArgs {
    /// First integer sequence, e.g. "[-1, 1]". Prompted on stdin when absent.
    #[arg(long)]
    l: Option<String>,
    /// Second integer sequence, e.g. "[4, -2]". Prompted on stdin when absent.
    #[arg(long)]
    k: Option<String>,
    /// Keep the construction order instead of sorting by absolute value.
    #[arg(long)]
    unsorted: bool,
    /// Sort by descending absolute value.
    #[arg(long)]
    descending: bool,
    /// Print the full vector and gcd alongside the simplified form.
    #[arg(long)]
    full: bool,
    /// Emit the solution record as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve(args) => run_solve(args),
    }
}

fn run_solve(args: SolveArgs) -> Result<(), Box<dyn Error>> {
    let l = read_sequence(args.l.as_deref(), "l")?;
    let k = read_sequence(args.k.as_deref(), "k")?;
    let opts = GenerateOpts {
        sort: !args.unsorted,
        descending: args.descending,
    };

    let solution = solve(&l, &k, &opts)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        print_plain(&solution, args.full);
    }
    Ok(())
}

fn read_sequence(arg: Option<&str>, name: &str) -> Result<Vec<i64>, Box<dyn Error>> {
    let text = match arg {
        Some(text) => text.to_string(),
        None => prompt(name)?,
    };
    Ok(parse_int_list(&text)?)
}

fn prompt(name: &str) -> Result<String, Box<dyn Error>> {
    print!("List of integers -> {name}=");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn print_plain(solution: &Solution, full: bool) {
    if full {
        println!("vector     = {}", format_vector(&solution.vector));
        println!("gcd        = {}", solution.gcd);
        println!("simplified = {}", format_vector(&solution.simplified));
    } else {
        println!("{}", format_vector(&solution.simplified));
    }
}

fn format_vector(values: &[i128]) -> String {
    let rendered: Vec<String> = values.iter().map(|value| value.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}
