#![allow(non_snake_case)]
use RustedComputor::Utils::config::ComputorConfig;
use RustedComputor::Utils::logger::init_logger;
use RustedComputor::Utils::report::coefficient_table;
use RustedComputor::polynomial::equation::Equation;
use RustedComputor::polynomial::errors::ComputorError;
use log::info;
use std::io::{self, BufRead, Write};
use std::process;

const USAGE: &str = "usage: RustedComputor [--config <file>] [--loglevel <debug|info|warn|error|off>] \"<equation>\"\n\
example: RustedComputor \"5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0\"";

/// command line: an optional equation and options
struct CliArgs {
    equation: Option<String>,
    config_path: Option<String>,
    loglevel: Option<String>,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs {
        equation: None,
        config_path: None,
        loglevel: None,
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or("--config needs a file name")?;
                cli.config_path = Some(path.clone());
            }
            "--loglevel" => {
                let level = iter.next().ok_or("--loglevel needs a level")?;
                cli.loglevel = Some(level.clone());
            }
            _ if cli.equation.is_none() => cli.equation = Some(arg.clone()),
            _ => return Err("Wrong arguments".to_string()),
        }
    }
    Ok(cli)
}

/// asks for the equation when it is not given on the command line
fn read_equation_from_prompt() -> Result<String, ComputorError> {
    print!("Enter an equation: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn run(cli: CliArgs) -> Result<(), ComputorError> {
    let mut config = match &cli.config_path {
        Some(path) => ComputorConfig::from_file(path)?,
        None => ComputorConfig::default(),
    };
    if let Some(level) = cli.loglevel {
        config.loglevel = Some(level);
    }
    init_logger(config.loglevel.as_deref(), config.log_to_file)?;

    let input = match cli.equation {
        Some(equation) => equation,
        None => read_equation_from_prompt()?,
    };

    let equation = Equation::parse(&input)?;
    println!("Input expression: {}", equation.input);
    info!("\n{}", coefficient_table(&equation.coefficients));
    println!("Reduced form: {}", equation.reduced_form(&config));
    println!("Polynomial degree: {}", equation.degree_str());

    let solution = equation.solve(&config)?;
    println!("{}", solution.classification.message());
    match solution.formatted_roots(&config).as_slice() {
        [x] => println!("x = {}", x),
        [x1, x2] => println!("x1 = {}, x2 = {}", x1, x2),
        _ => {}
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{}\n{}", msg, USAGE);
            process::exit(1);
        }
    };
    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        process::exit(e.exit_code());
    }
}
