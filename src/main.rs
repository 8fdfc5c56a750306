use clap::Parser;
use evalyard::{ExpressionBuilder, Number};

/// evalyard evaluates mathematical expressions with variables, implicit
/// multiplication and a rich set of built-in functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a variable, e.g. `-v x=2` or `-v radius=1.5`. Repeatable.
    #[arg(short = 'v', long = "var", value_name = "NAME=VALUE")]
    variables: Vec<String>,

    /// Turns off implicit multiplication, so `2x` is rejected instead of
    /// being read as `2*x`.
    #[arg(long)]
    no_implicit_multiplication: bool,

    expression: String,
}

fn parse_binding(binding: &str) -> Result<(String, Number), String> {
    let Some((name, value)) = binding.split_once('=') else {
        return Err(format!("Invalid variable binding '{binding}'. Expected NAME=VALUE."));
    };

    let number = value.parse::<i64>().map(Number::Integer).or_else(|_| {
                                                              value.parse::<f64>()
                                                                   .map(Number::Real)
                                                          });
    match number {
        Ok(number) => Ok((name.to_string(), number)),
        Err(_) => Err(format!("Invalid numeric value '{value}' for variable '{name}'.")),
    }
}

fn main() {
    let args = Args::parse();

    let mut bindings = Vec::new();
    for binding in &args.variables {
        match parse_binding(binding) {
            Ok(parsed) => bindings.push(parsed),
            Err(message) => {
                eprintln!("{message}");
                std::process::exit(1);
            },
        }
    }

    let mut builder = ExpressionBuilder::new(&args.expression)
        .implicit_multiplication(!args.no_implicit_multiplication);
    for (name, _) in &bindings {
        builder = builder.variable(name);
    }

    let mut expression = builder.build().unwrap_or_else(|e| {
                                            eprintln!("{e}");
                                            std::process::exit(1);
                                        });
    if let Err(e) = expression.set_variables(bindings) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match expression.evaluate() {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
