use ariadne::Source;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use sym_algebra::rationalize::{denominator, numerator};
use sym_algebra::{rationalize, Ctxt, Error, Eval, Expr};

/// An expression to rationalize, and the bindings to check it at.
struct Scenario {
    expr: Expr,
    bindings: Vec<(&'static str, i32)>,
}

/// Reads the log level from the command line: `-v` for debug, `-vv` (or more) for trace.
fn log_level() -> LevelFilter {
    let verbosity = std::env::args()
        .skip(1)
        .filter(|arg| arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v'))
        .map(|arg| arg.len() - 1)
        .sum::<usize>();

    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn scenarios() -> Vec<Scenario> {
    let sym = |name: &str| Expr::symbol(name);
    let one = || Expr::int(1);

    vec![
        Scenario {
            expr: one() / sym("x") + one() / sym("y"),
            bindings: vec![("x", 2), ("y", 3)],
        },
        Scenario {
            expr: Expr::int(2),
            bindings: vec![],
        },
        Scenario {
            expr: sym("a") / sym("b") + sym("c") / sym("d") + sym("e") / sym("f"),
            bindings: vec![("a", 1), ("b", 2), ("c", 1), ("d", 3), ("e", 1), ("f", 6)],
        },
        Scenario {
            expr: (sym("x") + one()).pow(-1) + sym("x"),
            bindings: vec![("x", 2)],
        },
        Scenario {
            expr: one() / (sym("x") - sym("x")),
            bindings: vec![("x", 2)],
        },
    ]
}

/// Rationalizes the scenario's expression and evaluates both forms at its bindings.
fn run(scenario: &Scenario) -> Result<(), Error> {
    let rational = rationalize(&scenario.expr)?;
    println!("  rationalized: {}", rational);
    println!("  numerator:    {}", numerator(&rational));
    println!("  denominator:  {}", denominator(&rational));

    let mut ctxt = Ctxt::new();
    for (name, value) in &scenario.bindings {
        ctxt.add_var(name, *value);
    }

    let before = scenario.expr.eval(&ctxt)?;
    let after = rational.eval(&ctxt)?;
    println!("  value:        {} (rationalized: {})", before, after);
    Ok(())
}

fn main() {
    if let Err(err) = TermLogger::init(log_level(), Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("could not initialize logging: {}", err);
    }

    for (i, scenario) in scenarios().iter().enumerate() {
        let input = scenario.expr.to_string();
        info!("running scenario {}", i + 1);
        println!("{}: {}", i + 1, input);

        if let Err(err) = run(scenario) {
            if let Err(io_err) = err.build_report("input").eprint(("input", Source::from(&input))) {
                eprintln!("{} ({})", err, io_err);
            }
        }
    }
}
