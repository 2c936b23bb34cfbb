extern crate rpncalc;

const EXAMPLE: &str = "12 + 2 * ((3 * 4) + (10 / 5))";

#[derive(Default)]
struct Options {
    interactive: bool,
    strict: bool,
    expr: Vec<String>,
}

impl Options {
    fn from_args() -> Options {
        let mut opts = Options::default();
        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "-i" | "--interactive" => opts.interactive = true,
                "--strict" => opts.strict = true,
                _ => opts.expr.push(arg),
            }
        }
        opts
    }

    fn paren_mode(&self) -> rpncalc::ParenMode {
        if self.strict { rpncalc::ParenMode::Strict } else { rpncalc::ParenMode::Lenient }
    }

    fn eval_mode(&self) -> rpncalc::EvalMode {
        if self.strict { rpncalc::EvalMode::Strict } else { rpncalc::EvalMode::Lenient }
    }
}

mod repl {
    use super::Options;
    use log::error;
    use rpncalc::ShuntingParser;

    // one shot evaluation, errors end the program
    pub fn evalexpr(opts: &Options, input: &str) -> Result<(), String> {
        let calc = rpncalc::calculate(input, opts.paren_mode(), opts.eval_mode())
            .map_err(|e| e.to_string())?;
        println!("Infix Expression: {}", calc.infix);
        println!("RPN Expression: {}", calc.rpn);
        println!("Result: {}", calc.value);
        Ok(())
    }

    pub fn parse_statement(opts: &Options, show_infix: bool, input: &str) {
        let rpn = match ShuntingParser::parse_str_checked(input, opts.paren_mode()) {
            Err(e) => return println!("Parse error: {}", e),
            Ok(rpn) => rpn,
        };
        if show_infix {
            match rpn.to_infix() {
                Some(infix) => println!("{}", infix),
                None => error!("can't render '{}' as infix", rpn),
            }
        }
        match rpncalc::RPNEvaluator::new(opts.eval_mode()).eval(&rpn) {
            Err(e) => println!("Eval error: {}", e),
            Ok(result) => println!("{} = {}", rpn, result),
        }
    }
}

fn interactive(opts: &Options) -> Result<(), String> {
    use rustyline::error::ReadlineError;
    let histpath = dirs::home_dir().map(|h| h.join(".rpncalc_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    let mut show_infix = false;
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match line.trim() {
                    "" => continue,
                    ":infix" => show_infix = !show_infix,
                    input => repl::parse_statement(opts, show_infix, input),
                }
            }
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    let opts = Options::from_args();
    let outcome = if opts.interactive {
        interactive(&opts)
    } else if opts.expr.is_empty() {
        repl::evalexpr(&opts, EXAMPLE)
    } else {
        let input = opts.expr.join(" ");
        repl::evalexpr(&opts, &input)
    };
    if let Err(e) = outcome {
        println!("{}", e);
        std::process::exit(1);
    }
}
