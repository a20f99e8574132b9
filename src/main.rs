use anyhow::{bail, Error};
use clap::Parser;
use keypad::keys::{parse_keys, Key};
use keypad::{Config, ResultText, Session};
use std::io::BufRead;
use std::io::Write;
use std::time::Duration;

/// Keypad calculator. Keys: digits . + - * / % ( ), `p` parentheses,
/// `<` backspace, `c` clear, `=` evaluate.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Fractional digits for fixed-point results
    #[arg(long, default_value_t = keypad::format::DEFAULT_PRECISION)]
    precision: usize,

    /// Quiet period in milliseconds before the live preview refreshes
    #[arg(long, default_value_t = 140)]
    debounce_ms: u64,

    /// Keystrokes to evaluate; reads lines from stdin when empty
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    keys: Vec<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args = Args::parse();
    let config = Config {
        precision: args.precision,
        debounce: Duration::from_millis(args.debounce_ms),
        ..Config::default()
    };
    let mut session = Session::new(config);

    let stdout = std::io::stdout();
    let lock = stdout.lock();
    let mut w = std::io::BufWriter::new(lock);

    if !args.keys.is_empty() {
        for arg in &args.keys {
            for key in parse_keys(arg)? {
                key.apply(&mut session);
            }
        }

        let screen = Key::Equals.apply(&mut session);
        writeln!(&mut w, "{}", screen.result)?;
        w.flush()?;
        if let ResultText::Error(kind) = session.preview() {
            bail!("Cannot evaluate {:?}: {:?}", session.buffer(), kind);
        }
    } else {
        let stdin = std::io::stdin();
        let reader = std::io::BufReader::new(stdin);
        let is_interactive = atty::is(atty::Stream::Stdin);

        if is_interactive {
            write!(&mut w, ">>> ")?;
            w.flush()?;
        }

        for line in reader.lines() {
            match parse_keys(&line?) {
                Ok(keys) => {
                    for key in keys {
                        key.apply(&mut session);
                    }
                    let screen = session.settle();
                    writeln!(&mut w, "{} = {}", screen.expression, screen.result)?;
                }
                Err(e) => writeln!(&mut w, "{}", e)?,
            }

            if is_interactive {
                write!(&mut w, ">>> ")?;
            }
            w.flush()?;
        }
    }
    w.flush()?;

    Ok(())
}
