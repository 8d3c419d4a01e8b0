//! Entrypoint for CLI
mod error;

use std::{
    env,
    error::Error,
    fs,
    io::{self, BufRead, Write},
};

use itertools::Itertools;
use log::{error, info, LevelFilter};
use stackc::{prelude::*, IMPL_VERSION};

use self::error::{AppError, ErrorKind, EX_USAGE};

static USAGE: &str = r#"
usage: stackc [OPTIONS] [EXPR...]
       stackc [OPTIONS] -f FILE

Compiles integer arithmetic into stack machine code. Without an
expression or a file, an interactive session is started.

options:
    -f FILE       Compile the contents of FILE
    --tokens      Print the token table before compiling
    --ast         Print the syntax tree before generating code
    -h, --help    Print this message

environment:
    RUST_LOG      Log level filter (default: warn)

examples:
    stackc 10 + 2 '*' 3
    stackc --ast -f expr.txt
    stackc
"#;

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let (cmd, conf) = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("stackc: {message}");
            print_usage();
            std::process::exit(EX_USAGE)
        }
    };

    let result = match cmd {
        Cmd::Help => {
            print_usage();
            Ok(())
        }
        Cmd::Expr { source } => run_once(&source, conf),
        Cmd::File { filepath } => run_file(&filepath, conf),
        Cmd::Repl => run_repl(conf),
    };

    if let Err(err) = result {
        // Compile errors are logged where they are reported.
        if !matches!(err.kind, ErrorKind::Compile(_)) {
            error!("{err}");
        }
        std::process::exit(err.exit_code());
    }

    Ok(())
}

fn run_once(source: &str, conf: Conf) -> Result<(), AppError> {
    info!("compiling expression");

    match compile(source, conf) {
        Ok(code) => {
            write_code(&mut io::stdout().lock(), &code)?;
            Ok(())
        }
        Err(err) => {
            report(&err, source);
            error!("compilation failed\n{err}");
            // Exit process with error
            Err(err.into())
        }
    }
}

fn run_file(filepath: &str, conf: Conf) -> Result<(), AppError> {
    info!("compiling file {filepath}");

    let source = fs::read_to_string(filepath).map_err(|err| AppError::input(filepath, err))?;
    run_once(&source, conf)
}

fn run_repl(conf: Conf) -> Result<(), AppError> {
    info!("starting interactive session");

    println!("stackc v{IMPL_VERSION}");
    println!("Enter an expression (eg. 10 + 2 * 3), or 'quit' to leave.");

    repl_session(io::stdin().lock(), &mut io::stdout(), conf)?;

    info!("leaving interactive session");

    Ok(())
}

/// Compile one line at a time until a quit word or the end of input.
fn repl_session(mut input: impl BufRead, out: &mut impl Write, conf: Conf) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(out, ">>> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input (Ctrl+D)
            writeln!(out)?;
            return Ok(());
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if is_quit(text) {
            return Ok(());
        }

        // A bad line doesn't end the session.
        match compile(text, conf) {
            Ok(code) => write_code(out, &code)?,
            Err(err) => report(&err, text),
        }
    }
}

/// Run the pipeline stage by stage, so intermediate
/// results can be shown on request.
fn compile(source: &str, conf: Conf) -> StackResult<Vec<Instruction>> {
    if conf.tokens {
        print_tokens(source)?;
    }

    let tree = Parser::from_source(source)?.parse()?;

    if conf.ast {
        println!("{}", AstPrinter::new().print(&tree));
    }

    Ok(CodeGen::new().generate(&tree))
}

fn print_tokens(source: &str) -> StackResult<()> {
    println!("offset | len | token      | fragment ");

    for result in Lexer::new(source) {
        let token = result?;
        let offset = token.span.index;
        let len = token.span.size;
        let kind = format!("{:?}", token.kind); // cannot format debug print {:?} into columns

        match token.kind {
            TokenKind::EndOfInput => println!("{offset:7}:{len: <3} {kind: <12}"),
            _ => {
                let fragment = token.span.fragment(source);
                println!("{offset:7}:{len: <3} {kind: <12} \"{fragment}\"")
            }
        }
    }

    Ok(())
}

fn write_code(out: &mut impl Write, code: &[Instruction]) -> io::Result<()> {
    for instr in code {
        writeln!(out, "{instr}")?;
    }
    Ok(())
}

fn report(err: &Diagnostic, source: &str) {
    eprintln!("{}", err.kind);
    eprintln!("{}", err.render(source));
}

fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit")
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(Cmd, Conf), String> {
    let mut conf = Conf::default();
    let mut words = vec![];
    let mut filepath = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok((Cmd::Help, conf)),
            "--tokens" => conf.tokens = true,
            "--ast" => conf.ast = true,
            "-f" => filepath = Some(consume_arg(&mut args).ok_or("missing FILE after -f")?),
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            _ => words.push(arg),
        }
    }

    let cmd = match (filepath, words.is_empty()) {
        (Some(_), false) => return Err("an expression can't be combined with -f".to_owned()),
        (Some(filepath), true) => Cmd::File { filepath },
        (None, false) => Cmd::Expr {
            source: words.iter().join(" "),
        },
        (None, true) => Cmd::Repl,
    };

    Ok((cmd, conf))
}

/// Consumes the next argument.
fn consume_arg(args: &mut impl Iterator<Item = String>) -> Option<String> {
    args.next()
}

fn print_usage() {
    println!("stackc v{IMPL_VERSION}");
    println!("{USAGE}");
}

#[derive(Debug, PartialEq, Eq)]
enum Cmd {
    Help,
    /// Compile the command line arguments
    Expr { source: String },
    /// Compile file
    File { filepath: String },
    /// Interactive session
    Repl,
}

/// Display options.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Conf {
    tokens: bool,
    ast: bool,
}
