// teenyc: BASIC to C compiler

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use teenyc::compiler::emitter::Emitter;
use teenyc::compiler::lexer::Lexer;
use teenyc::compiler::parse::Parser;
use teenyc::ui::App;

/// Command-line options
struct Options {
    program: String,
    input: PathBuf,
    output: Option<PathBuf>,
    tokens: bool,
    view: bool,
}

impl Options {
    /// Parse `std::env::args()`, exiting with usage on error.
    fn parse() -> Self {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "teenyc".to_string());

        let mut input = None;
        let mut output = None;
        let mut tokens = false;
        let mut view = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-o" | "--output" => match args.next() {
                    Some(path) => output = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("Error: missing file name after '{}'", arg);
                        usage(&program);
                    }
                },
                "-t" | "--tokens" => tokens = true,
                "-v" | "--view" => view = true,
                "-h" | "--help" => usage(&program),
                "-V" | "--version" => {
                    println!("{} {}", program, env!("CARGO_PKG_VERSION"));
                    std::process::exit(0);
                }
                flag if flag.starts_with('-') => {
                    eprintln!("Error: unknown option '{}'", flag);
                    usage(&program);
                }
                path => {
                    if input.is_some() {
                        eprintln!("Error: more than one input file given");
                        usage(&program);
                    }
                    input = Some(PathBuf::from(path));
                }
            }
        }

        let Some(input) = input else {
            eprintln!("Error: No input file provided");
            usage(&program);
        };

        Options {
            program,
            input,
            output,
            tokens,
            view,
        }
    }

    /// `-o` if given, otherwise the input path with a `.c` extension.
    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("c"))
    }
}

fn usage(program: &str) -> ! {
    eprintln!();
    eprintln!("Usage: {} [options] <file.teeny>", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <path>   write C to <path> (default: input with .c extension)");
    eprintln!("  -t, --tokens          print the token stream and stop");
    eprintln!("  -v, --view            show source and generated C in a terminal viewer");
    eprintln!("  -h, --help            print this summary");
    eprintln!("  -V, --version         show version");
    std::process::exit(1);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::parse();

    if !Path::new(&options.input).exists() {
        eprintln!("Error: File '{}' not found", options.input.display());
        usage(&options.program);
    }

    let source = fs::read_to_string(&options.input)?;

    if options.tokens {
        return print_tokens(&source);
    }

    if options.view {
        return run_viewer(source);
    }

    eprintln!("Compiling {}...", options.input.display());

    let mut emitter = Emitter::new();
    let result = Parser::new(Lexer::new(&source), &mut emitter).and_then(|mut parser| {
        parser.program()?;
        Ok((
            parser.declared_symbols().len(),
            parser.declared_labels().len(),
        ))
    });

    let (variables, labels) = match result {
        Ok(counts) => counts,
        Err(e) => {
            eprintln!("Error. {}", e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "Compiled successfully. Declared {} variable(s), {} label(s).",
        variables, labels
    );

    let output_path = options.output_path();
    fs::write(&output_path, emitter.finalize())?;
    eprintln!("Wrote {}", output_path.display());

    Ok(())
}

/// Dump every token, one per line, up to and including EOF.
fn print_tokens(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    match Lexer::new(source).tokenize() {
        Ok(tokens) => {
            for token in tokens {
                println!("{}", token);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error. Lexing error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_viewer(source: String) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
