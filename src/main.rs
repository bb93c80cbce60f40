use std::env;
use std::fs;
use std::process;

use macchiato::config::Config;
use macchiato::debug_println;
use macchiato::error::{ErrorFormatter, MacchiatoError};
use macchiato::interpreter::Interpreter;
use macchiato::lexer::Lexer;
use macchiato::parser::Parser;
use macchiato::resolver::Resolver;
use macchiato::type_checker::TypeChecker;

fn main() {
    let mut dump_ast = false;
    let mut emit_json = false;
    let mut input_file = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--dump-ast" => dump_ast = true,
            "--emit-json" => emit_json = true,
            "--debug" => macchiato::debug::enable_debug(),
            _ if arg.starts_with("--") => {
                eprintln!("Unknown option '{}'", arg);
                usage_and_exit();
            }
            _ => {
                if input_file.replace(arg).is_some() {
                    usage_and_exit();
                }
            }
        }
    }

    let input_file = match input_file {
        Some(input_file) => input_file,
        None => usage_and_exit(),
    };

    let source = match fs::read_to_string(&input_file) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("Error reading file '{}': {}", input_file, err);
            process::exit(1);
        }
    };

    let config = Config::default();

    let tokens = match Lexer::with_config(source.clone(), config.clone()).tokenize() {
        Ok(tokens) => tokens,
        Err(err) => {
            report(&err, &source, &input_file, config.use_color);
            process::exit(1);
        }
    };
    debug_println!("lexed {} tokens", tokens.len());

    let mut parser = Parser::new(tokens);
    let (program, errors) = parser.parse_with_recovery();
    if errors.has_errors() {
        for err in errors.errors() {
            report(err, &source, &input_file, config.use_color);
        }
        process::exit(1);
    }
    debug_println!("parsed {} statement(s)", program.statements.len());

    if dump_ast {
        print!("{}", program);
        return;
    }

    if emit_json {
        match serde_json::to_string_pretty(&program) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error serializing program: {}", err);
                process::exit(1);
            }
        }
        return;
    }

    if let Err(errors) = Resolver::new().resolve_program(&program) {
        for err in errors {
            report(&err.into(), &source, &input_file, config.use_color);
        }
        process::exit(1);
    }

    let mut checker = TypeChecker::new();
    if let Err(errors) = checker.check_program(&program) {
        for err in errors {
            report(&err.into(), &source, &input_file, config.use_color);
        }
        process::exit(1);
    }

    match Interpreter::new().run(&program) {
        Ok(values) => {
            for value in values {
                println!("{}", value);
            }
        }
        Err(err) => {
            report(&err.into(), &source, &input_file, config.use_color);
            process::exit(1);
        }
    }
}

fn report(error: &MacchiatoError, source: &str, filename: &str, use_color: bool) {
    eprintln!(
        "{}",
        ErrorFormatter::new(error, source)
            .with_filename(filename)
            .with_color(use_color)
            .format()
    );
}

fn usage_and_exit() -> ! {
    eprintln!("Usage: macchiato [--dump-ast | --emit-json] [--debug] <input.mac>");
    process::exit(1)
}
