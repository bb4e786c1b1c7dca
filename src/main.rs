use basil::{
    cli::{Args, Commands},
    error::{Error, Result},
    tokenizer::{Token, TokenKind, Tokenizer},
};
use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};

fn scan(file: &Path) -> Result<(Vec<Token>, usize)> {
    let mut tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize(file).ok_or_else(|| Error::Scan {
        message: format!("unable to open file '{}'", file.display()),
    })?;
    Ok((tokens, tokenizer.error_count()))
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        match token.kind {
            TokenKind::Newline => println!("{:?}", token.kind),
            TokenKind::Error => println!("[error] {}", token.lexeme),
            _ => print!("{:?} ", token.kind),
        }
    }
    println!();
}

fn dump_tokens(file: PathBuf) -> Result<()> {
    let (tokens, errors) = scan(&file)?;
    print_tokens(&tokens);
    match errors {
        0 => Ok(()),
        n => Err(Error::Scan {
            message: format!("{} error(s) while scanning '{}'", n, file.display()),
        }),
    }
}

fn check_file(file: PathBuf) -> Result<()> {
    let (tokens, errors) = scan(&file)?;
    match errors {
        0 => {
            println!("ok: {} tokens", tokens.len());
            Ok(())
        }
        n => Err(Error::Scan {
            message: format!("{} error(s) while scanning '{}'", n, file.display()),
        }),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Commands::Tokens { file } => {
            info!("TOKEN MODE");
            debug!("file: {:?}", file);

            dump_tokens(file)
                .inspect_err(|err| {
                    eprintln!("{}", err);
                })
                .ok();
        }
        Commands::Check { file } => {
            info!("CHECK MODE");
            debug!("file: {:?}", file);

            check_file(file)
                .inspect_err(|err| {
                    eprintln!("{}", err);
                })
                .ok();
        }
    }
    Ok(())
}
