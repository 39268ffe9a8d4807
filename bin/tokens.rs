//! Print the tokens in a file.

use std::path::PathBuf;

use diagnostic::FileInfo;
use parser::lexer::{Lexer, TokenKind};

use crate::{input::read_source, Args, Status};

/// Print each token in a file as `line:column KIND "text"`
#[derive(clap::Parser)]
pub struct Tokens {
    filename: PathBuf,
}

impl Tokens {
    pub(crate) fn run(&self, args: &Args) -> Status {
        let source = match read_source(&self.filename) {
            Ok(source) => source,
            Err(status) => return status,
        };

        let name = self.filename.display().to_string();
        let mut lexer = Lexer::new(FileInfo::new(name), &source);

        loop {
            let token = lexer.scan();
            if token.kind() == TokenKind::Eof {
                break;
            }

            let position = lexer.file().position(token.pos());
            println!(
                "{}:{} {} {:?}",
                position.line(),
                position.column(),
                token.kind().name(),
                token.body()
            );
        }

        let (_, errors) = lexer.into_parts();
        args.emit(&errors, &source)
    }
}
