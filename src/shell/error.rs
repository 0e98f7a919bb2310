use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("cannot split command line: {command}")]
    Tokenize { command: String },

    #[error("empty command line")]
    EmptyCommand,

    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command output is not valid utf-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}
