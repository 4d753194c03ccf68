use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not open word counts at '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read word counts")]
    Read(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
