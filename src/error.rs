use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid key binding: {0}")]
    InvalidKeyBinding(String),

    #[error("No standard color for \"{0}\" (pass --standard or set standard_colors in config)")]
    MissingStandardColor(String),
}
